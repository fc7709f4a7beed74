use thiserror::Error;

/// Failures surfaced by [`crate::PathRenderer::render`].
///
/// Both variants are programmer or configuration errors, not transient
/// conditions; callers should treat them as fatal to the render call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Buffered mode was asked to blit before any size resolution
    /// produced a buffer.
    #[error("no offscreen buffer: render called before the first size resolution")]
    BufferNotReady,

    /// The configured render mode is neither direct-draw (0) nor
    /// buffered (1).
    #[error("undefined render mode: {0}")]
    UnsupportedRenderMode(u32),
}
