pub mod canvas;
pub mod drawing;
mod error;

pub use canvas::Canvas;
pub use drawing::{OffscreenBuffer, PathGeometry, StrokeStyle, DISTORTION_FACTOR};
pub use error::RenderError;

use log::{debug, trace, warn};

pub const RENDER_MODE_WITHOUT_BUFFER: u32 = 0;
pub const RENDER_MODE_WITH_BUFFER: u32 = 1;

/// Capability surface a host adapter drives: the layout system reports
/// size changes, the paint system requests redraws. Both callbacks run on
/// the host's single rendering thread.
pub trait Widget {
    fn on_size_resolved(&mut self, width: u32, height: u32);
    fn render(&self, canvas: &mut Canvas) -> Result<(), RenderError>;
}

/// Construction-time attributes. `render_mode` is the only recognized
/// option; the raw value is stored unvalidated so an out-of-range mode
/// surfaces as [`RenderError::UnsupportedRenderMode`] at render time
/// instead of being clamped here.
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    pub render_mode: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            render_mode: RENDER_MODE_WITHOUT_BUFFER,
        }
    }
}

impl RendererConfig {
    /// Reads recognized options from a host-supplied attribute source.
    /// Unknown keys are ignored; a malformed value keeps the default.
    pub fn from_attrs<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut config = RendererConfig::default();
        for (key, value) in attrs {
            if key == "render_mode" {
                match value.parse() {
                    Ok(mode) => config.render_mode = mode,
                    Err(_) => warn!("ignoring malformed render_mode attribute {value:?}"),
                }
            }
        }
        config
    }
}

/// Stateful drawable that owns a circle path and a stroke style and renders
/// it with one of two strategies: stroking the path directly on every call,
/// or blitting a buffer pre-rendered at size-resolution time.
///
/// Geometry and buffer are absent until the first [`Widget::on_size_resolved`]
/// and are rebuilt wholesale, never patched, on every subsequent one.
pub struct PathRenderer {
    render_mode: u32,
    style: StrokeStyle,
    geometry: Option<PathGeometry>,
    buffer: Option<OffscreenBuffer>,
}

impl PathRenderer {
    pub fn new(config: RendererConfig) -> Self {
        PathRenderer {
            render_mode: config.render_mode,
            style: StrokeStyle::new(),
            geometry: None,
            buffer: None,
        }
    }

    pub fn render_mode(&self) -> u32 {
        self.render_mode
    }

    /// Pre-rendered buffer, present only in buffered mode after the first
    /// size resolution.
    pub fn buffer(&self) -> Option<&OffscreenBuffer> {
        self.buffer.as_ref()
    }

    pub fn geometry(&self) -> Option<&PathGeometry> {
        self.geometry.as_ref()
    }
}

impl Widget for PathRenderer {
    fn on_size_resolved(&mut self, width: u32, height: u32) {
        let distorted_width = width as f32 / DISTORTION_FACTOR;
        let distorted_height = height as f32 / DISTORTION_FACTOR;
        debug!(
            "size resolved to {width}x{height}, distorted viewport \
             {distorted_width}x{distorted_height}"
        );

        let geometry = PathGeometry::for_viewport(distorted_width, distorted_height);
        if self.render_mode == RENDER_MODE_WITH_BUFFER {
            self.buffer = Some(drawing::assemble_buffer(
                width,
                height,
                &geometry,
                &self.style,
            ));
        }
        self.geometry = Some(geometry);
    }

    fn render(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        match self.render_mode {
            RENDER_MODE_WITHOUT_BUFFER => {
                trace!(
                    "direct draw onto {}x{} target",
                    canvas.width(),
                    canvas.height()
                );
                if let Some(geometry) = &self.geometry {
                    drawing::draw_scaled_path(canvas, geometry, &self.style);
                }
                Ok(())
            }
            RENDER_MODE_WITH_BUFFER => match &self.buffer {
                None => Err(RenderError::BufferNotReady),
                Some(OffscreenBuffer::Empty { .. }) => Ok(()),
                Some(OffscreenBuffer::Pixels(pixmap)) => {
                    trace!("blitting {}x{} buffer", pixmap.width(), pixmap.height());
                    canvas.draw_pixmap(0, 0, pixmap.as_ref(), self.style.blit_paint());
                    Ok(())
                }
            },
            mode => Err(RenderError::UnsupportedRenderMode(mode)),
        }
    }
}
