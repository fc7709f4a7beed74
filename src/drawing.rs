use log::debug;
use tiny_skia::{Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke};

use crate::canvas::Canvas;

/// Fixed scalar used to shrink measured dimensions into the distorted
/// working space. The draw step re-expands by the same factor, so the
/// circle lands back at measured scale.
pub const DISTORTION_FACTOR: f32 = 7.0;

/// Constant paint configuration: black, anti-aliased, stroke-only,
/// width 50 logical units.
pub struct StrokeStyle {
    paint: Paint<'static>,
    stroke: Stroke,
    blit: PixmapPaint,
}

impl StrokeStyle {
    pub fn new() -> Self {
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 255);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: 50.0,
            ..Stroke::default()
        };
        StrokeStyle {
            paint,
            stroke,
            blit: PixmapPaint::default(),
        }
    }

    pub fn paint(&self) -> &Paint<'static> {
        &self.paint
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Modifier applied when blitting an offscreen buffer onto a target:
    /// source-over, full opacity, nearest filtering.
    pub fn blit_paint(&self) -> &PixmapPaint {
        &self.blit
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        StrokeStyle::new()
    }
}

/// Circle derived from the distorted viewport: centered at half the
/// distorted dimensions, radius half their minimum, consistent winding.
/// Rebuilt wholesale on every size change.
pub struct PathGeometry {
    circle: Option<Path>,
}

impl PathGeometry {
    /// A non-positive radius yields empty geometry that strokes as a
    /// no-op; `PathBuilder::from_circle` itself accepts a zero radius, so
    /// the degenerate case is guarded here.
    pub fn for_viewport(distorted_width: f32, distorted_height: f32) -> Self {
        let radius = distorted_width.min(distorted_height) / 2.0;
        let circle = if radius > 0.0 {
            PathBuilder::from_circle(distorted_width / 2.0, distorted_height / 2.0, radius)
        } else {
            None
        };
        PathGeometry { circle }
    }

    pub fn circle(&self) -> Option<&Path> {
        self.circle.as_ref()
    }
}

/// Pre-rendered pixel buffer for the buffered strategy.
///
/// `Pixmap` refuses zero dimensions, so a zero-area viewport is kept as an
/// explicit `Empty` buffer that blits as a successful no-op instead of a
/// missing one.
pub enum OffscreenBuffer {
    Empty { width: u32, height: u32 },
    Pixels(Pixmap),
}

impl OffscreenBuffer {
    pub fn width(&self) -> u32 {
        match self {
            OffscreenBuffer::Empty { width, .. } => *width,
            OffscreenBuffer::Pixels(pixmap) => pixmap.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            OffscreenBuffer::Empty { height, .. } => *height,
            OffscreenBuffer::Pixels(pixmap) => pixmap.height(),
        }
    }
}

/// Strokes the stored circle at full distortion scale.
///
/// The geometry lives in pre-divided coordinates; scaling the canvas by
/// the same factor cancels the division. The cancellation is the behavior
/// under test, so both steps stay explicit.
pub fn draw_scaled_path(canvas: &mut Canvas, geometry: &PathGeometry, style: &StrokeStyle) {
    canvas.with_save(|c| {
        c.scale(DISTORTION_FACTOR, DISTORTION_FACTOR);
        if let Some(circle) = geometry.circle() {
            c.stroke_path(circle, style.paint(), style.stroke());
        }
    });
}

/// Renders `geometry` into a fresh buffer of the full measured size,
/// replacing whatever the caller held before.
pub fn assemble_buffer(
    width: u32,
    height: u32,
    geometry: &PathGeometry,
    style: &StrokeStyle,
) -> OffscreenBuffer {
    match Pixmap::new(width, height) {
        Some(mut pixmap) => {
            let mut canvas = Canvas::new(&mut pixmap);
            draw_scaled_path(&mut canvas, geometry, style);
            OffscreenBuffer::Pixels(pixmap)
        }
        None => {
            debug!("zero-area viewport {width}x{height}, keeping an empty buffer");
            OffscreenBuffer::Empty { width, height }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn geometry_spans_the_distorted_viewport() {
        // 700x700 measured -> 100x100 distorted -> circle (50,50) r=50.
        let geometry = PathGeometry::for_viewport(100.0, 100.0);
        let bounds = geometry.circle().unwrap().bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.top(), 0.0);
        assert_eq!(bounds.right(), 100.0);
        assert_eq!(bounds.bottom(), 100.0);
    }

    #[test]
    fn degenerate_viewport_yields_empty_geometry() {
        assert!(PathGeometry::for_viewport(0.0, 0.0).circle().is_none());
        assert!(PathGeometry::for_viewport(100.0, 0.0).circle().is_none());
    }

    #[test]
    fn buffer_matches_measured_dimensions() {
        let geometry = PathGeometry::for_viewport(640.0 / 7.0, 480.0 / 7.0);
        let buffer = assemble_buffer(640, 480, &geometry, &StrokeStyle::new());
        assert_eq!(buffer.width(), 640);
        assert_eq!(buffer.height(), 480);
        assert!(matches!(buffer, OffscreenBuffer::Pixels(_)));
    }

    #[test]
    fn zero_area_buffer_is_empty_not_missing() {
        let geometry = PathGeometry::for_viewport(0.0, 0.0);
        let buffer = assemble_buffer(0, 0, &geometry, &StrokeStyle::new());
        assert!(matches!(
            buffer,
            OffscreenBuffer::Empty {
                width: 0,
                height: 0
            }
        ));
    }

    #[test]
    fn buffer_content_equals_direct_draw() {
        let style = StrokeStyle::new();
        let geometry = PathGeometry::for_viewport(100.0, 100.0);

        let mut direct = Pixmap::new(700, 700).unwrap();
        draw_scaled_path(&mut Canvas::new(&mut direct), &geometry, &style);

        let buffer = assemble_buffer(700, 700, &geometry, &style);
        let OffscreenBuffer::Pixels(buffered) = buffer else {
            panic!("expected a pixel buffer for a 700x700 viewport");
        };
        assert_eq!(direct.data(), buffered.data());
    }

    #[test]
    fn scaled_draw_leaves_the_canvas_transform_untouched() {
        let style = StrokeStyle::new();
        let geometry = PathGeometry::for_viewport(100.0, 100.0);
        let mut pixmap = Pixmap::new(700, 700).unwrap();
        let mut canvas = Canvas::new(&mut pixmap);

        draw_scaled_path(&mut canvas, &geometry, &style);

        assert_eq!(canvas.transform(), tiny_skia::Transform::identity());
    }
}
