use tiny_skia::{Paint, Path, Pixmap, PixmapPaint, PixmapRef, Stroke, Transform};

/// Drawing surface over a [`Pixmap`].
///
/// tiny-skia takes a transform per draw call instead of keeping canvas
/// state, so this wrapper carries the current transform plus a stack of
/// saved ones, giving the usual save/scale/draw/restore surface.
pub struct Canvas<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
    saved: Vec<Transform>,
}

impl<'a> Canvas<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Canvas {
            pixmap,
            transform: Transform::identity(),
            saved: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Restores the most recently saved transform. Restoring past the
    /// bottom of the stack resets to identity.
    pub fn restore(&mut self) {
        self.transform = self.saved.pop().unwrap_or_default();
    }

    /// Runs `f` between a save/restore pair. The restore happens on every
    /// exit path, so an `Err` out of the closure cannot leak the inner
    /// transform into later draws.
    pub fn with_save<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let result = f(self);
        self.restore();
        result
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
    }

    pub fn stroke_path(&mut self, path: &Path, paint: &Paint, stroke: &Stroke) {
        self.pixmap
            .stroke_path(path, paint, stroke, self.transform, None);
    }

    pub fn draw_pixmap(&mut self, x: i32, y: i32, src: PixmapRef, paint: &PixmapPaint) {
        self.pixmap
            .draw_pixmap(x, y, src, paint, self.transform, None);
    }
}
