use image::RgbaImage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// View is the seam between drawable elements and the pixel buffers they are rendered into.
pub trait View {
    /// bounds returns the (width, height) of the view in pixels.
    fn bounds(&self) -> (u32, u32);

    /// draw renders the view into the canvas with its origin at (x, y).
    fn draw(&self, canvas: &mut RgbaImage, x: i64, y: i64);
}

/// view_to_image renders a view into a freshly allocated offscreen buffer of its own bounds.
/// Returns None if there is nothing to render into (zero-sized bounds).
pub fn view_to_image(view: &dyn View) -> Option<RgbaImage> {
    let (width, height) = view.bounds();

    if width == 0 || height == 0 {
        return None;
    }

    let mut canvas = RgbaImage::new(width, height);
    view.draw(&mut canvas, 0, 0);

    Some(canvas)
}
