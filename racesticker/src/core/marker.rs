use crate::interfaces::view::{RgbColor, View};
use image::{Rgba, RgbaImage};

/// Default width of the car marker in pixels.
pub const DEFAULT_MARKER_SIZE: u32 = 70;

const WHEEL_COLOR: Rgba<u8> = Rgba([40, 40, 40, 255]);

/// CarMarker is a preconfigured drawable car glyph. Its width is the given size, the height
/// follows with a fixed 5:3 aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct CarMarker {
    pub size: u32,
    pub color: RgbColor,
}

impl CarMarker {
    pub fn new(size: u32, color: RgbColor) -> CarMarker {
        CarMarker { size, color }
    }

    /// with_default_size returns a marker of the default width.
    pub fn with_default_size(color: RgbColor) -> CarMarker {
        CarMarker::new(DEFAULT_MARKER_SIZE, color)
    }
}

impl View for CarMarker {
    fn bounds(&self) -> (u32, u32) {
        (self.size, self.size * 3 / 5)
    }

    fn draw(&self, canvas: &mut RgbaImage, x: i64, y: i64) {
        let (width, height) = self.bounds();
        let body_color = Rgba([self.color.r, self.color.g, self.color.b, 255]);

        // body over the full width, cabin on top
        fill_rect(
            canvas,
            x,
            y + height as i64 / 3,
            width,
            height / 3,
            body_color,
        );
        fill_rect(canvas, x + width as i64 / 4, y, width * 3 / 8, height / 3, body_color);

        // wheels, clipped at the lower strip edge
        let wheel_radius = (height as i64 / 4).max(1);
        let wheel_y = y + height as i64 - wheel_radius;
        fill_circle(canvas, x + width as i64 / 4, wheel_y, wheel_radius, WHEEL_COLOR);
        fill_circle(
            canvas,
            x + width as i64 * 3 / 4,
            wheel_y,
            wheel_radius,
            WHEEL_COLOR,
        );
    }
}

fn fill_rect(canvas: &mut RgbaImage, x: i64, y: i64, width: u32, height: u32, color: Rgba<u8>) {
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            put_pixel_checked(canvas, x + dx, y + dy, color);
        }
    }
}

fn fill_circle(canvas: &mut RgbaImage, cx: i64, cy: i64, radius: i64, color: Rgba<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_pixel_checked(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

fn put_pixel_checked(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}
