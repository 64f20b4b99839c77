use helpers::general::max;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// The output size of a rendered sticker image.
pub const STICKER_SIZE: (u32, u32) = (300, 300);

/// The amount of padding to apply to a sticker when drawn with an opaque background.
pub const OPAQUE_PADDING: (u32, u32) = (60, 50);

/// The background fill for opaque stickers.
pub const OPAQUE_BACKGROUND: Rgba<u8> = Rgba([250, 225, 235, 255]);

/// compose_parts stacks the part images top to bottom into a single image of the maximum part
/// width and the summed part height. Narrower parts are horizontally centered. Returns None if
/// there is nothing to composite.
pub fn compose_parts(part_images: &[RgbaImage]) -> Option<RgbaImage> {
    if part_images.is_empty() {
        return None;
    }

    // calculate the size of the composited parts
    let widths: Vec<u32> = part_images.iter().map(|image| image.width()).collect();
    let output_width = max(&widths);
    let output_height: u32 = part_images.iter().map(|image| image.height()).sum();

    if output_width == 0 || output_height == 0 {
        return None;
    }

    // draw each of the parts in a vertical stack
    let mut composite = RgbaImage::new(output_width, output_height);
    let mut next_y_position: i64 = 0;

    for part_image in part_images.iter() {
        let x_position = ((output_width - part_image.width()) / 2) as i64;
        imageops::overlay(&mut composite, part_image, x_position, next_y_position);
        next_y_position += part_image.height() as i64;
    }

    Some(composite)
}

/// scale_to_sticker scales the composited image onto the sticker canvas. With `opaque` the image
/// is fit into the center of the fixed canvas with padding and a colored background, otherwise
/// the canvas takes the scaled size itself and stays transparent.
///
/// The scale factors divide the canvas width by the image height (and vice versa for the padded
/// variant); the composited content is treated as portrait with respect to the canvas.
pub fn scale_to_sticker(parts_image: &RgbaImage, opaque: bool) -> RgbaImage {
    let input_width = parts_image.width() as f64;
    let input_height = parts_image.height() as f64;

    // determine the size to draw as a sticker
    let (scaled_size, output_size) = if opaque {
        // scale the image to fit into the center of the sticker
        let scale = f64::min(
            (STICKER_SIZE.0 - OPAQUE_PADDING.0) as f64 / input_height,
            (STICKER_SIZE.1 - OPAQUE_PADDING.1) as f64 / input_width,
        );
        (scaled(input_width, input_height, scale), STICKER_SIZE)
    } else {
        // scale the image to fit its height into the sticker
        let scale = STICKER_SIZE.0 as f64 / input_height;
        let scaled_size = scaled(input_width, input_height, scale);
        (scaled_size, scaled_size)
    };

    let scaled_image = imageops::resize(
        parts_image,
        scaled_size.0,
        scaled_size.1,
        FilterType::Triangle,
    );

    // draw the background
    let mut canvas = if opaque {
        RgbaImage::from_pixel(output_size.0, output_size.1, OPAQUE_BACKGROUND)
    } else {
        RgbaImage::new(output_size.0, output_size.1)
    };

    // draw the scaled composited image centered onto the canvas
    let x_position = ((output_size.0 - scaled_size.0) / 2) as i64;
    let y_position = ((output_size.1 - scaled_size.1) / 2) as i64;
    imageops::overlay(&mut canvas, &scaled_image, x_position, y_position);

    canvas
}

fn scaled(width: f64, height: f64, scale: f64) -> (u32, u32) {
    (
        (width * scale).round() as u32,
        (height * scale).round() as u32,
    )
}
