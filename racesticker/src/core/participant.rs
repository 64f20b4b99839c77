use crate::core::marker::{CarMarker, DEFAULT_MARKER_SIZE};
use crate::interfaces::view::{view_to_image, RgbColor};
use anyhow::Context;
use image::{imageops, Rgba, RgbaImage};
use serde::Deserialize;

/// * `participant_no` - Participant number, e.g. 44
/// * `name` - Participant name, e.g. Lewis Hamilton
/// * `color` - Marker color as a CSS color string, e.g. #00d2be
/// * `total_distance` - (m) Total distance covered by the participant so far
/// * `marker_size` - (px) Width of the participant's car marker (optional)
#[derive(Debug, Deserialize, Clone)]
pub struct ParticipantPars {
    pub participant_no: u32,
    pub name: String,
    pub color: String,
    pub total_distance: f64,
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
}

fn default_marker_size() -> u32 {
    DEFAULT_MARKER_SIZE
}

const BASELINE_COLOR: Rgba<u8> = Rgba([120, 120, 120, 255]);
const BASELINE_THICKNESS: u32 = 2;

// The part strip is this many marker widths wide, leaving the marker room to travel.
const STRIP_WIDTH_FACTOR: u32 = 4;

#[derive(Debug)]
pub struct Participant {
    pub participant_no: u32,
    pub name: String,
    pub color: RgbColor,
    pub total_distance: f64,
    marker_size: u32,
}

impl Participant {
    pub fn new(participant_pars: &ParticipantPars) -> anyhow::Result<Participant> {
        let tmp_color = participant_pars
            .color
            .parse::<css_color_parser::Color>()
            .context("Could not parse participant color!")?;

        Ok(Participant {
            participant_no: participant_pars.participant_no,
            name: participant_pars.name.to_owned(),
            color: RgbColor {
                r: tmp_color.r,
                g: tmp_color.g,
                b: tmp_color.b,
            },
            total_distance: participant_pars.total_distance,
            marker_size: participant_pars.marker_size,
        })
    }

    /// sticker_image renders the participant's part strip for the sticker: a transparent strip
    /// with a baseline track and the car marker placed at a horizontal offset proportional to
    /// the completion percentage (clamped to 0-100). Returns None if the marker cannot be
    /// rendered.
    pub fn sticker_image(&self, percent_completed: f64) -> Option<RgbaImage> {
        let marker = CarMarker::new(self.marker_size, self.color);
        let marker_image = view_to_image(&marker)?;

        let strip_width = self.marker_size * STRIP_WIDTH_FACTOR;
        let strip_height = marker_image.height() + BASELINE_THICKNESS;
        let mut strip = RgbaImage::new(strip_width, strip_height);

        // baseline track below the marker travel range
        for y_position in marker_image.height()..strip_height {
            for x_position in 0..strip_width {
                strip.put_pixel(x_position, y_position, BASELINE_COLOR);
            }
        }

        // place the marker according to race progress
        let percent = percent_completed.clamp(0.0, 100.0);
        let travel = (strip_width - marker_image.width()) as f64;
        let marker_x = (travel * percent / 100.0).round() as i64;
        imageops::overlay(&mut strip, &marker_image, marker_x, 0);

        Some(strip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pars(color: &str) -> ParticipantPars {
        ParticipantPars {
            participant_no: 44,
            name: "Lewis".to_string(),
            color: color.to_string(),
            total_distance: 1200.0,
            marker_size: 40,
        }
    }

    #[test]
    fn test_new_rejects_invalid_color() {
        assert!(Participant::new(&test_pars("notacolor")).is_err());
        assert!(Participant::new(&test_pars("#00d2be")).is_ok());
    }

    #[test]
    fn test_sticker_image_size_and_marker_position() {
        let participant = Participant::new(&test_pars("#00d2be")).unwrap();

        // strip is four marker widths wide, marker height plus the baseline high
        let strip = participant.sticker_image(100.0).unwrap();
        assert_eq!(strip.dimensions(), (160, 26));

        // at 100 percent the marker sits at the right end of the travel range
        let body_color = Rgba([0, 210, 190, 255]);
        assert_eq!(*strip.get_pixel(140, 12), body_color);
        // the left end holds only the baseline there
        assert_eq!(strip.get_pixel(20, 12)[3], 0);

        // at 0 percent the marker sits at the left end
        let strip = participant.sticker_image(0.0).unwrap();
        assert_eq!(*strip.get_pixel(20, 12), body_color);
        assert_eq!(strip.get_pixel(140, 12)[3], 0);
    }

    #[test]
    fn test_sticker_image_clamps_percentage() {
        let participant = Participant::new(&test_pars("#00d2be")).unwrap();

        let overshoot = participant.sticker_image(250.0).unwrap();
        let full = participant.sticker_image(100.0).unwrap();
        assert_eq!(overshoot.as_raw(), full.as_raw());
    }
}
