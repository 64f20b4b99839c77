use crate::core::race::Race;
use anyhow::Context;
use helpers::general::distance_string;
use image::RgbaImage;
use std::path::Path;

/// StickerResult contains the rendered sticker image together with the race information that is
/// required for post-processing.
#[derive(Debug)]
pub struct StickerResult {
    pub race_name: String,
    pub season: u32,
    pub no_participants: usize,
    pub leader_name: Option<String>,
    pub max_distance: f64,
    pub opaque: bool,
    pub sticker: Option<RgbaImage>,
}

impl StickerResult {
    pub fn new(race: &Race, opaque: bool, sticker: Option<RgbaImage>) -> StickerResult {
        StickerResult {
            race_name: race.race_name.to_owned(),
            season: race.season,
            no_participants: race.no_participants(),
            leader_name: race.leader().map(|leader| leader.name.to_owned()),
            max_distance: race.max_distance(),
            opaque,
            sticker,
        }
    }

    /// write_sticker_to_file writes the sticker as a PNG file to output/ (or to the given
    /// path). Returns the path of the written file, or None if there was nothing to render.
    pub fn write_sticker_to_file(&self, path: Option<&Path>) -> anyhow::Result<Option<String>> {
        let sticker = match &self.sticker {
            Some(sticker) => sticker,
            None => return Ok(None),
        };

        let out_dir = Path::new("output");
        std::fs::create_dir_all(out_dir)?;

        let out_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            let filename = format!(
                "sticker_{}_{}.png",
                self.race_name.to_lowercase(),
                self.season
            );
            out_dir.join(filename)
        };

        sticker.save(&out_path).context(format!(
            "Failed to write sticker file {}!",
            out_path.to_str().unwrap_or("unknown")
        ))?;

        Ok(Some(out_path.to_string_lossy().into_owned()))
    }

    /// print_summary prints the sticker information to the console output.
    pub fn print_summary(&self) {
        println!("RESULT: Sticker for {} {}", self.race_name, self.season);
        println!("RESULT: {} participants in the race", self.no_participants);

        if let Some(leader_name) = &self.leader_name {
            println!(
                "RESULT: Leader is {} after {}",
                leader_name,
                distance_string(self.max_distance)
            );
        }

        match &self.sticker {
            Some(sticker) => println!(
                "RESULT: Sticker image size is {}x{} ({})",
                sticker.width(),
                sticker.height(),
                if self.opaque { "opaque" } else { "transparent" }
            ),
            None => println!("RESULT: Nothing to render"),
        }
    }
}
