use crate::core::participant::{Participant, ParticipantPars};
use crate::core::sticker::{compose_parts, scale_to_sticker};
use anyhow::Context;
use helpers::general::{argmax, argsort, SortOrder};
use image::RgbaImage;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;

/// * `race_name` - Race name, e.g. Monza
/// * `season` - Season the race takes place in
/// * `participants` - List of participant numbers taking part in the race
#[derive(Debug, Deserialize, Clone)]
pub struct RacePars {
    pub race_name: String,
    pub season: u32,
    pub participants: Vec<u32>,
}

#[derive(Debug)]
pub struct Race {
    pub race_name: String,
    pub season: u32,
    participants: HashMap<u32, Participant>,
}

impl Race {
    pub fn new(
        race_pars: &RacePars,
        participant_pars_all: &HashMap<u32, ParticipantPars>,
    ) -> anyhow::Result<Race> {
        let mut participants = HashMap::with_capacity(race_pars.participants.len());

        for participant_no in race_pars.participants.iter() {
            let participant_pars_tmp = participant_pars_all
                .get(participant_no)
                .expect("Missing participant number in participant parameters!");

            participants.insert(*participant_no, Participant::new(participant_pars_tmp)?);
        }

        Ok(Race {
            race_name: race_pars.race_name.to_owned(),
            season: race_pars.season,
            participants,
        })
    }

    /// from_csv creates a race from a roster file with one
    /// `participant_no,name,color,total_distance` record per line.
    pub fn from_csv(filepath: &Path, race_name: &str, season: u32) -> anyhow::Result<Race> {
        let fh = OpenOptions::new()
            .read(true)
            .open(filepath)
            .context(format!(
                "Failed to open roster file {}!",
                filepath.to_str().unwrap()
            ))?;

        let mut csv_reader = csv::Reader::from_reader(&fh);
        let mut participants = HashMap::new();

        for result in csv_reader.deserialize() {
            let participant_pars: ParticipantPars = result.context(format!(
                "Failed to parse roster file {}!",
                filepath.to_str().unwrap()
            ))?;

            participants.insert(
                participant_pars.participant_no,
                Participant::new(&participant_pars)?,
            );
        }

        Ok(Race {
            race_name: race_name.to_owned(),
            season,
            participants,
        })
    }

    // ---------------------------------------------------------------------------------------------
    // STICKER RENDERING ---------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// render_sticker renders the race participants into a sticker image. With `opaque` the
    /// result is the fixed sticker canvas with a colored background, otherwise a transparent
    /// image whose size follows from the composited content. Returns None if there is nothing
    /// to render.
    pub fn render_sticker(&self, opaque: bool) -> Option<RgbaImage> {
        let parts_image = self.render_race_sticker()?;
        Some(scale_to_sticker(&parts_image, opaque))
    }

    /// render_race_sticker composites the participant part strips into a single image, leader
    /// on top.
    fn render_race_sticker(&self) -> Option<RgbaImage> {
        if self.participants.is_empty() {
            return None;
        }

        let max_distance = self.max_distance();

        let part_images: Vec<RgbaImage> = self
            .participants_by_rank()
            .iter()
            .filter_map(|participant| {
                let percent_completed = if max_distance > 0.0 {
                    participant.total_distance * 100.0 / max_distance
                } else {
                    0.0
                };

                participant.sticker_image(percent_completed)
            })
            .collect();

        compose_parts(&part_images)
    }

    // ---------------------------------------------------------------------------------------------
    // METHODS (HELPERS) ---------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    pub fn no_participants(&self) -> usize {
        self.participants.len()
    }

    /// max_distance returns the maximum total distance covered by any participant, 0 for an
    /// empty race.
    pub fn max_distance(&self) -> f64 {
        self.participants
            .values()
            .map(|participant| participant.total_distance)
            .fold(0.0, f64::max)
    }

    /// leader returns the participant that has covered the largest total distance, the lowest
    /// participant number winning ties.
    pub fn leader(&self) -> Option<&Participant> {
        if self.participants.is_empty() {
            return None;
        }

        let participant_nos = self.participant_nos_sorted();
        let distances: Vec<f64> = participant_nos
            .iter()
            .map(|participant_no| self.participants[participant_no].total_distance)
            .collect();

        Some(&self.participants[&participant_nos[argmax(&distances)]])
    }

    /// participants_by_rank returns the participants in stacking order: descending total
    /// distance, ties broken by ascending participant number.
    pub fn participants_by_rank(&self) -> Vec<&Participant> {
        let participant_nos = self.participant_nos_sorted();
        let distances: Vec<f64> = participant_nos
            .iter()
            .map(|participant_no| self.participants[participant_no].total_distance)
            .collect();

        argsort(&distances, SortOrder::Descending)
            .into_iter()
            .map(|idx| &self.participants[&participant_nos[idx]])
            .collect()
    }

    fn participant_nos_sorted(&self) -> Vec<u32> {
        let mut participant_nos: Vec<u32> = self.participants.keys().copied().collect();
        participant_nos.sort_unstable();
        participant_nos
    }
}
