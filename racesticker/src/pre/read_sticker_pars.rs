use crate::core::participant::ParticipantPars;
use crate::core::race::RacePars;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;

/// StickerPars is used to store all other parameter structs.
#[derive(Debug, Deserialize, Clone)]
pub struct StickerPars {
    pub race_pars: RacePars,
    pub participant_pars_all: HashMap<u32, ParticipantPars>,
}

/// read_sticker_pars reads the JSON file and decodes the JSON string into the sticker
/// parameters struct.
pub fn read_sticker_pars(filepath: &Path) -> anyhow::Result<StickerPars> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.to_str().unwrap()
        ))?;
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.to_str().unwrap()
    ))?;
    Ok(pars)
}
