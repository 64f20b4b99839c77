use crate::core::race::Race;
use crate::post::sticker_result::StickerResult;
use crate::pre::read_sticker_pars::StickerPars;
use anyhow::Context;
use helpers::general::{distance_string, InputValueError};

/// handle_sticker creates the race on the basis of the inserted parameters, renders the sticker
/// image, and returns the result for post-processing.
pub fn handle_sticker(
    sticker_pars: &StickerPars,
    opaque: bool,
    print_debug: bool,
) -> anyhow::Result<StickerResult> {
    // check participant parameters
    for participant_pars in sticker_pars.participant_pars_all.values() {
        if !participant_pars.total_distance.is_finite() || participant_pars.total_distance < 0.0 {
            return Err(InputValueError).context(format!(
                "Total distance of participant {} must be a non-negative number!",
                participant_pars.participant_no
            ));
        }

        if participant_pars.marker_size == 0 {
            return Err(InputValueError).context(format!(
                "Marker size of participant {} must be greater than zero!",
                participant_pars.participant_no
            ));
        }
    }

    // create race
    let race = Race::new(&sticker_pars.race_pars, &sticker_pars.participant_pars_all)?;

    if print_debug {
        println!(
            "INFO: Compositing {} participants, leading distance is {}",
            race.no_participants(),
            distance_string(race.max_distance())
        );
    }

    // render sticker
    let sticker = race.render_sticker(opaque);

    Ok(StickerResult::new(&race, opaque, sticker))
}
