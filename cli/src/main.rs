use clap::Parser;
use racesticker::core::handle_sticker::handle_sticker;
use racesticker::core::race::Race;
use racesticker::post::sticker_result::StickerResult;
use racesticker::pre::read_sticker_pars::read_sticker_pars;
use racesticker::pre::sticker_opts::StickerOpts;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get sticker options from the command line arguments
    let sticker_opts: StickerOpts = StickerOpts::parse();

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();

    let sticker_result = if let Some(parfile_path) = &sticker_opts.parfile_path {
        println!("INFO: Reading sticker parameters from {:?}", parfile_path);
        let sticker_pars = read_sticker_pars(parfile_path)?;

        println!(
            "INFO: Rendering sticker for {} {} with {} participants",
            sticker_pars.race_pars.race_name,
            sticker_pars.race_pars.season,
            sticker_pars.race_pars.participants.len()
        );

        handle_sticker(&sticker_pars, sticker_opts.opaque, sticker_opts.debug)?
    } else if let Some(rosterfile_path) = &sticker_opts.rosterfile_path {
        println!("INFO: Reading participant roster from {:?}", rosterfile_path);
        let race = Race::from_csv(rosterfile_path, &sticker_opts.race_name, sticker_opts.season)?;

        println!(
            "INFO: Rendering sticker for {} {} with {} participants",
            race.race_name,
            race.season,
            race.no_participants()
        );

        let sticker = race.render_sticker(sticker_opts.opaque);
        StickerResult::new(&race, sticker_opts.opaque, sticker)
    } else {
        anyhow::bail!(
            "No parameter or roster file provided! Use -p <path_to_json> or -r <path_to_csv> to render a sticker."
        );
    };

    if sticker_opts.debug {
        println!("INFO: Execution time: {}ms", t_start.elapsed().as_millis());
    }

    // POST-PROCESSING -----------------------------------------------------------------------------
    sticker_result.print_summary();

    match sticker_result.write_sticker_to_file(sticker_opts.outfile_path.as_deref())? {
        Some(path) => println!("INFO: Sticker written to {}", path),
        None => println!("WARNING: No sticker was rendered, nothing written!"),
    }

    Ok(())
}
