use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    name = "race-sticker",
    about = "A sticker image renderer for race participants written in Rust"
)]
pub struct StickerOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing
    #[clap(short, long)]
    pub debug: bool,

    /// Render the sticker with an opaque colored background instead of a transparent one
    #[clap(short, long)]
    pub opaque: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the sticker parameter file (JSON)
    #[clap(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set path to a participant roster file (CSV) as an alternative to the parameter file
    #[clap(short, long)]
    pub rosterfile_path: Option<PathBuf>,

    /// Set path of the output PNG file (defaults to output/sticker_<race>_<season>.png)
    #[clap(long)]
    pub outfile_path: Option<PathBuf>,

    /// Set race name used when rendering from a roster file
    #[clap(long, default_value = "roster")]
    pub race_name: String,

    /// Set season used when rendering from a roster file
    #[clap(long, default_value = "2016")]
    pub season: u32,
}
