pub mod read_sticker_pars;
pub mod sticker_opts;
