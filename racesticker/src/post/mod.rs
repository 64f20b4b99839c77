pub mod sticker_result;
