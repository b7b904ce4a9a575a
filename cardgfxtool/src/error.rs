use std::io;
use thiserror::Error;

use lib_wct::{PicError, RomError};

use crate::pngio::PngError;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("'{0}' does not look like a YWCT2K4 ROM (pass --force to read it anyway)")]
    NotAWctRom(String),
    #[error("no cards defined in ROM, or the card count was unreadable")]
    NoCards,
    #[error("invalid card number {cardnum} (valid numbers are 1 to {max})")]
    BadCardNumber { cardnum: u32, max: u32 },
    #[error("could not create output directory '{path}'")]
    CreateDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Rom(#[from] RomError),
    #[error(transparent)]
    Pic(#[from] PicError),
    #[error(transparent)]
    Png(#[from] PngError),
}
