pub mod color;
pub mod gfx;
pub mod rom;

use log::*;
use std::io::Write;

pub use crate::gfx::picture::{CardPic, PicError};
pub use crate::rom::{RomError, RomFile};

pub fn init_logging() {
    env_logger::Builder::new()
        .filter(Some("lib_wct"), LevelFilter::Debug)
        .filter(Some("cardgfxtool"), LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .parse_default_env()
        .init();
}
