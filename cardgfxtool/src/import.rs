use clap::Parser;
use log::info;
use std::path::Path;

use lib_wct::CardPic;

use crate::error::ToolError;
use crate::pngio;

/// Re-encode an indexed PNG into the ROM's packed pixel format
#[derive(Parser)]
pub struct ImportCommand {
    /// 72x80 indexed PNG to read
    #[clap(short, long, required = true)]
    png: String,

    /// Base name for the output pair (<base>.pix and <base>.pal)
    #[clap(short, long, required = true)]
    out: String,
}

impl ImportCommand {
    pub fn execute(&self) -> Result<(), ToolError> {
        let (width, height, palette, indices) = pngio::read_indexed(Path::new(&self.png))?;
        let pic = CardPic::from_interchange(width, height, &palette, &indices)?;
        pic.write_raw_dump(Path::new(&self.out))?;
        info!("wrote {}.pix and {}.pal", self.out, self.out);
        Ok(())
    }
}
