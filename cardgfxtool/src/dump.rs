use clap::Parser;
use log::info;
use std::path::Path;

use lib_wct::{CardPic, RomFile};

use crate::error::ToolError;

/// Dump one card's packed pixels and palette as raw blobs
#[derive(Parser)]
pub struct DumpCommand {
    /// ROM image to read
    #[clap(short, long, required = true)]
    rom: String,

    /// 1-based card number
    #[clap(short, long, required = true)]
    card: u32,

    /// Base name for the output pair (<base>.pix and <base>.pal)
    #[clap(short, long, required = true)]
    out: String,
}

impl DumpCommand {
    pub fn execute(&self) -> Result<(), ToolError> {
        let mut rom = RomFile::open(&self.rom)?;
        let numcards = rom.num_cards()?;
        if numcards == 0 {
            return Err(ToolError::NoCards);
        }
        if self.card < 1 || self.card >= numcards {
            return Err(ToolError::BadCardNumber {
                cardnum: self.card,
                max: numcards - 1,
            });
        }

        let pic = CardPic::read_from_rom(&mut rom, self.card - 1)?;
        pic.write_raw_dump(Path::new(&self.out))?;
        info!("wrote {}.pix and {}.pal", self.out, self.out);
        Ok(())
    }
}
