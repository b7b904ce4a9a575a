use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::path::Path;

use lib_wct::{CardPic, RomFile};

use crate::error::ToolError;
use crate::pngio;

/// Extract card pictures from a ROM to indexed PNGs
#[derive(Parser)]
pub struct ExtractCommand {
    /// ROM image to read
    #[clap(short, long, required = true)]
    rom: String,

    /// Output directory
    #[clap(short, long, default_value = ".")]
    out: String,

    /// 1-based card number; all cards are extracted when omitted
    #[clap(short, long)]
    card: Option<u32>,

    /// Continue even if the file does not look like a YWCT2K4 ROM
    #[clap(long)]
    force: bool,
}

impl ExtractCommand {
    pub fn execute(&self) -> Result<(), ToolError> {
        let mut rom = RomFile::open(&self.rom)?;
        if !rom.verify() {
            if self.force {
                warn!("'{}' does not look like a YWCT2K4 ROM, reading anyway", self.rom);
            } else {
                return Err(ToolError::NotAWctRom(self.rom.clone()));
            }
        }

        let numcards = rom.num_cards()?;
        if numcards == 0 {
            return Err(ToolError::NoCards);
        }

        std::fs::create_dir_all(&self.out).map_err(|source| ToolError::CreateDir {
            path: self.out.clone(),
            source,
        })?;

        match self.card {
            // a single requested card fails hard
            Some(card) => write_one(&mut rom, card, numcards, &self.out),
            // a batch run skips and reports
            None => {
                let mut failed = 0u32;
                for card in 1..numcards {
                    if let Err(err) = write_one(&mut rom, card, numcards, &self.out) {
                        warn!("skipping card {}: {}", card, err);
                        failed += 1;
                    }
                }
                info!(
                    "extracted {} card pictures to {} ({} failed)",
                    numcards - 1 - failed,
                    self.out,
                    failed
                );
                Ok(())
            }
        }
    }
}

fn write_one(
    rom: &mut RomFile<File>,
    cardnum: u32,
    numcards: u32,
    outdir: &str,
) -> Result<(), ToolError> {
    if cardnum < 1 || cardnum >= numcards {
        return Err(ToolError::BadCardNumber {
            cardnum,
            max: numcards - 1,
        });
    }

    // card numbers are 1-based but the picture storage is 0-based
    let pic = CardPic::read_from_rom(rom, cardnum - 1)?;

    let outpath = Path::new(outdir).join(format!("card{:04}.png", cardnum));
    pngio::write_indexed(&outpath, &pic)?;
    info!("wrote {}", outpath.display());
    Ok(())
}
