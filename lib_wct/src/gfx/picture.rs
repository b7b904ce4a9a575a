//! A single card picture: palette, packed pixel data, decoded raster.

use log::debug;
use std::io::{self, Read, Seek};
use std::path::Path;
use thiserror::Error;

use crate::color;
use crate::gfx::codec::{self, Pixels, RawGfx};
use crate::rom::{layout, RomError, RomFile};

/// Width of a card picture in pixels.
pub const PIC_WIDTH: u32 = layout::CARDGFX_FULLWIDTH_PX as u32;
/// Height of a card picture in pixels.
pub const PIC_HEIGHT: u32 = layout::CARDGFX_FULLHEIGHT_PX as u32;
/// Colors in a card palette.
pub const PALETTE_LEN: usize = layout::CARDPALETTE_NUMENTRIES;

pub type Palette = [color::GbaColor; PALETTE_LEN];

#[derive(Error, Debug)]
pub enum PicError {
    #[error("picture {index} is out of range, the ROM holds {count} pictures")]
    OutOfRange { index: u32, count: u32 },
    #[error("expected a {PIC_WIDTH}x{PIC_HEIGHT} image, got {width}x{height}")]
    WrongDimensions { width: u32, height: u32 },
    #[error("raster holds {got} pixels, expected {expected}")]
    WrongRasterSize { got: usize, expected: usize },
    #[error("palette index {index} at pixel {position} exceeds the {PALETTE_LEN}-color palette")]
    PaletteIndexOutOfRange { index: u8, position: usize },
    #[error(transparent)]
    Rom(#[from] RomError),
    #[error("failed to write raw dump '{path}'")]
    Dump {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// One addressable card picture.
///
/// Holds the 64-color RGB555 palette, the packed 6bpp bytes exactly as
/// stored in the ROM, and the decoded linear raster. The three are
/// only ever replaced together, so they stay consistent.
#[derive(Debug)]
pub struct CardPic {
    palette: Palette,
    raw: RawGfx,
    pixels: Pixels,
}

impl CardPic {
    /// Read picture `picnum` (0-based) from the ROM.
    ///
    /// The index is checked against the picture record count before
    /// any container access. Card numbers shown to users are 1-based;
    /// callers translate before calling this.
    pub fn read_from_rom<R: Read + Seek>(
        rom: &mut RomFile<R>,
        picnum: u32,
    ) -> Result<Self, PicError> {
        if picnum >= layout::CARDGFX_COUNT {
            return Err(PicError::OutOfRange {
                index: picnum,
                count: layout::CARDGFX_COUNT,
            });
        }

        let palette: Palette = rom.read_array_at(layout::palette_offset(picnum))?;
        let raw: RawGfx = rom.read_array_at(layout::gfx_offset(picnum))?;
        let pixels = codec::unpack(&raw);
        debug!("read picture {} from ROM", picnum);

        Ok(Self {
            palette,
            raw,
            pixels,
        })
    }

    /// Build a picture from an interchange raster and its palette.
    ///
    /// The raster must be exactly 72x80 one-byte palette indices.
    /// Indices at or above 64 are rejected rather than silently masked;
    /// of the palette only the first 64 entries are used, converted to
    /// RGB555 by channel truncation.
    pub fn from_interchange(
        width: u32,
        height: u32,
        palette: &[[u8; 3]],
        indices: &[u8],
    ) -> Result<Self, PicError> {
        if width != PIC_WIDTH || height != PIC_HEIGHT {
            return Err(PicError::WrongDimensions { width, height });
        }
        if indices.len() != layout::CARDGFX_PIXEL_COUNT {
            return Err(PicError::WrongRasterSize {
                got: indices.len(),
                expected: layout::CARDGFX_PIXEL_COUNT,
            });
        }
        if let Some(position) = indices.iter().position(|&i| i >= PALETTE_LEN as u8) {
            return Err(PicError::PaletteIndexOutOfRange {
                index: indices[position],
                position,
            });
        }

        let mut gba_palette: Palette = [0; PALETTE_LEN];
        for (slot, rgb) in gba_palette.iter_mut().zip(palette.iter()) {
            *slot = color::rgb_to_rgb555(rgb[0], rgb[1], rgb[2]);
        }

        let mut pixels = [0u8; layout::CARDGFX_PIXEL_COUNT];
        pixels.copy_from_slice(indices);
        let raw = codec::pack(&pixels);

        Ok(Self {
            palette: gba_palette,
            raw,
            pixels,
        })
    }

    /// The stored RGB555 palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The packed 6bpp bytes as stored in the ROM.
    pub fn raw_data(&self) -> &RawGfx {
        &self.raw
    }

    /// The decoded linear raster, row-major, values 0..=63.
    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    /// The palette widened to 8-bit RGB for an interchange writer.
    pub fn display_palette(&self) -> [[u8; 3]; PALETTE_LEN] {
        let mut out = [[0u8; 3]; PALETTE_LEN];
        for (rgb, &gba) in out.iter_mut().zip(self.palette.iter()) {
            rgb[0] = color::expand5to8(color::r5(gba));
            rgb[1] = color::expand5to8(color::g5(gba));
            rgb[2] = color::expand5to8(color::b5(gba));
        }
        out
    }

    /// Write the packed pixels and the untranslated palette as two
    /// sibling files, `<base>.pix` and `<base>.pal`.
    pub fn write_raw_dump(&self, base: &Path) -> Result<(), PicError> {
        let write = |path: std::path::PathBuf, data: &[u8]| -> Result<(), PicError> {
            std::fs::write(&path, data).map_err(|source| PicError::Dump {
                path: path.display().to_string(),
                source,
            })
        };

        write(base.with_extension("pix"), &self.raw)?;

        let mut pal = [0u8; PALETTE_LEN * layout::CARDPALETTE_ENTRY_SIZE];
        for (chunk, &color) in pal.chunks_exact_mut(2).zip(self.palette.iter()) {
            chunk.copy_from_slice(&color.to_le_bytes());
        }
        write(base.with_extension("pal"), &pal)
    }
}
