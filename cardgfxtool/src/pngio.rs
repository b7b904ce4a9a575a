//! Indexed PNG read/write at the interchange boundary.
//!
//! Card pictures travel as 8-bit indexed PNGs with a 256-entry
//! palette of which only the first 64 entries carry data.

use log::debug;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use thiserror::Error;

use lib_wct::gfx::picture::{CardPic, PIC_HEIGHT, PIC_WIDTH};

// Full PLTE length written for compatibility with the original tool's
// output; entries past the card palette are zero.
const PNG_PALETTE_LEN: usize = 256;

#[derive(Error, Debug)]
pub enum PngError {
    #[error("could not create '{path}'")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("could not open '{path}'")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode PNG")]
    Encode(#[from] png::EncodingError),
    #[error("failed to decode PNG")]
    Decode(#[from] png::DecodingError),
    #[error("'{0}' is not an 8-bit indexed PNG")]
    NotIndexed(String),
    #[error("'{0}' has no palette")]
    NoPalette(String),
}

/// Write a card picture as an 8-bit indexed PNG.
pub fn write_indexed(path: &Path, pic: &CardPic) -> Result<(), PngError> {
    let file = File::create(path).map_err(|source| PngError::Create {
        path: path.display().to_string(),
        source,
    })?;
    let w = BufWriter::new(file);

    let mut plte = vec![0u8; PNG_PALETTE_LEN * 3];
    for (chunk, rgb) in plte.chunks_exact_mut(3).zip(pic.display_palette()) {
        chunk.copy_from_slice(&rgb);
    }

    let mut encoder = png::Encoder::new(w, PIC_WIDTH, PIC_HEIGHT);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(plte);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pic.pixels())?;
    debug!("wrote indexed PNG {}", path.display());
    Ok(())
}

/// Read an 8-bit indexed PNG back into interchange form:
/// (width, height, palette, indices).
pub fn read_indexed(path: &Path) -> Result<(u32, u32, Vec<[u8; 3]>, Vec<u8>), PngError> {
    let file = File::open(path).map_err(|source| PngError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut decoder = png::Decoder::new(file);
    // keep the raster paletted; expansion to RGB would lose the indices
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    if info.color_type != png::ColorType::Indexed || info.bit_depth != png::BitDepth::Eight {
        return Err(PngError::NotIndexed(path.display().to_string()));
    }
    let palette = match &info.palette {
        Some(plte) => plte
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect::<Vec<_>>(),
        None => return Err(PngError::NoPalette(path.display().to_string())),
    };

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());
    debug!(
        "read indexed PNG {}, {}x{}, {} palette entries",
        path.display(),
        frame.width,
        frame.height,
        palette.len()
    );

    Ok((frame.width, frame.height, palette, buf))
}
