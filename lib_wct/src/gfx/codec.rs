//! Transcoder between the ROM's packed 6bpp tiled card graphics and a
//! linear 8-bit indexed raster.
//!
//! A card graphic is 9x10 tiles of 8x8 pixels, 72x80 in total. On disk
//! each 8-pixel tile row is packed into three little-endian 16-bit
//! words, 6 bits per pixel, tiles stored row-major. The unpacked form
//! is a flat 72-wide raster, one byte per pixel, values 0..=63.

use crate::rom::layout::{
    CARDGFX_FULLWIDTH_PX, CARDGFX_PIXEL_COUNT, CARDGFX_READ_SIZEOF, CARDGFX_TILEMAP_HEIGHT,
    CARDGFX_TILEMAP_WIDTH, CARDGFX_TILE_HEIGHT_PX, CARDGFX_TILE_WIDTH_PX,
};

/// Packed on-disk form of one card graphic.
pub type RawGfx = [u8; CARDGFX_READ_SIZEOF];

/// Linear raster form of one card graphic.
pub type Pixels = [u8; CARDGFX_PIXEL_COUNT];

// Rows between the top-left pixels of vertically adjacent tiles in the
// linear raster.
const TILE_PITCH: usize = CARDGFX_TILE_HEIGHT_PX * CARDGFX_FULLWIDTH_PX;

/// Unpack three packed words into the eight 6-bit pixels of one tile row.
pub fn unpack_row(w0: u16, w1: u16, w2: u16) -> [u8; 8] {
    [
        (w0 & 63) as u8,
        ((w0 >> 6) & 63) as u8,
        ((w0 >> 12) | ((w1 & 3) << 4)) as u8,
        ((w1 >> 2) & 63) as u8,
        ((w1 >> 8) & 63) as u8,
        ((w1 >> 14) | ((w2 & 15) << 2)) as u8,
        ((w2 >> 4) & 63) as u8,
        (w2 >> 10) as u8,
    ]
}

/// Pack eight pixels of one tile row into three words. Bits above the
/// low 6 of each pixel are discarded.
pub fn pack_row(px: &[u8; 8]) -> [u16; 3] {
    let p: [u16; 8] = [
        (px[0] & 63) as u16,
        (px[1] & 63) as u16,
        (px[2] & 63) as u16,
        (px[3] & 63) as u16,
        (px[4] & 63) as u16,
        (px[5] & 63) as u16,
        (px[6] & 63) as u16,
        (px[7] & 63) as u16,
    ];
    [
        p[0] | (p[1] << 6) | ((p[2] & 0xF) << 12),
        (p[2] >> 4) | (p[3] << 2) | (p[4] << 8) | ((p[5] & 0x3) << 14),
        (p[5] >> 2) | (p[6] << 4) | (p[7] << 10),
    ]
}

/// Unpack 6bpp tiled data into a linear image.
pub fn unpack(raw: &RawGfx) -> Pixels {
    let mut pixels = [0u8; CARDGFX_PIXEL_COUNT];
    let mut src = 0;

    for ty in 0..CARDGFX_TILEMAP_HEIGHT {
        for tx in 0..CARDGFX_TILEMAP_WIDTH {
            let mut dst = ty * TILE_PITCH + tx * CARDGFX_TILE_WIDTH_PX;
            for _ in 0..CARDGFX_TILE_HEIGHT_PX {
                let w0 = u16::from_le_bytes([raw[src], raw[src + 1]]);
                let w1 = u16::from_le_bytes([raw[src + 2], raw[src + 3]]);
                let w2 = u16::from_le_bytes([raw[src + 4], raw[src + 5]]);
                src += 6;

                pixels[dst..dst + 8].copy_from_slice(&unpack_row(w0, w1, w2));
                dst += CARDGFX_FULLWIDTH_PX;
            }
        }
    }

    pixels
}

/// Pack a linear image back into 6bpp tiled data. Exact inverse of
/// [`unpack`] for rasters whose values fit in 6 bits; higher bits are
/// silently dropped.
pub fn pack(pixels: &Pixels) -> RawGfx {
    let mut raw = [0u8; CARDGFX_READ_SIZEOF];
    let mut dst = 0;

    for ty in 0..CARDGFX_TILEMAP_HEIGHT {
        for tx in 0..CARDGFX_TILEMAP_WIDTH {
            let mut src = ty * TILE_PITCH + tx * CARDGFX_TILE_WIDTH_PX;
            for _ in 0..CARDGFX_TILE_HEIGHT_PX {
                let mut row = [0u8; 8];
                row.copy_from_slice(&pixels[src..src + 8]);
                src += CARDGFX_FULLWIDTH_PX;

                for word in pack_row(&row) {
                    raw[dst..dst + 2].copy_from_slice(&word.to_le_bytes());
                    dst += 2;
                }
            }
        }
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small deterministic generator so the round-trip tests cover more
    // than hand-picked values.
    fn lcg(seed: &mut u32) -> u32 {
        *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
        *seed
    }

    #[test]
    fn test_unpack_row_bit_layout() {
        // pixel 0 lives in the low 6 bits of word 0
        assert_eq!(unpack_row(63, 0, 0), [63, 0, 0, 0, 0, 0, 0, 0]);
        // pixel 2 straddles word 0 and word 1
        assert_eq!(unpack_row(0xF000, 0x0003, 0), [0, 0, 63, 0, 0, 0, 0, 0]);
        // pixel 5 straddles word 1 and word 2
        assert_eq!(unpack_row(0, 0xC000, 0x000F), [0, 0, 0, 0, 0, 63, 0, 0]);
        // pixel 7 is the top 6 bits of word 2
        assert_eq!(unpack_row(0, 0, 0xFC00), [0, 0, 0, 0, 0, 0, 0, 63]);
    }

    #[test]
    fn test_pack_row_inverts_unpack_row() {
        let mut seed = 0xBEEF;
        for _ in 0..1000 {
            let px: [u8; 8] = std::array::from_fn(|_| (lcg(&mut seed) & 63) as u8);
            let [w0, w1, w2] = pack_row(&px);
            assert_eq!(unpack_row(w0, w1, w2), px);
        }
    }

    #[test]
    fn test_unpack_row_inverts_pack_row() {
        // the packing is a bijection on the 48-bit row space
        let mut seed = 0xCAFE;
        for _ in 0..1000 {
            let w0 = lcg(&mut seed) as u16;
            let w1 = lcg(&mut seed) as u16;
            let w2 = lcg(&mut seed) as u16;
            let px = unpack_row(w0, w1, w2);
            assert_eq!(pack_row(&px), [w0, w1, w2]);
        }
    }

    #[test]
    fn test_pack_row_masks_high_bits() {
        let noisy = [0xFFu8; 8];
        let clean = [63u8; 8];
        assert_eq!(pack_row(&noisy), pack_row(&clean));
    }

    #[test]
    fn test_unpack_zero_buffer() {
        let raw = [0u8; CARDGFX_READ_SIZEOF];
        assert_eq!(unpack(&raw), [0u8; CARDGFX_PIXEL_COUNT]);
    }

    #[test]
    fn test_unpack_pack_all_ones() {
        // 0xFF bytes decode to all-set pixel values; re-encoding masks
        // them back to the identical bit pattern
        let raw = [0xFFu8; CARDGFX_READ_SIZEOF];
        let pixels = unpack(&raw);
        assert_eq!(pack(&pixels)[..], raw[..]);
    }

    #[test]
    fn test_pack_unpack_full_image() {
        let mut seed = 0x1234;
        let pixels: Pixels = std::array::from_fn(|_| (lcg(&mut seed) & 63) as u8);
        assert_eq!(unpack(&pack(&pixels))[..], pixels[..]);
    }

    #[test]
    fn test_tile_addressing() {
        // first packed row belongs to the top-left tile; the second
        // 8x8 tile starts 8 pixels to the right, not 72*8 in
        let mut raw = [0u8; CARDGFX_READ_SIZEOF];
        // tile 0, rows 0..8: mark pixel 0 of each row with 1
        // tile 1 starts at byte 48 (8 rows * 6 bytes)
        raw[48] = 2; // tile row 0 of tile 1, pixel 0
        let pixels = unpack(&raw);
        assert_eq!(pixels[8], 2, "tile 1 row 0 lands at column 8");

        // tile row 1 of the tilemap starts 8 raster rows down
        let tile_row1_start = CARDGFX_TILEMAP_WIDTH * 48;
        let mut raw = [0u8; CARDGFX_READ_SIZEOF];
        raw[tile_row1_start] = 3;
        let pixels = unpack(&raw);
        assert_eq!(pixels[8 * CARDGFX_FULLWIDTH_PX], 3);
    }

    #[test]
    fn test_rows_advance_by_image_stride() {
        let mut raw = [0u8; CARDGFX_READ_SIZEOF];
        raw[6] = 5; // tile 0, local row 1, pixel 0
        let pixels = unpack(&raw);
        assert_eq!(pixels[CARDGFX_FULLWIDTH_PX], 5);
    }
}
