//! Conversions between the ROM's 15-bit GBA colors and 24-bit RGB.
//!
//! GBA colors are RGB555 packed little-endian into 16 bits: red in the
//! low 5 bits, then green, then blue, with the top bit unused. 24-bit
//! colors are packed `0x00RRGGBB`.

/// 15-bit GBA hardware color.
pub type GbaColor = u16;

/// Red component of an RGB555 color.
pub const fn r5(color: GbaColor) -> u8 {
    (color & 0x1F) as u8
}

/// Green component of an RGB555 color.
pub const fn g5(color: GbaColor) -> u8 {
    ((color >> 5) & 0x1F) as u8
}

/// Blue component of an RGB555 color.
pub const fn b5(color: GbaColor) -> u8 {
    ((color >> 10) & 0x1F) as u8
}

/// Widen a 5-bit channel to 8 bits, replicating the top three bits into
/// the low bits so the 32 levels spread evenly over 0..=255.
pub const fn expand5to8(component: u8) -> u8 {
    (component << 3) | ((component >> 2) & 7)
}

/// Convert a 16-bit RGB555 color to packed 24-bit RGB.
pub const fn rgb555_to_rgb888(color: GbaColor) -> u32 {
    ((expand5to8(r5(color)) as u32) << 16)
        | ((expand5to8(g5(color)) as u32) << 8)
        | (expand5to8(b5(color)) as u32)
}

/// Convert packed 24-bit RGB to RGB555 by truncating the low 3 bits of
/// each channel. Lossy; not an inverse of [`rgb555_to_rgb888`].
pub const fn rgb888_to_rgb555(color: u32) -> GbaColor {
    rgb_to_rgb555(
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Convert separate 8-bit R/G/B channels to RGB555.
pub const fn rgb_to_rgb555(r: u8, g: u8, b: u8) -> GbaColor {
    ((r >> 3) as GbaColor) | (((g >> 3) as GbaColor) << 5) | (((b >> 3) as GbaColor) << 10)
}

/// Color-correct a packed 24-bit color for display purposes.
///
/// Only used when presenting colors on screen, never on the encode path.
pub const fn resaturate(color: u32) -> u32 {
    color | ((color >> 5) & 0x070707)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_extraction() {
        // red 31, green 0, blue 31
        let magenta: GbaColor = 0x7C1F;
        assert_eq!(r5(magenta), 31);
        assert_eq!(g5(magenta), 0);
        assert_eq!(b5(magenta), 31);

        // the unused top bit must not leak into blue
        assert_eq!(b5(0x8000), 0);
    }

    #[test]
    fn test_expand5to8_endpoints() {
        assert_eq!(expand5to8(0), 0);
        assert_eq!(expand5to8(31), 255);
        assert_eq!(expand5to8(16), 0x84);
    }

    #[test]
    fn test_expand5to8_monotonic_and_distinct() {
        let mut prev = -1i32;
        for c in 0u8..32 {
            let e = expand5to8(c) as i32;
            assert!(e > prev, "expand5to8({}) = {} not increasing", c, e);
            prev = e;
        }
    }

    #[test]
    fn test_rgb555_to_rgb888() {
        assert_eq!(rgb555_to_rgb888(0x0000), 0x000000);
        assert_eq!(rgb555_to_rgb888(0x7FFF), 0xFFFFFF);
        // pure red 555 maps to full red 888
        assert_eq!(rgb555_to_rgb888(0x001F), 0xFF0000);
        // pure blue
        assert_eq!(rgb555_to_rgb888(0x7C00), 0x0000FF);
    }

    #[test]
    fn test_rgb555_round_trip_idempotent() {
        for &c in &[0x0000u16, 0x7FFF, 0x001F, 0x03E0, 0x7C00, 0x1234, 0x5A5A] {
            let rgb = rgb555_to_rgb888(c);
            assert_eq!(rgb888_to_rgb555(rgb), c);
        }
    }

    #[test]
    fn test_rgb888_round_trip_is_lossy() {
        // truncation drops the low 3 bits of each channel, so an
        // arbitrary 24-bit color is generally not reproduced
        let c = 0x123456;
        let back = rgb555_to_rgb888(rgb888_to_rgb555(c));
        assert_ne!(back, c);
        // but a second trip is stable
        assert_eq!(rgb555_to_rgb888(rgb888_to_rgb555(back)), back);
    }

    #[test]
    fn test_resaturate() {
        assert_eq!(resaturate(0x000000), 0x000000);
        assert_eq!(resaturate(0xFFFFFF), 0xFFFFFF);
        // zero-padded channels pick up their top bits
        assert_eq!(resaturate(0xE0E0E0), 0xE7E7E7);
    }
}
