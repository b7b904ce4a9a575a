use lib_wct::rom::layout;

/// Build an in-memory ROM image just large enough to hold picture
/// records up to `picnum`, with the card count word filled in.
pub fn synthetic_rom(picnum: u32, numcards: u32) -> Vec<u8> {
    let len = layout::gfx_offset(picnum) as usize + layout::CARDGFX_READ_SIZEOF;
    let mut image = vec![0u8; len];
    image[layout::OFFS_DEF_ALLCARD_NUM as usize..][..4].copy_from_slice(&numcards.to_le_bytes());
    image
}

/// Store a palette and packed graphic at the record slots for `picnum`.
pub fn store_picture(image: &mut [u8], picnum: u32, palette: &[u16; 64], raw: &[u8]) {
    let pal_offs = layout::palette_offset(picnum) as usize;
    for (i, &color) in palette.iter().enumerate() {
        image[pal_offs + 2 * i..pal_offs + 2 * i + 2].copy_from_slice(&color.to_le_bytes());
    }
    let gfx_offs = layout::gfx_offset(picnum) as usize;
    image[gfx_offs..gfx_offs + raw.len()].copy_from_slice(raw);
}
