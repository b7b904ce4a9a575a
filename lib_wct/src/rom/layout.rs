//! Fixed layout of the YWCT2K4 ROM image.
//!
//! Every record type lives at a hard-coded offset; there is no
//! versioning field, so these values describe the one supported ROM
//! revision and must match it byte-exactly. Offsets are relative to
//! the start of the file. Pointers stored *inside* the ROM carry the
//! GBA cartridge base address and have to go through
//! [`address_to_offset`] before they can be used as file offsets.

/// GBA cartridge ROM base address. Pointer values read from the ROM
/// have this added in already.
pub const GBA_ROM_BASEADDR: u32 = 0x0800_0000;

// Header
pub const HEADER_ENTRYPT: u32 = 0x2E;
pub const HEADER_GAMEID_OFFS: u32 = 0xA0;
pub const HEADER_GAMEID_LEN: usize = 12;
/// Game ID signature in the ROM header, NUL included.
pub const HEADER_GAMEID: &[u8; HEADER_GAMEID_LEN] = b"YWCT2004USA\0";

/// Total length of a valid ROM image (16 MiB).
pub const EXPECTED_ROM_SIZE: u64 = 16_777_216;

/// Number of cards defined by the ROM (1139 in the reference image;
/// the surrounding data is all sized relative to it).
pub const OFFS_DEF_ALLCARD_NUM: u32 = 0x99A60;

/// g_CardIDs - array of shorts identifying cards independent of their
/// ordering.
pub const OFFS_CARDIDS: u32 = 0x99A64;
pub const CARDID_SIZE: usize = 2;

// Card graphic palettes: 128 bytes each, 64 entries of 16-bit RGB555
// colors, in the same order as the cards by their number.
pub const OFFS_CARDPALETTES_START: u32 = 0x9A34C;
pub const OFFS_CARDPALETTES_END: u32 = 0xBDC4C;
pub const CARDPALETTE_READ_SIZEOF: usize = 128;
pub const CARDPALETTE_ENTRY_SIZE: usize = 2;
pub const CARDPALETTE_NUMENTRIES: usize = CARDPALETTE_READ_SIZEOF / CARDPALETTE_ENTRY_SIZE;
pub const CARDPALETTE_COUNT: u32 =
    (OFFS_CARDPALETTES_END - OFFS_CARDPALETTES_START) / CARDPALETTE_READ_SIZEOF as u32;

// Card graphics: 9x10 of 8x8 tiles stored packed at 6bpp, in the same
// order as the cards by their number.
pub const OFFS_CARDGFX_START: u32 = 0xBDC4C;
pub const OFFS_CARDGFX_END: u32 = 0x56E00C;
pub const CARDGFX_TILE_WIDTH_PX: usize = 8;
pub const CARDGFX_TILE_HEIGHT_PX: usize = 8;
pub const CARDGFX_TILEMAP_WIDTH: usize = 9;
pub const CARDGFX_TILEMAP_HEIGHT: usize = 10;
pub const CARDGFX_FULLWIDTH_PX: usize = CARDGFX_TILE_WIDTH_PX * CARDGFX_TILEMAP_WIDTH;
pub const CARDGFX_FULLHEIGHT_PX: usize = CARDGFX_TILE_HEIGHT_PX * CARDGFX_TILEMAP_HEIGHT;
pub const CARDGFX_PIXEL_COUNT: usize = CARDGFX_FULLWIDTH_PX * CARDGFX_FULLHEIGHT_PX;
pub const CARDGFX_BPP: usize = 6;
/// Bytes stored per card graphic: 5760 pixels packed at 6bpp.
pub const CARDGFX_READ_SIZEOF: usize = CARDGFX_PIXEL_COUNT * CARDGFX_BPP / 8;
pub const CARDGFX_COUNT: u32 =
    (OFFS_CARDGFX_END - OFFS_CARDGFX_START) / CARDGFX_READ_SIZEOF as u32;

// Card names super-string, followed by an array of 32-bit offsets into
// it (one per card per language).
pub const OFFS_CARDNAMES: u32 = 0x56E00C;
pub const OFFS_CARDNAMES_END: u32 = 0x58ACDC;
pub const OFFS_CARDNAME_OFFS: u32 = OFFS_CARDNAMES_END;
pub const CARDNAME_OFFS_SIZE: usize = 4;

// Card texts super-string and its offset array.
pub const OFFS_CARDTEXTS: u32 = 0x5917A4;
pub const OFFS_CARDTEXTS_END: u32 = 0x65CF38;
pub const OFFS_CARDTEXTS_OFFS: u32 = OFFS_CARDTEXTS_END;
pub const CARDTEXTS_OFFS_SIZE: usize = 4;

/// Card data: one packed 32-bit DWORD per card.
pub const OFFS_CARDDATA: u32 = 0x663A00;
pub const CARDDATA_SIZE: usize = 4;

// Fusion tables, two- and three-material. Each entry is four card IDs;
// the tables are terminated by all-zero entries.
pub const OFFS_FUSIONS_2MAT: u32 = 0xC42EF0;
pub const OFFS_FUSIONS_3MAT: u32 = 0xC430C8;

// Ritual table: packed monster/spell/level entries, zero-terminated.
pub const OFFS_RITUALDATA: u32 = 0xC430E8;
pub const RITUALDATA_ENTRY_SIZE: usize = 4;

// Opponent deck records. The deck list field is a ROM-address pointer
// and needs base translation before use.
pub const NUMOPPDECKS: u32 = 29;
pub const OFFS_OPPDECKS: u32 = 0xC483EC;
pub const OPPDECK_ORIG_SIZEOF: usize = 0x0C;
pub const OPPDECK_DECKLIST_OFFS: u32 = 0;
pub const OPPDECK_LISTLEN_OFFS: u32 = 4;
pub const OPPDECK_FLAGS_OFFS: u32 = 8;

// Booster pack references; the list fields are ROM-address pointers.
pub const NUMBOOSTERPACKS: u32 = 24;
pub const OFFS_BOOSTERPACKS: u32 = 0xC4FF04;
pub const BOOSTERREF_ORIG_SIZEOF: usize = 8;
pub const BOOSTERREF_LIST_OFFS: u32 = 0;
pub const BOOSTERREF_ID_OFFS: u32 = 4;

// booster structures pointed at by the booster references
pub const BOOSTER_ORIG_SIZEOF: usize = 0x40;
pub const BOOSTER_RARELIST_OFFS: u32 = 0x30;
pub const BOOSTER_RARELEN_OFFS: u32 = 0x34;
pub const BOOSTER_COMMONLIST_OFFS: u32 = 0x38;
pub const BOOSTER_COMMONLEN_OFFS: u32 = 0x3C;

// Opponent deck names: offsets to strings, 30 names per language in
// the order Japanese, English, German, French, Italian, Spanish.
pub const NUM_LANGUAGES: u32 = 6;
pub const OFFS_OPPDECKNAMES: u32 = 0xC509BC;
pub const NUMOPPDECKNAMES: u32 = 30;
pub const NUMOPPDECKNAMES_LOCALIZED: u32 = NUMOPPDECKNAMES * NUM_LANGUAGES;
pub const OPPDECKNAMES_ENTRY_SIZE: usize = 4;

/// Translate a GBA ROM address stored inside the container to a
/// file-local offset. `None` if the value does not point into the
/// cartridge address space.
pub const fn address_to_offset(addr: u32) -> Option<u32> {
    if addr < GBA_ROM_BASEADDR {
        None
    } else {
        Some(addr - GBA_ROM_BASEADDR)
    }
}

/// Inverse of [`address_to_offset`], for values that get written back.
pub const fn offset_to_address(offset: u32) -> u32 {
    offset + GBA_ROM_BASEADDR
}

/// File offset of the palette record for 0-based picture `picnum`.
pub const fn palette_offset(picnum: u32) -> u32 {
    OFFS_CARDPALETTES_START + picnum * CARDPALETTE_READ_SIZEOF as u32
}

/// File offset of the packed graphic record for 0-based picture `picnum`.
pub const fn gfx_offset(picnum: u32) -> u32 {
    OFFS_CARDGFX_START + picnum * CARDGFX_READ_SIZEOF as u32
}
