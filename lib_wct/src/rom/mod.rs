//! Bounds-checked random-access reads from a ROM image.

pub mod layout;

use log::debug;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomError {
    #[error("failed to open ROM file")]
    Open(#[source] io::Error),
    #[error("read of {size} bytes at offset {offset:#x} runs past ROM end ({len} bytes)")]
    OutOfBounds { offset: u32, size: u64, len: u64 },
    #[error("I/O error while reading ROM")]
    Io(#[from] io::Error),
}

/// Values that can be read from the ROM at an absolute offset.
///
/// Multi-byte scalars are stored little-endian, the GBA's native byte
/// order. Scalars are at most four bytes wide.
pub trait RomValue: Sized {
    const SIZE: usize;
    fn from_le_slice(bytes: &[u8]) -> Self;
}

impl RomValue for u8 {
    const SIZE: usize = 1;
    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl RomValue for u16 {
    const SIZE: usize = 2;
    fn from_le_slice(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }
}

impl RomValue for u32 {
    const SIZE: usize = 4;
    fn from_le_slice(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

/// A randomly-seekable ROM image.
///
/// Every read is checked against the recorded total length before the
/// seek, so a short or truncated file surfaces as
/// [`RomError::OutOfBounds`] instead of a partially-filled buffer.
pub struct RomFile<R> {
    inner: R,
    len: u64,
}

impl RomFile<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let file = File::open(path).map_err(RomError::Open)?;
        let len = file.metadata().map_err(RomError::Open)?.len();
        debug!("opened ROM image, {} bytes", len);
        Ok(Self { inner: file, len })
    }
}

impl<R: Read + Seek> RomFile<R> {
    /// Wrap an already-open seekable reader (tests use `io::Cursor`).
    pub fn new(mut inner: R) -> Result<Self, RomError> {
        let len = inner.seek(SeekFrom::End(0))?;
        Ok(Self { inner, len })
    }

    /// Total length of the image in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn read_exact_at(&mut self, offset: u32, buf: &mut [u8]) -> Result<(), RomError> {
        let size = buf.len() as u64;
        if offset as u64 + size > self.len {
            return Err(RomError::OutOfBounds {
                offset,
                size,
                len: self.len,
            });
        }
        self.inner.seek(SeekFrom::Start(offset as u64))?;
        self.inner.read_exact(buf)?;
        Ok(())
    }

    /// Read a single scalar at an absolute offset.
    pub fn read_at<T: RomValue>(&mut self, offset: u32) -> Result<T, RomError> {
        let mut buf = [0u8; 4];
        let buf = &mut buf[..T::SIZE];
        self.read_exact_at(offset, buf)?;
        Ok(T::from_le_slice(buf))
    }

    /// Read a fixed-size array of scalars at an absolute offset.
    pub fn read_array_at<T, const N: usize>(&mut self, offset: u32) -> Result<[T; N], RomError>
    where
        T: RomValue + Copy + Default,
    {
        let mut raw = vec![0u8; N * T::SIZE];
        self.read_exact_at(offset, &mut raw)?;
        let mut out = [T::default(); N];
        for (slot, chunk) in out.iter_mut().zip(raw.chunks_exact(T::SIZE)) {
            *slot = T::from_le_slice(chunk);
        }
        Ok(out)
    }

    /// Read `count` scalars at an absolute offset. The caller supplies
    /// the element count; it is never inferred from the stream.
    pub fn read_vec_at<T: RomValue>(&mut self, offset: u32, count: usize) -> Result<Vec<T>, RomError> {
        let mut raw = vec![0u8; count * T::SIZE];
        self.read_exact_at(offset, &mut raw)?;
        Ok(raw.chunks_exact(T::SIZE).map(T::from_le_slice).collect())
    }

    /// Check whether the image looks like a YWCT2K4 ROM: correct total
    /// length and the game-ID signature in the header.
    pub fn verify(&mut self) -> bool {
        if self.len != layout::EXPECTED_ROM_SIZE {
            return false;
        }
        match self.read_array_at::<u8, { layout::HEADER_GAMEID_LEN }>(layout::HEADER_GAMEID_OFFS) {
            Ok(sig) => &sig == layout::HEADER_GAMEID,
            Err(_) => false,
        }
    }

    /// Number of cards defined by the ROM.
    pub fn num_cards(&mut self) -> Result<u32, RomError> {
        self.read_at::<u32>(layout::OFFS_DEF_ALLCARD_NUM)
    }
}
