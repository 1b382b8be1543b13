//! EEPROM emulation on NOR flash
//!
//! Parts without a data EEPROM keep the settings area in one erase sector
//! of program flash. The sector is mirrored in RAM; reads are served from
//! the mirror and every write erases and reprograms the whole page.

use blinky_hal::storage::ERASED_BYTE;
use blinky_hal::ByteStorage;
use embedded_storage::nor_flash::{NorFlash, NorFlashError, NorFlashErrorKind, ReadNorFlash};

/// Flash failure recorded by [`PagedStorage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Page offset is not aligned to the flash erase size
    Misaligned,
    /// Page extends past the end of the flash
    OutOfBounds,
    /// The flash reported an error
    Flash,
}

impl StorageError {
    fn from_flash<E: NorFlashError>(e: E) -> Self {
        match e.kind() {
            NorFlashErrorKind::NotAligned => StorageError::Misaligned,
            NorFlashErrorKind::OutOfBounds => StorageError::OutOfBounds,
            _ => StorageError::Flash,
        }
    }
}

/// Byte storage backed by one `N`-byte page of NOR flash
///
/// Bytes outside the page read as erased and writes to them are dropped.
/// A failed erase or program leaves the mirror updated and is reported
/// through [`PagedStorage::take_error`].
pub struct PagedStorage<F, const N: usize> {
    flash: F,
    base: u32,
    page: [u8; N],
    error: Option<StorageError>,
}

impl<F: NorFlash, const N: usize> PagedStorage<F, N> {
    /// Mirror the page at `base`
    ///
    /// `base` must sit on an erase boundary and the page must fit within
    /// one erase sector.
    pub fn new(mut flash: F, base: u32) -> Result<Self, StorageError> {
        if base as usize % F::ERASE_SIZE != 0
            || N > F::ERASE_SIZE
            || N % F::WRITE_SIZE != 0
        {
            return Err(StorageError::Misaligned);
        }
        if base as usize + N > flash.capacity() {
            return Err(StorageError::OutOfBounds);
        }

        let mut page = [ERASED_BYTE; N];
        flash
            .read(base, &mut page)
            .map_err(StorageError::from_flash)?;

        Ok(Self {
            flash,
            base,
            page,
            error: None,
        })
    }

    /// Return and clear the last flash failure
    pub fn take_error(&mut self) -> Option<StorageError> {
        self.error.take()
    }

    /// Release the flash
    pub fn free(self) -> F {
        self.flash
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        let sector_end = self.base + F::ERASE_SIZE as u32;
        self.flash
            .erase(self.base, sector_end)
            .map_err(StorageError::from_flash)?;
        self.flash
            .write(self.base, &self.page)
            .map_err(StorageError::from_flash)
    }
}

impl<F: NorFlash, const N: usize> ByteStorage for PagedStorage<F, N> {
    fn read_block(&mut self, offset: u16, buffer: &mut [u8]) {
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = self
                .page
                .get(offset as usize + i)
                .copied()
                .unwrap_or(ERASED_BYTE);
        }
    }

    fn write_block(&mut self, offset: u16, data: &[u8]) {
        let start = offset as usize;
        if start >= N {
            return;
        }
        let end = (start + data.len()).min(N);
        if self.page[start..end] == data[..end - start] {
            return;
        }
        self.page[start..end].copy_from_slice(&data[..end - start]);

        if let Err(e) = self.commit() {
            self.error = Some(e);
        }
    }
}
