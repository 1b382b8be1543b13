//! Persistent storage abstractions
//!
//! Byte-addressable non-volatile storage, modelled after an EEPROM. Access
//! is synchronous and assumed to succeed; a failing write is a hardware
//! fault the platform handles on its own.

/// Value of a byte that has never been written
pub const ERASED_BYTE: u8 = 0xFF;

/// Byte-addressable persistent storage
pub trait ByteStorage {
    /// Read `buffer.len()` bytes starting at `offset`
    fn read_block(&mut self, offset: u16, buffer: &mut [u8]);

    /// Write `data` starting at `offset`
    ///
    /// A subsequent read of the same range observes the written bytes.
    fn write_block(&mut self, offset: u16, data: &[u8]);

    /// Read a single byte
    fn read_byte(&mut self, offset: u16) -> u8 {
        let mut byte = [ERASED_BYTE];
        self.read_block(offset, &mut byte);
        byte[0]
    }
}
