//! Settings persistence
//!
//! Owns the storage backend and the working copy of the settings. The
//! working copy is what command handlers mutate; storage is only touched by
//! `load`, `save` and `state`.

use blinky_hal::ByteStorage;

use super::record::{Settings, OFFSET_HEADER, RECORD_SIZE, SETTINGS_HEADER};

/// Storage offset of the settings record
pub const RECORD_OFFSET: u16 = 0x0000;

/// What the persistent record currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageState {
    /// Header does not match; nothing meaningful was ever saved
    Empty = 0,
    /// A record exists and its color and interval are the defaults
    Defaults = 1,
    /// A record exists with user-chosen values
    NonDefaults = 2,
}

impl StorageState {
    /// Wire value reported to the host
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Settings store with its working copy
pub struct SettingsStore<S> {
    storage: S,
    working: Settings,
}

impl<S: ByteStorage> SettingsStore<S> {
    /// Create a store; the working copy holds defaults until `load`
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            working: Settings::default(),
        }
    }

    /// Read the record into the working copy and return it
    ///
    /// A record with a foreign header or version (blank or corrupted
    /// media) gets default color, interval and timeout; the remaining bytes
    /// are passed through as stored.
    pub fn load(&mut self) -> Settings {
        let mut bytes = [0u8; RECORD_SIZE];
        self.storage.read_block(RECORD_OFFSET, &mut bytes);

        let mut settings = Settings::from_bytes(&bytes);
        if !settings.is_valid() {
            settings.clear();
        }

        self.working = settings;
        settings
    }

    /// Persist the working copy
    ///
    /// Header and version are stamped to the current values first, which is
    /// the only way a previously invalid record becomes valid.
    pub fn save(&mut self) {
        self.working.stamp();
        let bytes = self.working.to_bytes();
        self.storage.write_block(RECORD_OFFSET, &bytes);
    }

    /// Classify what is currently stored
    pub fn state(&mut self) -> StorageState {
        let header = self
            .storage
            .read_byte(RECORD_OFFSET + OFFSET_HEADER as u16);
        if header != SETTINGS_HEADER {
            return StorageState::Empty;
        }

        let mut bytes = [0u8; RECORD_SIZE];
        self.storage.read_block(RECORD_OFFSET, &mut bytes);
        if Settings::from_bytes(&bytes).has_default_values() {
            StorageState::Defaults
        } else {
            StorageState::NonDefaults
        }
    }

    /// Reset the working copy to defaults without touching storage
    pub fn clear(&mut self) {
        self.working.clear();
    }

    /// The working copy
    pub fn settings(&self) -> &Settings {
        &self.working
    }

    /// Mutable access to the working copy
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.working
    }

    /// The storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage backend
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::settings::record::{
        DEFAULT_COLOR, DEFAULT_INTERVAL, DEFAULT_TIMEOUT, OFFSET_RESERVED, OFFSET_VERSION,
        SETTINGS_VERSION,
    };
    use blinky_hal::storage::ERASED_BYTE;
    use proptest::prelude::*;

    /// EEPROM-like mock storage
    struct MockStorage {
        bytes: [u8; 16],
        writes: usize,
    }

    impl MockStorage {
        fn erased() -> Self {
            Self {
                bytes: [ERASED_BYTE; 16],
                writes: 0,
            }
        }

        fn with_record(record: [u8; RECORD_SIZE]) -> Self {
            let mut storage = Self::erased();
            storage.bytes[..RECORD_SIZE].copy_from_slice(&record);
            storage
        }
    }

    impl ByteStorage for MockStorage {
        fn read_block(&mut self, offset: u16, buffer: &mut [u8]) {
            let start = offset as usize;
            buffer.copy_from_slice(&self.bytes[start..start + buffer.len()]);
        }

        fn write_block(&mut self, offset: u16, data: &[u8]) {
            let start = offset as usize;
            self.bytes[start..start + data.len()].copy_from_slice(data);
            self.writes += 1;
        }
    }

    #[test]
    fn test_load_blank_media_uses_defaults() {
        let mut store = SettingsStore::new(MockStorage::erased());
        let settings = store.load();

        assert_eq!(settings.color, DEFAULT_COLOR);
        assert_eq!(settings.blink_interval, DEFAULT_INTERVAL);
        assert_eq!(settings.blink_timeout, DEFAULT_TIMEOUT);
        // Remaining bytes surface as stored
        assert_eq!(settings.reserved, 0xFF);
        assert_eq!(settings.header, 0xFF);
        assert_eq!(settings.version, 0xFF);
        assert_eq!(store.settings(), &settings);
    }

    #[test]
    fn test_load_wrong_version_uses_defaults() {
        let mut store =
            SettingsStore::new(MockStorage::with_record([0xFF, 0x42, 0x01, 1, 2, 3, 4, 5]));
        let settings = store.load();
        assert_eq!(settings.color, DEFAULT_COLOR);
        assert_eq!(settings.blink_interval, DEFAULT_INTERVAL);
        assert_eq!(settings.version, 0x01);
    }

    #[test]
    fn test_load_valid_record() {
        let mut store =
            SettingsStore::new(MockStorage::with_record([0xFF, 0x42, 0x00, 1, 2, 3, 4, 5]));
        let settings = store.load();
        assert_eq!(settings.color, Color::new(1, 2, 3));
        assert_eq!(settings.blink_interval, 4);
        assert_eq!(settings.blink_timeout, 5);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = SettingsStore::new(MockStorage::erased());
        store.load();
        {
            let working = store.settings_mut();
            working.color = Color::new(200, 0, 7);
            working.blink_interval = 3;
            working.blink_timeout = 255;
        }
        let expected = *store.settings();
        store.save();

        let mut reloaded = SettingsStore::new(MockStorage::with_record(
            store.storage().bytes[..RECORD_SIZE].try_into().unwrap(),
        ));
        let settings = reloaded.load();

        assert_eq!(settings.color, expected.color);
        assert_eq!(settings.blink_interval, expected.blink_interval);
        assert_eq!(settings.blink_timeout, expected.blink_timeout);
        assert_eq!(settings.reserved, expected.reserved);
        assert_eq!(settings.header, SETTINGS_HEADER);
        assert_eq!(settings.version, SETTINGS_VERSION);
    }

    #[test]
    fn test_state() {
        let mut store = SettingsStore::new(MockStorage::erased());
        assert_eq!(store.state(), StorageState::Empty);

        store.load();
        store.save();
        assert_eq!(store.state(), StorageState::Defaults);

        store.settings_mut().color = Color::new(0, 0, 1);
        // Working copy only, storage still holds defaults
        assert_eq!(store.state(), StorageState::Defaults);

        store.save();
        assert_eq!(store.state(), StorageState::NonDefaults);
    }

    #[test]
    fn test_state_ignores_version() {
        let mut store =
            SettingsStore::new(MockStorage::with_record([0xFF, 0x42, 0x09, 10, 10, 10, 31, 0]));
        assert_eq!(store.state(), StorageState::Defaults);
    }

    #[test]
    fn test_clear_does_not_touch_storage() {
        let mut store =
            SettingsStore::new(MockStorage::with_record([0xFF, 0x42, 0x00, 1, 2, 3, 4, 5]));
        store.load();
        store.clear();

        assert_eq!(store.settings().color, DEFAULT_COLOR);
        assert_eq!(store.storage().writes, 0);
        assert_eq!(store.state(), StorageState::NonDefaults);
    }

    proptest! {
        #[test]
        fn foreign_header_loads_defaults(
            mut record in any::<[u8; RECORD_SIZE]>(),
            header in any::<u8>().prop_filter("foreign header", |h| *h != SETTINGS_HEADER),
        ) {
            record[OFFSET_HEADER] = header;
            let mut store = SettingsStore::new(MockStorage::with_record(record));
            let settings = store.load();

            prop_assert_eq!(settings.color, DEFAULT_COLOR);
            prop_assert_eq!(settings.blink_interval, DEFAULT_INTERVAL);
            prop_assert_eq!(settings.blink_timeout, DEFAULT_TIMEOUT);
            prop_assert_eq!(settings.reserved, record[OFFSET_RESERVED]);
            prop_assert_eq!(settings.header, header);
            prop_assert_eq!(settings.version, record[OFFSET_VERSION]);
            prop_assert_eq!(store.storage().writes, 0);
        }
    }
}
