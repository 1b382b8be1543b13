//! Persisted user settings
//!
//! A fixed 8-byte record at the start of the settings area, loaded once at
//! startup into the working copy and written back only on request.

pub mod record;
pub mod store;

pub use record::{
    Settings, DEFAULT_COLOR, DEFAULT_INTERVAL, DEFAULT_TIMEOUT, RECORD_SIZE, SETTINGS_HEADER,
    SETTINGS_VERSION,
};
pub use store::{SettingsStore, StorageState};
