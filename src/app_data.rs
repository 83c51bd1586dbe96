//! Application metadata and its string codec.
//!
//! App data is stored as a JSON object whose values are all strings. Each known
//! key has a decoder in [`AppDataKey`] that turns the stored string back into its
//! typed value; unknown keys decode to nothing so older or newer records still load.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::errors::{DecodeError, StoreError};
use crate::storage::{read_json, report_corrupt_once, write_json};
use crate::traits::KeyValueStore;

/// Storage key of the app data record.
pub const APPDATA_KEY: &str = "alephium/desktop-wallet/appdata";

/// Minimum time between two version checks.
pub const VERSION_CHECK_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Keys of the app data record that have a typed decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppDataKey {
    LastVersionCheckedAt,
}

impl AppDataKey {
    pub const ALL: [AppDataKey; 1] = [AppDataKey::LastVersionCheckedAt];

    pub fn as_str(self) -> &'static str {
        match self {
            AppDataKey::LastVersionCheckedAt => "lastVersionCheckedAt",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Decodes the stored string for this key.
    pub fn decode(self, value: &str) -> Result<AppDataValue, DecodeError> {
        match self {
            AppDataKey::LastVersionCheckedAt => DateTime::parse_from_rfc3339(value)
                .map(|dt| AppDataValue::Timestamp(dt.with_timezone(&Utc)))
                .map_err(|_| DecodeError::InvalidTimestamp {
                    key: self.as_str().to_string(),
                    value: value.to_string(),
                }),
        }
    }
}

/// A decoded app data value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppDataValue {
    /// Untyped pass-through value
    Raw(String),
    Timestamp(DateTime<Utc>),
}

impl AppDataValue {
    /// The string form this value is stored as.
    pub fn encode(&self) -> String {
        match self {
            AppDataValue::Raw(s) => s.clone(),
            AppDataValue::Timestamp(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AppDataValue::Timestamp(dt) => Some(*dt),
            AppDataValue::Raw(_) => None,
        }
    }
}

/// Restores the typed value of a stored app data entry.
///
/// An empty `key` passes `value` through untouched. A known key yields its
/// decoded value, an unknown key yields `None`.
pub fn to_app_data(key: &str, value: &str) -> Result<Option<AppDataValue>, DecodeError> {
    if key.is_empty() {
        return Ok(Some(AppDataValue::Raw(value.to_string())));
    }
    match AppDataKey::from_key(key) {
        Some(known) => known.decode(value).map(Some),
        None => Ok(None),
    }
}

/// Application-level metadata persisted alongside the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppData {
    pub last_version_checked_at: DateTime<Utc>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            last_version_checked_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl AppData {
    /// True once `interval` has elapsed since the last version check.
    pub fn is_version_check_due(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        match chrono::Duration::from_std(interval) {
            Ok(interval) => now - self.last_version_checked_at >= interval,
            Err(_) => false,
        }
    }

    pub fn record_version_check(&mut self, now: DateTime<Utc>) {
        self.last_version_checked_at = now;
    }

    fn to_entries(&self) -> Map<String, Value> {
        let mut entries = Map::new();
        entries.insert(
            AppDataKey::LastVersionCheckedAt.as_str().to_string(),
            Value::String(AppDataValue::Timestamp(self.last_version_checked_at).encode()),
        );
        entries
    }

    fn from_entries(entries: &Map<String, Value>) -> Result<Self, DecodeError> {
        let mut app_data = AppData::default();
        for (key, value) in entries {
            let Some(known) = AppDataKey::from_key(key) else {
                continue;
            };
            let Some(raw) = value.as_str() else {
                return Err(DecodeError::NotAString {
                    key: key.clone(),
                    value: value.to_string(),
                });
            };
            match known {
                AppDataKey::LastVersionCheckedAt => {
                    if let Some(dt) = known.decode(raw)?.as_timestamp() {
                        app_data.last_version_checked_at = dt;
                    }
                }
            }
        }
        Ok(app_data)
    }
}

/// Persists [`AppData`] under [`APPDATA_KEY`].
pub struct AppDataStore<S> {
    storage: S,
}

impl<S: KeyValueStore> AppDataStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads and decodes the stored record.
    ///
    /// Malformed JSON and entries that fail to decode are both reported as
    /// `CorruptPersistedState`.
    pub fn load(&self) -> Result<Option<AppData>, StoreError> {
        let Some(entries) = read_json::<Map<String, Value>, _>(&self.storage, APPDATA_KEY)? else {
            return Ok(None);
        };
        AppData::from_entries(&entries)
            .map(Some)
            .map_err(|e| StoreError::CorruptPersistedState {
                key: APPDATA_KEY.to_string(),
                reason: e.to_string(),
            })
    }

    /// Reads the stored record, falling back to a fresh one.
    ///
    /// A corrupt stored value is removed and reported once.
    pub fn load_or_default(&mut self) -> AppData {
        match self.load() {
            Ok(Some(app_data)) => app_data,
            Ok(None) => AppData::default(),
            Err(e) => {
                report_corrupt_once(APPDATA_KEY, &e);
                self.storage.remove(APPDATA_KEY);
                if let Err(flush_err) = self.storage.flush() {
                    log::warn!("Failed to flush after discarding app data: {}", flush_err);
                }
                AppData::default()
            }
        }
    }

    pub fn save(&mut self, app_data: &AppData) -> Result<(), StoreError> {
        write_json(&mut self.storage, APPDATA_KEY, &app_data.to_entries())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    /// Storage whose flush always fails, as with a read-only disk
    #[derive(Default)]
    struct FailingFlushStorage {
        inner: MemoryStorage,
    }

    impl KeyValueStore for FailingFlushStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.inner.get_string(key)
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.inner.set_string(key, value)
        }

        fn remove(&mut self, key: &str) {
            self.inner.remove(key)
        }

        fn flush(&mut self) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "read-only".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn test_save_propagates_flush_failure() {
        let mut store = AppDataStore::new(FailingFlushStorage::default());
        assert!(matches!(
            store.save(&AppData::default()),
            Err(StoreError::Storage(StorageError::Io { .. }))
        ));
    }

    #[test]
    fn test_load_or_default_survives_flush_failure() {
        let mut storage = FailingFlushStorage::default();
        storage.set_string(APPDATA_KEY, "[1, 2".to_string());
        let mut store = AppDataStore::new(storage);

        assert_eq!(store.load_or_default(), AppData::default());
        assert_eq!(store.storage().get_string(APPDATA_KEY), None);
    }

    fn new_year_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_decode_known_timestamp() {
        let value = to_app_data("lastVersionCheckedAt", "2024-01-01T00:00:00.000Z").unwrap();
        assert_eq!(value, Some(AppDataValue::Timestamp(new_year_2024())));
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(to_app_data("unknown_key", "x").unwrap(), None);
    }

    #[test]
    fn test_empty_key_passes_through() {
        assert_eq!(
            to_app_data("", "raw").unwrap(),
            Some(AppDataValue::Raw("raw".to_string()))
        );
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let err = to_app_data("lastVersionCheckedAt", "yesterday").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidTimestamp {
                key: "lastVersionCheckedAt".to_string(),
                value: "yesterday".to_string(),
            }
        );
    }

    #[test]
    fn test_timestamp_encoding() {
        let value = AppDataValue::Timestamp(new_year_2024());
        assert_eq!(value.encode(), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_key_table_is_consistent() {
        for key in AppDataKey::ALL {
            assert_eq!(AppDataKey::from_key(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_store_save_and_load() {
        let mut store = AppDataStore::new(MemoryStorage::new());
        assert_eq!(store.load().unwrap(), None);

        let app_data = AppData {
            last_version_checked_at: new_year_2024(),
        };
        store.save(&app_data).unwrap();

        let raw = store.storage().get_string(APPDATA_KEY).unwrap();
        assert_eq!(raw, r#"{"lastVersionCheckedAt":"2024-01-01T00:00:00.000Z"}"#);
        assert_eq!(store.load().unwrap(), Some(app_data));
    }

    #[test]
    fn test_store_ignores_unknown_entries() {
        let mut storage = MemoryStorage::new();
        storage.set_string(
            APPDATA_KEY,
            r#"{"lastVersionCheckedAt":"2024-01-01T00:00:00.000Z","theme":"dark","count":3}"#.to_string(),
        );
        let store = AppDataStore::new(storage);

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.last_version_checked_at, new_year_2024());
    }

    #[test]
    fn test_store_discards_undecodable_record() {
        let mut storage = MemoryStorage::new();
        storage.set_string(APPDATA_KEY, r#"{"lastVersionCheckedAt":"not a date"}"#.to_string());
        let mut store = AppDataStore::new(storage);

        assert!(matches!(
            store.load(),
            Err(StoreError::CorruptPersistedState { .. })
        ));
        assert_eq!(store.load_or_default(), AppData::default());
        assert_eq!(store.storage().get_string(APPDATA_KEY), None);
    }

    #[test]
    fn test_store_discards_non_string_known_entry() {
        let mut storage = MemoryStorage::new();
        storage.set_string(APPDATA_KEY, r#"{"lastVersionCheckedAt":1704067200000}"#.to_string());
        let mut store = AppDataStore::new(storage);

        assert!(matches!(
            store.load(),
            Err(StoreError::CorruptPersistedState { .. })
        ));
        assert_eq!(store.load_or_default(), AppData::default());
        assert_eq!(store.storage().get_string(APPDATA_KEY), None);
    }

    #[test]
    fn test_store_ignores_non_string_unknown_entry() {
        let mut storage = MemoryStorage::new();
        storage.set_string(
            APPDATA_KEY,
            r#"{"lastVersionCheckedAt":"2024-01-01T00:00:00.000Z","launches":12}"#.to_string(),
        );
        let store = AppDataStore::new(storage);

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.last_version_checked_at, new_year_2024());
    }

    #[test]
    fn test_version_check_due() {
        let mut app_data = AppData::default();
        let now = new_year_2024();
        assert!(app_data.is_version_check_due(now, VERSION_CHECK_INTERVAL));

        app_data.record_version_check(now);
        let an_hour_later = now + chrono::Duration::hours(1);
        assert!(!app_data.is_version_check_due(an_hour_later, VERSION_CHECK_INTERVAL));

        let next_day = now + chrono::Duration::hours(24);
        assert!(app_data.is_version_check_due(next_day, VERSION_CHECK_INTERVAL));
    }
}
