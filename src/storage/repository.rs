//! Typed load/save of the five durable keys.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::ShiftCatalog;
use crate::error::{EngineError, EngineResult};
use crate::locale::Locale;
use crate::models::{CurrencyConfig, ShiftType, WorkedDay};
use crate::store::WorkedDayStore;

use super::StorageBackend;

/// The durable storage keys.
pub mod keys {
    /// Serialized worked-day records (versioned envelope).
    pub const DAYS: &str = "worklog.days";
    /// Serialized shift-type catalog (versioned envelope).
    pub const CATALOG: &str = "worklog.shift_types";
    /// The hourly base rate.
    pub const BASE_RATE: &str = "worklog.base_rate";
    /// The currency display configuration.
    pub const CURRENCY: &str = "worklog.currency";
    /// The active locale code.
    pub const LOCALE: &str = "worklog.locale";
}

/// Schema version written into the collection envelopes.
const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct PersistedDays {
    version: u32,
    days: Vec<WorkedDay>,
}

#[derive(Serialize, Deserialize)]
struct PersistedCatalog {
    version: u32,
    shift_types: Vec<ShiftType>,
}

/// Typed persistence over a key-value backend.
///
/// Every `load_*` method is infallible and falls back to the built-in
/// default for its key on absence or malformed data. Every `save_*` method
/// reports write rejections as [`EngineError::Storage`].
pub struct Repository {
    backend: Box<dyn StorageBackend + Send + Sync>,
}

impl Repository {
    /// Wraps a storage backend.
    pub fn new(backend: Box<dyn StorageBackend + Send + Sync>) -> Self {
        Repository { backend }
    }

    /// Loads the worked-day store; defaults to an empty store.
    pub fn load_days(&self) -> WorkedDayStore {
        match self.parse::<PersistedDays>(keys::DAYS) {
            Some(persisted) if persisted.version == SCHEMA_VERSION => {
                WorkedDayStore::from_records(persisted.days)
            }
            Some(persisted) => {
                warn!(
                    key = keys::DAYS,
                    version = persisted.version,
                    "Unknown schema version, starting with an empty store"
                );
                WorkedDayStore::new()
            }
            None => WorkedDayStore::new(),
        }
    }

    /// Saves the worked-day store.
    pub fn save_days(&mut self, store: &WorkedDayStore) -> EngineResult<()> {
        let envelope = PersistedDays {
            version: SCHEMA_VERSION,
            days: store.to_records(),
        };
        self.write(keys::DAYS, &envelope)
    }

    /// Loads the shift catalog; defaults to the built-ins for `locale`.
    pub fn load_catalog(&self, locale: Locale) -> ShiftCatalog {
        match self.parse::<PersistedCatalog>(keys::CATALOG) {
            Some(persisted) if persisted.version == SCHEMA_VERSION => {
                ShiftCatalog::from_entries(persisted.shift_types)
            }
            Some(persisted) => {
                warn!(
                    key = keys::CATALOG,
                    version = persisted.version,
                    "Unknown schema version, restoring default shift types"
                );
                ShiftCatalog::with_defaults(locale)
            }
            None => ShiftCatalog::with_defaults(locale),
        }
    }

    /// Saves the shift catalog.
    pub fn save_catalog(&mut self, catalog: &ShiftCatalog) -> EngineResult<()> {
        let envelope = PersistedCatalog {
            version: SCHEMA_VERSION,
            shift_types: catalog.entries().to_vec(),
        };
        self.write(keys::CATALOG, &envelope)
    }

    /// Loads the base rate; defaults to zero.
    pub fn load_base_rate(&self) -> Decimal {
        self.parse::<Decimal>(keys::BASE_RATE).unwrap_or(Decimal::ZERO)
    }

    /// Saves the base rate.
    pub fn save_base_rate(&mut self, rate: Decimal) -> EngineResult<()> {
        self.write(keys::BASE_RATE, &rate)
    }

    /// Loads the currency configuration; defaults to `kr` after the amount.
    pub fn load_currency(&self) -> CurrencyConfig {
        self.parse::<CurrencyConfig>(keys::CURRENCY).unwrap_or_default()
    }

    /// Saves the currency configuration.
    pub fn save_currency(&mut self, currency: &CurrencyConfig) -> EngineResult<()> {
        self.write(keys::CURRENCY, currency)
    }

    /// Loads the active locale; defaults to English. Unknown codes fall back
    /// to the default as well.
    pub fn load_locale(&self) -> Locale {
        self.parse::<String>(keys::LOCALE)
            .map(|code| Locale::from_code(&code))
            .unwrap_or_default()
    }

    /// Saves the active locale.
    pub fn save_locale(&mut self, locale: Locale) -> EngineResult<()> {
        self.write(keys::LOCALE, &locale.code())
    }

    /// Reads and parses one key; malformed data is logged and treated as
    /// absent so the caller falls back to its default.
    fn parse<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Malformed persisted value, using default");
                None
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> EngineResult<()> {
        let json = serde_json::to_string(value).map_err(|e| EngineError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.backend.put(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn repository() -> Repository {
        Repository::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_fresh_backend_yields_defaults() {
        let repo = repository();
        assert!(repo.load_days().is_empty());
        assert_eq!(repo.load_catalog(Locale::En).len(), 4);
        assert_eq!(repo.load_base_rate(), Decimal::ZERO);
        assert_eq!(repo.load_currency(), CurrencyConfig::default());
        assert_eq!(repo.load_locale(), Locale::En);
    }

    #[test]
    fn test_days_round_trip() {
        let mut repo = repository();
        let mut store = WorkedDayStore::new();
        store.set_day(2024, 3, 5, Some("day")).unwrap();
        store.set_day(2024, 12, 24, Some("night")).unwrap();

        repo.save_days(&store).unwrap();
        assert_eq!(repo.load_days(), store);
    }

    #[test]
    fn test_catalog_round_trip() {
        let mut repo = repository();
        let mut catalog = ShiftCatalog::with_defaults(Locale::Nb);
        catalog.remove("overtime").unwrap();

        repo.save_catalog(&catalog).unwrap();
        assert_eq!(repo.load_catalog(Locale::En), catalog);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut repo = repository();
        repo.save_base_rate(dec("312.50")).unwrap();
        repo.save_locale(Locale::Nb).unwrap();
        repo.save_currency(&CurrencyConfig {
            symbol: "$".to_string(),
            position: crate::models::SymbolPosition::Before,
        })
        .unwrap();

        assert_eq!(repo.load_base_rate(), dec("312.50"));
        assert_eq!(repo.load_locale(), Locale::Nb);
        assert_eq!(repo.load_currency().symbol, "$");
    }

    #[test]
    fn test_malformed_value_falls_back_for_that_key_only() {
        let mut backend = MemoryStorage::new();
        backend.put(keys::DAYS, "{not json").unwrap();
        backend.put(keys::BASE_RATE, "\"250\"").unwrap();
        let repo = Repository::new(Box::new(backend));

        assert!(repo.load_days().is_empty());
        assert_eq!(repo.load_base_rate(), dec("250"));
    }

    #[test]
    fn test_unknown_schema_version_resets_collection() {
        let mut backend = MemoryStorage::new();
        backend
            .put(keys::DAYS, "{\"version\":99,\"days\":[]}")
            .unwrap();
        let repo = Repository::new(Box::new(backend));
        assert!(repo.load_days().is_empty());
    }

    #[test]
    fn test_unknown_locale_code_falls_back_to_default() {
        let mut backend = MemoryStorage::new();
        backend.put(keys::LOCALE, "\"fr\"").unwrap();
        let repo = Repository::new(Box::new(backend));
        assert_eq!(repo.load_locale(), Locale::En);
    }

    #[test]
    fn test_invalid_records_are_dropped_individually() {
        let mut backend = MemoryStorage::new();
        backend
            .put(
                keys::DAYS,
                r#"{"version":1,"days":[
                    {"year":2023,"month":2,"day":30,"shift_type":"day"},
                    {"year":2024,"month":3,"day":5,"shift_type":"day"}
                ]}"#,
            )
            .unwrap();
        let repo = Repository::new(Box::new(backend));

        let store = repo.load_days();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_day(2024, 3, 5), Some("day"));
    }
}
