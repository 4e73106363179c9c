//! Application state for the worklog engine API.
//!
//! One UI session owns one tracker; all mutation flows through the single
//! shared state and is persisted through the repository after each
//! confirmed change.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;

use crate::catalog::ShiftCatalog;
use crate::locale::Locale;
use crate::models::CurrencyConfig;
use crate::storage::Repository;
use crate::store::WorkedDayStore;

/// The live engine state plus its persistence handle.
pub struct TrackerState {
    /// The shift-type catalog.
    pub catalog: ShiftCatalog,
    /// The worked-day store.
    pub store: WorkedDayStore,
    /// The hourly base rate.
    pub base_rate: Decimal,
    /// Currency display configuration.
    pub currency: CurrencyConfig,
    /// The active locale.
    pub locale: Locale,
    /// Persistence boundary for all of the above.
    pub repo: Repository,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<RwLock<TrackerState>>,
}

impl AppState {
    /// Creates the application state by loading every durable key through
    /// the repository. Loading is tolerant and never fails; absent or
    /// malformed keys yield their defaults.
    pub fn new(repo: Repository) -> Self {
        let locale = repo.load_locale();
        let tracker = TrackerState {
            catalog: repo.load_catalog(locale),
            store: repo.load_days(),
            base_rate: repo.load_base_rate(),
            currency: repo.load_currency(),
            locale,
            repo,
        };
        AppState {
            inner: Arc::new(RwLock::new(tracker)),
        }
    }

    /// Read access to the tracker state.
    pub fn read(&self) -> RwLockReadGuard<'_, TrackerState> {
        self.inner.read().expect("tracker state lock poisoned")
    }

    /// Write access to the tracker state.
    pub fn write(&self) -> RwLockWriteGuard<'_, TrackerState> {
        self.inner.write().expect("tracker state lock poisoned")
    }
}
