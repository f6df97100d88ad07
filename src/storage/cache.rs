use crate::api::Country;

use super::store::{LocalStore, StorageError};

/// Key holding the serialized country list.
pub const COUNTRIES_KEY: &str = "countries";

/// Country list persisted in the local store as a JSON array.
#[derive(Clone)]
pub struct CountryCache {
    store: LocalStore,
}

impl CountryCache {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Cached list, if present and parsable.
    pub fn load(&self) -> Option<Vec<Country>> {
        let raw = self.store.get_item(COUNTRIES_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(countries) => Some(countries),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unparsable country cache");
                None
            }
        }
    }

    pub fn store(&self, countries: &[Country]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(countries)?;
        self.store.set_item(COUNTRIES_KEY, raw)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(COUNTRIES_KEY)
    }
}
