//! Local key/value storage and the country cache built on it.

mod cache;
mod store;

pub use cache::{CountryCache, COUNTRIES_KEY};
pub use store::{LocalStore, StorageError};
