//! Terminal front-end for a paginated user listing and a GraphQL country
//! list.
//!
//! - [`api`]: REST and GraphQL clients returning result envelopes
//! - [`storage`]: file-backed key/value store and the country cache
//! - [`ui`]: views, reducers and the event loop
//! - [`config`]: TOML configuration

pub mod api;
pub mod config;
pub mod logging;
pub mod storage;
pub mod ui;
