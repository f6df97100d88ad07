//! Clients for the user listing and country endpoints.
//!
//! Both clients report their outcome through [`AppResponse`], the same
//! result envelope the views keep in their state.

mod client;
mod envelope;
mod error;
mod graphql;
mod types;

pub use client::UserClient;
pub use envelope::{AppResponse, ErrorBody, Status};
pub use error::ApiError;
pub use graphql::{CountriesClient, COUNTRIES_QUERY};
pub use types::{Continent, Country, UserPage, UserRecord};
