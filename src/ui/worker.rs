//! Background fetch worker.
//!
//! Receives [`UiCommand`]s from the UI thread, runs each request as its own
//! task and reports the outcome as an [`AppEvent`]. Requests are neither
//! de-duplicated nor cancelled; whichever answer arrives last wins.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::api::{AppResponse, CountriesClient, UserClient};
use crate::storage::CountryCache;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

#[derive(Clone)]
pub struct FetchWorker {
    users: UserClient,
    countries: CountriesClient,
    cache: CountryCache,
    events: Sender<AppEvent>,
}

impl FetchWorker {
    pub fn new(
        users: UserClient,
        countries: CountriesClient,
        cache: CountryCache,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            users,
            countries,
            cache,
            events,
        }
    }

    /// Serve commands until every sender is dropped.
    pub async fn run(self, mut commands: mpsc::Receiver<UiCommand>) {
        while let Some(command) = commands.recv().await {
            let worker = self.clone();
            tokio::spawn(async move { worker.handle(command).await });
        }
        tracing::debug!("fetch worker stopped");
    }

    pub async fn handle(&self, command: UiCommand) {
        let event = match command {
            UiCommand::FetchCards { limit } => {
                AppEvent::CardsLoaded(self.users.fetch_users(limit).await)
            }
            UiCommand::FetchTablePage { page, limit } => {
                let response = self.users.fetch_page(page, limit).await;
                tracing::info!(page, status = response.status.as_str(), "table page fetched");
                AppEvent::TablePageLoaded(response)
            }
            UiCommand::FetchCountries => AppEvent::CountriesLoaded(self.fetch_countries().await),
        };

        if self.events.send(event).is_err() {
            tracing::trace!("fetch result dropped (UI gone)");
        }
    }

    /// The cached list is replaced only by a successful query.
    async fn fetch_countries(&self) -> AppResponse<Vec<crate::api::Country>> {
        let response = self.countries.fetch_countries().await;
        match &response.data {
            Some(countries) => {
                tracing::info!(count = countries.len(), "country list fetched");
                if let Err(err) = self.cache.store(countries) {
                    tracing::warn!(error = %err, "failed to cache country list");
                }
            }
            None => {
                tracing::warn!(error = ?response.error, "country query failed");
            }
        }
        response
    }
}
