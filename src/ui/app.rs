use crate::api::{AppResponse, Country, UserPage};
use crate::config::Config;
use crate::ui::cards::{CardsIntent, CardsReducer, CardsState};
use crate::ui::countries::{CountriesIntent, CountriesReducer, CountriesState, ScrollTracker};
use crate::ui::mvi::Reducer;
use crate::ui::table::{TableIntent, TableReducer, TableState};
use tokio::sync::mpsc;

/// Rows assumed for the country list until the first resize arrives.
const DEFAULT_VIEWPORT: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, clap::ValueEnum)]
pub enum Tab {
    #[default]
    Cards,
    Table,
    Countries,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Cards, Tab::Table, Tab::Countries];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Cards => "Cards",
            Tab::Table => "Users table",
            Tab::Countries => "Countries",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Cards => 0,
            Tab::Table => 1,
            Tab::Countries => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Requests executed by the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchCards { limit: u32 },
    FetchTablePage { page: u32, limit: u32 },
    FetchCountries,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    tab: Tab,
    cards_limit: u32,
    table_limit: u32,
    cards: CardsState,
    /// Index of the first card drawn in the strip.
    cards_offset: usize,
    table: TableState,
    countries: CountriesState,
    scroll: ScrollTracker,
    viewport: usize,
    commands: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            tab: Tab::default(),
            cards_limit: config.api.cards_limit,
            table_limit: config.api.table_limit,
            cards: CardsState::default(),
            cards_offset: 0,
            table: TableState::default(),
            countries: CountriesState::with_window(config.window),
            scroll: ScrollTracker::default(),
            viewport: DEFAULT_VIEWPORT,
            commands: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        if tab == Tab::Cards {
            self.request_cards();
        }
    }

    pub fn cards(&self) -> &CardsState {
        &self.cards
    }

    pub fn cards_offset(&self) -> usize {
        self.cards_offset
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn countries(&self) -> &CountriesState {
        &self.countries
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Rows available to the country list.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
    }

    /// Initial requests: card page, first table page, and the country list
    /// unless one was found in the cache.
    pub fn start(&mut self, cached_countries: Option<Vec<Country>>) {
        self.request_cards();
        self.request_table_page(self.table.page);
        match cached_countries {
            Some(countries) => {
                tracing::info!(count = countries.len(), "country list loaded from cache");
                dispatch_mvi!(
                    self,
                    countries,
                    CountriesReducer,
                    CountriesIntent::SetDisplayData { countries }
                );
            }
            None => self.request_countries(),
        }
    }

    // -- Cards --------------------------------------------------------------

    pub fn request_cards(&mut self) {
        if !self.cards.needs_fetch() {
            return;
        }
        dispatch_mvi!(self, cards, CardsReducer, CardsIntent::Requested);
        self.send_command(UiCommand::FetchCards {
            limit: self.cards_limit,
        });
    }

    pub fn on_cards_loaded(&mut self, response: AppResponse<UserPage>) {
        dispatch_mvi!(self, cards, CardsReducer, CardsIntent::Loaded { response });
        self.cards_offset = self.cards_offset.min(self.cards.users().len().saturating_sub(1));
    }

    pub fn shift_cards(&mut self, delta: isize) {
        let last = self.cards.users().len().saturating_sub(1);
        self.cards_offset = self.cards_offset.saturating_add_signed(delta).min(last);
    }

    // -- Table --------------------------------------------------------------

    /// Apply a table intent. Navigation fetches the resulting page.
    ///
    /// Returns false when the control is disabled.
    pub fn navigate_table(&mut self, intent: TableIntent) -> bool {
        if !self.table.accepts(&intent) {
            return false;
        }
        let fetch = intent.is_navigation();
        dispatch_mvi!(self, table, TableReducer, intent);
        if fetch {
            self.request_table_page(self.table.page);
        }
        true
    }

    /// Jump to the page typed into the page field.
    pub fn submit_page_input(&mut self) -> bool {
        match self.table.requested_page() {
            Some(page) => self.navigate_table(TableIntent::SpecificPage { page }),
            None => false,
        }
    }

    fn request_table_page(&mut self, page: u32) {
        dispatch_mvi!(
            self,
            table,
            TableReducer,
            TableIntent::Promise {
                response: AppResponse::pending(),
            }
        );
        self.send_command(UiCommand::FetchTablePage {
            page,
            limit: self.table_limit,
        });
    }

    pub fn on_table_page_loaded(&mut self, response: AppResponse<UserPage>) {
        dispatch_mvi!(self, table, TableReducer, TableIntent::Promise { response });
    }

    // -- Countries ----------------------------------------------------------

    /// Query the country list. The current list stays on screen until a new
    /// one arrives.
    pub fn request_countries(&mut self) {
        dispatch_mvi!(self, countries, CountriesReducer, CountriesIntent::FetchStarted);
        self.send_command(UiCommand::FetchCountries);
    }

    pub fn on_countries_loaded(&mut self, response: AppResponse<Vec<Country>>) {
        let intent = match (response.data, response.error) {
            (Some(countries), _) => CountriesIntent::SetDisplayData { countries },
            (None, Some(error)) => CountriesIntent::FetchFailed { error },
            (None, None) => return,
        };
        if matches!(intent, CountriesIntent::SetDisplayData { .. }) {
            self.scroll.reset();
        }
        dispatch_mvi!(self, countries, CountriesReducer, intent);
    }

    /// Scroll the country list; crossing a threshold shifts the window.
    pub fn scroll_countries(&mut self, delta: isize) {
        let Some(intent) = self.scroll.scroll_by(delta, self.viewport, &self.countries) else {
            return;
        };
        tracing::debug!(?intent, min = self.countries.min, max = self.countries.max, "shifting window");
        let state = std::mem::take(&mut self.countries);
        self.countries = self.scroll.safe_dispatch(state, intent, self.viewport);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "fetch command dropped");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
