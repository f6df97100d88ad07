use crate::api::{CountriesClient, UserClient};
use crate::config::Config;
use crate::storage::{CountryCache, LocalStore};
use crate::ui::app::{App, Tab};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::country_viewport;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::FetchWorker;
use anyhow::Context;
use std::time::Duration;
use tokio::sync::mpsc;

/// Queue depth between the UI and the fetch worker.
const COMMAND_QUEUE: usize = 64;

pub fn run(config: Config, initial_tab: Tab) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let store = LocalStore::open(config.cache.resolved_path())?;
    tracing::info!(path = %store.path().display(), "local store opened");
    let cache = CountryCache::new(store);
    let users = UserClient::new(&config.api)?;
    let countries = CountriesClient::new(&config.graphql)?;

    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let worker = FetchWorker::new(users, countries, cache.clone(), events.sender());
    runtime.spawn(worker.run(command_rx));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(&config);
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.set_viewport(country_viewport(cols, rows));
    }
    app.start(cache.load());
    app.set_tab(initial_tab);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.set_viewport(country_viewport(cols, rows)),
            Ok(AppEvent::CardsLoaded(response)) => app.on_cards_loaded(response),
            Ok(AppEvent::TablePageLoaded(response)) => app.on_table_page_loaded(response),
            Ok(AppEvent::CountriesLoaded(response)) => app.on_countries_loaded(response),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
