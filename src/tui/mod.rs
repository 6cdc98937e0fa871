//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (mobile,
//! web, etc.) in the future if needed.
//!
//! ## Event Loop
//!
//! One synchronous loop drives everything: draw the current frame, poll
//! for key events, apply actions through `core::update()`, and execute
//! the effects it returns. The single async operation — the sample-data
//! request — runs on a spawned tokio task and reports back through an
//! mpsc channel as a plain `Action`, so the loop never blocks on the
//! network and at most one request is ever in flight.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::sync::{Arc, mpsc};

use crate::api::{ApiClient, BookshelfApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Route;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Build the API accessor from a resolved config.
pub fn build_api(config: &ResolvedConfig) -> Arc<dyn BookshelfApi> {
    Arc::new(ApiClient::new(Some(config.api_base_url.clone())))
}

/// Translate a terminal event into the action it requests, given the
/// current state. `Activate` maps to the current screen's single action.
pub fn screen_action(app: &App, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::GoBack),
        TuiEvent::Activate => Some(match app.nav.current() {
            Route::Home => Action::Navigate(Route::Details),
            Route::Details => Action::CallApi,
        }),
        TuiEvent::Resize => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api = build_api(&config);
    let mut app = App::new(api);

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if let Some(action) = screen_action(&app, &event) {
                match update(&mut app, action) {
                    Effect::Quit => should_quit = true,
                    Effect::SpawnApiCall => spawn_sample_request(&app, tx.clone()),
                    Effect::None => {}
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (settled API calls)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnApiCall => spawn_sample_request(&app, tx.clone()),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Spawn the sample-data request. The accessor never fails — whatever
/// comes back (real payload or fallback) is logged and handed to the
/// reducer, which discards it.
fn spawn_sample_request(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning sample data request");

    let api = app.api.clone();
    tokio::spawn(async move {
        let payload = api.get_sample_data().await;
        info!("API response: {}", payload);
        if tx.send(Action::SampleDataReceived(payload)).is_err() {
            warn!("Failed to deliver API response: receiver dropped");
        }
    });
}
