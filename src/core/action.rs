//! # Actions
//!
//! Everything that can happen in LitLens becomes an `Action`.
//! User activates the Home screen? That's `Action::Navigate(Route::Details)`.
//! API responds? That's `Action::SampleDataReceived(payload)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the `Effect` the caller should execute. No side effects
//! here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply a sequence of actions and
//! assert on the resulting state.

use log::debug;

use crate::core::navigation::Route;
use crate::core::state::App;

/// A state transition request. Produced by the TUI adapter (key events)
/// or by background tasks (completed API calls).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a route onto the navigation stack.
    Navigate(Route),
    /// Pop back to the previous route (no-op at the root).
    GoBack,
    /// The Details screen's action: fetch sample data.
    CallApi,
    /// The sample request settled. The payload was already logged by the
    /// task that awaited it; it is discarded here.
    SampleDataReceived(serde_json::Value),
    Quit,
}

/// Side effect requested by `update()`. Executed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the async sample-data request.
    SpawnApiCall,
    Quit,
}

/// The reducer: applies `action` to `app`, returns the effect to run.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(route) => {
            app.nav.navigate(route);
            Effect::None
        }
        Action::GoBack => {
            app.nav.go_back();
            Effect::None
        }
        Action::CallApi => {
            // Only one request in flight at a time.
            if app.is_loading {
                Effect::None
            } else {
                app.is_loading = true;
                Effect::SpawnApiCall
            }
        }
        Action::SampleDataReceived(_payload) => {
            app.is_loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use serde_json::json;

    #[test]
    fn test_navigate_then_back_returns_home() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Details));
        assert_eq!(app.nav.current(), Route::Details);
        update(&mut app, Action::GoBack);
        assert_eq!(app.nav.current(), Route::Home);
    }

    #[test]
    fn test_go_back_at_root_keeps_home() {
        let mut app = test_app();
        let effect = update(&mut app, Action::GoBack);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.current(), Route::Home);
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_call_api_spawns_request() {
        let mut app = test_app();
        let effect = update(&mut app, Action::CallApi);
        assert_eq!(effect, Effect::SpawnApiCall);
        assert!(app.is_loading);
    }

    #[test]
    fn test_call_api_while_loading_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::CallApi);
        let effect = update(&mut app, Action::CallApi);
        assert_eq!(effect, Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_sample_data_received_clears_loading() {
        let mut app = test_app();
        update(&mut app, Action::CallApi);
        let effect = update(&mut app, Action::SampleDataReceived(json!({"x": 1})));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_response_does_not_touch_navigation_or_status() {
        // Success and failure payloads are indistinguishable to the UI:
        // neither changes anything the user can see.
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Details));
        update(&mut app, Action::CallApi);
        let status_before = app.status_message.clone();
        update(&mut app, Action::SampleDataReceived(json!({"message": "fallback"})));
        assert_eq!(app.nav.current(), Route::Details);
        assert_eq!(app.status_message, status_before);
    }

    #[test]
    fn test_quit_requests_exit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
