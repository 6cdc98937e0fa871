//! # Application State
//!
//! Core business state for LitLens. This module contains domain logic only -
//! no TUI-specific types. Presentation details live in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn BookshelfApi>   // HTTP accessor
//! ├── nav: NavStack                // route history (Home, Details)
//! ├── status_message: String       // footer text
//! └── is_loading: bool             // sample request in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::BookshelfApi;
use crate::core::navigation::NavStack;
use std::sync::Arc;

pub struct App {
    pub api: Arc<dyn BookshelfApi>,
    pub nav: NavStack,
    pub status_message: String,
    /// True while the sample request is in flight. At most one request
    /// is ever outstanding; `update()` ignores `CallApi` while set.
    pub is_loading: bool,
}

impl App {
    pub fn new(api: Arc<dyn BookshelfApi>) -> Self {
        Self {
            api,
            nav: NavStack::new(),
            status_message: String::from("Welcome to LitLens!"),
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::navigation::Route;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to LitLens!");
        assert!(!app.is_loading);
        assert_eq!(app.nav.current(), Route::Home);
    }
}
