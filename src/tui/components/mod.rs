//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Every component here is stateless (props-based rendering): it receives
//! its data as struct fields and draws into the area it is given. The
//! screens own no input handling — the event loop translates key events
//! into core actions, so a screen file is just its props, its rendering,
//! and its tests.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── header_bar.rs  (route title + back affordance)
//! ├── home.rs        (Home screen)
//! └── details.rs     (Details screen)
//! ```

mod details;
mod header_bar;
mod home;

pub use details::DetailsScreen;
pub use header_bar::HeaderBar;
pub use home::HomeScreen;
