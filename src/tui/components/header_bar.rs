//! # HeaderBar Component
//!
//! Top bar showing the current route title, with a back affordance when
//! there is navigation history to return to.
//!
//! The back marker is visible iff the nav stack depth is greater than 1 —
//! the header never offers a way out of the root screen. Both props come
//! straight from `NavStack` (`current().title()` and `can_go_back()`);
//! the component itself holds no state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

/// Marker rendered in front of the title when back navigation is possible.
pub const BACK_MARKER: &str = "← Back";

pub struct HeaderBar {
    /// Title of the current route (e.g. "Home", "Details")
    pub title: String,
    /// Whether to show the back affordance (nav stack depth > 1)
    pub show_back: bool,
}

impl HeaderBar {
    pub fn new(title: impl Into<String>, show_back: bool) -> Self {
        Self {
            title: title.into(),
            show_back,
        }
    }
}

impl Component for HeaderBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_style = Style::default().add_modifier(Modifier::BOLD);

        let line = if self.show_back {
            Line::from(vec![
                Span::styled(BACK_MARKER, Style::default().fg(Color::Cyan)),
                Span::raw("  "),
                Span::styled(self.title.as_str(), title_style),
            ])
        } else {
            Line::from(Span::styled(self.title.as_str(), title_style))
        };

        let paragraph = Paragraph::new(line).block(Block::bordered());
        frame.render_widget(paragraph, area);
    }
}
