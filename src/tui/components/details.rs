//! # Details Screen Component
//!
//! Static content plus the single "Call API" action hint. The hint dims
//! while a request is in flight; the outcome of the call is never shown
//! here — it goes to the log, and success and failure look identical.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct DetailsScreen {
    /// Whether the sample request is currently in flight.
    pub is_loading: bool,
}

impl DetailsScreen {
    pub fn new(is_loading: bool) -> Self {
        Self { is_loading }
    }
}

impl Component for DetailsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let action_style = if self.is_loading {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                "Details Screen",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[ Enter ]", action_style),
                Span::raw(" Call API"),
            ]),
        ];

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}
