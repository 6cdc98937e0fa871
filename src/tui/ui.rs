use crate::core::navigation::Route;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DetailsScreen, HeaderBar, HomeScreen};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(1)]);
    let [header_area, content_area, hint_area] = layout.areas(frame.area());

    // Header bar - route title, back affordance iff there is history
    let mut header = HeaderBar::new(app.nav.current().title(), app.nav.can_go_back());
    header.render(frame, header_area);

    // Current screen
    match app.nav.current() {
        Route::Home => HomeScreen::new().render(frame, content_area),
        Route::Details => DetailsScreen::new(app.is_loading).render(frame, content_area),
    }

    draw_hint_line(frame, hint_area, app);
}

/// Bottom line: key hints for the current screen, plus the status message.
fn draw_hint_line(frame: &mut Frame, area: Rect, app: &App) {
    let keys = match app.nav.current() {
        Route::Home => "Enter: Go to Details | q: Quit",
        Route::Details => "Enter: Call API | Esc: Back | q: Quit",
    };

    let text = if app.status_message.is_empty() {
        keys.to_string()
    } else {
        format!("{} | {}", app.status_message, keys)
    };

    frame.render_widget(
        Span::styled(text, Style::default().fg(Color::DarkGray)),
        area,
    );
}
