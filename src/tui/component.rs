use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render into a
/// `Rect` on the frame. The screens here are stateless renders: the data
/// they show comes from core state, and the one user action each screen
/// owns is dispatched by the event loop, not by the component.
///
/// `render` takes `&mut self` to line up with Ratatui's `StatefulWidget`
/// pattern, so a component can grow internal presentation state (scroll
/// offsets, caches) without changing its callers.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
