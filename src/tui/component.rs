use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the screen.
///
/// Props are plain struct fields filled in by `ui::draw_ui` each frame.
/// `render` takes `&mut self` so a component holding `&mut` state (the
/// page view's scroll offset and card layout) can record what it drew.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent presentation state that reacts to terminal events.
pub trait EventHandler {
    /// What the handler reports upward, if anything.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
