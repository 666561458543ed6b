//! Backend port — the graphics/input side of the dashboard.

use crate::dashboard::Redraw;
use crate::interaction::Interaction;
use crate::screen::Screen;
use crate::widget::WidgetRegistry;

/// Something the backend observed since the last poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    Interaction(Interaction),
    /// The user closed the window or asked to exit.
    Quit,
}

/// A display plus an input source, driven from a single loop.
pub trait Backend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Drain every event that arrived since the previous call, oldest first.
    /// Never blocks.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when its input source failed.
    fn poll_events(&mut self) -> Result<Vec<BackendEvent>, Self::Error>;

    /// Show `widgets` as the content of `screen`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when drawing failed.
    fn draw(
        &mut self,
        screen: Screen,
        widgets: &WidgetRegistry,
        redraw: Redraw,
    ) -> Result<(), Self::Error>;
}
