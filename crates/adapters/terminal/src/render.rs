//! Plain-text rendering of a widget registry.

use std::io::{self, Write};

use homedash_app::dashboard::Redraw;
use homedash_app::screen::Screen;
use homedash_app::widget::{Widget, WidgetKind, WidgetRegistry};

/// Write one frame.
///
/// A full redraw lists every widget; a label redraw lists only the widgets
/// whose text or value can change (labels and sliders).
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn frame<W: Write>(
    out: &mut W,
    screen: Screen,
    widgets: &WidgetRegistry,
    redraw: Redraw,
) -> io::Result<()> {
    match redraw {
        Redraw::Full => writeln!(out, "== {screen} [{}] ==", screen.state_id())?,
        Redraw::Labels => writeln!(out, "-- {screen} (updated) --")?,
    }
    for widget in widgets {
        if redraw == Redraw::Labels && widget.kind == WidgetKind::Button {
            continue;
        }
        writeln!(out, "  {:<22} {}", widget.key, describe(widget))?;
    }
    out.flush()
}

fn describe(widget: &Widget) -> String {
    match widget.kind {
        WidgetKind::Label => widget.text.clone(),
        WidgetKind::Button if widget.is_interactive() => format!("[{}]", widget.text),
        WidgetKind::Button => format!("({})", widget.text),
        WidgetKind::Slider { min, max, value } => {
            format!("<{} {value} in {min}..{max}>", widget.text)
        }
    }
}
