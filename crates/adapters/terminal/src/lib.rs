//! # homedash-adapter-terminal
//!
//! A text backend for the dashboard: each frame is printed as a list of
//! widgets, and lines typed on stdin become interactions.
//!
//! Input is read on a tokio task and handed over through a channel, so
//! [`Backend::poll_events`] never blocks the tick loop. End of input and
//! Ctrl-C both quit.
//!
//! ## Dependency rule
//!
//! Depends on `homedash-app` (port traits) only.

pub mod command;
pub mod error;
pub mod render;

use std::io::Write;

use homedash_app::dashboard::Redraw;
use homedash_app::ports::{Backend, BackendEvent};
use homedash_app::screen::Screen;
use homedash_app::widget::WidgetRegistry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

use crate::command::{Command, HELP};
pub use crate::error::{CommandError, TerminalError};

/// Raw input handed from the reader tasks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Interrupt,
}

/// Terminal backend writing frames to `W`.
pub struct TerminalBackend<W> {
    input: UnboundedReceiver<Input>,
    out: W,
    interactive: Vec<String>,
    closed: bool,
}

impl TerminalBackend<std::io::Stdout> {
    /// Read commands from stdin and Ctrl-C, print frames to stdout.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn stdio() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        spawn_stdin_reader(tx.clone());
        spawn_interrupt_listener(tx);
        Self::new(rx, std::io::stdout())
    }
}

impl<W: Write> TerminalBackend<W> {
    /// Build a backend over an arbitrary input channel and output.
    pub fn new(input: UnboundedReceiver<Input>, out: W) -> Self {
        Self {
            input,
            out,
            interactive: Vec::new(),
            closed: false,
        }
    }

    /// Access the output, mostly useful in tests.
    pub fn output(&self) -> &W {
        &self.out
    }

    fn handle_line(
        &mut self,
        line: &str,
        events: &mut Vec<BackendEvent>,
    ) -> Result<(), TerminalError> {
        match command::parse(line) {
            Ok(None) => {}
            Ok(Some(Command::Interact(interaction))) => {
                events.push(BackendEvent::Interaction(interaction));
            }
            Ok(Some(Command::Quit)) => events.push(BackendEvent::Quit),
            Ok(Some(Command::Help)) => writeln!(self.out, "{HELP}")?,
            Ok(Some(Command::Keys)) => {
                writeln!(self.out, "keys: {}", self.interactive.join(" "))?;
            }
            Err(err) => {
                tracing::warn!(%err, line, "ignoring malformed command");
                writeln!(self.out, "? {err}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Backend for TerminalBackend<W> {
    type Error = TerminalError;

    fn poll_events(&mut self) -> Result<Vec<BackendEvent>, TerminalError> {
        let mut events = Vec::new();
        loop {
            match self.input.try_recv() {
                Ok(Input::Line(line)) => self.handle_line(&line, &mut events)?,
                Ok(Input::Interrupt) => events.push(BackendEvent::Quit),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.closed {
                        tracing::info!("input closed");
                        self.closed = true;
                        events.push(BackendEvent::Quit);
                    }
                    break;
                }
            }
        }
        Ok(events)
    }

    fn draw(
        &mut self,
        screen: Screen,
        widgets: &WidgetRegistry,
        redraw: Redraw,
    ) -> Result<(), TerminalError> {
        self.interactive = widgets.interactive_keys().map(str::to_string).collect();
        render::frame(&mut self.out, screen, widgets, redraw)?;
        Ok(())
    }
}

fn spawn_stdin_reader(tx: UnboundedSender<Input>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(Input::Line(line)).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(%err, "failed to read stdin");
                    break;
                }
            }
        }
    });
}

fn spawn_interrupt_listener(tx: UnboundedSender<Input>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = tx.send(Input::Interrupt);
            }
            Err(err) => tracing::warn!(%err, "failed to listen for Ctrl-C"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedash_app::interaction::Interaction;
    use homedash_app::layout;
    use homedash_domain::house::House;
    use homedash_domain::time::now;

    fn backend() -> (UnboundedSender<Input>, TerminalBackend<Vec<u8>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, TerminalBackend::new(rx, Vec::new()))
    }

    fn line(text: &str) -> Input {
        Input::Line(text.to_string())
    }

    fn output(backend: &TerminalBackend<Vec<u8>>) -> String {
        String::from_utf8(backend.output().clone()).unwrap()
    }

    #[test]
    fn should_return_no_events_when_nothing_typed() {
        let (_tx, mut backend) = backend();
        assert!(backend.poll_events().unwrap().is_empty());
    }

    #[test]
    fn should_drain_all_pending_lines_in_order() {
        let (tx, mut backend) = backend();
        tx.send(line("rooms")).unwrap();
        tx.send(line("")).unwrap();
        tx.send(line("set device0.intensity 40")).unwrap();

        let events = backend.poll_events().unwrap();

        assert_eq!(
            events,
            vec![
                BackendEvent::Interaction(Interaction::press("rooms")),
                BackendEvent::Interaction(Interaction::value_changed("device0.intensity", 40)),
            ]
        );
        assert!(backend.poll_events().unwrap().is_empty());
    }

    #[test]
    fn should_report_malformed_command_and_keep_going() {
        let (tx, mut backend) = backend();
        tx.send(line("set rooms 3")).unwrap();
        tx.send(line("home")).unwrap();

        let events = backend.poll_events().unwrap();

        assert_eq!(
            events,
            vec![BackendEvent::Interaction(Interaction::press("home"))]
        );
        assert!(output(&backend).starts_with("? "));
    }

    #[test]
    fn should_quit_on_interrupt_and_on_quit_command() {
        let (tx, mut backend) = backend();
        tx.send(Input::Interrupt).unwrap();
        tx.send(line("quit")).unwrap();

        let events = backend.poll_events().unwrap();

        assert_eq!(events, vec![BackendEvent::Quit, BackendEvent::Quit]);
    }

    #[test]
    fn should_quit_once_when_input_closes() {
        let (tx, mut backend) = backend();
        drop(tx);

        assert_eq!(backend.poll_events().unwrap(), vec![BackendEvent::Quit]);
        assert!(backend.poll_events().unwrap().is_empty());
    }

    #[test]
    fn should_list_interactive_keys_of_last_frame() {
        let (tx, mut backend) = backend();
        let house = House::demo(&["Ground Floor"]).unwrap();
        let widgets = layout::render(Screen::RoomsList, &house, now());
        backend
            .draw(Screen::RoomsList, &widgets, Redraw::Full)
            .unwrap();

        tx.send(line("keys")).unwrap();
        backend.poll_events().unwrap();

        let text = output(&backend);
        assert!(text.starts_with("== Rooms [4] =="));
        assert!(text.contains("keys: home rooms activity addnew prevfloor nextfloor roombutton0"));
    }

    #[test]
    fn should_print_help() {
        let (tx, mut backend) = backend();
        tx.send(line("help")).unwrap();
        backend.poll_events().unwrap();
        assert!(output(&backend).contains("set <control> <value>"));
    }
}
