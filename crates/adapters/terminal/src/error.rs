//! Terminal adapter error types.

use homedash_app::widget::ControlKeyError;

/// Errors raised while writing to the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Writing a frame to the output failed.
    #[error("failed to write to terminal")]
    Io(#[from] std::io::Error),
}

/// Why an input line could not be turned into a command.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("`{verb}` needs a widget key")]
    MissingKey { verb: &'static str },

    #[error("`set {key}` needs a value")]
    MissingValue { key: String },

    #[error("{value:?} is not a whole number")]
    BadValue { value: String },

    #[error("only device controls take a value")]
    NotAControl(#[from] ControlKeyError),

    #[error("unexpected trailing input {0:?}")]
    Trailing(String),
}
