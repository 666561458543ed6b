//! Input commands typed at the terminal.
//!
//! ```text
//! press <key>            press a button
//! <key>                  same as `press <key>`
//! set <control> <value>  move a slider (control keys look like `device0.intensity`)
//! keys                   list the interactive widgets on screen
//! help                   show this list
//! quit                   leave the dashboard
//! ```

use homedash_app::interaction::Interaction;
use homedash_app::widget::ControlKey;

use crate::error::CommandError;

pub const HELP: &str = "\
commands:
  press <key>            press a button
  <key>                  same as `press <key>`
  set <control> <value>  move a slider, e.g. `set device0.intensity 40`
  keys                   list the interactive widgets on screen
  help                   show this list
  quit                   leave the dashboard";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Interact(Interaction),
    Keys,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`CommandError`] when the line is malformed.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = match first {
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "keys" => Command::Keys,
        "press" => {
            let key = words.next().ok_or(CommandError::MissingKey { verb: "press" })?;
            Command::Interact(Interaction::press(key))
        }
        "set" => {
            let key = words.next().ok_or(CommandError::MissingKey { verb: "set" })?;
            let control: ControlKey = key.parse()?;
            let raw = words.next().ok_or_else(|| CommandError::MissingValue {
                key: key.to_string(),
            })?;
            let value = raw.parse::<i64>().map_err(|_| CommandError::BadValue {
                value: raw.to_string(),
            })?;
            Command::Interact(Interaction::value_changed(control.to_string(), value))
        }
        key => Command::Interact(Interaction::press(key)),
    };

    match words.next() {
        Some(extra) => Err(CommandError::Trailing(extra.to_string())),
        None => Ok(Some(command)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedash_app::widget::ControlKeyError;

    #[test]
    fn should_ignore_blank_line() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn should_parse_press_with_verb() {
        assert_eq!(
            parse("press rooms"),
            Ok(Some(Command::Interact(Interaction::press("rooms"))))
        );
    }

    #[test]
    fn should_treat_bare_word_as_press() {
        assert_eq!(
            parse("turnoffall"),
            Ok(Some(Command::Interact(Interaction::press("turnoffall"))))
        );
    }

    #[test]
    fn should_parse_set_for_control_key() {
        assert_eq!(
            parse("set device0.intensity 40"),
            Ok(Some(Command::Interact(Interaction::value_changed(
                "device0.intensity",
                40
            ))))
        );
    }

    #[test]
    fn should_accept_negative_slider_value() {
        assert_eq!(
            parse("set device1.intensity -5"),
            Ok(Some(Command::Interact(Interaction::value_changed(
                "device1.intensity",
                -5
            ))))
        );
    }

    #[test]
    fn should_reject_set_on_non_control_key() {
        assert!(matches!(
            parse("set rooms 3"),
            Err(CommandError::NotAControl(ControlKeyError::MissingSeparator(_)))
        ));
    }

    #[test]
    fn should_reject_set_without_value() {
        assert_eq!(
            parse("set device0.intensity"),
            Err(CommandError::MissingValue {
                key: "device0.intensity".to_string()
            })
        );
    }

    #[test]
    fn should_reject_non_numeric_value() {
        assert!(matches!(
            parse("set device0.intensity bright"),
            Err(CommandError::BadValue { .. })
        ));
    }

    #[test]
    fn should_reject_press_without_key() {
        assert_eq!(
            parse("press"),
            Err(CommandError::MissingKey { verb: "press" })
        );
    }

    #[test]
    fn should_reject_trailing_words() {
        assert_eq!(
            parse("quit now"),
            Err(CommandError::Trailing("now".to_string()))
        );
    }

    #[test]
    fn should_parse_meta_commands() {
        assert_eq!(parse("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse("help"), Ok(Some(Command::Help)));
        assert_eq!(parse("keys"), Ok(Some(Command::Keys)));
    }
}
