//! JSONL parser for composer input scripts.
//!
//! Each line is one JSON object with an `event` name and, for keyboard
//! events, a `height`:
//!
//! ```text
//! {"event":"keyboard_will_show","height":291}
//! {"event":"toggle_plus"}
//! {"event":"dismiss"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::model::{
    ComposerAction, ComposerInput, Height, KeyboardSignal, MalformedLine, ParseError, ScriptEntry,
};
use serde::Deserialize;

const EVENT_WILL_SHOW: &str = "keyboard_will_show";
const EVENT_WILL_HIDE: &str = "keyboard_will_hide";
const EVENT_DISMISS: &str = "dismiss";

/// Raw JSON structure for one script line.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLine {
    event: String,
    #[serde(default)]
    height: Option<f64>,
}

/// Parse a single script line into a composer input.
///
/// # Errors
///
/// Returns `ParseError` for invalid JSON, unknown events, a missing or
/// unexpected `height`, or a height that is negative or not finite.
pub fn parse_input(line: &str) -> Result<ComposerInput, ParseError> {
    let raw: RawLine = serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })?;

    match (raw.event.as_str(), raw.height) {
        (EVENT_WILL_SHOW, Some(h)) => Ok(KeyboardSignal::WillShow(Height::new(h)?).into()),
        (EVENT_WILL_HIDE, Some(h)) => Ok(KeyboardSignal::WillHide(Height::new(h)?).into()),
        (EVENT_WILL_SHOW | EVENT_WILL_HIDE, None) => {
            Err(ParseError::MissingHeight { event: raw.event.clone() })
        }
        (_, Some(_)) => Err(ParseError::UnexpectedHeight { event: raw.event.clone() }),
        (EVENT_DISMISS, None) => Ok(ComposerInput::Dismiss),
        (name, None) => Ok(name.parse::<ComposerAction>()?.into()),
    }
}

/// Parse every line of a script.
///
/// Malformed lines are kept as [`ScriptEntry::Malformed`] rather than
/// aborting the whole script.
pub fn parse_script(content: &str) -> Vec<ScriptEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_script_line(index + 1, line))
        .collect()
}

/// Parse one numbered line; `None` for blank and comment lines.
pub fn parse_script_line(line_number: usize, line: &str) -> Option<ScriptEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    Some(match parse_input(trimmed) {
        Ok(input) => ScriptEntry::Input { line_number, input },
        Err(err) => ScriptEntry::Malformed(MalformedLine::new(
            line_number,
            trimmed,
            err.to_string(),
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UnknownAction;

    fn h(v: f64) -> Height {
        Height::new(v).unwrap()
    }

    #[test]
    fn parses_each_button_action() {
        for action in ComposerAction::ALL {
            let line = format!(r#"{{"event":"{}"}}"#, action.name());
            assert_eq!(parse_input(&line), Ok(ComposerInput::Action(action)));
        }
    }

    #[test]
    fn parses_keyboard_signals() {
        assert_eq!(
            parse_input(r#"{"event":"keyboard_will_show","height":291}"#),
            Ok(ComposerInput::Keyboard(KeyboardSignal::WillShow(h(291.0))))
        );
        assert_eq!(
            parse_input(r#"{"event":"keyboard_will_hide","height":34.5}"#),
            Ok(ComposerInput::Keyboard(KeyboardSignal::WillHide(h(34.5))))
        );
    }

    #[test]
    fn parses_dismiss() {
        assert_eq!(
            parse_input(r#"{"event":"dismiss"}"#),
            Ok(ComposerInput::Dismiss)
        );
    }

    #[test]
    fn rejects_unknown_event() {
        assert_eq!(
            parse_input(r#"{"event":"toggle_camera"}"#),
            Err(ParseError::UnknownAction(UnknownAction(
                "toggle_camera".to_string()
            )))
        );
    }

    #[test]
    fn rejects_negative_height() {
        let result = parse_input(r#"{"event":"keyboard_will_show","height":-5}"#);
        assert!(matches!(result, Err(ParseError::InvalidHeight(_))), "{result:?}");
    }

    #[test]
    fn rejects_missing_height() {
        assert_eq!(
            parse_input(r#"{"event":"keyboard_will_hide"}"#),
            Err(ParseError::MissingHeight {
                event: "keyboard_will_hide".to_string()
            })
        );
    }

    #[test]
    fn rejects_height_on_button_event() {
        assert_eq!(
            parse_input(r#"{"event":"toggle_voice","height":10}"#),
            Err(ParseError::UnexpectedHeight {
                event: "toggle_voice".to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = parse_input(r#"{"event":"toggle_voice","icon":"mic"}"#);
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })), "{result:?}");
    }

    #[test]
    fn rejects_invalid_json() {
        let result = parse_input("not json");
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn parse_script_skips_blank_and_comment_lines() {
        let script = "# open emoji\n\n{\"event\":\"toggle_emoji\"}\n   \n{\"event\":\"dismiss\"}\n";
        let entries = parse_script(script);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line_number(), 3);
        assert_eq!(
            entries[0].as_input(),
            Some(ComposerInput::Action(ComposerAction::ToggleEmoji))
        );
        assert_eq!(entries[1].line_number(), 5);
    }

    #[test]
    fn parse_script_keeps_malformed_lines_in_place() {
        let script = "{\"event\":\"toggle_plus\"}\n{\"event\":\"explode\"}\n{\"event\":\"dismiss\"}";
        let entries = parse_script(script);

        assert_eq!(entries.len(), 3);
        let malformed = entries[1].as_malformed().expect("second line is malformed");
        assert_eq!(malformed.line_number(), 2);
        assert_eq!(malformed.raw_line(), "{\"event\":\"explode\"}");
        assert!(malformed.error_message().contains("explode"));
        assert!(entries[2].as_input().is_some());
    }
}
