//! Event scripts.
//!
//! A script is a TOML document holding an ordered `[[event]]` array. Each
//! entry is tagged by `type` and carries that event's payload:
//!
//! ```toml
//! [[event]]
//! type = "palette_drop"
//! kind = "start"
//! col = 1
//! row = 1
//!
//! [[event]]
//! type = "arm"
//! node = 1
//!
//! [[event]]
//! type = "pointer_move"
//! x = 240.0
//! y = 130.0
//! ```
//!
//! Entries that do not decode into an event are kept as [`ScriptEntry::Malformed`]
//! so that replay can skip them in place.

use serde::Deserialize;

use gridflow::event::EditorEvent;

use crate::CliError;

/// One entry of a script, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEntry {
    /// A well-formed event.
    Event(EditorEvent),
    /// An entry that could not be decoded, with the reason.
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct ScriptDocument {
    #[serde(default, rename = "event")]
    events: Vec<toml::Value>,
}

/// Parses a script document into its entries.
///
/// # Errors
///
/// Returns [`CliError::Script`] if `source` is not a TOML document with an
/// optional `event` array. Undecodable entries inside the array are not
/// errors.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEntry>, CliError> {
    let document: ScriptDocument =
        toml::from_str(source).map_err(|err| CliError::new_script_error(&err, source))?;

    Ok(document.events.into_iter().map(decode_entry).collect())
}

fn decode_entry(value: toml::Value) -> ScriptEntry {
    match value.try_into::<EditorEvent>() {
        Ok(event) => ScriptEntry::Event(event),
        Err(err) => ScriptEntry::Malformed(err.message().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use gridflow::{activity::ActivityKind, geometry::Point, identifier::NodeId};

    use super::*;

    #[test]
    fn test_parse_every_event_type() {
        let source = r#"
            [[event]]
            type = "palette_drop"
            kind = "start"
            col = 1
            row = 2

            [[event]]
            type = "canvas_drop"
            node = 1
            col = -1
            row = 0

            [[event]]
            type = "arm"
            node = 1

            [[event]]
            type = "pointer_move"
            x = 120
            y = 45.5

            [[event]]
            type = "pointer_leave"

            [[event]]
            type = "click"
            node = 2
        "#;

        let entries = parse_script(source).expect("script should parse");

        assert_eq!(
            entries,
            vec![
                ScriptEntry::Event(EditorEvent::PaletteDrop {
                    kind: ActivityKind::Start,
                    col: 1,
                    row: 2
                }),
                ScriptEntry::Event(EditorEvent::CanvasNodeDrop {
                    node: NodeId::new(1),
                    col: -1,
                    row: 0
                }),
                ScriptEntry::Event(EditorEvent::ArmConnection {
                    node: NodeId::new(1)
                }),
                ScriptEntry::Event(EditorEvent::PointerMove(Point::new(120.0, 45.5))),
                ScriptEntry::Event(EditorEvent::PointerLeave),
                ScriptEntry::Event(EditorEvent::NodeClicked {
                    node: NodeId::new(2)
                }),
            ]
        );
    }

    #[test]
    fn test_malformed_entries_are_kept_in_place() {
        let source = r#"
            [[event]]
            type = "palette_drop"
            kind = "teleporter"
            col = 0
            row = 0

            [[event]]
            type = "click"

            [[event]]
            type = "warp"

            [[event]]
            type = "arm"
            node = 3
        "#;

        let entries = parse_script(source).expect("script should parse");

        assert_eq!(entries.len(), 4);
        assert!(matches!(entries[0], ScriptEntry::Malformed(_)));
        assert!(matches!(entries[1], ScriptEntry::Malformed(_)));
        assert!(matches!(entries[2], ScriptEntry::Malformed(_)));
        assert_eq!(
            entries[3],
            ScriptEntry::Event(EditorEvent::ArmConnection {
                node: NodeId::new(3)
            })
        );
    }

    #[test]
    fn test_kind_names_ignore_case() {
        let source = r#"
            [[event]]
            type = "palette_drop"
            kind = "Start"
            col = 0
            row = 0

            [[event]]
            type = "palette_drop"
            kind = " RECV "
            col = 1
            row = 0
        "#;

        let entries = parse_script(source).expect("script should parse");

        assert_eq!(
            entries,
            vec![
                ScriptEntry::Event(EditorEvent::PaletteDrop {
                    kind: ActivityKind::Start,
                    col: 0,
                    row: 0
                }),
                ScriptEntry::Event(EditorEvent::PaletteDrop {
                    kind: ActivityKind::Recv,
                    col: 1,
                    row: 0
                }),
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(parse_script("").expect("empty script is valid"), Vec::new());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let source = "[[event]\ntype = \"arm\"\n";

        let err = parse_script(source).unwrap_err();

        let CliError::Script { span, src, .. } = err else {
            panic!("expected script error, got {err:?}");
        };
        assert!(span.is_some());
        assert_eq!(src, source);
    }
}
