//! Textual dump of blackboard contents.
//!
//! A pure read-only formatting collaborator: it renders every
//! `(key, type tag, payload)` triple for display and exerts no
//! influence on pipeline behavior.

use std::fmt::Write as _;

use super::board::Blackboard;
use super::value::Value;

/// Render the blackboard contents as a human-readable table.
///
/// Unknown angles print as `?`; the rule set prints by entry count.
pub fn render(board: &Blackboard) -> String {
    let mut out = String::from("=== Blackboard Dump ===\n");
    for (key, _, value) in board.entries() {
        let _ = write!(out, "{key:>20}: ");
        match value {
            Value::Triangle(tri) => {
                out.push_str("Triangle(");
                for (i, angle) in tri.angles.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    if angle.known {
                        let _ = write!(out, "{}", angle.value);
                    } else {
                        out.push('?');
                    }
                }
                out.push(')');
            }
            Value::Flag(flag) => {
                let _ = write!(out, "{flag}");
            }
            Value::Rules(rules) => {
                let _ = write!(out, "RuleSet({} rules)", rules.len());
            }
        }
        out.push('\n');
    }
    out.push_str("=======================\n");
    out
}

/// Render the blackboard contents as a JSON object keyed by slot name.
///
/// Each slot serializes with its type tag (`kind`) and payload
/// (`data`), for consumers that want structure rather than a table.
pub fn render_json(board: &Blackboard) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (key, _, value) in board.entries() {
        map.insert(
            key.to_string(),
            serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        );
    }
    serde_json::Value::Object(map)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Angle, RuleSet, Triangle};

    #[test]
    fn test_render_empty() {
        let board = Blackboard::new();
        let text = render(&board);
        assert!(text.starts_with("=== Blackboard Dump ==="));
        assert!(text.ends_with("=======================\n"));
    }

    #[test]
    fn test_render_all_payloads() {
        let mut board = Blackboard::new();
        board.put(
            "input_triangle",
            Triangle::new(Angle::known(90.0), Angle::known(45.0), Angle::unknown()),
            "caller",
        );
        board.put("rules_set", RuleSet::default(), "caller");
        board.put("is_right_triangle", true, "classifier");

        let text = render(&board);
        assert!(text.contains("input_triangle: Triangle(90 45 ?)"));
        assert!(text.contains("is_right_triangle: true"));
        assert!(text.contains("rules_set: RuleSet(1 rules)"));
    }

    #[test]
    fn test_render_json_shape() {
        let mut board = Blackboard::new();
        board.put("is_right_triangle", true, "classifier");

        let json = render_json(&board);
        assert_eq!(json["is_right_triangle"]["kind"], "Flag");
        assert_eq!(json["is_right_triangle"]["data"], true);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut board = Blackboard::new();
        board.put("is_right_triangle", false, "classifier");
        let before = board.trace().len();
        let _ = render(&board);
        assert_eq!(board.trace().len(), before);
    }
}
