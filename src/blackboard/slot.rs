//! Blackboard slot — a single entry in the shared blackboard.

use serde::{Deserialize, Serialize};

use super::value::{Value, ValueKind};

/// Metadata attached to a blackboard slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotMeta {
    /// Writer that produced this slot (e.g. "caller", "angle_completion").
    pub source: String,
    /// Millisecond epoch of the write, for ordering.
    pub epoch: i64,
}

/// A single slot: an owned payload plus provenance metadata. The type
/// tag is carried by the payload itself ([`Value::kind`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// The stored payload.
    pub value: Value,
    /// Slot metadata.
    pub meta: SlotMeta,
}

impl Slot {
    /// Create a slot stamped with the current time.
    pub fn new(value: Value, source: impl Into<String>) -> Self {
        Self {
            value,
            meta: SlotMeta {
                source: source.into(),
                epoch: chrono::Utc::now().timestamp_millis(),
            },
        }
    }

    /// The type tag of the stored payload.
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_new() {
        let slot = Slot::new(Value::Flag(true), "classifier");
        assert_eq!(slot.kind(), ValueKind::Flag);
        assert_eq!(slot.meta.source, "classifier");
        assert!(slot.meta.epoch > 0);
    }

    #[test]
    fn test_slot_kind_tracks_value() {
        let slot = Slot::new(Value::Rules(crate::domain::RuleSet::default()), "caller");
        assert_eq!(slot.kind(), ValueKind::Rules);
    }
}
