//! Shared geometry types flowing through the blackboard.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sum of the interior angles of a triangle, in degrees.
pub const ANGLE_SUM: f64 = 180.0;

/// A right angle, in degrees.
pub const RIGHT_ANGLE: f64 = 90.0;

/// Absolute tolerance when comparing an angle against [`RIGHT_ANGLE`].
pub const RIGHT_ANGLE_TOLERANCE: f64 = 0.001;

/// A single interior angle. `value` is meaningful only while `known`
/// is true; once an angle has been marked known, no agent reverts it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    /// Angle in degrees.
    pub value: f64,
    /// Whether `value` has been measured or computed.
    pub known: bool,
}

impl Angle {
    /// A known angle with the given value in degrees.
    pub fn known(value: f64) -> Self {
        Self { value, known: true }
    }

    /// An angle that has not been determined yet.
    pub fn unknown() -> Self {
        Self { value: 0.0, known: false }
    }
}

/// Exactly three angles, positionally ordered. The order (A, B, C) is
/// significant only for display, not for computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// The three interior angles at vertices A, B, C.
    pub angles: [Angle; 3],
}

/// Display labels for the three vertices, matching the positional order
/// of [`Triangle::angles`].
pub const VERTEX_LABELS: [char; 3] = ['A', 'B', 'C'];

impl Triangle {
    /// Create a triangle from its three angles in vertex order.
    pub fn new(a: Angle, b: Angle, c: Angle) -> Self {
        Self { angles: [a, b, c] }
    }

    /// Number of angles not yet determined.
    pub fn unknown_count(&self) -> usize {
        self.angles.iter().filter(|a| !a.known).count()
    }

    /// Sum of the values of all known angles, in degrees.
    pub fn known_sum(&self) -> f64 {
        self.angles
            .iter()
            .filter(|a| a.known)
            .map(|a| a.value)
            .sum()
    }

    /// Whether every angle is known.
    pub fn is_complete(&self) -> bool {
        self.unknown_count() == 0
    }
}

/// A string-to-string rule map seeded by the caller alongside the
/// triangle. The current agents do not consult it; it exists because
/// the population contract stores it and the dump displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: HashMap<String, String>,
}

impl RuleSet {
    /// An empty rule set.
    pub fn new() -> Self {
        Self { rules: HashMap::new() }
    }

    /// Insert or overwrite a rule.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.rules.insert(name.into(), value.into());
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    /// The rule set the original harness seeds before each run.
    fn default() -> Self {
        let mut rules = Self::new();
        rules.set("right_angle_threshold", "90.0");
        rules
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
