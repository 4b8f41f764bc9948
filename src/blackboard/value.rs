//! Slot payloads — a closed tagged union over the supported types.
//!
//! The store deliberately does not accept arbitrary values. The set of
//! payload types is small and fixed, so a sum type makes every
//! mismatch an exhaustively-matched runtime case and keeps retrieval
//! free of `Any`-style downcasting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{RuleSet, Triangle};

/// A payload stored in a blackboard slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum Value {
    /// A triangle, possibly with unknown angles.
    Triangle(Triangle),
    /// A boolean classification result.
    Flag(bool),
    /// A rule-set map seeded by the caller.
    Rules(RuleSet),
}

impl Value {
    /// The tag describing this payload's type.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Triangle(_) => ValueKind::Triangle,
            Value::Flag(_) => ValueKind::Flag,
            Value::Rules(_) => ValueKind::Rules,
        }
    }
}

/// Type tag recorded alongside every slot, checked on typed retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Triangle,
    Flag,
    Rules,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Triangle => write!(f, "Triangle"),
            ValueKind::Flag => write!(f, "Flag"),
            ValueKind::Rules => write!(f, "Rules"),
        }
    }
}

/// A native type that can live in a blackboard slot.
///
/// Implemented exhaustively for the payload types of [`Value`]; the
/// store's generic `put`/`get` compile only for these types.
pub trait StoreValue: Sized {
    /// The tag this type is stored under.
    const KIND: ValueKind;

    /// Wrap the native value into the union.
    fn into_value(self) -> Value;

    /// Borrow the native value out of the union, if the variant matches.
    fn from_value(value: &Value) -> Option<&Self>;

    /// Mutably borrow the native value out of the union.
    fn from_value_mut(value: &mut Value) -> Option<&mut Self>;
}

impl StoreValue for Triangle {
    const KIND: ValueKind = ValueKind::Triangle;

    fn into_value(self) -> Value {
        Value::Triangle(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Triangle(t) => Some(t),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Triangle(t) => Some(t),
            _ => None,
        }
    }
}

impl StoreValue for bool {
    const KIND: ValueKind = ValueKind::Flag;

    fn into_value(self) -> Value {
        Value::Flag(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Flag(b) => Some(b),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Flag(b) => Some(b),
            _ => None,
        }
    }
}

impl StoreValue for RuleSet {
    const KIND: ValueKind = ValueKind::Rules;

    fn into_value(self) -> Value {
        Value::Rules(self)
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Rules(r) => Some(r),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Rules(r) => Some(r),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
