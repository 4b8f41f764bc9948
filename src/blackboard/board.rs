//! Blackboard — the central shared-state structure.
//!
//! The blackboard holds all data flowing through a pipeline run.
//! Agents access it via `&mut self` methods, so only one writer exists
//! at a time. It is created empty by the caller, populated before the
//! pipeline is invoked, mutated in place by the agents, and discarded
//! when the run (or test) ends.

use std::collections::HashMap;

use crate::error::BlackboardError;

use super::slot::Slot;
use super::value::{StoreValue, Value, ValueKind};

/// The typed key-value store shared by all agents.
///
/// # Example
///
/// ```
/// use triboard::blackboard::Blackboard;
/// use triboard::domain::{Angle, Triangle};
///
/// let mut board = Blackboard::new();
/// board.put("input_triangle",
///     Triangle::new(Angle::known(90.0), Angle::known(45.0), Angle::unknown()),
///     "caller");
///
/// let tri = board.get::<Triangle>("input_triangle").unwrap();
/// assert_eq!(tri.unknown_count(), 1);
///
/// // Reading the slot as the wrong type is an error, not UB.
/// assert!(board.get::<bool>("input_triangle").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Blackboard {
    /// Named slots holding pipeline data.
    slots: HashMap<String, Slot>,
    /// Write trace (slot keys in order of insertion, re-stores included).
    trace: Vec<String>,
}

impl Blackboard {
    /// Create an empty blackboard.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Write operations ---

    /// Insert or overwrite the slot at `key`. Re-storing a key replaces
    /// both the payload and its type tag. Never fails.
    pub fn put<T: StoreValue>(
        &mut self,
        key: impl Into<String>,
        value: T,
        source: impl Into<String>,
    ) {
        let key = key.into();
        self.trace.push(key.clone());
        self.slots.insert(key, Slot::new(value.into_value(), source));
    }

    // --- Read operations ---

    /// Get the value at `key` as type `T`.
    ///
    /// Fails with [`BlackboardError::KeyNotFound`] when the key is
    /// absent and [`BlackboardError::TypeMismatch`] when the slot holds
    /// a different payload type.
    pub fn get<T: StoreValue>(&self, key: &str) -> Result<&T, BlackboardError> {
        let slot = self.slot(key)?;
        T::from_value(&slot.value).ok_or_else(|| BlackboardError::TypeMismatch {
            key: key.to_string(),
            expected: T::KIND,
            found: slot.kind(),
        })
    }

    /// Get a mutable handle to the value at `key`.
    ///
    /// Mutations through the handle are live: agents that compute a
    /// result in place do not need to re-`put` afterwards.
    pub fn get_mut<T: StoreValue>(&mut self, key: &str) -> Result<&mut T, BlackboardError> {
        let slot = self
            .slots
            .get_mut(key)
            .ok_or_else(|| BlackboardError::KeyNotFound { key: key.to_string() })?;
        let found = slot.kind();
        T::from_value_mut(&mut slot.value).ok_or_else(|| BlackboardError::TypeMismatch {
            key: key.to_string(),
            expected: T::KIND,
            found,
        })
    }

    /// Get a slot (payload plus metadata) by key.
    pub fn slot(&self, key: &str) -> Result<&Slot, BlackboardError> {
        self.slots
            .get(key)
            .ok_or_else(|| BlackboardError::KeyNotFound { key: key.to_string() })
    }

    /// Check whether a key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the blackboard holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // --- Inspection ---

    /// Enumerate all `(key, type tag, payload)` triples, sorted by key.
    ///
    /// Pure read access for display collaborators; exerts no influence
    /// on pipeline behavior.
    pub fn entries(&self) -> Vec<(&str, ValueKind, &Value)> {
        let mut entries: Vec<_> = self
            .slots
            .iter()
            .map(|(k, slot)| (k.as_str(), slot.kind(), &slot.value))
            .collect();
        entries.sort_by_key(|(k, _, _)| *k);
        entries
    }

    /// The write trace (slot keys in the order they were stored).
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
