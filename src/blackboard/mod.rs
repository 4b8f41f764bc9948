//! Blackboard — shared mutable state with `&mut` discipline.
//!
//! The blackboard is the central coordination point for agent
//! execution. Each agent borrows the blackboard mutably for the
//! duration of its step, then releases it before the next agent runs.
//! Rust's borrow checker enforces that only one agent has write access
//! at any time; no locking is needed because a pipeline invocation is
//! single-threaded and synchronous.
//!
//! # Closed payload union
//!
//! Slots hold a [`Value`] — a closed tagged union over the three
//! payload types the pipeline exchanges (triangle, flag, rule set).
//! Typed retrieval goes through the [`StoreValue`] trait, so reading a
//! slot as the wrong type is a reported [`TypeMismatch`] rather than a
//! dynamic type-name lookup or undefined behavior.
//!
//! [`TypeMismatch`]: crate::error::BlackboardError::TypeMismatch

pub mod board;
pub mod dump;
pub mod slot;
pub mod value;

pub use board::Blackboard;
pub use dump::{render, render_json};
pub use slot::{Slot, SlotMeta};
pub use value::{StoreValue, Value, ValueKind};
