//! # triboard
//!
//! A small blackboard-architecture pipeline: independent agents complete
//! the missing interior angle of a triangle and classify the triangle as
//! right-angled, communicating solely through a shared typed store.
//!
//! The crate is organised around three ideas:
//!
//! - [`Blackboard`] — a typed key-value store. Payloads are a closed
//!   tagged union, so reading a slot as the wrong type is a reported
//!   error, never undefined behavior.
//! - Agents ([`agents`]) — free functions with a common signature that
//!   read their inputs from the blackboard and write results back. No
//!   agent holds a reference to another.
//! - [`Pipeline`] — a linear state machine that runs the agents in
//!   order and reads the final classification back out, emitting events
//!   through an injected [`EventSink`].

pub mod agents;
pub mod blackboard;
pub mod domain;
pub mod error;
pub mod events;
pub mod pipeline;

pub use blackboard::{Blackboard, Slot, SlotMeta, StoreValue, Value, ValueKind};
pub use domain::{Angle, RuleSet, Triangle};
pub use error::{BlackboardError, PipelineError, StepError};
pub use events::{EventSink, LogSink, MemorySink, PipelineEvent};
pub use pipeline::{Pipeline, Stage};
