//! Pipeline events and the injected event sink.
//!
//! The pipeline and agents never log directly. They emit
//! [`PipelineEvent`]s through an [`EventSink`] handed in by the caller,
//! so tests can capture emissions without capturing process output and
//! the core stays independent of formatting and destination.

use std::fmt;
use std::sync::Mutex;

use serde::Serialize;
use uuid::Uuid;

/// Severity of an emitted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Error,
}

/// Everything the pipeline and its agents report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PipelineEvent {
    /// A pipeline run began.
    PipelineStarted { run_id: Uuid },
    /// The completion agent filled in the missing angle.
    AngleComputed { vertex: char, degrees: f64 },
    /// The completion agent found nothing to fill in, or too much.
    AngleCompletionFailed { unknown: usize },
    /// The classification agent decided whether the triangle is
    /// right-angled.
    TriangleClassified { is_right: bool },
    /// The run finished; carries the final classification.
    PipelineFinished { run_id: Uuid, is_right: bool },
    /// The run aborted after a step failure.
    PipelineFailed { run_id: Uuid, reason: String },
}

impl PipelineEvent {
    /// Severity used by logging sinks.
    pub fn severity(&self) -> Severity {
        match self {
            PipelineEvent::AngleCompletionFailed { .. } | PipelineEvent::PipelineFailed { .. } => {
                Severity::Error
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineEvent::PipelineStarted { run_id } => {
                write!(f, "triangle processing started (run {run_id})")
            }
            PipelineEvent::AngleComputed { vertex, degrees } => {
                write!(f, "computed angle {vertex} = {degrees}°")
            }
            PipelineEvent::AngleCompletionFailed { unknown } => {
                write!(f, "angle completion failed: {unknown} angles unknown")
            }
            PipelineEvent::TriangleClassified { is_right: true } => {
                write!(f, "triangle is right-angled")
            }
            PipelineEvent::TriangleClassified { is_right: false } => {
                write!(f, "triangle is not right-angled")
            }
            PipelineEvent::PipelineFinished { run_id, is_right } => {
                write!(
                    f,
                    "triangle processing finished (run {run_id}): {}",
                    if *is_right { "right-angled" } else { "not right-angled" }
                )
            }
            PipelineEvent::PipelineFailed { run_id, reason } => {
                write!(f, "triangle processing failed (run {run_id}): {reason}")
            }
        }
    }
}

/// Receives events emitted by the pipeline and its agents.
pub trait EventSink: Send + Sync {
    /// Accept one event. Sinks must not influence core behavior.
    fn emit(&self, event: &PipelineEvent);
}

/// Sink that forwards events to the `log` crate at the event's severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &PipelineEvent) {
        match event.severity() {
            Severity::Info => log::info!(target: "triboard", "{event}"),
            Severity::Error => log::error!(target: "triboard", "{event}"),
        }
    }
}

/// Sink that records every event in memory, for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<PipelineEvent>>,
}

impl MemorySink {
    /// An empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event emitted so far, in order.
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().expect("sink poisoned").clone()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &PipelineEvent) {
        self.events.lock().expect("sink poisoned").push(event.clone());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
