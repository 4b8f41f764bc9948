//! Error types for the blackboard store, the agents, and the pipeline.

use thiserror::Error;

use crate::blackboard::ValueKind;

/// Errors from typed blackboard retrieval.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlackboardError {
    /// No slot exists under the requested key.
    #[error("no slot stored under key '{key}'")]
    KeyNotFound { key: String },

    /// A slot exists, but holds a different payload type.
    #[error("slot '{key}' holds {found}, not {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

/// Errors returned by an agent step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    /// Two or more angles are unknown; the triangle cannot be solved.
    #[error("triangle is underdetermined: {unknown} angles unknown")]
    Underdetermined { unknown: usize },

    /// Every angle is already known; the completion step has nothing
    /// to fill in. Callers wanting "already solved" to be a no-op must
    /// special-case this before invoking the step.
    #[error("triangle is already fully determined")]
    AlreadyComplete,

    /// A required slot was missing or mistyped. In a correctly wired
    /// pipeline this indicates a programming error, not bad input.
    #[error(transparent)]
    Board(#[from] BlackboardError),
}

/// Errors surfaced to the pipeline's caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A step failed; remaining stages were not run.
    #[error("step '{step}' failed: {source}")]
    Step {
        step: &'static str,
        source: StepError,
    },

    /// Reading the classification result back out of the store failed.
    #[error(transparent)]
    Board(#[from] BlackboardError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlackboardError::KeyNotFound { key: "input_triangle".into() };
        assert_eq!(err.to_string(), "no slot stored under key 'input_triangle'");

        let err = BlackboardError::TypeMismatch {
            key: "is_right_triangle".into(),
            expected: ValueKind::Flag,
            found: ValueKind::Triangle,
        };
        assert!(err.to_string().contains("holds Triangle, not Flag"));
    }

    #[test]
    fn test_step_error_from_board() {
        let board = BlackboardError::KeyNotFound { key: "x".into() };
        let step: StepError = board.clone().into();
        assert_eq!(step, StepError::Board(board));
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::Step {
            step: "angle_completion",
            source: StepError::Underdetermined { unknown: 2 },
        };
        assert_eq!(
            err.to_string(),
            "step 'angle_completion' failed: triangle is underdetermined: 2 angles unknown"
        );
    }
}
