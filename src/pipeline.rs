//! Pipeline — runs the agents in order over one shared blackboard.
//!
//! The pipeline is a linear state machine. It owns no triangle data;
//! everything lives in the blackboard. Any step failure moves it to
//! the absorbing `Error` stage and aborts the remaining stages.

use std::sync::Arc;

use uuid::Uuid;

use crate::agents::{self, Step, IS_RIGHT_KEY};
use crate::blackboard::Blackboard;
use crate::error::PipelineError;
use crate::events::{EventSink, PipelineEvent};

/// Stage of a pipeline run. `Done` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Created, not yet run.
    Start,
    /// Angle completion succeeded; the triangle is fully known.
    AnglesResolved,
    /// Classification has been written to the store.
    Classified,
    /// The run finished and the verdict was read back.
    Done,
    /// A step failed; remaining stages were skipped.
    Error,
}

/// The ordered step table: each step's name, the stage reached when it
/// succeeds, and the function to invoke.
const STEPS: [(&str, Stage, Step); 2] = [
    ("angle_completion", Stage::AnglesResolved, agents::complete_angles),
    ("right_angle_classification", Stage::Classified, agents::classify_right_angle),
];

/// Orchestrates one run of the agent chain.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use triboard::agents::TRIANGLE_KEY;
/// use triboard::blackboard::Blackboard;
/// use triboard::domain::{Angle, Triangle};
/// use triboard::events::MemorySink;
/// use triboard::pipeline::Pipeline;
///
/// let mut board = Blackboard::new();
/// board.put(TRIANGLE_KEY,
///     Triangle::new(Angle::known(90.0), Angle::known(45.0), Angle::unknown()),
///     "caller");
///
/// let mut pipeline = Pipeline::new(Arc::new(MemorySink::new()));
/// let is_right = pipeline.run(&mut board).unwrap();
/// assert!(is_right);
/// ```
pub struct Pipeline {
    sink: Arc<dyn EventSink>,
    run_id: Uuid,
    stage: Stage,
}

impl Pipeline {
    /// Create a pipeline emitting to the given sink.
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            run_id: Uuid::new_v4(),
            stage: Stage::Start,
        }
    }

    /// The id stamped on this run's start/finish events.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run the agent chain over `board` and return the classification.
    ///
    /// The caller must have stored the input triangle first (see
    /// [`agents::TRIANGLE_KEY`]). On any step failure the pipeline
    /// emits a failure event, enters [`Stage::Error`], and returns
    /// without invoking later steps; the computation has no side
    /// effects beyond the store, so aborting early is safe.
    pub fn run(&mut self, board: &mut Blackboard) -> Result<bool, PipelineError> {
        self.sink.emit(&PipelineEvent::PipelineStarted { run_id: self.run_id });

        for (name, stage, step) in STEPS {
            // Every step's result is checked, including steps that
            // cannot currently fail.
            if let Err(source) = step(board, self.sink.as_ref()) {
                return Err(self.fail(PipelineError::Step { step: name, source }));
            }
            self.stage = stage;
        }

        let is_right = match board.get::<bool>(IS_RIGHT_KEY) {
            Ok(flag) => *flag,
            Err(err) => return Err(self.fail(PipelineError::Board(err))),
        };

        self.sink.emit(&PipelineEvent::PipelineFinished { run_id: self.run_id, is_right });
        self.stage = Stage::Done;
        Ok(is_right)
    }

    fn fail(&mut self, error: PipelineError) -> PipelineError {
        self.stage = Stage::Error;
        self.sink.emit(&PipelineEvent::PipelineFailed {
            run_id: self.run_id,
            reason: error.to_string(),
        });
        error
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
