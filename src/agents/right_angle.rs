//! Right-angle classification agent.

use crate::blackboard::Blackboard;
use crate::domain::{Triangle, RIGHT_ANGLE, RIGHT_ANGLE_TOLERANCE};
use crate::error::StepError;
use crate::events::{EventSink, PipelineEvent};

use super::{IS_RIGHT_KEY, TRIANGLE_KEY};

/// Name recorded as the slot source for the classification verdict.
const SOURCE: &str = "right_angle_classification";

/// Classify the triangle stored under [`TRIANGLE_KEY`] and store the
/// verdict under [`IS_RIGHT_KEY`].
///
/// The verdict is `true` when any known angle lies within 0.001° of
/// 90°, checked in vertex order with a short-circuit on the first
/// match. Unknown angles never match; they do not make the step fail.
/// Callers must run angle completion first, or an incomplete triangle
/// may be misclassified.
pub fn classify_right_angle(board: &mut Blackboard, sink: &dyn EventSink) -> Result<(), StepError> {
    let triangle = board.get::<Triangle>(TRIANGLE_KEY)?;

    let is_right = triangle
        .angles
        .iter()
        .any(|a| a.known && (a.value - RIGHT_ANGLE).abs() < RIGHT_ANGLE_TOLERANCE);

    board.put(IS_RIGHT_KEY, is_right, SOURCE);
    sink.emit(&PipelineEvent::TriangleClassified { is_right });
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
