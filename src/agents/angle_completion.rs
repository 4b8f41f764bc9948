//! Angle completion agent — fills in the single unknown angle.

use crate::blackboard::Blackboard;
use crate::domain::{Triangle, ANGLE_SUM, VERTEX_LABELS};
use crate::error::StepError;
use crate::events::{EventSink, PipelineEvent};

use super::TRIANGLE_KEY;

/// Complete the triangle stored under [`TRIANGLE_KEY`].
///
/// Expects exactly one unknown angle and sets it to `180 − sum(known)`,
/// marking it known. The mutation happens in place through the store's
/// mutable handle, so the result is immediately visible to later steps.
///
/// Fails with [`StepError::AlreadyComplete`] when nothing is unknown
/// and [`StepError::Underdetermined`] when two or more angles are; a
/// failure event is emitted before either error returns. The step does
/// not validate geometric plausibility: two known angles already
/// summing past 180 still yield `180 − sum` for the missing one.
pub fn complete_angles(board: &mut Blackboard, sink: &dyn EventSink) -> Result<(), StepError> {
    let triangle = board.get_mut::<Triangle>(TRIANGLE_KEY)?;

    let unknown = triangle.unknown_count();
    let gap = triangle.angles.iter().position(|a| !a.known);
    let index = match (unknown, gap) {
        (1, Some(index)) => index,
        (0, _) => {
            sink.emit(&PipelineEvent::AngleCompletionFailed { unknown });
            return Err(StepError::AlreadyComplete);
        }
        _ => {
            sink.emit(&PipelineEvent::AngleCompletionFailed { unknown });
            return Err(StepError::Underdetermined { unknown });
        }
    };

    let value = ANGLE_SUM - triangle.known_sum();
    triangle.angles[index].value = value;
    triangle.angles[index].known = true;

    sink.emit(&PipelineEvent::AngleComputed {
        vertex: VERTEX_LABELS[index],
        degrees: value,
    });
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::IS_RIGHT_KEY;
    use crate::domain::Angle;
    use crate::events::MemorySink;

    fn board_with(tri: Triangle) -> Blackboard {
        let mut board = Blackboard::new();
        board.put(TRIANGLE_KEY, tri, "test");
        board
    }

    #[test]
    fn test_completes_single_unknown() {
        let mut board = board_with(Triangle::new(
            Angle::known(90.0),
            Angle::known(45.0),
            Angle::unknown(),
        ));
        let sink = MemorySink::new();

        complete_angles(&mut board, &sink).unwrap();

        let tri = board.get::<Triangle>(TRIANGLE_KEY).unwrap();
        assert!(tri.is_complete());
        assert_eq!(tri.angles[2].value, 45.0);
        assert!((tri.known_sum() - 180.0).abs() < 1e-9);
        assert_eq!(
            sink.events(),
            vec![PipelineEvent::AngleComputed { vertex: 'C', degrees: 45.0 }]
        );
    }

    #[test]
    fn test_unknown_in_any_position() {
        for index in 0..3 {
            let mut angles = [Angle::known(70.0), Angle::known(50.0), Angle::known(60.0)];
            angles[index] = Angle::unknown();
            let mut board = board_with(Triangle { angles });
            let sink = MemorySink::new();

            complete_angles(&mut board, &sink).unwrap();

            let tri = board.get::<Triangle>(TRIANGLE_KEY).unwrap();
            assert!(tri.angles[index].known);
            assert!((tri.known_sum() - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fails_when_already_complete() {
        let mut board = board_with(Triangle::new(
            Angle::known(60.0),
            Angle::known(60.0),
            Angle::known(60.0),
        ));
        let sink = MemorySink::new();

        let err = complete_angles(&mut board, &sink).unwrap_err();
        assert_eq!(err, StepError::AlreadyComplete);
        assert_eq!(sink.events(), vec![PipelineEvent::AngleCompletionFailed { unknown: 0 }]);
        // The failure touches nothing else in the store.
        assert!(!board.contains(IS_RIGHT_KEY));
    }

    #[test]
    fn test_fails_when_underdetermined() {
        let mut board = board_with(Triangle::new(
            Angle::known(90.0),
            Angle::unknown(),
            Angle::unknown(),
        ));
        let sink = MemorySink::new();

        let err = complete_angles(&mut board, &sink).unwrap_err();
        assert_eq!(err, StepError::Underdetermined { unknown: 2 });
        assert_eq!(sink.events(), vec![PipelineEvent::AngleCompletionFailed { unknown: 2 }]);
        assert!(!board.contains(IS_RIGHT_KEY));
    }

    #[test]
    fn test_no_geometry_validation() {
        // 90 + 90 already exhausts the angle sum; the formula still
        // applies and yields 0 for the missing angle.
        let mut board = board_with(Triangle::new(
            Angle::known(90.0),
            Angle::known(90.0),
            Angle::unknown(),
        ));
        let sink = MemorySink::new();

        complete_angles(&mut board, &sink).unwrap();
        let tri = board.get::<Triangle>(TRIANGLE_KEY).unwrap();
        assert_eq!(tri.angles[2].value, 0.0);
        assert!(tri.is_complete());
    }

    #[test]
    fn test_missing_triangle_is_board_error() {
        let mut board = Blackboard::new();
        let sink = MemorySink::new();

        let err = complete_angles(&mut board, &sink).unwrap_err();
        assert!(matches!(err, StepError::Board(_)));
        assert!(sink.events().is_empty());
    }
}
