//! The computation agents.
//!
//! Each agent is a free function with the common [`Step`] signature: it
//! borrows the blackboard mutably, performs one transformation, and
//! writes its output back. Agents never call each other; the pipeline
//! composes them explicitly.

pub mod angle_completion;
pub mod right_angle;

pub use angle_completion::complete_angles;
pub use right_angle::classify_right_angle;

use crate::blackboard::Blackboard;
use crate::error::StepError;
use crate::events::EventSink;

/// Common signature shared by every agent step.
pub type Step = fn(&mut Blackboard, &dyn EventSink) -> Result<(), StepError>;

/// Key under which the caller stores the input [`Triangle`].
///
/// [`Triangle`]: crate::domain::Triangle
pub const TRIANGLE_KEY: &str = "input_triangle";

/// Key under which the caller may store a [`RuleSet`]. Unused by the
/// current agents.
///
/// [`RuleSet`]: crate::domain::RuleSet
pub const RULES_KEY: &str = "rules_set";

/// Key under which the classification agent stores its boolean verdict.
pub const IS_RIGHT_KEY: &str = "is_right_triangle";
