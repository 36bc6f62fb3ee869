//! Pure signal evaluation (no IO).
//!
//! Input: a signal set resolved elsewhere and a pull request accessor.
//! Output: whether the pull request matches, and why.

#![forbid(unsafe_code)]

pub mod decision;
pub mod model;
pub mod pull;
pub mod signals;

mod engine;
mod error;

pub use decision::{BehaviorSignals, Decision, DecisionTrace, TagTrace, decide};
pub use engine::{Evaluation, evaluate, evaluate_enabled};
pub use error::SignalError;
pub use model::{BranchPattern, BranchPatternError, LabelSignals, SignalSet};
pub use pull::{PullContext, PullError};
pub use signals::{Outcome, Signal};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
