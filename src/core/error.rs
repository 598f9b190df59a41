//! Gradebook error types.
//!
//! Every failed mutation leaves the tree exactly as it was before the call.

use crate::core::models::EntityPath;
use thiserror::Error;

/// Reasons a gradebook mutation can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// Adding or editing an assessment would push its course past 100%.
    #[error("total would be {attempted_total}% ({overshoot}% over); {remaining}% remaining")]
    WeightExceeded {
        /// Course total the mutation would have produced.
        attempted_total: f64,
        /// Amount by which `attempted_total` exceeds 100.
        overshoot: f64,
        /// Weight still available to the assessment being added or edited.
        remaining: f64,
    },

    /// The path does not address an entity in the tree.
    #[error("{0} not found")]
    NotFound(EntityPath),

    /// Score outside [0, 20] or not a finite number.
    #[error("invalid score {0}: expected a number between 0 and 20")]
    InvalidScore(f64),

    /// Weight outside [0, 100] or not a finite number.
    #[error("invalid weight {0}: expected a percentage between 0 and 100")]
    InvalidWeight(f64),
}

impl GradebookError {
    /// Builds a `WeightExceeded` from the course total without the assessment
    /// in question and the weight that was requested for it.
    #[must_use]
    pub fn weight_exceeded(total_without: f64, requested: f64) -> Self {
        let attempted_total = total_without + requested;
        Self::WeightExceeded {
            attempted_total,
            overshoot: attempted_total - 100.0,
            remaining: 100.0 - total_without,
        }
    }

    /// Returns `true` for the weight-budget rejection.
    #[must_use]
    pub const fn is_weight_exceeded(&self) -> bool {
        matches!(self, Self::WeightExceeded { .. })
    }
}
