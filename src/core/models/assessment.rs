//! Assessment model

use crate::core::GradebookError;
use serde::{Deserialize, Serialize};

/// Highest score an assessment can carry (grades are out of 20).
pub const MAX_SCORE: f64 = 20.0;

/// Total weight, in percent, the assessments of one course may add up to.
pub const MAX_WEIGHT: f64 = 100.0;

/// A single graded item inside a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Assessment name (e.g., "Midterm exam")
    pub name: String,

    /// Score out of [`MAX_SCORE`]
    pub score: f64,

    /// Share of the course grade, in percent
    pub weight: f64,
}

impl Assessment {
    /// Create a new assessment
    ///
    /// No range checks happen here; `Course` validates before storing one.
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            score,
            weight,
        }
    }

    /// Points this assessment contributes to its course average
    #[must_use]
    pub fn weighted_points(&self) -> f64 {
        self.score * self.weight / 100.0
    }
}

/// Check that `score` is a finite number in `[0, MAX_SCORE]`
///
/// # Errors
/// Returns `GradebookError::InvalidScore` otherwise
pub fn validate_score(score: f64) -> Result<f64, GradebookError> {
    if score.is_finite() && (0.0..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(GradebookError::InvalidScore(score))
    }
}

/// Check that `weight` is a finite percentage in `[0, MAX_WEIGHT]`
///
/// # Errors
/// Returns `GradebookError::InvalidWeight` otherwise
pub fn validate_weight(weight: f64) -> Result<f64, GradebookError> {
    if weight.is_finite() && (0.0..=MAX_WEIGHT).contains(&weight) {
        Ok(weight)
    } else {
        Err(GradebookError::InvalidWeight(weight))
    }
}
