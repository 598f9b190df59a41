//! Course model
//!
//! A course owns its assessments and guards the one invariant of the whole
//! tree: the assessment weights of a course never sum past 100%.

use super::assessment::{validate_score, validate_weight, MAX_WEIGHT};
use super::coefficient::resolve_coefficient;
use super::Assessment;
use crate::core::GradebookError;
use serde::{Deserialize, Serialize};

/// A credit-weighted subject holding weighted assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Linear Algebra")
    pub name: String,

    /// Credit weight used when averaging into the owning unit
    pub coefficient: f64,

    /// Assessments in display order
    #[serde(default)]
    assessments: Vec<Assessment>,
}

impl Course {
    /// Create a course with no assessments
    #[must_use]
    pub fn new(name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            name: name.into(),
            coefficient,
            assessments: Vec::new(),
        }
    }

    /// Assessments in insertion order
    #[must_use]
    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    /// Get an assessment by position
    #[must_use]
    pub fn assessment(&self, index: usize) -> Option<&Assessment> {
        self.assessments.get(index)
    }

    /// Sum of assessment weights, in percent
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.assessments.iter().map(|a| a.weight).sum()
    }

    /// Weight still available for new assessments
    #[must_use]
    pub fn remaining_weight(&self) -> f64 {
        MAX_WEIGHT - self.total_weight()
    }

    /// Whether any weight budget is left
    #[must_use]
    pub fn can_add_assessment(&self) -> bool {
        self.remaining_weight() > 0.0
    }

    /// Course average out of 20
    ///
    /// This is the plain sum of weighted points: it is not rescaled when the
    /// recorded weights sum to less than 100, so a single perfect assessment
    /// worth 60% yields 12.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.total_weight() > 0.0 {
            self.assessments.iter().map(Assessment::weighted_points).sum()
        } else {
            0.0
        }
    }

    /// Append an assessment, returning its index
    ///
    /// # Errors
    /// - `InvalidScore` / `InvalidWeight` when a value is out of range
    /// - `WeightExceeded` when the course total would pass 100%
    pub fn add_assessment(
        &mut self,
        name: impl Into<String>,
        score: f64,
        weight: f64,
    ) -> Result<usize, GradebookError> {
        let score = validate_score(score)?;
        let weight = validate_weight(weight)?;
        check_budget(self.total_weight(), weight)?;

        self.assessments.push(Assessment::new(name, score, weight));
        Ok(self.assessments.len() - 1)
    }

    /// Replace name, score and weight of the assessment at `index`
    ///
    /// The budget check discounts the assessment's current weight, so an
    /// edit that keeps the total at or below 100% always succeeds.
    ///
    /// # Returns
    /// `None` if there is no assessment at `index`, otherwise the outcome:
    /// - `InvalidScore` / `InvalidWeight` when a value is out of range
    /// - `WeightExceeded` when the new total would pass 100%
    pub fn edit_assessment(
        &mut self,
        index: usize,
        name: impl Into<String>,
        score: f64,
        weight: f64,
    ) -> Option<Result<(), GradebookError>> {
        let old_weight = self.assessments.get(index)?.weight;
        let total_without = self.total_weight() - old_weight;
        let checked = validate_score(score).and_then(|score| {
            let weight = validate_weight(weight)?;
            check_budget(total_without, weight)?;
            Ok((score, weight))
        });

        Some(checked.map(|(score, weight)| {
            let assessment = &mut self.assessments[index];
            assessment.name = name.into();
            assessment.score = score;
            assessment.weight = weight;
        }))
    }

    /// Remove the assessment at `index`
    ///
    /// # Returns
    /// The removed assessment, or `None` if the index is out of range
    pub fn remove_assessment(&mut self, index: usize) -> Option<Assessment> {
        (index < self.assessments.len()).then(|| self.assessments.remove(index))
    }

    /// Rename the course and update its coefficient
    ///
    /// An unusable coefficient keeps the current one.
    pub fn edit(&mut self, name: impl Into<String>, coefficient: Option<f64>) {
        self.name = name.into();
        self.coefficient = resolve_coefficient(coefficient, self.coefficient);
    }

    /// Whether the stored assessments respect the 100% budget
    #[must_use]
    pub fn is_within_budget(&self) -> bool {
        self.total_weight() <= MAX_WEIGHT
    }
}

fn check_budget(total_without: f64, weight: f64) -> Result<(), GradebookError> {
    if total_without + weight > MAX_WEIGHT {
        Err(GradebookError::weight_exceeded(total_without, weight))
    } else {
        Ok(())
    }
}
