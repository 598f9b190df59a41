//! Term model

use super::{credit_weighted_mean, CreditUnit};
use serde::{Deserialize, Serialize};

/// An academic term (e.g., a semester) holding credit units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Term name (e.g., "Semester 1")
    pub name: String,

    /// Credit units in display order
    #[serde(default)]
    units: Vec<CreditUnit>,
}

impl Term {
    /// Create an empty term
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Credit units in insertion order
    #[must_use]
    pub fn units(&self) -> &[CreditUnit] {
        &self.units
    }

    /// Get a unit by position
    #[must_use]
    pub fn unit(&self, index: usize) -> Option<&CreditUnit> {
        self.units.get(index)
    }

    pub(crate) fn unit_mut(&mut self, index: usize) -> Option<&mut CreditUnit> {
        self.units.get_mut(index)
    }

    /// Whether the term holds no units (such terms are left out of the overall average)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Credit-weighted mean of the unit averages
    #[must_use]
    pub fn average(&self) -> f64 {
        credit_weighted_mean(self.units.iter().map(|u| (u.average(), u.coefficient)))
    }

    /// Append a unit and return its index
    pub fn add_unit(&mut self, unit: CreditUnit) -> usize {
        self.units.push(unit);
        self.units.len() - 1
    }

    /// Remove the unit at `index`
    pub fn remove_unit(&mut self, index: usize) -> Option<CreditUnit> {
        (index < self.units.len()).then(|| self.units.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn unit_with_average(coefficient: f64, average: f64) -> CreditUnit {
        let mut course = Course::new("Course", 1.0);
        course.add_assessment("Exam", average, 100.0).unwrap();
        let mut unit = CreditUnit::new("Unit", coefficient);
        unit.add_course(course);
        unit
    }

    #[test]
    fn test_term_creation() {
        let term = Term::new("Semester 1");
        assert_eq!(term.name, "Semester 1");
        assert!(term.is_empty());
        assert!(term.average().abs() < f64::EPSILON);
    }

    #[test]
    fn test_term_average_weights_units_by_credit() {
        let mut term = Term::new("Semester 1");
        term.add_unit(unit_with_average(3.0, 14.0));
        term.add_unit(unit_with_average(1.0, 10.0));

        assert!((term.average() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_credit_units_average_zero() {
        let mut term = Term::new("Semester 2");
        term.add_unit(unit_with_average(0.0, 14.0));

        assert!(!term.is_empty());
        assert!(term.average().abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_unit() {
        let mut term = Term::new("Semester 1");
        term.add_unit(unit_with_average(1.0, 10.0));

        assert!(term.remove_unit(1).is_none());
        assert!(term.remove_unit(0).is_some());
        assert!(term.is_empty());
    }
}
