//! Credit unit model

use super::coefficient::resolve_coefficient;
use super::{credit_weighted_mean, Course};
use serde::{Deserialize, Serialize};

/// A credit-weighted group of courses inside a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditUnit {
    /// Unit name (e.g., "Fundamental Sciences")
    pub name: String,

    /// Credit weight used when averaging into the owning term
    pub coefficient: f64,

    /// Courses in display order
    #[serde(default)]
    courses: Vec<Course>,
}

impl CreditUnit {
    /// Create an empty unit
    #[must_use]
    pub fn new(name: impl Into<String>, coefficient: f64) -> Self {
        Self {
            name: name.into(),
            coefficient,
            courses: Vec::new(),
        }
    }

    /// Courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Get a course by position
    #[must_use]
    pub fn course(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub(crate) fn course_mut(&mut self, index: usize) -> Option<&mut Course> {
        self.courses.get_mut(index)
    }

    /// Credit-weighted mean of the course averages, 0 when there is nothing to weigh
    #[must_use]
    pub fn average(&self) -> f64 {
        credit_weighted_mean(self.courses.iter().map(|c| (c.average(), c.coefficient)))
    }

    /// Sum of course coefficients
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.coefficient).sum()
    }

    /// Append a course and return its index
    pub fn add_course(&mut self, course: Course) -> usize {
        self.courses.push(course);
        self.courses.len() - 1
    }

    /// Remove the course at `index`
    pub fn remove_course(&mut self, index: usize) -> Option<Course> {
        (index < self.courses.len()).then(|| self.courses.remove(index))
    }

    /// Rename the unit and update its coefficient, keeping the current one if unusable
    pub fn edit(&mut self, name: impl Into<String>, coefficient: Option<f64>) {
        self.name = name.into();
        self.coefficient = resolve_coefficient(coefficient, self.coefficient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_average(name: &str, coefficient: f64, average: f64) -> Course {
        let mut course = Course::new(name, coefficient);
        course.add_assessment("Exam", average, 100.0).unwrap();
        course
    }

    #[test]
    fn test_unit_average_weights_by_credit() {
        let mut unit = CreditUnit::new("Core", 3.0);
        unit.add_course(course_with_average("Analysis", 2.0, 15.0));
        unit.add_course(course_with_average("Algebra", 1.0, 9.0));

        assert!((unit.average() - 13.0).abs() < 1e-9);
        assert!((unit.total_credits() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_unit_average_is_zero() {
        let unit = CreditUnit::new("Electives", 1.0);
        assert!(unit.average().abs() < f64::EPSILON);
    }

    #[test]
    fn test_courses_without_assessments_still_count() {
        let mut unit = CreditUnit::new("Core", 1.0);
        unit.add_course(course_with_average("Analysis", 1.0, 16.0));
        unit.add_course(Course::new("Not graded yet", 1.0));

        assert!((unit.average() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_remove_course() {
        let mut unit = CreditUnit::new("Core", 1.0);
        unit.add_course(Course::new("A", 1.0));
        unit.add_course(Course::new("B", 1.0));

        assert_eq!(unit.remove_course(0).map(|c| c.name), Some("A".to_string()));
        assert_eq!(unit.courses().len(), 1);
        assert_eq!(unit.courses()[0].name, "B");
        assert!(unit.remove_course(1).is_none());
    }

    #[test]
    fn test_edit_keeps_coefficient_when_unusable() {
        let mut unit = CreditUnit::new("Core", 6.0);
        unit.edit("Core sciences", None);
        assert_eq!(unit.name, "Core sciences");
        assert!((unit.coefficient - 6.0).abs() < f64::EPSILON);
    }
}
