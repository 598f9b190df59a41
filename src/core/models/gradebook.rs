//! Gradebook aggregate
//!
//! The gradebook owns the whole term → unit → course → assessment tree and is
//! the only place the tree is mutated. Every mutation either succeeds or
//! leaves the tree untouched; saving and redisplaying are left to the caller.

use super::coefficient::{resolve_coefficient, DEFAULT_COEFFICIENT};
use super::{
    Assessment, AssessmentPath, Course, CoursePath, CreditUnit, EntityPath, Term, UnitPath,
};
use crate::core::GradebookError;
use crate::debug;
use serde::{Deserialize, Serialize};

/// Terms seeded into a fresh gradebook
pub const DEFAULT_TERM_NAMES: [&str; 2] = ["Semester 1", "Semester 2"];

/// Root of the grade tree plus the persisted display preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradebook {
    terms: Vec<Term>,

    /// Dark display theme, persisted for the presentation layer
    #[serde(default)]
    pub dark_mode: bool,
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Gradebook {
    /// Create a gradebook seeded with the two default terms
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: DEFAULT_TERM_NAMES.iter().map(|name| Term::new(*name)).collect(),
            dark_mode: false,
        }
    }

    /// Terms in display order
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Get a term by position
    #[must_use]
    pub fn term(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    /// Get a credit unit by path
    #[must_use]
    pub fn unit(&self, path: UnitPath) -> Option<&CreditUnit> {
        self.term(path.term)?.unit(path.unit)
    }

    /// Get a course by path
    #[must_use]
    pub fn course(&self, path: CoursePath) -> Option<&Course> {
        self.unit(path.unit_path())?.course(path.course)
    }

    /// Get an assessment by path
    #[must_use]
    pub fn assessment(&self, path: AssessmentPath) -> Option<&Assessment> {
        self.course(path.course_path())?.assessment(path.assessment)
    }

    /// Unweighted mean of the averages of terms holding at least one unit
    ///
    /// Empty terms are skipped entirely rather than counted as zero.
    #[must_use]
    pub fn overall_average(&self) -> f64 {
        let (total, count) = self
            .terms
            .iter()
            .filter(|term| !term.is_empty())
            .fold((0.0, 0_u32), |(total, count), term| {
                (total + term.average(), count + 1)
            });
        if count > 0 {
            total / f64::from(count)
        } else {
            0.0
        }
    }

    /// Flip the display theme and return the new value
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Add a credit unit to a term
    ///
    /// A missing or unusable coefficient defaults to 1.
    ///
    /// # Errors
    /// `NotFound` if the term does not exist
    pub fn add_credit_unit(
        &mut self,
        term: usize,
        name: impl Into<String>,
        coefficient: Option<f64>,
    ) -> Result<UnitPath, GradebookError> {
        let target = self.term_mut(term)?;
        let unit = CreditUnit::new(name, resolve_coefficient(coefficient, DEFAULT_COEFFICIENT));
        debug!("Adding unit '{}' (coef {}) to term {}", unit.name, unit.coefficient, term + 1);
        let index = target.add_unit(unit);
        Ok(UnitPath::new(term, index))
    }

    /// Rename a credit unit and update its coefficient
    ///
    /// A missing or unusable coefficient keeps the previous one.
    ///
    /// # Errors
    /// `NotFound` if the unit does not exist
    pub fn edit_credit_unit(
        &mut self,
        path: UnitPath,
        name: impl Into<String>,
        coefficient: Option<f64>,
    ) -> Result<(), GradebookError> {
        let unit = self.unit_mut(path)?;
        unit.edit(name, coefficient);
        debug!("Edited {}: '{}' (coef {})", EntityPath::Unit(path), unit.name, unit.coefficient);
        Ok(())
    }

    /// Remove a credit unit with all its courses
    ///
    /// # Errors
    /// `NotFound` if the unit does not exist
    pub fn remove_credit_unit(&mut self, path: UnitPath) -> Result<CreditUnit, GradebookError> {
        let removed = self
            .term_mut(path.term)?
            .remove_unit(path.unit)
            .ok_or(GradebookError::NotFound(EntityPath::Unit(path)))?;
        debug!("Removed {}: '{}'", EntityPath::Unit(path), removed.name);
        Ok(removed)
    }

    /// Add a course to a credit unit
    ///
    /// A missing or unusable coefficient defaults to 1.
    ///
    /// # Errors
    /// `NotFound` if the unit does not exist
    pub fn add_course(
        &mut self,
        unit: UnitPath,
        name: impl Into<String>,
        coefficient: Option<f64>,
    ) -> Result<CoursePath, GradebookError> {
        let target = self.unit_mut(unit)?;
        let course = Course::new(name, resolve_coefficient(coefficient, DEFAULT_COEFFICIENT));
        debug!(
            "Adding course '{}' (coef {}) to {}",
            course.name,
            course.coefficient,
            EntityPath::Unit(unit)
        );
        let index = target.add_course(course);
        Ok(unit.course(index))
    }

    /// Rename a course and update its coefficient
    ///
    /// A missing or unusable coefficient keeps the previous one.
    ///
    /// # Errors
    /// `NotFound` if the course does not exist
    pub fn edit_course(
        &mut self,
        path: CoursePath,
        name: impl Into<String>,
        coefficient: Option<f64>,
    ) -> Result<(), GradebookError> {
        let course = self.course_mut(path)?;
        course.edit(name, coefficient);
        debug!(
            "Edited {}: '{}' (coef {})",
            EntityPath::Course(path),
            course.name,
            course.coefficient
        );
        Ok(())
    }

    /// Remove a course with all its assessments
    ///
    /// # Errors
    /// `NotFound` if the course does not exist
    pub fn remove_course(&mut self, path: CoursePath) -> Result<Course, GradebookError> {
        let removed = self
            .unit_mut(path.unit_path())?
            .remove_course(path.course)
            .ok_or(GradebookError::NotFound(EntityPath::Course(path)))?;
        debug!("Removed {}: '{}'", EntityPath::Course(path), removed.name);
        Ok(removed)
    }

    /// Add an assessment to a course
    ///
    /// # Errors
    /// - `NotFound` if the course does not exist
    /// - `InvalidScore` / `InvalidWeight` for out-of-range values
    /// - `WeightExceeded` if the course total would pass 100%
    pub fn add_assessment(
        &mut self,
        course: CoursePath,
        name: impl Into<String>,
        score: f64,
        weight: f64,
    ) -> Result<AssessmentPath, GradebookError> {
        let target = self.course_mut(course)?;
        let index = target.add_assessment(name, score, weight)?;
        debug!(
            "Added assessment {score}/20 at {weight}% to {} (total {}%)",
            EntityPath::Course(course),
            target.total_weight()
        );
        Ok(course.assessment(index))
    }

    /// Replace name, score and weight of an assessment
    ///
    /// # Errors
    /// - `NotFound` if the assessment does not exist
    /// - `InvalidScore` / `InvalidWeight` for out-of-range values
    /// - `WeightExceeded` if the course total would pass 100%
    pub fn edit_assessment(
        &mut self,
        path: AssessmentPath,
        name: impl Into<String>,
        score: f64,
        weight: f64,
    ) -> Result<(), GradebookError> {
        let course = self.course_mut(path.course_path())?;
        course
            .edit_assessment(path.assessment, name, score, weight)
            .ok_or(GradebookError::NotFound(EntityPath::Assessment(path)))??;
        debug!(
            "Edited {} (course total {}%)",
            EntityPath::Assessment(path),
            course.total_weight()
        );
        Ok(())
    }

    /// Remove an assessment, freeing its weight
    ///
    /// # Errors
    /// `NotFound` if the assessment does not exist
    pub fn remove_assessment(&mut self, path: AssessmentPath) -> Result<Assessment, GradebookError> {
        let removed = self
            .course_mut(path.course_path())?
            .remove_assessment(path.assessment)
            .ok_or(GradebookError::NotFound(EntityPath::Assessment(path)))?;
        debug!("Removed {}: '{}'", EntityPath::Assessment(path), removed.name);
        Ok(removed)
    }

    fn term_mut(&mut self, index: usize) -> Result<&mut Term, GradebookError> {
        self.terms
            .get_mut(index)
            .ok_or(GradebookError::NotFound(EntityPath::Term(index)))
    }

    fn unit_mut(&mut self, path: UnitPath) -> Result<&mut CreditUnit, GradebookError> {
        self.term_mut(path.term)?
            .unit_mut(path.unit)
            .ok_or(GradebookError::NotFound(EntityPath::Unit(path)))
    }

    fn course_mut(&mut self, path: CoursePath) -> Result<&mut Course, GradebookError> {
        self.unit_mut(path.unit_path())?
            .course_mut(path.course)
            .ok_or(GradebookError::NotFound(EntityPath::Course(path)))
    }
}
