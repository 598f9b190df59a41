//! Index paths addressing entities inside a gradebook
//!
//! Callers hold paths, never references into the tree, so a removal can at
//! worst turn a stale path into a `NotFound` error.

use std::fmt;

/// Position of a credit unit: term index, unit index (both 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitPath {
    /// Term index
    pub term: usize,
    /// Unit index within the term
    pub unit: usize,
}

/// Position of a course inside a credit unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoursePath {
    /// Term index
    pub term: usize,
    /// Unit index within the term
    pub unit: usize,
    /// Course index within the unit
    pub course: usize,
}

/// Position of an assessment inside a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssessmentPath {
    /// Term index
    pub term: usize,
    /// Unit index within the term
    pub unit: usize,
    /// Course index within the unit
    pub course: usize,
    /// Assessment index within the course
    pub assessment: usize,
}

impl UnitPath {
    /// Create a unit path
    #[must_use]
    pub const fn new(term: usize, unit: usize) -> Self {
        Self { term, unit }
    }

    /// Path of the course at `course` inside this unit
    #[must_use]
    pub const fn course(self, course: usize) -> CoursePath {
        CoursePath::new(self.term, self.unit, course)
    }
}

impl CoursePath {
    /// Create a course path
    #[must_use]
    pub const fn new(term: usize, unit: usize, course: usize) -> Self {
        Self { term, unit, course }
    }

    /// Path of the owning unit
    #[must_use]
    pub const fn unit_path(self) -> UnitPath {
        UnitPath::new(self.term, self.unit)
    }

    /// Path of the assessment at `assessment` inside this course
    #[must_use]
    pub const fn assessment(self, assessment: usize) -> AssessmentPath {
        AssessmentPath {
            term: self.term,
            unit: self.unit,
            course: self.course,
            assessment,
        }
    }
}

impl AssessmentPath {
    /// Create an assessment path
    #[must_use]
    pub const fn new(term: usize, unit: usize, course: usize, assessment: usize) -> Self {
        Self {
            term,
            unit,
            course,
            assessment,
        }
    }

    /// Path of the owning course
    #[must_use]
    pub const fn course_path(self) -> CoursePath {
        CoursePath::new(self.term, self.unit, self.course)
    }
}

/// Any addressable entity, used to report lookups that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityPath {
    /// A term by index
    Term(usize),
    /// A credit unit
    Unit(UnitPath),
    /// A course
    Course(CoursePath),
    /// An assessment
    Assessment(AssessmentPath),
}

// Human-facing positions are 1-based.
impl fmt::Display for EntityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => write!(f, "term {}", term + 1),
            Self::Unit(p) => write!(f, "unit {} in term {}", p.unit + 1, p.term + 1),
            Self::Course(p) => write!(
                f,
                "course {} of unit {} in term {}",
                p.course + 1,
                p.unit + 1,
                p.term + 1
            ),
            Self::Assessment(p) => write!(
                f,
                "assessment {} of course {} of unit {} in term {}",
                p.assessment + 1,
                p.course + 1,
                p.unit + 1,
                p.term + 1
            ),
        }
    }
}
