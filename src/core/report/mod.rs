//! Transcript generation
//!
//! A transcript lists every term that has at least one credit unit, with the
//! unit and course coefficients, each course's average and each assessment's
//! score and weight, followed by a summary of term averages and the overall
//! average. It can be written as Markdown, HTML or PDF.

pub mod formats;

use crate::core::models::{Gradebook, Term};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat};

/// Base name of generated transcript files
pub const FILE_STEM: &str = "transcript";

/// Optional student details printed in the transcript header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentIdentity {
    /// Family name
    pub last_name: Option<String>,
    /// Given name
    pub first_name: Option<String>,
    /// University or school
    pub institution: Option<String>,
    /// Study level (e.g. "L2")
    pub level: Option<String>,
    /// Academic year (e.g. "2025-2026")
    pub academic_year: Option<String>,
    /// Field of study
    pub specialty: Option<String>,
}

fn provided(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl StudentIdentity {
    /// Header lines for the fields that were provided, as `(label, value)`
    ///
    /// Last and first name share a single "Student" line.
    #[must_use]
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();

        let name = [self.last_name.as_ref(), self.first_name.as_ref()]
            .into_iter()
            .filter_map(provided)
            .collect::<Vec<_>>()
            .join(" ");
        if !name.is_empty() {
            lines.push(("Student", name));
        }

        let rest = [
            ("Institution", self.institution.as_ref()),
            ("Level", self.level.as_ref()),
            ("Academic year", self.academic_year.as_ref()),
            ("Specialty", self.specialty.as_ref()),
        ];
        for (label, value) in rest {
            if let Some(value) = provided(value) {
                lines.push((label, value.to_string()));
            }
        }

        lines
    }

    /// Default transcript file name: `transcript[_<last>][_<first>].<ext>`
    #[must_use]
    pub fn file_name(&self, format: ReportFormat) -> String {
        let mut name = String::from(FILE_STEM);
        for part in [self.last_name.as_ref(), self.first_name.as_ref()]
            .into_iter()
            .filter_map(provided)
        {
            name.push('_');
            name.push_str(part);
        }
        format!("{name}.{}", format.extension())
    }
}

/// One assessment line of the detail table
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentLine {
    /// Assessment name
    pub name: String,
    /// Score formatted as `x.x/20`
    pub score: String,
    /// Weight formatted as `w%`
    pub weight: String,
}

/// One course block of the detail table
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSection {
    /// Course name
    pub name: String,
    /// Coefficient as entered
    pub coefficient: String,
    /// Average formatted as `x.xx`
    pub average: String,
    /// Assessments in insertion order
    pub assessments: Vec<AssessmentLine>,
}

/// One credit unit block of the detail table
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSection {
    /// Unit name
    pub name: String,
    /// Coefficient as entered
    pub coefficient: String,
    /// Courses in insertion order
    pub courses: Vec<CourseSection>,
}

/// One term of the transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TermSection {
    /// Term name
    pub name: String,
    /// Term average formatted as `x.xx/20`
    pub average: String,
    /// Units in insertion order
    pub units: Vec<UnitSection>,
}

/// Format a value on the 0-20 scale as `x.xx/20`
#[must_use]
pub fn out_of_twenty(value: f64) -> String {
    format!("{value:.2}/20")
}

/// Data context for transcript generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Gradebook being reported
    pub gradebook: &'a Gradebook,
    /// Student details for the header
    pub identity: &'a StudentIdentity,
    /// Generation date, already formatted
    pub generated_on: String,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(
        gradebook: &'a Gradebook,
        identity: &'a StudentIdentity,
        generated_on: impl Into<String>,
    ) -> Self {
        Self {
            gradebook,
            identity,
            generated_on: generated_on.into(),
        }
    }

    /// Terms that appear in the transcript (those with at least one unit)
    pub fn reported_terms(&self) -> impl Iterator<Item = &'a Term> {
        let gradebook = self.gradebook;
        gradebook.terms().iter().filter(|t| !t.is_empty())
    }

    /// Overall average formatted as `x.xx/20`
    #[must_use]
    pub fn overall_average(&self) -> String {
        out_of_twenty(self.gradebook.overall_average())
    }

    /// Build the transcript body shared by every output format
    #[must_use]
    pub fn sections(&self) -> Vec<TermSection> {
        self.reported_terms()
            .map(|term| TermSection {
                name: term.name.clone(),
                average: out_of_twenty(term.average()),
                units: term
                    .units()
                    .iter()
                    .map(|unit| UnitSection {
                        name: unit.name.clone(),
                        coefficient: unit.coefficient.to_string(),
                        courses: unit
                            .courses()
                            .iter()
                            .map(|course| CourseSection {
                                name: course.name.clone(),
                                coefficient: course.coefficient.to_string(),
                                average: format!("{:.2}", course.average()),
                                assessments: course
                                    .assessments()
                                    .iter()
                                    .map(|a| AssessmentLine {
                                        name: a.name.clone(),
                                        score: format!("{:.1}/20", a.score),
                                        weight: format!("{}%", a.weight),
                                    })
                                    .collect(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
