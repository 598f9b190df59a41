//! Handlers for the `unit`, `course` and `assessment` commands

use super::apply_or_exit;
use crate::args::{AssessmentSubcommand, CourseSubcommand, UnitSubcommand};
use grade_tracker::core::models::parse_coefficient;
use grade_tracker::core::session::{Command, Session};
use grade_tracker::core::store::JsonFileStore;

/// Coefficient typed by the user, `None` when absent or unusable
fn coefficient(raw: Option<&str>) -> Option<f64> {
    raw.and_then(parse_coefficient)
}

/// Dispatch unit subcommands
pub fn run_unit(session: &mut Session<JsonFileStore>, subcommand: UnitSubcommand) {
    match subcommand {
        UnitSubcommand::Add {
            term,
            name,
            coefficient: coef,
        } => apply_or_exit(
            session,
            Command::AddCreditUnit {
                term,
                name,
                coefficient: coefficient(coef.as_deref()),
            },
            "add",
        ),
        UnitSubcommand::Edit {
            at,
            name,
            coefficient: coef,
        } => apply_or_exit(
            session,
            Command::EditCreditUnit {
                path: at.path(),
                name,
                coefficient: coefficient(coef.as_deref()),
            },
            "edit",
        ),
        UnitSubcommand::Rm { at } => {
            apply_or_exit(session, Command::RemoveCreditUnit(at.path()), "remove");
        }
    }
}

/// Dispatch course subcommands
pub fn run_course(session: &mut Session<JsonFileStore>, subcommand: CourseSubcommand) {
    match subcommand {
        CourseSubcommand::Add {
            unit,
            name,
            coefficient: coef,
        } => apply_or_exit(
            session,
            Command::AddCourse {
                unit: unit.path(),
                name,
                coefficient: coefficient(coef.as_deref()),
            },
            "add",
        ),
        CourseSubcommand::Edit {
            at,
            name,
            coefficient: coef,
        } => apply_or_exit(
            session,
            Command::EditCourse {
                path: at.path(),
                name,
                coefficient: coefficient(coef.as_deref()),
            },
            "edit",
        ),
        CourseSubcommand::Rm { at } => {
            apply_or_exit(session, Command::RemoveCourse(at.path()), "remove");
        }
    }
}

/// Dispatch assessment subcommands
pub fn run_assessment(session: &mut Session<JsonFileStore>, subcommand: AssessmentSubcommand) {
    match subcommand {
        AssessmentSubcommand::Add {
            course,
            name,
            score,
            weight,
        } => apply_or_exit(
            session,
            Command::AddAssessment {
                course: course.path(),
                name,
                score,
                weight,
            },
            "add",
        ),
        AssessmentSubcommand::Edit {
            at,
            name,
            score,
            weight,
        } => apply_or_exit(
            session,
            Command::EditAssessment {
                path: at.path(),
                name,
                score,
                weight,
            },
            "edit",
        ),
        AssessmentSubcommand::Rm { at } => {
            apply_or_exit(session, Command::RemoveAssessment(at.path()), "remove");
        }
    }
}
