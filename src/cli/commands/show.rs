//! Terminal rendering of the gradebook
//!
//! `render` draws the whole tree with 1-based positions so they can be typed
//! back into the editing commands. `ChangePrinter` confirms each successful
//! change with a one-line summary of what it affected.

use super::percent;
use grade_tracker::core::models::{CoursePath, Gradebook};
use grade_tracker::core::report::out_of_twenty;
use grade_tracker::core::session::{Command, GradebookObserver};
use std::fmt::Write;

/// Render the gradebook tree with averages and remaining weights
pub fn render(gradebook: &Gradebook) -> String {
    let mut out = String::new();

    for (t, term) in gradebook.terms().iter().enumerate() {
        let _ = writeln!(
            out,
            "[{}] {} - average {}",
            t + 1,
            term.name,
            out_of_twenty(term.average())
        );
        if term.is_empty() {
            let _ = writeln!(out, "    (no credit units)");
        }

        for (u, unit) in term.units().iter().enumerate() {
            let _ = writeln!(
                out,
                "    [{}] {} (coef {}) - average {}",
                u + 1,
                unit.name,
                unit.coefficient,
                out_of_twenty(unit.average())
            );

            for (c, course) in unit.courses().iter().enumerate() {
                let _ = writeln!(
                    out,
                    "        [{}] {} (coef {}) - average {}, {}% remaining",
                    c + 1,
                    course.name,
                    course.coefficient,
                    out_of_twenty(course.average()),
                    percent(course.remaining_weight())
                );

                for (a, assessment) in course.assessments().iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "            [{}] {}: {:.1}/20 at {}%",
                        a + 1,
                        assessment.name,
                        assessment.score,
                        percent(assessment.weight)
                    );
                }
            }
        }
    }

    let _ = writeln!(
        out,
        "\nOverall average: {}",
        out_of_twenty(gradebook.overall_average())
    );
    let _ = writeln!(
        out,
        "Theme: {}",
        if gradebook.dark_mode { "dark" } else { "light" }
    );
    out
}

/// One-line summary of a change that was just applied
pub fn describe_change(gradebook: &Gradebook, command: &Command) -> String {
    match command {
        Command::AddCreditUnit { term, name, .. } => {
            let term_name = gradebook.term(*term).map_or("?", |t| t.name.as_str());
            format!("Added credit unit '{name}' to {term_name}")
        }
        Command::EditCreditUnit { path, .. } => gradebook.unit(*path).map_or_else(
            || "Updated credit unit".to_string(),
            |u| format!("Updated credit unit '{}' (coef {})", u.name, u.coefficient),
        ),
        Command::RemoveCreditUnit(_) => "Removed credit unit".to_string(),
        Command::AddCourse { unit, name, .. } => {
            let unit_name = gradebook.unit(*unit).map_or("?", |u| u.name.as_str());
            format!("Added course '{name}' to '{unit_name}'")
        }
        Command::EditCourse { path, .. } => gradebook.course(*path).map_or_else(
            || "Updated course".to_string(),
            |c| format!("Updated course '{}' (coef {})", c.name, c.coefficient),
        ),
        Command::RemoveCourse(_) => "Removed course".to_string(),
        Command::AddAssessment { course, .. } => {
            course_status(gradebook, *course, "Added assessment to")
        }
        Command::EditAssessment { path, .. } => {
            course_status(gradebook, path.course_path(), "Updated assessment in")
        }
        Command::RemoveAssessment(path) => {
            course_status(gradebook, path.course_path(), "Removed assessment from")
        }
        Command::ToggleTheme | Command::SetDarkMode(_) => format!(
            "Theme set to {}",
            if gradebook.dark_mode { "dark" } else { "light" }
        ),
    }
}

fn course_status(gradebook: &Gradebook, path: CoursePath, lead: &str) -> String {
    gradebook.course(path).map_or_else(
        || format!("{lead} course"),
        |course| {
            format!(
                "{lead} '{}': {}% used, average {}",
                course.name,
                percent(course.total_weight()),
                out_of_twenty(course.average())
            )
        },
    )
}

/// Prints a confirmation line after each successful change
pub struct ChangePrinter;

impl GradebookObserver for ChangePrinter {
    fn gradebook_changed(&mut self, gradebook: &Gradebook, command: &Command) {
        println!("✓ {}", describe_change(gradebook, command));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gradebook {
        let mut book = Gradebook::new();
        let unit = book.add_credit_unit(0, "Maths", Some(2.0)).unwrap();
        let course = book.add_course(unit, "Algebra", None).unwrap();
        book.add_assessment(course, "Midterm", 20.0, 50.0).unwrap();
        book.add_assessment(course, "Final", 10.0, 30.0).unwrap();
        book
    }

    #[test]
    fn tree_uses_one_based_positions() {
        let out = render(&sample());
        assert!(out.contains("[1] Semester 1 - average 13.00/20"));
        assert!(out.contains("    [1] Maths (coef 2) - average 13.00/20"));
        assert!(out.contains("        [1] Algebra (coef 1) - average 13.00/20, 20% remaining"));
        assert!(out.contains("            [2] Final: 10.0/20 at 30%"));
        assert!(out.contains("[2] Semester 2 - average 0.00/20\n    (no credit units)"));
        assert!(out.contains("Overall average: 13.00/20"));
        assert!(out.contains("Theme: light"));
    }

    #[test]
    fn assessment_changes_report_course_budget() {
        let book = sample();
        let msg = describe_change(
            &book,
            &Command::AddAssessment {
                course: CoursePath::new(0, 0, 0),
                name: "Final".into(),
                score: 10.0,
                weight: 30.0,
            },
        );
        assert_eq!(msg, "Added assessment to 'Algebra': 80% used, average 13.00/20");
    }

    #[test]
    fn theme_change_names_new_theme() {
        let mut book = Gradebook::new();
        book.toggle_theme();
        assert_eq!(describe_change(&book, &Command::ToggleTheme), "Theme set to dark");
    }
}
