//! CLI command handlers for `gradetrack`.
//!
//! Each command is implemented in its own submodule. Mutating commands go
//! through a [`Session`], which saves the gradebook and reports the change.

pub mod config;
pub mod edit;
pub mod report;
pub mod show;
pub mod theme;

use grade_tracker::core::session::{Command, Session};
use grade_tracker::core::store::JsonFileStore;
use grade_tracker::core::GradebookError;
use grade_tracker::error;

/// Open a session that prints a confirmation after every change
pub fn open_session(store: JsonFileStore) -> Session<JsonFileStore> {
    let mut session = Session::open(store);
    session.subscribe(Box::new(show::ChangePrinter));
    session
}

/// Apply a command, exiting with status 1 if the gradebook rejects it
///
/// `action` names what was attempted ("add", "edit", ...) for the message.
pub fn apply_or_exit(session: &mut Session<JsonFileStore>, command: Command, action: &str) {
    if let Err(err) = session.apply(command) {
        error!("Rejected {action}: {err}");
        eprintln!("✗ {}", rejection_message(&err, action));
        std::process::exit(1);
    }
}

/// Format a percentage without floating-point noise (`30`, `12.5`)
pub fn percent(value: f64) -> String {
    format!("{}", (value * 1e6).round() / 1e6)
}

/// User-facing text for a rejected command
pub fn rejection_message(err: &GradebookError, action: &str) -> String {
    match err {
        GradebookError::WeightExceeded {
            attempted_total,
            remaining,
            ..
        } => format!(
            "Cannot {action}: total would be {}%. {}% remaining.",
            percent(*attempted_total),
            percent(*remaining)
        ),
        other => format!("Cannot {action}: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grade_tracker::core::models::{CoursePath, EntityPath};

    #[test]
    fn weight_rejection_reads_like_a_sentence() {
        let err = GradebookError::weight_exceeded(70.0, 40.0);
        assert_eq!(
            rejection_message(&err, "add"),
            "Cannot add: total would be 110%. 30% remaining."
        );
    }

    #[test]
    fn percent_hides_float_noise() {
        assert_eq!(percent(0.1 + 0.2), "0.3");
        assert_eq!(percent(12.5), "12.5");
        assert_eq!(percent(100.0), "100");
    }

    #[test]
    fn other_rejections_use_error_text() {
        let err = GradebookError::NotFound(EntityPath::Course(CoursePath::new(0, 1, 2)));
        let msg = rejection_message(&err, "remove");
        assert!(msg.starts_with("Cannot remove: "));
        assert!(msg.ends_with("not found"));
    }
}
