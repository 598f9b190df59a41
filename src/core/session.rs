//! Mutation dispatch
//!
//! A session owns the one gradebook of a running program together with its
//! store and observers. Each command is applied to the gradebook; only when
//! it succeeds is the result saved and observers told about it.

use crate::core::models::{AssessmentPath, CoursePath, Gradebook, UnitPath};
use crate::core::store::GradebookStore;
use crate::core::GradebookError;
use crate::{debug, error};

/// One mutation of the gradebook
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a credit unit to a term
    AddCreditUnit {
        /// Target term index
        term: usize,
        /// Unit name
        name: String,
        /// Parsed coefficient, `None` if unparsable
        coefficient: Option<f64>,
    },
    /// Rename a credit unit and update its coefficient
    EditCreditUnit {
        /// Unit to edit
        path: UnitPath,
        /// New name
        name: String,
        /// Parsed coefficient, `None` keeps the current one
        coefficient: Option<f64>,
    },
    /// Remove a credit unit
    RemoveCreditUnit(UnitPath),
    /// Add a course to a credit unit
    AddCourse {
        /// Owning unit
        unit: UnitPath,
        /// Course name
        name: String,
        /// Parsed coefficient, `None` if unparsable
        coefficient: Option<f64>,
    },
    /// Rename a course and update its coefficient
    EditCourse {
        /// Course to edit
        path: CoursePath,
        /// New name
        name: String,
        /// Parsed coefficient, `None` keeps the current one
        coefficient: Option<f64>,
    },
    /// Remove a course
    RemoveCourse(CoursePath),
    /// Add an assessment to a course
    AddAssessment {
        /// Owning course
        course: CoursePath,
        /// Assessment name
        name: String,
        /// Score out of 20
        score: f64,
        /// Weight in percent
        weight: f64,
    },
    /// Replace an assessment's name, score and weight
    EditAssessment {
        /// Assessment to edit
        path: AssessmentPath,
        /// New name
        name: String,
        /// New score out of 20
        score: f64,
        /// New weight in percent
        weight: f64,
    },
    /// Remove an assessment
    RemoveAssessment(AssessmentPath),
    /// Flip the display theme
    ToggleTheme,
    /// Set the display theme
    SetDarkMode(bool),
}

/// Something that reacts to every successful mutation (typically a view)
pub trait GradebookObserver {
    /// Called with the updated gradebook after a command succeeds
    fn gradebook_changed(&mut self, gradebook: &Gradebook, command: &Command);
}

/// Applies commands to a gradebook, persisting and notifying on success
pub struct Session<S: GradebookStore> {
    gradebook: Gradebook,
    store: S,
    observers: Vec<Box<dyn GradebookObserver>>,
}

impl<S: GradebookStore> Session<S> {
    /// Open a session on whatever the store holds
    #[must_use]
    pub fn open(store: S) -> Self {
        let gradebook = store.load();
        Self {
            gradebook,
            store,
            observers: Vec::new(),
        }
    }

    /// Register an observer notified after each successful command
    pub fn subscribe(&mut self, observer: Box<dyn GradebookObserver>) {
        self.observers.push(observer);
    }

    /// Current gradebook
    #[must_use]
    pub const fn gradebook(&self) -> &Gradebook {
        &self.gradebook
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Apply one command
    ///
    /// On success the gradebook is saved and every observer is notified. A
    /// failed save is logged and does not undo the mutation.
    ///
    /// # Errors
    /// Returns the gradebook's rejection unchanged; nothing is saved or
    /// notified in that case
    pub fn apply(&mut self, command: Command) -> Result<(), GradebookError> {
        debug!("Applying {command:?}");
        execute(&mut self.gradebook, command.clone())?;

        if let Err(e) = self.store.save(&self.gradebook) {
            error!("Failed to save gradebook: {e}");
        }
        for observer in &mut self.observers {
            observer.gradebook_changed(&self.gradebook, &command);
        }
        Ok(())
    }
}

fn execute(gradebook: &mut Gradebook, command: Command) -> Result<(), GradebookError> {
    match command {
        Command::AddCreditUnit {
            term,
            name,
            coefficient,
        } => gradebook.add_credit_unit(term, name, coefficient).map(|_| ()),
        Command::EditCreditUnit {
            path,
            name,
            coefficient,
        } => gradebook.edit_credit_unit(path, name, coefficient),
        Command::RemoveCreditUnit(path) => gradebook.remove_credit_unit(path).map(|_| ()),
        Command::AddCourse {
            unit,
            name,
            coefficient,
        } => gradebook.add_course(unit, name, coefficient).map(|_| ()),
        Command::EditCourse {
            path,
            name,
            coefficient,
        } => gradebook.edit_course(path, name, coefficient),
        Command::RemoveCourse(path) => gradebook.remove_course(path).map(|_| ()),
        Command::AddAssessment {
            course,
            name,
            score,
            weight,
        } => gradebook
            .add_assessment(course, name, score, weight)
            .map(|_| ()),
        Command::EditAssessment {
            path,
            name,
            score,
            weight,
        } => gradebook.edit_assessment(path, name, score, weight),
        Command::RemoveAssessment(path) => gradebook.remove_assessment(path).map(|_| ()),
        Command::ToggleTheme => {
            gradebook.toggle_theme();
            Ok(())
        }
        Command::SetDarkMode(dark) => {
            gradebook.dark_mode = dark;
            Ok(())
        }
    }
}
