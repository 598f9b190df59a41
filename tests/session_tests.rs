//! Integration tests for command dispatch through a session

use grade_tracker::core::models::{CoursePath, Gradebook, UnitPath};
use grade_tracker::core::session::{Command, GradebookObserver, Session};
use grade_tracker::core::store::{GradebookStore, MemoryStore};
use grade_tracker::core::GradebookError;
use std::cell::RefCell;
use std::rc::Rc;

/// Records every notification it receives
#[derive(Clone, Default)]
struct Recorder {
    seen: Rc<RefCell<Vec<Command>>>,
}

impl GradebookObserver for Recorder {
    fn gradebook_changed(&mut self, _gradebook: &Gradebook, command: &Command) {
        self.seen.borrow_mut().push(command.clone());
    }
}

fn session_with_course() -> (Session<MemoryStore>, Recorder) {
    let mut session = Session::open(MemoryStore::new());
    session
        .apply(Command::AddCreditUnit {
            term: 0,
            name: "Maths".into(),
            coefficient: Some(2.0),
        })
        .unwrap();
    session
        .apply(Command::AddCourse {
            unit: UnitPath::new(0, 0),
            name: "Algebra".into(),
            coefficient: None,
        })
        .unwrap();

    let recorder = Recorder::default();
    session.subscribe(Box::new(recorder.clone()));
    (session, recorder)
}

#[test]
fn success_saves_and_notifies() {
    let (mut session, recorder) = session_with_course();
    let add = Command::AddAssessment {
        course: CoursePath::new(0, 0, 0),
        name: "Exam".into(),
        score: 14.0,
        weight: 50.0,
    };

    session.apply(add.clone()).unwrap();

    assert_eq!(*recorder.seen.borrow(), vec![add]);
    assert_eq!(session.store().load(), *session.gradebook());
}

#[test]
fn rejection_neither_saves_nor_notifies() {
    let (mut session, recorder) = session_with_course();
    let course = CoursePath::new(0, 0, 0);
    session
        .apply(Command::AddAssessment {
            course,
            name: "Exam".into(),
            score: 14.0,
            weight: 80.0,
        })
        .unwrap();
    let saved = session.store().contents();
    recorder.seen.borrow_mut().clear();

    let err = session
        .apply(Command::AddAssessment {
            course,
            name: "Quiz".into(),
            score: 10.0,
            weight: 30.0,
        })
        .unwrap_err();

    assert!(err.is_weight_exceeded());
    assert!(recorder.seen.borrow().is_empty());
    assert_eq!(session.store().contents(), saved);
    assert_eq!(session.gradebook().course(course).unwrap().assessments().len(), 1);
}

#[test]
fn missing_targets_are_not_found() {
    let (mut session, recorder) = session_with_course();

    let err = session
        .apply(Command::RemoveCourse(CoursePath::new(1, 0, 0)))
        .unwrap_err();

    assert!(matches!(err, GradebookError::NotFound(_)));
    assert!(recorder.seen.borrow().is_empty());
}

#[test]
fn theme_commands_persist() {
    let (mut session, recorder) = session_with_course();

    session.apply(Command::ToggleTheme).unwrap();
    assert!(session.gradebook().dark_mode);
    session.apply(Command::SetDarkMode(true)).unwrap();
    assert!(session.store().load().dark_mode);
    session.apply(Command::SetDarkMode(false)).unwrap();
    assert!(!session.store().load().dark_mode);

    assert_eq!(recorder.seen.borrow().len(), 3);
}

#[test]
fn reopening_restores_saved_state() {
    let (mut session, _) = session_with_course();
    session
        .apply(Command::EditCreditUnit {
            path: UnitPath::new(0, 0),
            name: "Mathematics".into(),
            coefficient: None,
        })
        .unwrap();
    let text = session.store().contents().unwrap();

    let reopened = Session::open(MemoryStore::with_contents(text));
    let unit = reopened.gradebook().unit(UnitPath::new(0, 0)).unwrap();
    assert_eq!(unit.name, "Mathematics");
    assert!((unit.coefficient - 2.0).abs() < f64::EPSILON);
}

#[test]
fn every_observer_hears_each_change() {
    let (mut session, first) = session_with_course();
    let second = Recorder::default();
    session.subscribe(Box::new(second.clone()));

    session
        .apply(Command::RemoveCreditUnit(UnitPath::new(0, 0)))
        .unwrap();

    assert_eq!(first.seen.borrow().len(), 1);
    assert_eq!(second.seen.borrow().len(), 1);
    assert!(session.gradebook().term(0).unwrap().is_empty());
}
