//! Integration smoke tests for `grade_tracker`

use grade_tracker::core::models::{Gradebook, DEFAULT_TERM_NAMES};
use grade_tracker::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn fresh_gradebook_has_default_terms() {
    let book = Gradebook::new();
    let names: Vec<&str> = book.terms().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, DEFAULT_TERM_NAMES);
    assert!(book.overall_average().abs() < f64::EPSILON);
}
