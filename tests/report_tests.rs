//! Integration tests for transcript generation

use grade_tracker::core::models::Gradebook;
use grade_tracker::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator, StudentIdentity,
};
use tempfile::TempDir;

fn gradebook() -> Gradebook {
    let mut book = Gradebook::new();
    let unit = book.add_credit_unit(0, "Sciences", Some(2.0)).unwrap();
    let physics = book.add_course(unit, "Physics", Some(2.0)).unwrap();
    book.add_assessment(physics, "Midterm", 20.0, 50.0).unwrap();
    book.add_assessment(physics, "Final", 10.0, 50.0).unwrap();
    let chemistry = book.add_course(unit, "Chemistry", None).unwrap();
    book.add_assessment(chemistry, "Lab", 9.0, 100.0).unwrap();
    book
}

fn identity() -> StudentIdentity {
    StudentIdentity {
        last_name: Some("Doe".into()),
        first_name: Some("Jane".into()),
        institution: Some("City University".into()),
        academic_year: Some("2025-2026".into()),
        ..StudentIdentity::default()
    }
}

#[test]
fn markdown_lists_every_row() {
    let book = gradebook();
    let id = identity();
    let ctx = ReportContext::new(&book, &id, "2026-10-16");

    let md = MarkdownReporter::new().render(&ctx).unwrap();

    assert!(md.contains("**Student:** Doe Jane"));
    assert!(md.contains("**Institution:** City University"));
    assert!(md.contains("**Academic year:** 2025-2026"));
    assert!(!md.contains("**Level:**"));
    assert!(md.contains("**Overall average:** 13.00/20"));
    assert!(md.contains("| **Semester 1** | | | |"));
    assert!(md.contains("| *Unit: Sciences (Coef: 2)* | | | |"));
    assert!(md.contains("| Physics | Coef: 2 | Avg: 15.00 | |"));
    assert!(md.contains("| | Midterm | 20.0/20 | 50% |"));
    assert!(md.contains("| Chemistry | Coef: 1 | Avg: 9.00 | |"));
    assert!(md.contains("| Semester 1 | 13.00/20 |"));
    assert!(!md.contains("Semester 2"));
}

#[test]
fn html_lists_every_row() {
    let book = gradebook();
    let id = identity();
    let ctx = ReportContext::new(&book, &id, "2026-10-16");

    let html = HtmlReporter::new().render(&ctx).unwrap();

    assert!(html.contains("<strong>Student:</strong> Doe Jane"));
    assert!(html.contains("Unit: Sciences (Coef: 2)"));
    assert!(html.contains("<td>Physics</td><td>Coef: 2</td><td>Avg: 15.00</td>"));
    assert!(html.contains("<td>Final</td><td>10.0/20</td><td>50%</td>"));
    assert!(html.contains("<tr><td>Semester 1</td><td>13.00/20</td></tr>"));
    assert!(!html.contains("Semester 2"));
}

#[test]
fn generate_writes_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let book = gradebook();
    let id = identity();
    let ctx = ReportContext::new(&book, &id, "2026-10-16");
    let path = dir.path().join(id.file_name(grade_tracker::core::report::ReportFormat::Html));

    HtmlReporter::new().generate(&ctx, &path).unwrap();

    assert!(path.ends_with("transcript_Doe_Jane.html"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
}
