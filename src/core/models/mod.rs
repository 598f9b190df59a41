//! Data models for the gradebook tree

pub mod assessment;
pub mod coefficient;
pub mod course;
pub mod credit_unit;
pub mod gradebook;
pub mod path;
pub mod term;

pub use assessment::Assessment;
pub use coefficient::{parse_coefficient, DEFAULT_COEFFICIENT};
pub use course::Course;
pub use credit_unit::CreditUnit;
pub use gradebook::{Gradebook, DEFAULT_TERM_NAMES};
pub use path::{AssessmentPath, CoursePath, EntityPath, UnitPath};
pub use term::Term;

/// Mean of `(average, credit)` pairs weighted by credit.
///
/// Returns 0 for an empty input or when the credits sum to zero.
pub(crate) fn credit_weighted_mean(items: impl Iterator<Item = (f64, f64)>) -> f64 {
    let (points, credits) = items.fold((0.0, 0.0), |(points, credits), (average, credit)| {
        (average.mul_add(credit, points), credits + credit)
    });
    if credits == 0.0 {
        0.0
    } else {
        points / credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mean_guards_empty_and_zero_credit() {
        assert!(credit_weighted_mean(std::iter::empty()).abs() < f64::EPSILON);
        assert!(credit_weighted_mean([(14.0, 0.0), (8.0, 0.0)].into_iter()).abs() < f64::EPSILON);
    }

    #[test]
    fn weighted_mean_weights_by_credit() {
        let mean = credit_weighted_mean([(15.0, 2.0), (9.0, 1.0)].into_iter());
        assert!((mean - 13.0).abs() < 1e-9);
    }
}
