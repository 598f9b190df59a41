//! Core module: the gradebook model and the collaborators built around it

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod session;
pub mod store;

pub use error::GradebookError;

/// Returns the current version of the `grade-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
