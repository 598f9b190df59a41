//! Shared library for `gradetrack`
//! Contains the gradebook model, persistence, reports and logging used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::config;
pub use self::core::get_version;
