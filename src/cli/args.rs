//! CLI argument definitions for `gradetrack`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_tracker::config::ConfigOverrides;
use grade_tracker::core::models::{AssessmentPath, CoursePath, UnitPath};
use grade_tracker::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Parse a 1-based position from the command line into a 0-based index
fn parse_position(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(format!("'{value}' is not a position (1, 2, ...)")),
    }
}

/// Address of a credit unit: `TERM UNIT`
#[derive(Debug, Clone, Copy, Args)]
pub struct UnitArgs {
    /// Term position (1-based)
    #[arg(value_name = "TERM", value_parser = parse_position)]
    pub term: usize,
    /// Credit unit position within the term (1-based)
    #[arg(value_name = "UNIT", value_parser = parse_position)]
    pub unit: usize,
}

impl UnitArgs {
    /// Zero-based path of the addressed unit
    pub const fn path(self) -> UnitPath {
        UnitPath::new(self.term, self.unit)
    }
}

/// Address of a course: `TERM UNIT COURSE`
#[derive(Debug, Clone, Copy, Args)]
pub struct CourseArgs {
    #[command(flatten)]
    pub unit: UnitArgs,
    /// Course position within the unit (1-based)
    #[arg(value_name = "COURSE", value_parser = parse_position)]
    pub course: usize,
}

impl CourseArgs {
    /// Zero-based path of the addressed course
    pub const fn path(self) -> CoursePath {
        self.unit.path().course(self.course)
    }
}

/// Address of an assessment: `TERM UNIT COURSE ASSESSMENT`
#[derive(Debug, Clone, Copy, Args)]
pub struct AssessmentArgs {
    #[command(flatten)]
    pub course: CourseArgs,
    /// Assessment position within the course (1-based)
    #[arg(value_name = "ASSESSMENT", value_parser = parse_position)]
    pub assessment: usize,
}

impl AssessmentArgs {
    /// Zero-based path of the addressed assessment
    pub const fn path(self) -> AssessmentPath {
        self.course.path().assessment(self.assessment)
    }
}

#[derive(Debug, Subcommand)]
pub enum UnitSubcommand {
    /// Add a credit unit to a term.
    Add {
        /// Term position (1-based)
        #[arg(value_name = "TERM", value_parser = parse_position)]
        term: usize,
        /// Unit name
        #[arg(value_name = "NAME")]
        name: String,
        /// Credit weight (defaults to 1 when missing or not a number)
        #[arg(short, long = "coef", value_name = "COEF")]
        coefficient: Option<String>,
    },
    /// Rename a credit unit and change its credit weight.
    Edit {
        #[command(flatten)]
        at: UnitArgs,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
        /// New credit weight (kept when missing or not a number)
        #[arg(short, long = "coef", value_name = "COEF")]
        coefficient: Option<String>,
    },
    /// Remove a credit unit with all its courses.
    Rm {
        #[command(flatten)]
        at: UnitArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course to a credit unit.
    Add {
        #[command(flatten)]
        unit: UnitArgs,
        /// Course name
        #[arg(value_name = "NAME")]
        name: String,
        /// Credit weight (defaults to 1 when missing or not a number)
        #[arg(short, long = "coef", value_name = "COEF")]
        coefficient: Option<String>,
    },
    /// Rename a course and change its credit weight.
    Edit {
        #[command(flatten)]
        at: CourseArgs,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
        /// New credit weight (kept when missing or not a number)
        #[arg(short, long = "coef", value_name = "COEF")]
        coefficient: Option<String>,
    },
    /// Remove a course with all its assessments.
    Rm {
        #[command(flatten)]
        at: CourseArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum AssessmentSubcommand {
    /// Add an assessment to a course.
    ///
    /// Fails if the course's weights would add up to more than 100%.
    Add {
        #[command(flatten)]
        course: CourseArgs,
        /// Assessment name
        #[arg(value_name = "NAME")]
        name: String,
        /// Score out of 20
        #[arg(value_name = "SCORE")]
        score: f64,
        /// Weight in percent of the course grade
        #[arg(value_name = "WEIGHT")]
        weight: f64,
    },
    /// Replace an assessment's name, score and weight.
    Edit {
        #[command(flatten)]
        at: AssessmentArgs,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
        /// New score out of 20
        #[arg(value_name = "SCORE")]
        score: f64,
        /// New weight in percent
        #[arg(value_name = "WEIGHT")]
        weight: f64,
    },
    /// Remove an assessment, freeing its weight.
    Rm {
        #[command(flatten)]
        at: AssessmentArgs,
    },
}

/// Theme change requested on the command line
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum ThemeMode {
    /// Switch between light and dark
    #[default]
    Toggle,
    /// Dark theme
    Dark,
    /// Light theme
    Light,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the gradebook with all averages.
    Show,
    /// Manage credit units.
    Unit {
        #[command(subcommand)]
        subcommand: UnitSubcommand,
    },
    /// Manage courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Manage assessments.
    Assessment {
        #[command(subcommand)]
        subcommand: AssessmentSubcommand,
    },
    /// Change the display theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeMode::Toggle)]
        mode: ThemeMode,
    },
    /// Generate a transcript.
    ///
    /// Writes to the configured reports directory unless --output is given.
    Report {
        /// Output file path (optional; defaults to `transcript[_LAST][_FIRST].EXT`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, or pdf
        #[arg(short, long, value_name = "FORMAT", default_value = "pdf")]
        format: String,

        /// Browser executable used to print PDF transcripts
        #[arg(long, value_name = "PATH")]
        pdf_converter: Option<String>,

        /// Student family name
        #[arg(long, value_name = "NAME")]
        last_name: Option<String>,

        /// Student given name
        #[arg(long, value_name = "NAME")]
        first_name: Option<String>,

        /// University or school
        #[arg(long, value_name = "NAME")]
        institution: Option<String>,

        /// Study level
        #[arg(long, value_name = "LEVEL")]
        level: Option<String>,

        /// Academic year
        #[arg(long = "year", value_name = "YEAR")]
        academic_year: Option<String>,

        /// Field of study
        #[arg(long, value_name = "NAME")]
        specialty: Option<String>,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradetrack",
    about = "Track grades and weighted averages by term, credit unit and course",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this gradebook file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let lossy = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(lossy),
            verbose: self.config_verbose,
            data_file: self.data_file.as_ref().map(lossy),
            reports_dir: self.reports_dir.as_ref().map(lossy),
        }
    }
}
