//! Command-line interface entry point for `gradetrack`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use grade_tracker::config::Config;
use grade_tracker::core::session::Session;
use grade_tracker::core::store::JsonFileStore;
use grade_tracker::info;
use grade_tracker::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins, then config logging.level, then warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let store = JsonFileStore::new(&config.paths.data_file);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Show => {
            let session = Session::open(store);
            print!("{}", commands::show::render(session.gradebook()));
        }
        Command::Unit { subcommand } => {
            let mut session = commands::open_session(store);
            commands::edit::run_unit(&mut session, subcommand);
        }
        Command::Course { subcommand } => {
            let mut session = commands::open_session(store);
            commands::edit::run_course(&mut session, subcommand);
        }
        Command::Assessment { subcommand } => {
            let mut session = commands::open_session(store);
            commands::edit::run_assessment(&mut session, subcommand);
        }
        Command::Theme { mode } => {
            let mut session = commands::open_session(store);
            commands::theme::run(&mut session, mode);
        }
        Command::Report {
            output,
            format,
            pdf_converter,
            last_name,
            first_name,
            institution,
            level,
            academic_year,
            specialty,
        } => {
            let identity = grade_tracker::core::report::StudentIdentity {
                last_name,
                first_name,
                institution,
                level,
                academic_year,
                specialty,
            };
            let session = Session::open(store);
            commands::report::run(
                session.gradebook(),
                &identity,
                output.as_deref(),
                &format,
                pdf_converter.as_deref(),
                &config,
            );
        }
    }
}
