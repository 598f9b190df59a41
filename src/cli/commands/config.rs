//! Config command handler

use crate::args::ConfigSubcommand;
use grade_tracker::config::Config;
use grade_tracker::{error, info};
use std::io::{self, BufRead, Write};

/// Keys accepted by `config get|set|unset`
const KEYS: [&str; 5] = ["level", "file", "verbose", "data_file", "reports_dir"];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => print_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => print_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            update(config, &key, |c| c.set(&key, &value), &format!("Set {key} = {value}"));
        }
        Some(ConfigSubcommand::Unset { key }) => {
            update(
                config,
                &key,
                |c| c.unset(&key, defaults),
                &format!("Reset {key} to default"),
            );
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn print_all(config: &Config) {
    println!("\n=== Configuration ===");
    println!("({})\n", Config::get_config_file_path().display());
    print!("{config}");
}

fn print_key(config: &Config, key: &str) {
    if let Some(value) = config.get(key) {
        println!("{value}");
    } else {
        eprintln!("✗ Unknown config key: '{key}'");
        eprintln!("  Known keys: {}", KEYS.join(", "));
        std::process::exit(1);
    }
}

/// Apply one change to the config and persist it, exiting on failure
fn update(
    config: &mut Config,
    key: &str,
    change: impl FnOnce(&mut Config) -> Result<(), String>,
    done: &str,
) {
    if let Err(e) = change(config) {
        eprintln!("✗ {e}");
        if config.get(key).is_none() {
            eprintln!("  Known keys: {}", KEYS.join(", "));
        }
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }

    info!("Config updated: {done}");
    println!("✓ {done}");
}

/// Whether a confirmation answer means yes
fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn reset(input: &mut impl BufRead) {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if !confirmed(&response) {
        println!("✗ Reset cancelled");
        return;
    }
    if let Err(e) = Config::reset() {
        eprintln!("✗ Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_accepts_y_and_yes() {
        assert!(confirmed("y\n"));
        assert!(confirmed(" YES "));
        assert!(!confirmed("n"));
        assert!(!confirmed(""));
    }

    #[test]
    fn every_listed_key_is_readable() {
        let config = Config::from_defaults();
        for key in KEYS {
            assert!(config.get(key).is_some(), "key {key} not readable");
        }
    }
}
