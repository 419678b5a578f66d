//! Info command: package metadata and effective configuration.

use clap::Args;
use owo_colors::OwoColorize;
use robot_radar_core::ScoringPolicy;
use robot_radar_core::config::{Config, ConfigSources};
use robot_radar_core::readability::SYLLABLE_HEURISTIC_VERSION;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_score: Option<i32>,
    /// `None` when the limit is disabled.
    max_input_bytes: Option<usize>,
    syllable_heuristic: &'static str,
    scoring: ScoringPolicy,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_score: config.max_score,
            max_input_bytes: config.input_limit(),
            syllable_heuristic: SYLLABLE_HEURISTIC_VERSION,
            scoring: config.scoring.clone(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                "Homepage".dimmed(),
                full_info.package.homepage.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }

        match full_info.config.max_input_bytes {
            Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
            None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
        }
        print_opt("Max score", &full_info.config.max_score);

        let policy = &full_info.config.scoring;
        println!();
        println!("{}", "Scoring Policy".bold().underline());
        println!("{}: {}", "Min words".dimmed(), policy.min_words);
        println!("{}: {}", "Base score".dimmed(), policy.base_score);
        println!(
            "{}: +{} below {:.1}, +{} below {:.1}",
            "Rhythm bonus".dimmed(),
            policy.uniform_rhythm_bonus,
            policy.uniform_rhythm_below,
            policy.steady_rhythm_bonus,
            policy.steady_rhythm_below,
        );
        println!(
            "{}: +{} for grade {:.1}-{:.1}",
            "Grade bonus".dimmed(),
            policy.grade_band_bonus,
            policy.grade_band_min,
            policy.grade_band_max,
        );
        println!(
            "{}: +{} below {:.0}% words over {} chars",
            "Vocabulary bonus".dimmed(),
            policy.plain_vocabulary_bonus,
            policy.plain_vocabulary_below * 100.0,
            policy.complex_word_chars,
        );
        println!(
            "{}: {}-{}",
            "Score range".dimmed(),
            policy.min_score,
            policy.max_score
        );
        println!(
            "{}: {}",
            "Syllable heuristic".dimmed(),
            full_info.config.syllable_heuristic
        );
    }

    Ok(())
}

/// Print an optional numeric value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
