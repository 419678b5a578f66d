//! Analyze command: score text for AI-writing patterns.

use std::time::Duration;

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use robot_radar_core::config::Config;
use robot_radar_core::{DetectionReport, Detector, Recommendation, Sample, Verdict, markdown};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// File to analyze. Omit or pass `-` to read stdin.
    #[arg(conflicts_with = "sample")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze a built-in sample instead of a file.
    #[arg(long, value_enum)]
    pub sample: Option<Sample>,

    /// Fail when the score is above this value.
    #[arg(long)]
    pub max_score: Option<i32>,

    /// Fewest words worth scoring (overrides config).
    #[arg(long)]
    pub min_words: Option<usize>,

    /// Strip markdown before scoring (implied for `.md` files).
    #[arg(long)]
    pub markdown: bool,
}

/// Where the text came from, for messages.
enum Source {
    File(Utf8PathBuf),
    Stdin,
    Sample(Sample),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{path}"),
            Self::Stdin => f.write_str("<stdin>"),
            Self::Sample(sample) => write!(f, "sample:{sample}"),
        }
    }
}

#[derive(Serialize)]
struct TooShort {
    too_short: bool,
    word_count: usize,
    min_words: usize,
}

/// Score a file, stdin, or a built-in sample.
#[instrument(name = "cmd_analyze", skip_all)]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, sample = ?args.sample, "executing analyze command");

    let (source, content) = match (args.sample, args.file) {
        (Some(sample), _) => (Source::Sample(sample), sample.text().to_string()),
        (None, Some(path)) if path.as_str() != "-" => {
            let content = super::read_input_file(&path, max_input)?;
            (Source::File(path), content)
        }
        (None, _) => (
            Source::Stdin,
            super::read_input_stream(std::io::stdin().lock(), max_input)?,
        ),
    };

    let strip_md = args.markdown
        || matches!(source, Source::File(ref path) if path.extension() == Some("md"));
    let text = if strip_md {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let mut policy = config.scoring.clone();
    if let Some(min_words) = args.min_words {
        policy.min_words = min_words;
    }
    let min_words = policy.min_words;
    let detector = Detector::new(policy);

    let spinner = (!global_json).then(scanning_spinner).transpose()?;
    let report = detector.analyze(&text);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let Some(report) = report else {
        let word_count = robot_radar_core::text::word_count(&text);
        if global_json {
            let too_short = TooShort {
                too_short: true,
                word_count,
                min_words,
            };
            println!("{}", serde_json::to_string_pretty(&too_short)?);
        }
        if word_count >= min_words {
            bail!(
                "Text has no complete sentences to score. {source} has {word_count} words \
                 but no sentence of two or more characters."
            );
        }
        bail!(
            "Text is too short. Please provide at least {min_words} words. {source} has {word_count}."
        );
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&source, &report);
    }

    if let Some(max) = args.max_score.or(config.max_score) {
        if report.score > max {
            bail!(
                "{source} scores {} (max: {max}). Vary sentence length and vocabulary.",
                report.score
            );
        }
        if !global_json {
            println!(
                "\n{} {source} scores {} (max: {max})",
                "PASS:".green().bold(),
                report.score
            );
        }
    }

    Ok(())
}

fn scanning_spinner() -> anyhow::Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Scanning patterns...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}

const fn verdict_icon(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::LikelyAi => "🚨",
        Verdict::Suspicious => "⚠️",
        Verdict::LikelyHuman => "✅",
    }
}

fn print_report(source: &Source, report: &DetectionReport) {
    let score = format!("{}/100", report.score);
    let label = report.verdict.label();
    let (score, label) = match report.verdict {
        Verdict::LikelyAi => (score.red().bold().to_string(), label.red().to_string()),
        Verdict::Suspicious => (score.yellow().bold().to_string(), label.yellow().to_string()),
        Verdict::LikelyHuman => (score.green().bold().to_string(), label.green().to_string()),
    };

    println!("{}", source.bold());
    println!("\n  {} {score}  {label}", "AI Probability:".cyan());
    println!("\n  {:<12} {}", "Burstiness:".dimmed(), report.sentence_variance);
    println!("  {:<12} {}", "Grade Level:".dimmed(), report.flesch_grade);
    println!("  {:<12} {}%", "Complexity:".dimmed(), report.complex_word_ratio);
    println!("  {:<12} {}", "Word Count:".dimmed(), report.word_count);

    let recommendation = Recommendation::from_score(report.score);
    let headline = format!("{} {}", verdict_icon(report.verdict), recommendation.headline());
    match recommendation {
        Recommendation::HighAiPatterns => println!("\n  {}", headline.red().bold()),
        Recommendation::NaturalWriting => println!("\n  {}", headline.green().bold()),
    }
    println!("  {}", recommendation.advice());
}
