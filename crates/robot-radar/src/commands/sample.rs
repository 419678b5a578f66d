//! Sample command: print a built-in sample text.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use robot_radar_core::Sample;

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Which sample to print.
    #[arg(value_enum)]
    pub name: Sample,
}

#[derive(Serialize)]
struct SampleOutput {
    name: &'static str,
    word_count: usize,
    text: &'static str,
}

/// Print a sample, e.g. to pipe into `analyze`.
#[instrument(name = "cmd_sample", skip_all, fields(sample = %args.name))]
pub fn cmd_sample(args: SampleArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(sample = %args.name, "executing sample command");

    let text = args.name.text();
    if global_json {
        let output = SampleOutput {
            name: args.name.name(),
            word_count: robot_radar_core::text::word_count(text),
            text,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{text}");
    }
    Ok(())
}
