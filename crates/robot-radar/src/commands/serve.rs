//! Serve command: run the MCP server over stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use robot_radar_core::config::Config;
use tracing::{info, instrument};

use crate::server::RadarServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve detector tools until the client disconnects.
///
/// stdout carries the protocol; logs go to stderr and the log file only.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(max_input = ?max_input, "starting MCP server on stdio");

    let server = RadarServer::new(config.scoring, max_input);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
