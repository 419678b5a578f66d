//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the detector to AI assistants over stdio. The server is a thin
//! presentation layer: every `#[tool]` method delegates to
//! `robot_radar_core` and serializes the result as JSON text.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use robot_radar_core::{Detector, Recommendation, Sample, ScoringPolicy, Verdict, markdown, text};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `detect_ai_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectAiTextParams {
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown formatting before scoring.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Fewest words worth scoring (default 30).
    pub min_words: Option<usize>,
}

/// Parameters for the `get_sample` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetSampleParams {
    /// Sample name: "ai" or "human".
    pub name: String,
}

/// Parameters for the `classify_score` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyScoreParams {
    /// A detection score, normally 5-98.
    pub score: i32,
}

/// MCP server exposing the detector.
#[derive(Clone)]
pub struct RadarServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    policy: ScoringPolicy,
    max_input: Option<usize>,
}

impl Default for RadarServer {
    fn default() -> Self {
        Self::new(ScoringPolicy::default(), None)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl RadarServer {
    /// Create a server scoring with `policy` and rejecting text over `max_input` bytes.
    pub fn new(policy: ScoringPolicy, max_input: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            policy,
            max_input,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text for AI-writing patterns.
    #[tool(
        description = "Estimate how likely text is AI-generated from sentence-length burstiness, Flesch-Kincaid grade, and long-word ratio. Returns score (5-98), verdict, and metrics, or too_short when under the word minimum."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn detect_ai_text(
        &self,
        Parameters(params): Parameters<DetectAiTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "detect_ai_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        if let Some(max) = self.max_input
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.text.len()
                ),
                None,
            ));
        }

        let prose = if params.strip_markdown {
            markdown::strip_to_prose(&params.text)
        } else {
            params.text
        };

        let mut policy = self.policy.clone();
        if let Some(min_words) = params.min_words {
            policy.min_words = min_words;
        }
        let min_words = policy.min_words;

        let json = match Detector::new(policy).analyze(&prose) {
            Some(report) => {
                tracing::info!(
                    tool = "detect_ai_text",
                    score = report.score,
                    "MCP tool completed"
                );
                to_json(&report)?
            }
            None => {
                let word_count = text::word_count(&prose);
                tracing::info!(
                    tool = "detect_ai_text",
                    word_count,
                    "text too short to score"
                );
                to_json(&serde_json::json!({
                    "too_short": true,
                    "word_count": word_count,
                    "min_words": min_words,
                }))?
            }
        };
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Fetch a built-in sample text.
    #[tool(description = "Return a built-in sample text by name: \"ai\" or \"human\".")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", name = %params.name))]
    fn get_sample(
        &self,
        Parameters(params): Parameters<GetSampleParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_sample", name = %params.name, "executing MCP tool");

        let sample: Sample = params.name.parse().map_err(|e: robot_radar_core::SampleError| {
            McpError::invalid_params(e.to_string(), None)
        })?;

        let json = to_json(&serde_json::json!({
            "name": sample.name(),
            "word_count": text::word_count(sample.text()),
            "text": sample.text(),
        }))?;

        tracing::info!(tool = "get_sample", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Map a score to its verdict and recommendation.
    #[tool(
        description = "Classify a detection score into a verdict tier (likely-ai above 70, suspicious 41-70, likely-human 40 and below) and a recommendation."
    )]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn classify_score(
        &self,
        Parameters(params): Parameters<ClassifyScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "classify_score", score = params.score, "executing MCP tool");

        let verdict = Verdict::from_score(params.score);
        let recommendation = Recommendation::from_score(params.score);
        let json = to_json(&serde_json::json!({
            "score": params.score,
            "verdict": verdict,
            "label": verdict.label(),
            "recommendation": recommendation,
            "headline": recommendation.headline(),
            "advice": recommendation.advice(),
        }))?;

        tracing::info!(
            tool = "classify_score",
            verdict = %verdict.as_str(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for RadarServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call detect_ai_text with at least {} words of prose to get an AI-likelihood score.",
                env!("CARGO_PKG_NAME"),
                self.policy.min_words,
            )),
        }
    }
}
