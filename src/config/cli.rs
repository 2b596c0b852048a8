//! Command-line surface of the `remotion-lambda` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};
use remotion_lambda_types::{Codec, Privacy, StillImageFormat};
use serde::de::DeserializeOwned;

/// Command-line arguments for the `remotion-lambda` binary.
#[derive(Debug, Parser)]
#[command(
    name = "remotion-lambda",
    version,
    about = "Render Remotion compositions on AWS Lambda"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "REMOTION_CONFIG_FILE", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: LambdaOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Start a video or audio render.
    Render(RenderArgs),
    /// Render a single frame to an image.
    Still(StillArgs),
    /// Fetch the progress of a render.
    Progress(ProgressArgs),
}

/// Overrides for the `lambda` and `logging` configuration sections.
///
/// Credentials come from the config file or environment only.
#[derive(Debug, Args, Default, Clone)]
pub struct LambdaOverrides {
    /// Override the AWS region of the render function.
    #[arg(long = "region", value_name = "REGION", global = true)]
    pub region: Option<String>,

    /// Override the URL of the deployed Remotion bundle.
    #[arg(long = "serve-url", value_name = "URL", global = true)]
    pub serve_url: Option<String>,

    /// Override the name of the render function.
    #[arg(long = "function-name", value_name = "NAME", global = true)]
    pub function_name: Option<String>,

    /// Override the Lambda endpoint URL.
    #[arg(long = "endpoint-url", value_name = "URL", global = true)]
    pub endpoint_url: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

/// Input props given inline or read from a JSON file.
#[derive(Debug, Args, Default, Clone)]
pub struct PropsArgs {
    /// Input props as a JSON document.
    #[arg(long = "props", value_name = "JSON", conflicts_with = "props_file")]
    pub props: Option<String>,

    /// Path to a JSON file holding the input props.
    #[arg(long = "props-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub props_file: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Composition id to render.
    #[arg(long)]
    pub composition: String,

    #[command(flatten)]
    pub props: PropsArgs,

    #[arg(long, value_parser = parse_wire_value::<Codec>, default_value = "h264")]
    pub codec: Codec,

    #[arg(long, value_parser = parse_wire_value::<Privacy>)]
    pub privacy: Option<Privacy>,

    /// Name of the output file inside the bucket.
    #[arg(long)]
    pub out_name: Option<String>,

    /// Bucket to render into; the function picks its own when omitted.
    #[arg(long)]
    pub bucket_name: Option<String>,

    #[arg(long)]
    pub frames_per_lambda: Option<u32>,
}

#[derive(Debug, Args, Clone)]
pub struct StillArgs {
    /// Composition id to render.
    #[arg(long)]
    pub composition: String,

    #[command(flatten)]
    pub props: PropsArgs,

    /// Frame number to capture.
    #[arg(long, default_value_t = 0)]
    pub frame: u64,

    #[arg(long, value_parser = parse_wire_value::<StillImageFormat>, default_value = "png")]
    pub image_format: StillImageFormat,

    #[arg(long, value_parser = parse_wire_value::<Privacy>)]
    pub privacy: Option<Privacy>,

    #[arg(long)]
    pub out_name: Option<String>,

    #[arg(long)]
    pub bucket_name: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ProgressArgs {
    #[arg(long)]
    pub render_id: String,

    #[arg(long)]
    pub bucket_name: String,
}

/// Parse a CLI value using the same spelling the render function expects on the wire.
fn parse_wire_value<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .map_err(|err| format!("unsupported value `{raw}`: {err}"))
}
