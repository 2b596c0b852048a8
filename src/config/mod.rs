//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::str::FromStr;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::client::{ClientConfig, CredentialSource};

mod cli;

pub use cli::{CliArgs, Command, LambdaOverrides, ProgressArgs, PropsArgs, RenderArgs, StillArgs};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "remotion";
const ENV_PREFIX: &str = "REMOTION";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub lambda: LambdaSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct LambdaSettings {
    pub region: String,
    pub serve_url: String,
    pub function_name: String,
    pub credentials: CredentialSource,
    pub endpoint_url: Option<String>,
}

impl LambdaSettings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            region: self.region.clone(),
            serve_url: self.serve_url.clone(),
            function_name: self.function_name.clone(),
            credentials: self.credentials.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    lambda: RawLambdaSettings,
    logging: RawLoggingSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &LambdaOverrides) {
        if let Some(region) = overrides.region.as_ref() {
            self.lambda.region = Some(region.clone());
        }
        if let Some(serve_url) = overrides.serve_url.as_ref() {
            self.lambda.serve_url = Some(serve_url.clone());
        }
        if let Some(function_name) = overrides.function_name.as_ref() {
            self.lambda.function_name = Some(function_name.clone());
        }
        if let Some(endpoint_url) = overrides.endpoint_url.as_ref() {
            self.lambda.endpoint_url = Some(endpoint_url.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { lambda, logging } = raw;

        let lambda = build_lambda_settings(lambda)?;
        let logging = build_logging_settings(logging)?;

        Ok(Self { lambda, logging })
    }
}

fn build_lambda_settings(lambda: RawLambdaSettings) -> Result<LambdaSettings, LoadError> {
    let region = required(lambda.region, "lambda.region")?;
    let function_name = required(lambda.function_name, "lambda.function_name")?;

    let serve_url = required(lambda.serve_url, "lambda.serve_url")?;
    parse_url(&serve_url, "lambda.serve_url")?;

    let endpoint_url = non_blank(lambda.endpoint_url);
    if let Some(endpoint_url) = endpoint_url.as_deref() {
        parse_url(endpoint_url, "lambda.endpoint_url")?;
    }

    let credentials = CredentialSource::resolve(
        None,
        non_blank(lambda.access_key_id),
        non_blank(lambda.secret_access_key),
    );

    Ok(LambdaSettings {
        region,
        serve_url,
        function_name,
        credentials,
        endpoint_url,
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLambdaSettings {
    region: Option<String>,
    serve_url: Option<String>,
    function_name: Option<String>,
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn required(value: Option<String>, key: &'static str) -> Result<String, LoadError> {
    non_blank(value).ok_or_else(|| LoadError::invalid(key, "must be set"))
}

fn parse_url(value: &str, key: &'static str) -> Result<Url, LoadError> {
    Url::parse(value).map_err(|err| LoadError::invalid(key, format!("invalid URL: {err}")))
}
