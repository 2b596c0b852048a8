//! Client SDK for rendering Remotion compositions on AWS Lambda.
//!
//! A [`RemotionClient`] serializes render parameters, invokes the deployed
//! render function synchronously and decodes its `{statusCode, body}`
//! envelope into typed results.
//!
//! ```no_run
//! use remotion_lambda::{ClientConfig, RemotionClient, RenderParams};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), remotion_lambda::Error> {
//! let config = ClientConfig::new(
//!     "us-east-1",
//!     "https://remotionlambda-abc.s3.us-east-1.amazonaws.com/sites/demo/index.html",
//!     "remotion-render-4-0-0-mem2048mb-disk2048mb-120sec",
//! );
//! let client = RemotionClient::connect(config).await?;
//!
//! let params = RenderParams::new("Intro").with_input_props(json!({"title": "Hello"}));
//! let started = client.render_media_on_lambda(&params).await?;
//! let progress = client
//!     .get_render_progress(&started.render_id, &started.bucket_name)
//!     .await?;
//! println!("{:.0}%", progress.overall_progress * 100.0);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod invoke;
pub mod payload;
pub mod request;
pub mod response;
pub mod telemetry;

pub use client::{ClientConfig, CredentialSource, RemotionClient};
pub use error::{Error, InvokeError, PayloadError};
pub use invoke::{FunctionInvoker, LambdaInvoker};
pub use payload::{OperationKind, serialize_input_props};
pub use remotion_lambda_types::*;
