//! Synchronous invocation of the render function and envelope decoding.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_lambda::config::{Credentials, Region};
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ClientConfig, CredentialSource};
use crate::error::InvokeError;

const CREDENTIALS_PROVIDER_NAME: &str = "remotion-lambda";
const SUCCESS_STATUS: i64 = 200;

/// Transport that runs a named function and returns its raw response payload.
#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Vec<u8>, InvokeError>;
}

/// [`FunctionInvoker`] backed by the AWS Lambda `Invoke` API.
#[derive(Clone, Debug)]
pub struct LambdaInvoker {
    inner: aws_sdk_lambda::Client,
}

impl LambdaInvoker {
    pub fn new(inner: aws_sdk_lambda::Client) -> Self {
        Self { inner }
    }

    /// Resolve credentials once and build the Lambda client for `config.region`.
    pub async fn connect(config: &ClientConfig) -> Self {
        let region = Region::new(config.region.clone());
        let sdk_config = load_sdk_config(&config.credentials, region.clone()).await;

        let mut builder = aws_sdk_lambda::config::Builder::from(&sdk_config).region(region);
        if let Some(endpoint_url) = config.endpoint_url.as_ref() {
            builder = builder.endpoint_url(endpoint_url);
        }

        Self::new(aws_sdk_lambda::Client::from_conf(builder.build()))
    }
}

async fn load_sdk_config(credentials: &CredentialSource, region: Region) -> SdkConfig {
    match credentials {
        CredentialSource::Session(session) => session.clone(),
        CredentialSource::Keys {
            access_key_id,
            secret_access_key,
        } => {
            aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .credentials_provider(Credentials::new(
                    access_key_id.clone(),
                    secret_access_key.clone(),
                    None,
                    None,
                    CREDENTIALS_PROVIDER_NAME,
                ))
                .load()
                .await
        }
        CredentialSource::Ambient => {
            aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .load()
                .await
        }
    }
}

#[async_trait]
impl FunctionInvoker for LambdaInvoker {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Vec<u8>, InvokeError> {
        let output = self
            .inner
            .invoke()
            .function_name(function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|err| InvokeError::transport(DisplayErrorContext(&err).to_string()))?;

        debug!(
            function_name,
            status_code = output.status_code(),
            executed_version = output.executed_version(),
            "lambda invocation returned"
        );

        if let Some(kind) = output.function_error() {
            let payload = output
                .payload()
                .map(|blob| String::from_utf8_lossy(blob.as_ref()).into_owned())
                .unwrap_or_default();
            return Err(InvokeError::FunctionError {
                kind: kind.to_string(),
                payload,
            });
        }

        output
            .payload
            .map(Blob::into_inner)
            .ok_or(InvokeError::MissingPayload)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseEnvelope {
    status_code: i64,
    #[serde(default)]
    body: Value,
}

/// Unwrap `{statusCode, body}` and parse the JSON-encoded `body`.
pub fn decode_envelope(raw: Vec<u8>) -> Result<Value, InvokeError> {
    let text = String::from_utf8(raw)?;
    let envelope: ResponseEnvelope =
        serde_json::from_str(&text).map_err(InvokeError::MalformedEnvelope)?;

    if envelope.status_code != SUCCESS_STATUS {
        let body = match envelope.body {
            Value::String(body) => body,
            other => other.to_string(),
        };
        return Err(InvokeError::Status {
            status_code: envelope.status_code,
            body,
        });
    }

    match envelope.body {
        Value::String(body) => serde_json::from_str(&body).map_err(InvokeError::MalformedBody),
        other => Ok(other),
    }
}
