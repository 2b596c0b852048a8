use thiserror::Error;

/// Failure to turn input props into an inline payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error(
        "input props are over {threshold_kb}KB ({actual_kb}KB) in size; this is not currently supported"
    )]
    TooLarge { threshold_kb: usize, actual_kb: usize },
    #[error("failed to serialize input props: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failure anywhere between sending the payload and decoding the envelope body.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("lambda invocation failed: {0}")]
    Transport(String),
    #[error("lambda function raised {kind}: {payload}")]
    FunctionError { kind: String, payload: String },
    #[error("lambda invocation returned no payload")]
    MissingPayload,
    #[error("lambda response is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("lambda response envelope is malformed: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),
    #[error("render function responded with status {status_code}: {body}")]
    Status { status_code: i64, body: String },
    #[error("lambda response body is malformed: {0}")]
    MalformedBody(#[source] serde_json::Error),
}

impl InvokeError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Invoke(#[from] InvokeError),
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the remote function could not be invoked or did not succeed.
    pub fn is_remote_invocation_failure(&self) -> bool {
        matches!(self, Self::Invoke(_))
    }

    pub fn is_payload_too_large(&self) -> bool {
        matches!(self, Self::Payload(PayloadError::TooLarge { .. }))
    }
}
