use std::fmt;
use std::sync::Arc;

use aws_config::SdkConfig;
use remotion_lambda_types::{
    RenderParams, RenderProgress, RenderResponse, RenderStillParams, RenderStillResponse,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::error::{Error, InvokeError};
use crate::invoke::{FunctionInvoker, LambdaInvoker, decode_envelope};
use crate::request::{
    build_progress_request, build_render_request, build_still_request, to_payload,
};
use crate::response::{to_render_progress, to_render_response, to_render_still_response};

/// Where the Lambda client gets its AWS credentials.
#[derive(Clone)]
pub enum CredentialSource {
    /// A pre-loaded SDK configuration; only its region is overridden.
    Session(SdkConfig),
    Keys {
        access_key_id: String,
        secret_access_key: String,
    },
    /// Default provider chain: environment, profile, container or instance metadata.
    Ambient,
}

impl CredentialSource {
    /// Pick a source from optional inputs: session, then a complete key pair, then ambient.
    pub fn resolve(
        session: Option<SdkConfig>,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Self {
        if let Some(session) = session {
            return Self::Session(session);
        }
        match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key))
                if !access_key_id.is_empty() && !secret_access_key.is_empty() =>
            {
                Self::Keys {
                    access_key_id,
                    secret_access_key,
                }
            }
            _ => Self::Ambient,
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(_) => f.write_str("Session(..)"),
            Self::Keys { access_key_id, .. } => f
                .debug_struct("Keys")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .finish(),
            Self::Ambient => f.write_str("Ambient"),
        }
    }
}

/// Settings shared by every request a [`RemotionClient`] sends.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub region: String,
    /// URL of the deployed Remotion bundle.
    pub serve_url: String,
    pub function_name: String,
    pub credentials: CredentialSource,
    /// Overrides the regional Lambda endpoint, e.g. for a local emulator.
    pub endpoint_url: Option<String>,
}

impl ClientConfig {
    pub fn new(
        region: impl Into<String>,
        serve_url: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            serve_url: serve_url.into(),
            function_name: function_name.into(),
            credentials: CredentialSource::Ambient,
            endpoint_url: None,
        }
    }

    pub fn with_credentials(mut self, credentials: CredentialSource) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    fn validate(&self) -> Result<(), Error> {
        for (key, value) in [
            ("region", &self.region),
            ("serve_url", &self.serve_url),
            ("function_name", &self.function_name),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config(format!("`{key}` must not be empty")));
            }
        }
        Ok(())
    }
}

/// Client for a Remotion render function deployed on AWS Lambda.
#[derive(Clone)]
pub struct RemotionClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    invoker: Arc<dyn FunctionInvoker>,
}

impl RemotionClient {
    /// Build a client that talks to AWS Lambda with the configured credentials.
    pub async fn connect(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let invoker = LambdaInvoker::connect(&config).await;
        Self::with_invoker(config, Arc::new(invoker))
    }

    /// Build a client over a custom transport.
    pub fn with_invoker(
        config: ClientConfig,
        invoker: Arc<dyn FunctionInvoker>,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(ClientInner { config, invoker }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Start a video or audio render and return its render id and bucket.
    #[instrument(
        skip_all,
        fields(
            function_name = %self.inner.config.function_name,
            composition = %params.composition,
            codec = params.options.codec.as_str(),
        )
    )]
    pub async fn render_media_on_lambda(
        &self,
        params: &RenderParams,
    ) -> Result<RenderResponse, Error> {
        let request = build_render_request(params, &self.inner.config)?;
        let response = self.call(&request, to_render_response).await?;
        info!(
            render_id = %response.render_id,
            bucket_name = %response.bucket_name,
            "render started"
        );
        Ok(response)
    }

    /// Render a single frame; the image is ready when this returns.
    #[instrument(
        skip_all,
        fields(
            function_name = %self.inner.config.function_name,
            composition = %params.composition,
            frame = params.options.frame,
        )
    )]
    pub async fn render_still_on_lambda(
        &self,
        params: &RenderStillParams,
    ) -> Result<RenderStillResponse, Error> {
        let request = build_still_request(params, &self.inner.config)?;
        let response = self.call(&request, to_render_still_response).await?;
        info!(
            render_id = %response.render_id,
            size_in_bytes = response.size_in_bytes,
            "still rendered"
        );
        Ok(response)
    }

    #[instrument(
        skip(self),
        fields(function_name = %self.inner.config.function_name)
    )]
    pub async fn get_render_progress(
        &self,
        render_id: &str,
        bucket_name: &str,
    ) -> Result<RenderProgress, Error> {
        let request = build_progress_request(render_id, bucket_name, &self.inner.config);
        self.call(&request, to_render_progress).await
    }

    /// Send `request`, unwrap the envelope and map its body with `decode`.
    async fn call<T, R>(
        &self,
        request: &T,
        decode: fn(Value) -> Result<R, InvokeError>,
    ) -> Result<R, Error>
    where
        T: Serialize,
    {
        let payload = to_payload(request)?;
        let function_name = self.inner.config.function_name.as_str();

        let raw = self
            .inner
            .invoker
            .invoke(function_name, payload.into_bytes())
            .await
            .inspect_err(|err| warn!(error = %err, "lambda invocation failed"))?;

        let mapped = decode_envelope(raw)
            .and_then(decode)
            .inspect_err(|err| warn!(error = %err, "lambda response rejected"))?;
        Ok(mapped)
    }
}
