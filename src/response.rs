//! Mapping of decoded envelope bodies onto typed results.

use remotion_lambda_types::{RenderProgress, RenderResponse, RenderStillResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::InvokeError;

pub fn to_render_response(body: Value) -> Result<RenderResponse, InvokeError> {
    decode_body(body)
}

pub fn to_render_still_response(body: Value) -> Result<RenderStillResponse, InvokeError> {
    decode_body(body)
}

pub fn to_render_progress(body: Value) -> Result<RenderProgress, InvokeError> {
    decode_body(body)
}

fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, InvokeError> {
    serde_json::from_value(body).map_err(InvokeError::MalformedBody)
}
