//! Assembly of the JSON payloads sent to the render function.
//!
//! Builders never touch the caller's parameters; they return a new request with
//! the client-level fields filled in from [`ClientConfig`].

use remotion_lambda_types::{
    LambdaRoutine, RenderMediaRequest, RenderParams, RenderProgressRequest, RenderStillParams,
    RenderStillRequest,
};
use serde::Serialize;

use crate::client::ClientConfig;
use crate::error::{Error, PayloadError};
use crate::payload::{OperationKind, serialize_input_props};

pub fn build_render_request(
    params: &RenderParams,
    config: &ClientConfig,
) -> Result<RenderMediaRequest, PayloadError> {
    let input_props = serialize_input_props(&params.input_props, OperationKind::VideoOrAudio)?;

    Ok(RenderMediaRequest {
        routine: LambdaRoutine::Start,
        composition: params.composition.clone(),
        serve_url: config.serve_url.clone(),
        region: config.region.clone(),
        function_name: config.function_name.clone(),
        input_props,
        options: params.options.clone(),
    })
}

pub fn build_still_request(
    params: &RenderStillParams,
    config: &ClientConfig,
) -> Result<RenderStillRequest, PayloadError> {
    let input_props = serialize_input_props(&params.input_props, OperationKind::Still)?;

    Ok(RenderStillRequest {
        routine: LambdaRoutine::Still,
        composition: params.composition.clone(),
        serve_url: config.serve_url.clone(),
        region: config.region.clone(),
        function_name: config.function_name.clone(),
        input_props,
        options: params.options.clone(),
    })
}

pub fn build_progress_request(
    render_id: &str,
    bucket_name: &str,
    config: &ClientConfig,
) -> RenderProgressRequest {
    RenderProgressRequest {
        routine: LambdaRoutine::Status,
        render_id: render_id.to_string(),
        bucket_name: bucket_name.to_string(),
        function_name: config.function_name.clone(),
        region: config.region.clone(),
    }
}

/// Flat JSON projection of a built request.
pub fn to_payload<T: Serialize>(request: &T) -> Result<String, Error> {
    serde_json::to_string(request).map_err(Error::Encode)
}
