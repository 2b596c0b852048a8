//! Fully-populated payloads sent to the render function.

use serde::{Deserialize, Serialize};

use crate::params::{RenderOptions, StillOptions};

/// Entry point of the render function selected by the request's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LambdaRoutine {
    Start,
    Still,
    Status,
}

/// Input props as they travel to the function.
///
/// Only inline payloads exist today; the tag leaves room for props stored out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SerializedInputProps {
    Payload { payload: String },
}

impl SerializedInputProps {
    pub fn payload(&self) -> &str {
        match self {
            SerializedInputProps::Payload { payload } => payload.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMediaRequest {
    #[serde(rename = "type")]
    pub routine: LambdaRoutine,
    pub composition: String,
    pub serve_url: String,
    pub region: String,
    pub function_name: String,
    pub input_props: SerializedInputProps,
    #[serde(flatten)]
    pub options: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStillRequest {
    #[serde(rename = "type")]
    pub routine: LambdaRoutine,
    pub composition: String,
    pub serve_url: String,
    pub region: String,
    pub function_name: String,
    pub input_props: SerializedInputProps,
    #[serde(flatten)]
    pub options: StillOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProgressRequest {
    #[serde(rename = "type")]
    pub routine: LambdaRoutine,
    pub render_id: String,
    pub bucket_name: String,
    pub function_name: String,
    pub region: String,
}
