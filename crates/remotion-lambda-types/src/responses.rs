//! Results decoded from the inner body of the function's response envelope.
//!
//! Every result type defaults missing or `null` keys and keeps unrecognised
//! keys in `extra`, so bodies from newer function versions still decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decode a present-but-`null` key as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Acknowledgment of a submitted video or audio render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub render_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bucket_name: String,
    pub cloud_watch_logs: Option<String>,
    pub folder_in_s3_console: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a still render, which completes within a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderStillResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub render_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bucket_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub out_key: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub size_in_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_price: RenderCosts,
    pub cloud_watch_logs: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderCosts {
    #[serde(deserialize_with = "null_as_default")]
    pub accrued_so_far: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub display_cost: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub disclaimer: String,
}

/// Snapshot of an in-flight or finished render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderProgress {
    #[serde(deserialize_with = "null_as_default")]
    pub render_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bucket: String,
    /// Fraction between 0 and 1.
    #[serde(deserialize_with = "null_as_default")]
    pub overall_progress: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub chunks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub done: bool,
    pub encoding_status: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub costs: RenderCosts,
    pub render_metadata: Option<Value>,
    pub output_file: Option<String>,
    pub out_key: Option<String>,
    pub out_bucket: Option<String>,
    /// Milliseconds the render took, once it is done.
    pub time_to_finish: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<RenderErrorInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub fatal_error_encountered: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub current_time: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub render_size: u64,
    pub output_size_in_bytes: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub lambdas_invoked: u64,
    pub frames_rendered: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RenderProgress {
    /// True once polling can stop: the output exists or the render cannot recover.
    pub fn is_settled(&self) -> bool {
        self.done || self.fatal_error_encountered
    }
}

/// One error reported by a renderer or the orchestrating function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderErrorInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stack: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub frame: Option<u64>,
    pub chunk: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_fatal: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub attempt: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_attempts: u32,
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
