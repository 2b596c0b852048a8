//! Inline encoding of input props with a per-operation size ceiling.

use remotion_lambda_types::SerializedInputProps;
use serde::Serialize;

use crate::error::PayloadError;

const STILL_MAX_INLINE_PAYLOAD_BYTES: usize = 5_000_000;
const MEDIA_MAX_INLINE_PAYLOAD_BYTES: usize = 200_000;
const EMPTY_PROPS: &str = "{}";

/// The kind of render a payload is destined for; stills allow larger inline props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Still,
    VideoOrAudio,
}

impl OperationKind {
    pub fn max_inline_payload_bytes(self) -> usize {
        match self {
            OperationKind::Still => STILL_MAX_INLINE_PAYLOAD_BYTES,
            OperationKind::VideoOrAudio => MEDIA_MAX_INLINE_PAYLOAD_BYTES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Still => "still",
            OperationKind::VideoOrAudio => "video-or-audio",
        }
    }
}

/// Encode `input_props` as compact JSON and wrap it as an inline payload.
///
/// `null` (including an absent `Option`) is sent as an empty object.
pub fn serialize_input_props<T: Serialize + ?Sized>(
    input_props: &T,
    kind: OperationKind,
) -> Result<SerializedInputProps, PayloadError> {
    let payload = serde_json::to_string(input_props).map_err(PayloadError::Encode)?;

    let threshold = kind.max_inline_payload_bytes();
    if payload.len() > threshold {
        return Err(PayloadError::TooLarge {
            threshold_kb: (threshold + 500) / 1000,
            actual_kb: payload.len().div_ceil(1024),
        });
    }

    let payload = if payload.is_empty() || payload == "null" {
        EMPTY_PROPS.to_string()
    } else {
        payload
    };

    Ok(SerializedInputProps::Payload { payload })
}
