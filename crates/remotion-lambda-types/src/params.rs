//! Caller-facing render parameters.
//!
//! These carry the raw input props; the client replaces them with a
//! [`SerializedInputProps`](crate::SerializedInputProps) when it builds the
//! outbound request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::{
    ChromiumOptions, Codec, DownloadBehavior, FrameRange, LogLevel, Privacy, StillImageFormat,
    VideoImageFormat, Webhook,
};

const DEFAULT_MAX_RETRIES: u32 = 1;
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Parameters for rendering a video or audio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParams {
    /// Composition id registered in the Remotion bundle.
    pub composition: String,
    /// Arbitrary data handed to the composition at render time.
    #[serde(default)]
    pub input_props: Option<Value>,
    #[serde(flatten)]
    pub options: RenderOptions,
}

impl RenderParams {
    pub fn new(composition: impl Into<String>) -> Self {
        Self {
            composition: composition.into(),
            input_props: None,
            options: RenderOptions::default(),
        }
    }

    pub fn with_input_props(mut self, input_props: Value) -> Self {
        self.input_props = Some(input_props);
        self
    }

    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.options.codec = codec;
        self
    }

    pub fn with_out_name(mut self, out_name: impl Into<String>) -> Self {
        self.options.out_name = Some(out_name.into());
        self
    }

    pub fn with_bucket_name(mut self, bucket_name: impl Into<String>) -> Self {
        self.options.bucket_name = Some(bucket_name.into());
        self
    }
}

/// Every render setting other than the composition and its props; passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub codec: Codec,
    pub image_format: VideoImageFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crf: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpeg_quality: Option<u8>,
    pub max_retries: u32,
    pub privacy: Privacy,
    pub log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_range: Option<FrameRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_name: Option<String>,
    pub timeout_in_milliseconds: u64,
    pub chromium_options: ChromiumOptions,
    pub scale: f64,
    pub every_nth_frame: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_gif_loops: Option<u32>,
    pub concurrency_per_lambda: u32,
    pub download_behavior: DownloadBehavior,
    pub muted: bool,
    pub overwrite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_bitrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_bitrate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<Webhook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    /// Function that renders individual chunks; defaults to the invoked function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renderer_function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_per_lambda: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_res_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x264_preset: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            codec: Codec::default(),
            image_format: VideoImageFormat::default(),
            crf: None,
            env_variables: None,
            jpeg_quality: None,
            max_retries: DEFAULT_MAX_RETRIES,
            privacy: Privacy::default(),
            log_level: LogLevel::default(),
            frame_range: None,
            out_name: None,
            timeout_in_milliseconds: DEFAULT_TIMEOUT_MS,
            chromium_options: ChromiumOptions::default(),
            scale: 1.0,
            every_nth_frame: 1,
            number_of_gif_loops: None,
            concurrency_per_lambda: 1,
            download_behavior: DownloadBehavior::default(),
            muted: false,
            overwrite: false,
            audio_bitrate: None,
            video_bitrate: None,
            webhook: None,
            force_height: None,
            force_width: None,
            audio_codec: None,
            renderer_function_name: None,
            frames_per_lambda: None,
            bucket_name: None,
            pro_res_profile: None,
            pixel_format: None,
            x264_preset: None,
        }
    }
}

/// Parameters for rendering a single frame to an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStillParams {
    pub composition: String,
    #[serde(default)]
    pub input_props: Option<Value>,
    #[serde(flatten)]
    pub options: StillOptions,
}

impl RenderStillParams {
    pub fn new(composition: impl Into<String>) -> Self {
        Self {
            composition: composition.into(),
            input_props: None,
            options: StillOptions::default(),
        }
    }

    pub fn with_input_props(mut self, input_props: Value) -> Self {
        self.input_props = Some(input_props);
        self
    }

    pub fn with_frame(mut self, frame: u64) -> Self {
        self.options.frame = frame;
        self
    }

    pub fn with_image_format(mut self, image_format: StillImageFormat) -> Self {
        self.options.image_format = image_format;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StillOptions {
    pub image_format: StillImageFormat,
    pub frame: u64,
    pub privacy: Privacy,
    pub max_retries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpeg_quality: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_name: Option<String>,
    pub timeout_in_milliseconds: u64,
    pub chromium_options: ChromiumOptions,
    pub scale: f64,
    pub download_behavior: DownloadBehavior,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_width: Option<u32>,
    pub log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
}

impl Default for StillOptions {
    fn default() -> Self {
        Self {
            image_format: StillImageFormat::default(),
            frame: 0,
            privacy: Privacy::default(),
            max_retries: DEFAULT_MAX_RETRIES,
            env_variables: None,
            jpeg_quality: None,
            out_name: None,
            timeout_in_milliseconds: DEFAULT_TIMEOUT_MS,
            chromium_options: ChromiumOptions::default(),
            scale: 1.0,
            download_behavior: DownloadBehavior::default(),
            force_height: None,
            force_width: None,
            log_level: LogLevel::default(),
            bucket_name: None,
        }
    }
}
