//! Enumerations and nested option objects used by render parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    #[default]
    H264,
    H265,
    Vp8,
    Vp9,
    Mp3,
    Aac,
    Wav,
    Prores,
    #[serde(rename = "h264-mkv")]
    H264Mkv,
    #[serde(rename = "h264-ts")]
    H264Ts,
    Gif,
}

impl Codec {
    pub fn as_str(self) -> &'static str {
        match self {
            Codec::H264 => "h264",
            Codec::H265 => "h265",
            Codec::Vp8 => "vp8",
            Codec::Vp9 => "vp9",
            Codec::Mp3 => "mp3",
            Codec::Aac => "aac",
            Codec::Wav => "wav",
            Codec::Prores => "prores",
            Codec::H264Mkv => "h264-mkv",
            Codec::H264Ts => "h264-ts",
            Codec::Gif => "gif",
        }
    }
}

/// Intermediate frame format for video renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoImageFormat {
    #[default]
    Jpeg,
    Png,
    None,
}

/// Output format of a still render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StillImageFormat {
    #[default]
    Png,
    Jpeg,
    Pdf,
    Webp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Privacy {
    #[default]
    Public,
    Private,
    NoAcl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Verbose,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenGlRenderer {
    Swangle,
    Angle,
    Egl,
    Swiftshader,
    Vulkan,
    AngleEgl,
}

/// How the rendered file is served when its URL is opened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DownloadBehavior {
    #[default]
    PlayInBrowser,
    Download {
        #[serde(rename = "fileName")]
        file_name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromiumOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_certificate_errors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_web_security: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gl: Option<OpenGlRenderer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Endpoint notified by the render function when a render finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub url: String,
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
}

/// A single frame or an inclusive `[start, end]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameRange {
    Single(u64),
    Range(u64, u64),
}
