//! Wire types exchanged with a Remotion render function deployed on AWS Lambda.
//!
//! Requests are plain serde values whose JSON projection is exactly what the
//! function receives; responses decode the inner `body` of the function's
//! `{statusCode, body}` envelope.

pub mod options;
pub mod params;
pub mod requests;
pub mod responses;

pub use options::{
    ChromiumOptions, Codec, DownloadBehavior, FrameRange, LogLevel, OpenGlRenderer, Privacy,
    StillImageFormat, VideoImageFormat, Webhook,
};
pub use params::{RenderOptions, RenderParams, RenderStillParams, StillOptions};
pub use requests::{
    LambdaRoutine, RenderMediaRequest, RenderProgressRequest, RenderStillRequest,
    SerializedInputProps,
};
pub use responses::{
    RenderCosts, RenderErrorInfo, RenderProgress, RenderResponse, RenderStillResponse,
};
