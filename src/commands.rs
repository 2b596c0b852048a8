use remotion_lambda::config::{LoadError, ProgressArgs, PropsArgs, RenderArgs, StillArgs};
use remotion_lambda::telemetry::TelemetryError;
use remotion_lambda::{RemotionClient, RenderParams, RenderStillParams};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Client(#[from] remotion_lambda::Error),
    #[error("failed to render output: {0}")]
    Output(#[source] serde_json::Error),
}

pub async fn render(client: &RemotionClient, args: RenderArgs) -> Result<(), AppError> {
    let mut params = RenderParams::new(args.composition).with_codec(args.codec);
    params.input_props = read_props(args.props).await?;
    params.options.out_name = args.out_name;
    params.options.bucket_name = args.bucket_name;
    params.options.frames_per_lambda = args.frames_per_lambda;
    if let Some(privacy) = args.privacy {
        params.options.privacy = privacy;
    }

    let response = client.render_media_on_lambda(&params).await?;
    print_json(&response)
}

pub async fn still(client: &RemotionClient, args: StillArgs) -> Result<(), AppError> {
    let mut params = RenderStillParams::new(args.composition)
        .with_frame(args.frame)
        .with_image_format(args.image_format);
    params.input_props = read_props(args.props).await?;
    params.options.out_name = args.out_name;
    params.options.bucket_name = args.bucket_name;
    if let Some(privacy) = args.privacy {
        params.options.privacy = privacy;
    }

    let response = client.render_still_on_lambda(&params).await?;
    print_json(&response)
}

pub async fn progress(client: &RemotionClient, args: ProgressArgs) -> Result<(), AppError> {
    let progress = client
        .get_render_progress(&args.render_id, &args.bucket_name)
        .await?;
    info!(
        render_id = %args.render_id,
        overall_progress = progress.overall_progress,
        settled = progress.is_settled(),
        "progress fetched"
    );
    print_json(&progress)
}

/// Read props from `--props-file` or inline `--props`; the CLI accepts only one of them.
async fn read_props(args: PropsArgs) -> Result<Option<Value>, AppError> {
    let raw = if let Some(path) = args.props_file {
        let data = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| AppError::InputFile {
                path: path.display().to_string(),
                source,
            })?;
        Some(data)
    } else {
        args.props
    };

    raw.map(|text| {
        serde_json::from_str(&text)
            .map_err(|err| AppError::InvalidInput(format!("input props are not valid JSON: {err}")))
    })
    .transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value).map_err(AppError::Output)?;
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    fn tmp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("tmp file");
        file.write_all(contents.as_bytes()).expect("write tmp");
        file
    }

    #[tokio::test]
    async fn props_are_read_from_file() {
        let file = tmp_file(r#"{"source":"file"}"#);
        let props = read_props(PropsArgs {
            props: None,
            props_file: Some(file.path().to_path_buf()),
        })
        .await
        .expect("read props");
        assert_eq!(props, Some(json!({"source": "file"})));
    }

    #[tokio::test]
    async fn inline_props_are_parsed() {
        let props = read_props(PropsArgs {
            props: Some(r#"{"source":"inline"}"#.into()),
            props_file: None,
        })
        .await
        .expect("read props");
        assert_eq!(props, Some(json!({"source": "inline"})));
    }

    #[tokio::test]
    async fn missing_props_stay_absent() {
        let props = read_props(PropsArgs::default()).await.expect("read props");
        assert!(props.is_none());
    }

    #[tokio::test]
    async fn invalid_props_are_rejected() {
        let err = read_props(PropsArgs {
            props: Some("{not json".into()),
            props_file: None,
        })
        .await
        .expect_err("invalid json");
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unreadable_props_file_reports_path() {
        let err = read_props(PropsArgs {
            props: None,
            props_file: Some("/nonexistent/props.json".into()),
        })
        .await
        .expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/props.json"));
    }
}
