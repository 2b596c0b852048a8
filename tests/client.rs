use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use remotion_lambda::{
    ClientConfig, Error, FunctionInvoker, InvokeError, PayloadError, RemotionClient,
    RenderCosts, RenderParams, RenderStillParams,
};
use serde_json::{Value, json};

const FUNCTION_NAME: &str = "remotion-render-4-0-0-mem2048mb-disk2048mb-120sec";

/// Replays one canned response and records every payload it receives.
struct CannedInvoker {
    response: Result<Vec<u8>, String>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl CannedInvoker {
    fn replying(raw: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(raw.as_bytes().to_vec()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl FunctionInvoker for CannedInvoker {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Vec<u8>, InvokeError> {
        let decoded: Value = serde_json::from_slice(&payload).expect("payload is json");
        self.calls
            .lock()
            .expect("calls lock")
            .push((function_name.to_string(), decoded));
        self.response.clone().map_err(InvokeError::transport)
    }
}

fn client(invoker: Arc<CannedInvoker>) -> RemotionClient {
    let config = ClientConfig::new(
        "us-east-1",
        "https://remotionlambda-abc.s3.us-east-1.amazonaws.com/sites/demo/index.html",
        FUNCTION_NAME,
    );
    RemotionClient::with_invoker(config, invoker).expect("client")
}

#[tokio::test]
async fn render_media_returns_ids_from_body() -> Result<(), Error> {
    let invoker = CannedInvoker::replying(
        r#"{"statusCode":200,"body":"{\"renderId\":\"abc123\",\"bucketName\":\"my-bucket\"}"}"#,
    );
    let client = client(invoker.clone());

    let params = RenderParams::new("Intro").with_input_props(json!({"title": "Hello"}));
    let response = client.render_media_on_lambda(&params).await?;

    assert_eq!(response.render_id, "abc123");
    assert_eq!(response.bucket_name, "my-bucket");

    let calls = invoker.calls();
    assert_eq!(calls.len(), 1);
    let (function_name, payload) = &calls[0];
    assert_eq!(function_name, FUNCTION_NAME);
    assert_eq!(payload["type"], json!("start"));
    assert_eq!(payload["composition"], json!("Intro"));
    assert_eq!(payload["functionName"], json!(FUNCTION_NAME));
    assert_eq!(payload["region"], json!("us-east-1"));
    assert_eq!(
        payload["inputProps"],
        json!({"type": "payload", "payload": "{\"title\":\"Hello\"}"})
    );
    Ok(())
}

#[tokio::test]
async fn non_200_status_is_a_remote_invocation_failure() {
    let invoker = CannedInvoker::replying(r#"{"statusCode":500,"body":"{}"}"#);
    let client = client(invoker);

    let err = client
        .render_media_on_lambda(&RenderParams::new("Intro"))
        .await
        .expect_err("status 500 must fail");

    assert!(err.is_remote_invocation_failure());
    assert!(matches!(
        err,
        Error::Invoke(InvokeError::Status {
            status_code: 500,
            ..
        })
    ));
}

#[tokio::test]
async fn transport_failure_propagates() {
    let invoker = CannedInvoker::failing("connection reset");
    let client = client(invoker);

    let err = client
        .get_render_progress("abc123", "my-bucket")
        .await
        .expect_err("transport failure");

    assert!(err.is_remote_invocation_failure());
    assert!(err.to_string().contains("connection reset"));
}

#[tokio::test]
async fn oversized_props_fail_before_invoking() {
    let invoker = CannedInvoker::replying(r#"{"statusCode":200,"body":"{}"}"#);
    let client = client(invoker.clone());

    let params =
        RenderParams::new("Intro").with_input_props(Value::String("x".repeat(300_000)));
    let err = client
        .render_media_on_lambda(&params)
        .await
        .expect_err("props too large");

    assert!(matches!(
        err,
        Error::Payload(PayloadError::TooLarge {
            threshold_kb: 200,
            ..
        })
    ));
    assert!(invoker.calls().is_empty());
}

#[tokio::test]
async fn progress_maps_body_and_sends_status_request() -> Result<(), Error> {
    let body = json!({
        "renderId": "abc123",
        "bucket": "my-bucket",
        "overallProgress": 0.5,
        "chunks": 4,
        "done": false,
        "lambdasInvoked": 8,
        "costs": {"accruedSoFar": 0.01, "displayCost": "$0.01", "currency": "USD", "disclaimer": ""},
        "retriesInfo": [],
    });
    let envelope = json!({"statusCode": 200, "body": body.to_string()}).to_string();
    let invoker = CannedInvoker::replying(&envelope);
    let client = client(invoker.clone());

    let progress = client.get_render_progress("abc123", "my-bucket").await?;

    assert_eq!(progress.render_id, "abc123");
    assert_eq!(progress.chunks, 4);
    assert_eq!(progress.lambdas_invoked, 8);
    assert!(!progress.is_settled());
    assert!(progress.extra.contains_key("retriesInfo"));

    let calls = invoker.calls();
    assert_eq!(
        calls[0].1,
        json!({
            "type": "status",
            "renderId": "abc123",
            "bucketName": "my-bucket",
            "functionName": FUNCTION_NAME,
            "region": "us-east-1",
        })
    );
    Ok(())
}

#[tokio::test]
async fn still_render_accepts_props_above_media_threshold() -> Result<(), Error> {
    let body = json!({
        "renderId": "still-1",
        "bucketName": "my-bucket",
        "url": "https://my-bucket.s3.amazonaws.com/renders/still-1/out.png",
        "sizeInBytes": 1024,
    });
    let envelope = json!({"statusCode": 200, "body": body.to_string()}).to_string();
    let invoker = CannedInvoker::replying(&envelope);
    let client = client(invoker.clone());

    let params = RenderStillParams::new("Thumbnail")
        .with_input_props(Value::String("x".repeat(300_000)))
        .with_frame(5);
    let response = client.render_still_on_lambda(&params).await?;

    assert_eq!(response.render_id, "still-1");
    assert_eq!(response.size_in_bytes, 1024);

    let calls = invoker.calls();
    assert_eq!(calls[0].1["type"], json!("still"));
    assert_eq!(calls[0].1["frame"], json!(5));
    Ok(())
}

#[tokio::test]
async fn malformed_envelope_is_reported() {
    let invoker = CannedInvoker::replying("null");
    let client = client(invoker);

    let err = client
        .get_render_progress("abc123", "my-bucket")
        .await
        .expect_err("null envelope");

    assert!(matches!(
        err,
        Error::Invoke(InvokeError::MalformedEnvelope(_))
    ));
}

#[tokio::test]
async fn clones_share_configuration() {
    let invoker = CannedInvoker::replying(r#"{"statusCode":200,"body":"{}"}"#);
    let client = client(invoker);
    let cloned = client.clone();
    assert_eq!(cloned.config().function_name, FUNCTION_NAME);
}

#[tokio::test]
async fn null_progress_fields_fall_back_to_defaults() -> Result<(), Error> {
    let body = json!({
        "renderId": "abc",
        "bucket": "b",
        "overallProgress": 0.3,
        "renderSize": null,
        "costs": null,
    });
    let envelope = json!({"statusCode": 200, "body": body.to_string()}).to_string();
    let client = client(CannedInvoker::replying(&envelope));

    let progress = client.get_render_progress("abc", "b").await?;

    assert_eq!(progress.render_id, "abc");
    assert_eq!(progress.render_size, 0);
    assert_eq!(progress.costs, RenderCosts::default());
    Ok(())
}
