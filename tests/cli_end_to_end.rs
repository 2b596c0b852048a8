use std::io::Write;

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;
use serde_json::json;
use tempfile::NamedTempFile;

const INVOKE_PATH: &str = "/2015-03-31/functions/remotion-render/invocations";

fn props_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write props");
    file
}

fn cli(server: &MockServer) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("remotion-lambda"));
    cmd.env("REMOTION__LAMBDA__REGION", "us-east-1")
        .env(
            "REMOTION__LAMBDA__SERVE_URL",
            "https://remotionlambda-abc.s3.us-east-1.amazonaws.com/sites/demo/index.html",
        )
        .env("REMOTION__LAMBDA__FUNCTION_NAME", "remotion-render")
        .env("REMOTION__LAMBDA__ACCESS_KEY_ID", "AKIDEXAMPLE")
        .env("REMOTION__LAMBDA__SECRET_ACCESS_KEY", "secret")
        .arg("--endpoint-url")
        .arg(server.base_url());
    cmd
}

#[test]
fn progress_prints_snapshot_as_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path(INVOKE_PATH).json_body(json!({
            "type": "status",
            "renderId": "abc123",
            "bucketName": "my-bucket",
            "functionName": "remotion-render",
            "region": "us-east-1",
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"statusCode":200,"body":"{\"renderId\":\"abc123\",\"bucket\":\"my-bucket\",\"overallProgress\":0.5}"}"#);
    });

    let assert = cli(&server)
        .arg("progress")
        .arg("--render-id")
        .arg("abc123")
        .arg("--bucket-name")
        .arg("my-bucket")
        .assert()
        .success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("\"renderId\": \"abc123\""));
    assert!(output.contains("\"overallProgress\": 0.5"));
    mock.assert();
}

#[test]
fn render_reads_props_from_file() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path(INVOKE_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"statusCode":200,"body":"{\"renderId\":\"r-1\",\"bucketName\":\"my-bucket\"}"}"#);
    });

    let props = props_file(r#"{"title": "From file"}"#);
    cli(&server)
        .arg("render")
        .arg("--composition")
        .arg("Intro")
        .arg("--props-file")
        .arg(props.path())
        .assert()
        .success()
        .stdout(contains("\"renderId\": \"r-1\""));
    mock.assert();
}

#[test]
fn remote_failure_exits_non_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path(INVOKE_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"statusCode":500,"body":"{}"}"#);
    });

    cli(&server)
        .arg("progress")
        .arg("--render-id")
        .arg("abc123")
        .arg("--bucket-name")
        .arg("my-bucket")
        .assert()
        .failure()
        .stderr(contains("status 500"));
}

#[test]
fn missing_region_fails_fast() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("remotion-lambda"));
    cmd.arg("progress")
        .arg("--render-id")
        .arg("abc123")
        .arg("--bucket-name")
        .arg("my-bucket")
        .env_remove("REMOTION__LAMBDA__REGION")
        .env("REMOTION__LAMBDA__SERVE_URL", "https://example.com/index.html")
        .env("REMOTION__LAMBDA__FUNCTION_NAME", "remotion-render")
        .assert()
        .failure()
        .stderr(contains("lambda.region"));
}
