//! CLI tests against a mock RPC server.
//!
//! Each test runs the `upsource` binary with an isolated HOME so the saved
//! profile never leaks between tests or from the developer's machine.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Environment variables the CLI reads that must not leak in from the host.
const CLI_ENV: &[&str] = &[
    "UPSOURCE_URL",
    "UPSOURCE_USER",
    "UPSOURCE_PASSWORD",
    "UPSOURCE_CREDENTIALS",
    "RUST_LOG",
];

fn mock_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}/", server.address().port())
}

/// Run the CLI with a custom HOME directory for isolated profile storage.
async fn run_cli(args: &[&str], home: &Path) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let home = home.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_upsource"));
        cmd.args(&args);
        for var in CLI_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &home);
        cmd.env("XDG_DATA_HOME", home.join("data"));
        cmd.env("NO_COLOR", "1");
        cmd.output().expect("Failed to execute CLI")
    })
    .await
    .unwrap()
}

/// Run the CLI and expect success, returning stdout.
async fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ============================================================================
// Call Tests
// ============================================================================

#[tokio::test]
async fn test_call_prints_raw_response() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/~rpc/getRevisionsList"))
        .and(header("authorization", "Basic YWRtaW46YWRtaW4="))
        .and(body_string(r#"{"projectId": "project", "limit": 30}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":{"revision":[]}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let url = mock_url(&server);
    let stdout = run_cli_success(
        &[
            "call",
            "getRevisionsList",
            r#"{"projectId": "project", "limit": 30}"#,
            "--url",
            &url,
            "--user",
            "admin",
            "--password",
            "admin",
        ],
        home.path(),
    )
    .await;

    assert_eq!(stdout, "{\"result\":{\"revision\":[]}}\n");
}

#[tokio::test]
async fn test_call_pretty_decodes_response() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/~rpc/getReviews"))
        .and(body_json(json!({"projectId": "project"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reviews": []})))
        .mount(&server)
        .await;

    let url = mock_url(&server);
    let stdout = run_cli_success(
        &[
            "call",
            "getReviews",
            r#"{"projectId": "project"}"#,
            "--pretty",
            "--url",
            &url,
        ],
        home.path(),
    )
    .await;

    let printed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(printed, json!({"reviews": []}));
}

#[tokio::test]
async fn test_call_get_uses_query() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/~rpc/getProjectInfo"))
        .and(query_param("params", r#"{"projectId":"project"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let url = mock_url(&server);
    run_cli_success(
        &[
            "call",
            "getProjectInfo",
            r#"{"projectId":"project"}"#,
            "--get",
            "--url",
            &url,
        ],
        home.path(),
    )
    .await;
}

#[tokio::test]
async fn test_call_unreachable_server_fails() {
    let home = TempDir::new().unwrap();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://127.0.0.1:{}/", listener.local_addr().unwrap().port());
    drop(listener);

    let output = run_cli(&["call", "getReviews", "--url", &url], home.path()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to call getReviews"));
}

// ============================================================================
// Demo Tests
// ============================================================================

#[tokio::test]
async fn test_demo_runs_both_calls() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/~rpc/getRevisionsList"))
        .and(body_json(json!({"projectId": "demo", "limit": 30})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"revision":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/~rpc/getReviews"))
        .and(body_json(json!({"projectId": "demo", "limit": 30})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reviews": []})))
        .expect(1)
        .mount(&server)
        .await;

    let url = mock_url(&server);
    let stdout =
        run_cli_success(&["demo", "--project", "demo", "--url", &url], home.path()).await;

    assert!(stdout.contains(r#"getRevisionsList: {"revision":[]}"#));
    assert!(stdout.contains(r#"getReviews: {"reviews":[]}"#));
}

#[tokio::test]
async fn test_demo_reports_invalid_json() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/~rpc/getRevisionsList"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/~rpc/getReviews"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let url = mock_url(&server);
    let output = run_cli(&["demo", "--url", &url], home.path()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("getReviews: failed to deserialize response"));
}

#[tokio::test]
async fn test_demo_unreachable_server_fails() {
    let home = TempDir::new().unwrap();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://127.0.0.1:{}/", listener.local_addr().unwrap().port());
    drop(listener);

    let output = run_cli(&["demo", "--url", &url], home.path()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("getRevisionsList: could not reach server"));
    assert!(output.stdout.is_empty());
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_login_profile_is_used_for_calls() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/~rpc/getReviews"))
        .and(header("authorization", "Basic YWRtaW46YWRtaW4="))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let url = mock_url(&server);
    let stdout = run_cli_success(
        &["login", "--url", &url, "--user", "admin", "--password", "admin"],
        home.path(),
    )
    .await;
    assert!(stdout.contains("Profile saved"));

    let stdout = run_cli_success(&["whoami"], home.path()).await;
    assert!(stdout.contains(&url));
    assert!(stdout.contains("basic"));
    assert!(!stdout.contains("YWRtaW46YWRtaW4="));

    run_cli_success(&["call", "getReviews"], home.path()).await;

    let stdout = run_cli_success(&["logout"], home.path()).await;
    assert!(stdout.contains("Profile removed"));

    let stdout = run_cli_success(&["whoami"], home.path()).await;
    assert!(stdout.contains("http://localhost:8080/"));
    assert!(stdout.contains("guest"));
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let home = TempDir::new().unwrap();

    let output = run_cli(&["login", "--url", "http://localhost:8080/"], home.path()).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No credentials given"));
}
