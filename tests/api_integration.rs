use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use placard::{
    AppState,
    catalog::TemplateCatalog,
    config::AppConfig,
    security::{AuthClaims, encode_identity},
    server::build_router,
};
use serde_json::{Value, json};

const IDENTITY_HEADER: &str = "x-identity-claims";

fn config(args: &[&str]) -> AppConfig {
    let argv = std::iter::once("placard")
        .chain(["--config", "tests/fixtures/test_config.yaml"])
        .chain(args.iter().copied());
    AppConfig::load_from_args(argv).expect("Failed to load test config")
}

fn server_with(config: AppConfig) -> TestServer {
    let catalog = TemplateCatalog::builtin().expect("built-in catalog");
    TestServer::new(build_router(AppState::new(config, catalog))).expect("test server")
}

fn server() -> TestServer {
    server_with(config(&[]))
}

fn identity(roles: &[&str]) -> (HeaderName, HeaderValue) {
    let claims = AuthClaims {
        sub: "user-42".to_string(),
        name: Some("Ada".to_string()),
        email: None,
        roles: roles.iter().map(ToString::to_string).collect(),
        exp: 4_102_444_800,
    };
    let value = encode_identity(&claims).unwrap();
    (
        HeaderName::from_static(IDENTITY_HEADER),
        HeaderValue::from_str(&value).unwrap(),
    )
}

#[tokio::test]
async fn health_is_ok() {
    let response = server().get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"status": "ok"}));
}

#[tokio::test]
async fn lists_builtin_templates_in_order() {
    let response = server().get("/api/templates").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["welcome", "invite", "digest"]);
    assert_eq!(body[1]["placeholder_count"], 4);
}

#[tokio::test]
async fn renders_template_placeholders_inline() {
    let response = server()
        .get("/api/templates/welcome/placeholders")
        .add_query_param("mode", "inline")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mode"], "inline");
    assert_eq!(
        body["text"],
        "{username} (the member's display name), {workspace} (workspace name)."
    );
}

#[tokio::test]
async fn renders_template_placeholders_as_chips_by_default() {
    let response = server().get("/api/templates/digest/placeholders").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mode"], "chips");
    assert_eq!(
        body["chips"],
        json!([
            {"key": "username", "label": "{username}"},
            {"key": "count", "label": "{count}"},
        ])
    );
}

#[tokio::test]
async fn unknown_template_is_404_json() {
    let response = server().get("/api/templates/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(
        response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .contains("nope")
    );
}

#[tokio::test]
async fn ad_hoc_render_matches_documented_example() {
    let response = server()
        .post("/api/placeholders/render")
        .json(&json!({
            "mode": "inline",
            "placeholders": [
                {"key": "a", "token": "{user}", "description": "username"},
                {"key": "b", "token": "{id}"},
            ],
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["text"], "{user} (username), {id}.");
}

#[tokio::test]
async fn ad_hoc_render_empty_sequence() {
    let response = server()
        .post("/api/placeholders/render")
        .json(&json!({"mode": "inline", "placeholders": []}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["text"], "");
    assert_eq!(body["segments"], json!([]));
}

#[tokio::test]
async fn ad_hoc_render_html_fragment() {
    let response = server()
        .post("/api/placeholders/render")
        .json(&json!({
            "mode": "chips",
            "format": "html",
            "placeholders": [{"key": "a", "token": "{user}"}],
        }))
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-placeholder-key="a""#));
    assert!(html.contains("{user}"));
}

#[tokio::test]
async fn create_fill_and_delete_template() {
    let server = server();

    let created = server
        .post("/api/templates")
        .json(&json!({
            "id": "reminder",
            "name": "Reminder",
            "body": "Hi {name}, {event} starts at {time}.",
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(
        created.json::<Value>()["placeholders"][2],
        json!({"key": "time", "token": "{time}"})
    );

    let filled = server
        .post("/api/templates/reminder/fill")
        .json(&json!({"values": {"name": "Ada", "event": "Standup", "time": "9:30"}}))
        .await;
    filled.assert_status_ok();
    assert_eq!(
        filled.json::<Value>()["text"],
        "Hi Ada, Standup starts at 9:30."
    );

    let missing = server
        .post("/api/templates/reminder/fill")
        .json(&json!({"values": {"name": "Ada"}}))
        .await;
    missing.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .delete("/api/templates/reminder")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get("/api/templates/reminder")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fill_does_not_expand_tokens_inside_values() {
    let server = server();

    server
        .post("/api/templates")
        .json(&json!({"id": "code", "name": "Code", "body": "Hi {name}, code {code}"}))
        .await
        .assert_status(StatusCode::CREATED);

    let filled = server
        .post("/api/templates/code/fill")
        .json(&json!({"values": {"name": "{code}", "code": "42"}}))
        .await;
    filled.assert_status_ok();
    assert_eq!(filled.json::<Value>()["text"], "Hi {code}, code 42");
}

#[tokio::test]
async fn duplicate_template_and_keys_conflict() {
    let server = server();

    server
        .post("/api/templates")
        .json(&json!({"id": "welcome", "name": "Again", "body": ""}))
        .await
        .assert_status(StatusCode::CONFLICT);

    server
        .post("/api/templates")
        .json(&json!({
            "id": "dupes",
            "name": "Dupes",
            "body": "{a}",
            "placeholders": [
                {"key": "a", "token": "{a}"},
                {"key": "a", "token": "{b}"},
            ],
        }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn me_requires_identity() {
    let server = server();
    server
        .get("/api/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = identity(&["editor"]);
    let response = server.get("/api/me").add_header(name, value).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user_id"], "user-42");
    assert_eq!(body["claims"]["roles"], json!(["editor"]));
}

#[tokio::test]
async fn malformed_identity_is_bad_request() {
    let response = server()
        .get("/health")
        .add_header(
            HeaderName::from_static(IDENTITY_HEADER),
            HeaderValue::from_static("%%%"),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn identity_required_rejects_anonymous_requests() {
    let server = server_with(config(&["--identity-required", "true"]));

    server
        .get("/api/templates")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = identity(&[]);
    server
        .get("/api/templates")
        .add_header(name, value)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn rate_limit_answers_429_when_exhausted() {
    let mut config = config(&["--rate-limit-enabled", "true"]);
    config.resilience.requests_per_second = 0.001;
    config.resilience.burst_size = 2.0;
    let server = server_with(config);

    server.get("/health").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();
    let limited = server.get("/health").await;
    limited.assert_status(StatusCode::TOO_MANY_REQUESTS);
    // One token per 1000s.
    let retry_after: u64 = limited
        .header("retry-after")
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((990..=1000).contains(&retry_after));
}

#[tokio::test]
async fn theme_endpoints() {
    let server = server();

    let css = server.get("/theme.css").await;
    css.assert_status_ok();
    assert!(css.text().contains("--accent:"));
    assert_eq!(
        css.header("content-type").to_str().unwrap(),
        "text/css; charset=utf-8"
    );

    let tailwind: Value = server.get("/api/theme").await.json();
    assert_eq!(
        tailwind["theme"]["extend"]["colors"]["muted-foreground"],
        "hsl(var(--muted-foreground))"
    );
}

#[tokio::test]
async fn pages_render_html() {
    let server = server();

    let index = server.get("/").await;
    index.assert_status_ok();
    assert!(index.text().contains(r#"href="/templates/invite""#));

    let page = server.get("/templates/welcome").await;
    page.assert_status_ok();
    let html = page.text();
    assert!(html.contains(r#"data-placeholder-key="workspace""#));
    assert!(html.contains("<textarea"));
    assert!(html.contains("data-placeholder-list"));
    assert!(html.contains("(workspace name)"));

    server
        .get("/templates/nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fragment_renders_inline_list() {
    let response = server()
        .get("/fragments/templates/digest/placeholders")
        .add_query_param("mode", "inline")
        .await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("data-placeholder-list"));
    assert!(html.contains("{count}"));
    assert!(!html.contains("<html"));
}

#[tokio::test]
async fn serves_catalog_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.yaml");
    std::fs::write(
        &path,
        r#"
templates:
  - id: otp
    name: One-time code
    body: "Your code is {code}."
    placeholders:
      - key: code
        token: "{code}"
        description: six digits
"#,
    )
    .unwrap();

    let mut config = config(&[]);
    config.catalog.path = Some(path.to_string_lossy().into_owned());
    let catalog = placard::server::load_catalog(&config).unwrap();
    let server = TestServer::new(build_router(AppState::new(config, catalog))).unwrap();

    let response = server
        .get("/api/templates/otp/placeholders")
        .add_query_param("mode", "inline")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["text"], "{code} (six digits).");

    server
        .get("/api/templates/welcome")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
