use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{body::Body, Router};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use solve_service::{
    build_app,
    provider::{SolutionProvider, SolutionResult, SolveError, TemplateProvider},
    AppState,
};
use tower::ServiceExt;

struct FailingProvider;

#[async_trait]
impl SolutionProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn solve(&self, _problem: &str) -> Result<SolutionResult, SolveError> {
        Err(SolveError::Unavailable("inference backend offline".to_string()))
    }
}

struct PanickingProvider;

#[async_trait]
impl SolutionProvider for PanickingProvider {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn solve(&self, _problem: &str) -> Result<SolutionResult, SolveError> {
        panic!("template exploded")
    }
}

fn app_with(provider: Arc<dyn SolutionProvider>, delay: Duration) -> Router {
    build_app(Arc::new(AppState::new(provider, delay)))
}

fn build_test_app() -> Router {
    app_with(Arc::new(TemplateProvider::new()), Duration::ZERO)
}

fn solve_request(method: Method, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/solve")
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

fn post_problem(problem: &str) -> Request<Body> {
    solve_request(
        Method::POST,
        Body::from(json!({ "problem": problem }).to_string()),
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn e2e_post_solve_returns_templated_solution() {
    let problem = "A car with mass 5kg accelerates...";
    let (status, body) = send(build_test_app(), post_problem(problem)).await;

    assert_eq!(status, StatusCode::OK);
    let solution = body["solution"].as_str().unwrap();
    assert!(solution.contains(problem));
    assert!(solution.contains("Mass (m) is provided"));
    assert!(solution.contains(r"\boxed{42}"));
    assert!(!solution.contains("electric circuits"));
}

#[tokio::test]
async fn e2e_topic_labels_follow_keywords() {
    let cases = [
        ("a ball thrown with velocity 3 m/s", "kinematics"),
        ("resistance of a copper wire", "electric circuits"),
        ("what is entropy", "a general physics concept"),
    ];

    for (problem, label) in cases {
        let (status, body) = send(build_test_app(), post_problem(problem)).await;
        assert_eq!(status, StatusCode::OK);
        let expected = format!("The problem appears to be about {label}.");
        assert!(body["solution"].as_str().unwrap().contains(&expected), "{problem}");
    }
}

#[tokio::test]
async fn e2e_identical_problems_get_identical_solutions() {
    let problem = "resistance R and velocity v";
    let (_, first) = send(build_test_app(), post_problem(problem)).await;
    let (_, second) = send(build_test_app(), post_problem(problem)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn e2e_whitespace_problem_is_accepted() {
    let (status, body) = send(build_test_app(), post_problem("   ")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["solution"].as_str().unwrap().contains("**Problem:**    "));
}

#[tokio::test]
async fn e2e_problem_above_default_body_limit_is_solved() {
    let problem = "x".repeat(3 * 1024 * 1024);
    let (status, body) = send(build_test_app(), post_problem(&problem)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["solution"].as_str().unwrap().contains(&problem));
}

#[tokio::test]
async fn e2e_empty_problem_is_bad_request() {
    let (status, body) = send(build_test_app(), post_problem("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Problem text is required" }));
}

#[tokio::test]
async fn e2e_missing_or_malformed_problem_is_bad_request() {
    let bodies = [r#"{}"#, r#"{"problem":null}"#, r#"{"problem":7}"#,
        r#"{"problem":["velocity"]}"#,
        "not json", ""];

    for raw in bodies {
        let (status, body) = send(
            build_test_app(),
            solve_request(Method::POST, Body::from(raw)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        assert_eq!(body["error"], "Problem text is required");
    }
}

#[tokio::test]
async fn e2e_bad_request_never_reaches_provider() {
    let app = app_with(Arc::new(FailingProvider), Duration::ZERO);
    let (status, _) = send(app, post_problem("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn e2e_non_post_methods_are_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let body = Body::from(json!({ "problem": "velocity" }).to_string());
        let (status, body) = send(build_test_app(), solve_request(method.clone(), body)).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn e2e_provider_failure_is_internal_error() {
    let app = app_with(Arc::new(FailingProvider), Duration::ZERO);
    let (status, body) = send(app, post_problem("velocity")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to get solution");
    assert_eq!(
        body["details"],
        "Provider unavailable: inference backend offline"
    );
}

#[tokio::test]
async fn e2e_provider_panic_is_internal_error() {
    let app = app_with(Arc::new(PanickingProvider), Duration::ZERO);
    let (status, body) = send(app, post_problem("velocity")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to get solution");
    assert_eq!(body["details"], "template exploded");
}

#[tokio::test(start_paused = true)]
async fn e2e_success_waits_for_configured_delay() {
    let app = app_with(Arc::new(TemplateProvider::new()), Duration::from_millis(1_500));
    let started = tokio::time::Instant::now();

    let (status, _) = send(app, post_problem("mass")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(1_500));
}

#[tokio::test(start_paused = true)]
async fn e2e_validation_errors_skip_delay() {
    let app = app_with(Arc::new(TemplateProvider::new()), Duration::from_secs(60));
    let started = tokio::time::Instant::now();

    let (status, _) = send(app, post_problem("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(started.elapsed() < Duration::from_secs(60));
}

#[tokio::test]
async fn e2e_404_fallback_path_returns_not_found() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(build_test_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
