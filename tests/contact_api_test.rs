use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use portfolio_api::{
  app::create_app,
  domains::{contact::model::ContactConfig, resume::service::ResumeServiceImpl},
  email::{EmailService, SmtpConfig},
  state::SharedAppState,
};

/// App wired to an unreachable relay: validation runs for real, and any
/// submission that gets past it fails at the transport.
fn test_app() -> axum::Router {
  let smtp_config = SmtpConfig {
    host: "localhost".to_string(),
    port: 1,
    username: "test".to_string(),
    password: "test".to_string(),
    from_email: "noreply@example.com".to_string(),
  };
  let email_service = EmailService::new(smtp_config).expect("email service");
  let contact_config = ContactConfig {
    owner_email: "owner@example.com".to_string(),
    owner_name: "Portfolio Owner".to_string(),
    portfolio_url: "https://portfolio.example.com".to_string(),
  };
  let resume_service = ResumeServiceImpl::new("missing-resume.pdf".into());

  create_app(SharedAppState::new(email_service, contact_config, resume_service))
}

async fn post_contact(app: axum::Router, payload: serde_json::Value) -> (StatusCode, serde_json::Value) {
  let response = app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap(),
    )
    .await
    .unwrap();

  let status = response.status();
  let body = response.into_body().collect().await.unwrap().to_bytes();
  (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn missing_required_fields_are_rejected() {
  let (status, body) = post_contact(test_app(), json!({ "name": "A" })).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["success"], false);
  assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn empty_required_fields_are_rejected() {
  let (status, body) = post_contact(
    test_app(),
    json!({ "name": "A", "email": "a@x.com", "message": "" }),
  )
  .await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn relay_failure_maps_to_internal_error_with_detail() {
  let (status, body) = post_contact(
    test_app(),
    json!({ "name": "A", "email": "a@x.com", "message": "hi" }),
  )
  .await;

  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body["success"], false);

  let message = body["message"].as_str().unwrap();
  assert!(message.starts_with("Failed to send email: "), "unexpected message: {message}");
}
