use axum::{
  body::Body,
  http::{self, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt; // for `app.oneshot()`

use portfolio_api::{
  app::create_app,
  domains::{contact::model::ContactConfig, resume::service::ResumeServiceImpl},
  email::{EmailService, SmtpConfig},
  state::SharedAppState,
};

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

#[tokio::test]
async fn root_route_describes_the_available_endpoints() {
  let app = test_app();

  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);

  let body = response.into_body().collect().await.unwrap().to_bytes();
  let info: serde_json::Value = serde_json::from_slice(&body).unwrap();

  assert_eq!(info["status"], "Backend is running");
  assert_eq!(info["endpoints"]["contact"], "POST /api/contact");
  assert_eq!(info["endpoints"]["resumeDownload"], "GET /api/resume/download");
  assert_eq!(info["endpoints"]["resumePreview"], "GET /api/resume/preview");
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
  let app = test_app();

  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
