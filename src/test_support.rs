use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::{
    contact::{
      model::{ContactConfig, ContactSubmission},
      service::{ContactService, ContactServiceError, ContactServiceImpl},
    },
    resume::{
      model::ResumeFile,
      service::{ResumeService, ResumeServiceError, ResumeServiceImpl},
    },
  },
  email::Mailer,
  state::AppState,
};

#[derive(Debug, Clone)]
pub struct SentEmail {
  pub to: String,
  pub subject: String,
  pub html_body: String,
}

/// Mailer double that records every attempted send. `failing_on(n)` makes
/// the n-th attempt (zero-based) error after it has been recorded.
#[derive(Clone, Default)]
pub struct RecordingMailer {
  attempts: Arc<Mutex<Vec<SentEmail>>>,
  fail_on: Option<usize>,
}

impl RecordingMailer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing_on(attempt: usize) -> Self {
    Self {
      attempts: Arc::default(),
      fail_on: Some(attempt),
    }
  }

  pub fn attempts(&self) -> Vec<SentEmail> {
    self.attempts.lock().expect("lock attempts").clone()
  }
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send_html_email(&self, to: &str, subject: &str, html_body: &str) -> anyhow::Result<()> {
    let attempt = {
      let mut attempts = self.attempts.lock().expect("lock attempts");
      attempts.push(SentEmail {
        to: to.to_string(),
        subject: subject.to_string(),
        html_body: html_body.to_string(),
      });
      attempts.len() - 1
    };

    if self.fail_on == Some(attempt) {
      anyhow::bail!("relay rejected message");
    }

    Ok(())
  }
}

#[derive(Clone)]
pub struct TestState {
  contact_service: Arc<ContactServiceImpl<RecordingMailer>>,
  resume_service: Arc<ResumeServiceImpl>,
}

impl AppState for TestState {
  async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    self.contact_service.submit(submission).await
  }

  async fn open_resume(&self) -> Result<ResumeFile, ResumeServiceError> {
    self.resume_service.open().await
  }
}

pub fn test_contact_config() -> ContactConfig {
  ContactConfig {
    owner_email: "owner@example.com".to_string(),
    owner_name: "Portfolio Owner".to_string(),
    portfolio_url: "https://portfolio.example.com".to_string(),
  }
}

pub fn app_with_mailer(mailer: RecordingMailer, resume_path: &Path) -> Router {
  let state = TestState {
    contact_service: Arc::new(ContactServiceImpl::new(mailer, test_contact_config())),
    resume_service: Arc::new(ResumeServiceImpl::new(resume_path.to_path_buf())),
  };

  create_app(state)
}

pub fn submission(
  name: Option<&str>,
  email: Option<&str>,
  subject: Option<&str>,
  message: Option<&str>,
) -> ContactSubmission {
  ContactSubmission {
    name: name.map(str::to_string),
    email: email.map(str::to_string),
    subject: subject.map(str::to_string),
    message: message.map(str::to_string),
  }
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder().uri(uri).body(Body::empty()).expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}
