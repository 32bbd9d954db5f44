use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "success": false,
      "message": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::contact::service::ContactServiceError> for AppError {
  fn from(error: crate::domains::contact::service::ContactServiceError) -> Self {
    use crate::domains::contact::service::ContactServiceError;
    match error {
      ContactServiceError::ValidationError(msg) => AppError::bad_request(msg),
      ContactServiceError::RelayError(msg) => {
        tracing::error!("Email Error: {}", msg);
        AppError::internal_server_error(msg)
      }
    }
  }
}

impl From<crate::domains::resume::service::ResumeServiceError> for AppError {
  fn from(error: crate::domains::resume::service::ResumeServiceError) -> Self {
    use crate::domains::resume::service::ResumeServiceError;
    match error {
      ResumeServiceError::NotFound(msg) => AppError::not_found(msg),
      ResumeServiceError::InternalServerError(msg) => {
        tracing::error!("Resume delivery error: {}", msg);
        AppError::internal_server_error(msg)
      }
    }
  }
}
