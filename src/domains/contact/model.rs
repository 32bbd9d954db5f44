use serde::{Deserialize, Serialize};
use validator::Validate;

/// One contact-form payload. Never persisted; it lives for a single
/// request/response cycle.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContactSubmission {
  #[validate(required, length(min = 1))]
  pub name: Option<String>,
  #[validate(required, length(min = 1))]
  pub email: Option<String>,
  pub subject: Option<String>,
  #[validate(required, length(min = 1))]
  pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactResponse {
  pub success: bool,
  pub message: String,
}

/// Owner-side identity used in outgoing mail, fixed at process start.
#[derive(Debug, Clone)]
pub struct ContactConfig {
  pub owner_email: String,
  pub owner_name: String,
  pub portfolio_url: String,
}
