use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

/// Transport policy for the pooled relay session, fixed at process start.
///
/// `max_connections` is handed to lettre's pool; the send-rate window is
/// enforced by the service itself since lettre's pool has no rate cap.
#[derive(Debug, Clone)]
pub struct RelayPolicy {
  pub max_connections: u32,
  pub max_messages_per_window: usize,
  pub window: Duration,
}

impl Default for RelayPolicy {
  fn default() -> Self {
    RelayPolicy {
      max_connections: 1,
      max_messages_per_window: 5,
      window: Duration::from_secs(10 * 60),
    }
  }
}
