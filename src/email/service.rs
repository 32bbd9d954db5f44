use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType,
  transport::smtp::{authentication::Credentials, PoolConfig},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::email::types::{RelayPolicy, SmtpConfig};

/// Delivers one HTML-formatted message to one recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send_html_email(&self, to: &str, subject: &str, html_body: &str) -> Result<()>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  policy: RelayPolicy,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
  recent_sends: Mutex<VecDeque<Instant>>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    Self::with_policy(smtp_config, RelayPolicy::default())
  }

  pub fn with_policy(smtp_config: SmtpConfig, policy: RelayPolicy) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());
    let pool_config = PoolConfig::new().max_size(policy.max_connections);

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .pool_config(pool_config)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .pool_config(pool_config)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      policy,
      transporter,
      recent_sends: Mutex::new(VecDeque::new()),
    })
  }

  /// Admission gate for the send-rate cap. A send past the cap waits until
  /// the oldest entry falls out of the window instead of failing, so bursts
  /// queue the same way concurrent sends queue on the single pooled
  /// connection.
  async fn admit(&self) {
    loop {
      let wait = {
        let mut recent = self.recent_sends.lock().await;
        let now = Instant::now();
        while recent.front().is_some_and(|sent| now.duration_since(*sent) >= self.policy.window) {
          recent.pop_front();
        }
        if recent.len() < self.policy.max_messages_per_window {
          recent.push_back(now);
          return;
        }
        self.policy.window - now.duration_since(recent[0])
      };

      tokio::time::sleep(wait).await;
    }
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send_html_email(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
    self.admit().await;

    let email = Message::builder()
      .from(self.smtp_config.from_email.parse()?)
      .to(to.parse()?)
      .subject(subject)
      .header(ContentType::TEXT_HTML)
      .body(html_body.to_string())?;

    self.transporter.send(email).await?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  fn test_smtp_config(host: &str, port: u16) -> SmtpConfig {
    SmtpConfig {
      host: host.to_string(),
      port,
      username: "test_user".to_string(),
      password: "test_password".to_string(),
      from_email: "test@example.com".to_string(),
    }
  }

  #[tokio::test]
  async fn test_email_service_new_with_localhost_smtp() -> Result<()> {
    let email_service = EmailService::new(test_smtp_config("localhost", 1025))?;
    assert_eq!(email_service.smtp_config.host, "localhost");
    assert_eq!(email_service.smtp_config.port, 1025);

    Ok(())
  }

  #[tokio::test]
  async fn test_email_service_new_with_remote_smtp() -> Result<()> {
    let email_service = EmailService::new(test_smtp_config("smtp.example.com", 587))?;
    assert_eq!(email_service.smtp_config.host, "smtp.example.com");
    assert_eq!(email_service.smtp_config.port, 587);
    assert_eq!(email_service.policy.max_connections, 1);
    assert_eq!(email_service.policy.max_messages_per_window, 5);

    Ok(())
  }

  #[tokio::test(start_paused = true)]
  async fn admit_passes_sends_under_the_window_cap() -> Result<()> {
    let service = EmailService::new(test_smtp_config("localhost", 1025))?;

    let start = Instant::now();
    for _ in 0..5 {
      service.admit().await;
    }
    assert!(start.elapsed() < Duration::from_secs(1));

    Ok(())
  }

  #[tokio::test(start_paused = true)]
  async fn admit_defers_sends_past_the_window_cap() -> Result<()> {
    let policy = RelayPolicy {
      max_connections: 1,
      max_messages_per_window: 2,
      window: Duration::from_secs(600),
    };
    let service = EmailService::with_policy(test_smtp_config("localhost", 1025), policy)?;

    let start = Instant::now();
    service.admit().await;
    service.admit().await;
    assert!(start.elapsed() < Duration::from_secs(1));

    service.admit().await;
    assert!(start.elapsed() >= Duration::from_secs(600));

    Ok(())
  }

  #[tokio::test(start_paused = true)]
  async fn admit_reopens_the_window_after_old_sends_expire() -> Result<()> {
    let policy = RelayPolicy {
      max_connections: 1,
      max_messages_per_window: 1,
      window: Duration::from_secs(600),
    };
    let service = EmailService::with_policy(test_smtp_config("localhost", 1025), policy)?;

    service.admit().await;
    tokio::time::sleep(Duration::from_secs(601)).await;

    let start = Instant::now();
    service.admit().await;
    assert!(start.elapsed() < Duration::from_secs(1));

    Ok(())
  }
}
