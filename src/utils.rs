use std::env;
use std::path::PathBuf;

use anyhow::Context;

pub mod error;

use crate::{
  domains::{contact::model::ContactConfig, resume::service::ResumeServiceImpl},
  email::{EmailService, SmtpConfig},
};

/// Escape text destined for an HTML email body.
pub fn html_escape(input: &str) -> String {
  let mut escaped = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

/// Escape text and render newlines as `<br>` so multi-line form input keeps
/// its line structure in HTML output.
pub fn html_line_breaks(input: &str) -> String {
  html_escape(input).replace('\n', "<br>")
}

pub fn init_email_service() -> anyhow::Result<EmailService> {
  let smtp_config = SmtpConfig {
    host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
    port: env::var("SMTP_PORT")
      .unwrap_or_else(|_| "587".to_string())
      .parse()
      .unwrap_or(587),
    username: env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?,
    password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?,
    from_email: env::var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL not set")?,
  };

  EmailService::new(smtp_config)
}

pub fn init_contact_config() -> anyhow::Result<ContactConfig> {
  Ok(ContactConfig {
    owner_email: env::var("OWNER_EMAIL").context("OWNER_EMAIL not set")?,
    owner_name: env::var("OWNER_NAME").unwrap_or_else(|_| "Portfolio Owner".to_string()),
    portfolio_url: env::var("PORTFOLIO_URL").unwrap_or_else(|_| "https://portfolio.example.com".to_string()),
  })
}

pub fn init_resume_service() -> ResumeServiceImpl {
  let path = env::var("RESUME_PATH").unwrap_or_else(|_| "public/resume.pdf".to_string());
  ResumeServiceImpl::new(PathBuf::from(path))
}
