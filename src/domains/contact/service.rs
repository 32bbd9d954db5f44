use async_trait::async_trait;
use std::error::Error;
use validator::Validate;

use super::model::{ContactConfig, ContactSubmission};
use crate::{
  email::Mailer,
  utils::{html_escape, html_line_breaks},
};

const MISSING_FIELDS: &str = "Missing required fields";
const ACKNOWLEDGMENT_SUBJECT: &str = "Thank you for contacting me";

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  RelayError(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::RelayError(msg) => write!(f, "Relay Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactServiceError>;
}

pub struct ContactServiceImpl<M> {
  mailer: M,
  config: ContactConfig,
}

impl<M> ContactServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M, config: ContactConfig) -> Self {
    Self { mailer, config }
  }
}

#[async_trait]
impl<M> ContactService for ContactServiceImpl<M>
where
  M: Mailer,
{
  async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    submission
      .validate()
      .map_err(|_| ContactServiceError::ValidationError(MISSING_FIELDS.to_string()))?;

    let (Some(name), Some(email), Some(message)) = (&submission.name, &submission.email, &submission.message) else {
      return Err(ContactServiceError::ValidationError(MISSING_FIELDS.to_string()));
    };
    // An empty subject behaves the same as an absent one.
    let subject = submission.subject.as_deref().filter(|s| !s.is_empty());

    let owner_subject = format!("New Contact from Portfolio: {}", subject.unwrap_or("No subject"));
    let owner_body = owner_notification_body(name, email, subject, message);
    self
      .mailer
      .send_html_email(&self.config.owner_email, &owner_subject, &owner_body)
      .await
      .map_err(|e| ContactServiceError::RelayError(format!("Failed to send email: {}", e)))?;

    // The acknowledgment is only attempted once the owner notification went
    // through; a relay failure above returns without a second send.
    let acknowledgment_body = sender_acknowledgment_body(name, subject, message, &self.config);
    self
      .mailer
      .send_html_email(email, ACKNOWLEDGMENT_SUBJECT, &acknowledgment_body)
      .await
      .map_err(|e| ContactServiceError::RelayError(format!("Failed to send email: {}", e)))?;

    tracing::info!("Contact submission from {} relayed", email);

    Ok(())
  }
}

fn owner_notification_body(name: &str, email: &str, subject: Option<&str>, message: &str) -> String {
  format!(
    "<h2>New Contact from Portfolio</h2>\
     <p><b>Name / Company:</b> {}</p>\
     <p><b>Email:</b> {}</p>\
     <p><b>Subject:</b> {}</p>\
     <p><b>Message:</b><br>{}</p>\
     <hr>\
     <p style=\"color: #666; font-size: 12px;\">Sent from your portfolio contact form</p>",
    html_escape(name),
    html_escape(email),
    html_escape(subject.unwrap_or("No subject")),
    html_line_breaks(message)
  )
}

fn sender_acknowledgment_body(name: &str, subject: Option<&str>, message: &str, config: &ContactConfig) -> String {
  format!(
    "<p>Hi {},</p>\
     <p>Thank you for contacting me regarding <b>{}</b>. I have successfully received your message.</p>\
     <p>I appreciate your interest and will review your message carefully. \
     I will respond at the earliest possible time.</p>\
     <h3>Your Message</h3>\
     <div style=\"background-color:#f5f5f5; padding:15px; border-radius:6px;\"><p>{}</p></div>\
     <hr>\
     <p>Best regards,<br><b>{}</b></p>\
     <p style=\"color:#666; font-size:12px;\">My Portfolio: {}</p>",
    html_escape(name),
    html_escape(subject.unwrap_or("your opportunity")),
    html_line_breaks(message),
    html_escape(&config.owner_name),
    html_escape(&config.portfolio_url)
  )
}
