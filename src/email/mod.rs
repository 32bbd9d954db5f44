//! Outbound mail relay module
//!
//! Wraps lettre's pooled async SMTP transport behind a small trait seam so
//! request handling can be exercised without a live relay session.

mod service;
mod types;

pub use service::{EmailService, Mailer};
pub use types::{RelayPolicy, SmtpConfig};
