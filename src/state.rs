use std::sync::Arc;

use crate::{
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
  email::EmailService,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    submission: ContactSubmission,
  ) -> impl std::future::Future<Output = Result<(), ContactServiceError>> + Send;
  fn open_resume(&self) -> impl std::future::Future<Output = Result<ResumeFile, ResumeServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<ContactServiceImpl<EmailService>>,
  pub resume_service: Arc<ResumeServiceImpl>,
}

impl SharedAppState {
  pub fn new(email_service: EmailService, contact_config: ContactConfig, resume_service: ResumeServiceImpl) -> Self {
    let contact_service = Arc::new(ContactServiceImpl::new(email_service, contact_config));

    Self {
      contact_service,
      resume_service: Arc::new(resume_service),
    }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    self.contact_service.submit(submission).await
  }

  async fn open_resume(&self) -> Result<ResumeFile, ResumeServiceError> {
    self.resume_service.open().await
  }
}
