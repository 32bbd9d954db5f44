use std::error::Error;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::File;

use super::model::ResumeFile;

const DEFAULT_DOWNLOAD_NAME: &str = "resume.pdf";

#[derive(Debug)]
pub enum ResumeServiceError {
  NotFound(String),
  InternalServerError(String),
}

impl Error for ResumeServiceError {}

impl std::fmt::Display for ResumeServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ResumeServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
      ResumeServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait ResumeService: Send + Sync {
  async fn open(&self) -> Result<ResumeFile, ResumeServiceError>;
}

/// Serves one fixed, pre-existing file from local storage. The file is
/// read-only; nothing here writes or mutates it.
pub struct ResumeServiceImpl {
  path: PathBuf,
  download_name: String,
}

impl ResumeServiceImpl {
  pub fn new(path: PathBuf) -> Self {
    let download_name = path
      .file_name()
      .and_then(|name| name.to_str())
      .unwrap_or(DEFAULT_DOWNLOAD_NAME)
      .to_string();

    Self { path, download_name }
  }
}

#[async_trait]
impl ResumeService for ResumeServiceImpl {
  async fn open(&self) -> Result<ResumeFile, ResumeServiceError> {
    match File::open(&self.path).await {
      Ok(file) => Ok(ResumeFile {
        file,
        filename: self.download_name.clone(),
      }),
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        Err(ResumeServiceError::NotFound("Resume file not found".to_string()))
      }
      Err(e) => Err(ResumeServiceError::InternalServerError(format!("Server error: {}", e))),
    }
  }
}
