use tokio::fs::File;

pub const RESUME_CONTENT_TYPE: &str = "application/pdf";

/// Browser download-vs-inline behavior for the served file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
  Attachment,
  Inline,
}

impl Disposition {
  pub fn header_value(self, filename: &str) -> String {
    match self {
      Disposition::Attachment => format!("attachment; filename=\"{}\"", filename),
      Disposition::Inline => format!("inline; filename=\"{}\"", filename),
    }
  }
}

/// An opened resume file, ready to stream. Holding one means the existence
/// check already passed and response headers may be committed.
pub struct ResumeFile {
  pub file: File,
  pub filename: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn attachment_disposition_forces_download() {
    assert_eq!(
      Disposition::Attachment.header_value("resume.pdf"),
      "attachment; filename=\"resume.pdf\""
    );
  }

  #[test]
  fn inline_disposition_renders_in_browser() {
    assert_eq!(
      Disposition::Inline.header_value("resume.pdf"),
      "inline; filename=\"resume.pdf\""
    );
  }
}
