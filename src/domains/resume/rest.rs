use axum::{
  body::Body,
  extract::State,
  http::header,
  response::{IntoResponse, Response},
  routing::{get, Router},
};
use futures::TryStreamExt;
use tokio_util::io::ReaderStream;

use super::model::{Disposition, ResumeFile, RESUME_CONTENT_TYPE};
use crate::{state::AppState, utils::error::AppError};

pub fn resume_routes<S: AppState>() -> Router<S> {
  Router::new()
    .route("/resume/download", get(download_resume_handler::<S>))
    .route("/resume/preview", get(preview_resume_handler::<S>))
}

pub async fn download_resume_handler<S: AppState>(State(state): State<S>) -> Result<Response, AppError> {
  let resume = state.open_resume().await?;
  Ok(stream_resume(resume, Disposition::Attachment))
}

pub async fn preview_resume_handler<S: AppState>(State(state): State<S>) -> Result<Response, AppError> {
  let resume = state.open_resume().await?;
  Ok(stream_resume(resume, Disposition::Inline))
}

/// Commits headers and hands the open file over to the response body.
/// From this point a read failure can only be logged and the stream
/// aborted; the status code is already on the wire.
fn stream_resume(resume: ResumeFile, disposition: Disposition) -> Response {
  let stream = ReaderStream::new(resume.file).inspect_err(|err| tracing::error!("Resume streaming error: {}", err));

  (
    [
      (header::CONTENT_TYPE, RESUME_CONTENT_TYPE.to_string()),
      (header::CONTENT_DISPOSITION, disposition.header_value(&resume.filename)),
    ],
    Body::from_stream(stream),
  )
    .into_response()
}
