use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{ContactResponse, ContactSubmission};
use crate::{state::AppState, utils::error::AppError};

pub fn contact_routes<S: AppState>() -> Router<S> {
  Router::new().route("/contact", post(submit_contact_handler::<S>))
}

pub async fn submit_contact_handler<S: AppState>(
  State(state): State<S>,
  Json(payload): Json<ContactSubmission>,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  state.submit_contact(payload).await?;

  Ok(JsonResponse(ContactResponse {
    success: true,
    message: "Message sent successfully!".to_string(),
  }))
}
