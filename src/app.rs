use axum::{
  http::StatusCode,
  response::{IntoResponse, Json, Response},
  routing::{get, Router},
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir};

use crate::{
  domains::{contact::rest::contact_routes, resume::rest::resume_routes},
  state::AppState,
};

pub fn create_app<S: AppState>(state: S) -> Router {
  Router::new()
    .route("/", get(service_info_handler))
    .nest("/api", contact_routes().merge(resume_routes()))
    .fallback_service(ServeDir::new("public"))
    .layer(CorsLayer::permissive())
    .layer(CatchPanicLayer::custom(handle_panic))
    .with_state(state)
}

pub async fn service_info_handler() -> Json<serde_json::Value> {
  Json(json!({
    "status": "Backend is running",
    "endpoints": {
      "contact": "POST /api/contact",
      "resumeDownload": "GET /api/resume/download",
      "resumePreview": "GET /api/resume/preview"
    }
  }))
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    (*s).to_string()
  } else {
    "unknown panic".to_string()
  };

  tracing::error!("Unhandled error: {}", detail);

  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(json!({ "success": false, "message": "Server error" })),
  )
    .into_response()
}
