use tokio::signal;

use dotenvy::dotenv;

use portfolio_api::app::create_app;
use portfolio_api::state::SharedAppState;
use portfolio_api::utils::{init_contact_config, init_email_service, init_resume_service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let email_service = init_email_service()?;
  let contact_config = init_contact_config()?;
  let resume_service = init_resume_service();

  let app_state = SharedAppState::new(email_service, contact_config, resume_service);
  let app = create_app(app_state);

  let port: u16 = std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
  let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

  println!("Server running on http://0.0.0.0:{}", port);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
