mod db;
mod mail;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Mail is non-fatal: OTP requests answer 503 until it is configured.
    let mailer = match mail::config::MailConfig::from_env() {
        Ok(config) => {
            tracing::info!(provider = config.provider_name(), from = %config.from_address, "mail transport initialized");
            Some(state::Mailer { transport: mail::transport_from_config(&config), sender: config.sender() })
        }
        Err(e) => {
            tracing::warn!(error = %e, "mail not configured; email verification disabled");
            None
        }
    };

    let state = state::AppState::new(pool, mailer);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "styleshare listening");
    axum::serve(listener, app).await.expect("server failed");
}
