use sea_orm::Database;
use tracing::{info, warn};

use wardline_core::tracing::init_tracing;
use wardline_recovery::config::RecoveryConfig;
use wardline_recovery::infra::hasher::ArgonHasher;
use wardline_recovery::infra::mailer::{ApiMailer, Mailer};
use wardline_recovery::router::build_router;
use wardline_recovery::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = RecoveryConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = match (&config.mail_api_key, &config.mail_sender_email) {
        (Some(key), Some(sender)) => Mailer::Api(ApiMailer::new(
            config.mail_api_url.clone(),
            key.clone(),
            sender.clone(),
        )),
        _ => {
            warn!("MAIL_API_KEY / MAIL_SENDER_EMAIL not set; mail goes to the log");
            Mailer::Log
        }
    };

    let state = AppState {
        db,
        hasher: ArgonHasher::default(),
        mailer,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.recovery_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("recovery service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
