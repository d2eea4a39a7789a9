/// Recovery service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RecoveryConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3114). Env var: `RECOVERY_PORT`.
    pub recovery_port: u16,
    /// Transactional-mail API endpoint. Env var: `MAIL_API_URL`.
    pub mail_api_url: String,
    /// Mail API key. Absent means mail goes to the log (local dev).
    pub mail_api_key: Option<String>,
    /// Sender address for recovery mail. Env var: `MAIL_SENDER_EMAIL`.
    pub mail_sender_email: Option<String>,
}

const DEFAULT_MAIL_API_URL: &str = "https://api.brevo.com/v3/smtp/email";

impl RecoveryConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            recovery_port: std::env::var("RECOVERY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            mail_api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| DEFAULT_MAIL_API_URL.to_owned()),
            mail_api_key: std::env::var("MAIL_API_KEY").ok(),
            mail_sender_email: std::env::var("MAIL_SENDER_EMAIL").ok(),
        }
    }
}
