use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://welfare.db?mode=rwc";

/// Process configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Settings {
    /// Listening port (PORT)
    pub port: u16,
    /// Store connection string (DATABASE_URL)
    pub database_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self { port, database_url }
    }
}
