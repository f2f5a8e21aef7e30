//! Server configuration from environment variables.

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
}

impl Config {
    /// Reads configuration from the environment, loading a `.env` file
    /// first if present. Missing variables fall back to local defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr =
            std::env::var("CENTIME_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8420".to_string());
        let db_path =
            std::env::var("CENTIME_DB_PATH").unwrap_or_else(|_| "centime.db".to_string());
        Self {
            listen_addr,
            db_path,
        }
    }
}
