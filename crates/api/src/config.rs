use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `1339`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for paths no route matches (default: `public`).
    pub static_dir: PathBuf,
    /// Session lifetime in seconds. `None` issues sessions that never
    /// expire in practice.
    pub session_ttl_secs: Option<i64>,
    /// Upper bound on pooled database connections (default: `5`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `1339`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:1339`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `public`                   |
    /// | `SESSION_TTL_SECS`     | unset                      |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "1339".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:1339".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = PathBuf::from(
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()),
        );

        let session_ttl_secs: Option<i64> = std::env::var("SESSION_TTL_SECS")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                let secs: i64 = s
                    .trim()
                    .parse()
                    .expect("SESSION_TTL_SECS must be a valid i64");
                chrono::Duration::try_seconds(secs)
                    .expect("SESSION_TTL_SECS is out of range for a duration");
                secs
            });

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            session_ttl_secs,
            db_max_connections,
        }
    }

    /// Session lifetime as a `chrono` duration, if configured.
    pub fn session_ttl(&self) -> Option<chrono::Duration> {
        self.session_ttl_secs.and_then(chrono::Duration::try_seconds)
    }
}
