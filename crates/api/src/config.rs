use launchpad_core::describe::DEFAULT_MODEL;

/// Default endpoint of the generative language API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the optional AI description client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Add the `Secure` attribute to the session cookie (default: `false`).
    pub session_cookie_secure: bool,
    /// AI description client settings; `None` when `GEMINI_API_KEY` is unset.
    pub gemini: Option<GeminiConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                     |
    /// |-------------------------|---------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                   |
    /// | `PORT`                  | `3000`                                      |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                     |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                        |
    /// | `SESSION_COOKIE_SECURE` | `false`                                     |
    /// | `GEMINI_API_KEY`        | unset (descriptions disabled)               |
    /// | `GEMINI_MODEL`          | `gemini-3-flash-preview`                    |
    /// | `GEMINI_BASE_URL`       | `https://generativelanguage.googleapis.com` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_cookie_secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        let gemini = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GeminiConfig {
                api_key,
                model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
                base_url: std::env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.into()),
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session_cookie_secure,
            gemini,
        }
    }
}
