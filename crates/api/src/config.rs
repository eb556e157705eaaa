use investo_db::RemoteConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
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
    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
    /// Remote database credentials, if any.
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOG_FORMAT`           | `text` (`json` to switch)  |
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

        let log_json = std::env::var("LOG_FORMAT")
            .map(|v| is_json_log_format(&v))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_json,
            backend: BackendConfig::from_env(),
        }
    }
}

/// Remote database credentials.
///
/// Both values must be present for the remote backend to be used; otherwise
/// the in-memory store takes over.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    /// `SUPABASE_URL` (or `VITE_SUPABASE_URL`).
    pub url: Option<String>,
    /// `SUPABASE_ANON_KEY` (or `VITE_SUPABASE_ANON_KEY`).
    pub api_key: Option<String>,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self {
            url: first_env(&["SUPABASE_URL", "VITE_SUPABASE_URL"]),
            api_key: first_env(&["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"]),
        }
    }

    /// Remote connection settings, or `None` if either value is missing or blank.
    pub fn remote(&self) -> Option<RemoteConfig> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some(RemoteConfig {
            url: url.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

/// `LOG_FORMAT=json` (any case) selects JSON logs.
fn is_json_log_format(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("json")
}

/// Value of the first set variable among `names`.
fn first_env(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| std::env::var(name).ok())
}
