use std::str::FromStr;
use std::time::Duration;

use scriptpad_cache::CacheConfig;

use crate::auth::jwt::JwtConfig;

/// Which [`ScriptStore`](scriptpad_db::ScriptStore) backend the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// In-process, lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// Store backend (default: `postgres`).
    pub store_backend: StoreBackend,
    /// PostgreSQL URL; required when `store_backend` is `postgres`.
    pub database_url: Option<String>,
    /// Cache capacity and entry lifetime.
    pub cache: CacheConfig,
    /// Identity-provider token verification.
    pub jwt: JwtConfig,
    /// Identity-provider login page.
    pub login_url: String,
    /// Identity-provider logout page.
    pub logout_url: String,
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
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | --                         |
    /// | `CACHE_TTL_SECS`       | `60`                       |
    /// | `CACHE_MAX_CAPACITY`   | `10000`                    |
    /// | `AUTH_LOGIN_URL`       | `/auth/login`              |
    /// | `AUTH_LOGOUT_URL`      | `/auth/logout`             |
    ///
    /// # Panics
    ///
    /// Panics on unparseable values, when `JWT_SECRET` is missing, or when
    /// the postgres backend is selected without `DATABASE_URL`.
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

        let store_backend: StoreBackend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".into())
            .parse()
            .unwrap_or_else(|e| panic!("STORE_BACKEND: {e}"));

        let database_url = std::env::var("DATABASE_URL").ok();
        assert!(
            store_backend != StoreBackend::Postgres || database_url.is_some(),
            "DATABASE_URL must be set when STORE_BACKEND=postgres"
        );

        let cache_ttl_secs: u64 = std::env::var("CACHE_TTL_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("CACHE_TTL_SECS must be a valid u64");

        let cache_max_capacity: u64 = std::env::var("CACHE_MAX_CAPACITY")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .expect("CACHE_MAX_CAPACITY must be a valid u64");

        let cache = CacheConfig::default()
            .max_capacity(cache_max_capacity)
            .ttl(Duration::from_secs(cache_ttl_secs));

        let jwt = JwtConfig::from_env();

        let login_url = std::env::var("AUTH_LOGIN_URL").unwrap_or_else(|_| "/auth/login".into());
        let logout_url =
            std::env::var("AUTH_LOGOUT_URL").unwrap_or_else(|_| "/auth/logout".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_backend,
            database_url,
            cache,
            jwt,
            login_url,
            logout_url,
        }
    }
}
