//! Server configuration for the Mercado REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MERCADO_PORT` | 3000 | Server port |
//! | `MERCADO_HOST` | 127.0.0.1 | Host to bind |
//! | `MERCADO_LOG_LEVEL` | info | Log level |
//! | `MERCADO_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `MERCADO_ENABLE_CORS` | true | Enable CORS |
//! | `MERCADO_CORS_ORIGINS` | * | Allowed origins |
//! | `MERCADO_BASE_URL` | http://localhost:3000 | Server base URL |
//! | `MERCADO_DEFAULT_PAGE_SIZE` | 10 | Default listing page size |
//! | `MERCADO_MAX_PAGE_SIZE` | 100 | Maximum listing page size |
//! | `MERCADO_STRICT_FORMATS` | false | Reject unknown `format` values with 406 |
//! | `MERCADO_AUTH_USER` | admin | Demo login user |
//! | `MERCADO_AUTH_PASS` | secret | Demo login password |
//! | `MERCADO_AUTH_SECRET` | (demo) | JWT signing secret |
//! | `MERCADO_TOKEN_TTL` | 7200 | Token lifetime (seconds) |
//! | `MERCADO_SEED_DEMO` | true | Seed the demo catalog on startup |
//!
//! # Example
//!
//! ```rust
//! use mercado_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 8080,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the Mercado REST API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "mercado")]
#[command(about = "Versioned RESTful product API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "MERCADO_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "MERCADO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "MERCADO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "MERCADO_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "MERCADO_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "MERCADO_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "MERCADO_CORS_METHODS",
        default_value = "GET,POST,PUT,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "MERCADO_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept,API-Version,Accept-Version"
    )]
    pub cors_headers: String,

    /// Base URL for the server (used in log output and HTML links).
    #[arg(long, env = "MERCADO_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Default page size for product listings.
    #[arg(long, env = "MERCADO_DEFAULT_PAGE_SIZE", default_value = "10")]
    pub default_page_size: u64,

    /// Maximum page size for product listings.
    #[arg(long, env = "MERCADO_MAX_PAGE_SIZE", default_value = "100")]
    pub max_page_size: u64,

    /// Reject unknown `format` query values with 406 instead of falling
    /// back to JSON.
    #[arg(long, env = "MERCADO_STRICT_FORMATS", default_value = "false")]
    pub strict_formats: bool,

    /// Demo login user accepted by `POST /auth/login`.
    #[arg(long, env = "MERCADO_AUTH_USER", default_value = "admin")]
    pub auth_user: String,

    /// Demo login password accepted by `POST /auth/login`.
    #[arg(long, env = "MERCADO_AUTH_PASS", default_value = "secret")]
    pub auth_pass: String,

    /// Secret used to sign and verify bearer tokens.
    #[arg(
        long,
        env = "MERCADO_AUTH_SECRET",
        default_value = "MI_SECRETO_SUPER_SEGURO"
    )]
    pub auth_secret: String,

    /// Bearer token lifetime in seconds.
    #[arg(long, env = "MERCADO_TOKEN_TTL", default_value = "7200")]
    pub token_ttl_secs: u64,

    /// Seed the in-memory store with the demo catalog on startup.
    #[arg(long, env = "MERCADO_SEED_DEMO", default_value = "true")]
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept,API-Version,Accept-Version"
                .to_string(),
            base_url: "http://localhost:3000".to_string(),
            default_page_size: 10,
            max_page_size: 100,
            strict_formats: false,
            auth_user: "admin".to_string(),
            auth_pass: "secret".to_string(),
            auth_secret: "MI_SECRETO_SUPER_SEGURO".to_string(),
            token_ttl_secs: 7200,
            seed_demo: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables
    /// without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.auth_secret.is_empty() {
            errors.push("Auth secret cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:0".to_string(),
            default_page_size: 10,
            max_page_size: 100,
            strict_formats: false,
            auth_user: "admin".to_string(),
            auth_pass: "secret".to_string(),
            auth_secret: "secreto-de-pruebas".to_string(),
            token_ttl_secs: 120,
            seed_demo: false,
        }
    }
}
