//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8081`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `APP_FRONTEND_ORIGIN` — where completed logins redirect
///   (default: `"http://localhost:3000"`)
/// - `APP_CORS_ORIGINS` — comma-separated allowed origins, or `"*"`
/// - `APP_JWT_SECRET` — HS256 signing secret; empty means a random
///   per-process key
/// - `APP_JWT_TTL_MS` — session lifetime in milliseconds (default: 30 days)
/// - `APP_COOKIE_SECURE` — `true` to set the `Secure` flag on session cookies
/// - `APP_OAUTH_GOOGLE_CLIENT_ID` / `APP_OAUTH_GOOGLE_CLIENT_SECRET` —
///   Google OAuth2 credentials; login routes answer 404 while unset
/// - `APP_PUBLIC_BASE_URL` — externally visible base URL the OAuth2
///   callback is derived from (default: `"http://localhost:8081"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub frontend_origin: String,
    pub cors_origins: Vec<String>,
    pub jwt_secret: String,
    pub jwt_ttl_ms: i64,
    pub cookie_secure: bool,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub public_base_url: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            frontend_origin: std::env::var("APP_FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            cors_origins: std::env::var("APP_CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| default_cors_origins()),
            jwt_secret: std::env::var("APP_JWT_SECRET").unwrap_or_default(),
            jwt_ttl_ms: std::env::var("APP_JWT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_592_000_000),
            cookie_secure: std::env::var("APP_COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            google_client_id: std::env::var("APP_OAUTH_GOOGLE_CLIENT_ID").unwrap_or_default(),
            google_client_secret: std::env::var("APP_OAUTH_GOOGLE_CLIENT_SECRET")
                .unwrap_or_default(),
            public_base_url: std::env::var("APP_PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the OAuth2 callback URL registered with Google.
    pub fn redirect_uri(&self) -> String {
        format!(
            "{}/login/oauth2/code/google",
            self.public_base_url.trim_end_matches('/')
        )
    }

    /// True when both Google client credentials are configured.
    pub fn google_enabled(&self) -> bool {
        !self.google_client_id.is_empty() && !self.google_client_secret.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            log_level: "info".to_string(),
            frontend_origin: "http://localhost:3000".to_string(),
            cors_origins: default_cors_origins(),
            jwt_secret: String::new(),
            jwt_ttl_ms: 2_592_000_000,
            cookie_secure: false,
            google_client_id: String::new(),
            google_client_secret: String::new(),
            public_base_url: "http://localhost:8081".to_string(),
        }
    }
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://monastery360.vercel.app".to_string(),
    ]
}

/// Splits a comma-separated origin list, dropping blank entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.frontend_origin, "http://localhost:3000");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://monastery360.vercel.app"]
        );
        assert_eq!(config.jwt_ttl_ms, 2_592_000_000);
        assert!(!config.cookie_secure);
        assert!(!config.google_enabled());
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_addr_default() {
        let config = Config::default();
        assert_eq!(config.addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_redirect_uri_from_base_url() {
        let config = Config::default();
        assert_eq!(
            config.redirect_uri(),
            "http://localhost:8081/login/oauth2/code/google"
        );

        let trailing = Config {
            public_base_url: "https://api.monastery360.org/".to_string(),
            ..Config::default()
        };
        assert_eq!(
            trailing.redirect_uri(),
            "https://api.monastery360.org/login/oauth2/code/google"
        );
    }

    #[test]
    fn test_origin_list_parsing() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://example.org ,,"),
            vec!["http://localhost:3000", "https://example.org"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert!(parse_origins("  ").is_empty());
    }

    #[test]
    fn test_google_enabled_requires_both_credentials() {
        let config = Config {
            google_client_id: "client".to_string(),
            ..Config::default()
        };
        assert!(!config.google_enabled());

        let config = Config {
            google_client_id: "client".to_string(),
            google_client_secret: "secret".to_string(),
            ..Config::default()
        };
        assert!(config.google_enabled());
    }
}
