//! HTTP API server with observability for the Monastery360 backend.
//!
//! Serves the monastery, festival, and archive reference data; the
//! relevance-scored heritage search; and the OAuth2 login flow with JWT
//! cookie sessions. Structured logging (tracing) and Prometheus metrics
//! come along for free.

pub mod config;
pub mod error;
pub mod routes;

use auth::{AuthError, GoogleProvider, IdentityProvider, JwtKeys, PendingLogins};
use axum::Router;
use axum::extract::FromRef;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use catalog::Catalog;
use metrics_exporter_prometheus::PrometheusHandle;
use search::SearchIndex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Shared application state accessible from all handlers.
#[derive(Clone)]
pub struct AppState<P: IdentityProvider> {
    pub catalog: Catalog,
    pub search: SearchIndex,
    pub provider: Option<P>,
    pub pending: PendingLogins,
    pub jwt: JwtKeys,
    pub frontend_origin: String,
    pub cookie_secure: bool,
}

impl<P: IdentityProvider> FromRef<AppState<P>> for JwtKeys {
    fn from_ref(state: &AppState<P>) -> Self {
        state.jwt.clone()
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<P: IdentityProvider + Clone + 'static>(
    state: AppState<P>,
    metrics_handle: PrometheusHandle,
    cors_origins: &[String],
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::home))
        .route("/api/health", get(routes::health::check))
        .route("/api/monasteries", get(routes::monasteries::list::<P>))
        .route(
            "/api/monasteries/search",
            get(routes::monasteries::search::<P>),
        )
        .route("/api/monasteries/{id}", get(routes::monasteries::get::<P>))
        .route("/api/festivals", get(routes::festivals::list::<P>))
        .route("/api/festivals/search", get(routes::festivals::search::<P>))
        .route("/api/festivals/{id}", get(routes::festivals::get::<P>))
        .route("/api/archives", get(routes::archives::list::<P>))
        .route("/api/archives/search", get(routes::archives::search::<P>))
        .route("/api/archives/{id}", get(routes::archives::get::<P>))
        .route("/api/search", get(routes::search::all::<P>))
        .route("/api/ai-search", get(routes::search::scored::<P>))
        .route(
            "/api/ai-search/suggestions",
            get(routes::search::suggestions::<P>),
        )
        .route("/api/auth/me", get(routes::auth::me))
        .route("/api/auth/logout", post(routes::auth::logout::<P>))
        .route(
            "/oauth2/authorization/{provider}",
            get(routes::auth::authorize::<P>),
        )
        .route(
            "/login/oauth2/code/{provider}",
            get(routes::auth::callback::<P>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer from the configured origin list.
///
/// A literal `*` opens the API to any origin without credentials.
/// Explicit origins additionally allow the cookie-carrying requests the
/// login flow depends on.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Builds the application state from configuration.
///
/// The Google provider is only constructed when both client credentials
/// are present; without it the login routes answer 404 while the rest
/// of the API works normally.
pub fn create_state(config: &Config) -> Result<AppState<GoogleProvider>, AuthError> {
    let provider = if config.google_enabled() {
        Some(GoogleProvider::new(
            config.google_client_id.clone(),
            config.google_client_secret.clone(),
            config.redirect_uri(),
        )?)
    } else {
        tracing::warn!("Google OAuth2 credentials not configured; login is disabled");
        None
    };

    Ok(AppState {
        catalog: Catalog::seeded(),
        search: SearchIndex::seeded(),
        provider,
        pending: PendingLogins::new(),
        jwt: JwtKeys::new(&config.jwt_secret, config.jwt_ttl_ms),
        frontend_origin: config.frontend_origin.clone(),
        cookie_secure: config.cookie_secure,
    })
}
