//! Login, session, and logout endpoints.

use auth::{AuthError, IdentityProvider, MaybeUser, clear_session_cookie, session_cookie};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// GET /api/auth/me — reports the session's user, if any.
pub async fn me(MaybeUser(claims): MaybeUser) -> Json<MeResponse> {
    let response = match claims {
        Some(claims) => MeResponse {
            authenticated: true,
            email: Some(claims.email().to_string()),
            name: claims.name,
            picture: claims.picture,
        },
        None => MeResponse {
            authenticated: false,
            name: None,
            email: None,
            picture: None,
        },
    };
    Json(response)
}

/// POST /api/auth/logout — clears the session cookie.
#[tracing::instrument(skip(state, jar))]
pub async fn logout<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    jar: CookieJar,
) -> (CookieJar, StatusCode) {
    (
        jar.add(clear_session_cookie(state.cookie_secure)),
        StatusCode::OK,
    )
}

/// GET /oauth2/authorization/{provider} — begins the login flow.
#[tracing::instrument(skip(state))]
pub async fn authorize<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Path(provider): Path<String>,
) -> Result<Redirect, ApiError> {
    let identity = provider_named(&state, &provider)?;

    let login = identity.begin();
    state.pending.insert(login.state, login.verifier).await;

    Ok(Redirect::to(&login.authorize_url))
}

/// GET /login/oauth2/code/{provider} — completes the login flow.
///
/// A provider-reported error (the user cancelled the consent screen)
/// redirects back to the frontend without a session. A missing or
/// already-used state is a client error.
#[tracing::instrument(skip(state, params, jar))]
pub async fn callback<P: IdentityProvider + Clone + 'static>(
    State(state): State<AppState<P>>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    let identity = provider_named(&state, &provider)?;

    if let Some(error) = params.error {
        tracing::warn!(%error, "login cancelled by the provider");
        return Ok((jar, Redirect::to(&state.frontend_origin)));
    }

    let (Some(code), Some(csrf_state)) = (params.code, params.state) else {
        return Err(ApiError::BadRequest(
            "Missing code or state parameter".to_string(),
        ));
    };

    let verifier = state
        .pending
        .take(&csrf_state)
        .await
        .ok_or(AuthError::UnknownLoginState)?;

    let profile = identity.complete(code, verifier).await?;
    let token = state.jwt.issue(&profile)?;

    metrics::counter!("auth_logins_completed_total").increment(1);
    tracing::info!(email = ?profile.email, "login completed");

    let cookie = session_cookie(token, state.jwt.ttl_seconds(), state.cookie_secure);
    Ok((jar.add(cookie), Redirect::to(&state.frontend_origin)))
}

fn provider_named<'a, P: IdentityProvider>(
    state: &'a AppState<P>,
    name: &str,
) -> Result<&'a P, ApiError> {
    state
        .provider
        .as_ref()
        .filter(|identity| identity.name() == name)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown login provider: {name}")))
}
