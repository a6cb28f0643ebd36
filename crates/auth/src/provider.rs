//! Identity providers for the OAuth2 login flow.

use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, PkceCodeChallenge,
    PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::error::{AuthError, Result};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Profile attributes returned by a provider after login.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// A freshly started login: where to send the browser, plus the state
/// and PKCE verifier to hold until the callback.
pub struct BeginLogin {
    pub authorize_url: String,
    pub state: String,
    pub verifier: PkceCodeVerifier,
}

/// An OAuth2 identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider name as it appears in login URLs.
    fn name(&self) -> &str;

    /// Starts a login by building the authorization redirect.
    fn begin(&self) -> BeginLogin;

    /// Completes a login: exchanges the code and fetches the profile.
    async fn complete(&self, code: String, verifier: PkceCodeVerifier) -> Result<UserProfile>;
}

/// Google identity provider using the authorization-code flow with PKCE.
#[derive(Clone)]
pub struct GoogleProvider {
    client: BasicClient,
    http: reqwest::Client,
}

impl GoogleProvider {
    /// Builds a Google provider for the given client credentials and
    /// callback URL.
    pub fn new(client_id: String, client_secret: String, redirect_url: String) -> Result<Self> {
        let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
            .map_err(|e| AuthError::ProviderConfig(e.to_string()))?;
        let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
            .map_err(|e| AuthError::ProviderConfig(e.to_string()))?;
        let redirect_url = RedirectUrl::new(redirect_url)
            .map_err(|e| AuthError::ProviderConfig(e.to_string()))?;

        let client = BasicClient::new(
            ClientId::new(client_id),
            Some(ClientSecret::new(client_secret)),
            auth_url,
            Some(token_url),
        )
        .set_redirect_uri(redirect_url);

        Ok(Self {
            client,
            http: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl IdentityProvider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn begin(&self) -> BeginLogin {
        let (challenge, verifier) = PkceCodeChallenge::new_random_sha256();
        let (url, state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(challenge)
            .url();

        BeginLogin {
            authorize_url: url.to_string(),
            state: state.secret().clone(),
            verifier,
        }
    }

    async fn complete(&self, code: String, verifier: PkceCodeVerifier) -> Result<UserProfile> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code))
            .set_pkce_verifier(verifier)
            .request_async(async_http_client)
            .await
            .map_err(|e| AuthError::CodeExchange(e.to_string()))?;

        let profile = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .map_err(|e| AuthError::UserInfo(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::UserInfo(e.to_string()))?
            .json::<UserProfile>()
            .await
            .map_err(|e| AuthError::UserInfo(e.to_string()))?;

        tracing::debug!(email = ?profile.email, "fetched provider profile");
        Ok(profile)
    }
}

/// Static provider for tests.
///
/// `begin` embeds the state in the authorize URL so a test can read it
/// back and drive the callback; `complete` returns a fixed profile.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    name: String,
    profile: UserProfile,
}

impl StaticIdentityProvider {
    /// Creates a static provider named `google` with the given profile.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            name: "google".to_string(),
            profile,
        }
    }

    /// Overrides the provider name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn begin(&self) -> BeginLogin {
        let state = CsrfToken::new_random();
        BeginLogin {
            authorize_url: format!("https://auth.invalid/authorize?state={}", state.secret()),
            state: state.secret().clone(),
            verifier: PkceCodeVerifier::new("static-test-verifier".to_string()),
        }
    }

    async fn complete(&self, _code: String, _verifier: PkceCodeVerifier) -> Result<UserProfile> {
        Ok(self.profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            email: Some("monk@example.org".into()),
            name: Some("Tenzin".into()),
            picture: None,
        }
    }

    #[test]
    fn test_google_provider_rejects_an_invalid_redirect_url() {
        let result = GoogleProvider::new("id".into(), "secret".into(), "not a url".into());
        assert!(matches!(result, Err(AuthError::ProviderConfig(_))));
    }

    #[test]
    fn test_google_provider_begin_points_at_google() {
        let provider = GoogleProvider::new(
            "client-id".into(),
            "client-secret".into(),
            "http://localhost:8081/login/oauth2/code/google".into(),
        )
        .unwrap();
        assert_eq!(provider.name(), "google");

        let login = provider.begin();
        assert!(login.authorize_url.starts_with(GOOGLE_AUTH_URL));
        assert!(login.authorize_url.contains("code_challenge"));
        assert!(login.authorize_url.contains(&format!("state={}", login.state)));
        assert!(!login.state.is_empty());
    }

    #[test]
    fn test_distinct_logins_get_distinct_state() {
        let provider = StaticIdentityProvider::new(profile());
        let first = provider.begin();
        let second = provider.begin();
        assert_ne!(first.state, second.state);
    }

    #[tokio::test]
    async fn test_static_provider_completes_with_its_profile() {
        let provider = StaticIdentityProvider::new(profile()).with_name("example");
        assert_eq!(provider.name(), "example");

        let login = provider.begin();
        assert!(login.authorize_url.contains(&login.state));

        let fetched = provider
            .complete("any-code".into(), login.verifier)
            .await
            .unwrap();
        assert_eq!(fetched, profile());
    }
}
