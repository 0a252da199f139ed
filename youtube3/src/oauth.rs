//! OAuth 2.0 management for YouTube API authentication.
//!
//! This module encapsulates all OAuth-related operations for authenticating with the YouTube API,
//! including initial user authorization, token refresh, and keeping access tokens fresh while a
//! [`YouTube`](crate::youtube_api::YouTube) handle issues calls.

use eyre::Context;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::service_fn;
use hyper::{Request, Response, body};
use oauth2::basic::{BasicClient, BasicTokenResponse};
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, PkceCodeChallenge, RedirectUrl,
    RevocationUrl, TokenResponse, TokenUrl,
};
use std::fmt;
use std::future::Future;
use std::time::{Duration, SystemTime};
use tokio::sync::Mutex;
use tracing::instrument;

/// Google OAuth2 token endpoint URL used for both initial authentication and token refresh
const TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v3/token";
const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const REVOCATION_URL: &str = "https://oauth2.googleapis.com/revoke";

const DEFAULT_DONE_HTML: &str = "<html><body><p>Authorization complete. You may close this window.</p></body></html>";

/// An OAuth 2.0 scope understood by the YouTube Data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Manage your YouTube account.
    Youtube,
    /// See, edit, and permanently delete your YouTube videos, ratings, comments and captions.
    YoutubeForceSsl,
    /// View your YouTube account.
    YoutubeReadonly,
    /// Manage your YouTube videos.
    YoutubeUpload,
    /// View and manage your assets and associated content on YouTube.
    Youtubepartner,
    /// View private information of your YouTube channel relevant during the audit process with a
    /// YouTube partner.
    YoutubepartnerChannelAudit,
}

impl Scope {
    /// The full scope URL sent to Google's authorization server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "https://www.googleapis.com/auth/youtube",
            Self::YoutubeForceSsl => "https://www.googleapis.com/auth/youtube.force-ssl",
            Self::YoutubeReadonly => "https://www.googleapis.com/auth/youtube.readonly",
            Self::YoutubeUpload => "https://www.googleapis.com/auth/youtube.upload",
            Self::Youtubepartner => "https://www.googleapis.com/auth/youtubepartner",
            Self::YoutubepartnerChannelAudit => {
                "https://www.googleapis.com/auth/youtubepartner-channel-audit"
            }
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An OAuth token together with the moment it should no longer be trusted.
#[derive(Debug, Clone)]
pub struct TimeBoundAccessToken {
    token: BasicTokenResponse,
    /// When the current access token expires (with safety buffer)
    expires_at: SystemTime,
}

impl TimeBoundAccessToken {
    /// Creates a new YouTube token that is already expired, forcing immediate refresh.
    ///
    /// This is useful when loading tokens from storage where you want to ensure
    /// they are validated before use.
    pub fn expired(token: BasicTokenResponse) -> Self {
        Self {
            expires_at: SystemTime::UNIX_EPOCH,
            token,
        }
    }

    /// Creates a new YouTube token with calculated expiry time.
    ///
    /// The expiry time is calculated from the token's `expires_in` field minus
    /// a 5-minute safety buffer to prevent edge-case failures.
    pub fn new(token: BasicTokenResponse) -> Self {
        Self {
            expires_at: Self::calculate_token_expiry(&token),
            token,
        }
    }

    pub fn raw_token(&self) -> &BasicTokenResponse {
        &self.token
    }

    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.expires_at
    }

    /// Refreshes this token using the provided OAuth manager, preserving the refresh token.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Token was successfully refreshed
    /// * `Ok(false)` - Refresh failed (invalid grant, no refresh token, etc.)
    /// * `Err(_)` - Network or other error occurred
    pub async fn refresh(&mut self, oauth_manager: &OAuthManager) -> eyre::Result<bool> {
        tracing::trace!("refreshing token");
        match oauth_manager
            .refresh_token(self.token.clone())
            .await
            .context("refresh OAuth token")?
        {
            Some(new_token) => {
                let old_token = std::mem::replace(&mut self.token, new_token);

                // Google usually omits the refresh token from refresh responses.
                if self.token.refresh_token().is_none() {
                    tracing::trace!("new token lacks refresh token, preserving original");
                    self.token
                        .set_refresh_token(old_token.refresh_token().cloned());
                }

                self.expires_at = Self::calculate_token_expiry(&self.token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Uses the current time + expires_in duration - 5 minute safety buffer.
    /// If no expires_in is provided, assumes a conservative 55-minute lifetime.
    fn calculate_token_expiry(token: &BasicTokenResponse) -> SystemTime {
        let now = SystemTime::now();
        match token.expires_in() {
            Some(expires_in) => now + expires_in.saturating_sub(Duration::from_secs(300)),
            None => now + Duration::from_secs(3300),
        }
    }
}

/// A refreshable token shared by every clone of a `YouTube` handle.
#[derive(Debug)]
pub(crate) struct OAuthSource {
    token: Mutex<TimeBoundAccessToken>,
    manager: OAuthManager,
}

impl OAuthSource {
    pub(crate) fn new(token: TimeBoundAccessToken, manager: OAuthManager) -> Self {
        Self {
            token: Mutex::new(token),
            manager,
        }
    }

    pub(crate) async fn token(&self) -> BasicTokenResponse {
        self.token.lock().await.token.clone()
    }

    /// Gets a guaranteed-fresh access token, refreshing if necessary.
    ///
    /// Holding the lock across the refresh means concurrent callers wait for one refresh
    /// rather than each issuing their own.
    #[instrument(skip(self))]
    pub(crate) async fn fresh_access_token(&self) -> eyre::Result<String> {
        let mut token = self.token.lock().await;

        if token.is_expired() {
            tracing::debug!("access token expired, attempting refresh");
            if token.refresh(&self.manager).await? {
                tracing::debug!("access token successfully refreshed");
            } else {
                tracing::error!("access token refresh failed, client is unusable");
                eyre::bail!("Unable to refresh expired access token");
            }
        }

        Ok(token.token.access_token().secret().clone())
    }
}

/// Manages OAuth 2.0 authentication flows for YouTube API access.
///
/// The OAuthManager encapsulates all OAuth operations, providing a consistent interface
/// for both initial user authentication and token refresh operations.
#[derive(Clone)]
pub struct OAuthManager {
    client_id: String,
    client_secret: Option<String>,
    scopes: Vec<Scope>,
    oauth_done_html: String,
}

impl fmt::Debug for OAuthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthManager")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

impl OAuthManager {
    /// Creates a new OAuth manager for an installed application.
    ///
    /// The manager requests [`Scope::Youtube`] unless told otherwise with
    /// [`OAuthManager::with_scopes`].
    pub fn new(client_id: impl Into<String>, client_secret: Option<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            scopes: vec![Scope::Youtube],
            oauth_done_html: DEFAULT_DONE_HTML.to_string(),
        }
    }

    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
        self.scopes = scopes.into_iter().collect();
        self
    }

    /// HTML content to display after successful authorization.
    pub fn with_done_page(mut self, html: impl Into<String>) -> Self {
        self.oauth_done_html = html.into();
        self
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    fn http_client() -> eyre::Result<oauth2::reqwest::Client> {
        oauth2::reqwest::ClientBuilder::new()
            // SSRF no thank you.
            .redirect(oauth2::reqwest::redirect::Policy::none())
            .build()
            .context("build OAuth HTTP client")
    }

    fn token_url() -> eyre::Result<TokenUrl> {
        TokenUrl::new(TOKEN_URL.to_string()).context("parse token endpoint URL")
    }

    /// Performs a complete OAuth 2.0 authorization flow to obtain a new access token.
    ///
    /// This method initiates the full OAuth flow, including:
    /// 1. Opening the user's browser for authorization
    /// 2. Setting up a local HTTP server to receive the authorization callback
    /// 3. Exchanging the authorization code for an access token
    pub async fn authenticate(&self) -> eyre::Result<BasicTokenResponse> {
        let csrf = CsrfToken::new_random();
        let (redirect_url, eventually_authorization_code) = self
            .setup_redirect(csrf.clone())
            .await
            .context("set up redirect endpoint")?;

        let auth_url =
            AuthUrl::new(AUTH_URL.to_string()).context("parse authorization endpoint URL")?;
        let revocation_url = RevocationUrl::new(REVOCATION_URL.to_string())
            .context("parse revocation endpoint URL")?;
        let mut client = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(Self::token_url()?)
            .set_redirect_uri(redirect_url)
            .set_revocation_url(revocation_url);
        if let Some(secret) = &self.client_secret {
            client = client.set_client_secret(ClientSecret::new(secret.clone()));
        }

        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
        let (auth_url, _csrf_token) = client
            // We never re-use the CSRF since we only go through the flow exactly once.
            .authorize_url(move || csrf.clone())
            .add_scopes(
                self.scopes
                    .iter()
                    .map(|scope| oauth2::Scope::new(scope.as_str().to_string())),
            )
            .set_pkce_challenge(pkce_challenge)
            .url();

        tracing::info!(url = %auth_url, "asking user to follow OAuth flow");
        webbrowser::open(auth_url.as_ref()).context("open user's browser")?;
        let authorization_code = eventually_authorization_code
            .await
            .context("await user authorization code")?;

        let token_result = client
            .exchange_code(authorization_code)
            .set_pkce_verifier(pkce_verifier)
            .request_async(&Self::http_client()?)
            .await
            .context("exchange authorization code with access token")?;

        Ok(token_result)
    }

    /// Attempts to refresh an existing OAuth token using its refresh token.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(new_token))` - Refresh succeeded, new token is available
    /// * `Ok(None)` - The token has no refresh token, or Google rejected it as an invalid grant
    /// * `Err(_)` - Network or other error occurred during refresh attempt
    ///
    /// When refresh fails, the user should be prompted to re-authenticate using
    /// [`Self::authenticate`].
    pub async fn refresh_token(
        &self,
        token: BasicTokenResponse,
    ) -> eyre::Result<Option<BasicTokenResponse>> {
        let Some(refresh_token) = token.refresh_token() else {
            tracing::warn!("no refresh token available, cannot refresh");
            return Ok(None);
        };

        tracing::debug!("attempting to refresh OAuth token");

        let mut client =
            BasicClient::new(ClientId::new(self.client_id.clone())).set_token_uri(Self::token_url()?);
        if let Some(secret) = &self.client_secret {
            client = client.set_client_secret(ClientSecret::new(secret.clone()));
        }

        match client
            .exchange_refresh_token(refresh_token)
            .request_async(&Self::http_client()?)
            .await
        {
            Ok(new_token) => {
                tracing::debug!("successfully refreshed OAuth token");
                Ok(Some(new_token))
            }
            Err(ref e @ oauth2::RequestTokenError::ServerResponse(ref sr))
                if matches!(
                    sr.error(),
                    oauth2::basic::BasicErrorResponseType::InvalidGrant
                ) =>
            {
                tracing::warn!("OAuth refresh token considered invalid grant: {}", e);
                Ok(None)
            }
            Err(e) => Err(e).context("exchange refresh token"),
        }
    }

    /// Turns a stored token into a usable one, running the browser flow if it cannot be refreshed.
    ///
    /// Stored tokens are treated as expired so they are validated with a refresh before use.
    pub async fn restore_or_authenticate(
        &self,
        stored: Option<BasicTokenResponse>,
    ) -> eyre::Result<TimeBoundAccessToken> {
        if let Some(stored) = stored {
            let mut token = TimeBoundAccessToken::expired(stored);
            if token.refresh(self).await? {
                return Ok(token);
            }
            tracing::info!("stored token could not be refreshed, re-authenticating");
        }
        let token = self.authenticate().await.context("authenticate user")?;
        Ok(TimeBoundAccessToken::new(token))
    }

    /// Sets up a local HTTP server to receive the OAuth authorization callback.
    ///
    /// Creates a temporary HTTP server on a random local port to handle the OAuth
    /// redirect after user authorization. The server validates the CSRF token and
    /// extracts the authorization code from the callback.
    async fn setup_redirect(
        &self,
        csrf: CsrfToken,
    ) -> eyre::Result<(
        RedirectUrl,
        impl Future<Output = eyre::Result<AuthorizationCode>>,
    )> {
        let socket = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind to localhost")?;
        let addr = socket.local_addr().context("get local address")?;
        let url = RedirectUrl::new(format!("http://{}:{}", addr.ip(), addr.port()))
            .context("construct redirect url")?;
        let (tx, rx) = tokio::sync::oneshot::channel();
        let oauth_done = Bytes::from(self.oauth_done_html.clone());
        tokio::spawn(async move {
            let r = async move {
                let (conn, _) = socket.accept().await.context("accept")?;
                let conn = hyper_util::rt::TokioIo::new(conn);
                let (got, mut gotten) = tokio::sync::mpsc::channel(1);
                let service = service_fn(move |req: Request<body::Incoming>| {
                    let csrf = csrf.clone();
                    let got = got.clone();
                    let oauth_done = oauth_done.clone();
                    async move {
                        let mut presented_state = None;
                        let mut presented_code = None;
                        for (k, v) in
                            form_urlencoded::parse(req.uri().query().unwrap_or("").as_bytes())
                        {
                            match &*k {
                                "state" => presented_state = Some(v),
                                "code" => presented_code = Some(v),
                                _ => {}
                            }
                        }
                        if presented_state.as_deref() != Some(csrf.secret().as_str()) {
                            return Err("invalid csrf token");
                        }
                        let Some(code) = presented_code else {
                            return Err("no authorization code found");
                        };
                        let code = AuthorizationCode::new(code.into_owned());
                        if got.send(code).await.is_err() {
                            return Err("redirect server already shut down");
                        }
                        Ok(Response::new(Full::<Bytes>::from(oauth_done)))
                    }
                });
                let mut serve = std::pin::pin!(
                    hyper::server::conn::http1::Builder::new().serve_connection(conn, service)
                );

                tokio::select! {
                    exit = &mut serve => {
                        if let Err(e) = exit {
                            Err(e).context("redirect server got bad request")
                        } else {
                            eyre::bail!("redirect server exit prematurely");
                        }
                    }
                    code = gotten.recv() => {
                        serve.as_mut().graceful_shutdown();
                        code.ok_or_else(|| eyre::eyre!("redirect handler dropped without a code"))
                    }
                }
            };
            let _ = tx.send(r.await);
        });
        Ok((url, async move {
            rx.await.context("redirect future dropped prematurely")?
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauth2::basic::BasicTokenType;
    use oauth2::{AccessToken, EmptyExtraTokenFields, RefreshToken};

    fn token(expires_in: Option<u64>) -> BasicTokenResponse {
        let mut token = BasicTokenResponse::new(
            AccessToken::new("ya29.token".to_string()),
            BasicTokenType::Bearer,
            EmptyExtraTokenFields {},
        );
        token.set_expires_in(expires_in.map(Duration::from_secs).as_ref());
        token.set_refresh_token(Some(RefreshToken::new("1//refresh".to_string())));
        token
    }

    #[test]
    fn scope_urls() {
        assert_eq!(
            Scope::YoutubeForceSsl.as_str(),
            "https://www.googleapis.com/auth/youtube.force-ssl"
        );
        assert_eq!(
            Scope::YoutubepartnerChannelAudit.to_string(),
            "https://www.googleapis.com/auth/youtubepartner-channel-audit"
        );
    }

    #[test]
    fn fresh_token_is_not_expired() {
        assert!(!TimeBoundAccessToken::new(token(Some(3600))).is_expired());
        assert!(!TimeBoundAccessToken::new(token(None)).is_expired());
    }

    #[test]
    fn short_lived_and_restored_tokens_are_expired() {
        // Anything shorter than the safety buffer is already stale.
        assert!(TimeBoundAccessToken::new(token(Some(60))).is_expired());
        assert!(TimeBoundAccessToken::expired(token(Some(3600))).is_expired());
    }

    #[tokio::test]
    async fn refresh_without_refresh_token_gives_up() {
        let mut raw = token(Some(3600));
        raw.set_refresh_token(None);
        let manager = OAuthManager::new("client-id", None);
        let mut token = TimeBoundAccessToken::expired(raw);
        assert!(!token.refresh(&manager).await.unwrap());
        assert!(token.is_expired());
    }

    #[test]
    fn debug_redacts_secret() {
        let manager = OAuthManager::new("client-id", Some("hunter2".to_string()));
        let debug = format!("{manager:?}");
        assert!(debug.contains("client-id"));
        assert!(!debug.contains("hunter2"));
    }
}
