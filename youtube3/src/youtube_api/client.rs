//! The YouTube service handle, its configuration, and the shared request executor.

use crate::oauth::{OAuthManager, OAuthSource, TimeBoundAccessToken};
use crate::youtube_api::error::{ApiError, Error, Result};
use crate::youtube_api::{
    activities::ActivitiesService,
    captions::CaptionsService,
    channel_banners::ChannelBannersService,
    channel_sections::ChannelSectionsService,
    channels::ChannelsService,
    comment_threads::CommentThreadsService,
    comments::CommentsService,
    fan_funding_events::FanFundingEventsService,
    guide_categories::GuideCategoriesService,
    i18n::{I18nLanguagesService, I18nRegionsService},
    live_broadcasts::LiveBroadcastsService,
    live_chat::{LiveChatBansService, LiveChatMessagesService, LiveChatModeratorsService},
    live_streams::LiveStreamsService,
    playlist_items::PlaylistItemsService,
    playlists::PlaylistsService,
    search::SearchService,
    sponsors::SponsorsService,
    subscriptions::SubscriptionsService,
    super_chat_events::SuperChatEventsService,
    thumbnails::ThumbnailsService,
    video_abuse_report_reasons::VideoAbuseReportReasonsService,
    video_categories::VideoCategoriesService,
    videos::VideosService,
    watermarks::WatermarksService,
};
use http::StatusCode;
use http::header::{AUTHORIZATION, USER_AGENT};
use oauth2::basic::BasicTokenResponse;
use reqwest::{RequestBuilder, Url};
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

/// Where REST calls are sent unless configured otherwise.
pub const BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Where media uploads are sent unless configured otherwise.
pub const UPLOAD_BASE_URL: &str = "https://www.googleapis.com/upload/youtube/v3/";

const DEFAULT_USER_AGENT: &str = concat!("youtube3/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Default)]
enum Credentials {
    #[default]
    None,
    ApiKey(Arc<str>),
    AccessToken(Arc<str>),
    OAuth(Arc<OAuthSource>),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Self::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Self::OAuth(_) => f.write_str("OAuth"),
        }
    }
}

/// Client for the YouTube Data API v3.
///
/// A `YouTube` is cheap to clone and safe to share between tasks; clones share the HTTP
/// connection pool and, for OAuth, the refreshable token. Every REST resource is reached
/// through an accessor such as [`YouTube::videos`], whose methods return a
/// [`Call`](crate::youtube_api::Call) to configure and `send`.
///
/// ```rust,no_run
/// # async fn example() -> youtube3::youtube_api::Result<()> {
/// use youtube3::youtube_api::YouTube;
///
/// let yt = YouTube::builder().api_key("AIza...").build()?;
/// let videos = yt.videos().list("snippet,statistics").id("dQw4w9WgXcQ").send().await?;
/// for video in videos.items {
///     println!("{:?}", video.snippet.and_then(|s| s.title));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct YouTube {
    http: reqwest::Client,
    base_url: Url,
    upload_base_url: Url,
    user_agent: Arc<str>,
    credentials: Credentials,
}

/// Configures a [`YouTube`] handle.
#[derive(Debug, Default)]
pub struct YouTubeBuilder {
    base_url: Option<String>,
    upload_base_url: Option<String>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    credentials: Credentials,
}

impl YouTubeBuilder {
    /// Overrides [`BASE_URL`], mostly useful for tests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides [`UPLOAD_BASE_URL`].
    pub fn upload_base_url(mut self, url: impl Into<String>) -> Self {
        self.upload_base_url = Some(url.into());
        self
    }

    /// Sent as the `User-Agent` of every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Uses an existing HTTP client instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Authenticates with an API key, sent as the `key` query parameter.
    ///
    /// API keys only grant access to public data.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Credentials::ApiKey(key.into().into());
        self
    }

    /// Authenticates with a fixed bearer token that is never refreshed.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Credentials::AccessToken(token.into().into());
        self
    }

    /// Authenticates with an OAuth token that is refreshed through `manager` when it expires.
    pub fn oauth(mut self, token: TimeBoundAccessToken, manager: OAuthManager) -> Self {
        self.credentials = Credentials::OAuth(Arc::new(OAuthSource::new(token, manager)));
        self
    }

    pub fn build(self) -> Result<YouTube> {
        let parse = |url: Option<String>, default: &str| {
            let url = url.unwrap_or_else(|| default.to_string());
            Url::parse(&url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))
        };
        let http = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                // Nothing in the API redirects, and resumable uploads answer with a bare 308.
                .redirect(reqwest::redirect::Policy::none())
                .build()?,
        };
        Ok(YouTube {
            http,
            base_url: parse(self.base_url, BASE_URL)?,
            upload_base_url: parse(self.upload_base_url, UPLOAD_BASE_URL)?,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
                .into(),
            credentials: self.credentials,
        })
    }
}

impl YouTube {
    pub fn builder() -> YouTubeBuilder {
        YouTubeBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn upload_base_url(&self) -> &Url {
        &self.upload_base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns a clone of the current OAuth token, if the handle uses OAuth.
    ///
    /// Useful for persisting the token after it has been refreshed.
    pub async fn token(&self) -> Option<BasicTokenResponse> {
        match &self.credentials {
            Credentials::OAuth(source) => Some(source.token().await),
            _ => None,
        }
    }

    /// Applies the user agent and credentials to an outgoing request.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let request = request.header(USER_AGENT, &*self.user_agent);
        Ok(match &self.credentials {
            Credentials::None => request,
            Credentials::ApiKey(key) => request.query(&[("key", &**key)]),
            Credentials::AccessToken(token) => {
                request.header(AUTHORIZATION, format!("Bearer {token}"))
            }
            Credentials::OAuth(source) => {
                let token = source.fresh_access_token().await.map_err(Error::auth)?;
                request.header(AUTHORIZATION, format!("Bearer {token}"))
            }
        })
    }

    /// Authorizes and sends a request, turning non-2xx answers into errors.
    #[instrument(skip_all, level = tracing::Level::DEBUG)]
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = self.authorize(request).await?.send().await?;
        tracing::debug!(
            status = %response.status(),
            path = response.url().path(),
            "received response"
        );
        check_response(response).await
    }

    pub fn activities(&self) -> ActivitiesService<'_> {
        ActivitiesService::new(self)
    }

    pub fn captions(&self) -> CaptionsService<'_> {
        CaptionsService::new(self)
    }

    pub fn channel_banners(&self) -> ChannelBannersService<'_> {
        ChannelBannersService::new(self)
    }

    pub fn channel_sections(&self) -> ChannelSectionsService<'_> {
        ChannelSectionsService::new(self)
    }

    pub fn channels(&self) -> ChannelsService<'_> {
        ChannelsService::new(self)
    }

    pub fn comment_threads(&self) -> CommentThreadsService<'_> {
        CommentThreadsService::new(self)
    }

    pub fn comments(&self) -> CommentsService<'_> {
        CommentsService::new(self)
    }

    pub fn fan_funding_events(&self) -> FanFundingEventsService<'_> {
        FanFundingEventsService::new(self)
    }

    pub fn guide_categories(&self) -> GuideCategoriesService<'_> {
        GuideCategoriesService::new(self)
    }

    pub fn i18n_languages(&self) -> I18nLanguagesService<'_> {
        I18nLanguagesService::new(self)
    }

    pub fn i18n_regions(&self) -> I18nRegionsService<'_> {
        I18nRegionsService::new(self)
    }

    pub fn live_broadcasts(&self) -> LiveBroadcastsService<'_> {
        LiveBroadcastsService::new(self)
    }

    pub fn live_chat_bans(&self) -> LiveChatBansService<'_> {
        LiveChatBansService::new(self)
    }

    pub fn live_chat_messages(&self) -> LiveChatMessagesService<'_> {
        LiveChatMessagesService::new(self)
    }

    pub fn live_chat_moderators(&self) -> LiveChatModeratorsService<'_> {
        LiveChatModeratorsService::new(self)
    }

    pub fn live_streams(&self) -> LiveStreamsService<'_> {
        LiveStreamsService::new(self)
    }

    pub fn playlist_items(&self) -> PlaylistItemsService<'_> {
        PlaylistItemsService::new(self)
    }

    pub fn playlists(&self) -> PlaylistsService<'_> {
        PlaylistsService::new(self)
    }

    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(self)
    }

    pub fn sponsors(&self) -> SponsorsService<'_> {
        SponsorsService::new(self)
    }

    pub fn subscriptions(&self) -> SubscriptionsService<'_> {
        SubscriptionsService::new(self)
    }

    pub fn super_chat_events(&self) -> SuperChatEventsService<'_> {
        SuperChatEventsService::new(self)
    }

    pub fn thumbnails(&self) -> ThumbnailsService<'_> {
        ThumbnailsService::new(self)
    }

    pub fn video_abuse_report_reasons(&self) -> VideoAbuseReportReasonsService<'_> {
        VideoAbuseReportReasonsService::new(self)
    }

    pub fn video_categories(&self) -> VideoCategoriesService<'_> {
        VideoCategoriesService::new(self)
    }

    pub fn videos(&self) -> VideosService<'_> {
        VideosService::new(self)
    }

    pub fn watermarks(&self) -> WatermarksService<'_> {
        WatermarksService::new(self)
    }
}

/// Maps `304` to [`Error::NotModified`] and any other non-2xx status to [`Error::Api`].
pub(crate) async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status == StatusCode::NOT_MODIFIED {
        return Err(Error::NotModified {
            headers: response.headers().clone(),
        });
    }
    if status.is_success() {
        return Ok(response);
    }
    Err(error_from_response(response).await)
}

pub(crate) async fn error_from_response(response: reqwest::Response) -> Error {
    let code = response.status();
    let headers = response.headers().clone();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status = %code, error = %e, "failed to read error response body");
            String::new()
        }
    };
    tracing::debug!(status = %code, "YouTube API request failed");
    Error::Api(ApiError::from_parts(code, headers, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let yt = YouTube::builder().build().unwrap();
        assert_eq!(yt.base_url().as_str(), BASE_URL);
        assert_eq!(yt.upload_base_url().as_str(), UPLOAD_BASE_URL);
        assert!(yt.user_agent.starts_with("youtube3/"));
        assert!(matches!(yt.credentials, Credentials::None));
    }

    #[test]
    fn builder_rejects_bad_urls() {
        let err = YouTube::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)), "{err:?}");
    }

    #[test]
    fn debug_redacts_credentials() {
        let yt = YouTube::builder().api_key("AIzaSecret").build().unwrap();
        let debug = format!("{yt:?}");
        assert!(debug.contains("ApiKey(<redacted>)"));
        assert!(!debug.contains("AIzaSecret"));
    }

    #[tokio::test]
    async fn token_only_for_oauth() {
        let yt = YouTube::builder().access_token("ya29.fixed").build().unwrap();
        assert!(yt.token().await.is_none());
    }
}
