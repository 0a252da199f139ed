//! The request builder shared by every API method.
//!
//! Each REST method is described by a zero-sized marker type implementing [`ApiMethod`]:
//! its identifier, HTTP verb, path template, and required parameters. A [`Call`] collects
//! the parameters for one invocation of such a method and executes it with [`Call::send`].

use crate::youtube_api::client::YouTube;
use crate::youtube_api::error::{Error, Result};
use crate::youtube_api::media::{Media, ResumableMedia, Upload};
use crate::youtube_api::types::{ListResponse, PagedStream};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue, Method};
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use tokio_stream::Stream;
use tracing::instrument;

/// Static description of one REST method.
pub trait ApiMethod {
    /// The discovery identifier, e.g. `youtube.videos.list`.
    const ID: &'static str;
    const HTTP_METHOD: Method;
    /// Path relative to the base URL; `{name}` segments are filled from path parameters.
    const PATH: &'static str;
    /// Parameters that must be present and non-empty before a request is sent.
    const REQUIRED: &'static [&'static str];
    /// Whether a successful response carries a JSON body.
    const RESPONSE_BODY: bool = true;

    /// The JSON request body, `()` for methods without one.
    type Request: Serialize + Send + Sync;
    type Response: DeserializeOwned + Send;
}

/// Methods that accept `If-None-Match`.
pub trait Conditional: ApiMethod {}

/// Methods that accept `onBehalfOfContentOwner`.
pub trait ContentOwner: ApiMethod {}

/// Methods that also accept `onBehalfOfContentOwnerChannel`.
pub trait ContentOwnerChannel: ContentOwner {}

/// Methods that accept an uploaded media payload.
pub trait MediaUpload: ApiMethod {}

/// Declares a marker type for a REST method.
macro_rules! api_method {
    (
        $(#[$meta:meta])*
        $name:ident: $http:ident $path:literal => $id:literal {
            required: [$($required:literal),* $(,)?],
            request: $request:ty,
            response: none $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl $crate::youtube_api::call::ApiMethod for $name {
            const ID: &'static str = $id;
            const HTTP_METHOD: ::http::Method = ::http::Method::$http;
            const PATH: &'static str = $path;
            const REQUIRED: &'static [&'static str] = &[$($required),*];
            const RESPONSE_BODY: bool = false;
            type Request = $request;
            type Response = ();
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident: $http:ident $path:literal => $id:literal {
            required: [$($required:literal),* $(,)?],
            request: $request:ty,
            response: $response:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl $crate::youtube_api::call::ApiMethod for $name {
            const ID: &'static str = $id;
            const HTTP_METHOD: ::http::Method = ::http::Method::$http;
            const PATH: &'static str = $path;
            const REQUIRED: &'static [&'static str] = &[$($required),*];
            type Request = $request;
            type Response = $response;
        }
    };
}
pub(crate) use api_method;

/// One pending invocation of the method `M`.
///
/// Setters consume and return the call so they can be chained; setting a parameter twice
/// keeps the last value. Nothing touches the network until [`Call::send`] is awaited.
#[must_use = "a call does nothing until it is sent"]
pub struct Call<'a, M: ApiMethod> {
    client: &'a YouTube,
    path_params: Vec<(&'static str, String)>,
    params: Vec<(&'static str, String)>,
    headers: Vec<(&'static str, String)>,
    body: Option<M::Request>,
    upload: Option<Upload>,
    method: PhantomData<fn() -> M>,
}

impl<M: ApiMethod> fmt::Debug for Call<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("method", &M::ID)
            .field("path_params", &self.path_params)
            .field("params", &self.params)
            .field("headers", &self.headers)
            .field("upload", &self.upload)
            .finish_non_exhaustive()
    }
}

fn set(list: &mut Vec<(&'static str, String)>, name: &'static str, value: String) {
    match list.iter_mut().find(|(n, _)| *n == name) {
        Some(slot) => slot.1 = value,
        None => list.push((name, value)),
    }
}

impl<'a, M: ApiMethod> Call<'a, M> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self {
            client,
            path_params: Vec::new(),
            params: Vec::new(),
            headers: Vec::new(),
            body: None,
            upload: None,
            method: PhantomData,
        }
    }

    pub(crate) fn with_body(client: &'a YouTube, body: M::Request) -> Self {
        let mut call = Self::new(client);
        call.body = Some(body);
        call
    }

    pub(crate) fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        set(&mut self.params, name, value.to_string());
        self
    }

    pub(crate) fn path(mut self, name: &'static str, value: impl ToString) -> Self {
        set(&mut self.path_params, name, value.to_string());
        self
    }

    /// Sets an arbitrary query parameter.
    pub fn param(self, name: &'static str, value: impl ToString) -> Self {
        self.query(name, value)
    }

    /// Sets an arbitrary request header.
    pub fn header(mut self, name: &'static str, value: impl ToString) -> Self {
        set(&mut self.headers, name, value.to_string());
        self
    }

    /// Restricts the response to a subset of fields, e.g. `items(id,snippet/title)`.
    pub fn fields(self, fields: &str) -> Self {
        self.query("fields", fields)
    }

    /// Attributes quota to an arbitrary user string, up to 40 characters.
    pub fn quota_user(self, quota_user: &str) -> Self {
        self.query("quotaUser", quota_user)
    }

    /// Attributes quota to an end-user IP address.
    pub fn user_ip(self, user_ip: &str) -> Self {
        self.query("userIp", user_ip)
    }

    pub fn pretty_print(self, pretty_print: bool) -> Self {
        self.query("prettyPrint", pretty_print)
    }

    /// The current value of a path or query parameter.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .chain(&self.params)
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn check_required(&self) -> Result<()> {
        for &required in M::REQUIRED {
            if self.get_param(required).is_none_or(str::is_empty) {
                return Err(Error::MissingParameter {
                    method: M::ID,
                    parameter: required,
                });
            }
        }
        Ok(())
    }

    /// Builds the request URL against `base`.
    fn url(&self, base: &Url, alt: &str) -> Result<Url> {
        let mut url = expand_path(base, M::PATH, &self.path_params)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("alt", alt);
            for (name, value) in &self.params {
                query.append_pair(name, value);
            }
            if let Some(upload) = &self.upload {
                query.append_pair("uploadType", upload.protocol(self.body.is_some()));
            }
        }
        Ok(url)
    }

    async fn dispatch(self, alt: &str) -> Result<reqwest::Response> {
        self.check_required()?;
        let base = match self.upload {
            Some(_) => self.client.upload_base_url(),
            None => self.client.base_url(),
        };
        let url = self.url(base, alt)?;
        tracing::trace!(%url, "sending request");

        let mut request = self.client.http().request(M::HTTP_METHOD, url);
        for (name, value) in &self.headers {
            let header = HeaderName::from_bytes(name.as_bytes())
                .ok()
                .zip(HeaderValue::from_str(value).ok());
            let Some((name, value)) = header else {
                return Err(Error::InvalidHeader {
                    name: name.to_string(),
                });
            };
            request = request.header(name, value);
        }

        match self.upload {
            Some(upload) => upload.send(self.client, request, self.body.as_ref()).await,
            None => {
                if let Some(body) = &self.body {
                    let json = serde_json::to_vec(body).map_err(Error::Encode)?;
                    request = request.header(CONTENT_TYPE, "application/json").body(json);
                }
                self.client.execute(request).await
            }
        }
    }

    /// Executes the call and decodes the response.
    #[instrument(skip(self), fields(method = M::ID))]
    pub async fn send(self) -> Result<M::Response> {
        let response = self.dispatch("json").await?;
        if !M::RESPONSE_BODY {
            return decode::<M>(b"null");
        }
        let body = response.bytes().await?;
        decode::<M>(&body)
    }

    /// Executes the call asking for the media itself (`alt=media`) and returns its bytes.
    #[instrument(skip(self), fields(method = M::ID))]
    pub(crate) async fn send_media(self) -> Result<Bytes> {
        let response = self.dispatch("media").await?;
        Ok(response.bytes().await?)
    }
}

fn decode<M: ApiMethod>(body: &[u8]) -> Result<M::Response> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        method: M::ID,
        source,
    })
}

/// Appends `template` to `base`, substituting `{name}` segments with percent-encoded values.
fn expand_path(base: &Url, template: &str, path_params: &[(&'static str, String)]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| Error::InvalidUrl(format!("{base} cannot be a base URL")))?;
        segments.pop_if_empty();
        for segment in template.split('/') {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    let value = path_params
                        .iter()
                        .find(|(n, _)| *n == name)
                        .map(|(_, v)| v.as_str())
                        .ok_or_else(|| {
                            Error::InvalidUrl(format!("no value for `{{{name}}}` in {template}"))
                        })?;
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }
    Ok(url)
}

impl<M: Conditional> Call<'_, M> {
    /// Only return the resource if its ETag differs from `etag`.
    ///
    /// An unchanged resource makes [`Call::send`] fail with
    /// [`Error::NotModified`](crate::youtube_api::Error::NotModified).
    pub fn if_none_match(self, etag: &str) -> Self {
        self.header("if-none-match", etag)
    }
}

impl<M: ContentOwner> Call<'_, M> {
    /// Act on behalf of a YouTube CMS content owner. Only for YouTube content partners.
    pub fn on_behalf_of_content_owner(self, content_owner: &str) -> Self {
        self.query("onBehalfOfContentOwner", content_owner)
    }
}

impl<M: ContentOwnerChannel> Call<'_, M> {
    /// The channel the content owner is acting through. Requires
    /// [`on_behalf_of_content_owner`](Self::on_behalf_of_content_owner).
    pub fn on_behalf_of_content_owner_channel(self, channel_id: &str) -> Self {
        self.query("onBehalfOfContentOwnerChannel", channel_id)
    }
}

impl<M: MediaUpload> Call<'_, M> {
    /// Uploads `media` in a single request.
    pub fn media(mut self, media: Media) -> Self {
        self.upload = Some(Upload::Simple(media));
        self
    }

    /// Uploads `media` in chunks through a resumable session.
    pub fn resumable_media(mut self, media: ResumableMedia) -> Self {
        self.upload = Some(Upload::Resumable(media));
        self
    }
}

impl<M: ApiMethod<Request = ()>> Call<'_, M> {
    /// A copy of this call that can be sent again, e.g. for the next page.
    pub(crate) fn reissue(&self) -> Self {
        Self {
            client: self.client,
            path_params: self.path_params.clone(),
            params: self.params.clone(),
            headers: self.headers.clone(),
            body: None,
            upload: None,
            method: PhantomData,
        }
    }
}

impl<'a, M> Call<'a, M>
where
    M: ApiMethod<Request = ()> + 'a,
    M::Response: ListResponse,
{
    /// Starts at the page identified by a previous response's `nextPageToken` or
    /// `prevPageToken`.
    pub fn page_token(self, token: &str) -> Self {
        self.query("pageToken", token)
    }

    /// The largest number of items to return per page.
    pub fn max_results(self, max_results: u32) -> Self {
        self.query("maxResults", max_results)
    }

    /// Yields every item of every page, following `nextPageToken` until it runs out.
    ///
    /// The first page is requested with this call's parameters as they are now. An error
    /// is yielded once and ends the stream.
    pub fn stream(
        self,
    ) -> impl Stream<Item = Result<<M::Response as ListResponse>::Item>> + Send + 'a
    where
        <M::Response as ListResponse>::Item: Send + Unpin + 'a,
    {
        PagedStream::new(move |page_token: Option<String>| {
            let mut call = self.reissue();
            if let Some(token) = page_token {
                call = call.page_token(&token);
            }
            async move {
                let page = call.send().await?;
                let next_page_token = page.next_page_token().map(str::to_owned);
                let items = page.into_items();
                tracing::debug!(
                    method = M::ID,
                    items = items.len(),
                    more = next_page_token.is_some(),
                    "fetched page"
                );
                Ok((VecDeque::from(items), next_page_token))
            }
        })
    }
}
