//! Shared types and streaming infrastructure for the YouTube API client.

use crate::youtube_api::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

type OneFuturePage<'a, F, T> =
    Pin<Box<dyn Future<Output = Result<(F, (VecDeque<T>, Option<String>))>> + 'a + Send>>;

/// A paginated stream that automatically fetches subsequent pages from a YouTube API list endpoint.
///
/// This stream yields items one by one, automatically fetching the next page when the current
/// page is exhausted. It follows the server-provided `nextPageToken` and nothing else: pages are
/// requested in order, items are yielded in the order the server returned them, and the stream
/// ends once a page arrives without a token. An error ends the stream.
pub struct PagedStream<'a, T, F> {
    /// Current batch of items from the most recent API response
    current_items: VecDeque<T>,
    /// Future representing the currently pending API request, if any
    pending_request: Option<OneFuturePage<'a, F, T>>,
    /// Whether we've reached the end of all available data
    is_done: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Create a new PagedStream that fetches its first page with `fetcher(None)`.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: Send + 'a,
        Fut: Future<Output = Result<(VecDeque<T>, Option<String>)>> + Send + 'a,
    {
        let first_page = async move {
            let results = fetcher(None).await?;
            Ok((fetcher, results))
        };
        Self {
            pending_request: Some(Box::pin(first_page)),
            current_items: VecDeque::new(),
            is_done: false,
        }
    }
}

impl<'a, T: Unpin, F> Unpin for PagedStream<'a, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: Send + 'a,
    Fut: Future<Output = Result<(VecDeque<T>, Option<String>)>> + Send + 'a,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if self.is_done {
                return Poll::Ready(None);
            }

            let Some(pending) = self.pending_request.as_mut() else {
                self.is_done = true;
                return Poll::Ready(None);
            };

            match pending.as_mut().poll(cx) {
                Poll::Ready(Ok((fetcher, (items, next_token)))) => {
                    self.current_items.extend(items);

                    // An empty token would just fetch the first page again.
                    match next_token.filter(|t| !t.is_empty()) {
                        Some(next_token) => {
                            // Set up the future for the next page, but don't poll it yet.
                            self.pending_request = Some(Box::pin(async move {
                                let results = fetcher(Some(next_token)).await?;
                                Ok((fetcher, results))
                            }));
                        }
                        None => {
                            self.is_done = true;
                            self.pending_request = None;
                        }
                    }
                    continue;
                }
                Poll::Ready(Err(e)) => {
                    self.pending_request = None;
                    self.is_done = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// A list response that can be followed page by page.
///
/// Implemented by every `*ListResponse` whose method accepts a `pageToken`.
pub trait ListResponse {
    /// The resource type contained in `items`.
    type Item;

    /// The token for the next page, if there is one.
    fn next_page_token(&self) -> Option<&str>;

    /// Consumes the response, returning its items in server order.
    fn into_items(self) -> Vec<Self::Item>;
}

macro_rules! impl_list_response {
    ($($response:ty => $item:ty),* $(,)?) => {
        $(
            impl $crate::youtube_api::types::ListResponse for $response {
                type Item = $item;

                fn next_page_token(&self) -> Option<&str> {
                    self.next_page_token.as_deref()
                }

                fn into_items(self) -> Vec<$item> {
                    self.items
                }
            }
        )*
    };
}
pub(crate) use impl_list_response;

/// Returned when a string does not name any variant of a YouTube enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid {kind}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed set of string literals used by the API.
///
/// The generated enum (de)serializes as the literal, and also implements
/// `as_str`, `Display`, and `FromStr` so it can be sent as a query parameter.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $literal:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )*
        }

        impl $name {
            /// The wire representation of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::youtube_api::types::UnknownVariant;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($literal => Ok(Self::$variant),)*
                    _ => Err($crate::youtube_api::types::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}
pub(crate) use string_enum;

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<i64>,
    /// The number of results included in the API response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_per_page: Option<i64>,
}

/// Stub token pagination template to suppress results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPagination {}

/// A thumbnail is an image representing a YouTube resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The thumbnail image's URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// (Optional) Width of the thumbnail image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    /// (Optional) Height of the thumbnail image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

/// Internal representation of thumbnails for a YouTube resource.
///
/// Each key is a thumbnail size; not every size is present for every resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailDetails {
    /// The default image for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    /// The medium quality image for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    /// The high quality image for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    /// The standard quality image for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    /// The maximum resolution quality image for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

/// A resource id is a generic reference that points to another YouTube resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    /// The type of the API resource, e.g. `youtube#video`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Set when `kind` is `youtube#video`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Set when `kind` is `youtube#channel`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Set when `kind` is `youtube#playlist`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedProperty {
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// The language of the default property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<LanguageTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized: Option<Vec<LocalizedString>>,
}

/// Rights management policy for YouTube resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// The value of `allowed` indicates whether access to the policy is allowed or denied by
    /// default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<bool>,
    /// A list of region codes that identify countries where the default policy does not apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<Vec<String>>,
}

/// Geographical coordinates of a point, in WGS84.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Altitude above the reference ellipsoid, in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Latitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Public details of the channel behind a fan funding event, sponsorship, or chat action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfileDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

string_enum! {
    /// The privacy status of a video, playlist, or broadcast.
    pub enum PrivacyStatus {
        /// Only the owner and explicitly shared users can view the resource.
        Private => "private",
        /// Anyone can view the resource.
        Public => "public",
        /// Anyone with the link can view the resource.
        Unlisted => "unlisted",
    }
}

/// (De)serializes an `Option` of a 64-bit integer as a JSON string.
///
/// Google APIs transmit int64 and uint64 values as decimal strings so they survive
/// JavaScript's double-precision numbers. Plain JSON numbers are accepted on input.
pub(crate) mod int64 {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        String(String),
        Number(serde_json::Number),
    }

    pub(crate) fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let repr = Option::<Repr>::deserialize(deserializer)?;
        let text = match repr {
            None => return Ok(None),
            Some(Repr::String(s)) => s,
            Some(Repr::Number(n)) => n.to_string(),
        };
        text.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_stream::StreamExt;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Counter {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::youtube_api::types::int64"
        )]
        view_count: Option<u64>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::youtube_api::types::int64"
        )]
        delta: Option<i64>,
    }

    #[test]
    fn int64_fields_travel_as_strings() {
        let counter = Counter {
            view_count: Some(18446744073709551615),
            delta: Some(-3),
        };
        let json = serde_json::to_string(&counter).unwrap();
        assert_eq!(json, r#"{"viewCount":"18446744073709551615","delta":"-3"}"#);
        assert_eq!(serde_json::from_str::<Counter>(&json).unwrap(), counter);
    }

    #[test]
    fn int64_fields_accept_numbers_and_absence() {
        let counter: Counter = serde_json::from_str(r#"{"viewCount":42}"#).unwrap();
        assert_eq!(counter.view_count, Some(42));
        assert_eq!(counter.delta, None);

        let counter: Counter = serde_json::from_str(r#"{"viewCount":null}"#).unwrap();
        assert_eq!(counter, Counter::default());

        assert!(serde_json::from_str::<Counter>(r#"{"viewCount":"lots"}"#).is_err());
    }

    #[test]
    fn privacy_status_literals() {
        for (status, literal) in [
            (PrivacyStatus::Private, "private"),
            (PrivacyStatus::Public, "public"),
            (PrivacyStatus::Unlisted, "unlisted"),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{literal}\""));
            assert_eq!(status.to_string(), literal);
        }
        assert!(serde_json::from_str::<PrivacyStatus>("\"secret\"").is_err());
    }

    string_enum! {
        pub enum Flavor {
            Plain => "plain",
            ExtraHot => "extraHot",
        }
    }

    #[test]
    fn string_enum_round_trips_literals() {
        assert_eq!(Flavor::ExtraHot.as_str(), "extraHot");
        assert_eq!(Flavor::Plain.to_string(), "plain");
        assert_eq!("extraHot".parse::<Flavor>(), Ok(Flavor::ExtraHot));
        assert_eq!(
            serde_json::from_str::<Flavor>("\"plain\"").unwrap(),
            Flavor::Plain
        );
        let err = "mild".parse::<Flavor>().unwrap_err();
        assert_eq!(err.to_string(), "`mild` is not a valid Flavor");
    }

    #[tokio::test]
    async fn paged_stream_follows_tokens_in_order() {
        let stream = PagedStream::new(|token: Option<String>| async move {
            Ok(match token.as_deref() {
                None => (VecDeque::from([1, 2]), Some("p2".to_string())),
                Some("p2") => (VecDeque::new(), Some("p3".to_string())),
                Some("p3") => (VecDeque::from([3]), None),
                Some(other) => panic!("unexpected page token {other}"),
            })
        });
        let items: Vec<i32> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn paged_stream_stops_after_error() {
        let stream = PagedStream::new(|token: Option<String>| async move {
            match token {
                None => Ok((VecDeque::from(["a"]), Some("next".to_string()))),
                Some(_) => Err(crate::youtube_api::error::Error::Upload("boom".into())),
            }
        });
        let results: Vec<_> = stream.collect().await;
        assert_eq!(results.len(), 2);
        assert_eq!(*results[0].as_ref().unwrap(), "a");
        assert!(results[1].is_err());
    }
}
