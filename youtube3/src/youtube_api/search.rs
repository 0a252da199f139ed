//! The `search` resource.
//!
//! A search returns a collection of [`SearchResult`]s matching the query parameters. By
//! default results may be videos, channels, or playlists; narrow them down with
//! [`kind`](Call#method.kind). Most `video_*` filters only apply when searching for videos.

use crate::youtube_api::call::{Call, Conditional, ContentOwner, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    PageInfo, ResourceId, ThumbnailDetails, TokenPagination, impl_list_response, string_enum,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `search.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Pass as `pageToken` to retrieve the next page in the result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    /// The region code used for the search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    /// Pass as `pageToken` to retrieve the previous page in the result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_pagination: Option<TokenPagination>,
    /// The `visitorId` identifies the visitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

/// A search result contains information about a YouTube video, channel, or playlist
/// that matches the search parameters.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The matching resource. Its `kind` tells which ID field is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    /// Always `youtube#searchResult`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SearchResultSnippet>,
}

/// Basic details about a search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSnippet {
    /// The channel that published the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `live`, `upcoming`, or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_broadcast_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl_list_response!(SearchListResponse => SearchResult);

string_enum! {
    /// Restricts a search to a particular type of channel.
    pub enum ChannelType {
        Any => "any",
        /// Only shows.
        Show => "show",
    }
}

string_enum! {
    /// Restricts a search to broadcast events.
    pub enum EventType {
        Completed => "completed",
        Live => "live",
        Upcoming => "upcoming",
    }
}

string_enum! {
    /// The order of search results.
    pub enum SearchOrder {
        /// Reverse chronological order of creation.
        Date => "date",
        /// Highest to lowest rating.
        Rating => "rating",
        /// The default.
        Relevance => "relevance",
        Title => "title",
        /// Channels in descending order of their number of uploaded videos.
        VideoCount => "videoCount",
        ViewCount => "viewCount",
    }
}

string_enum! {
    /// Whether restricted content is included in search results.
    pub enum SafeSearch {
        /// Filters some restricted content. This is the default.
        Moderate => "moderate",
        None => "none",
        /// Excludes all restricted content.
        Strict => "strict",
    }
}

string_enum! {
    pub enum VideoCaption {
        Any => "any",
        ClosedCaption => "closedCaption",
        None => "none",
    }
}

string_enum! {
    pub enum VideoDefinition {
        Any => "any",
        /// HD videos.
        High => "high",
        Standard => "standard",
    }
}

string_enum! {
    pub enum VideoDimension {
        TwoD => "2d",
        ThreeD => "3d",
        Any => "any",
    }
}

string_enum! {
    /// Restricts a video search by length.
    pub enum VideoDuration {
        Any => "any",
        /// Longer than 20 minutes.
        Long => "long",
        /// Between 4 and 20 minutes.
        Medium => "medium",
        /// Shorter than 4 minutes.
        Short => "short",
    }
}

string_enum! {
    pub enum VideoEmbeddable {
        Any => "any",
        /// Only videos that can be embedded into a webpage.
        True => "true",
    }
}

string_enum! {
    pub enum VideoLicense {
        Any => "any",
        CreativeCommon => "creativeCommon",
        /// The standard YouTube license.
        Youtube => "youtube",
    }
}

string_enum! {
    pub enum VideoSyndicated {
        Any => "any",
        /// Only videos that can be played outside youtube.com.
        True => "true",
    }
}

string_enum! {
    pub enum VideoType {
        Any => "any",
        Episode => "episode",
        Movie => "movie",
    }
}

api_method! {
    SearchList: GET "search" => "youtube.search.list" {
        required: ["part"],
        request: (),
        response: SearchListResponse,
    }
}

impl Conditional for SearchList {}
impl ContentOwner for SearchList {}

/// Operations on the `search` resource, from [`YouTube::search`].
#[derive(Debug, Clone, Copy)]
pub struct SearchService<'a> {
    client: &'a YouTube,
}

impl<'a> SearchService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Returns search results that match the query parameters.
    ///
    /// `part` must be `snippet` or `id`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    pub fn list(&self, part: &str) -> Call<'a, SearchList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, SearchList> {
    /// Only resources created by the given channel.
    pub fn channel_id(self, channel_id: &str) -> Self {
        self.query("channelId", channel_id)
    }

    pub fn channel_type(self, channel_type: ChannelType) -> Self {
        self.query("channelType", channel_type)
    }

    /// Requires [`kind`](Self::kind) to be `video`.
    pub fn event_type(self, event_type: EventType) -> Self {
        self.query("eventType", event_type)
    }

    /// Only videos owned by the content owner named in `onBehalfOfContentOwner`.
    pub fn for_content_owner(self, for_content_owner: bool) -> Self {
        self.query("forContentOwner", for_content_owner)
    }

    /// Only videos uploaded via the developer's application or website.
    pub fn for_developer(self, for_developer: bool) -> Self {
        self.query("forDeveloper", for_developer)
    }

    /// Only videos owned by the authenticated user.
    pub fn for_mine(self, for_mine: bool) -> Self {
        self.query("forMine", for_mine)
    }

    /// Center of a circular search area, as `latitude,longitude`. Requires
    /// [`location_radius`](Self::location_radius).
    pub fn location(self, location: &str) -> Self {
        self.query("location", location)
    }

    /// Radius of the search area, e.g. `1500m`, `5km`, or `10mi`.
    pub fn location_radius(self, location_radius: &str) -> Self {
        self.query("locationRadius", location_radius)
    }

    pub fn order(self, order: SearchOrder) -> Self {
        self.query("order", order)
    }

    pub fn published_after(self, published_after: Timestamp) -> Self {
        self.query("publishedAfter", published_after)
    }

    pub fn published_before(self, published_before: Timestamp) -> Self {
        self.query("publishedBefore", published_before)
    }

    /// The query term. Supports the Boolean `NOT` (`-`) and `OR` (`|`) operators.
    pub fn q(self, q: &str) -> Self {
        self.query("q", q)
    }

    /// Only videos that can be viewed in the given ISO 3166-1 alpha-2 country.
    pub fn region_code(self, region_code: &str) -> Self {
        self.query("regionCode", region_code)
    }

    /// Only videos related to the given video. Requires [`kind`](Self::kind) to be `video`.
    pub fn related_to_video_id(self, video_id: &str) -> Self {
        self.query("relatedToVideoId", video_id)
    }

    /// Prefer results most relevant to the given ISO 639-1 language.
    pub fn relevance_language(self, language: &str) -> Self {
        self.query("relevanceLanguage", language)
    }

    pub fn safe_search(self, safe_search: SafeSearch) -> Self {
        self.query("safeSearch", safe_search)
    }

    /// Only results associated with the given Freebase topic.
    pub fn topic_id(self, topic_id: &str) -> Self {
        self.query("topicId", topic_id)
    }

    /// A comma-separated list of resource types to return: `channel`, `playlist`, or `video`.
    ///
    /// Sent as the `type` parameter.
    pub fn kind(self, kind: &str) -> Self {
        self.query("type", kind)
    }

    pub fn video_caption(self, video_caption: VideoCaption) -> Self {
        self.query("videoCaption", video_caption)
    }

    pub fn video_category_id(self, category_id: &str) -> Self {
        self.query("videoCategoryId", category_id)
    }

    pub fn video_definition(self, video_definition: VideoDefinition) -> Self {
        self.query("videoDefinition", video_definition)
    }

    pub fn video_dimension(self, video_dimension: VideoDimension) -> Self {
        self.query("videoDimension", video_dimension)
    }

    pub fn video_duration(self, video_duration: VideoDuration) -> Self {
        self.query("videoDuration", video_duration)
    }

    pub fn video_embeddable(self, video_embeddable: VideoEmbeddable) -> Self {
        self.query("videoEmbeddable", video_embeddable)
    }

    pub fn video_license(self, video_license: VideoLicense) -> Self {
        self.query("videoLicense", video_license)
    }

    pub fn video_syndicated(self, video_syndicated: VideoSyndicated) -> Self {
        self.query("videoSyndicated", video_syndicated)
    }

    pub fn video_type(self, video_type: VideoType) -> Self {
        self.query("videoType", video_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enum_literals() {
        assert_eq!(VideoDuration::Medium.as_str(), "medium");
        assert_eq!("medium".parse::<VideoDuration>(), Ok(VideoDuration::Medium));
        assert_eq!(VideoDimension::TwoD.to_string(), "2d");
        assert_eq!(SearchOrder::ViewCount.as_str(), "viewCount");
        assert_eq!(VideoLicense::CreativeCommon.as_str(), "creativeCommon");
        let err = "huge".parse::<VideoDuration>().unwrap_err();
        assert_eq!(err.to_string(), "`huge` is not a valid VideoDuration");
    }

    #[test]
    fn search_parameters() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .search()
            .list("snippet")
            .q("rust async")
            .kind("video")
            .video_duration(VideoDuration::Short)
            .order(SearchOrder::Date)
            .published_after("2017-01-01T00:00:00Z".parse().unwrap())
            .safe_search(SafeSearch::None);
        assert_eq!(call.get_param("q"), Some("rust async"));
        assert_eq!(call.get_param("type"), Some("video"));
        assert_eq!(call.get_param("videoDuration"), Some("short"));
        assert_eq!(call.get_param("order"), Some("date"));
        assert_eq!(call.get_param("publishedAfter"), Some("2017-01-01T00:00:00Z"));
        assert_eq!(call.get_param("safeSearch"), Some("none"));
    }

    #[test]
    fn decode_mixed_results() {
        let json = r#"
        {
          "kind": "youtube#searchListResponse",
          "nextPageToken": "CAUQAA",
          "regionCode": "NL",
          "pageInfo": {"totalResults": 1000000, "resultsPerPage": 2},
          "items": [
            {"kind": "youtube#searchResult", "id": {"kind": "youtube#video", "videoId": "v1"}},
            {"kind": "youtube#searchResult", "id": {"kind": "youtube#channel", "channelId": "UC1"}}
          ]
        }"#;
        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.region_code.as_deref(), Some("NL"));
        let ids: Vec<_> = response.items.iter().map(|r| r.id.clone().unwrap()).collect();
        assert_eq!(ids[0].video_id.as_deref(), Some("v1"));
        assert_eq!(ids[1].channel_id.as_deref(), Some("UC1"));
        assert_eq!(response.page_info.unwrap().total_results, Some(1_000_000));
    }
}
