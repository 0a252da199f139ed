//! The `videos` resource: uploaded videos, their metadata, and ratings.

use crate::youtube_api::call::{
    Call, Conditional, ContentOwner, ContentOwnerChannel, MediaUpload, api_method,
};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::content_rating::ContentRating;
use crate::youtube_api::types::{
    AccessPolicy, GeoPoint, PageInfo, PrivacyStatus, ThumbnailDetails, TokenPagination,
    impl_list_response, string_enum,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for the `videos.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Pass as `pageToken` to retrieve the next page in the result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
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

/// A `video` resource represents a YouTube video.
///
/// Each part is only present when it was requested through the `part` parameter.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Age restriction details related to a video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_gating: Option<VideoAgeGating>,
    /// Information about the video content, including the length of the video and its
    /// aspect ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<VideoContentDetails>,
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Information about the uploaded file. Only visible to the video owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_details: Option<VideoFileDetails>,
    /// The ID that YouTube uses to uniquely identify the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#video`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Metadata for a video that is, was, or will be a live broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_streaming_details: Option<VideoLiveStreamingDetails>,
    /// Localized title and description, keyed by BCP-47 language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, VideoLocalization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monetization_details: Option<VideoMonetizationDetails>,
    /// Information used to play the video in an embedded player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<VideoPlayer>,
    /// Processing progress of an uploaded video. Only visible to the video owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_details: Option<VideoProcessingDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_details: Option<VideoProjectDetails>,
    /// Where and when the video was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_details: Option<VideoRecordingDetails>,
    /// Basic details about the video, such as its title, description, and category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
    /// Statistics about the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<VideoStatistics>,
    /// Upload, processing, and privacy statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VideoStatus>,
    /// Suggestions for improving the video. Only visible to the video owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<VideoSuggestions>,
    /// Freebase topics associated with the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_details: Option<VideoTopicDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAgeGating {
    /// Whether the video contains alcohol content and is restricted to viewers of legal
    /// drinking age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_content: Option<bool>,
    /// Whether the video is restricted to viewers over 18.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_game_rating: Option<String>,
}

/// Details about the content of a YouTube video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    /// `"true"` when captions are available for the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Ratings the video received under various rating schemes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<ContentRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_restriction: Option<AccessPolicy>,
    /// `hd` or `sd`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// `2d` or `3d`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    /// The length of the video as an ISO 8601 duration, e.g. `PT15M33S`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_custom_thumbnail: Option<bool>,
    /// Whether the video represents licensed content claimed by a content partner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licensed_content: Option<bool>,
    /// `rectangular` or `360`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
    /// Countries where the video is (or is not) viewable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_restriction: Option<VideoContentDetailsRegionRestriction>,
}

/// Countries where a video is viewable or blocked.
///
/// Only one of `allowed` and `blocked` is ever set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetailsRegionRestriction {
    /// Region codes where the video is viewable; blocked everywhere else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    /// Region codes where the video is blocked; viewable everywhere else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<Vec<String>>,
}

/// Describes the original uploaded video file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFileDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_streams: Option<Vec<VideoFileDetailsAudioStream>>,
    /// The uploaded file's combined bitrate in bits per second.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub bitrate_bps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// Creation date of the file as found in its metadata, in any of several ISO 8601 forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Size in bytes.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub file_size: Option<u64>,
    /// e.g. `video`, `audio`, or `archive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_streams: Option<Vec<VideoFileDetailsVideoStream>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFileDetailsAudioStream {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub bitrate_bps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    /// A value that uniquely identifies a video vendor, typically a four-letter code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFileDetailsVideoStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub bitrate_bps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate_fps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_pixels: Option<i64>,
    /// How the content must be rotated for display, e.g. `clockwise`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_pixels: Option<i64>,
}

/// Details about the live video broadcast behind a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLiveStreamingDetails {
    /// The chat of a broadcast that is currently live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_live_chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<Timestamp>,
    /// Only present while the broadcast is live.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub concurrent_viewers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<Timestamp>,
}

/// Localized versions of certain video properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLocalization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMonetizationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPlayer {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub embed_height: Option<i64>,
    /// An `<iframe>` tag that embeds a player for the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_html: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub embed_width: Option<i64>,
}

/// Processing progress and availability of processed parts of an upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProcessingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_suggestions_availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_details_availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_issues_availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_progress: Option<VideoProcessingDetailsProcessingProgress>,
    /// `processing`, `succeeded`, `failed`, or `terminated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_suggestions_availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails_availability: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProcessingDetailsProcessingProgress {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub parts_processed: Option<u64>,
    /// An estimate that may change while the video is processed.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub parts_total: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub time_left_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProjectDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecordingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_date: Option<Timestamp>,
}

/// Basic details about a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    /// The YouTube video category associated with the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// The channel that the video was uploaded to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_audio_language: Option<String>,
    /// The language of the `title` and `description` properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `live`, `upcoming`, or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_broadcast_content: Option<String>,
    /// Localized title and description, read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized: Option<VideoLocalization>,
    /// When the video was uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// Keyword tags associated with the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Statistics about a video, such as view and like counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub comment_count: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub dislike_count: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub favorite_count: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub like_count: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub view_count: Option<u64>,
}

/// Upload, processing, and privacy status of a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    /// Whether the video can be embedded on another website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddable: Option<bool>,
    /// Why the upload failed; only set when `upload_status` is `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// `creativeCommon` or `youtube`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<PrivacyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_stats_viewable: Option<bool>,
    /// When a private video is scheduled to become public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<Timestamp>,
    /// Why YouTube rejected the video; only set when `upload_status` is `rejected`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_status: Option<String>,
}

/// Suggestions for improving video quality or metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSuggestions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_suggestions: Option<Vec<String>>,
    /// Errors that will prevent YouTube from successfully processing the upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_hints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_suggestions: Option<Vec<VideoSuggestionsTagSuggestion>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSuggestionsTagSuggestion {
    /// Categories the tag is suited for; empty when the tag fits any category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_restricts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTopicDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_topic_ids: Option<Vec<String>>,
    /// Wikipedia URLs that provide a high-level description of the video's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_ids: Option<Vec<String>>,
}

/// Response for the `videos.getRating` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGetRatingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The ratings the authorizing user gave to the requested videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<VideoRating>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRating {
    /// `like`, `dislike`, `none`, or `unspecified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// The request body of `videos.reportAbuse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAbuseReport {
    /// Additional information about the abusive content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// The language the reporter speaks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// A reason from `videoAbuseReportReasons.list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_reason_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl_list_response!(VideoListResponse => Video);

string_enum! {
    /// A chart to retrieve with `videos.list`.
    pub enum VideoChart {
        /// The most popular videos for the specified content region and video category.
        MostPopular => "mostPopular",
    }
}

string_enum! {
    /// Filters `videos.list` to videos the authorizing user rated.
    pub enum MyRating {
        Dislike => "dislike",
        Like => "like",
    }
}

string_enum! {
    /// A rating to record with `videos.rate`.
    pub enum Rating {
        Dislike => "dislike",
        Like => "like",
        /// Removes any rating the user previously set.
        None => "none",
    }
}

api_method! {
    VideosDelete: DELETE "videos" => "youtube.videos.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    VideosGetRating: GET "videos/getRating" => "youtube.videos.getRating" {
        required: ["id"],
        request: (),
        response: VideoGetRatingResponse,
    }
}

api_method! {
    VideosInsert: POST "videos" => "youtube.videos.insert" {
        required: ["part"],
        request: Video,
        response: Video,
    }
}

api_method! {
    VideosList: GET "videos" => "youtube.videos.list" {
        required: ["part"],
        request: (),
        response: VideoListResponse,
    }
}

api_method! {
    VideosRate: POST "videos/rate" => "youtube.videos.rate" {
        required: ["id", "rating"],
        request: (),
        response: none,
    }
}

api_method! {
    VideosReportAbuse: POST "videos/reportAbuse" => "youtube.videos.reportAbuse" {
        required: [],
        request: VideoAbuseReport,
        response: none,
    }
}

api_method! {
    VideosUpdate: PUT "videos" => "youtube.videos.update" {
        required: ["part"],
        request: Video,
        response: Video,
    }
}

impl ContentOwner for VideosDelete {}
impl Conditional for VideosGetRating {}
impl ContentOwner for VideosGetRating {}
impl ContentOwner for VideosInsert {}
impl ContentOwnerChannel for VideosInsert {}
impl MediaUpload for VideosInsert {}
impl Conditional for VideosList {}
impl ContentOwner for VideosList {}
impl ContentOwner for VideosReportAbuse {}
impl ContentOwner for VideosUpdate {}

/// Operations on the `videos` resource, from [`YouTube::videos`].
#[derive(Debug, Clone, Copy)]
pub struct VideosService<'a> {
    client: &'a YouTube,
}

impl<'a> VideosService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Deletes a YouTube video.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube`
    /// * `https://www.googleapis.com/auth/youtube.force-ssl`
    /// * `https://www.googleapis.com/auth/youtubepartner`
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/delete>
    pub fn delete(&self, id: &str) -> Call<'a, VideosDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Retrieves the ratings that the authorized user gave to a list of videos.
    ///
    /// `id` is a comma-separated list of video IDs.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/getRating>
    pub fn get_rating(&self, id: &str) -> Call<'a, VideosGetRating> {
        Call::new(self.client).query("id", id)
    }

    /// Uploads a video to YouTube and optionally sets the video's metadata.
    ///
    /// Attach the file with [`Call::media`] or [`Call::resumable_media`]. Without media the
    /// call is sent as a plain JSON request.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube`
    /// * `https://www.googleapis.com/auth/youtube.force-ssl`
    /// * `https://www.googleapis.com/auth/youtube.upload`
    /// * `https://www.googleapis.com/auth/youtubepartner`
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/insert>
    pub fn insert(&self, part: &str, video: Video) -> Call<'a, VideosInsert> {
        Call::with_body(self.client, video).query("part", part)
    }

    /// Returns a list of videos that match the API request parameters.
    ///
    /// Exactly one of `chart`, `id`, and `my_rating` should be set.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    pub fn list(&self, part: &str) -> Call<'a, VideosList> {
        Call::new(self.client).query("part", part)
    }

    /// Adds a like or dislike rating to a video or removes a rating from a video.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/rate>
    pub fn rate(&self, id: &str, rating: Rating) -> Call<'a, VideosRate> {
        Call::new(self.client)
            .query("id", id)
            .query("rating", rating)
    }

    /// Reports a video for containing abusive content.
    pub fn report_abuse(&self, report: VideoAbuseReport) -> Call<'a, VideosReportAbuse> {
        Call::with_body(self.client, report)
    }

    /// Updates a video's metadata.
    ///
    /// Every mutable property of the parts named in `part` is overwritten: properties left
    /// as `None` are cleared, not preserved.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/update>
    pub fn update(&self, part: &str, video: Video) -> Call<'a, VideosUpdate> {
        Call::with_body(self.client, video).query("part", part)
    }
}

impl Call<'_, VideosInsert> {
    /// Whether YouTube should automatically enhance the video's lighting and color.
    pub fn auto_levels(self, auto_levels: bool) -> Self {
        self.query("autoLevels", auto_levels)
    }

    /// Whether YouTube should notify subscribers about the new video. Defaults to `true`.
    pub fn notify_subscribers(self, notify_subscribers: bool) -> Self {
        self.query("notifySubscribers", notify_subscribers)
    }

    /// Whether YouTube should remove shakiness resulting from camera motions.
    pub fn stabilize(self, stabilize: bool) -> Self {
        self.query("stabilize", stabilize)
    }
}

impl Call<'_, VideosList> {
    pub fn chart(self, chart: VideoChart) -> Self {
        self.query("chart", chart)
    }

    /// Instructs the API to return localized resource metadata for a specific application
    /// language.
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }

    /// A comma-separated list of video IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    pub fn locale(self, locale: &str) -> Self {
        self.query("locale", locale)
    }

    pub fn max_height(self, max_height: i64) -> Self {
        self.query("maxHeight", max_height)
    }

    pub fn max_width(self, max_width: i64) -> Self {
        self.query("maxWidth", max_width)
    }

    pub fn my_rating(self, my_rating: MyRating) -> Self {
        self.query("myRating", my_rating)
    }

    /// Selects the chart's content region, as an ISO 3166-1 alpha-2 country code.
    pub fn region_code(self, region_code: &str) -> Self {
        self.query("regionCode", region_code)
    }

    pub fn video_category_id(self, video_category_id: &str) -> Self {
        self.query("videoCategoryId", video_category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::call::ApiMethod;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_minimal_video() {
        let video: Video = serde_json::from_str(r#"{"kind":"youtube#video","id":"abc123"}"#).unwrap();
        assert_eq!(
            video,
            Video {
                kind: Some("youtube#video".to_string()),
                id: Some("abc123".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn decode_list_response() {
        let json = r#"
        {
          "kind": "youtube#videoListResponse",
          "etag": "\"m2yskBQFythfE4irbTIeOgYYfBU/abc\"",
          "pageInfo": {"totalResults": 2, "resultsPerPage": 2},
          "items": [
            {
              "kind": "youtube#video",
              "id": "first",
              "snippet": {
                "publishedAt": "2017-03-01T12:34:56.000Z",
                "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
                "title": "First",
                "tags": ["a", "b"],
                "thumbnails": {"default": {"url": "https://i.ytimg.com/vi/first/default.jpg", "width": 120, "height": 90}}
              },
              "statistics": {"viewCount": "18446744073709551615", "likeCount": "0"},
              "status": {"privacyStatus": "unlisted", "embeddable": true}
            },
            {"kind": "youtube#video", "id": "second"}
          ]
        }"#;
        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = response.items.iter().map(|v| v.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("first"), Some("second")]);
        assert_eq!(response.page_info.unwrap().total_results, Some(2));

        let first = &response.items[0];
        let snippet = first.snippet.as_ref().unwrap();
        assert_eq!(
            snippet.published_at,
            Some("2017-03-01T12:34:56Z".parse().unwrap())
        );
        assert_eq!(snippet.tags, Some(vec!["a".to_string(), "b".to_string()]));
        let statistics = first.statistics.as_ref().unwrap();
        assert_eq!(statistics.view_count, Some(u64::MAX));
        assert_eq!(statistics.like_count, Some(0));
        assert_eq!(
            first.status.as_ref().unwrap().privacy_status,
            Some(PrivacyStatus::Unlisted)
        );
    }

    #[test]
    fn encode_sends_only_present_fields() {
        let video = Video {
            id: Some("abc123".to_string()),
            snippet: Some(VideoSnippet {
                title: Some(String::new()),
                tags: Some(Vec::new()),
                ..Default::default()
            }),
            statistics: Some(VideoStatistics {
                view_count: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(video, @r#"
        {
          "id": "abc123",
          "snippet": {
            "tags": [],
            "title": ""
          },
          "statistics": {
            "viewCount": "0"
          }
        }
        "#);
    }

    #[test]
    fn round_trip_is_stable() {
        let json = r#"{"id":"v","localizations":{"de":{"title":"Hallo"},"en":{"title":"Hello"}},"recordingDetails":{"location":{"latitude":59.9,"longitude":10.7}},"status":{"publishAt":"2030-01-01T00:00:00Z"}}"#;
        let video: Video = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&video).unwrap();
        assert_eq!(encoded, json);
        assert_eq!(serde_json::from_str::<Video>(&encoded).unwrap(), video);
    }

    #[test]
    fn enum_literals() {
        assert_eq!(Rating::None.as_str(), "none");
        assert_eq!(MyRating::Like.to_string(), "like");
        assert_eq!(VideoChart::MostPopular.as_str(), "mostPopular");
        assert!("love".parse::<Rating>().is_err());
    }

    #[test]
    fn method_descriptions() {
        assert_eq!(VideosRate::ID, "youtube.videos.rate");
        assert_eq!(VideosRate::REQUIRED, &["id", "rating"]);
        assert!(!VideosRate::RESPONSE_BODY);
        assert_eq!(VideosGetRating::PATH, "videos/getRating");
    }

    #[test]
    fn setters_fill_parameters() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .videos()
            .list("snippet")
            .chart(VideoChart::MostPopular)
            .region_code("NO")
            .max_results(5)
            .on_behalf_of_content_owner("owner");
        assert_eq!(call.get_param("part"), Some("snippet"));
        assert_eq!(call.get_param("chart"), Some("mostPopular"));
        assert_eq!(call.get_param("regionCode"), Some("NO"));
        assert_eq!(call.get_param("maxResults"), Some("5"));
        assert_eq!(call.get_param("onBehalfOfContentOwner"), Some("owner"));

        let call = yt.videos().rate("abc", Rating::Dislike);
        assert_eq!(call.get_param("rating"), Some("dislike"));
    }
}
