//! The `liveStreams` resource.
//!
//! A [`LiveStream`] is the technical side of a live event: encoder settings, ingestion
//! URLs, and health monitoring. One stream can power multiple broadcasts over time.

use crate::youtube_api::call::{
    Call, Conditional, ContentOwner, ContentOwnerChannel, api_method,
};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{PageInfo, TokenPagination, impl_list_response, string_enum};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `liveStreams.list` call.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveStreams/list>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LiveStream>,
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

/// A `liveStream` resource represents the video pipeline that transmits content to YouTube.
///
/// A single stream can be reused across multiple broadcasts, and streams can exist
/// independently of any specific broadcast event.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveStreams#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn: Option<CdnSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<LiveStreamContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The ID that YouTube assigns to uniquely identify the stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#liveStream`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<LiveStreamSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LiveStreamStatus>,
}

/// How the encoder delivers the stream to YouTube.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnSettings {
    /// Deprecated in favor of `frame_rate` and `resolution`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// `30fps`, `60fps`, or `variable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_info: Option<IngestionInfo>,
    /// `rtmp` or `dash`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_type: Option<String>,
    /// E.g. `1080p`, `720p`, or `variable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// Where and how the encoder sends video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_ingestion_address: Option<String>,
    /// The primary ingestion URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_address: Option<String>,
    /// The stream key. Treat it like a password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamContentDetails {
    /// Where closed captions for the stream are sent with HTTP POST.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_captions_ingestion_url: Option<String>,
    /// Whether the stream can be bound to more than one broadcast.
    ///
    /// Non-reusable streams are deleted together with their broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reusable: Option<bool>,
}

/// Basic details about the stream.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveStreams#snippet>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_stream: Option<bool>,
    /// When the stream was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// The stream's title, between 1 and 128 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Information about the stream's status.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveStreams#status>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<LiveStreamHealthStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_status: Option<StreamStatus>,
}

/// How well the encoder's stream is being received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamHealthStatus {
    /// Problems with the stream, most severe first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_issues: Option<Vec<LiveStreamConfigurationIssue>>,
    /// When `status` last changed, in seconds since the Unix epoch.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub last_update_time_seconds: Option<u64>,
    /// `good`, `ok`, `bad`, or `noData`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamConfigurationIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A short explanation of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// `info`, `warning`, or `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// E.g. `videoBitrateMismatch` or `audioTooQuiet`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
}

impl_list_response!(LiveStreamListResponse => LiveStream);

string_enum! {
    /// The status of a live stream.
    ///
    /// See: <https://developers.google.com/youtube/v3/live/docs/liveStreams#status>
    pub enum StreamStatus {
        /// The stream is receiving data.
        Active => "active",
        /// The stream exists but lacks valid CDN settings.
        Created => "created",
        /// An error condition exists on the stream.
        Error => "error",
        /// The stream is not receiving data.
        Inactive => "inactive",
        /// The stream has valid CDN settings.
        Ready => "ready",
    }
}

api_method! {
    LiveStreamsDelete: DELETE "liveStreams" => "youtube.liveStreams.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    LiveStreamsInsert: POST "liveStreams" => "youtube.liveStreams.insert" {
        required: ["part"],
        request: LiveStream,
        response: LiveStream,
    }
}

api_method! {
    LiveStreamsList: GET "liveStreams" => "youtube.liveStreams.list" {
        required: ["part"],
        request: (),
        response: LiveStreamListResponse,
    }
}

api_method! {
    LiveStreamsUpdate: PUT "liveStreams" => "youtube.liveStreams.update" {
        required: ["part"],
        request: LiveStream,
        response: LiveStream,
    }
}

impl Conditional for LiveStreamsList {}

impl ContentOwner for LiveStreamsDelete {}
impl ContentOwner for LiveStreamsInsert {}
impl ContentOwner for LiveStreamsList {}
impl ContentOwner for LiveStreamsUpdate {}
impl ContentOwnerChannel for LiveStreamsDelete {}
impl ContentOwnerChannel for LiveStreamsInsert {}
impl ContentOwnerChannel for LiveStreamsList {}
impl ContentOwnerChannel for LiveStreamsUpdate {}

/// Operations on the `liveStreams` resource, from [`YouTube::live_streams`].
#[derive(Debug, Clone, Copy)]
pub struct LiveStreamsService<'a> {
    client: &'a YouTube,
}

impl<'a> LiveStreamsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    pub fn delete(&self, id: &str) -> Call<'a, LiveStreamsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Creates a stream. The response carries the ingestion settings for the encoder.
    pub fn insert(&self, part: &str, stream: LiveStream) -> Call<'a, LiveStreamsInsert> {
        Call::with_body(self.client, stream).query("part", part)
    }

    /// Returns streams that match the request criteria.
    ///
    /// Filter with exactly one of `id` or `mine`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/live/docs/liveStreams/list>
    pub fn list(&self, part: &str) -> Call<'a, LiveStreamsList> {
        Call::new(self.client).query("part", part)
    }

    /// Updates a stream. The stream cannot be changed while it is bound to a broadcast
    /// that is `testing` or `live`.
    pub fn update(&self, part: &str, stream: LiveStream) -> Call<'a, LiveStreamsUpdate> {
        Call::with_body(self.client, stream).query("part", part)
    }
}

impl Call<'_, LiveStreamsList> {
    /// A comma-separated list of stream IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    /// Only streams owned by the authenticated user.
    pub fn mine(self, mine: bool) -> Self {
        self.query("mine", mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_stream_health() {
        let json = r#"
        {
          "kind": "youtube#liveStream",
          "id": "s1",
          "snippet": {
            "publishedAt": "2017-04-01T12:00:00.000Z",
            "title": "Main encoder",
            "isDefaultStream": false
          },
          "cdn": {
            "ingestionType": "rtmp",
            "resolution": "1080p",
            "frameRate": "60fps",
            "ingestionInfo": {
              "streamName": "abcd-efgh-ijkl-mnop",
              "ingestionAddress": "rtmp://a.rtmp.youtube.com/live2"
            }
          },
          "status": {
            "streamStatus": "active",
            "healthStatus": {
              "status": "ok",
              "lastUpdateTimeSeconds": "1491048000",
              "configurationIssues": [
                {
                  "type": "videoBitrateMismatch",
                  "severity": "warning",
                  "reason": "Check video settings",
                  "description": "The stream's current bitrate is lower than recommended."
                }
              ]
            }
          }
        }"#;
        let stream: LiveStream = serde_json::from_str(json).unwrap();
        let status = stream.status.unwrap();
        assert_eq!(status.stream_status, Some(StreamStatus::Active));
        let health = status.health_status.unwrap();
        assert_eq!(health.last_update_time_seconds, Some(1_491_048_000));
        let issues = health.configuration_issues.unwrap();
        assert_eq!(issues[0].issue_type.as_deref(), Some("videoBitrateMismatch"));
        assert_eq!(
            stream.cdn.unwrap().ingestion_info.unwrap().stream_name.as_deref(),
            Some("abcd-efgh-ijkl-mnop")
        );
    }

    #[test]
    fn encode_new_stream() {
        let stream = LiveStream {
            snippet: Some(LiveStreamSnippet {
                title: Some("Main encoder".to_string()),
                ..Default::default()
            }),
            cdn: Some(CdnSettings {
                frame_rate: Some("30fps".to_string()),
                ingestion_type: Some("rtmp".to_string()),
                resolution: Some("720p".to_string()),
                ..Default::default()
            }),
            content_details: Some(LiveStreamContentDetails {
                is_reusable: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(stream, @r#"
        {
          "cdn": {
            "frameRate": "30fps",
            "ingestionType": "rtmp",
            "resolution": "720p"
          },
          "contentDetails": {
            "isReusable": true
          },
          "snippet": {
            "title": "Main encoder"
          }
        }
        "#);
    }

    #[test]
    fn stream_status_display() {
        assert_eq!(StreamStatus::Inactive.to_string(), "inactive");
        assert_eq!("ready".parse::<StreamStatus>(), Ok(StreamStatus::Ready));
    }
}
