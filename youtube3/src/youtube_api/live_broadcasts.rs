//! The `liveBroadcasts` resource.
//!
//! # Broadcasts vs Streams
//!
//! A [`LiveBroadcast`] is what viewers see: title, description, thumbnails, scheduled
//! times, and privacy. A [`LiveStream`](crate::youtube_api::live_streams::LiveStream) is
//! the video pipe an encoder sends to. A broadcast goes live once a stream is bound to it
//! with [`LiveBroadcastsService::bind`] and it is moved through its life cycle with
//! [`LiveBroadcastsService::transition`]: `ready` → `testing` → `live` → `complete`.

use crate::youtube_api::call::{
    Call, Conditional, ContentOwner, ContentOwnerChannel, api_method,
};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    PageInfo, PrivacyStatus, ThumbnailDetails, TokenPagination, impl_list_response,
    string_enum,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `liveBroadcasts.list` call.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts/list>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LiveBroadcast>,
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

/// A `liveBroadcast` resource represents a viewer-facing live streaming event on YouTube.
///
/// Broadcasts must be bound to a [`LiveStream`](crate::youtube_api::live_streams::LiveStream)
/// to actually transmit video. Each broadcast corresponds to exactly one YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<LiveBroadcastContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The ID that YouTube assigns to uniquely identify the broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#liveBroadcast`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<LiveBroadcastSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<LiveBroadcastStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LiveBroadcastStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_details: Option<LiveBroadcastTopicDetails>,
}

/// Information about the video content that the broadcast will transmit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastContentDetails {
    /// The stream bound to the broadcast, set by `liveBroadcasts.bind`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_stream_id: Option<String>,
    /// When the bound stream was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_stream_last_update_time_ms: Option<Timestamp>,
    /// `closedCaptionsDisabled`, `closedCaptionsHttpPost`, or `closedCaptionsEmbedded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_captions_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_closed_captions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_content_encryption: Option<bool>,
    /// Whether viewers can pause, rewind, and fast forward while the broadcast is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dvr: Option<bool>,
    /// Whether the broadcast video can be played in an embedded player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_low_latency: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_stream: Option<MonitorStreamInfo>,
    /// `360` or `rectangular`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<String>,
    /// Whether YouTube automatically starts recording once the broadcast goes live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_from_start: Option<bool>,
    /// Whether the broadcast should start with a slate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_with_slate: Option<bool>,
}

/// Settings of the private monitor stream that lets the broadcaster review the
/// broadcast before it is shown publicly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStreamInfo {
    /// How long the public broadcast lags behind the monitor stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_stream_delay_ms: Option<i64>,
    /// HTML code that embeds a player for the monitor stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_monitor_stream: Option<bool>,
}

/// Basic details about the broadcast.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts#snippet>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastSnippet {
    /// Unset until the broadcast has actually ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<Timestamp>,
    /// Unset until the broadcast has actually started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_broadcast: Option<bool>,
    /// The chat attached to the broadcast. Pass it to the `liveChat*` services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_chat_id: Option<String>,
    /// When the broadcast was added to YouTube's live broadcast schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// May be unset, which means the broadcast continues indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    /// The broadcast's title. Note that the broadcast represents exactly one YouTube video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Statistics about the broadcast, available while it is live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastStatistics {
    /// Omitted once the broadcast has ended or when the channel hides viewer counts.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub concurrent_viewers: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub total_chat_count: Option<u64>,
}

/// Information about the broadcast's status.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts#status>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle_status: Option<BroadcastLifeCycleStatus>,
    /// Priority of the broadcast, `low`, `normal`, or `high`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_broadcast_priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<PrivacyStatus>,
    /// `notRecording`, `recording`, or `recorded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastTopicDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<LiveBroadcastTopic>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastTopic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<LiveBroadcastTopicSnippet>,
    /// Always `videoGame`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub topic_type: Option<String>,
    /// Whether the topic was not found in YouTube's topic catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatched: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBroadcastTopicSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release date of the topic, as `YYYY-MM-DD` or a partial date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl_list_response!(LiveBroadcastListResponse => LiveBroadcast);

string_enum! {
    /// The broadcast's current life cycle status.
    ///
    /// See: <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts#status.lifeCycleStatus>
    pub enum BroadcastLifeCycleStatus {
        Abandoned => "abandoned",
        /// The broadcast has finished.
        Complete => "complete",
        CompleteStarting => "completeStarting",
        /// The broadcast is missing settings and cannot be transitioned yet.
        Created => "created",
        /// The broadcast is visible to its audience.
        Live => "live",
        LiveStarting => "liveStarting",
        /// The broadcast settings are complete and it can be transitioned.
        Ready => "ready",
        Reclaimed => "reclaimed",
        /// The broadcast was removed by an admin action.
        Revoked => "revoked",
        TestStarting => "testStarting",
        /// The broadcast is only visible to its partner.
        Testing => "testing",
    }
}

string_enum! {
    /// Filters `liveBroadcasts.list` by broadcast state.
    pub enum BroadcastStatus {
        All => "all",
        Active => "active",
        Completed => "completed",
        Upcoming => "upcoming",
    }
}

string_enum! {
    /// Filters `liveBroadcasts.list` by broadcast type.
    pub enum BroadcastType {
        All => "all",
        /// Scheduled events only. This is the default.
        Event => "event",
        /// The channel's persistent broadcasts.
        Persistent => "persistent",
    }
}

string_enum! {
    /// The status a broadcast is moved to by `liveBroadcasts.transition`.
    ///
    /// See: <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts/transition>
    pub enum TransitionStatus {
        /// Mark the broadcast as over. The stream stops being shown.
        Complete => "complete",
        /// Make the broadcast visible to its audience.
        Live => "live",
        /// Start testing. The broadcast is only visible to its partner.
        Testing => "testing",
    }
}

api_method! {
    LiveBroadcastsBind: POST "liveBroadcasts/bind" => "youtube.liveBroadcasts.bind" {
        required: ["id", "part"],
        request: (),
        response: LiveBroadcast,
    }
}

api_method! {
    LiveBroadcastsControl: POST "liveBroadcasts/control" => "youtube.liveBroadcasts.control" {
        required: ["id", "part"],
        request: (),
        response: LiveBroadcast,
    }
}

api_method! {
    LiveBroadcastsDelete: DELETE "liveBroadcasts" => "youtube.liveBroadcasts.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    LiveBroadcastsInsert: POST "liveBroadcasts" => "youtube.liveBroadcasts.insert" {
        required: ["part"],
        request: LiveBroadcast,
        response: LiveBroadcast,
    }
}

api_method! {
    LiveBroadcastsList: GET "liveBroadcasts" => "youtube.liveBroadcasts.list" {
        required: ["part"],
        request: (),
        response: LiveBroadcastListResponse,
    }
}

api_method! {
    LiveBroadcastsTransition: POST "liveBroadcasts/transition" => "youtube.liveBroadcasts.transition" {
        required: ["broadcastStatus", "id", "part"],
        request: (),
        response: LiveBroadcast,
    }
}

api_method! {
    LiveBroadcastsUpdate: PUT "liveBroadcasts" => "youtube.liveBroadcasts.update" {
        required: ["part"],
        request: LiveBroadcast,
        response: LiveBroadcast,
    }
}

impl Conditional for LiveBroadcastsList {}

impl ContentOwner for LiveBroadcastsBind {}
impl ContentOwner for LiveBroadcastsControl {}
impl ContentOwner for LiveBroadcastsDelete {}
impl ContentOwner for LiveBroadcastsInsert {}
impl ContentOwner for LiveBroadcastsList {}
impl ContentOwner for LiveBroadcastsTransition {}
impl ContentOwner for LiveBroadcastsUpdate {}
impl ContentOwnerChannel for LiveBroadcastsBind {}
impl ContentOwnerChannel for LiveBroadcastsControl {}
impl ContentOwnerChannel for LiveBroadcastsDelete {}
impl ContentOwnerChannel for LiveBroadcastsInsert {}
impl ContentOwnerChannel for LiveBroadcastsList {}
impl ContentOwnerChannel for LiveBroadcastsTransition {}
impl ContentOwnerChannel for LiveBroadcastsUpdate {}

/// Operations on the `liveBroadcasts` resource, from [`YouTube::live_broadcasts`].
#[derive(Debug, Clone, Copy)]
pub struct LiveBroadcastsService<'a> {
    client: &'a YouTube,
}

impl<'a> LiveBroadcastsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Binds a broadcast to a stream, or unbinds it when no `stream_id` is set.
    ///
    /// A broadcast can only be bound to one stream, but a stream may be bound to more than
    /// one broadcast.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts/bind>
    pub fn bind(&self, id: &str, part: &str) -> Call<'a, LiveBroadcastsBind> {
        Call::new(self.client).query("id", id).query("part", part)
    }

    /// Controls the settings of a live broadcast, such as whether a slate is displayed.
    pub fn control(&self, id: &str, part: &str) -> Call<'a, LiveBroadcastsControl> {
        Call::new(self.client).query("id", id).query("part", part)
    }

    pub fn delete(&self, id: &str) -> Call<'a, LiveBroadcastsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Creates a broadcast.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube`
    /// * `https://www.googleapis.com/auth/youtube.force-ssl`
    pub fn insert(&self, part: &str, broadcast: LiveBroadcast) -> Call<'a, LiveBroadcastsInsert> {
        Call::with_body(self.client, broadcast).query("part", part)
    }

    /// Returns broadcasts that match the request criteria.
    ///
    /// Filter with exactly one of `broadcast_status`, `id`, or `mine`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/live/docs/liveBroadcasts/list>
    pub fn list(&self, part: &str) -> Call<'a, LiveBroadcastsList> {
        Call::new(self.client).query("part", part)
    }

    /// Changes the status of a broadcast and starts any processes associated with the
    /// new status.
    ///
    /// The bound stream must be `active` before transitioning to `testing` or `live`.
    pub fn transition(
        &self,
        broadcast_status: TransitionStatus,
        id: &str,
        part: &str,
    ) -> Call<'a, LiveBroadcastsTransition> {
        Call::new(self.client)
            .query("broadcastStatus", broadcast_status)
            .query("id", id)
            .query("part", part)
    }

    /// Updates a broadcast. `broadcast.id` identifies the broadcast to change.
    pub fn update(&self, part: &str, broadcast: LiveBroadcast) -> Call<'a, LiveBroadcastsUpdate> {
        Call::with_body(self.client, broadcast).query("part", part)
    }
}

impl Call<'_, LiveBroadcastsBind> {
    /// The stream to bind. Omit it to unbind the broadcast from its current stream.
    pub fn stream_id(self, stream_id: &str) -> Self {
        self.query("streamId", stream_id)
    }
}

impl Call<'_, LiveBroadcastsControl> {
    /// Whether the slate is shown instead of the stream.
    pub fn display_slate(self, display_slate: bool) -> Self {
        self.query("displaySlate", display_slate)
    }

    /// When the change takes effect, in milliseconds after the broadcast started.
    ///
    /// A value of `0` applies the change as soon as possible.
    pub fn offset_time_ms(self, offset_time_ms: u64) -> Self {
        self.query("offsetTimeMs", offset_time_ms)
    }

    /// When the change takes effect, as a wall clock time.
    pub fn walltime(self, walltime: Timestamp) -> Self {
        self.query("walltime", walltime)
    }
}

impl Call<'_, LiveBroadcastsList> {
    pub fn broadcast_status(self, broadcast_status: BroadcastStatus) -> Self {
        self.query("broadcastStatus", broadcast_status)
    }

    pub fn broadcast_type(self, broadcast_type: BroadcastType) -> Self {
        self.query("broadcastType", broadcast_type)
    }

    /// A comma-separated list of broadcast IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    /// Only broadcasts owned by the authenticated user.
    pub fn mine(self, mine: bool) -> Self {
        self.query("mine", mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_broadcast() {
        let json = r#"
        {
          "kind": "youtube#liveBroadcast",
          "etag": "\"etag\"",
          "id": "b1",
          "snippet": {
            "publishedAt": "2017-04-01T12:00:00.000Z",
            "channelId": "UCowner",
            "title": "Launch stream",
            "scheduledStartTime": "2017-04-02T18:00:00.000Z",
            "isDefaultBroadcast": false,
            "liveChatId": "Cg0KC2IxKicKGFVD"
          },
          "status": {
            "lifeCycleStatus": "liveStarting",
            "privacyStatus": "unlisted",
            "recordingStatus": "recording"
          },
          "contentDetails": {
            "boundStreamId": "s1",
            "boundStreamLastUpdateTimeMs": "2017-04-02T17:55:00.000Z",
            "monitorStream": {
              "enableMonitorStream": true,
              "broadcastStreamDelayMs": 0
            },
            "enableDvr": true
          },
          "statistics": {
            "concurrentViewers": "1234",
            "totalChatCount": "56"
          }
        }"#;
        let broadcast: LiveBroadcast = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&broadcast).unwrap();
        let again: LiveBroadcast = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, broadcast);
        assert_eq!(serde_json::to_string(&again).unwrap(), encoded);
        let status = broadcast.status.unwrap();
        assert_eq!(
            status.life_cycle_status,
            Some(BroadcastLifeCycleStatus::LiveStarting)
        );
        assert_eq!(status.privacy_status, Some(PrivacyStatus::Unlisted));
        let details = broadcast.content_details.unwrap();
        assert_eq!(details.bound_stream_id.as_deref(), Some("s1"));
        assert_eq!(
            details.monitor_stream.unwrap().broadcast_stream_delay_ms,
            Some(0)
        );
        let statistics = broadcast.statistics.unwrap();
        assert_eq!(statistics.concurrent_viewers, Some(1234));
        assert_eq!(statistics.total_chat_count, Some(56));
        assert_eq!(
            broadcast.snippet.unwrap().live_chat_id.as_deref(),
            Some("Cg0KC2IxKicKGFVD")
        );
    }

    #[test]
    fn encode_new_broadcast() {
        let broadcast = LiveBroadcast {
            snippet: Some(LiveBroadcastSnippet {
                title: Some("Launch stream".to_string()),
                scheduled_start_time: Some("2017-04-02T18:00:00Z".parse().unwrap()),
                ..Default::default()
            }),
            status: Some(LiveBroadcastStatus {
                privacy_status: Some(PrivacyStatus::Private),
                ..Default::default()
            }),
            content_details: Some(LiveBroadcastContentDetails {
                enable_dvr: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(broadcast, @r#"
        {
          "contentDetails": {
            "enableDvr": false
          },
          "snippet": {
            "scheduledStartTime": "2017-04-02T18:00:00Z",
            "title": "Launch stream"
          },
          "status": {
            "privacyStatus": "private"
          }
        }
        "#);
    }

    #[test]
    fn transition_parameters() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .live_broadcasts()
            .transition(TransitionStatus::Live, "b1", "status")
            .on_behalf_of_content_owner("owner")
            .on_behalf_of_content_owner_channel("UCowner");
        assert_eq!(call.get_param("broadcastStatus"), Some("live"));
        assert_eq!(call.get_param("id"), Some("b1"));
        assert_eq!(call.get_param("onBehalfOfContentOwnerChannel"), Some("UCowner"));
    }

    #[test]
    fn control_walltime_is_rfc3339() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .live_broadcasts()
            .control("b1", "snippet")
            .display_slate(true)
            .walltime("2017-04-02T18:30:00Z".parse().unwrap());
        assert_eq!(call.get_param("displaySlate"), Some("true"));
        assert_eq!(call.get_param("walltime"), Some("2017-04-02T18:30:00Z"));
    }

    #[test]
    fn lifecycle_round_trips_through_from_str() {
        for status in [
            BroadcastLifeCycleStatus::Ready,
            BroadcastLifeCycleStatus::TestStarting,
            BroadcastLifeCycleStatus::CompleteStarting,
        ] {
            assert_eq!(status.as_str().parse(), Ok(status));
        }
        assert!("paused".parse::<BroadcastLifeCycleStatus>().is_err());
    }
}
