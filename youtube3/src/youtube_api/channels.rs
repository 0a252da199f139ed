//! The `channels` resource, plus the in-video branding types shared with watermarks.

use crate::youtube_api::call::{Call, Conditional, ContentOwner, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    LocalizedProperty, PageInfo, PrivacyStatus, ThumbnailDetails, TokenPagination,
    impl_list_response,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for the `channels.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Channel>,
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

/// A `channel` resource contains information about a YouTube channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Details a YouTube partner needs to evaluate the channel. Requires the
    /// `youtubepartner-channel-audit` scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_details: Option<ChannelAuditDetails>,
    /// Information about the channel's branding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding_settings: Option<ChannelBrandingSettings>,
    /// Information about the channel's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ChannelContentDetails>,
    /// The content owner linked to the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_owner_details: Option<ChannelContentOwnerDetails>,
    /// Pings the video player fires when the channel is viewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_pings: Option<ChannelConversionPings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The ID that YouTube uses to uniquely identify the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// In-video promotion campaign associated with the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invideo_promotion: Option<InvideoPromotion>,
    /// Always `youtube#channel`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, ChannelLocalization>>,
    /// Basic details about the channel, such as its title and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<ChannelSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ChannelStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChannelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_details: Option<ChannelTopicDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAuditDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_guidelines_good_standing: Option<bool>,
    /// Whether the channel has unresolved Content ID claims.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id_claims_good_standing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_strikes_good_standing: Option<bool>,
}

/// Branding properties of a YouTube channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBrandingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelSettings>,
    /// Additional experimental branding properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<PropertyValue>>,
    /// Branding images associated with the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSettings>,
    /// Branding properties for the watch page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchSettings>,
}

/// Branding properties for the channel view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<String>,
    /// The channel description, up to 1000 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_channels_title: Option<String>,
    /// The IDs of up to 100 featured channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_channels_urls: Option<Vec<String>>,
    /// Space-separated keywords; quote a keyword that contains spaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderate_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_browse_view: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_related_channels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_analytics_account_id: Option<String>,
    /// The trailer video shown to unsubscribed viewers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_trailer: Option<String>,
}

/// Branding images of a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<LocalizedProperty>,
    /// The URL of the banner image YouTube generated from an uploaded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_mobile_extra_hd_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_mobile_hd_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_mobile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_mobile_low_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_mobile_medium_hd_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tablet_extra_hd_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tablet_hd_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tablet_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tablet_low_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tv_high_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tv_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tv_low_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_tv_medium_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_branded_banner_image_imap_script: Option<LocalizedProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_branded_banner_image_url: Option<LocalizedProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_branded_banner_image_imap_script: Option<LocalizedProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_branded_banner_image_url: Option<LocalizedProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_icon_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_playlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// A name/value pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_playlists: Option<ChannelContentDetailsRelatedPlaylists>,
}

/// Playlists YouTube maintains for every channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetailsRelatedPlaylists {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
    /// The playlist holding every video the channel uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_later: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentOwnerDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_owner: Option<String>,
    /// When the channel was linked to the content owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_linked: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelConversionPings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pings: Option<Vec<ChannelConversionPing>>,
}

/// A URL pinged when a channel conversion event happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelConversionPing {
    /// `subscribe`, `view`, or `cview`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_url: Option<String>,
}

/// An in-video promotion campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvideoPromotion {
    /// The default timing of promoted items that set none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timing: Option<InvideoTiming>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PromotedItem>>,
    /// Where the promoted item appears over the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<InvideoPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_smart_timing: Option<bool>,
}

/// When an in-video item appears during playback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvideoTiming {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub duration_ms: Option<u64>,
    /// Offset from the `type` anchor, in milliseconds.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub offset_ms: Option<u64>,
    /// `offsetFromStart` or `offsetFromEnd`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub timing_type: Option<String>,
}

/// Where an in-video item is displayed over the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvideoPosition {
    /// `bottomLeft`, `bottomRight`, `topLeft`, or `topRight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_position: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PromotedItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted_by_content_owner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<InvideoTiming>,
}

/// Identifies what an in-video promotion points to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedItemId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recently_uploaded_by: Option<String>,
    /// `recentUpload`, `video`, or `website`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelLocalization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Basic details about a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized: Option<ChannelLocalization>,
    /// When the channel was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Statistics about a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub comment_count: Option<u64>,
    /// Whether the channel's subscriber count is publicly visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_subscriber_count: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub subscriber_count: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub video_count: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub view_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_linked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_uploads_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<PrivacyStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelTopicDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_ids: Option<Vec<String>>,
}

impl_list_response!(ChannelListResponse => Channel);

api_method! {
    ChannelsList: GET "channels" => "youtube.channels.list" {
        required: ["part"],
        request: (),
        response: ChannelListResponse,
    }
}

api_method! {
    ChannelsUpdate: PUT "channels" => "youtube.channels.update" {
        required: ["part"],
        request: Channel,
        response: Channel,
    }
}

impl Conditional for ChannelsList {}
impl ContentOwner for ChannelsList {}
impl ContentOwner for ChannelsUpdate {}

/// Operations on the `channels` resource, from [`YouTube::channels`].
#[derive(Debug, Clone, Copy)]
pub struct ChannelsService<'a> {
    client: &'a YouTube,
}

impl<'a> ChannelsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Returns a collection of zero or more channel resources that match the request criteria.
    ///
    /// Filter with exactly one of `category_id`, `for_username`, `id`, `managed_by_me`,
    /// `mine`, or `my_subscribers`.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube.readonly` (or an API key for public data)
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    pub fn list(&self, part: &str) -> Call<'a, ChannelsList> {
        Call::new(self.client).query("part", part)
    }

    /// Updates a channel's metadata.
    ///
    /// Only the `brandingSettings` and `invideoPromotion` parts can be updated, and the
    /// properties of a part that are left unset are removed.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/update>
    pub fn update(&self, part: &str, channel: Channel) -> Call<'a, ChannelsUpdate> {
        Call::with_body(self.client, channel).query("part", part)
    }
}

impl Call<'_, ChannelsList> {
    /// Filters by guide category.
    pub fn category_id(self, category_id: &str) -> Self {
        self.query("categoryId", category_id)
    }

    pub fn for_username(self, for_username: &str) -> Self {
        self.query("forUsername", for_username)
    }

    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }

    /// A comma-separated list of channel IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    /// Only channels managed by the content owner named with `on_behalf_of_content_owner`.
    pub fn managed_by_me(self, managed_by_me: bool) -> Self {
        self.query("managedByMe", managed_by_me)
    }

    /// Only channels owned by the authenticated user.
    pub fn mine(self, mine: bool) -> Self {
        self.query("mine", mine)
    }

    pub fn my_subscribers(self, my_subscribers: bool) -> Self {
        self.query("mySubscribers", my_subscribers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_channel() {
        let json = r#"
        {
          "kind": "youtube#channel",
          "id": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
          "snippet": {
            "title": "Google Developers",
            "publishedAt": "2007-08-23T00:34:43.000Z",
            "customUrl": "googledevelopers"
          },
          "contentDetails": {"relatedPlaylists": {"uploads": "UU_x5XG1OV2P6uZZ5FSM9Ttw"}},
          "statistics": {"viewCount": "194612421", "subscriberCount": "2040000", "hiddenSubscriberCount": false, "videoCount": "5702"},
          "invideoPromotion": {"position": {"type": "corner", "cornerPosition": "topRight"}}
        }"#;
        let channel: Channel = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&channel).unwrap();
        let again: Channel = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, channel);
        assert_eq!(serde_json::to_string(&again).unwrap(), encoded);
        assert_eq!(channel.id.as_deref(), Some("UC_x5XG1OV2P6uZZ5FSM9Ttw"));
        assert_eq!(
            channel
                .content_details
                .and_then(|c| c.related_playlists)
                .and_then(|p| p.uploads)
                .as_deref(),
            Some("UU_x5XG1OV2P6uZZ5FSM9Ttw")
        );
        let statistics = channel.statistics.unwrap();
        assert_eq!(statistics.subscriber_count, Some(2_040_000));
        assert_eq!(statistics.hidden_subscriber_count, Some(false));
        let position = channel.invideo_promotion.unwrap().position.unwrap();
        assert_eq!(position.position_type.as_deref(), Some("corner"));
    }

    #[test]
    fn encode_branding_update() {
        let channel = Channel {
            id: Some("UC123".to_string()),
            branding_settings: Some(ChannelBrandingSettings {
                channel: Some(ChannelSettings {
                    description: Some("New description".to_string()),
                    moderate_comments: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(channel, @r#"
        {
          "brandingSettings": {
            "channel": {
              "description": "New description",
              "moderateComments": false
            }
          },
          "id": "UC123"
        }
        "#);
    }
}
