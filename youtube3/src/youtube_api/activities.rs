//! The `activities` resource: actions a channel or user has taken on YouTube.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    PageInfo, ResourceId, ThumbnailDetails, TokenPagination, impl_list_response,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `activities.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Activity>,
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

/// An `activity` resource contains information about an action that a particular channel,
/// or user, has taken on YouTube.
///
/// See: <https://developers.google.com/youtube/v3/docs/activities#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Information about the content associated with the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ActivityContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#activity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Basic details about the activity, including its type and group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<ActivitySnippet>,
}

/// Details about the content of an activity.
///
/// Exactly one field is set, matching the activity's `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulletin: Option<ActivityContentDetailsBulletin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_item: Option<ActivityContentDetailsChannelItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<ActivityContentDetailsComment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<ActivityContentDetailsFavorite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like: Option<ActivityContentDetailsLike>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_item: Option<ActivityContentDetailsPlaylistItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted_item: Option<ActivityContentDetailsPromotedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<ActivityContentDetailsRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<ActivityContentDetailsSocial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<ActivityContentDetailsSubscription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<ActivityContentDetailsUpload>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsBulletin {
    /// The resource the bulletin post is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsChannelItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsComment {
    /// The resource that received the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsFavorite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsLike {
    /// The resource that received the rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsSubscription {
    /// The resource the user subscribed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsPlaylistItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_item_id: Option<String>,
    /// The resource that was added to the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

/// Details about a promoted video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsPromotedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_tracking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_view_url: Option<String>,
    /// `unspecified` or `visitAdvertiserSite`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_cta_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecasting_url: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impression_url: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsRecommendation {
    /// `videoFavorited`, `videoLiked`, or `videoWatched`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
    /// The resource that caused the recommendation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_resource_id: Option<ResourceId>,
}

/// A post on a social network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsSocial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
    /// `facebook`, `googlePlus`, `twitter`, or `unspecified`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContentDetailsUpload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Basic details about an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnippet {
    /// The channel that performed the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Groups activities that relate to the same event, such as a video upload and its
    /// bulletin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `upload`, `like`, `bulletin`, `subscription`, and so on.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
}

impl_list_response!(ActivityListResponse => Activity);

api_method! {
    ActivitiesInsert: POST "activities" => "youtube.activities.insert" {
        required: ["part"],
        request: Activity,
        response: Activity,
    }
}

api_method! {
    ActivitiesList: GET "activities" => "youtube.activities.list" {
        required: ["part"],
        request: (),
        response: ActivityListResponse,
    }
}

impl Conditional for ActivitiesList {}

/// Operations on the `activities` resource, from [`YouTube::activities`].
#[derive(Debug, Clone, Copy)]
pub struct ActivitiesService<'a> {
    client: &'a YouTube,
}

impl<'a> ActivitiesService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Posts a bulletin for a specific channel.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/activities/insert>
    pub fn insert(&self, part: &str, activity: Activity) -> Call<'a, ActivitiesInsert> {
        Call::with_body(self.client, activity).query("part", part)
    }

    /// Returns a list of channel activity events that match the request criteria.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/activities/list>
    pub fn list(&self, part: &str) -> Call<'a, ActivitiesList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, ActivitiesList> {
    pub fn channel_id(self, channel_id: &str) -> Self {
        self.query("channelId", channel_id)
    }

    /// The activity feed shown on the authorized user's YouTube homepage.
    pub fn home(self, home: bool) -> Self {
        self.query("home", home)
    }

    pub fn mine(self, mine: bool) -> Self {
        self.query("mine", mine)
    }

    pub fn published_after(self, published_after: Timestamp) -> Self {
        self.query("publishedAfter", published_after)
    }

    pub fn published_before(self, published_before: Timestamp) -> Self {
        self.query("publishedBefore", published_before)
    }

    pub fn region_code(self, region_code: &str) -> Self {
        self.query("regionCode", region_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_upload_activity() {
        let json = r#"
        {
          "kind": "youtube#activity",
          "id": "MTUxNTA",
          "snippet": {
            "publishedAt": "2017-05-02T17:00:01.000Z",
            "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
            "title": "Launch",
            "type": "upload",
            "groupId": "MTUxNTA"
          },
          "contentDetails": {"upload": {"videoId": "dQw4w9WgXcQ"}}
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        let snippet = activity.snippet.unwrap();
        assert_eq!(snippet.activity_type.as_deref(), Some("upload"));
        assert_eq!(
            activity
                .content_details
                .and_then(|c| c.upload)
                .and_then(|u| u.video_id)
                .as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn published_after_is_rfc3339() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .activities()
            .list("snippet")
            .published_after("2017-01-01T00:00:00Z".parse().unwrap());
        assert_eq!(call.get_param("publishedAfter"), Some("2017-01-01T00:00:00Z"));
    }
}
