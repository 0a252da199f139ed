//! The `playlistItems` resource: the entries of a playlist.

use crate::youtube_api::call::{Call, Conditional, ContentOwner, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    PageInfo, PrivacyStatus, ResourceId, ThumbnailDetails, TokenPagination, impl_list_response,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `playlistItems.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PlaylistItem>,
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

/// A `playlistItem` resource identifies another resource, such as a video, that is
/// included in a playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<PlaylistItemContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#playlistItem`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<PlaylistItemSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlaylistItemStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    /// Deprecated. Where the video should stop playing, as a duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    /// A user-generated note for this item, up to 280 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Deprecated. Where the video should start playing, as a duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_published_at: Option<Timestamp>,
}

/// Basic details about a playlist item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    /// The channel of the user that added the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    /// Zero-based position of the item in the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// When the item was added to the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// The resource the item refers to, usually a video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<PrivacyStatus>,
}

impl_list_response!(PlaylistItemListResponse => PlaylistItem);

impl PlaylistItem {
    /// A new entry that adds `video_id` to the end of `playlist_id`.
    pub fn video(playlist_id: &str, video_id: &str) -> Self {
        Self {
            snippet: Some(PlaylistItemSnippet {
                playlist_id: Some(playlist_id.to_string()),
                resource_id: Some(ResourceId {
                    kind: Some("youtube#video".to_string()),
                    video_id: Some(video_id.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

api_method! {
    PlaylistItemsDelete: DELETE "playlistItems" => "youtube.playlistItems.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    PlaylistItemsInsert: POST "playlistItems" => "youtube.playlistItems.insert" {
        required: ["part"],
        request: PlaylistItem,
        response: PlaylistItem,
    }
}

api_method! {
    PlaylistItemsList: GET "playlistItems" => "youtube.playlistItems.list" {
        required: ["part"],
        request: (),
        response: PlaylistItemListResponse,
    }
}

api_method! {
    PlaylistItemsUpdate: PUT "playlistItems" => "youtube.playlistItems.update" {
        required: ["part"],
        request: PlaylistItem,
        response: PlaylistItem,
    }
}

impl Conditional for PlaylistItemsList {}

impl ContentOwner for PlaylistItemsInsert {}
impl ContentOwner for PlaylistItemsList {}

/// Operations on the `playlistItems` resource, from [`YouTube::playlist_items`].
#[derive(Debug, Clone, Copy)]
pub struct PlaylistItemsService<'a> {
    client: &'a YouTube,
}

impl<'a> PlaylistItemsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Removes an item from a playlist.
    pub fn delete(&self, id: &str) -> Call<'a, PlaylistItemsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Adds a resource to a playlist. See [`PlaylistItem::video`].
    pub fn insert(&self, part: &str, item: PlaylistItem) -> Call<'a, PlaylistItemsInsert> {
        Call::with_body(self.client, item).query("part", part)
    }

    /// Returns playlist items that match the request criteria.
    ///
    /// Filter with exactly one of `id` or `playlist_id`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    pub fn list(&self, part: &str) -> Call<'a, PlaylistItemsList> {
        Call::new(self.client).query("part", part)
    }

    /// Modifies an item, for example to change its position in the playlist.
    pub fn update(&self, part: &str, item: PlaylistItem) -> Call<'a, PlaylistItemsUpdate> {
        Call::with_body(self.client, item).query("part", part)
    }
}

impl Call<'_, PlaylistItemsList> {
    /// A comma-separated list of playlist item IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    pub fn playlist_id(self, playlist_id: &str) -> Self {
        self.query("playlistId", playlist_id)
    }

    /// Only items that refer to the given video.
    pub fn video_id(self, video_id: &str) -> Self {
        self.query("videoId", video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn video_entry() {
        let item = PlaylistItem::video("PL1", "dQw4w9WgXcQ");
        insta::assert_json_snapshot!(item, @r#"
        {
          "snippet": {
            "playlistId": "PL1",
            "resourceId": {
              "kind": "youtube#video",
              "videoId": "dQw4w9WgXcQ"
            }
          }
        }
        "#);
    }

    #[test]
    fn position_zero_is_sent() {
        let item = PlaylistItem {
            id: Some("item1".to_string()),
            snippet: Some(PlaylistItemSnippet {
                position: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["snippet"]["position"], 0);
    }

    #[test]
    fn decode_item() {
        let json = r#"
        {
          "kind": "youtube#playlistItem",
          "id": "UExxxx",
          "snippet": {
            "publishedAt": "2017-01-02T03:04:05.000Z",
            "title": "Some video",
            "playlistId": "PL1",
            "position": 4,
            "resourceId": {"kind": "youtube#video", "videoId": "v4"}
          },
          "contentDetails": {
            "videoId": "v4",
            "videoPublishedAt": "2016-12-31T23:59:59.000Z"
          }
        }"#;
        let item: PlaylistItem = serde_json::from_str(json).unwrap();
        let snippet = item.snippet.unwrap();
        assert_eq!(snippet.position, Some(4));
        assert_eq!(snippet.resource_id.unwrap().video_id.as_deref(), Some("v4"));
        assert_eq!(
            item.content_details.unwrap().video_published_at,
            Some("2016-12-31T23:59:59Z".parse().unwrap())
        );
    }
}
