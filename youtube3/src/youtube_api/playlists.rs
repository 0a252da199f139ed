//! The `playlists` resource.

use crate::youtube_api::call::{
    Call, Conditional, ContentOwner, ContentOwnerChannel, api_method,
};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    PageInfo, PrivacyStatus, ThumbnailDetails, TokenPagination, impl_list_response,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for the `playlists.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Playlist>,
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

/// A `playlist` resource represents a YouTube playlist.
///
/// A playlist is a collection of videos that can be viewed sequentially and shared with other
/// users. Its entries are [`PlaylistItem`](crate::youtube_api::playlist_items::PlaylistItem)s.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<PlaylistContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#playlist`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Translations of the playlist metadata, keyed by BCP-47 language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, PlaylistLocalization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlaylistPlayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<PlaylistSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlaylistStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistContentDetails {
    /// The number of videos in the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistLocalization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPlayer {
    /// An `<iframe>` tag that embeds a player that plays the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_html: Option<String>,
}

/// Basic details about a playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    /// The language of `title` and `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The title and description in the language requested with `hl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized: Option<PlaylistLocalization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// Keyword tags associated with the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<PrivacyStatus>,
}

impl_list_response!(PlaylistListResponse => Playlist);

api_method! {
    PlaylistsDelete: DELETE "playlists" => "youtube.playlists.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    PlaylistsInsert: POST "playlists" => "youtube.playlists.insert" {
        required: ["part"],
        request: Playlist,
        response: Playlist,
    }
}

api_method! {
    PlaylistsList: GET "playlists" => "youtube.playlists.list" {
        required: ["part"],
        request: (),
        response: PlaylistListResponse,
    }
}

api_method! {
    PlaylistsUpdate: PUT "playlists" => "youtube.playlists.update" {
        required: ["part"],
        request: Playlist,
        response: Playlist,
    }
}

impl Conditional for PlaylistsList {}

impl ContentOwner for PlaylistsDelete {}
impl ContentOwner for PlaylistsInsert {}
impl ContentOwner for PlaylistsList {}
impl ContentOwner for PlaylistsUpdate {}
impl ContentOwnerChannel for PlaylistsInsert {}
impl ContentOwnerChannel for PlaylistsList {}

/// Operations on the `playlists` resource, from [`YouTube::playlists`].
#[derive(Debug, Clone, Copy)]
pub struct PlaylistsService<'a> {
    client: &'a YouTube,
}

impl<'a> PlaylistsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Deletes a playlist.
    pub fn delete(&self, id: &str) -> Call<'a, PlaylistsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Creates a playlist.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube`
    /// * `https://www.googleapis.com/auth/youtube.force-ssl`
    /// * `https://www.googleapis.com/auth/youtubepartner`
    pub fn insert(&self, part: &str, playlist: Playlist) -> Call<'a, PlaylistsInsert> {
        Call::with_body(self.client, playlist).query("part", part)
    }

    /// Returns playlists that match the request criteria.
    ///
    /// Filter with exactly one of `channel_id`, `id`, or `mine`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlists/list>
    pub fn list(&self, part: &str) -> Call<'a, PlaylistsList> {
        Call::new(self.client).query("part", part)
    }

    /// Modifies a playlist. Parts included in `part` are replaced entirely, so omitted
    /// fields of those parts are cleared.
    pub fn update(&self, part: &str, playlist: Playlist) -> Call<'a, PlaylistsUpdate> {
        Call::with_body(self.client, playlist).query("part", part)
    }
}

impl Call<'_, PlaylistsList> {
    pub fn channel_id(self, channel_id: &str) -> Self {
        self.query("channelId", channel_id)
    }

    /// Fills `snippet.localized` with the metadata in this language.
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }

    /// A comma-separated list of playlist IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    /// Only playlists owned by the authenticated user.
    pub fn mine(self, mine: bool) -> Self {
        self.query("mine", mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_new_playlist() {
        let playlist = Playlist {
            snippet: Some(PlaylistSnippet {
                title: Some("Favorites".to_string()),
                tags: Some(vec![]),
                ..Default::default()
            }),
            status: Some(PlaylistStatus {
                privacy_status: Some(PrivacyStatus::Unlisted),
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(playlist, @r#"
        {
          "snippet": {
            "tags": [],
            "title": "Favorites"
          },
          "status": {
            "privacyStatus": "unlisted"
          }
        }
        "#);
    }

    #[test]
    fn decode_localizations() {
        let json = r#"
        {
          "id": "PL1",
          "contentDetails": {"itemCount": 12},
          "snippet": {
            "title": "Favorites",
            "defaultLanguage": "en",
            "localized": {"title": "Favoris", "description": ""}
          },
          "localizations": {
            "fr": {"title": "Favoris"},
            "de": {"title": "Favoriten"}
          }
        }"#;
        let playlist: Playlist = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&playlist).unwrap();
        let again: Playlist = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, playlist);
        assert_eq!(serde_json::to_string(&again).unwrap(), encoded);
        assert_eq!(playlist.content_details.unwrap().item_count, Some(12));
        let localizations = playlist.localizations.unwrap();
        let languages: Vec<_> = localizations.keys().map(String::as_str).collect();
        assert_eq!(languages, ["de", "fr"]);
        assert_eq!(
            playlist.snippet.unwrap().localized.unwrap().description.as_deref(),
            Some("")
        );
    }
}
