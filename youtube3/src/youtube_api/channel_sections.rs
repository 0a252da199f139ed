//! The `channelSections` resource: shelves of featured content on a channel page.

use crate::youtube_api::call::{
    Call, Conditional, ContentOwner, ContentOwnerChannel, api_method,
};
use crate::youtube_api::client::YouTube;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for the `channelSections.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSectionListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ChannelSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The `visitorId` identifies the visitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

/// A `channelSection` resource contains information about a set of videos that a channel
/// has chosen to feature.
///
/// See: <https://developers.google.com/youtube/v3/docs/channelSections#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSection {
    /// The playlists or channels featured in the section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ChannelSectionContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, ChannelSectionLocalization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<ChannelSectionSnippet>,
    /// Restricts which viewers see the section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targeting: Option<ChannelSectionTargeting>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSectionContentDetails {
    /// The channel IDs for a `multipleChannels` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    /// The playlist IDs for a `singlePlaylist` or `multiplePlaylists` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSectionLocalization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Basic details about a channel section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSectionSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized: Option<ChannelSectionLocalization>,
    /// Zero-based position of the section on the channel page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// `horizontalRow` or `verticalList`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Only used for `multiplePlaylists` and `multipleChannels` sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `singlePlaylist`, `recentUploads`, `multipleChannels`, and so on.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSectionTargeting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

api_method! {
    ChannelSectionsDelete: DELETE "channelSections" => "youtube.channelSections.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    ChannelSectionsInsert: POST "channelSections" => "youtube.channelSections.insert" {
        required: ["part"],
        request: ChannelSection,
        response: ChannelSection,
    }
}

api_method! {
    ChannelSectionsList: GET "channelSections" => "youtube.channelSections.list" {
        required: ["part"],
        request: (),
        response: ChannelSectionListResponse,
    }
}

api_method! {
    ChannelSectionsUpdate: PUT "channelSections" => "youtube.channelSections.update" {
        required: ["part"],
        request: ChannelSection,
        response: ChannelSection,
    }
}

impl ContentOwner for ChannelSectionsDelete {}
impl ContentOwner for ChannelSectionsInsert {}
impl ContentOwnerChannel for ChannelSectionsInsert {}
impl Conditional for ChannelSectionsList {}
impl ContentOwner for ChannelSectionsList {}
impl ContentOwner for ChannelSectionsUpdate {}

/// Operations on the `channelSections` resource, from [`YouTube::channel_sections`].
#[derive(Debug, Clone, Copy)]
pub struct ChannelSectionsService<'a> {
    client: &'a YouTube,
}

impl<'a> ChannelSectionsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Deletes a channel section.
    pub fn delete(&self, id: &str) -> Call<'a, ChannelSectionsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Adds a channel section to the authenticated user's channel. A channel can have up to
    /// 10 shelves.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channelSections/insert>
    pub fn insert(&self, part: &str, section: ChannelSection) -> Call<'a, ChannelSectionsInsert> {
        Call::with_body(self.client, section).query("part", part)
    }

    /// Returns channel sections that match the request criteria.
    ///
    /// Filter with exactly one of `channel_id`, `id`, or `mine`.
    pub fn list(&self, part: &str) -> Call<'a, ChannelSectionsList> {
        Call::new(self.client).query("part", part)
    }

    pub fn update(&self, part: &str, section: ChannelSection) -> Call<'a, ChannelSectionsUpdate> {
        Call::with_body(self.client, section).query("part", part)
    }
}

impl Call<'_, ChannelSectionsList> {
    pub fn channel_id(self, channel_id: &str) -> Self {
        self.query("channelId", channel_id)
    }

    /// Language used for the `localized` snippet of each section.
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }

    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    pub fn mine(self, mine: bool) -> Self {
        self.query("mine", mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn position_zero_is_sent() {
        let section = ChannelSection {
            snippet: Some(ChannelSectionSnippet {
                section_type: Some("singlePlaylist".to_string()),
                position: Some(0),
                ..Default::default()
            }),
            content_details: Some(ChannelSectionContentDetails {
                playlists: Some(vec!["PL123".to_string()]),
                channels: None,
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(section, @r#"
        {
          "contentDetails": {
            "playlists": [
              "PL123"
            ]
          },
          "snippet": {
            "position": 0,
            "type": "singlePlaylist"
          }
        }
        "#);
    }

    #[test]
    fn decode_localizations() {
        let json = r#"{"id":"UC.s1","localizations":{"fr":{"title":"Nouveautés"}}}"#;
        let section: ChannelSection = serde_json::from_str(json).unwrap();
        let localizations = section.localizations.unwrap();
        assert_eq!(localizations["fr"].title.as_deref(), Some("Nouveautés"));
    }
}
