//! The `watermarks` resource: channel-wide in-video branding.

use crate::youtube_api::call::{Call, ContentOwner, MediaUpload, api_method};
use crate::youtube_api::channels::{InvideoPosition, InvideoTiming};
use crate::youtube_api::client::YouTube;
use serde::{Deserialize, Serialize};

/// A watermark image shown over a channel's videos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvideoBranding {
    /// The image, base64-encoded. Only used on input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Where the watermark is displayed over the player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<InvideoPosition>,
    /// The channel viewers are sent to when they click the watermark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_channel_id: Option<String>,
    /// When the watermark is displayed during playback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<InvideoTiming>,
}

api_method! {
    WatermarksSet: POST "watermarks/set" => "youtube.watermarks.set" {
        required: ["channelId"],
        request: InvideoBranding,
        response: none,
    }
}

api_method! {
    WatermarksUnset: POST "watermarks/unset" => "youtube.watermarks.unset" {
        required: ["channelId"],
        request: (),
        response: none,
    }
}

impl ContentOwner for WatermarksSet {}
impl MediaUpload for WatermarksSet {}
impl ContentOwner for WatermarksUnset {}

/// Operations on the `watermarks` resource, from [`YouTube::watermarks`].
#[derive(Debug, Clone, Copy)]
pub struct WatermarksService<'a> {
    client: &'a YouTube,
}

impl<'a> WatermarksService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Uploads a watermark image to YouTube and sets it for a channel.
    ///
    /// Attach the image with [`Call::media`].
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/watermarks/set>
    pub fn set(&self, channel_id: &str, branding: InvideoBranding) -> Call<'a, WatermarksSet> {
        Call::with_body(self.client, branding).query("channelId", channel_id)
    }

    /// Deletes a channel's watermark image.
    pub fn unset(&self, channel_id: &str) -> Call<'a, WatermarksUnset> {
        Call::new(self.client).query("channelId", channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_branding() {
        let branding = InvideoBranding {
            target_channel_id: Some("UC123".to_string()),
            position: Some(InvideoPosition {
                position_type: Some("corner".to_string()),
                corner_position: Some("topRight".to_string()),
            }),
            timing: Some(InvideoTiming {
                timing_type: Some("offsetFromEnd".to_string()),
                offset_ms: Some(15000),
                duration_ms: None,
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(branding, @r#"
        {
          "position": {
            "cornerPosition": "topRight",
            "type": "corner"
          },
          "targetChannelId": "UC123",
          "timing": {
            "offsetMs": "15000",
            "type": "offsetFromEnd"
          }
        }
        "#);
    }
}
