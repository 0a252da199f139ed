//! The `thumbnails` resource: custom video thumbnails.

use crate::youtube_api::call::{Call, ContentOwner, MediaUpload, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::ThumbnailDetails;
use serde::{Deserialize, Serialize};

/// Response for the `thumbnails.set` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailSetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The thumbnails generated from the uploaded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ThumbnailDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

api_method! {
    ThumbnailsSet: POST "thumbnails/set" => "youtube.thumbnails.set" {
        required: ["videoId"],
        request: (),
        response: ThumbnailSetResponse,
    }
}

impl ContentOwner for ThumbnailsSet {}
impl MediaUpload for ThumbnailsSet {}

/// Operations on the `thumbnails` resource, from [`YouTube::thumbnails`].
#[derive(Debug, Clone, Copy)]
pub struct ThumbnailsService<'a> {
    client: &'a YouTube,
}

impl<'a> ThumbnailsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Uploads a custom video thumbnail to YouTube and sets it for a video.
    ///
    /// Attach the image with [`Call::media`]; without media the request carries no image.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/thumbnails/set>
    pub fn set(&self, video_id: &str) -> Call<'a, ThumbnailsSet> {
        Call::new(self.client).query("videoId", video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_set_response() {
        let json = r#"{"kind":"youtube#thumbnailSetResponse","items":[{"default":{"url":"https://i.ytimg.com/vi/x/default.jpg","width":120,"height":90}}]}"#;
        let response: ThumbnailSetResponse = serde_json::from_str(json).unwrap();
        let items = response.items.unwrap();
        let default = items[0].default.as_ref().unwrap();
        assert_eq!(default.width, Some(120));
        assert_eq!(default.url.as_deref(), Some("https://i.ytimg.com/vi/x/default.jpg"));
    }
}
