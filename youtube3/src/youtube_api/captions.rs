//! The `captions` resource: caption tracks attached to videos.

use crate::youtube_api::call::{Call, Conditional, ContentOwner, MediaUpload, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::error::Result;
use crate::youtube_api::types::string_enum;
use bytes::Bytes;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `captions.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Caption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The `visitorId` identifies the visitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

/// A `caption` resource represents a YouTube caption track.
///
/// A caption track is associated with exactly one YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/docs/captions#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#caption`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<CaptionSnippet>,
}

/// Basic details about a caption track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSnippet {
    /// `commentary`, `descriptive`, `primary`, or `unknown`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_track_type: Option<String>,
    /// Why YouTube failed to process the track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Whether YouTube synchronized the track to the audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_synced: Option<bool>,
    /// Whether the track contains closed captions for the deaf and hard of hearing.
    #[serde(rename = "isCC", skip_serializing_if = "Option::is_none")]
    pub is_cc: Option<bool>,
    /// Draft tracks are not publicly visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_easy_reader: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_large: Option<bool>,
    /// BCP-47 language tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `failed`, `serving`, or `syncing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `ASR`, `forced`, or `standard`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

string_enum! {
    /// A format to convert a caption track to when downloading it.
    pub enum CaptionFormat {
        /// SubViewer subtitle.
        Sbv => "sbv",
        /// Scenarist Closed Caption format.
        Scc => "scc",
        /// SubRip subtitle.
        Srt => "srt",
        /// Timed Text Markup Language caption.
        Ttml => "ttml",
        /// Web Video Text Tracks caption.
        Vtt => "vtt",
    }
}

api_method! {
    CaptionsDelete: DELETE "captions" => "youtube.captions.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    CaptionsDownload: GET "captions/{id}" => "youtube.captions.download" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    CaptionsInsert: POST "captions" => "youtube.captions.insert" {
        required: ["part"],
        request: Caption,
        response: Caption,
    }
}

api_method! {
    CaptionsList: GET "captions" => "youtube.captions.list" {
        required: ["part", "videoId"],
        request: (),
        response: CaptionListResponse,
    }
}

api_method! {
    CaptionsUpdate: PUT "captions" => "youtube.captions.update" {
        required: ["part"],
        request: Caption,
        response: Caption,
    }
}

impl ContentOwner for CaptionsDelete {}
impl Conditional for CaptionsDownload {}
impl ContentOwner for CaptionsDownload {}
impl ContentOwner for CaptionsInsert {}
impl MediaUpload for CaptionsInsert {}
impl Conditional for CaptionsList {}
impl ContentOwner for CaptionsList {}
impl ContentOwner for CaptionsUpdate {}
impl MediaUpload for CaptionsUpdate {}

/// Operations on the `captions` resource, from [`YouTube::captions`].
#[derive(Debug, Clone, Copy)]
pub struct CaptionsService<'a> {
    client: &'a YouTube,
}

impl<'a> CaptionsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Deletes a specified caption track.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube.force-ssl`
    /// * `https://www.googleapis.com/auth/youtubepartner`
    pub fn delete(&self, id: &str) -> Call<'a, CaptionsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Downloads a caption track.
    ///
    /// Finish with `download()` to receive the track itself; `send()` only reports whether
    /// the request succeeded.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/captions/download>
    pub fn download(&self, id: &str) -> Call<'a, CaptionsDownload> {
        Call::new(self.client).path("id", id)
    }

    /// Uploads a caption track. Attach the track with [`Call::media`].
    pub fn insert(&self, part: &str, caption: Caption) -> Call<'a, CaptionsInsert> {
        Call::with_body(self.client, caption).query("part", part)
    }

    /// Returns the caption tracks associated with a video.
    ///
    /// The response does not contain the captions themselves.
    pub fn list(&self, part: &str, video_id: &str) -> Call<'a, CaptionsList> {
        Call::new(self.client)
            .query("part", part)
            .query("videoId", video_id)
    }

    /// Updates a caption track, optionally replacing its contents with new media.
    pub fn update(&self, part: &str, caption: Caption) -> Call<'a, CaptionsUpdate> {
        Call::with_body(self.client, caption).query("part", part)
    }
}

impl Call<'_, CaptionsDelete> {
    /// Act on behalf of a content partner's channel.
    pub fn on_behalf_of(self, on_behalf_of: &str) -> Self {
        self.query("onBehalfOf", on_behalf_of)
    }
}

impl Call<'_, CaptionsDownload> {
    pub fn on_behalf_of(self, on_behalf_of: &str) -> Self {
        self.query("onBehalfOf", on_behalf_of)
    }

    /// Converts the track to another format on the way out.
    pub fn tfmt(self, format: CaptionFormat) -> Self {
        self.query("tfmt", format)
    }

    /// Machine-translates the track into the given ISO 639-1 language.
    pub fn tlang(self, language: &str) -> Self {
        self.query("tlang", language)
    }

    /// Executes the call and returns the caption track.
    pub async fn download(self) -> Result<Bytes> {
        let track = self.send_media().await?;
        tracing::debug!(bytes = track.len(), "downloaded caption track");
        Ok(track)
    }
}

impl Call<'_, CaptionsInsert> {
    pub fn on_behalf_of(self, on_behalf_of: &str) -> Self {
        self.query("onBehalfOf", on_behalf_of)
    }

    /// Whether YouTube should ignore the timing in the uploaded file and generate new timing
    /// from the video's audio.
    pub fn sync(self, sync: bool) -> Self {
        self.query("sync", sync)
    }
}

impl Call<'_, CaptionsList> {
    /// A comma-separated list of caption IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    pub fn on_behalf_of(self, on_behalf_of: &str) -> Self {
        self.query("onBehalfOf", on_behalf_of)
    }
}

impl Call<'_, CaptionsUpdate> {
    pub fn on_behalf_of(self, on_behalf_of: &str) -> Self {
        self.query("onBehalfOf", on_behalf_of)
    }

    pub fn sync(self, sync: bool) -> Self {
        self.query("sync", sync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_caption_list() {
        let json = r#"
        {
          "kind": "youtube#captionListResponse",
          "etag": "\"abc\"",
          "items": [
            {
              "kind": "youtube#caption",
              "id": "AUieDaZ",
              "snippet": {
                "videoId": "M7FIvfx5J10",
                "lastUpdated": "2017-04-20T09:33:53.811Z",
                "trackKind": "standard",
                "language": "en",
                "isCC": false,
                "isDraft": false,
                "status": "serving"
              }
            }
          ]
        }"#;
        let response: CaptionListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        let snippet = response.items[0].snippet.as_ref().unwrap();
        assert_eq!(snippet.is_cc, Some(false));
        assert_eq!(snippet.track_kind.as_deref(), Some("standard"));
        assert_eq!(
            snippet.last_updated.unwrap().to_string(),
            "2017-04-20T09:33:53.811Z"
        );
    }

    #[tokio::test]
    async fn download_without_id_never_leaves_the_process() {
        // Port 9 is discard; a request that got this far would fail with a transport error.
        let yt = YouTube::builder()
            .base_url("http://127.0.0.1:9/youtube/v3/")
            .build()
            .unwrap();
        let err = yt.captions().download("").tfmt(CaptionFormat::Srt).download().await.unwrap_err();
        assert!(
            matches!(
                err,
                Error::MissingParameter {
                    method: "youtube.captions.download",
                    parameter: "id"
                }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn format_literals() {
        let all = [
            (CaptionFormat::Sbv, "sbv"),
            (CaptionFormat::Scc, "scc"),
            (CaptionFormat::Srt, "srt"),
            (CaptionFormat::Ttml, "ttml"),
            (CaptionFormat::Vtt, "vtt"),
        ];
        for (format, literal) in all {
            assert_eq!(format.as_str(), literal);
            assert_eq!(literal.parse::<CaptionFormat>(), Ok(format));
        }
    }
}
