//! The `videoAbuseReportReasons` resource.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use serde::{Deserialize, Serialize};

/// Response for the `videoAbuseReportReasons.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAbuseReportReasonListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<VideoAbuseReportReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The `visitorId` identifies the visitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

/// A `videoAbuseReportReason` resource contains information about a reason that a
/// video would be flagged for containing abusive content.
///
/// Pass its `id` as the `reasonId` of a [`VideoAbuseReport`](crate::youtube_api::videos::VideoAbuseReport).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAbuseReportReason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#videoAbuseReportReason`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoAbuseReportReasonSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAbuseReportReasonSnippet {
    /// The localized label belonging to this abuse report reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Secondary reasons, listed in the order they should be shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_reasons: Option<Vec<VideoAbuseReportSecondaryReason>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAbuseReportSecondaryReason {
    /// The ID to pass as `secondaryReasonId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

api_method! {
    VideoAbuseReportReasonsList: GET "videoAbuseReportReasons" => "youtube.videoAbuseReportReasons.list" {
        required: ["part"],
        request: (),
        response: VideoAbuseReportReasonListResponse,
    }
}

impl Conditional for VideoAbuseReportReasonsList {}

/// Operations on the `videoAbuseReportReasons` resource, from
/// [`YouTube::video_abuse_report_reasons`].
#[derive(Debug, Clone, Copy)]
pub struct VideoAbuseReportReasonsService<'a> {
    client: &'a YouTube,
}

impl<'a> VideoAbuseReportReasonsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Returns the reasons that can be used to report abusive videos.
    pub fn list(&self, part: &str) -> Call<'a, VideoAbuseReportReasonsList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, VideoAbuseReportReasonsList> {
    /// The language of the returned labels.
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_secondary_reasons() {
        let json = r#"
        {
          "items": [
            {
              "id": "S",
              "snippet": {
                "label": "Spam or misleading",
                "secondaryReasons": [
                  {"id": "27", "label": "Mass advertising"},
                  {"id": "28", "label": "Pharmaceutical drugs for sale"}
                ]
              }
            }
          ]
        }"#;
        let response: VideoAbuseReportReasonListResponse = serde_json::from_str(json).unwrap();
        let secondary = response.items[0]
            .snippet
            .as_ref()
            .unwrap()
            .secondary_reasons
            .as_ref()
            .unwrap();
        assert_eq!(secondary.len(), 2);
        assert_eq!(secondary[1].id.as_deref(), Some("28"));
    }
}
