//! The `videoCategories` resource.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{PageInfo, TokenPagination};
use serde::{Deserialize, Serialize};

/// Response for the `videoCategories.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCategoryListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<VideoCategory>,
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

/// A `videoCategory` resource identifies a category that has been or could be
/// associated with uploaded videos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#videoCategory`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoCategorySnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCategorySnippet {
    /// Whether videos can be associated with the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignable: Option<bool>,
    /// The YouTube channel that created the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

api_method! {
    VideoCategoriesList: GET "videoCategories" => "youtube.videoCategories.list" {
        required: ["part"],
        request: (),
        response: VideoCategoryListResponse,
    }
}

impl Conditional for VideoCategoriesList {}

/// Operations on the `videoCategories` resource, from [`YouTube::video_categories`].
#[derive(Debug, Clone, Copy)]
pub struct VideoCategoriesService<'a> {
    client: &'a YouTube,
}

impl<'a> VideoCategoriesService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Returns a list of categories that can be associated with YouTube videos.
    ///
    /// Filter with exactly one of `id` or `region_code`.
    pub fn list(&self, part: &str) -> Call<'a, VideoCategoriesList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, VideoCategoriesList> {
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }

    /// A comma-separated list of category IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
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
    fn decode_category() {
        let json = r#"{"items":[{"kind":"youtube#videoCategory","id":"10","snippet":{"channelId":"UCBR8-60-B28hp2BmDPdntcQ","title":"Music","assignable":true}}]}"#;
        let response: VideoCategoryListResponse = serde_json::from_str(json).unwrap();
        let snippet = response.items[0].snippet.as_ref().unwrap();
        assert_eq!(snippet.title.as_deref(), Some("Music"));
        assert_eq!(snippet.assignable, Some(true));
    }

    #[test]
    fn list_by_region() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt.video_categories().list("snippet").region_code("US");
        assert_eq!(call.get_param("regionCode"), Some("US"));
        assert_eq!(call.get_param("id"), None);
    }
}
