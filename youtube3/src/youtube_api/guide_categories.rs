//! The `guideCategories` resource.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{PageInfo, TokenPagination};
use serde::{Deserialize, Serialize};

/// Response for the `guideCategories.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideCategoryListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<GuideCategory>,
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

/// A `guideCategory` resource identifies a category that YouTube algorithmically
/// assigns based on a channel's content or other indicators, such as the channel's
/// popularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#guideCategory`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<GuideCategorySnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideCategorySnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

api_method! {
    GuideCategoriesList: GET "guideCategories" => "youtube.guideCategories.list" {
        required: ["part"],
        request: (),
        response: GuideCategoryListResponse,
    }
}

impl Conditional for GuideCategoriesList {}

/// Operations on the `guideCategories` resource, from [`YouTube::guide_categories`].
#[derive(Debug, Clone, Copy)]
pub struct GuideCategoriesService<'a> {
    client: &'a YouTube,
}

impl<'a> GuideCategoriesService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Returns a list of categories that can be associated with YouTube channels.
    ///
    /// Filter with exactly one of `id` or `region_code`.
    pub fn list(&self, part: &str) -> Call<'a, GuideCategoriesList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, GuideCategoriesList> {
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }

    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    /// An ISO 3166-1 alpha-2 country code.
    pub fn region_code(self, region_code: &str) -> Self {
        self.query("regionCode", region_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_parameters() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt.guide_categories().list("snippet").region_code("NL").hl("nl");
        assert_eq!(call.get_param("part"), Some("snippet"));
        assert_eq!(call.get_param("regionCode"), Some("NL"));
        assert_eq!(call.get_param("hl"), Some("nl"));
    }
}
