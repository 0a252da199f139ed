//! The `i18nLanguages` and `i18nRegions` resources.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use serde::{Deserialize, Serialize};

/// Response for the `i18nLanguages.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nLanguageListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<I18nLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The `visitorId` identifies the visitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

/// An `i18nLanguage` resource identifies an application language that the YouTube
/// website supports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nLanguage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#i18nLanguage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<I18nLanguageSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nLanguageSnippet {
    /// A short BCP-47 code that uniquely identifies the language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,
    /// The name of the language as it is written in the requested `hl` language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response for the `i18nRegions.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nRegionListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<I18nRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The `visitorId` identifies the visitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

/// An `i18nRegion` resource identifies a region that a YouTube user can select as the
/// preferred content region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nRegion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#i18nRegion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<I18nRegionSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nRegionSnippet {
    /// The region code as a 2-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,
    /// The name of the region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

api_method! {
    I18nLanguagesList: GET "i18nLanguages" => "youtube.i18nLanguages.list" {
        required: ["part"],
        request: (),
        response: I18nLanguageListResponse,
    }
}

api_method! {
    I18nRegionsList: GET "i18nRegions" => "youtube.i18nRegions.list" {
        required: ["part"],
        request: (),
        response: I18nRegionListResponse,
    }
}

impl Conditional for I18nLanguagesList {}
impl Conditional for I18nRegionsList {}

/// Operations on the `i18nLanguages` resource, from [`YouTube::i18n_languages`].
#[derive(Debug, Clone, Copy)]
pub struct I18nLanguagesService<'a> {
    client: &'a YouTube,
}

impl<'a> I18nLanguagesService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Returns a list of application languages that the YouTube website supports.
    pub fn list(&self, part: &str) -> Call<'a, I18nLanguagesList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, I18nLanguagesList> {
    /// The language that should be used for the `name` of each item.
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }
}

/// Operations on the `i18nRegions` resource, from [`YouTube::i18n_regions`].
#[derive(Debug, Clone, Copy)]
pub struct I18nRegionsService<'a> {
    client: &'a YouTube,
}

impl<'a> I18nRegionsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Returns a list of content regions that the YouTube website supports.
    pub fn list(&self, part: &str) -> Call<'a, I18nRegionsList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, I18nRegionsList> {
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_regions() {
        let json = r#"{"kind":"youtube#i18nRegionListResponse","items":[{"id":"NL","snippet":{"gl":"NL","name":"Netherlands"}},{"id":"NO","snippet":{"gl":"NO","name":"Norway"}}]}"#;
        let response: I18nRegionListResponse = serde_json::from_str(json).unwrap();
        let names: Vec<_> = response
            .items
            .iter()
            .map(|r| r.snippet.as_ref().unwrap().name.as_deref().unwrap())
            .collect();
        assert_eq!(names, ["Netherlands", "Norway"]);
    }

    #[test]
    fn empty_language_list() {
        let response: I18nLanguageListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }
}
