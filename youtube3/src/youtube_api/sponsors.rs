//! The `sponsors` resource.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    ChannelProfileDetails, PageInfo, TokenPagination, impl_list_response, string_enum,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `sponsors.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Sponsor>,
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

/// A `sponsor` resource represents a sponsor of a YouTube channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#sponsor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SponsorSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorSnippet {
    /// The channel being sponsored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_details: Option<ChannelProfileDetails>,
    /// When the user became a sponsor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_since: Option<Timestamp>,
}

impl_list_response!(SponsorListResponse => Sponsor);

string_enum! {
    /// Which sponsors `sponsors.list` returns.
    pub enum SponsorFilter {
        /// All sponsors, ordered alphabetically.
        All => "all",
        /// The most recent sponsors first. This is the default.
        Newest => "newest",
    }
}

api_method! {
    SponsorsList: GET "sponsors" => "youtube.sponsors.list" {
        required: ["part"],
        request: (),
        response: SponsorListResponse,
    }
}

impl Conditional for SponsorsList {}

/// Operations on the `sponsors` resource, from [`YouTube::sponsors`].
#[derive(Debug, Clone, Copy)]
pub struct SponsorsService<'a> {
    client: &'a YouTube,
}

impl<'a> SponsorsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Lists sponsors for the authorized user's channel.
    pub fn list(&self, part: &str) -> Call<'a, SponsorsList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, SponsorsList> {
    pub fn filter(self, filter: SponsorFilter) -> Self {
        self.query("filter", filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filter_parameter() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt.sponsors().list("snippet").filter(SponsorFilter::All);
        assert_eq!(call.get_param("filter"), Some("all"));
    }

    #[test]
    fn decode_sponsor() {
        let json = r#"{"snippet":{"channelId":"UCowner","sponsorSince":"2016-12-01T00:00:00Z","sponsorDetails":{"channelUrl":"https://youtube.com/c/fan"}}}"#;
        let sponsor: Sponsor = serde_json::from_str(json).unwrap();
        let snippet = sponsor.snippet.unwrap();
        assert_eq!(
            snippet.sponsor_since,
            Some("2016-12-01T00:00:00Z".parse().unwrap())
        );
        assert_eq!(
            snippet.sponsor_details.unwrap().channel_url.as_deref(),
            Some("https://youtube.com/c/fan")
        );
    }
}
