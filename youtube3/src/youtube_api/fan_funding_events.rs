//! The `fanFundingEvents` resource.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    ChannelProfileDetails, PageInfo, TokenPagination, impl_list_response,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `fanFundingEvents.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanFundingEventListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<FanFundingEvent>,
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

/// A `fanFundingEvent` resource represents a fan funding event on a YouTube channel.
///
/// Fan funding events occur when a user gives one-time monetary support to the channel owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanFundingEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The ID that YouTube assigns to uniquely identify the fan funding event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#fanFundingEvent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<FanFundingEventSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanFundingEventSnippet {
    /// The amount of funding in micros of `currency`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub amount_micros: Option<u64>,
    /// The channel where the event occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// The text contents of the comment left by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// The ISO 4217 currency code of the funding amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// A rendered string showing the amount and currency, e.g. "$1.00".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporter_details: Option<ChannelProfileDetails>,
}

impl_list_response!(FanFundingEventListResponse => FanFundingEvent);

api_method! {
    FanFundingEventsList: GET "fanFundingEvents" => "youtube.fanFundingEvents.list" {
        required: ["part"],
        request: (),
        response: FanFundingEventListResponse,
    }
}

impl Conditional for FanFundingEventsList {}

/// Operations on the `fanFundingEvents` resource, from [`YouTube::fan_funding_events`].
#[derive(Debug, Clone, Copy)]
pub struct FanFundingEventsService<'a> {
    client: &'a YouTube,
}

impl<'a> FanFundingEventsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Lists fan funding events for the authorized user's channel.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube.readonly`
    pub fn list(&self, part: &str) -> Call<'a, FanFundingEventsList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, FanFundingEventsList> {
    /// Language used for localized text such as `displayString`.
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }
}
