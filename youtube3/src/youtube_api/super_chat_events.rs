//! The `superChatEvents` resource.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    ChannelProfileDetails, PageInfo, TokenPagination, impl_list_response,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `superChatEvents.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperChatEventListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SuperChatEvent>,
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

/// A `superChatEvent` resource represents a Super Chat purchase on a YouTube channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperChatEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#superChatEvent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SuperChatEventSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperChatEventSnippet {
    /// The purchase amount, in micros of `currency`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub amount_micros: Option<u64>,
    /// The channel where the purchase occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// The text contents of the comment left by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// The ISO 4217 currency code of the purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// A rendered string showing the amount and currency, e.g. "$1.00".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_string: Option<String>,
    /// The tier of the purchase. Higher tiers are more expensive and are displayed longer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporter_details: Option<ChannelProfileDetails>,
}

impl_list_response!(SuperChatEventListResponse => SuperChatEvent);

api_method! {
    SuperChatEventsList: GET "superChatEvents" => "youtube.superChatEvents.list" {
        required: ["part"],
        request: (),
        response: SuperChatEventListResponse,
    }
}

impl Conditional for SuperChatEventsList {}

/// Operations on the `superChatEvents` resource, from [`YouTube::super_chat_events`].
#[derive(Debug, Clone, Copy)]
pub struct SuperChatEventsService<'a> {
    client: &'a YouTube,
}

impl<'a> SuperChatEventsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Lists Super Chat events for the authorized user's channel, newest first.
    pub fn list(&self, part: &str) -> Call<'a, SuperChatEventsList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, SuperChatEventsList> {
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn amount_is_a_string_on_the_wire() {
        let event = SuperChatEvent {
            snippet: Some(SuperChatEventSnippet {
                amount_micros: Some(5_000_000),
                currency: Some("EUR".to_string()),
                message_type: Some(2),
                ..Default::default()
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(event, @r#"
        {
          "snippet": {
            "amountMicros": "5000000",
            "currency": "EUR",
            "messageType": 2
          }
        }
        "#);
        let back: SuperChatEvent =
            serde_json::from_value(serde_json::to_value(&event).unwrap()).unwrap();
        assert_eq!(back, event);
    }
}
