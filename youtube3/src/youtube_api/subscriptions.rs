//! The `subscriptions` resource.

use crate::youtube_api::call::{
    Call, Conditional, ContentOwner, ContentOwnerChannel, api_method,
};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{
    PageInfo, ResourceId, ThumbnailDetails, TokenPagination, impl_list_response, string_enum,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `subscriptions.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Subscription>,
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

/// A `subscription` resource contains information about a YouTube user subscription.
///
/// See: <https://developers.google.com/youtube/v3/docs/subscriptions#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<SubscriptionContentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#subscription`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SubscriptionSnippet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_snippet: Option<SubscriptionSubscriberSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionContentDetails {
    /// The kind of activity the subscription is for: `all` or `uploads`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// The number of new items since the user last read the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_item_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_item_count: Option<i64>,
}

/// Basic details about a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnippet {
    /// The channel of the subscriber.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the subscription was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// The channel the user subscribed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Basic details about the subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSubscriberSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<ThumbnailDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl_list_response!(SubscriptionListResponse => Subscription);

impl Subscription {
    /// A new subscription of the authenticated user to `channel_id`.
    pub fn to_channel(channel_id: &str) -> Self {
        Self {
            snippet: Some(SubscriptionSnippet {
                resource_id: Some(ResourceId {
                    kind: Some("youtube#channel".to_string()),
                    channel_id: Some(channel_id.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

string_enum! {
    /// The order of `subscriptions.list` results.
    pub enum SubscriptionOrder {
        /// Alphabetical by channel title.
        Alphabetical => "alphabetical",
        /// The default.
        Relevance => "relevance",
        /// By order of activity.
        Unread => "unread",
    }
}

api_method! {
    SubscriptionsDelete: DELETE "subscriptions" => "youtube.subscriptions.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    SubscriptionsInsert: POST "subscriptions" => "youtube.subscriptions.insert" {
        required: ["part"],
        request: Subscription,
        response: Subscription,
    }
}

api_method! {
    SubscriptionsList: GET "subscriptions" => "youtube.subscriptions.list" {
        required: ["part"],
        request: (),
        response: SubscriptionListResponse,
    }
}

impl Conditional for SubscriptionsList {}

impl ContentOwner for SubscriptionsList {}
impl ContentOwnerChannel for SubscriptionsList {}

/// Operations on the `subscriptions` resource, from [`YouTube::subscriptions`].
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsService<'a> {
    client: &'a YouTube,
}

impl<'a> SubscriptionsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Unsubscribes. `id` is the subscription ID, not the channel ID.
    pub fn delete(&self, id: &str) -> Call<'a, SubscriptionsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Subscribes the authenticated user to a channel. See [`Subscription::to_channel`].
    pub fn insert(
        &self,
        part: &str,
        subscription: Subscription,
    ) -> Call<'a, SubscriptionsInsert> {
        Call::with_body(self.client, subscription).query("part", part)
    }

    /// Returns subscriptions that match the request criteria.
    ///
    /// Filter with exactly one of `channel_id`, `id`, `mine`, `my_recent_subscribers`, or
    /// `my_subscribers`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/subscriptions/list>
    pub fn list(&self, part: &str) -> Call<'a, SubscriptionsList> {
        Call::new(self.client).query("part", part)
    }
}

impl Call<'_, SubscriptionsList> {
    /// Subscriptions of the given channel.
    pub fn channel_id(self, channel_id: &str) -> Self {
        self.query("channelId", channel_id)
    }

    /// Only subscriptions to the listed channels, as a comma-separated list of channel IDs.
    pub fn for_channel_id(self, channel_ids: &str) -> Self {
        self.query("forChannelId", channel_ids)
    }

    /// A comma-separated list of subscription IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    pub fn mine(self, mine: bool) -> Self {
        self.query("mine", mine)
    }

    /// The authenticated user's subscribers, newest first.
    pub fn my_recent_subscribers(self, my_recent_subscribers: bool) -> Self {
        self.query("myRecentSubscribers", my_recent_subscribers)
    }

    /// The authenticated user's subscribers, in no particular order.
    pub fn my_subscribers(self, my_subscribers: bool) -> Self {
        self.query("mySubscribers", my_subscribers)
    }

    pub fn order(self, order: SubscriptionOrder) -> Self {
        self.query("order", order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn subscribe_to_channel() {
        insta::assert_json_snapshot!(Subscription::to_channel("UC_x5XG1OV2P6uZZ5FSM9Ttw"), @r#"
        {
          "snippet": {
            "resourceId": {
              "kind": "youtube#channel",
              "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw"
            }
          }
        }
        "#);
    }

    #[test]
    fn list_parameters() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .subscriptions()
            .list("snippet,contentDetails")
            .mine(true)
            .for_channel_id("UC1,UC2")
            .order(SubscriptionOrder::Unread);
        assert_eq!(call.get_param("mine"), Some("true"));
        assert_eq!(call.get_param("forChannelId"), Some("UC1,UC2"));
        assert_eq!(call.get_param("order"), Some("unread"));
    }

    #[test]
    fn decode_subscriber() {
        let json = r#"{"id":"sub1","subscriberSnippet":{"title":"Fan","channelId":"UCfan"},"contentDetails":{"totalItemCount":120,"newItemCount":0,"activityType":"all"}}"#;
        let subscription: Subscription = serde_json::from_str(json).unwrap();
        let details = subscription.content_details.unwrap();
        assert_eq!(details.total_item_count, Some(120));
        assert_eq!(details.new_item_count, Some(0));
        assert_eq!(
            subscription.subscriber_snippet.unwrap().title.as_deref(),
            Some("Fan")
        );
    }
}
