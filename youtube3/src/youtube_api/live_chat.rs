//! The live chat resources: `liveChatBans`, `liveChatMessages`, and `liveChatModerators`.
//!
//! Every broadcast has a chat whose ID is in
//! [`LiveBroadcastSnippet::live_chat_id`](crate::youtube_api::live_broadcasts::LiveBroadcastSnippet::live_chat_id).
//! New messages are read by polling `liveChatMessages.list`, which
//! [`Call::follow`](Call#method.follow) does until the chat goes offline.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::error::Result;
use crate::youtube_api::types::{
    ChannelProfileDetails, PageInfo, PagedStream, TokenPagination, impl_list_response,
    string_enum,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio_stream::Stream;

/// A `liveChatBan` resource identifies a chat ban.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveChatBans#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatBan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#liveChatBan`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<LiveChatBanSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatBanSnippet {
    /// How long the ban lasts. Only for `temporary` bans.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub ban_duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_user_details: Option<ChannelProfileDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_chat_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ban_type: Option<LiveChatBanType>,
}

/// Response for the `liveChatMessages.list` call.
///
/// Unlike other list responses, a chat never runs out of pages: keep polling with
/// `next_page_token` after waiting `polling_interval_millis`, until `offline_at` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessageListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LiveChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Pass as `pageToken` to retrieve the next page in the result set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    /// When the chat went offline. No new messages will arrive after this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_at: Option<Timestamp>,
    /// How long to wait before polling for new messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polling_interval_millis: Option<i64>,
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

/// A `liveChatMessage` resource represents a chat message in a YouTube live chat.
///
/// Chat messages include regular text messages, fan funding events, polls, and moderation
/// events such as bans and deletions.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveChatMessages#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessage {
    /// Details about the message author. Not set on insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_details: Option<LiveChatMessageAuthorDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#liveChatMessage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<LiveChatMessageSnippet>,
}

/// Details about the author of a live chat message.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveChatMessages#authorDetails>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessageAuthorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_chat_moderator: Option<bool>,
    /// Whether the author owns the broadcast the chat belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_chat_owner: Option<bool>,
    /// Whether the author is a sponsor of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_chat_sponsor: Option<bool>,
    /// Whether the author's channel is verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// Basic details about a chat message.
///
/// Exactly one of the `*_details` fields is set, matching `message_type`.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveChatMessages#snippet>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessageSnippet {
    /// The channel of the user that authored the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_channel_id: Option<String>,
    /// A string that can be displayed to the user. Unset for messages being deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_funding_event_details: Option<LiveChatFanFundingEventDetails>,
    /// Whether the message has display content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_display_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_deleted_details: Option<LiveChatMessageDeletedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retracted_details: Option<LiveChatMessageRetractedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_closed_details: Option<LiveChatPollClosedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_edited_details: Option<LiveChatPollEditedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_opened_details: Option<LiveChatPollOpenedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_voted_details: Option<LiveChatPollVotedDetails>,
    /// When the message was originally published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_chat_details: Option<LiveChatSuperChatDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_message_details: Option<LiveChatTextMessageDetails>,
    /// The kind of message, see [`LiveChatMessageSnippet::kind`].
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_banned_details: Option<LiveChatUserBannedMessageDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatFanFundingEventDetails {
    /// The amount and currency, formatted for display, e.g. "$1.00".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_display_string: Option<String>,
    /// The amount in micros of `currency`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub amount_micros: Option<u64>,
    /// The ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessageDeletedDetails {
    /// The message that was deleted by a moderator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_message_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessageRetractedDetails {
    /// The message that was retracted by its author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retracted_message_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatPollClosedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatPollEditedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LiveChatPollItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatPollItem {
    /// Plain text description of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatPollOpenedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LiveChatPollItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatPollVotedDetails {
    /// The poll item the user chose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_id: Option<String>,
}

/// Details about a Super Chat purchase.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveChatMessages#snippet.superChatDetails>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatSuperChatDetails {
    /// The purchase amount and currency, formatted for display, e.g. "$5.00".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_display_string: Option<String>,
    /// The purchase amount in micros of `currency`. $1.75 is `1750000`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub amount_micros: Option<u64>,
    /// The ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Higher tiers are more expensive, more prominent, and pinned longer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<i64>,
    /// The comment added by the user to this Super Chat event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatTextMessageDetails {
    /// The raw text of the message as entered by the user.
    ///
    /// The formatted version is in [`LiveChatMessageSnippet::display_message`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatUserBannedMessageDetails {
    /// Only set for `temporary` bans.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::youtube_api::types::int64",
    )]
    pub ban_duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_user_details: Option<ChannelProfileDetails>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ban_type: Option<LiveChatBanType>,
}

/// Response for the `liveChatModerators.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatModeratorListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LiveChatModerator>,
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

/// A `liveChatModerator` resource identifies a chat moderator.
///
/// See: <https://developers.google.com/youtube/v3/live/docs/liveChatModerators#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatModerator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#liveChatModerator`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<LiveChatModeratorSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatModeratorSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator_details: Option<ChannelProfileDetails>,
}

impl_list_response!(LiveChatModeratorListResponse => LiveChatModerator);

string_enum! {
    /// How long a chat ban lasts.
    pub enum LiveChatBanType {
        Permanent => "permanent",
        /// Lasts `ban_duration_seconds`.
        Temporary => "temporary",
    }
}

string_enum! {
    /// The kind of a live chat message.
    ///
    /// See: <https://developers.google.com/youtube/v3/live/docs/liveChatMessages#snippet.type>
    pub enum LiveChatMessageType {
        /// The broadcaster ended the chat. No more messages will follow.
        ChatEndedEvent => "chatEndedEvent",
        FanFundingEvent => "fanFundingEvent",
        /// A moderator deleted a message.
        MessageDeletedEvent => "messageDeletedEvent",
        /// The author deleted their own message.
        MessageRetractedEvent => "messageRetractedEvent",
        NewSponsorEvent => "newSponsorEvent",
        PollClosedEvent => "pollClosedEvent",
        PollEditedEvent => "pollEditedEvent",
        PollOpenedEvent => "pollOpenedEvent",
        PollVotedEvent => "pollVotedEvent",
        SponsorOnlyModeEndedEvent => "sponsorOnlyModeEndedEvent",
        SponsorOnlyModeStartedEvent => "sponsorOnlyModeStartedEvent",
        SuperChatEvent => "superChatEvent",
        /// A regular chat message posted by a viewer.
        TextMessageEvent => "textMessageEvent",
        /// A placeholder for a message that was deleted before it could be delivered.
        Tombstone => "tombstone",
        UserBannedEvent => "userBannedEvent",
    }
}

impl LiveChatMessageSnippet {
    /// The parsed `type` of the message.
    ///
    /// `None` when the type is missing or is not one this crate knows about. The raw value
    /// stays available in `message_type`.
    pub fn kind(&self) -> Option<LiveChatMessageType> {
        self.message_type.as_deref()?.parse().ok()
    }
}

impl LiveChatMessage {
    /// A plain text message to post with [`LiveChatMessagesService::insert`].
    pub fn text(live_chat_id: &str, text: &str) -> Self {
        Self {
            snippet: Some(LiveChatMessageSnippet {
                live_chat_id: Some(live_chat_id.to_string()),
                message_type: Some(LiveChatMessageType::TextMessageEvent.to_string()),
                text_message_details: Some(LiveChatTextMessageDetails {
                    message_text: Some(text.to_string()),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

api_method! {
    LiveChatBansDelete: DELETE "liveChat/bans" => "youtube.liveChatBans.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    LiveChatBansInsert: POST "liveChat/bans" => "youtube.liveChatBans.insert" {
        required: ["part"],
        request: LiveChatBan,
        response: LiveChatBan,
    }
}

api_method! {
    LiveChatMessagesDelete: DELETE "liveChat/messages" => "youtube.liveChatMessages.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    LiveChatMessagesInsert: POST "liveChat/messages" => "youtube.liveChatMessages.insert" {
        required: ["part"],
        request: LiveChatMessage,
        response: LiveChatMessage,
    }
}

api_method! {
    LiveChatMessagesList: GET "liveChat/messages" => "youtube.liveChatMessages.list" {
        required: ["liveChatId", "part"],
        request: (),
        response: LiveChatMessageListResponse,
    }
}

api_method! {
    LiveChatModeratorsDelete: DELETE "liveChat/moderators" => "youtube.liveChatModerators.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    LiveChatModeratorsInsert: POST "liveChat/moderators" => "youtube.liveChatModerators.insert" {
        required: ["part"],
        request: LiveChatModerator,
        response: LiveChatModerator,
    }
}

api_method! {
    LiveChatModeratorsList: GET "liveChat/moderators" => "youtube.liveChatModerators.list" {
        required: ["liveChatId", "part"],
        request: (),
        response: LiveChatModeratorListResponse,
    }
}

impl Conditional for LiveChatMessagesList {}
impl Conditional for LiveChatModeratorsList {}

/// Operations on the `liveChatBans` resource, from [`YouTube::live_chat_bans`].
#[derive(Debug, Clone, Copy)]
pub struct LiveChatBansService<'a> {
    client: &'a YouTube,
}

impl<'a> LiveChatBansService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Removes a chat ban.
    pub fn delete(&self, id: &str) -> Call<'a, LiveChatBansDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Bans a user from a chat, permanently or for `ban_duration_seconds`.
    pub fn insert(&self, part: &str, ban: LiveChatBan) -> Call<'a, LiveChatBansInsert> {
        Call::with_body(self.client, ban).query("part", part)
    }
}

/// Operations on the `liveChatMessages` resource, from [`YouTube::live_chat_messages`].
#[derive(Debug, Clone, Copy)]
pub struct LiveChatMessagesService<'a> {
    client: &'a YouTube,
}

impl<'a> LiveChatMessagesService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Deletes a chat message.
    pub fn delete(&self, id: &str) -> Call<'a, LiveChatMessagesDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Posts a message to a chat. See [`LiveChatMessage::text`].
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube`
    /// * `https://www.googleapis.com/auth/youtube.force-ssl`
    pub fn insert(&self, part: &str, message: LiveChatMessage) -> Call<'a, LiveChatMessagesInsert> {
        Call::with_body(self.client, message).query("part", part)
    }

    /// Lists messages of a chat, oldest first.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/live/docs/liveChatMessages/list>
    pub fn list(&self, live_chat_id: &str, part: &str) -> Call<'a, LiveChatMessagesList> {
        Call::new(self.client)
            .query("liveChatId", live_chat_id)
            .query("part", part)
    }
}

impl<'a> Call<'a, LiveChatMessagesList> {
    /// The language of localized text such as Super Chat amounts.
    pub fn hl(self, hl: &str) -> Self {
        self.query("hl", hl)
    }

    /// Messages per page, between 200 and 2000. Defaults to 500.
    pub fn max_results(self, max_results: u32) -> Self {
        self.query("maxResults", max_results)
    }

    /// Continues after the messages of a previous response.
    pub fn page_token(self, token: &str) -> Self {
        self.query("pageToken", token)
    }

    /// Size of the author profile images, between 16 and 720 pixels. Defaults to 88.
    pub fn profile_image_size(self, size: u32) -> Self {
        self.query("profileImageSize", size)
    }

    /// Yields every message of the chat as it arrives.
    ///
    /// The first page is requested immediately with this call's parameters. After that the
    /// chat is polled with each response's `nextPageToken`, waiting the
    /// `pollingIntervalMillis` the server asked for in between. The stream ends once a
    /// response carries `offlineAt`, or after the first error.
    pub fn follow(self) -> impl Stream<Item = Result<LiveChatMessage>> + Send + 'a {
        let interval = Arc::new(AtomicU64::new(0));
        PagedStream::new(move |page_token: Option<String>| {
            let mut call = self.reissue();
            if let Some(token) = &page_token {
                call = call.page_token(token);
            }
            let interval = Arc::clone(&interval);
            async move {
                if page_token.is_some() {
                    let wait = interval.load(Ordering::Relaxed);
                    tokio::time::sleep(Duration::from_millis(wait)).await;
                }
                let page = call.send().await?;
                let wait = page.polling_interval_millis.unwrap_or(0).max(0);
                interval.store(wait as u64, Ordering::Relaxed);
                tracing::trace!(
                    messages = page.items.len(),
                    polling_interval_millis = wait,
                    "polled live chat"
                );
                let next_page_token = match page.offline_at {
                    Some(offline_at) => {
                        tracing::debug!(%offline_at, "live chat went offline");
                        None
                    }
                    None => page.next_page_token,
                };
                Ok((VecDeque::from(page.items), next_page_token))
            }
        })
    }
}

/// Operations on the `liveChatModerators` resource, from [`YouTube::live_chat_moderators`].
#[derive(Debug, Clone, Copy)]
pub struct LiveChatModeratorsService<'a> {
    client: &'a YouTube,
}

impl<'a> LiveChatModeratorsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Removes a chat moderator.
    pub fn delete(&self, id: &str) -> Call<'a, LiveChatModeratorsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Adds a moderator to a chat.
    pub fn insert(
        &self,
        part: &str,
        moderator: LiveChatModerator,
    ) -> Call<'a, LiveChatModeratorsInsert> {
        Call::with_body(self.client, moderator).query("part", part)
    }

    /// Lists the moderators of a chat.
    pub fn list(&self, live_chat_id: &str, part: &str) -> Call<'a, LiveChatModeratorsList> {
        Call::new(self.client)
            .query("liveChatId", live_chat_id)
            .query("part", part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_super_chat_message() {
        let json = r#"
        {
          "kind": "youtube#liveChatMessage",
          "id": "m1",
          "snippet": {
            "type": "superChatEvent",
            "liveChatId": "chat1",
            "authorChannelId": "UCfan",
            "publishedAt": "2017-05-06T07:08:09.123Z",
            "hasDisplayContent": true,
            "displayMessage": "$5.00 from A Fan: hello",
            "superChatDetails": {
              "amountMicros": "5000000",
              "currency": "USD",
              "amountDisplayString": "$5.00",
              "userComment": "hello",
              "tier": 2
            }
          },
          "authorDetails": {
            "channelId": "UCfan",
            "displayName": "A Fan",
            "isChatSponsor": false,
            "isChatModerator": false
          }
        }"#;
        let message: LiveChatMessage = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&message).unwrap();
        let again: LiveChatMessage = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, message);
        assert_eq!(serde_json::to_string(&again).unwrap(), encoded);
        let snippet = message.snippet.unwrap();
        assert_eq!(snippet.kind(), Some(LiveChatMessageType::SuperChatEvent));
        let details = snippet.super_chat_details.unwrap();
        assert_eq!(details.amount_micros, Some(5_000_000));
        assert_eq!(details.tier, Some(2));
        assert_eq!(
            message.author_details.unwrap().display_name.as_deref(),
            Some("A Fan")
        );
    }

    #[test]
    fn unknown_message_type_still_decodes() {
        let json = r#"{"snippet":{"type":"superStickerEvent","displayMessage":"sticker"}}"#;
        let message: LiveChatMessage = serde_json::from_str(json).unwrap();
        let snippet = message.snippet.unwrap();
        assert_eq!(snippet.kind(), None);
        assert_eq!(snippet.message_type.as_deref(), Some("superStickerEvent"));
    }

    #[test]
    fn encode_text_message() {
        let message = LiveChatMessage::text("chat1", "hi all");
        insta::assert_json_snapshot!(message, @r#"
        {
          "snippet": {
            "liveChatId": "chat1",
            "textMessageDetails": {
              "messageText": "hi all"
            },
            "type": "textMessageEvent"
          }
        }
        "#);
    }

    #[test]
    fn encode_temporary_ban() {
        let ban = LiveChatBan {
            snippet: Some(LiveChatBanSnippet {
                live_chat_id: Some("chat1".to_string()),
                ban_type: Some(LiveChatBanType::Temporary),
                ban_duration_seconds: Some(300),
                banned_user_details: Some(ChannelProfileDetails {
                    channel_id: Some("UCtroll".to_string()),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(ban, @r#"
        {
          "snippet": {
            "banDurationSeconds": "300",
            "bannedUserDetails": {
              "channelId": "UCtroll"
            },
            "liveChatId": "chat1",
            "type": "temporary"
          }
        }
        "#);
    }

    #[test]
    fn decode_poll_response_metadata() {
        let json = r#"{"pollingIntervalMillis":4000,"nextPageToken":"GLcB","offlineAt":"2017-05-06T10:00:00Z","items":[]}"#;
        let response: LiveChatMessageListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.polling_interval_millis, Some(4000));
        assert!(response.offline_at.is_some());
        assert!(response.items.is_empty());
    }

    #[test]
    fn list_requires_chat_id() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .live_chat_messages()
            .list("chat1", "snippet,authorDetails")
            .profile_image_size(64)
            .max_results(200);
        assert_eq!(call.get_param("liveChatId"), Some("chat1"));
        assert_eq!(call.get_param("profileImageSize"), Some("64"));
        assert_eq!(call.get_param("maxResults"), Some("200"));
    }
}
