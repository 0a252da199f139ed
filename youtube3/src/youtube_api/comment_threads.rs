//! The `commentThreads` resource: top-level comments with their replies.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::comments::{Comment, TextFormat};
use crate::youtube_api::types::{PageInfo, TokenPagination, impl_list_response, string_enum};
use serde::{Deserialize, Serialize};

/// Response for the `commentThreads.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CommentThread>,
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

/// A `commentThread` resource contains a top-level comment and, optionally, replies to it.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#commentThread`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// A subset of the replies. Use `comments.list` to page through all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<CommentThreadReplies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<CommentThreadSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadReplies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// Basic details about a comment thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    /// Whether the current viewer can reply to the thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Whether the thread, including all its comments and replies, is visible to all
    /// YouTube users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level_comment: Option<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reply_count: Option<i64>,
    /// Unset for comments about the channel itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl_list_response!(CommentThreadListResponse => CommentThread);

string_enum! {
    /// Filters `commentThreads.list` by moderation status.
    pub enum CommentThreadModerationStatus {
        HeldForReview => "heldForReview",
        LikelySpam => "likelySpam",
        /// Publicly visible threads. This is the default.
        Published => "published",
    }
}

string_enum! {
    /// The order of `commentThreads.list` results.
    pub enum CommentThreadOrder {
        Relevance => "relevance",
        /// Most recent first. This is the default.
        Time => "time",
    }
}

api_method! {
    CommentThreadsInsert: POST "commentThreads" => "youtube.commentThreads.insert" {
        required: ["part"],
        request: CommentThread,
        response: CommentThread,
    }
}

api_method! {
    CommentThreadsList: GET "commentThreads" => "youtube.commentThreads.list" {
        required: ["part"],
        request: (),
        response: CommentThreadListResponse,
    }
}

api_method! {
    CommentThreadsUpdate: PUT "commentThreads" => "youtube.commentThreads.update" {
        required: ["part"],
        request: CommentThread,
        response: CommentThread,
    }
}

impl Conditional for CommentThreadsList {}

/// Operations on the `commentThreads` resource, from [`YouTube::comment_threads`].
#[derive(Debug, Clone, Copy)]
pub struct CommentThreadsService<'a> {
    client: &'a YouTube,
}

impl<'a> CommentThreadsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Creates a new top-level comment.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/insert>
    pub fn insert(&self, part: &str, thread: CommentThread) -> Call<'a, CommentThreadsInsert> {
        Call::with_body(self.client, thread).query("part", part)
    }

    /// Returns comment threads that match the request criteria.
    ///
    /// Filter with exactly one of `all_threads_related_to_channel_id`, `channel_id`, `id`, or
    /// `video_id`.
    pub fn list(&self, part: &str) -> Call<'a, CommentThreadsList> {
        Call::new(self.client).query("part", part)
    }

    /// Modifies the top-level comment of a thread.
    pub fn update(&self, part: &str, thread: CommentThread) -> Call<'a, CommentThreadsUpdate> {
        Call::with_body(self.client, thread).query("part", part)
    }
}

impl Call<'_, CommentThreadsList> {
    /// Threads about the channel or any of its videos.
    pub fn all_threads_related_to_channel_id(self, channel_id: &str) -> Self {
        self.query("allThreadsRelatedToChannelId", channel_id)
    }

    /// Threads about the channel itself, not its videos.
    pub fn channel_id(self, channel_id: &str) -> Self {
        self.query("channelId", channel_id)
    }

    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    pub fn moderation_status(self, status: CommentThreadModerationStatus) -> Self {
        self.query("moderationStatus", status)
    }

    pub fn order(self, order: CommentThreadOrder) -> Self {
        self.query("order", order)
    }

    /// Only threads containing the search terms.
    pub fn search_terms(self, search_terms: &str) -> Self {
        self.query("searchTerms", search_terms)
    }

    pub fn text_format(self, text_format: TextFormat) -> Self {
        self.query("textFormat", text_format)
    }

    pub fn video_id(self, video_id: &str) -> Self {
        self.query("videoId", video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::comments::CommentSnippet;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_new_thread() {
        let thread = CommentThread {
            snippet: Some(CommentThreadSnippet {
                video_id: Some("dQw4w9WgXcQ".to_string()),
                top_level_comment: Some(Comment {
                    snippet: Some(CommentSnippet {
                        text_original: Some("First!".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        insta::assert_json_snapshot!(thread, @r#"
        {
          "snippet": {
            "topLevelComment": {
              "snippet": {
                "textOriginal": "First!"
              }
            },
            "videoId": "dQw4w9WgXcQ"
          }
        }
        "#);
    }

    #[test]
    fn decode_keeps_reply_order() {
        let json = r#"{"items":[{"id":"t1","replies":{"comments":[{"id":"r1"},{"id":"r2"},{"id":"r3"}]}}],"nextPageToken":"QURT"}"#;
        let response: CommentThreadListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.next_page_token.as_deref(), Some("QURT"));
        let replies = response.items[0]
            .replies
            .as_ref()
            .unwrap()
            .comments
            .as_ref()
            .unwrap();
        let ids: Vec<_> = replies.iter().map(|c| c.id.as_deref().unwrap()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
    }

    #[test]
    fn list_filters() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .comment_threads()
            .list("snippet,replies")
            .video_id("v1")
            .order(CommentThreadOrder::Relevance)
            .moderation_status(CommentThreadModerationStatus::LikelySpam)
            .text_format(TextFormat::PlainText);
        assert_eq!(call.get_param("videoId"), Some("v1"));
        assert_eq!(call.get_param("order"), Some("relevance"));
        assert_eq!(call.get_param("moderationStatus"), Some("likelySpam"));
        assert_eq!(call.get_param("textFormat"), Some("plainText"));
    }
}
