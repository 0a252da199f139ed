//! The `comments` resource: individual comments and replies.

use crate::youtube_api::call::{Call, Conditional, api_method};
use crate::youtube_api::client::YouTube;
use crate::youtube_api::types::{PageInfo, TokenPagination, impl_list_response, string_enum};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response for the `comments.list` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponse {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Serialized EventId of the request which produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// The resources returned, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Comment>,
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

/// A `comment` resource contains information about a single YouTube comment.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments#resource>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Always `youtube#comment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<CommentSnippet>,
}

/// Basic details about a comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    /// The author's channel, as an object of the form `{"value": "UC..."}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_channel_id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_channel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_profile_image_url: Option<String>,
    /// Whether the current viewer can rate the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_rate: Option<bool>,
    /// The channel the comment is about, for channel comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,
    /// Only visible to users who can moderate the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderation_status: Option<String>,
    /// The parent comment, for replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// The comment text as displayed, possibly with HTML markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_display: Option<String>,
    /// The raw text of the comment as it was posted or last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// `like` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_rating: Option<String>,
}

impl_list_response!(CommentListResponse => Comment);

string_enum! {
    /// How comment text is returned.
    pub enum TextFormat {
        /// Comments are returned in HTML format. This is the default.
        Html => "html",
        PlainText => "plainText",
    }
}

string_enum! {
    /// A moderation status to assign with `comments.setModerationStatus`.
    pub enum CommentModerationStatus {
        /// Marks a comment as awaiting review by a moderator.
        HeldForReview => "heldForReview",
        /// Clears a comment for public display.
        Published => "published",
        /// Rejects a comment as unfit for display.
        Rejected => "rejected",
    }
}

api_method! {
    CommentsDelete: DELETE "comments" => "youtube.comments.delete" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    CommentsInsert: POST "comments" => "youtube.comments.insert" {
        required: ["part"],
        request: Comment,
        response: Comment,
    }
}

api_method! {
    CommentsList: GET "comments" => "youtube.comments.list" {
        required: ["part"],
        request: (),
        response: CommentListResponse,
    }
}

api_method! {
    CommentsMarkAsSpam: POST "comments/markAsSpam" => "youtube.comments.markAsSpam" {
        required: ["id"],
        request: (),
        response: none,
    }
}

api_method! {
    CommentsSetModerationStatus: POST "comments/setModerationStatus" => "youtube.comments.setModerationStatus" {
        required: ["id", "moderationStatus"],
        request: (),
        response: none,
    }
}

api_method! {
    CommentsUpdate: PUT "comments" => "youtube.comments.update" {
        required: ["part"],
        request: Comment,
        response: Comment,
    }
}

impl Conditional for CommentsList {}

/// Operations on the `comments` resource, from [`YouTube::comments`].
#[derive(Debug, Clone, Copy)]
pub struct CommentsService<'a> {
    client: &'a YouTube,
}

impl<'a> CommentsService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Deletes a comment.
    pub fn delete(&self, id: &str) -> Call<'a, CommentsDelete> {
        Call::new(self.client).query("id", id)
    }

    /// Creates a reply to an existing comment.
    ///
    /// To start a new top-level thread use `commentThreads.insert` instead.
    ///
    /// # Required Scopes
    ///
    /// * `https://www.googleapis.com/auth/youtube.force-ssl`
    pub fn insert(&self, part: &str, comment: Comment) -> Call<'a, CommentsInsert> {
        Call::with_body(self.client, comment).query("part", part)
    }

    /// Returns comments that match the request criteria.
    ///
    /// Filter with exactly one of `id` or `parent_id`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/comments/list>
    pub fn list(&self, part: &str) -> Call<'a, CommentsList> {
        Call::new(self.client).query("part", part)
    }

    /// Flags one or more comments as spam.
    pub fn mark_as_spam(&self, id: &str) -> Call<'a, CommentsMarkAsSpam> {
        Call::new(self.client).query("id", id)
    }

    /// Sets the moderation status of one or more comments.
    ///
    /// The caller must own the channel or video the comments belong to.
    pub fn set_moderation_status(
        &self,
        id: &str,
        moderation_status: CommentModerationStatus,
    ) -> Call<'a, CommentsSetModerationStatus> {
        Call::new(self.client)
            .query("id", id)
            .query("moderationStatus", moderation_status)
    }

    /// Modifies a comment. Only `snippet.textOriginal` can be changed.
    pub fn update(&self, part: &str, comment: Comment) -> Call<'a, CommentsUpdate> {
        Call::with_body(self.client, comment).query("part", part)
    }
}

impl Call<'_, CommentsList> {
    /// A comma-separated list of comment IDs.
    pub fn id(self, id: &str) -> Self {
        self.query("id", id)
    }

    /// Returns replies to the given top-level comment.
    pub fn parent_id(self, parent_id: &str) -> Self {
        self.query("parentId", parent_id)
    }

    pub fn text_format(self, text_format: TextFormat) -> Self {
        self.query("textFormat", text_format)
    }
}

impl Call<'_, CommentsSetModerationStatus> {
    /// Also bans the author from commenting on the channel. Only valid together with
    /// [`CommentModerationStatus::Rejected`].
    pub fn ban_author(self, ban_author: bool) -> Self {
        self.query("banAuthor", ban_author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_comment() {
        let json = r#"
        {
          "kind": "youtube#comment",
          "id": "z13icrq45mzjfvkpv04ce54gbnjgvroojf0",
          "snippet": {
            "authorDisplayName": "Someone",
            "authorChannelId": {"value": "UCabc"},
            "textDisplay": "Nice <b>video</b>",
            "textOriginal": "Nice *video*",
            "canRate": true,
            "viewerRating": "none",
            "likeCount": 3,
            "publishedAt": "2017-02-01T10:00:00.000Z",
            "updatedAt": "2017-02-01T10:00:00.000Z"
          }
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        let snippet = comment.snippet.unwrap();
        assert_eq!(snippet.like_count, Some(3));
        assert_eq!(
            snippet.author_channel_id,
            Some(serde_json::json!({"value": "UCabc"}))
        );
        assert_eq!(snippet.published_at, snippet.updated_at);
    }

    #[test]
    fn moderation_parameters() {
        let yt = YouTube::builder().build().unwrap();
        let call = yt
            .comments()
            .set_moderation_status("c1,c2", CommentModerationStatus::Rejected)
            .ban_author(true);
        assert_eq!(call.get_param("id"), Some("c1,c2"));
        assert_eq!(call.get_param("moderationStatus"), Some("rejected"));
        assert_eq!(call.get_param("banAuthor"), Some("true"));
    }

    #[test]
    fn text_format_literals() {
        assert_eq!(TextFormat::PlainText.as_str(), "plainText");
        assert_eq!(serde_json::to_string(&TextFormat::Html).unwrap(), r#""html""#);
        assert_eq!("plainText".parse::<TextFormat>(), Ok(TextFormat::PlainText));
    }
}
