//! YouTube Data API v3 client library.
//!
//! Every REST resource of the API has a module with its schema types and a service that
//! is reached from [`YouTube`]. A service method takes the required parameters of the
//! REST method and returns a [`Call`]; optional parameters are chained setters on the call,
//! and nothing is sent until [`Call::send`] is awaited.
//!
//! # Core Concepts
//!
//! ## Parts
//! Most methods take a `part` parameter: a comma-separated list of the resource sections
//! to return or write, such as `snippet,statistics`. Sections that are not listed are
//! left unset in responses, and on `update` they are left untouched on the server.
//!
//! ## Paging
//! List calls whose method accepts a `pageToken` can be turned into a stream of items
//! with [`Call::stream`], which follows `nextPageToken` until the server stops sending
//! one. Live chat is the exception: [`live_chat`] polls forever, so use its `follow`.
//!
//! ## Broadcasts vs Streams
//! A [`live_broadcasts::LiveBroadcast`] is the viewer-facing event; a
//! [`live_streams::LiveStream`] is the encoder pipeline that feeds it. Create the stream
//! once, create a broadcast per event, bind them, then transition the broadcast.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use tokio_stream::StreamExt;
//! use youtube3::youtube_api::{Result, YouTube};
//!
//! # async fn example() -> Result<()> {
//! let yt = YouTube::builder().api_key("my-api-key").build()?;
//!
//! // All public playlists of a channel, across every page.
//! let playlists = yt
//!     .playlists()
//!     .list("snippet")
//!     .channel_id("UC_x5XG1OV2P6uZZ5FSM9Ttw")
//!     .max_results(50)
//!     .stream();
//! let mut playlists = std::pin::pin!(playlists);
//! while let Some(playlist) = playlists.next().await {
//!     let playlist = playlist?;
//!     let title = playlist.snippet.and_then(|s| s.title).unwrap_or_default();
//!     println!("{}: {title}", playlist.id.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod activities;
pub mod call;
pub mod captions;
pub mod channel_banners;
pub mod channel_sections;
pub mod channels;
pub mod client;
pub mod comment_threads;
pub mod comments;
pub mod content_rating;
pub mod error;
pub mod fan_funding_events;
pub mod guide_categories;
pub mod i18n;
pub mod live_broadcasts;
pub mod live_chat;
pub mod live_streams;
pub mod media;
pub mod playlist_items;
pub mod playlists;
pub mod search;
pub mod sponsors;
pub mod subscriptions;
pub mod super_chat_events;
pub mod thumbnails;
pub mod types;
pub mod video_abuse_report_reasons;
pub mod video_categories;
pub mod videos;
pub mod watermarks;

pub use call::{ApiMethod, Call, Conditional, ContentOwner, ContentOwnerChannel, MediaUpload};
pub use client::{BASE_URL, UPLOAD_BASE_URL, YouTube, YouTubeBuilder};
pub use error::{ApiError, Error, ErrorItem, Result};
pub use media::{Media, ResumableMedia};
pub use types::{
    ListResponse, PageInfo, PagedStream, PrivacyStatus, ResourceId, Thumbnail, ThumbnailDetails,
    UnknownVariant,
};

pub use activities::Activity;
pub use captions::Caption;
pub use channel_sections::ChannelSection;
pub use channels::Channel;
pub use comment_threads::CommentThread;
pub use comments::Comment;
pub use live_broadcasts::LiveBroadcast;
pub use live_chat::{LiveChatBan, LiveChatMessage, LiveChatModerator};
pub use live_streams::LiveStream;
pub use playlist_items::PlaylistItem;
pub use playlists::Playlist;
pub use search::SearchResult;
pub use subscriptions::Subscription;
pub use videos::{Rating, Video};
