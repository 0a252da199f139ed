//! A typed client for the YouTube Data API v3.
//!
//! [`youtube_api`] holds the resource bindings and the [`YouTube`](youtube_api::YouTube)
//! handle they are reached from. [`oauth`] implements the installed-application OAuth
//! flow used to obtain user credentials.

pub mod oauth;
pub mod youtube_api;
