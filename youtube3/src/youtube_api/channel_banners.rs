//! The `channelBanners` resource: uploading channel banner images.

use crate::youtube_api::call::{Call, ContentOwner, ContentOwnerChannel, MediaUpload, api_method};
use crate::youtube_api::client::YouTube;
use serde::{Deserialize, Serialize};

/// A channel banner returned as the response to a `channelBanners.insert` call.
///
/// Set the returned `url` as `brandingSettings.image.bannerExternalUrl` with
/// `channels.update` to make it the channel's banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBannerResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The URL of this banner image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

api_method! {
    ChannelBannersInsert: POST "channelBanners/insert" => "youtube.channelBanners.insert" {
        required: [],
        request: ChannelBannerResource,
        response: ChannelBannerResource,
    }
}

impl ContentOwner for ChannelBannersInsert {}
impl ContentOwnerChannel for ChannelBannersInsert {}
impl MediaUpload for ChannelBannersInsert {}

/// Operations on the `channelBanners` resource, from [`YouTube::channel_banners`].
#[derive(Debug, Clone, Copy)]
pub struct ChannelBannersService<'a> {
    client: &'a YouTube,
}

impl<'a> ChannelBannersService<'a> {
    pub(crate) fn new(client: &'a YouTube) -> Self {
        Self { client }
    }

    /// Uploads a channel banner image to YouTube.
    ///
    /// The image must have a 16:9 aspect ratio and be at least 2048x1152 pixels. Attach it
    /// with [`Call::media`].
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channelBanners/insert>
    pub fn insert(&self, banner: ChannelBannerResource) -> Call<'a, ChannelBannersInsert> {
        Call::with_body(self.client, banner)
    }
}
