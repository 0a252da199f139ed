//! Media payloads for upload-capable methods.
//!
//! A [`Media`] is held in memory and sent in a single request: as a `multipart/related` body
//! when the call also carries JSON metadata, or as the raw bytes otherwise. A
//! [`ResumableMedia`] is read incrementally and sent in chunks through a resumable upload
//! session, which suits large videos.

use crate::youtube_api::client::{YouTube, error_from_response};
use crate::youtube_api::error::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};
use http::StatusCode;
use http::header::{CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, LOCATION, RANGE};
use reqwest::RequestBuilder;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::instrument;

/// Resumable chunks other than the last must be a multiple of this many bytes.
pub const CHUNK_GRANULARITY: usize = 256 * 1024;

/// The chunk size used unless [`ResumableMedia::chunk_size`] says otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// In-memory media sent in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    content_type: String,
    data: Bytes,
}

impl Media {
    pub fn new(content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Reads a whole file into memory.
    pub async fn from_file(
        path: impl AsRef<Path>,
        content_type: impl Into<String>,
    ) -> std::io::Result<Self> {
        let data = tokio::fs::read(path).await?;
        Ok(Self::new(content_type, data))
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn attach<B: Serialize>(self, request: RequestBuilder, metadata: Option<&B>) -> Result<RequestBuilder> {
        let Some(metadata) = metadata else {
            return Ok(request
                .header(CONTENT_TYPE, self.content_type)
                .body(self.data));
        };
        let json = serde_json::to_vec(metadata).map_err(Error::Encode)?;
        let boundary = uuid::Uuid::new_v4().simple().to_string();
        let body = multipart_related(&boundary, &json, &self.content_type, &self.data);
        Ok(request
            .header(
                CONTENT_TYPE,
                format!("multipart/related; boundary={boundary}"),
            )
            .body(body))
    }
}

/// Builds a two-part `multipart/related` body: JSON metadata first, then the media.
fn multipart_related(boundary: &str, json: &[u8], content_type: &str, data: &[u8]) -> Bytes {
    let mut body = BytesMut::with_capacity(json.len() + data.len() + 4 * boundary.len() + 128);
    body.put_slice(format!("--{boundary}\r\n").as_bytes());
    body.put_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
    body.put_slice(json);
    body.put_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    body.put_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.put_slice(data);
    body.put_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body.freeze()
}

type ProgressFn = Box<dyn FnMut(u64, Option<u64>) + Send>;

/// Media streamed from a reader through a resumable upload session.
///
/// Uploads are not retried: if a chunk fails the error is returned and the session is
/// abandoned.
pub struct ResumableMedia {
    reader: Pin<Box<dyn AsyncRead + Send>>,
    content_type: String,
    size: Option<u64>,
    chunk_size: usize,
    progress: Option<ProgressFn>,
}

impl fmt::Debug for ResumableMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumableMedia")
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}

impl ResumableMedia {
    /// Uploads whatever `reader` yields until end of file.
    ///
    /// The total size is announced to the server only once the reader is exhausted, unless
    /// it is given up front with [`ResumableMedia::size`].
    pub fn new(reader: impl AsyncRead + Send + 'static, content_type: impl Into<String>) -> Self {
        Self {
            reader: Box::pin(reader),
            content_type: content_type.into(),
            size: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress: None,
        }
    }

    pub fn from_bytes(content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let size = data.len() as u64;
        Self::new(std::io::Cursor::new(data), content_type).size(size)
    }

    pub async fn from_file(
        path: impl AsRef<Path>,
        content_type: impl Into<String>,
    ) -> std::io::Result<Self> {
        let file = tokio::fs::File::open(path).await?;
        let size = file.metadata().await?.len();
        Ok(Self::new(file, content_type).size(size))
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets how many bytes are sent per request, rounded up to a multiple of
    /// [`CHUNK_GRANULARITY`].
    pub fn chunk_size(mut self, size: usize) -> Self {
        const MAX: usize = usize::MAX / CHUNK_GRANULARITY * CHUNK_GRANULARITY;
        self.chunk_size = size.clamp(1, MAX).div_ceil(CHUNK_GRANULARITY) * CHUNK_GRANULARITY;
        self
    }

    /// Called after every chunk with the bytes the server has acknowledged and the total size,
    /// if known.
    pub fn on_progress(mut self, progress: impl FnMut(u64, Option<u64>) + Send + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    fn initiate<B: Serialize>(&self, request: RequestBuilder, metadata: Option<&B>) -> Result<RequestBuilder> {
        let mut request = request.header("X-Upload-Content-Type", &self.content_type);
        if let Some(size) = self.size {
            request = request.header("X-Upload-Content-Length", size);
        }
        Ok(match metadata {
            Some(metadata) => {
                let json = serde_json::to_vec(metadata).map_err(Error::Encode)?;
                request
                    .header(CONTENT_TYPE, "application/json; charset=UTF-8")
                    .body(json)
            }
            None => request.header(CONTENT_LENGTH, 0),
        })
    }

    /// Sends the media to the session URI returned by the initiating request.
    #[instrument(skip_all, fields(content_type = %self.content_type, size = ?self.size))]
    async fn upload(mut self, client: &YouTube, session: reqwest::Response) -> Result<reqwest::Response> {
        let location = session
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| Error::Upload("upload session response has no Location header".into()))?;
        let session_uri = session
            .url()
            .join(location)
            .map_err(|e| Error::InvalidUrl(format!("{location}: {e}")))?;
        tracing::debug!(path = session_uri.path(), "opened resumable upload session");

        // `buffer` always holds the bytes starting at `offset`, the first unacknowledged byte.
        let mut buffer: Vec<u8> = Vec::with_capacity(self.chunk_size);
        let mut offset: u64 = 0;
        let mut eof = false;
        loop {
            if !eof && buffer.len() < self.chunk_size {
                let want = (self.chunk_size - buffer.len()) as u64;
                let read = (&mut self.reader).take(want).read_to_end(&mut buffer).await?;
                if (read as u64) < want {
                    eof = true;
                }
            }

            let len = buffer.len() as u64;
            let total = if eof { Some(offset + len) } else { self.size };
            let request = client
                .http()
                .put(session_uri.clone())
                .header(CONTENT_RANGE, content_range(offset, len, total))
                .header(CONTENT_TYPE, &self.content_type)
                .body(buffer.clone());
            let response = client.authorize(request).await?.send().await?;
            let status = response.status();

            if status == StatusCode::PERMANENT_REDIRECT {
                let acknowledged = response
                    .headers()
                    .get(RANGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(range_end)
                    .map_or(0, |last| last + 1);
                if acknowledged < offset || acknowledged > offset + len {
                    return Err(Error::Upload(format!(
                        "server acknowledged {acknowledged} bytes, but {} were sent",
                        offset + len
                    )));
                }
                if len == 0 && eof {
                    return Err(Error::Upload(
                        "server wants more data but the media is exhausted".into(),
                    ));
                }
                buffer.drain(..(acknowledged - offset) as usize);
                offset = acknowledged;
                tracing::trace!(offset, "chunk acknowledged");
                if let Some(progress) = self.progress.as_mut() {
                    progress(offset, total);
                }
                continue;
            }

            if status.is_success() {
                if let Some(progress) = self.progress.as_mut() {
                    progress(offset + len, Some(offset + len));
                }
                return Ok(response);
            }
            return Err(error_from_response(response).await);
        }
    }
}

/// The `Content-Range` of a chunk of `len` bytes at `offset`.
///
/// An empty chunk asks the server to finalize an upload of `offset` bytes.
fn content_range(offset: u64, len: u64, total: Option<u64>) -> String {
    let total = total.map_or_else(|| "*".to_string(), |t| t.to_string());
    if len == 0 {
        format!("bytes */{}", if total == "*" { offset.to_string() } else { total })
    } else {
        format!("bytes {}-{}/{}", offset, offset + len - 1, total)
    }
}

/// Parses the last byte index out of a `Range: bytes=0-N` header.
fn range_end(range: &str) -> Option<u64> {
    let (_, end) = range.strip_prefix("bytes=")?.split_once('-')?;
    end.trim().parse().ok()
}

/// The media attached to a call, if any.
#[derive(Debug)]
pub(crate) enum Upload {
    Simple(Media),
    Resumable(ResumableMedia),
}

impl Upload {
    /// The `uploadType` query parameter for this upload.
    pub(crate) fn protocol(&self, has_metadata: bool) -> &'static str {
        match self {
            Self::Simple(_) if has_metadata => "multipart",
            Self::Simple(_) => "media",
            Self::Resumable(_) => "resumable",
        }
    }

    /// Sends `request` with the media and returns the final response.
    pub(crate) async fn send<B: Serialize + Sync>(
        self,
        client: &YouTube,
        request: RequestBuilder,
        metadata: Option<&B>,
    ) -> Result<reqwest::Response> {
        match self {
            Self::Simple(media) => client.execute(media.attach(request, metadata)?).await,
            Self::Resumable(media) => {
                let session = client.execute(media.initiate(request, metadata)?).await?;
                media.upload(client, session).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multipart_body_layout() {
        let body = multipart_related("b0undary", br#"{"snippet":{}}"#, "video/mp4", b"\x00\x01");
        assert_eq!(
            &body[..],
            &b"--b0undary\r\n\
Content-Type: application/json; charset=UTF-8\r\n\r\n\
{\"snippet\":{}}\r\n\
--b0undary\r\n\
Content-Type: video/mp4\r\n\r\n\
\x00\x01\r\n\
--b0undary--\r\n"[..]
        );
    }

    #[test]
    fn content_ranges() {
        assert_eq!(content_range(0, 10, Some(10)), "bytes 0-9/10");
        assert_eq!(content_range(262144, 262144, None), "bytes 262144-524287/*");
        assert_eq!(content_range(20, 0, Some(20)), "bytes */20");
        assert_eq!(content_range(0, 0, None), "bytes */0");
    }

    #[test]
    fn parses_range_header() {
        assert_eq!(range_end("bytes=0-524287"), Some(524287));
        assert_eq!(range_end("bytes=0-"), None);
        assert_eq!(range_end("0-10"), None);
    }

    #[test]
    fn chunk_size_rounds_up() {
        let media = ResumableMedia::from_bytes("video/mp4", vec![0u8; 4]);
        assert_eq!(media.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(media.size, Some(4));
        let media = media.chunk_size(1);
        assert_eq!(media.chunk_size, CHUNK_GRANULARITY);
        let media = media.chunk_size(CHUNK_GRANULARITY + 1);
        assert_eq!(media.chunk_size, 2 * CHUNK_GRANULARITY);
        let media = media.chunk_size(0);
        assert_eq!(media.chunk_size, CHUNK_GRANULARITY);
        let media = media.chunk_size(usize::MAX);
        assert_eq!(media.chunk_size, usize::MAX / CHUNK_GRANULARITY * CHUNK_GRANULARITY);
    }

    #[test]
    fn upload_protocols() {
        let simple = Upload::Simple(Media::new("image/png", &b"png"[..]));
        assert_eq!(simple.protocol(true), "multipart");
        assert_eq!(simple.protocol(false), "media");
        let resumable = Upload::Resumable(ResumableMedia::from_bytes("video/mp4", &b"mp4"[..]));
        assert_eq!(resumable.protocol(true), "resumable");
    }
}
