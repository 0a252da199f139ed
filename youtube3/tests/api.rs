mod common;

use common::{MockServer, Reply};
use http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio_stream::StreamExt;
use youtube3::youtube_api::captions::CaptionFormat;
use youtube3::youtube_api::comments::CommentModerationStatus;
use youtube3::youtube_api::videos::VideoSnippet;
use youtube3::youtube_api::{Error, Media, Rating, ResumableMedia, Video};

#[tokio::test]
async fn list_sends_query_parameters_and_key() {
    let server = MockServer::start().await;
    server.reply(Reply::json(json!({
        "kind": "youtube#videoListResponse",
        "etag": "\"list-etag\"",
        "items": [
            {"kind": "youtube#video", "id": "dQw4w9WgXcQ", "snippet": {"title": "Never Gonna Give You Up"}}
        ]
    })));
    let yt = server.client();

    let videos = yt
        .videos()
        .list("snippet,statistics")
        .id("dQw4w9WgXcQ")
        .fields("items(id,snippet/title)")
        .send()
        .await
        .unwrap();

    assert_eq!(videos.items.len(), 1);
    assert_eq!(videos.items[0].id.as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(
        videos.items[0].snippet.as_ref().and_then(|s| s.title.as_deref()),
        Some("Never Gonna Give You Up")
    );

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/youtube/v3/videos");
    assert_eq!(request.param("alt"), Some("json"));
    assert_eq!(request.param("part"), Some("snippet,statistics"));
    assert_eq!(request.param("id"), Some("dQw4w9WgXcQ"));
    assert_eq!(request.param("fields"), Some("items(id,snippet/title)"));
    assert_eq!(request.param("key"), Some("test-key"));
    assert!(request.header("authorization").is_none());
    assert!(request.header("user-agent").unwrap().starts_with("youtube3/"));
}

#[tokio::test]
async fn access_token_goes_in_authorization_header() {
    let server = MockServer::start().await;
    server.reply(Reply::status(204));
    let yt = server
        .builder()
        .access_token("ya29.fixed")
        .user_agent("my-app/1.0")
        .build()
        .unwrap();

    yt.videos().rate("dQw4w9WgXcQ", Rating::Like).send().await.unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/youtube/v3/videos/rate");
    assert_eq!(request.param("rating"), Some("like"));
    assert_eq!(request.param("key"), None);
    assert_eq!(request.header("authorization"), Some("Bearer ya29.fixed"));
    assert_eq!(request.header("user-agent"), Some("my-app/1.0"));
}

#[tokio::test]
async fn missing_required_parameter_never_reaches_the_server() {
    let server = MockServer::start().await;
    let yt = server.client();

    let err = yt.videos().rate("", Rating::Like).send().await.unwrap_err();
    assert!(
        matches!(
            err,
            Error::MissingParameter {
                method: "youtube.videos.rate",
                parameter: "id"
            }
        ),
        "{err:?}"
    );

    let err = yt
        .comments()
        .set_moderation_status("comment-1", CommentModerationStatus::Rejected)
        .param("moderationStatus", "")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingParameter { .. }), "{err:?}");

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn request_body_is_json() {
    let server = MockServer::start().await;
    server.reply(Reply::json(json!({
        "kind": "youtube#video",
        "id": "abc",
        "snippet": {"title": "New title", "categoryId": "22"}
    })));
    let yt = server.client();

    let video = Video {
        id: Some("abc".to_string()),
        snippet: Some(VideoSnippet {
            title: Some("New title".to_string()),
            category_id: Some("22".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let updated = yt.videos().update("snippet", video).send().await.unwrap();
    assert_eq!(updated.id.as_deref(), Some("abc"));

    let request = &server.requests()[0];
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/youtube/v3/videos");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(
        request.json(),
        json!({"id": "abc", "snippet": {"title": "New title", "categoryId": "22"}})
    );
}

#[tokio::test]
async fn not_modified_is_reported_as_such() {
    let server = MockServer::start().await;
    server.reply(Reply::status(304).header("etag", "\"same\""));
    let yt = server.client();

    let err = yt
        .channels()
        .list("snippet")
        .id("UC_x5XG1OV2P6uZZ5FSM9Ttw")
        .if_none_match("\"same\"")
        .send()
        .await
        .unwrap_err();

    assert!(err.is_not_modified(), "{err:?}");
    assert_eq!(err.status(), Some(http::StatusCode::NOT_MODIFIED));
    let Error::NotModified { headers } = err else {
        unreachable!()
    };
    assert_eq!(headers.get("etag").unwrap(), "\"same\"");
    assert_eq!(server.requests()[0].header("if-none-match"), Some("\"same\""));
}

#[tokio::test]
async fn error_envelope_is_parsed() {
    let server = MockServer::start().await;
    server.reply(
        Reply::status(403)
            .header("content-type", "application/json")
            .body(
                json!({
                    "error": {
                        "code": 403,
                        "message": "The request cannot be completed because you have exceeded your quota.",
                        "errors": [{
                            "domain": "youtube.quota",
                            "reason": "quotaExceeded",
                            "message": "The request cannot be completed because you have exceeded your quota."
                        }]
                    }
                })
                .to_string(),
            ),
    );
    let yt = server.client();

    let err = yt.search().list("snippet").q("rust").send().await.unwrap_err();
    assert_eq!(err.status(), Some(http::StatusCode::FORBIDDEN));
    let Error::Api(api) = err else {
        panic!("expected an API error, got {err:?}");
    };
    assert!(api.is_quota_exceeded());
    assert_eq!(api.reasons().collect::<Vec<_>>(), vec!["quotaExceeded"]);
    assert_eq!(api.errors[0].domain, "youtube.quota");
    assert_eq!(api.headers.get("content-type").unwrap(), "application/json");
}

#[tokio::test]
async fn non_json_error_body_is_kept() {
    let server = MockServer::start().await;
    server.reply(Reply::status(502).body("Bad Gateway"));
    let yt = server.client();

    let err = yt.i18n_languages().list("snippet").send().await.unwrap_err();
    let Error::Api(api) = err else {
        panic!("expected an API error, got {err:?}");
    };
    assert_eq!(api.code.as_u16(), 502);
    assert!(api.message.is_empty());
    assert!(api.errors.is_empty());
    assert_eq!(api.body, "Bad Gateway");
    assert_eq!(api.to_string(), "YouTube API error 502: Bad Gateway");
}

#[tokio::test]
async fn stream_follows_next_page_token() {
    let server = MockServer::start().await;
    server
        .reply(Reply::json(json!({
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "CAIQAA",
            "pageInfo": {"totalResults": 3, "resultsPerPage": 2},
            "items": [{"id": "item-1"}, {"id": "item-2"}]
        })))
        .reply(Reply::json(json!({
            "kind": "youtube#playlistItemListResponse",
            "prevPageToken": "CAIQAQ",
            "pageInfo": {"totalResults": 3, "resultsPerPage": 2},
            "items": [{"id": "item-3"}]
        })));
    let yt = server.client();

    let items: Vec<_> = yt
        .playlist_items()
        .list("snippet")
        .playlist_id("PLxyz")
        .max_results(2)
        .stream()
        .collect()
        .await;
    let ids: Vec<_> = items
        .into_iter()
        .map(|item| item.unwrap().id.unwrap())
        .collect();
    assert_eq!(ids, vec!["item-1", "item-2", "item-3"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].param("pageToken"), None);
    assert_eq!(requests[1].param("pageToken"), Some("CAIQAA"));
    for request in &requests {
        assert_eq!(request.param("playlistId"), Some("PLxyz"));
        assert_eq!(request.param("maxResults"), Some("2"));
    }
}

#[tokio::test]
async fn stream_ends_after_an_error() {
    let server = MockServer::start().await;
    server
        .reply(Reply::json(json!({
            "nextPageToken": "next",
            "items": [{"id": "sub-1"}]
        })))
        .reply(Reply::status(500).body("boom"));
    let yt = server.client();

    let results: Vec<_> = yt
        .subscriptions()
        .list("id")
        .mine(true)
        .stream()
        .collect()
        .await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().id.as_deref(), Some("sub-1"));
    assert!(matches!(&results[1], Err(Error::Api(api)) if api.code.as_u16() == 500));
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn path_parameters_are_escaped_and_media_is_downloaded() {
    let server = MockServer::start().await;
    server.reply(Reply::status(200).body("WEBVTT\n\n00:00.000 --> 00:01.000\nhi\n"));
    let yt = server.client();

    let track = yt
        .captions()
        .download("cap/1 en")
        .tfmt(CaptionFormat::Vtt)
        .tlang("de")
        .download()
        .await
        .unwrap();
    assert!(track.starts_with(b"WEBVTT"));

    let request = &server.requests()[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/youtube/v3/captions/cap%2F1%20en");
    assert_eq!(request.param("alt"), Some("media"));
    assert_eq!(request.param("tfmt"), Some("vtt"));
    assert_eq!(request.param("tlang"), Some("de"));
}

#[tokio::test]
async fn media_only_upload() {
    let server = MockServer::start().await;
    server.reply(Reply::json(json!({
        "kind": "youtube#thumbnailSetResponse",
        "items": [{"default": {"url": "https://i.ytimg.com/vi/abc/default.jpg"}}]
    })));
    let yt = server.client();

    let png = &b"\x89PNG\r\n\x1a\n"[..];
    let response = yt
        .thumbnails()
        .set("abc")
        .media(Media::new("image/png", png))
        .send()
        .await
        .unwrap();
    assert_eq!(response.items.map(|items| items.len()), Some(1));

    let request = &server.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/upload/youtube/v3/thumbnails/set");
    assert_eq!(request.param("uploadType"), Some("media"));
    assert_eq!(request.param("videoId"), Some("abc"));
    assert_eq!(request.header("content-type"), Some("image/png"));
    assert_eq!(&request.body[..], png);
}

#[tokio::test]
async fn multipart_upload_carries_metadata_and_media() {
    let server = MockServer::start().await;
    server.reply(Reply::json(json!({"kind": "youtube#video", "id": "new-video"})));
    let yt = server.client();

    let video = Video {
        snippet: Some(VideoSnippet {
            title: Some("Holiday".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let uploaded = yt
        .videos()
        .insert("snippet", video)
        .media(Media::new("video/mp4", &b"not really mp4"[..]))
        .send()
        .await
        .unwrap();
    assert_eq!(uploaded.id.as_deref(), Some("new-video"));

    let request = &server.requests()[0];
    assert_eq!(request.path, "/upload/youtube/v3/videos");
    assert_eq!(request.param("uploadType"), Some("multipart"));
    assert_eq!(request.param("part"), Some("snippet"));

    let content_type = request.header("content-type").unwrap();
    let boundary = content_type
        .strip_prefix("multipart/related; boundary=")
        .unwrap();
    let expected = format!(
        "--{boundary}\r\n\
         Content-Type: application/json; charset=UTF-8\r\n\r\n\
         {{\"snippet\":{{\"title\":\"Holiday\"}}}}\r\n\
         --{boundary}\r\n\
         Content-Type: video/mp4\r\n\r\n\
         not really mp4\r\n\
         --{boundary}--\r\n"
    );
    assert_eq!(String::from_utf8_lossy(&request.body), expected);
}

#[tokio::test]
async fn resumable_upload_sends_chunks_until_done() {
    const CHUNK: usize = 256 * 1024;
    let server = MockServer::start().await;
    server
        .reply(Reply::status(200).header("location", "/upload/session/42?upload_id=xyz"))
        .reply(Reply::status(308).header("range", format!("bytes=0-{}", CHUNK - 1)))
        .reply(Reply::json(json!({"kind": "youtube#video", "id": "uploaded"})));
    let yt = server.client();

    let data: Vec<u8> = (0..CHUNK + 1000).map(|i| (i % 251) as u8).collect();
    let progress = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&progress);
    let media = ResumableMedia::from_bytes("video/mp4", data.clone())
        .chunk_size(1)
        .on_progress(move |sent, total| seen.lock().unwrap().push((sent, total)));

    let video = Video {
        snippet: Some(VideoSnippet {
            title: Some("Big".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let uploaded = yt
        .videos()
        .insert("snippet", video)
        .resumable_media(media)
        .send()
        .await
        .unwrap();
    assert_eq!(uploaded.id.as_deref(), Some("uploaded"));

    let requests = server.requests();
    assert_eq!(requests.len(), 3);

    let initiate = &requests[0];
    assert_eq!(initiate.method, Method::POST);
    assert_eq!(initiate.path, "/upload/youtube/v3/videos");
    assert_eq!(initiate.param("uploadType"), Some("resumable"));
    assert_eq!(initiate.header("x-upload-content-type"), Some("video/mp4"));
    let total = data.len().to_string();
    assert_eq!(initiate.header("x-upload-content-length"), Some(total.as_str()));
    assert_eq!(initiate.json(), json!({"snippet": {"title": "Big"}}));

    let first = &requests[1];
    assert_eq!(first.method, Method::PUT);
    assert_eq!(first.path, "/upload/session/42");
    assert_eq!(first.param("upload_id"), Some("xyz"));
    assert_eq!(
        first.header("content-range"),
        Some(format!("bytes 0-{}/{total}", CHUNK - 1).as_str())
    );
    assert_eq!(&first.body[..], &data[..CHUNK]);

    let second = &requests[2];
    assert_eq!(
        second.header("content-range"),
        Some(format!("bytes {CHUNK}-{}/{total}", data.len() - 1).as_str())
    );
    assert_eq!(&second.body[..], &data[CHUNK..]);
    assert_eq!(second.param("key"), Some("test-key"));

    let total = data.len() as u64;
    assert_eq!(
        *progress.lock().unwrap(),
        vec![(CHUNK as u64, Some(total)), (total, Some(total))]
    );
}

#[tokio::test]
async fn resumable_upload_without_session_location_fails() {
    let server = MockServer::start().await;
    server.reply(Reply::status(200));
    let yt = server.client();

    let err = yt
        .thumbnails()
        .set("abc")
        .resumable_media(ResumableMedia::from_bytes("image/jpeg", &b"jpeg"[..]))
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Upload(_)), "{err:?}");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn live_chat_follow_stops_when_chat_goes_offline() {
    let server = MockServer::start().await;
    server
        .reply(Reply::json(json!({
            "kind": "youtube#liveChatMessageListResponse",
            "nextPageToken": "poll-2",
            "pollingIntervalMillis": 1,
            "items": [{"id": "msg-1", "snippet": {"type": "textMessageEvent", "displayMessage": "hello"}}]
        })))
        .reply(Reply::json(json!({
            "kind": "youtube#liveChatMessageListResponse",
            "nextPageToken": "poll-3",
            "pollingIntervalMillis": 1,
            "offlineAt": "2017-04-02T18:30:00Z",
            "items": [{"id": "msg-2", "snippet": {"type": "chatEndedEvent"}}]
        })));
    let yt = server.client();

    let messages: Vec<_> = yt
        .live_chat_messages()
        .list("chat-1", "snippet")
        .follow()
        .collect()
        .await;
    let ids: Vec<_> = messages
        .into_iter()
        .map(|m| m.unwrap().id.unwrap())
        .collect();
    assert_eq!(ids, vec!["msg-1", "msg-2"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].param("liveChatId"), Some("chat-1"));
    assert_eq!(requests[0].param("pageToken"), None);
    assert_eq!(requests[1].param("pageToken"), Some("poll-2"));
}

#[tokio::test]
async fn resumable_upload_resends_unacknowledged_tail() {
    let server = MockServer::start().await;
    server
        .reply(Reply::status(200).header("location", "/upload/session/7"))
        .reply(Reply::status(308).header("range", "bytes=0-99"))
        .reply(Reply::json(json!({"kind": "youtube#caption", "id": "cap-1"})));
    let yt = server.client();

    let data: Vec<u8> = (0..300u32).map(|i| (i % 256) as u8).collect();
    let progress = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&progress);
    let media = ResumableMedia::from_bytes("text/vtt", data.clone())
        .on_progress(move |sent, total| seen.lock().unwrap().push((sent, total)));

    yt.captions()
        .insert("snippet", Default::default())
        .resumable_media(media)
        .send()
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].header("content-range"), Some("bytes 0-299/300"));
    assert_eq!(&requests[1].body[..], &data[..]);
    assert_eq!(requests[2].path, "/upload/session/7");
    assert_eq!(requests[2].header("content-range"), Some("bytes 100-299/300"));
    assert_eq!(&requests[2].body[..], &data[100..]);
    assert_eq!(
        *progress.lock().unwrap(),
        vec![(100, Some(300)), (300, Some(300))]
    );
}

#[tokio::test]
async fn resumable_upload_of_unknown_size_is_finalized_with_empty_chunk() {
    const CHUNK: usize = 256 * 1024;
    let server = MockServer::start().await;
    server
        .reply(Reply::status(200).header("location", "/upload/session/9"))
        .reply(Reply::status(308).header("range", format!("bytes=0-{}", CHUNK - 1)))
        .reply(Reply::json(json!({"kind": "youtube#video", "id": "streamed"})));
    let yt = server.client();

    let data = vec![7u8; CHUNK];
    let media = ResumableMedia::new(std::io::Cursor::new(data.clone()), "video/mp4").chunk_size(1);

    let uploaded = yt
        .videos()
        .insert("snippet", Video::default())
        .resumable_media(media)
        .send()
        .await
        .unwrap();
    assert_eq!(uploaded.id.as_deref(), Some("streamed"));

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].header("x-upload-content-length"), None);
    assert_eq!(
        requests[1].header("content-range"),
        Some(format!("bytes 0-{}/*", CHUNK - 1).as_str())
    );
    assert_eq!(&requests[1].body[..], &data[..]);
    assert_eq!(
        requests[2].header("content-range"),
        Some(format!("bytes */{CHUNK}").as_str())
    );
    assert!(requests[2].body.is_empty());
}

#[tokio::test]
async fn truncated_error_body_still_yields_api_error() {
    use tokio::io::AsyncWriteExt;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut conn, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = tokio::io::AsyncReadExt::read(&mut conn, &mut request).await;
        conn.write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\ncut")
            .await
            .unwrap();
        conn.shutdown().await.unwrap();
    });
    let yt = youtube3::youtube_api::YouTube::builder()
        .base_url(format!("http://{addr}/youtube/v3/"))
        .build()
        .unwrap();

    let err = yt.i18n_regions().list("snippet").send().await.unwrap_err();
    let Error::Api(api) = err else {
        panic!("expected an API error, got {err:?}");
    };
    assert_eq!(api.code.as_u16(), 500);
    assert!(api.body.is_empty());
    assert_eq!(api.to_string(), "YouTube API error 500");
}
