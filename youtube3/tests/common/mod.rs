//! A scripted HTTP server standing in for the YouTube API.
//!
//! Replies are handed out in the order they were queued, one per request, and every
//! request is recorded so tests can inspect what the client actually sent.

#![allow(dead_code)]

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use youtube3::youtube_api::{YouTube, YouTubeBuilder};

/// A request as it arrived at the server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    headers: Vec<(&'static str, String)>,
    body: Bytes,
}

impl Reply {
    pub fn json(value: serde_json::Value) -> Self {
        Self::status(200)
            .header("content-type", "application/json; charset=UTF-8")
            .body(value.to_string())
    }

    pub fn status(status: u16) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    fn into_response(self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(self.body));
        *response.status_mut() = self.status;
        for (name, value) in self.headers {
            response
                .headers_mut()
                .insert(name, value.parse().unwrap());
        }
        response
    }
}

#[derive(Default)]
struct State {
    replies: VecDeque<Reply>,
    requests: Vec<Recorded>,
}

pub struct MockServer {
    addr: SocketAddr,
    state: Arc<Mutex<State>>,
}

impl MockServer {
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(Mutex::new(State::default()));

        let shared = Arc::clone(&state);
        tokio::spawn(async move {
            loop {
                let Ok((conn, _)) = listener.accept().await else {
                    return;
                };
                let state = Arc::clone(&shared);
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let state = Arc::clone(&state);
                        async move {
                            let (parts, body) = req.into_parts();
                            let body = body.collect().await?.to_bytes();
                            let query = form_urlencoded::parse(
                                parts.uri.query().unwrap_or("").as_bytes(),
                            )
                            .into_owned()
                            .collect();
                            let mut state = state.lock().unwrap();
                            state.requests.push(Recorded {
                                method: parts.method,
                                path: parts.uri.path().to_string(),
                                query,
                                headers: parts.headers,
                                body,
                            });
                            let reply = state.replies.pop_front().unwrap_or_else(|| {
                                Reply::status(500).body("no reply queued for this request")
                            });
                            Ok::<_, hyper::Error>(reply.into_response())
                        }
                    });
                    let _ = hyper::server::conn::http1::Builder::new()
                        .serve_connection(TokioIo::new(conn), service)
                        .await;
                });
            }
        });

        Self { addr, state }
    }

    /// Queues the reply to the next unanswered request.
    pub fn reply(&self, reply: Reply) -> &Self {
        self.state.lock().unwrap().replies.push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A client builder pointed at this server.
    pub fn builder(&self) -> YouTubeBuilder {
        YouTube::builder()
            .base_url(self.url("/youtube/v3/"))
            .upload_base_url(self.url("/upload/youtube/v3/"))
    }

    /// A client pointed at this server that authenticates with the key `test-key`.
    pub fn client(&self) -> YouTube {
        self.builder().api_key("test-key").build().unwrap()
    }
}
