//! in memory capture of a response, for exercising handlers and services
//! without a socket.

use hyper::{HeaderMap, StatusCode};
use hyper::body::Bytes;
use hyper::header::CONTENT_TYPE;

use super::Response;

pub struct Recorder {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorder {
    pub async fn record(response: Response) -> Recorder {
        let (parts, body) = response.into_parts();
        let body = hyper::body::to_bytes(body)
            .await
            .expect("failed to read response body");

        Recorder {
            status: parts.status,
            headers: parts.headers,
            body
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).expect("response body is not utf-8")
    }
}
