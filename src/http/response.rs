use std::convert::TryFrom;

use chrono::{Utc, DateTime};
use hyper::Body;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Response as HyperResponse, http::response::Builder};
use hyper::StatusCode;
use serde_json::json;

use super::error;
use super::Response;

pub const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";

#[inline]
pub fn build() -> Builder {
    HyperResponse::builder()
}

/// 200 response with a utf-8 plain text body
pub fn text_response<B>(body: B) -> Response
where
    B: Into<Body>
{
    let mut response = HyperResponse::new(body.into());
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static(TEXT_PLAIN_UTF_8)
    );
    response
}

pub struct JsonResponseBuilder {
    builder: Builder,
    message: String,
    error: Option<String>,
    timestamp: DateTime<Utc>
}

impl JsonResponseBuilder {

    pub fn new<S>(status: S) -> JsonResponseBuilder
    where
        StatusCode: TryFrom<S>,
        <StatusCode as TryFrom<S>>::Error: Into<hyper::http::Error>,
    {
        JsonResponseBuilder {
            builder: build().status(status),
            message: "successful".into(),
            error: None,
            timestamp: Utc::now()
        }
    }

    pub fn set_message<M>(mut self, message: M) -> JsonResponseBuilder
    where
        M: Into<String>
    {
        self.message = message.into();
        self
    }

    pub fn set_error<E>(mut self, error: E) -> JsonResponseBuilder
    where
        E: Into<String>
    {
        self.error = Some(error.into());
        self
    }

    pub fn response(self) -> error::Result<Response> {
        let mut json = json!({
            "message": self.message,
            "timestamp": self.timestamp.timestamp()
        });

        if let Some(err) = self.error {
            json["error"] = err.into();
        }

        self.builder.header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(serde_json::to_vec(&json)?.into())
            .map_err(Into::into)
    }
}
