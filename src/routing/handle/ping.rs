use crate::http::{Request, Response, response::text_response};

pub const PONG: &str = "pong";

/// responds with `pong` whatever the request looks like
pub fn handle(_req: &Request) -> Response {
    text_response(PONG)
}

#[cfg(test)]
mod tests {
    use hyper::{Body, Method};

    use crate::http::recorder::Recorder;
    use super::handle;

    #[tokio::test]
    async fn ping_test() {
        let candidates = vec![
            (Method::GET, "http://example.com/"),
            (Method::GET, "http://example.com/ping?msg=foo"),
            (Method::POST, "http://example.com/anything/else"),
            (Method::DELETE, "http://example.com/?"),
            (Method::HEAD, "/relative"),
        ];

        for (method, uri) in candidates {
            let req = hyper::Request::builder()
                .method(method.clone())
                .uri(uri)
                .header("accept", "application/json")
                .body(Body::from("ignored"))
                .unwrap();

            let rec = Recorder::record(handle(&req)).await;

            assert_eq!(rec.status, 200, "method: {} uri: {}", method, uri);
            assert_eq!(
                rec.content_type(),
                Some("text/plain; charset=utf-8"),
                "method: {} uri: {}", method, uri
            );
            assert_eq!(rec.body_str(), "pong", "method: {} uri: {}", method, uri);
        }
    }

    #[tokio::test]
    async fn ping_is_repeatable() {
        let req = hyper::Request::builder()
            .method(Method::GET)
            .uri("/?msg=foo")
            .header("x-forwarded-for", hyper::header::HeaderValue::from_bytes(b"\xfa").unwrap())
            .body(Body::empty())
            .unwrap();

        for _ in 0..3 {
            let rec = Recorder::record(handle(&req)).await;

            assert_eq!(rec.status, 200);
            assert_eq!(rec.content_type(), Some("text/plain; charset=utf-8"));
            assert_eq!(rec.body_str(), "pong");
        }
    }
}
