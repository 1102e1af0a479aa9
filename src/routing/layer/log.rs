use std::net::SocketAddr;
use std::time::Instant;

use futures::future::BoxFuture;
use tower::{Layer, Service};
use hyper::header::ToStrError;
use lib::time::format_duration;

use crate::http::{Request, Response, error::{Error, Result}, header::copy_header_value};

/// writes an access line for every response produced by the inner service
pub struct LogLayer {
    remote: SocketAddr
}

impl LogLayer {
    pub fn new(remote: SocketAddr) -> LogLayer {
        LogLayer { remote }
    }
}

impl<S> Layer<S> for LogLayer {
    type Service = LogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LogService { inner, remote: self.remote }
    }
}

pub struct LogService<S> {
    inner: S,
    remote: SocketAddr,
}

impl<S> Service<Request> for LogService<S>
where
    S: Service<Request, Response = Response, Error = Error>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Response>>;

    fn poll_ready(&mut self, cx: &mut std::task::Context<'_>) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let info = if log::log_enabled!(log::Level::Info) {
            Some(RequestInfo::new(&req, &self.remote))
        } else {
            None
        };

        let future = self.inner.call(req);

        Box::pin(async move {
            let response = future.await;

            if let (Some(info), Ok(res)) = (info, response.as_ref()) {
                log::info!("{}", info.access_line(res));
            }

            response
        })
    }
}

struct RequestInfo {
    remote_addr: Option<std::result::Result<String, ToStrError>>,
    remote_port: Option<std::result::Result<String, ToStrError>>,
    peer: SocketAddr,
    version: String,
    method: String,
    path: String,
    query: String,
    start: Instant,
}

impl RequestInfo {
    pub fn new<ReqBody>(req: &hyper::Request<ReqBody>, peer: &SocketAddr) -> RequestInfo {
        RequestInfo {
            remote_addr: copy_header_value(req.headers(), "x-forwarded-for"),
            remote_port: copy_header_value(req.headers(), "x-forwarded-port"),
            peer: *peer,
            version: format!("{:?}", req.version()),
            method: req.method().as_str().to_owned(),
            path: req.uri().path().to_owned(),
            query: if let Some(q) = req.uri().query() {
                let mut query = String::with_capacity(q.len() + 1);
                query.push('?');
                query.push_str(q);
                query
            } else {
                String::new()
            },
            start: Instant::now()
        }
    }

    /// forwarded headers take precedence over the socket peer when both are
    /// valid
    fn remote(&self) -> String {
        match (&self.remote_addr, &self.remote_port) {
            (Some(Ok(addr)), Some(Ok(port))) => format!("{}:{}", addr, port),
            (Some(Ok(addr)), None) => format!("{}:{}", addr, self.peer.port()),
            _ => self.peer.to_string()
        }
    }

    fn access_line(&self, res: &Response) -> String {
        let duration = format_duration(&self.start.elapsed());

        format!(
            "{} {} {}{} {} {} {}",
            self.remote(),
            self.method,
            self.path,
            self.query,
            self.version,
            res.status().as_str(),
            duration
        )
    }
}
