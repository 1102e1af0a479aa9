use std::error::Error as _;

use futures::future::BoxFuture;
use tower::{Layer, Service};

use crate::http::{Request, Response, response::JsonResponseBuilder, error::{Error, Result}};

/// converts errors from the inner service into json responses
pub struct ErrorLayer {}

impl ErrorLayer {
    pub fn new() -> ErrorLayer {
        ErrorLayer {}
    }
}

impl<S> Layer<S> for ErrorLayer {
    type Service = ErrorService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ErrorService {
            inner
        }
    }
}

pub struct ErrorService<S> {
    inner: S
}

impl<S> Service<Request> for ErrorService<S>
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
        let fut = self.inner.call(req);

        Box::pin(async move {
            let result = fut.await;

            if let Err(error) = result.as_ref() {
                if let Some(err) = error.source() {
                    log::error!("error during response: {}", err);
                } else {
                    log::info!("error response: {}", error);
                }

                JsonResponseBuilder::new(*error.status_ref())
                    .set_error(error.name_str())
                    .set_message(error.message_str())
                    .response()
            } else {
                result
            }
        })
    }
}
