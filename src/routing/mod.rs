use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::result::Result as StdResult;

use futures::future::BoxFuture;
use hyper::server::conn::AddrStream;
use hyper::service::Service;
use tower::ServiceBuilder;

use crate::config::RoutesConfig;
use crate::http::{Request, Response};
use crate::http::error::{Error, Result};

mod layer;
mod handle;

#[inline]
fn not_found() -> Error {
    Error::new(404, "NotFound", "requested resource was not found")
}

/// the paths each handler is served from
#[derive(Debug, Clone)]
pub struct Routes {
    pub ping: String,
    pub echo: String,
}

impl From<RoutesConfig> for Routes {
    fn from(conf: RoutesConfig) -> Routes {
        Routes {
            ping: conf.ping,
            echo: conf.echo
        }
    }
}

pub type RouterService = layer::LogService<layer::ErrorService<Router>>;

pub struct Router {
    routes: Arc<Routes>
}

impl Router {
    pub fn new(routes: Arc<Routes>) -> Router {
        Router { routes }
    }

    /// wraps the router in the log and error layers every connection gets
    pub fn layered(remote: SocketAddr, routes: Arc<Routes>) -> RouterService {
        ServiceBuilder::new()
            .layer(layer::LogLayer::new(remote))
            .layer(layer::ErrorLayer::new())
            .service(Router::new(routes))
    }

    fn handle_route(routes: &Routes, req: Request) -> Result<Response> {
        let path = req.uri().path();

        if path == routes.ping {
            Ok(handle::ping::handle(&req))
        } else if path == routes.echo {
            Ok(handle::echo::handle(&req))
        } else {
            Err(not_found())
        }
    }
}

impl Service<Request> for Router {
    type Response = Response;
    type Error = Error;
    type Future = BoxFuture<'static, Result<Response>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<StdResult<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let routes = self.routes.clone();

        Box::pin(async move {
            Self::handle_route(&routes, req)
        })
    }
}

#[derive(Clone)]
pub struct MakeRouter {
    routes: Arc<Routes>
}

impl MakeRouter {
    pub fn new(routes: Routes) -> MakeRouter {
        MakeRouter { routes: Arc::new(routes) }
    }
}

// hyper calls this once per accepted connection. the service it returns
// handles every request made on that connection.
impl<'t> Service<&'t AddrStream> for MakeRouter {
    type Response = RouterService;
    type Error = Infallible;
    type Future = BoxFuture<'static, StdResult<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _: &mut Context) -> Poll<StdResult<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, addr: &'t AddrStream) -> Self::Future {
        let svc = Router::layered(addr.remote_addr(), self.routes.clone());

        Box::pin(async move {
            Ok(svc)
        })
    }
}
