use std::net::SocketAddr;

use hyper::Server;
use hyper::server::conn::AddrIncoming;

use crate::error;
use crate::routing::MakeRouter;

pub type BoundServer = Server<AddrIncoming, MakeRouter>;

/// binds the address without starting to accept connections. port 0 picks
/// a free port, see `local_addr` on the returned server.
pub fn bind(addr: &SocketAddr, make_router: MakeRouter) -> error::Result<BoundServer> {
    Ok(Server::try_bind(addr)?.serve(make_router))
}

/// runs a server on the given address until it fails. bind and server
/// errors are logged rather than returned so other interfaces keep running.
pub async fn serve(addr: SocketAddr, make_router: MakeRouter) -> error::Result<()> {
    match bind(&addr, make_router) {
        Ok(server) => {
            log::info!("server listening on {}", server.local_addr());

            if let Err(e) = server.await {
                log::error!("server error. {:?}", e);
            }
        },
        Err(err) => {
            log::error!("failed to bind to address {}. {}", addr, err);
        }
    }

    Ok(())
}
