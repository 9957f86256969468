use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::files::StaticFiles;
use crate::http::connection::Connection;

/// Pending connections the OS queues while one is being serviced.
const LISTEN_BACKLOG: u32 = 10;

/// Binds the listening socket and runs the accept loop forever.
///
/// Socket setup failures (bad address, bind, listen) are fatal: the error
/// propagates to `main` and the process exits. The loop itself never
/// returns on its own.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg.addr().parse()?;

    let socket = TcpSocket::new_v4()?;
    // Allow rebinding the port while the old socket is in TIME_WAIT
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    let listener = socket.listen(LISTEN_BACKLOG)?;

    info!("Listening on {}", addr);
    serve(listener, StaticFiles::new(cfg.root.clone())).await
}

/// Unbounded accept loop: accept, service the connection to completion,
/// close, repeat. Connections are handled strictly one at a time; while
/// one is in flight, newcomers wait in the listen backlog. Accept and
/// per-connection errors are logged and the loop keeps going.
pub async fn serve(listener: TcpListener, files: StaticFiles) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, files.clone());
        if let Err(e) = conn.run().await {
            error!("Connection error from {}: {}", peer, e);
        }
    }
}
