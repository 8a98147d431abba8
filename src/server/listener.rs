use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::resources::ResourceTable;
use crate::server::admission::Admission;

pub async fn run(cfg: &Config, table: Arc<ResourceTable>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);
    info!("The site can be reached at http://{}", cfg.listen_addr);

    serve(listener, cfg.max_connections, table).await
}

/// Accept loop: admit, then dispatch. Split from `run` so tests can bind
/// an ephemeral port themselves.
///
/// Runs until the listener fails, which in practice means it was closed
/// from outside; in-flight handlers are not drained.
pub async fn serve(
    listener: TcpListener,
    max_connections: usize,
    table: Arc<ResourceTable>,
) -> anyhow::Result<()> {
    let admission = Admission::new(max_connections);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        // At capacity the loop stalls here; the listen backlog absorbs
        // the burst.
        let slot = admission.admit().await?;
        debug!(active = admission.active(), max = admission.max(), "connection admitted");

        let table = table.clone();
        tokio::spawn(async move {
            let _slot = slot;
            Connection::new(socket, table).run().await;
        });
    }
}
