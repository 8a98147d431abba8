use std::sync::Arc;

use kiosk::config::Config;
use kiosk::resources::ResourceTable;
use kiosk::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let table = Arc::new(ResourceTable::preload(&cfg.web_root)?);
    tracing::info!(
        "Preloaded {} web files from {}",
        table.len(),
        cfg.web_root.display()
    );

    tokio::select! {
        res = server::listener::run(&cfg, table) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
