use std::net::SocketAddr;
use std::time::Duration;

use classroom_api::api::router::{AppStores, router};

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires <addr:port>"))?;
                bind_addr = Some(value.parse()?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // --bind wins; otherwise the port comes from CLASSROOM_API_PORT.
    let bind_addr = bind_addr.unwrap_or_else(|| {
        let port = std::env::var("CLASSROOM_API_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        SocketAddr::from(([0, 0, 0, 0], port))
    });

    // 1. Stores (empty on every boot):
    let stores = AppStores::new();

    // 2. HTTP router:
    let app = router(&stores);

    // 3. Spawn stats reporter:
    let stats_stores = stores.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));

        loop {
            interval.tick().await;
            tracing::info!(
                "Store stats: {} desks, {} classrooms",
                stats_stores.desks.len(),
                stats_stores.classrooms.len()
            );
        }
    });

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
