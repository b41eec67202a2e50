use std::net::SocketAddr;

use tracing::{info, Level};

use pie_costing_backend::rest::{create_router, initialize_backend};
use pie_costing_backend::storage::csv::CsvConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up storage");
    let connection = CsvConnection::new_default()?;

    let state = initialize_backend(connection)?;
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
