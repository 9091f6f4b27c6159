use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

/// Route handlers
pub mod routes;

/// Shared state
pub mod state;

pub use routes::create_router;
pub use state::AppState;

/// Serve the prediction endpoint on every interface until the process is stopped
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr).await?;

    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state)).await
}
