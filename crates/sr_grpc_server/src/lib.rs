//! The SLAM relay's gRPC service.
//!
//! A producer streams point clouds and poses in over `ConnectSlamData`; the
//! ingestion pipeline deduplicates them into sequence-numbered chunks held by
//! [`sr_chunk_store`]. Consumers stream the history (and then live updates)
//! back out over `GetSlamData`, resuming incrementally from their own cache
//! state. An [`ActivityMonitor`] watches the session registry and ingestion
//! activity, and tears everything down once the producer is gone.

mod monitor;
mod service;
mod session;
mod subscriber;

pub use self::monitor::{ActivityMonitor, MonitorConfig};
pub use self::service::{RelayConfig, SlamRelayService};
pub use self::session::{SessionRecord, SessionRegistry};
pub use self::subscriber::{ClientCacheInfo, CursorTable};

use std::net::SocketAddr;

use sr_protos::ivm::slam::slam_service_server::SlamServiceServer;

// ---

/// Serves `service` on `addr` until `shutdown` resolves.
pub async fn serve(
    service: SlamRelayService,
    addr: SocketAddr,
    shutdown: impl std::future::Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    sr_log::info!("listening on {addr}");
    let max = service.config().max_message_bytes;
    tonic::transport::Server::builder()
        .add_service(
            SlamServiceServer::new(service)
                .max_decoding_message_size(max)
                .max_encoding_message_size(max),
        )
        .serve_with_shutdown(addr, shutdown)
        .await
}

/// Like [`serve`], for an already-bound listener. Lets tests and callers
/// that want an ephemeral port hand one in.
pub async fn serve_with_incoming(
    service: SlamRelayService,
    listener: tokio::net::TcpListener,
    shutdown: impl std::future::Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    if let Ok(addr) = listener.local_addr() {
        sr_log::info!("listening on {addr}");
    }
    let max = service.config().max_message_bytes;
    tonic::transport::Server::builder()
        .add_service(
            SlamServiceServer::new(service)
                .max_decoding_message_size(max)
                .max_encoding_message_size(max),
        )
        .serve_with_incoming_shutdown(
            tokio_stream::wrappers::TcpListenerStream::new(listener),
            shutdown,
        )
        .await
}
