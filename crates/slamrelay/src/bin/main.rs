//! The SLAM relay server binary.
//!
//! Binds the relay service to its listen addresses (two equivalent ports by
//! default, matching what producers and viewers in the field expect), runs
//! the activity monitor, and shuts down cleanly on ctrl-c.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use sr_chunk_store::ChunkStoreConfig;
use sr_grpc_server::{MonitorConfig, RelayConfig, SlamRelayService};

// ---

/// Streaming relay and incremental cache for SLAM output.
#[derive(Debug, Parser)]
#[command(name = "slamrelay", about, version)]
struct Args {
    /// Primary listen address.
    #[arg(long, default_value = "0.0.0.0:9090")]
    addr: SocketAddr,

    /// Second, equivalent listen address.
    #[arg(long, default_value = "0.0.0.0:50051")]
    alt_addr: SocketAddr,

    /// Points per chunk; the last chunk of a session may be shorter.
    #[arg(long, default_value_t = 1000)]
    chunk_size: usize,

    /// Retained-chunk bound; the oldest chunk is evicted beyond this.
    #[arg(long, default_value_t = 10_000)]
    max_chunks: usize,

    /// Voxel edge length for spatial deduplication, in meters.
    #[arg(long, default_value_t = 0.01)]
    voxel_size: f64,

    /// Seconds of producer silence before an inactive session is torn down.
    #[arg(long, default_value_t = 5)]
    session_timeout_secs: u64,

    /// Consumer follow-poll interval, in milliseconds.
    #[arg(long, default_value_t = 100)]
    poll_interval_ms: u64,

    /// Maximum gRPC message size, in MiB, both directions.
    #[arg(long, default_value_t = 50)]
    max_message_mib: usize,

    /// Tokio worker threads (0 = one per core).
    #[arg(long, default_value_t = 10)]
    worker_threads: usize,
}

impl Args {
    fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            store: ChunkStoreConfig {
                chunk_size: self.chunk_size,
                max_chunks: self.max_chunks,
                voxel_size: self.voxel_size,
            },
            monitor: MonitorConfig {
                timeout: Duration::from_secs(self.session_timeout_secs),
                ..Default::default()
            },
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            max_message_bytes: self.max_message_mib * 1024 * 1024,
        }
    }
}

// ---

fn main() -> anyhow::Result<()> {
    sr_log::setup_logging();
    let args = Args::parse();

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if args.worker_threads > 0 {
        builder.worker_threads(args.worker_threads);
    }
    builder.build()?.block_on(run(args))
}

async fn run(args: Args) -> anyhow::Result<()> {
    let service = SlamRelayService::new(args.relay_config());
    let monitor_task = service.spawn_monitor();

    // One ctrl-c fans out to both listeners via a watch channel.
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(());
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        sr_log::info!("ctrl-c received, shutting down");
        drop(shutdown_tx);
    });

    tokio::try_join!(
        sr_grpc_server::serve(service.clone(), args.addr, closed(shutdown_rx.clone())),
        sr_grpc_server::serve(service.clone(), args.alt_addr, closed(shutdown_rx)),
    )?;

    service.monitor().stop();
    let _ = monitor_task.await;
    sr_log::info!("shutdown complete");
    Ok(())
}

/// Resolves once the shutdown sender is dropped.
async fn closed(mut rx: tokio::sync::watch::Receiver<()>) {
    while rx.changed().await.is_ok() {}
}
