use std::pin::Pin;
use std::time::Duration;

use rand::Rng as _;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;
use tonic::{Request, Response, Status, Streaming};

use sr_chunk_store::{ChunkStore, ChunkStoreConfig, ChunkStoreHandle, ChunkStoreStats};
use sr_protos::ext;
use sr_protos::ivm::slam::slam_service_server::SlamService;
use sr_protos::ivm::slam::{
    ChunkRequest, DataChunk, Empty, SessionInfo, SlamData, SyncStatus,
};

use crate::monitor::{ActivityMonitor, MonitorConfig};
use crate::session::{SessionRecord, SessionRegistry};
use crate::subscriber::{run_consumer, ClientCacheInfo, CursorTable};

// ---

/// Every tunable of the relay, bundled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelayConfig {
    pub store: ChunkStoreConfig,
    pub monitor: MonitorConfig,

    /// Cadence of the consumer follow poll.
    pub poll_interval: Duration,

    /// Cap on message size, both directions. SLAM point cloud batches are
    /// large.
    pub max_message_bytes: usize,
}

impl RelayConfig {
    pub const DEFAULT: Self = Self {
        store: ChunkStoreConfig::DEFAULT,
        monitor: MonitorConfig::DEFAULT,
        poll_interval: Duration::from_millis(100),
        max_message_bytes: 50 * 1024 * 1024,
    };
}

impl Default for RelayConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---

/// The relay service: binds the chunk store, session registry, activity
/// monitor and consumer cursors to the wire operations.
///
/// Cheap to clone; all state is shared behind handles.
#[derive(Clone)]
pub struct SlamRelayService {
    config: RelayConfig,
    store: ChunkStoreHandle,
    sessions: SessionRegistry,
    monitor: ActivityMonitor,
    cursors: CursorTable,
}

impl SlamRelayService {
    /// Builds the service and wires the mandatory teardown callback:
    /// flush pending, clear session registry, clear chunk store (occupancy
    /// and pending buffers go with it), clear consumer cursors.
    pub fn new(config: RelayConfig) -> Self {
        let store = ChunkStoreHandle::new(ChunkStore::new(config.store));
        let sessions = SessionRegistry::new();
        let monitor = ActivityMonitor::new(config.monitor, sessions.clone());
        let cursors = CursorTable::new();

        {
            let store = store.clone();
            let sessions = sessions.clone();
            let cursors = cursors.clone();
            monitor.on_teardown(move || {
                let session = sessions.get();

                // Emit the final short chunk and capture the stats while the
                // history still exists.
                let (flushed, stats) = {
                    let mut store = store.write();
                    let flushed = store.flush_pending(&session.session_id)?;
                    (flushed, store.stats())
                };
                if let Some(id) = flushed {
                    sr_log::info!("final chunk flushed at teardown: {id}");
                }
                log_final_session_stats(&session, stats);

                sessions.clear();
                store.write().clear();
                cursors.clear();
                Ok(())
            });
        }

        Self {
            config,
            store,
            sessions,
            monitor,
            cursors,
        }
    }

    /// Starts the background activity-monitor loop.
    pub fn spawn_monitor(&self) -> tokio::task::JoinHandle<()> {
        self.monitor.spawn()
    }

    #[inline]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    #[inline]
    pub fn monitor(&self) -> &ActivityMonitor {
        &self.monitor
    }

    #[inline]
    pub fn store(&self) -> &ChunkStoreHandle {
        &self.store
    }

    #[inline]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Ingestion must always land in a live session: if none is active,
    /// begin one, keeping a producer-assigned id when present and minting
    /// `SLAM-<unix seconds>` otherwise.
    fn ensure_active_session(&self) {
        let current = self.sessions.get();
        if current.is_active {
            return;
        }

        let session_id = if current.session_id.is_empty() {
            format!("SLAM-{}", jiff::Timestamp::now().as_second())
        } else {
            current.session_id
        };
        sr_log::info!("starting session '{session_id}' implicitly on ingestion");

        let mut record = SessionRecord::started_now(session_id);
        record.clients_connected = current.clients_connected;
        if !current.start_time.is_empty() {
            record.start_time = current.start_time;
        }
        self.sessions.update(record);
    }
}

fn log_final_session_stats(session: &SessionRecord, stats: ChunkStoreStats) {
    let duration_secs = session
        .start_time
        .parse::<jiff::Timestamp>()
        .ok()
        .map(|started| {
            (jiff::Timestamp::now().as_millisecond() - started.as_millisecond()) as f64 / 1000.0
        });

    match duration_secs {
        Some(secs) => sr_log::info!(
            "session '{}' over: {secs:.1}s, {} chunks, {} points",
            session.session_id,
            stats.num_chunks,
            stats.num_points
        ),
        None => sr_log::info!(
            "session '{}' over: {} chunks, {} points",
            session.session_id,
            stats.num_chunks,
            stats.num_points
        ),
    }
}

// ---

type BoxedStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send>>;

#[tonic::async_trait]
impl SlamService for SlamRelayService {
    async fn connect_slam_data(
        &self,
        request: Request<Streaming<SlamData>>,
    ) -> Result<Response<Empty>, Status> {
        sr_log::info!("producer connected");
        let mut stream = request.into_inner();
        let mut messages = 0_usize;

        loop {
            match stream.message().await {
                Ok(Some(data)) => {
                    self.monitor.update_activity();
                    self.ensure_active_session();

                    let session_id = self.sessions.get().session_id;
                    let (clouds, poses) = ext::clouds_and_poses(&data);
                    self.store
                        .write()
                        .ingest(&session_id, &clouds, &poses)
                        .map_err(|err| Status::internal(err.to_string()))?;
                    messages += 1;
                }
                Ok(None) => break,
                Err(err) => {
                    // Transport errors end this stream, nothing else.
                    sr_log::warn!("producer stream error after {messages} message(s): {err}");
                    break;
                }
            }
        }

        // Producer is done (or gone): emit whatever is still pending.
        let session_id = self.sessions.get().session_id;
        match self.store.write().flush_pending(&session_id) {
            Ok(Some(id)) => sr_log::debug!("flushed final chunk {id} at producer stream end"),
            Ok(None) => {}
            Err(err) => return Err(Status::internal(err.to_string())),
        }

        sr_log::info!("producer stream ended ({messages} message(s))");
        Ok(Response::new(Empty {}))
    }

    type GetSlamDataStream = BoxedStream<SlamData>;

    async fn get_slam_data(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<Self::GetSlamDataStream>, Status> {
        self.monitor.update_activity();

        let cache = ClientCacheInfo::parse(
            request
                .metadata()
                .get("custom-header-1")
                .and_then(|value| value.to_str().ok()),
        );

        let session = self.sessions.get();
        let (tx, rx) = tokio::sync::mpsc::channel::<Result<SlamData, Status>>(128);

        if !session.is_live() {
            // No live session: close at once, without an error. Late
            // consumers must not latch onto stale history.
            sr_log::warn!("subscribe rejected: no live session");
            drop(tx);
            return Ok(Response::new(Box::pin(ReceiverStream::new(rx))));
        }

        let client_id: u64 = rand::rng().random();
        let clients = self.sessions.increment_clients();
        sr_log::info!("consumer {client_id:#018x} subscribed ({clients} connected)");

        let initial_cursor =
            if cache.session_id != session.session_id || cache.last_sequence < 0 {
                -1 // cache is from another session (or empty): resend everything
            } else {
                cache.last_sequence
            };
        self.cursors.insert(client_id, initial_cursor);

        let store = self.store.clone();
        let sessions = self.sessions.clone();
        let cursors = self.cursors.clone();
        let poll_interval = self.config.poll_interval;
        tokio::spawn(async move {
            run_consumer(
                store,
                sessions.clone(),
                cursors.clone(),
                poll_interval,
                client_id,
                initial_cursor,
                tx,
            )
            .await;

            // Stream over, however it ended: release this consumer.
            cursors.remove(client_id);
            let remaining = sessions.decrement_clients();
            sr_log::info!("consumer {client_id:#018x} disconnected ({remaining} remaining)");
        });

        Ok(Response::new(Box::pin(ReceiverStream::new(rx))))
    }

    async fn get_sync_status(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<SyncStatus>, Status> {
        let session_id = self.sessions.get().session_id;
        let status = self.store.read().sync_status(&session_id);

        Ok(Response::new(SyncStatus {
            session_id: status.session_id,
            total_chunks: status.total_chunks as i32,
            latest_sequence_number: status.latest_sequence as i32,
            available_chunk_ids: status
                .available_chunk_ids
                .into_iter()
                .map(|id| id.into_string())
                .collect(),
        }))
    }

    type GetSpecificChunksStream = BoxedStream<DataChunk>;

    async fn get_specific_chunks(
        &self,
        request: Request<ChunkRequest>,
    ) -> Result<Response<Self::GetSpecificChunksStream>, Status> {
        self.monitor.update_activity();

        let request = request.into_inner();
        sr_log::info!(
            "repair request for {} chunk(s)",
            request.missing_chunk_ids.len()
        );

        // Best effort: serve whatever is still retained, regardless of which
        // session it came from; skip the rest with a warning. The caller
        // observes missing chunks by their absence.
        let found: Vec<Result<DataChunk, Status>> = {
            let store = self.store.read();
            request
                .missing_chunk_ids
                .iter()
                .filter_map(|chunk_id| match store.get(chunk_id) {
                    Some(chunk) => Some(Ok(DataChunk::from(&*chunk))),
                    None => {
                        sr_log::warn!("requested chunk not found: {chunk_id}");
                        None
                    }
                })
                .collect()
        };

        Ok(Response::new(Box::pin(tokio_stream::iter(found))))
    }

    async fn get_session_info(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<SessionInfo>, Status> {
        // Deliberately no activity update: an info poll must not defer
        // teardown.
        let session = self.sessions.get();
        let total_chunks = self.store.read().num_chunks();

        Ok(Response::new(SessionInfo {
            session_id: session.session_id,
            start_time: session.start_time,
            is_active: session.is_active,
            clients_connected: session.clients_connected,
            total_chunks: total_chunks as i32,
        }))
    }

    async fn set_session_info(
        &self,
        request: Request<SessionInfo>,
    ) -> Result<Response<Empty>, Status> {
        let info = request.into_inner();
        sr_log::info!(
            "control update: session '{}', active={}, clients={}",
            info.session_id,
            info.is_active,
            info.clients_connected
        );

        if info.is_active {
            self.monitor.update_activity();
        } else {
            // Cleanup is the monitor's job; it takes the quick-exit path
            // from here.
            sr_log::warn!("session reported inactive by control, monitor will tear down");
        }

        self.sessions.update_from_control(&info);
        Ok(Response::new(Empty {}))
    }
}
