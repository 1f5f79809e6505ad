use std::sync::Arc;
use std::time::Duration;

use ahash::HashMap;
use parking_lot::Mutex;
use serde::Deserialize;
use tokio::sync::mpsc;
use tonic::Status;

use sr_chunk_store::ChunkStoreHandle;
use sr_protos::ivm::slam::SlamData;

use crate::session::SessionRegistry;

// ---

/// How long the follow phase naps between checks of the poll deadline.
const FOLLOW_NAP: Duration = Duration::from_millis(50);

/// A consumer's cache descriptor, received as JSON in the `custom-header-1`
/// request metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientCacheInfo {
    pub last_sequence: i64,
    pub session_id: String,
    pub chunk_count: i64,
}

impl Default for ClientCacheInfo {
    fn default() -> Self {
        Self {
            last_sequence: -1,
            session_id: String::new(),
            chunk_count: 0,
        }
    }
}

impl ClientCacheInfo {
    /// Parses the metadata header. A missing or malformed header downgrades
    /// to the first-time-consumer descriptor.
    pub fn parse(header: Option<&str>) -> Self {
        let Some(raw) = header else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(info) => info,
            Err(err) => {
                sr_log::warn!(
                    "malformed cache metadata header ({err}); treating consumer as first-time"
                );
                Self::default()
            }
        }
    }
}

// ---

/// One cursor per connected consumer: the last sequence sent on that stream.
///
/// Entries are inserted on subscribe and removed when the stream ends;
/// session teardown clears the whole table, which each follow loop observes
/// as its signal to close.
#[derive(Debug, Clone, Default)]
pub struct CursorTable {
    inner: Arc<Mutex<HashMap<u64, i64>>>,
}

impl CursorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, client_id: u64, cursor: i64) {
        self.inner.lock().insert(client_id, cursor);
    }

    pub fn get(&self, client_id: u64) -> Option<i64> {
        self.inner.lock().get(&client_id).copied()
    }

    /// Advances an existing cursor; a vanished entry stays vanished.
    pub fn advance(&self, client_id: u64, sequence: i64) {
        if let Some(cursor) = self.inner.lock().get_mut(&client_id) {
            *cursor = sequence;
        }
    }

    pub fn remove(&self, client_id: u64) {
        self.inner.lock().remove(&client_id);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

// ---

/// Drives one consumer stream to completion: reconcile, then follow.
///
/// `initial_cursor` is −1 for a full-history send (first-time consumer or a
/// cache from another session), otherwise the consumer's last confirmed
/// sequence. Chunks go out in strictly ascending sequence order, each at
/// most once per stream.
pub(crate) async fn run_consumer(
    store: ChunkStoreHandle,
    sessions: SessionRegistry,
    cursors: CursorTable,
    poll_interval: Duration,
    client_id: u64,
    initial_cursor: i64,
    tx: mpsc::Sender<Result<SlamData, Status>>,
) {
    let session_id = sessions.get().session_id;

    // Phase 1: reconcile the consumer's cache against the retained history.
    let backlog = {
        let store = store.read();
        if initial_cursor < 0 {
            let backlog = store.all_for_session(&session_id);
            sr_log::info!(
                "consumer {client_id:#018x}: full history, {} chunk(s)",
                backlog.len()
            );
            backlog
        } else {
            let backlog = store.chunks_after(initial_cursor, &session_id);
            let saved = store.num_chunks().saturating_sub(backlog.len());
            sr_log::info!(
                "consumer {client_id:#018x}: incremental resume after sequence {initial_cursor}, \
                 {} chunk(s) to send ({saved} saved by the client cache)",
                backlog.len()
            );
            backlog
        }
    };

    let total = backlog.len();
    for (i, chunk) in backlog.into_iter().enumerate() {
        if tx.send(Ok(SlamData::from(&*chunk))).await.is_err() {
            return; // consumer hung up mid-backlog
        }
        cursors.advance(client_id, chunk.sequence);
        if (i + 1) % 100 == 0 {
            sr_log::debug!("consumer {client_id:#018x}: {}/{total} backlog chunks sent", i + 1);
        }
    }
    sr_log::debug!("consumer {client_id:#018x}: backlog done ({total} chunks), following live");

    // Phase 2: follow new publications by polling the store.
    let mut last_poll = tokio::time::Instant::now();
    loop {
        tokio::time::sleep(FOLLOW_NAP).await;
        if last_poll.elapsed() < poll_interval {
            continue;
        }
        last_poll = tokio::time::Instant::now();

        // Teardown invalidates the cursor table; a vanished entry, like a
        // dead or replaced session, closes the stream.
        let Some(cursor) = cursors.get(client_id) else {
            return;
        };
        let session = sessions.get();
        if !session.is_live() || session.session_id != session_id {
            return;
        }

        let fresh = store.read().chunks_after(cursor, &session_id);
        for chunk in fresh {
            if tx.send(Ok(SlamData::from(&*chunk))).await.is_err() {
                return;
            }
            cursors.advance(client_id, chunk.sequence);
            sr_log::debug!("consumer {client_id:#018x}: live chunk {}", chunk.id);
        }
    }
}

// ---
