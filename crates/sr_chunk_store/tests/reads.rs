use sr_chunk_store::{ChunkStore, ChunkStoreConfig};
use sr_types::Point;

// ---

/// A store with `n` single-point chunks for `session_id`.
fn store_with_chunks(session_id: &str, n: usize) -> ChunkStore {
    let config = ChunkStoreConfig {
        chunk_size: 1,
        ..Default::default()
    };
    let mut store = ChunkStore::new(config);
    let cloud: Vec<Point> = (0..n)
        .map(|i| Point::new(i as f64 * 0.02, 0.0, 0.0))
        .collect();
    store.ingest(session_id, &[cloud], &[]).unwrap();
    store
}

// ---

#[test]
fn chunks_after_is_exclusive_and_ascending() {
    sr_log::setup_logging();

    let store = store_with_chunks("s1", 5);

    let after = store.chunks_after(1, "s1");
    let sequences: Vec<i64> = after.iter().map(|c| c.sequence).collect();
    similar_asserts::assert_eq!(sequences, vec![2, 3, 4]);
}

#[test]
fn sentinel_returns_the_full_history() {
    sr_log::setup_logging();

    let store = store_with_chunks("s1", 3);

    let all = store.chunks_after(-1, "s1");
    assert_eq!(all.len(), 3);
    similar_asserts::assert_eq!(all, store.all_for_session("s1"));
}

#[test]
fn chunks_after_filters_by_session() {
    sr_log::setup_logging();

    // Two sessions' chunks in one store (no clear in between): queries are
    // still scoped per session id.
    let config = ChunkStoreConfig {
        chunk_size: 1,
        ..Default::default()
    };
    let mut store = ChunkStore::new(config);
    store
        .ingest("s1", &[vec![Point::new(0.0, 0.0, 0.0)]], &[])
        .unwrap();
    store
        .ingest("s2", &[vec![Point::new(0.1, 0.0, 0.0)]], &[])
        .unwrap();

    let s2 = store.chunks_after(-1, "s2");
    assert_eq!(s2.len(), 1);
    assert_eq!(s2[0].session_id, "s2");
}

#[test]
fn unknown_chunk_id_returns_none() {
    sr_log::setup_logging();

    let store = store_with_chunks("s1", 2);
    assert!(store.get("nope").is_none());
}

#[test]
fn sync_status_agrees_with_stored_chunks() {
    sr_log::setup_logging();

    let store = store_with_chunks("s1", 4);
    let status = store.sync_status("s1");

    assert_eq!(status.session_id, "s1");
    assert_eq!(status.total_chunks, 4);
    assert_eq!(status.latest_sequence, 3);
    assert_eq!(status.available_chunk_ids.len(), 4);

    // Every advertised id resolves, and id/sequence/point-count agree.
    for (i, id) in status.available_chunk_ids.iter().enumerate() {
        let chunk = store.get(id.as_str()).expect("advertised id must resolve");
        assert_eq!(&chunk.id, id);
        assert_eq!(chunk.sequence, i as i64);
        assert_eq!(chunk.num_points(), 1);
    }
}

#[test]
fn empty_store_reports_the_sentinel() {
    sr_log::setup_logging();

    let store = ChunkStore::new(ChunkStoreConfig::default());
    let status = store.sync_status("");
    assert_eq!(status.total_chunks, 0);
    assert_eq!(status.latest_sequence, -1);
    assert!(status.available_chunk_ids.is_empty());
}
