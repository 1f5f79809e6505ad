use sr_chunk_store::{ChunkStore, ChunkStoreConfig};
use sr_types::Point;

// ---

#[test]
fn exceeding_the_bound_evicts_exactly_the_oldest() {
    sr_log::setup_logging();

    let config = ChunkStoreConfig {
        chunk_size: 10,
        max_chunks: 3,
        ..Default::default()
    };
    let mut store = ChunkStore::new(config);

    let cloud: Vec<Point> = (0..50)
        .map(|i| Point::new(i as f64 * 0.02, 0.0, 0.0))
        .collect();
    let created = store.ingest("s1", &[cloud], &[]).unwrap();
    assert_eq!(created.len(), 5);

    // Only the newest three survive, and they stay sequence-dense.
    assert_eq!(store.num_chunks(), 3);
    let sequences: Vec<i64> = store
        .all_for_session("s1")
        .iter()
        .map(|c| c.sequence)
        .collect();
    similar_asserts::assert_eq!(sequences, vec![2, 3, 4]);

    // The evicted ids no longer resolve; the survivors still do.
    assert!(store.get(created[0].as_str()).is_none());
    assert!(store.get(created[1].as_str()).is_none());
    assert!(store.get(created[2].as_str()).is_some());

    let status = store.sync_status("s1");
    assert_eq!(status.total_chunks, 3);
    assert_eq!(status.latest_sequence, 4);
}

#[test]
fn clear_empties_everything() {
    sr_log::setup_logging();

    let mut store = ChunkStore::new(ChunkStoreConfig {
        chunk_size: 2,
        ..Default::default()
    });
    let cloud: Vec<Point> = (0..5)
        .map(|i| Point::new(i as f64 * 0.02, 0.0, 0.0))
        .collect();
    store.ingest("s1", &[cloud], &[]).unwrap();

    store.clear();

    let stats = store.stats();
    assert_eq!(stats.num_chunks, 0);
    assert_eq!(stats.num_points, 0);
    assert_eq!(stats.num_occupied_voxels, 0);
    assert_eq!(stats.num_pending_points, 0);
    assert_eq!(stats.next_sequence, 0);
}
