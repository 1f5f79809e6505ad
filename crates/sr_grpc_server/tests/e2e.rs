//! End-to-end tests over a real gRPC transport on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use tonic::Request;

use sr_grpc_server::{MonitorConfig, RelayConfig, SlamRelayService};
use sr_protos::ivm::slam::slam_service_client::SlamServiceClient;
use sr_protos::ivm::slam::{
    ChunkRequest, Empty, Point, PointCloud, PointCloudList, Pose, PoseList, SessionInfo, SlamData,
};

// ---

async fn start_server(config: RelayConfig) -> (SocketAddr, SlamRelayService) {
    sr_log::setup_logging();

    let service = SlamRelayService::new(config);
    service.spawn_monitor();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let served = service.clone();
    tokio::spawn(async move {
        sr_grpc_server::serve_with_incoming(served, listener, std::future::pending())
            .await
            .unwrap();
    });

    (addr, service)
}

async fn connect(addr: SocketAddr) -> SlamServiceClient<tonic::transport::Channel> {
    SlamServiceClient::connect(format!("http://{addr}"))
        .await
        .expect("server must be reachable")
}

/// `n` points spaced two voxels apart, starting at `offset` meters.
fn distinct_cloud(n: usize, offset: f64) -> PointCloud {
    PointCloud {
        points: (0..n)
            .map(|i| Point {
                x: offset + i as f64 * 0.02,
                y: 0.0,
                z: 0.0,
                r: None,
                g: None,
                b: None,
            })
            .collect(),
    }
}

fn slam_data(cloud: PointCloud) -> SlamData {
    SlamData {
        pointcloudlist: Some(PointCloudList {
            pointclouds: vec![cloud],
        }),
        poselist: Some(PoseList {
            poses: vec![Pose {
                matrix: vec![1.0; 16],
            }],
        }),
        indexlist: None,
        chunk_id: String::new(),
        sequence_number: 0,
    }
}

// ---

#[tokio::test]
async fn ingest_sync_repair_and_subscribe() {
    let config = RelayConfig {
        store: sr_chunk_store::ChunkStoreConfig {
            chunk_size: 2,
            ..Default::default()
        },
        ..Default::default()
    };
    let (addr, _service) = start_server(config).await;
    let mut client = connect(addr).await;

    // Producer: five distinct points. Chunks of two are cut as they fill,
    // and the dangling point flushes when the producer stream ends.
    client
        .connect_slam_data(tokio_stream::iter(vec![slam_data(distinct_cloud(5, 0.0))]))
        .await
        .unwrap();

    let status = client
        .get_sync_status(Empty {})
        .await
        .unwrap()
        .into_inner();
    assert_eq!(status.total_chunks, 3);
    assert_eq!(status.latest_sequence_number, 2);
    assert_eq!(status.available_chunk_ids.len(), 3);
    assert!(!status.session_id.is_empty(), "implicit session must exist");

    // Repair path: one known id, one unknown. The unknown one is skipped
    // silently; the known one comes back intact.
    let mut repair = client
        .get_specific_chunks(ChunkRequest {
            session_id: status.session_id.clone(),
            missing_chunk_ids: vec![status.available_chunk_ids[0].clone(), "nope".to_owned()],
            last_sequence_number: -1,
        })
        .await
        .unwrap()
        .into_inner();

    let chunk = repair
        .message()
        .await
        .unwrap()
        .expect("the known chunk id must stream back");
    assert_eq!(chunk.chunk_id, status.available_chunk_ids[0]);
    assert_eq!(chunk.sequence_number, 0);
    assert_eq!(chunk.pointcloud.unwrap().points.len(), 2);
    assert!(chunk.pose.is_some());
    assert!(repair.message().await.unwrap().is_none());

    // Consumer with a warm cache for this session: only chunk 2 is resent.
    let mut request = Request::new(Empty {});
    let descriptor = format!(
        r#"{{"lastSequence":1,"sessionId":"{}","chunkCount":2}}"#,
        status.session_id
    );
    request
        .metadata_mut()
        .insert("custom-header-1", descriptor.parse().unwrap());
    let mut stream = client.get_slam_data(request).await.unwrap().into_inner();

    let data = stream.message().await.unwrap().unwrap();
    assert_eq!(data.sequence_number, 2);

    // A second, cache-less consumer gets the whole history, in order.
    let mut full = client
        .get_slam_data(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    for expected in 0..3 {
        let data = full.message().await.unwrap().unwrap();
        assert_eq!(data.sequence_number, expected);
    }

    // Live follow: a fresh producer batch reaches the open streams.
    client
        .connect_slam_data(tokio_stream::iter(vec![slam_data(distinct_cloud(2, 10.0))]))
        .await
        .unwrap();

    let data = stream.message().await.unwrap().unwrap();
    assert_eq!(data.sequence_number, 3);
    let data = full.message().await.unwrap().unwrap();
    assert_eq!(data.sequence_number, 3);
}

#[tokio::test]
async fn subscribe_without_a_live_session_closes_immediately() {
    let (addr, _service) = start_server(RelayConfig::default()).await;
    let mut client = connect(addr).await;

    let mut stream = client
        .get_slam_data(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert!(
        stream.message().await.unwrap().is_none(),
        "no live session: the stream must end without items"
    );
}

#[tokio::test]
async fn control_inactive_tears_the_session_down() {
    // Sped-up monitor so the test stays fast.
    let config = RelayConfig {
        store: sr_chunk_store::ChunkStoreConfig {
            chunk_size: 2,
            ..Default::default()
        },
        monitor: MonitorConfig {
            timeout: Duration::from_millis(500),
            quick_exit: Duration::from_millis(200),
            tick_interval: Duration::from_millis(50),
        },
        ..Default::default()
    };
    let (addr, _service) = start_server(config).await;
    let mut client = connect(addr).await;

    client
        .connect_slam_data(tokio_stream::iter(vec![slam_data(distinct_cloud(3, 0.0))]))
        .await
        .unwrap();

    let session = client
        .get_session_info(Empty {})
        .await
        .unwrap()
        .into_inner();
    assert!(session.is_active);
    assert_eq!(session.total_chunks, 2);

    // Give the monitor a tick to observe the live session, then report the
    // session over.
    tokio::time::sleep(Duration::from_millis(150)).await;
    client
        .set_session_info(SessionInfo {
            is_active: false,
            ..session.clone()
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;

    // Teardown has run: empty session, empty store.
    let after = client
        .get_session_info(Empty {})
        .await
        .unwrap()
        .into_inner();
    assert_eq!(after.session_id, "");
    assert!(!after.is_active);
    assert_eq!(after.total_chunks, 0);

    let status = client
        .get_sync_status(Empty {})
        .await
        .unwrap()
        .into_inner();
    assert_eq!(status.total_chunks, 0);
    assert_eq!(status.latest_sequence_number, -1);

    // Late subscribers get an immediately-closed stream.
    let mut stream = client
        .get_slam_data(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert!(stream.message().await.unwrap().is_none());

    // A new producer starts a fresh session, sequences back at zero.
    client
        .connect_slam_data(tokio_stream::iter(vec![slam_data(distinct_cloud(2, 0.0))]))
        .await
        .unwrap();

    let fresh = client
        .get_session_info(Empty {})
        .await
        .unwrap()
        .into_inner();
    assert!(fresh.is_active);
    assert_ne!(fresh.session_id, session.session_id);

    let status = client
        .get_sync_status(Empty {})
        .await
        .unwrap()
        .into_inner();
    assert_eq!(status.latest_sequence_number, 0);
    assert_eq!(status.total_chunks, 1);
}
