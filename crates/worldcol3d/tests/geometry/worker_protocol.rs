use worldcol3d::math::{Matrix4, Point, Vector};
use worldcol3d::shape::Capsule;
use worldcol3d::transformation::{MeshData, SceneSnapshot};
use worldcol3d::worker::{OctreeHost, OctreeWorker, Request, Response};

fn ground_scene() -> SceneSnapshot {
    let ground = MeshData::new(
        1,
        "ground",
        vec![
            Point::new(-10.0, 0.0, -10.0),
            Point::new(-10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, -10.0),
        ],
        Some(vec![0, 1, 2, 0, 2, 3]),
        Matrix4::identity(),
    );
    SceneSnapshot::new(vec![ground])
}

fn collider(y: f32) -> Request {
    Request::Collider {
        capsule: Capsule::new(Point::new(2.0, y, -3.0), Point::new(2.0, y + 1.0, -3.0), 0.5),
        extra_triangles: vec![],
    }
}

#[test]
fn host_answers_each_request() {
    let mut host = OctreeHost::new();

    assert!(matches!(
        host.handle(Request::Connect),
        Response::Connected { .. }
    ));
    assert!(matches!(host.handle(collider(0.3)), Response::Error { .. }));
    assert!(host.octree().is_none());

    match host.handle(Request::Build(ground_scene())) {
        Response::BuildComplete {
            triangle_count,
            message,
            ..
        } => {
            assert_eq!(triangle_count, 2);
            assert!(!message.is_empty());
        }
        other => panic!("Unexpected response: {other:?}"),
    }

    match host.handle(collider(0.3)) {
        Response::ColliderResult(Some(result)) => {
            assert_relative_eq!(result.depth, 0.2, epsilon = 1.0e-5)
        }
        other => panic!("Unexpected response: {other:?}"),
    }

    assert_eq!(host.handle(collider(2.0)), Response::ColliderResult(None));
}

#[test]
fn worker_answers_in_arrival_order() {
    let mut worker = OctreeWorker::spawn().unwrap();
    assert!(worker.try_next_response().unwrap().is_none());

    worker.post(Request::Connect).unwrap();
    worker.post(collider(0.3)).unwrap();
    worker.post(Request::Build(ground_scene())).unwrap();
    worker.post(collider(0.3)).unwrap();
    worker.post(collider(2.0)).unwrap();

    assert!(matches!(
        worker.next_response().unwrap(),
        Response::Connected { .. }
    ));
    assert!(matches!(
        worker.next_response().unwrap(),
        Response::Error { .. }
    ));
    assert!(matches!(
        worker.next_response().unwrap(),
        Response::BuildComplete {
            triangle_count: 2,
            ..
        }
    ));
    assert!(matches!(
        worker.next_response().unwrap(),
        Response::ColliderResult(Some(_))
    ));
    assert_eq!(
        worker.next_response().unwrap(),
        Response::ColliderResult(None)
    );
}

#[test]
fn rebuilding_replaces_the_octree() {
    let mut worker = OctreeWorker::spawn().unwrap();
    let _ = worker.request(Request::Build(ground_scene())).unwrap();

    let mut raised = ground_scene();
    raised.meshes[0].transform = Matrix4::new_translation(&Vector::new(0.0, 10.0, 0.0));
    let _ = worker.request(Request::Build(raised)).unwrap();

    assert_eq!(
        worker.request(collider(0.3)).unwrap(),
        Response::ColliderResult(None)
    );
    assert!(matches!(
        worker.request(collider(9.8)).unwrap(),
        Response::ColliderResult(Some(_))
    ));
}

#[test]
fn request_returns_its_own_answer_after_posts() {
    let mut worker = OctreeWorker::spawn().unwrap();

    worker.post(Request::Connect).unwrap();
    worker.post(Request::Build(ground_scene())).unwrap();

    assert!(matches!(
        worker.request(collider(0.3)).unwrap(),
        Response::ColliderResult(Some(_))
    ));

    // The answers to the posted requests are still delivered, in order.
    assert!(matches!(
        worker.next_response().unwrap(),
        Response::Connected { .. }
    ));
    assert!(matches!(
        worker.try_next_response().unwrap(),
        Some(Response::BuildComplete {
            triangle_count: 2,
            ..
        })
    ));
    assert!(worker.try_next_response().unwrap().is_none());
}
