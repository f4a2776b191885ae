use worldcol3d::math::{Matrix4, Point, Real, Vector};
use worldcol3d::partitioning::Octree;
use worldcol3d::shape::Capsule;
use worldcol3d::transformation::{MeshData, SceneSnapshot};

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

#[test]
fn capsule_sinking_into_the_ground_is_pushed_up() {
    let octree = Octree::from_scene(&ground_scene());
    assert_eq!(octree.num_triangles(), 2);

    // The bottom of the capsule is at y = -0.2.
    let capsule = Capsule::new(Point::new(2.0, 0.3, -3.0), Point::new(2.0, 1.3, -3.0), 0.5);
    let result = octree.capsule_intersect(&capsule, &[]).unwrap();

    assert_relative_eq!(result.normal, Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(result.depth, 0.2, epsilon = 1.0e-5);
    assert!(!result.mesh_names.is_empty());
    assert!(result.mesh_names.iter().all(|name| name == "ground"));
    assert_eq!(result.last_owner, Some(1));

    // The caller capsule is not modified, and the pushed capsule is resting.
    assert_eq!(capsule.start(), Point::new(2.0, 0.3, -3.0));
    let resolved = capsule.translated(&result.displacement());
    let again = octree.capsule_intersect(&resolved, &[]);
    assert!(again.map(|r| r.depth < 1.0e-4).unwrap_or(true));
}

#[test]
fn capsules_clear_of_the_ground_touch_nothing() {
    let octree = Octree::from_scene(&ground_scene());
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let x = (rng.rand_float() - 0.5) * 18.0;
        let z = (rng.rand_float() - 0.5) * 18.0;
        let radius = 0.1 + rng.rand_float();
        let clearance = 0.001 + rng.rand_float() * 2.0;
        let height = rng.rand_float() * 2.0;
        let start = Point::new(x, radius + clearance, z);
        let capsule = Capsule::new(start, start + Vector::y() * height, radius);

        assert!(
            octree.capsule_intersect(&capsule, &[]).is_none(),
            "{capsule:?} should not touch the ground"
        );
    }

    // Beyond the edge of the world.
    let capsule = Capsule::new(Point::new(11.0, -1.0, 0.0), Point::new(11.0, 1.0, 0.0), 0.5);
    assert!(octree.capsule_intersect(&capsule, &[]).is_none());
}

#[test]
fn capsule_tangent_to_an_edge_does_not_collide() {
    let triangle = MeshData::new(
        3,
        "step",
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 0.0),
        ],
        None,
        Matrix4::identity(),
    );
    let octree = Octree::from_scene(&SceneSnapshot::new(vec![triangle]));

    let radius: Real = 0.5;
    let tangent = Capsule::new(
        Point::new(-radius, 0.0, 0.2),
        Point::new(-radius, 0.0, 0.8),
        radius,
    );
    assert!(octree.capsule_intersect(&tangent, &[]).is_none());

    let touching = tangent.translated(&Vector::new(0.01, 0.0, 0.0));
    let result = octree.capsule_intersect(&touching, &[]).unwrap();
    assert_relative_eq!(result.normal, -Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(result.depth, 0.01, epsilon = 1.0e-4);
    assert_eq!(result.mesh_names, vec!["step".to_string()]);
}

#[test]
fn transformed_meshes_are_queried_in_world_space() {
    let mut scene = ground_scene();
    scene.meshes[0].transform = Matrix4::new_translation(&Vector::new(0.0, 5.0, 0.0));
    let octree = Octree::from_scene(&scene);

    let capsule = Capsule::new_standing(Point::new(1.0, 4.8, 2.0), 1.8, 0.5);
    let result = octree.capsule_intersect(&capsule, &[]).unwrap();
    assert_relative_eq!(result.normal, Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(result.depth, 0.2, epsilon = 1.0e-4);

    let capsule = Capsule::new_standing(Point::new(1.0, -0.2, 2.0), 1.8, 0.5);
    assert!(octree.capsule_intersect(&capsule, &[]).is_none());
}
