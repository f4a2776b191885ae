use worldcol3d::math::{Matrix4, Point, Vector};
use worldcol3d::partitioning::Octree;
use worldcol3d::shape::Capsule;
use worldcol3d::transformation::{MeshData, SceneSnapshot};

/// A 2x2 vertical quad in the plane `x = 1`, facing `-x`.
fn wall() -> MeshData {
    MeshData::new(
        9,
        "wall",
        vec![
            Point::new(1.0, 0.0, -1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(1.0, 2.0, 1.0),
            Point::new(1.0, 2.0, -1.0),
        ],
        Some(vec![0, 1, 3, 1, 2, 3]),
        Matrix4::identity(),
    )
}

fn ground() -> MeshData {
    MeshData::new(
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
    )
}

#[test]
fn extra_triangles_are_resolved_without_a_tree() {
    let octree = Octree::new();
    let obstacle = wall().triangles().unwrap();
    let capsule = Capsule::new(Point::new(0.7, 0.6, -0.5), Point::new(0.7, 1.4, -0.5), 0.5);

    let result = octree.capsule_intersect(&capsule, &obstacle).unwrap();
    assert_relative_eq!(result.normal, -Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(result.depth, 0.2, epsilon = 1.0e-5);
    assert_eq!(result.mesh_names, vec!["wall".to_string()]);
    assert_eq!(result.last_owner, Some(9));
}

#[test]
fn extra_triangles_are_tested_first() {
    let octree = Octree::from_scene(&SceneSnapshot::new(vec![ground()]));
    let obstacle = wall().triangles().unwrap();

    // Penetrates both the wall and the ground.
    let capsule = Capsule::new(Point::new(0.7, 0.3, -0.5), Point::new(0.7, 1.3, -0.5), 0.5);
    let result = octree.capsule_intersect(&capsule, &obstacle).unwrap();

    assert_eq!(result.mesh_names.first().map(|s| s.as_str()), Some("wall"));
    assert!(result.mesh_names.iter().any(|name| name == "ground"));
    assert_relative_eq!(
        result.displacement(),
        Vector::new(-0.2, 0.2, 0.0),
        epsilon = 1.0e-4
    );
}

#[test]
fn non_collidable_meshes_are_ignored() {
    let scene = SceneSnapshot::new(vec![ground(), wall().with_collidable(false)]);
    let octree = Octree::from_scene(&scene);
    assert_eq!(octree.num_triangles(), 2);

    let capsule = Capsule::new(Point::new(0.7, 0.6, -0.5), Point::new(0.7, 1.4, -0.5), 0.5);
    assert!(octree.capsule_intersect(&capsule, &[]).is_none());
}
