use worldcol3d::math::{Point, Vector};
use worldcol3d::partitioning::Octree;
use worldcol3d::query::Ray;
use worldcol3d::shape::{MeshOwner, MeshTriangle};
use worldcol3d::transformation::TriangleStore;

fn ground_octree() -> Octree {
    let owner = MeshOwner::new(1, "ground");
    let store = TriangleStore::from_triangles(vec![
        MeshTriangle::from_vertices(
            Point::new(-10.0, 0.0, -10.0),
            Point::new(-10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, 10.0),
            owner.clone(),
        ),
        MeshTriangle::from_vertices(
            Point::new(-10.0, 0.0, -10.0),
            Point::new(10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, -10.0),
            owner,
        ),
    ]);
    Octree::build(store)
}

#[test]
fn ray_straight_down_hits_the_ground() {
    let octree = ground_octree();
    let hit = octree
        .cast_ray(&Ray::new(Point::new(1.0, 10.0, -2.0), -Vector::y()))
        .unwrap();

    assert_relative_eq!(hit.point, Point::new(1.0, 0.0, -2.0), epsilon = 1.0e-5);
    assert_relative_eq!(hit.distance, 10.0, epsilon = 1.0e-5);
    assert_relative_eq!(hit.normal, Vector::y(), epsilon = 1.0e-6);
    assert_eq!(hit.owner.name, "ground");
}

#[test]
fn ray_through_the_shared_edge_hits_the_origin() {
    let octree = ground_octree();
    let hit = octree
        .cast_ray(&Ray::new(Point::new(0.0, 10.0, 0.0), -Vector::y()))
        .unwrap();

    assert_relative_eq!(hit.point, Point::origin(), epsilon = 1.0e-5);
    assert_relative_eq!(hit.distance, 10.0, epsilon = 1.0e-5);
}

#[test]
fn ray_distance_accounts_for_the_direction_length() {
    let octree = ground_octree();
    let hit = octree
        .cast_ray(&Ray::new(Point::new(3.0, 10.0, -4.0), Vector::new(0.0, -5.0, 0.0)))
        .unwrap();

    assert_relative_eq!(hit.point, Point::new(3.0, 0.0, -4.0), epsilon = 1.0e-5);
    assert_relative_eq!(hit.distance, 10.0, epsilon = 1.0e-5);
}

#[test]
fn rays_missing_the_ground() {
    let octree = ground_octree();

    // Zero direction.
    assert!(octree
        .cast_ray(&Ray::new(Point::new(0.0, 10.0, 0.0), Vector::zeros()))
        .is_none());
    // Pointing away.
    assert!(octree
        .cast_ray(&Ray::new(Point::new(0.0, 10.0, 0.0), Vector::y()))
        .is_none());
    // Parallel to the ground.
    assert!(octree
        .cast_ray(&Ray::new(Point::new(0.0, 1.0, 0.0), Vector::x()))
        .is_none());
    // Back faces are culled.
    assert!(octree
        .cast_ray(&Ray::new(Point::new(1.0, -10.0, 2.0), Vector::y()))
        .is_none());
    // Passing beside the world.
    assert!(octree
        .cast_ray(&Ray::new(Point::new(20.0, 10.0, 0.0), -Vector::y()))
        .is_none());
}
