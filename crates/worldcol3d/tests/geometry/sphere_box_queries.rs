use worldcol3d::bounding_volume::Aabb;
use worldcol3d::math::{Matrix4, Point, Vector};
use worldcol3d::partitioning::Octree;
use worldcol3d::shape::Sphere;
use worldcol3d::transformation::{MeshData, SceneSnapshot};

fn ground_octree() -> Octree {
    let ground = MeshData::new(
        1,
        "ground",
        vec![
            Point::new(-10.0, 0.0, -10.0),
            Point::new(-10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, 10.0),
            Point::new(-10.0, 0.0, -10.0),
            Point::new(10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, -10.0),
        ],
        None,
        Matrix4::identity(),
    );
    Octree::from_scene(&SceneSnapshot::new(vec![ground]))
}

#[test]
fn sphere_sinking_into_the_ground_is_pushed_up() {
    let octree = ground_octree();
    let sphere = Sphere::new(Point::new(2.0, 0.3, -3.0), 0.5);
    let result = octree.sphere_intersect(&sphere).unwrap();

    assert_relative_eq!(result.normal, Vector::y(), epsilon = 1.0e-5);
    assert_relative_eq!(result.depth, 0.2, epsilon = 1.0e-5);
    assert_eq!(sphere.center, Point::new(2.0, 0.3, -3.0));
}

#[test]
fn sphere_above_the_ground() {
    let octree = ground_octree();
    let sphere = Sphere::new(Point::new(2.0, 0.6, -3.0), 0.5);
    assert!(octree.sphere_intersect(&sphere).is_none());
}

#[test]
fn box_crossing_the_ground() {
    let octree = ground_octree();
    let aabb = Aabb::from_half_extents(Point::new(0.0, 0.1, 0.0), Vector::repeat(0.5));
    let contact = octree.box_intersect(&aabb).unwrap();

    assert_relative_eq!(*contact.normal, Vector::y(), epsilon = 1.0e-6);
    assert_eq!(contact.owner.name, "ground");
}

#[test]
fn box_in_an_empty_region() {
    let octree = ground_octree();

    let far = Aabb::from_half_extents(Point::new(50.0, 50.0, 50.0), Vector::repeat(1.0));
    assert!(octree.box_intersect(&far).is_none());

    let above = Aabb::from_half_extents(Point::new(0.0, 1.5, 0.0), Vector::repeat(0.5));
    assert!(octree.box_intersect(&above).is_none());
}
