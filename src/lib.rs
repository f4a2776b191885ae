/*!
worldcol3d
==========

**worldcol3d** answers "is my actor overlapping the world, and if so how do I push
it out" against a large static triangle mesh, many times per frame.

The world is ingested once into a [`TriangleStore`](transformation::TriangleStore),
indexed by an [`Octree`](partitioning::Octree), and then queried with capsules,
spheres, boxes and rays. Capsule and sphere queries resolve penetrations iteratively
and return a single aggregated push-out vector.

```
use worldcol3d::math::{Matrix4, Point};
use worldcol3d::partitioning::Octree;
use worldcol3d::shape::Capsule;
use worldcol3d::transformation::{MeshData, SceneSnapshot, TriangleStore};

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
let store = TriangleStore::from_scene(&SceneSnapshot::new(vec![ground]));
let octree = Octree::build(store);

let capsule = Capsule::new(Point::new(2.0, 0.3, -3.0), Point::new(2.0, 1.3, -3.0), 0.5);
let push = octree.capsule_intersect(&capsule, &[]).unwrap();
assert!((push.depth - 0.2).abs() < 1.0e-4);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;
pub mod worker;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Matrix4, Point3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
