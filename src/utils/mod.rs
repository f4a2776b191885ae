//! Various unsorted geometrical and logical operators.

pub use self::point_in_triangle::{
    barycentric_coordinates, is_point_in_triangle, DEGENERATE_BARYCENTRIC_COORDINATES,
};

mod point_in_triangle;
