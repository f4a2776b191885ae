//! Function to check if a point is inside a triangle and related functions.

use crate::math::{Point, Real};

/// Barycentric weights returned for degenerate triangles.
///
/// These lie outside of every triangle, so containment tests on a collinear triangle
/// fail instead of dividing by a zero determinant.
pub const DEGENERATE_BARYCENTRIC_COORDINATES: [Real; 3] = [-2.0, -1.0, -1.0];

/// Computes the barycentric coordinates `[wa, wb, wc]` of `p` with respect to the triangle
/// `a`, `b`, `c`, so that the projection of `p` on the triangle plane equals
/// `wa * a + wb * b + wc * c`.
///
/// If the triangle is degenerate, [`DEGENERATE_BARYCENTRIC_COORDINATES`] is returned.
pub fn barycentric_coordinates(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> [Real; 3] {
    // Based on http://www.blackpawn.com/texts/pointinpoly/default.html
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;

    if denom == 0.0 {
        return DEGENERATE_BARYCENTRIC_COORDINATES;
    }

    let inv_denom = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    [1.0 - u - v, v, u]
}

/// Returns `true` if point `p`, projected on the plane of the triangle `v1`, `v2`, `v3`,
/// lies inside of it.
///
/// The boundary is inclusive: a point with a weight exactly equal to zero is inside.
/// A degenerate triangle contains no point.
pub fn is_point_in_triangle(
    p: &Point<Real>,
    v1: &Point<Real>,
    v2: &Point<Real>,
    v3: &Point<Real>,
) -> bool {
    let [_, wb, wc] = barycentric_coordinates(p, v1, v2, v3);
    wb >= 0.0 && wc >= 0.0 && wb + wc <= 1.0
}
