use crate::math::{Point, Real};
use crate::query::{Ray, RayIntersection};
use crate::shape::Triangle;

impl Triangle {
    /// Casts a ray on this triangle.
    ///
    /// If `cull_back_faces` is `true`, the ray only hits the triangle when it reaches the
    /// side its normal (see [`Triangle::normal`]) points to.
    #[inline]
    pub fn cast_ray(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        cull_back_faces: bool,
    ) -> Option<RayIntersection> {
        let (inter, front_face) =
            local_ray_intersection_with_triangle(&self.a, &self.b, &self.c, ray)?;

        if cull_back_faces && !front_face {
            return None;
        }

        if inter.time_of_impact <= max_time_of_impact {
            Some(inter)
        } else {
            None
        }
    }
}

/// Computes the intersection between a triangle and a ray.
///
/// If an intersection is found, the intersection and a flag indicating whether the
/// front face (the face with normal `AB × AC`) was hit are returned.
pub fn local_ray_intersection_with_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<(RayIntersection, bool)> {
    let ab = *b - *a;
    let ac = *c - *a;

    // normal
    let n = ab.cross(&ac);
    let d = n.dot(&ray.dir);

    // the normal and the ray direction are parallel
    if d == 0.0 {
        return None;
    }

    let ap = ray.origin - *a;
    let t = ap.dot(&n);

    // the ray does not intersect the halfspace defined by the triangle
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let front_face = d < 0.0;
    let d = d.abs();

    //
    // intersection: compute barycentric coordinates
    //
    let e = -ray.dir.cross(&ap);

    let mut v;
    let mut w;
    let toi;
    let normal;

    if t < 0.0 {
        v = -ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        let invd = 1.0 / d;
        toi = -t * invd;
        normal = -n.normalize();
        v *= invd;
        w *= invd;
    } else {
        v = ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = -ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        let invd = 1.0 / d;
        toi = t * invd;
        normal = n.normalize();
        v *= invd;
        w *= invd;
    }

    Some((RayIntersection::new(toi, normal, [-v - w + 1.0, v, w]), front_face))
}
