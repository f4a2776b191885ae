use crate::math::Real;
use crate::query::closest_points::closest_points_point_segment;
use crate::query::Contact;
use crate::shape::{Sphere, Triangle};
use na::{self, Unit};

/// Contact between a sphere and a triangle.
///
/// Returns `None` if the sphere does not cross the triangle plane, or if the triangle
/// is degenerate. When the projection of the center on the plane lies inside of the
/// triangle, the contact normal is the plane normal and the depth is the gap between
/// the sphere surface and the plane. Otherwise the first edge closer to the center
/// than the radius is used.
pub fn contact_ball_triangle(sphere: &Sphere, triangle: &Triangle) -> Option<Contact> {
    let plane = triangle.plane()?;
    let dist = plane.distance_to_point(&sphere.center);

    if dist.abs() > sphere.radius {
        return None;
    }

    let projected = plane.project_point(&sphere.center);

    if triangle.contains_point(&projected) {
        let depth = (dist - sphere.radius).abs();
        return Some(Contact::new(projected, plane.normal, depth));
    }

    let sq_radius = sphere.radius * sphere.radius;

    for edge in &triangle.edges() {
        let (closest, _) = closest_points_point_segment(&sphere.center, edge);
        let sq_dist = na::distance_squared(&closest, &sphere.center);

        if sq_dist < sq_radius {
            let normal = Unit::try_new(sphere.center - closest, crate::math::DEFAULT_EPSILON)
                .unwrap_or(plane.normal);
            let depth: Real = sphere.radius - sq_dist.sqrt();
            return Some(Contact::new(closest, normal, depth));
        }
    }

    None
}

#[cfg(test)]
mod test {
    use super::contact_ball_triangle;
    use crate::math::{Point, Vector};
    use crate::shape::{Sphere, Triangle};

    fn ground() -> Triangle {
        Triangle::new(
            Point::new(-10.0, 0.0, -10.0),
            Point::new(-10.0, 0.0, 10.0),
            Point::new(10.0, 0.0, 10.0),
        )
    }

    #[test]
    fn sphere_resting_into_the_face() {
        let sphere = Sphere::new(Point::new(-2.0, 0.3, 2.0), 0.5);
        let contact = contact_ball_triangle(&sphere, &ground()).unwrap();

        assert_relative_eq!(*contact.normal, Vector::y());
        assert_relative_eq!(contact.depth, 0.2, epsilon = 1.0e-6);
        assert_relative_eq!(contact.point, Point::new(-2.0, 0.0, 2.0));
    }

    #[test]
    fn sphere_away_from_the_plane() {
        let sphere = Sphere::new(Point::new(-2.0, 0.6, 2.0), 0.5);
        assert!(contact_ball_triangle(&sphere, &ground()).is_none());
    }

    #[test]
    fn sphere_touching_an_edge() {
        // The center projects outside of the triangle, next to the edge `x = -10`.
        let sphere = Sphere::new(Point::new(-10.3, 0.0, 0.0), 0.5);
        let contact = contact_ball_triangle(&sphere, &ground()).unwrap();

        assert_relative_eq!(*contact.normal, -Vector::x(), epsilon = 1.0e-6);
        assert_relative_eq!(contact.depth, 0.2, epsilon = 1.0e-5);

        let sphere = Sphere::new(Point::new(-10.6, 0.0, 0.0), 0.5);
        assert!(contact_ball_triangle(&sphere, &ground()).is_none());
    }

    #[test]
    fn tiny_triangle_still_collides() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 3.0e-4),
            Point::new(3.0e-4, 0.0, 0.0),
        );
        let sphere = Sphere::new(Point::new(1.0e-4, 0.3, 1.0e-4), 0.5);
        let contact = contact_ball_triangle(&sphere, &tri).unwrap();

        assert_relative_eq!(*contact.normal, Vector::y(), epsilon = 1.0e-6);
        assert_relative_eq!(contact.depth, 0.2, epsilon = 1.0e-5);
    }

    #[test]
    fn degenerate_triangle_never_collides() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
        );
        let sphere = Sphere::new(Point::new(1.0, 0.0, 0.0), 1.0);
        assert!(contact_ball_triangle(&sphere, &tri).is_none());
    }
}
