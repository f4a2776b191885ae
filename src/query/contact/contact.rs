use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::{contact_ball_triangle, contact_capsule_triangle};
use crate::shape::{Capsule, MeshOwner, MeshTriangle, Sphere};
use std::sync::Arc;

/// Geometric description of a penetration between a query shape and a triangle.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// A point of the contact region, on or near the triangle.
    pub point: Point<Real>,

    /// The direction along which the query shape must move to resolve the penetration.
    pub normal: UnitVector<Real>,

    /// The penetration depth. Never negative.
    pub depth: Real,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(point: Point<Real>, normal: UnitVector<Real>, depth: Real) -> Self {
        Contact {
            point,
            normal,
            depth,
        }
    }

    /// The translation that pushes the query shape out of the triangle: `normal * depth`.
    #[inline]
    pub fn push_out(&self) -> Vector<Real> {
        *self.normal * self.depth
    }
}

/// A contact together with the mesh owning the touched triangle.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshContact {
    /// The geometric contact.
    pub contact: Contact,
    /// The mesh that was touched.
    pub owner: Arc<MeshOwner>,
}

impl MeshContact {
    /// The display name of the touched mesh.
    #[inline]
    pub fn mesh_name(&self) -> &str {
        &self.owner.name
    }
}

impl MeshTriangle {
    /// Contact between `sphere` and this triangle, tagged with the owning mesh.
    #[inline]
    pub fn contact_with_sphere(&self, sphere: &Sphere) -> Option<MeshContact> {
        contact_ball_triangle(sphere, &self.triangle).map(|contact| self.tag(contact))
    }

    /// Contact between `capsule` and this triangle, tagged with the owning mesh.
    #[inline]
    pub fn contact_with_capsule(&self, capsule: &Capsule) -> Option<MeshContact> {
        contact_capsule_triangle(capsule, &self.triangle).map(|contact| self.tag(contact))
    }

    fn tag(&self, contact: Contact) -> MeshContact {
        MeshContact {
            contact,
            owner: self.owner.clone(),
        }
    }
}
