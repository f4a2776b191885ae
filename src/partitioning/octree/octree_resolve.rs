use super::Octree;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::{contact_aabb_triangle, MeshContact, Ray};
use crate::shape::{Capsule, MeshOwner, MeshTriangle, Sphere};
use na::Unit;
use std::sync::Arc;

/// The net result of pushing a query shape out of every triangle it penetrates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AggregateContact {
    /// The direction of the net push-out.
    ///
    /// This is a unit vector, or zero if the successive push-outs cancelled each other.
    pub normal: Vector<Real>,
    /// The length of the net push-out.
    pub depth: Real,
    /// The names of the touched meshes, in contact order. A mesh touched through several
    /// triangles appears several times.
    pub mesh_names: Vec<String>,
    /// The identifier of the last touched mesh.
    pub last_owner: Option<u64>,
}

impl AggregateContact {
    fn from_displacement(displacement: Vector<Real>, touched: Vec<Arc<MeshOwner>>) -> Self {
        let (normal, depth) = Unit::try_new_and_get(displacement, 0.0)
            .map(|(normal, depth)| (normal.into_inner(), depth))
            .unwrap_or((Vector::zeros(), 0.0));

        Self {
            normal,
            depth,
            last_owner: touched.last().map(|owner| owner.id),
            mesh_names: touched.into_iter().map(|owner| owner.name.clone()).collect(),
        }
    }

    /// The translation to apply to the query shape: `normal * depth`.
    #[inline]
    pub fn displacement(&self) -> Vector<Real> {
        self.normal * self.depth
    }
}

/// The result of [`Octree::box_intersect`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoxContact {
    /// The face normal of the touched triangle.
    pub normal: UnitVector<Real>,
    /// The mesh owning the touched triangle.
    pub owner: Arc<MeshOwner>,
}

/// The nearest triangle hit by a ray.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayHit {
    /// The hit point, in world-space.
    pub point: Point<Real>,
    /// The distance between the ray origin and the hit point.
    pub distance: Real,
    /// The unit normal of the hit triangle, facing the ray origin.
    pub normal: Vector<Real>,
    /// The index of the hit triangle.
    pub triangle: u32,
    /// The mesh owning the hit triangle.
    pub owner: Arc<MeshOwner>,
}

impl Octree {
    /// Pushes a copy of `sphere` out of every candidate triangle, one after the other.
    ///
    /// Each contact translates the copy along `normal * depth` before the next triangle is
    /// tested, so the outcome depends on the candidate order. Returns the net displacement
    /// of the sphere center, or `None` if no triangle was touched. The caller sphere is
    /// left untouched.
    pub fn sphere_intersect(&self, sphere: &Sphere) -> Option<AggregateContact> {
        let mut local = *sphere;
        let mut touched = vec![];

        for id in self.sphere_triangles(sphere) {
            let triangle = &self.triangles[id as usize];

            if let Some(contact) = triangle.contact_with_sphere(&local) {
                local.translate(&contact.contact.push_out());
                touched.push(contact.owner);
            }
        }

        log::trace!("Sphere query touched {} triangles.", touched.len());

        if touched.is_empty() {
            None
        } else {
            Some(AggregateContact::from_displacement(
                local.center - sphere.center,
                touched,
            ))
        }
    }

    /// Pushes a copy of `capsule` out of `extra_triangles` first, then out of every
    /// candidate triangle of this tree.
    ///
    /// The candidates are selected from the initial capsule position. See
    /// [`Octree::sphere_intersect`] for the resolution strategy. A single call may leave
    /// the capsule slightly penetrating a corner made of several triangles: repeat the
    /// query until it returns `None` if a full separation is needed.
    ///
    /// The capsule radius must be positive.
    pub fn capsule_intersect(
        &self,
        capsule: &Capsule,
        extra_triangles: &[MeshTriangle],
    ) -> Option<AggregateContact> {
        let candidates = self.capsule_triangles(capsule);
        let mut local = *capsule;
        let mut touched = vec![];

        let triangles = extra_triangles
            .iter()
            .chain(candidates.iter().map(|id| &self.triangles[*id as usize]));

        for triangle in triangles {
            if let Some(MeshContact { contact, owner }) = triangle.contact_with_capsule(&local) {
                local.translate(&contact.push_out());
                touched.push(owner);
            }
        }

        log::trace!("Capsule query touched {} triangles.", touched.len());

        if touched.is_empty() {
            None
        } else {
            Some(AggregateContact::from_displacement(
                local.center() - capsule.center(),
                touched,
            ))
        }
    }

    /// Tests `aabb` against the first candidate triangle only.
    ///
    /// This is an approximate check: a contact is reported when the first triangle found
    /// in the leaves overlapping `aabb` intersects it. Other candidates are ignored.
    pub fn box_intersect(&self, aabb: &Aabb) -> Option<BoxContact> {
        let (id, cell) = self.box_triangles(aabb).into_iter().next()?;
        let triangle = &self.triangles[id as usize];

        contact_aabb_triangle(aabb, &triangle.triangle, &cell).map(|normal| BoxContact {
            normal,
            owner: triangle.owner.clone(),
        })
    }

    /// The nearest front-facing triangle hit by `ray`.
    ///
    /// Returns `None` if the ray direction is zero or if no triangle is hit.
    pub fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        let dir_norm = ray.dir.norm();

        if dir_norm == 0.0 {
            return None;
        }

        let mut best: Option<RayHit> = None;

        for id in self.ray_triangles(ray, Real::MAX) {
            let triangle = &self.triangles[id as usize];

            if let Some(inter) = triangle.triangle.cast_ray(ray, Real::MAX, true) {
                let distance = inter.time_of_impact * dir_norm;

                if best.as_ref().map(|hit| distance < hit.distance).unwrap_or(true) {
                    best = Some(RayHit {
                        point: ray.point_at(inter.time_of_impact),
                        distance,
                        normal: inter.normal,
                        triangle: id,
                        owner: triangle.owner.clone(),
                    });
                }
            }
        }

        best
    }
}
