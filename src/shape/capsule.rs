use crate::math::{Point, Real, Vector};
use crate::shape::Segment;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule shape defined as a round segment, expressed in world-space.
///
/// The caller owns its capsule: queries work on a copy and report a displacement
/// instead of moving it. A radius smaller or equal to zero is not supported.
pub struct Capsule {
    /// The axis and endpoint of the capsule.
    pub segment: Segment,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule defined as the segment between `start` and `end` and with the given `radius`.
    pub fn new(start: Point<Real>, end: Point<Real>, radius: Real) -> Self {
        let segment = Segment::new(start, end);
        Self { segment, radius }
    }

    /// Creates a new vertical capsule standing on `foot`: its lowest point is `foot` and
    /// its total height, caps included, is `height`.
    pub fn new_standing(foot: Point<Real>, height: Real, radius: Real) -> Self {
        let start = foot + Vector::y() * radius;
        let end = foot + Vector::y() * (height - radius).max(radius);
        Self::new(start, end, radius)
    }

    /// The center of the lower cap.
    pub fn start(&self) -> Point<Real> {
        self.segment.a
    }

    /// The center of the upper cap.
    pub fn end(&self) -> Point<Real> {
        self.segment.b
    }

    /// The center of this capsule.
    pub fn center(&self) -> Point<Real> {
        self.segment.center()
    }

    /// Moves this capsule by `shift`.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.segment.a += shift;
        self.segment.b += shift;
    }

    /// Creates a new capsule equal to `self` moved by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        let mut result = *self;
        result.translate(shift);
        result
    }
}
