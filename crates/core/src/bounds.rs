//! Axis-aligned bounding boxes.

use nalgebra::{Point3, RealField, Scalar, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D axis-aligned bounding box given by its two extreme corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S: Scalar> {
    min: Point3<S>,
    max: Point3<S>,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a box from its minimum and maximum corners.
    pub fn new(min: Point3<S>, max: Point3<S>) -> Self {
        Self { min, max }
    }

    /// Creates a box from a minimum corner and non-negative extents.
    pub fn from_origin_extents(origin: &Point3<S>, extents: &Vector3<S>) -> Self {
        Self::new(*origin, origin + extents)
    }

    /// Smallest box holding every point; `None` for an empty slice.
    pub fn from_points(points: &[Point3<S>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |acc, p| {
            Self::new(acc.min.inf(p), acc.max.sup(p))
        }))
    }

    /// Minimum corner.
    pub fn min(&self) -> &Point3<S> {
        &self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> &Point3<S> {
        &self.max
    }

    /// Size along x, y and z.
    pub fn extents(&self) -> Vector3<S> {
        self.max - self.min
    }

    /// Size along x.
    pub fn width(&self) -> S {
        self.max.x - self.min.x
    }

    /// Size along y.
    pub fn depth(&self) -> S {
        self.max.y - self.min.y
    }

    /// Size along z.
    pub fn height(&self) -> S {
        self.max.z - self.min.z
    }

    pub fn volume(&self) -> S {
        self.extents().product()
    }

    /// Boundary inclusive.
    pub fn contains_point(&self, p: &Point3<S>) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }

    /// True when `other` lies entirely inside this box.
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Closed test: boxes sharing only a face, edge or corner still intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Open test: the shared region has positive volume.
    ///
    /// Two tiles of a grid layout intersect along their common face but
    /// never overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] < other.max[i] && other.min[i] < self.max[i])
    }

    /// Shared region, if the boxes intersect.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.intersects(other)
            .then(|| Self::new(self.min.sup(&other.min), self.max.inf(&other.max)))
    }

    /// Smallest box holding both.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.inf(&other.min), self.max.sup(&other.max))
    }
}
