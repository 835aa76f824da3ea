//! Dimension triples, kit orientations and grid counts.

use nalgebra::Vector3;
use std::fmt;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis labels used for the three container axes.
pub const AXIS_NAMES: [&str; 3] = ["length", "width", "height"];

/// An ordered `(length, width, height)` triple in a consistent linear unit.
///
/// Used both for kits and for containers. Has no identity and is passed by value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions3D {
    extents: Vector3<f64>,
}

impl Dimensions3D {
    /// Creates a new triple. Values are not validated; see [`Dimensions3D::validate`].
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            extents: Vector3::new(length, width, height),
        }
    }

    /// Creates a triple from an array `[length, width, height]`.
    pub fn from_array(dims: [f64; 3]) -> Self {
        Self::new(dims[0], dims[1], dims[2])
    }

    /// Returns the extents as a vector.
    pub fn extents(&self) -> &Vector3<f64> {
        &self.extents
    }

    /// Returns the length (first axis).
    pub fn length(&self) -> f64 {
        self.extents.x
    }

    /// Returns the width (second axis).
    pub fn width(&self) -> f64 {
        self.extents.y
    }

    /// Returns the height (third axis).
    pub fn height(&self) -> f64 {
        self.extents.z
    }

    /// Returns the component on the given axis (0 = length, 1 = width, 2 = height).
    pub fn axis(&self, index: usize) -> f64 {
        self.extents[index]
    }

    /// Returns the triple as an array.
    pub fn as_array(&self) -> [f64; 3] {
        [self.extents.x, self.extents.y, self.extents.z]
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// Returns true if every component is `<=` the matching component of `other`.
    pub fn fits_within(&self, other: &Dimensions3D) -> bool {
        self.extents.x <= other.extents.x
            && self.extents.y <= other.extents.y
            && self.extents.z <= other.extents.z
    }

    /// Returns the names of the axes on which this triple exceeds `other`.
    pub fn exceeding_axes(&self, other: &Dimensions3D) -> Vec<&'static str> {
        (0..3)
            .filter(|&i| self.extents[i] > other.extents[i])
            .map(|i| AXIS_NAMES[i])
            .collect()
    }

    /// Checks that all three components are finite and strictly positive.
    ///
    /// The message names the offending axis so callers can wrap it in the
    /// error variant that matches the triple's role.
    pub fn check_positive(&self) -> std::result::Result<(), String> {
        for (i, name) in AXIS_NAMES.iter().enumerate() {
            let v = self.extents[i];
            if !v.is_finite() {
                return Err(format!("{} must be a finite number, got {}", name, v));
            }
            if v <= 0.0 {
                return Err(format!("{} must be positive, got {}", name, v));
            }
        }
        Ok(())
    }

    /// Validates the triple as kit dimensions.
    pub fn validate(&self) -> Result<()> {
        self.check_positive().map_err(Error::InvalidGeometry)
    }
}

impl From<[f64; 3]> for Dimensions3D {
    fn from(dims: [f64; 3]) -> Self {
        Self::from_array(dims)
    }
}

impl From<(f64, f64, f64)> for Dimensions3D {
    fn from((l, w, h): (f64, f64, f64)) -> Self {
        Self::new(l, w, h)
    }
}

impl fmt::Display for Dimensions3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {} × {}",
            self.extents.x, self.extents.y, self.extents.z
        )
    }
}

/// One of the six axis-aligned permutations of a kit's dimensions.
///
/// Each variant names which kit dimension lands on the container's
/// (length, width, height) axes. Declaration order is the enumeration order
/// used by the solver, and therefore also its tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// (length, width, height): the kit as given.
    Lwh,
    /// (width, length, height): turned 90° about the vertical axis.
    Wlh,
    /// (length, height, width): tipped onto its side about the length axis.
    Lhw,
    /// (height, width, length): stood on end about the width axis.
    Hwl,
    /// (width, height, length)
    Whl,
    /// (height, length, width)
    Hlw,
}

impl Orientation {
    /// All six orientations in enumeration order.
    pub const ALL: [Orientation; 6] = [
        Orientation::Lwh,
        Orientation::Wlh,
        Orientation::Lhw,
        Orientation::Hwl,
        Orientation::Whl,
        Orientation::Hlw,
    ];

    /// Source kit axis for each container axis.
    pub fn axes(self) -> (usize, usize, usize) {
        match self {
            Orientation::Lwh => (0, 1, 2),
            Orientation::Wlh => (1, 0, 2),
            Orientation::Lhw => (0, 2, 1),
            Orientation::Hwl => (2, 1, 0),
            Orientation::Whl => (1, 2, 0),
            Orientation::Hlw => (2, 0, 1),
        }
    }

    /// Applies the permutation to a kit triple.
    pub fn apply(self, kit: &Dimensions3D) -> Dimensions3D {
        let (x, y, z) = self.axes();
        Dimensions3D::new(kit.axis(x), kit.axis(y), kit.axis(z))
    }

    /// Returns true for the unrotated orientation.
    pub fn is_identity(self) -> bool {
        self == Orientation::Lwh
    }

    /// Position of this orientation in [`Orientation::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label such as `L×W×H`.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Lwh => "L×W×H",
            Orientation::Wlh => "W×L×H",
            Orientation::Lhw => "L×H×W",
            Orientation::Hwl => "H×W×L",
            Orientation::Whl => "W×H×L",
            Orientation::Hlw => "H×L×W",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const UPRIGHT: [Orientation; 2] = [Orientation::Lwh, Orientation::Wlh];
const FIXED: [Orientation; 1] = [Orientation::Lwh];

/// Which orientations a kit may be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrientationConstraint {
    /// Any of the 6 axis-aligned orientations.
    #[default]
    Any,
    /// Height stays vertical: as given, or turned 90° about the vertical axis.
    Upright,
    /// Fixed orientation (no rotation allowed).
    Fixed,
}

impl OrientationConstraint {
    /// Returns the allowed orientations, in enumeration order.
    pub fn allowed(self) -> &'static [Orientation] {
        match self {
            OrientationConstraint::Any => &Orientation::ALL,
            OrientationConstraint::Upright => &UPRIGHT,
            OrientationConstraint::Fixed => &FIXED,
        }
    }

    /// Returns true if `orientation` is allowed by this constraint.
    pub fn permits(self, orientation: Orientation) -> bool {
        self.allowed().contains(&orientation)
    }
}

impl std::str::FromStr for OrientationConstraint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(OrientationConstraint::Any),
            "upright" => Ok(OrientationConstraint::Upright),
            "fixed" => Ok(OrientationConstraint::Fixed),
            other => Err(Error::ConfigError(format!(
                "unknown orientation constraint '{}'",
                other
            ))),
        }
    }
}

/// How many whole kits fit along each container axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCount {
    /// Count along the container length.
    pub along_length: usize,
    /// Count along the container width.
    pub along_width: usize,
    /// Count along the container height.
    pub along_height: usize,
}

impl GridCount {
    /// Creates a grid count.
    pub fn new(along_length: usize, along_width: usize, along_height: usize) -> Self {
        Self {
            along_length,
            along_width,
            along_height,
        }
    }

    /// Floor-divides each container extent by the oriented kit extent.
    pub fn fit(container: &Dimensions3D, oriented_kit: &Dimensions3D) -> Self {
        Self::new(
            floor_div(container.length(), oriented_kit.length()),
            floor_div(container.width(), oriented_kit.width()),
            floor_div(container.height(), oriented_kit.height()),
        )
    }

    /// Total number of units, or `None` if the product does not fit in `usize`.
    pub fn checked_total(&self) -> Option<usize> {
        self.along_length
            .checked_mul(self.along_width)?
            .checked_mul(self.along_height)
    }

    /// Total number of units in the grid, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.checked_total().unwrap_or(usize::MAX)
    }

    /// Returns true if any axis has zero units.
    pub fn is_empty(&self) -> bool {
        self.as_array().contains(&0)
    }

    /// Returns the counts as an array.
    pub fn as_array(&self) -> [usize; 3] {
        [self.along_length, self.along_width, self.along_height]
    }

    /// Iterates over every `(i, j, k)` cell index in the grid.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> {
        let (nl, nw, nh) = (self.along_length, self.along_width, self.along_height);
        (0..nl).flat_map(move |i| (0..nw).flat_map(move |j| (0..nh).map(move |k| (i, j, k))))
    }
}

impl fmt::Display for GridCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {} × {}",
            self.along_length, self.along_width, self.along_height
        )
    }
}

/// Whole-unit quotient of two positive reals.
///
/// The quotient is taken from `a - a % b`, so a divisor that is inexact in
/// binary never rounds up to the next integer: `floor_div(1.0, 0.1)` is 9.
pub fn floor_div(a: f64, b: f64) -> usize {
    let rem = a % b;
    let div = (a - rem) / b;
    let mut q = div.floor();
    if div - q > 0.5 {
        q += 1.0;
    }
    if q <= 0.0 {
        0
    } else {
        q as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume() {
        let d = Dimensions3D::new(10.0, 20.0, 30.0);
        assert_relative_eq!(d.volume(), 6000.0, epsilon = 0.001);
    }

    #[test]
    fn test_validation() {
        assert!(Dimensions3D::new(10.0, 20.0, 30.0).validate().is_ok());
        assert!(Dimensions3D::new(-10.0, 20.0, 30.0).validate().is_err());
        assert!(Dimensions3D::new(10.0, 0.0, 30.0).validate().is_err());
        assert!(Dimensions3D::new(10.0, 20.0, f64::NAN).validate().is_err());
        assert!(Dimensions3D::new(f64::INFINITY, 20.0, 30.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_fits_within() {
        let kit = Dimensions3D::new(10.0, 20.0, 30.0);
        assert!(kit.fits_within(&Dimensions3D::new(10.0, 20.0, 30.0)));
        assert!(!kit.fits_within(&Dimensions3D::new(30.0, 20.0, 10.0)));
        assert_eq!(
            kit.exceeding_axes(&Dimensions3D::new(30.0, 20.0, 10.0)),
            vec!["height"]
        );
    }

    #[test]
    fn test_orientation_permutations() {
        let kit = Dimensions3D::new(1.0, 2.0, 3.0);
        let oriented: Vec<[f64; 3]> = Orientation::ALL
            .iter()
            .map(|o| o.apply(&kit).as_array())
            .collect();

        assert_eq!(
            oriented,
            vec![
                [1.0, 2.0, 3.0],
                [2.0, 1.0, 3.0],
                [1.0, 3.0, 2.0],
                [3.0, 2.0, 1.0],
                [2.0, 3.0, 1.0],
                [3.0, 1.0, 2.0],
            ]
        );
    }

    #[test]
    fn test_orientation_index_matches_all() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
        assert!(Orientation::Lwh.is_identity());
        assert!(!Orientation::Hlw.is_identity());
        assert_eq!(Orientation::Whl.to_string(), "W×H×L");
    }

    #[test]
    fn test_orientation_constraint() {
        assert_eq!(OrientationConstraint::Any.allowed().len(), 6);
        assert_eq!(
            OrientationConstraint::Upright.allowed(),
            &[Orientation::Lwh, Orientation::Wlh]
        );
        assert_eq!(OrientationConstraint::Fixed.allowed(), &[Orientation::Lwh]);
        assert!(!OrientationConstraint::Upright.permits(Orientation::Hwl));

        assert_eq!(
            "Upright".parse::<OrientationConstraint>().unwrap(),
            OrientationConstraint::Upright
        );
        assert!("sideways".parse::<OrientationConstraint>().is_err());
    }

    #[test]
    fn test_grid_fit() {
        let container = Dimensions3D::new(35.0, 35.0, 35.0);
        let kit = Dimensions3D::new(10.0, 10.0, 10.0);
        let grid = GridCount::fit(&container, &kit);
        assert_eq!(grid, GridCount::new(3, 3, 3));
        assert_eq!(grid.total(), 27);
    }

    #[test]
    fn test_grid_cells() {
        let grid = GridCount::new(2, 3, 1);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], (0, 0, 0));
        assert_eq!(cells[5], (1, 2, 0));
        assert!(GridCount::new(2, 0, 4).is_empty());
        assert_eq!(GridCount::new(2, 0, 4).cells().count(), 0);
    }

    #[test]
    fn test_grid_total_overflow() {
        let huge = GridCount::new(10_000_000, 10_000_000, 10_000_000);
        assert_eq!(huge.checked_total(), None);
        assert_eq!(huge.total(), usize::MAX);
        assert!(!huge.is_empty());
        assert!(GridCount::new(usize::MAX, 0, 2).is_empty());
        assert_eq!(GridCount::new(4, 5, 6).checked_total(), Some(120));
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(30.0, 10.0), 3);
        assert_eq!(floor_div(35.0, 10.0), 3);
        assert_eq!(floor_div(9.99, 10.0), 0);
        assert_eq!(floor_div(0.3, 0.1), 2);
        assert_eq!(floor_div(1.0, 0.1), 9);
        assert_eq!(floor_div(1.0, 0.25), 4);
    }
}
