//! Cuboid scene generation for rendering a grid layout.
//!
//! A [`Scene`] holds the container and every placed unit as compact
//! `(origin, extents)` cuboids. Vertices and faces are computed on demand,
//! so the geometry can never drift from the grid it was built from.

use kitpack_core::bounds::AABB3D;
use kitpack_core::geometry::{Dimensions3D, GridCount};
use kitpack_core::{Error, FitResult, Result};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex indices of the six quad faces: bottom, top, front, back, right, left.
///
/// Indices refer to the vertex order of [`Cuboid::vertices`].
pub const FACE_INDICES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [1, 2, 6, 5],
    [4, 7, 3, 0],
];

/// Face names in [`FACE_INDICES`] order.
pub const FACE_NAMES: [&str; 6] = ["bottom", "top", "front", "back", "right", "left"];

/// Axis labels for plots of a scene.
pub const AXIS_LABELS: [&str; 3] = ["Length (cm)", "Width (cm)", "Height (cm)"];

/// An axis-aligned box given by its minimum corner and extents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cuboid {
    origin: Point3<f64>,
    extents: Vector3<f64>,
}

impl Cuboid {
    /// Creates a cuboid from its minimum corner and extents.
    pub fn new(origin: Point3<f64>, extents: Vector3<f64>) -> Self {
        Self { origin, extents }
    }

    /// Creates a cuboid with one corner at the origin.
    pub fn at_origin(dimensions: &Dimensions3D) -> Self {
        Self::new(Point3::origin(), *dimensions.extents())
    }

    /// Returns the minimum corner.
    pub fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Returns the extents along x, y, z.
    pub fn extents(&self) -> &Vector3<f64> {
        &self.extents
    }

    /// Returns the corner opposite the origin.
    pub fn max_corner(&self) -> Point3<f64> {
        self.origin + self.extents
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// Returns the 8 corner vertices.
    ///
    /// Vertex ordering:
    /// 0: (x, y, z) - bottom-front-left
    /// 1: (x+l, y, z) - bottom-front-right
    /// 2: (x+l, y+a, z) - bottom-back-right
    /// 3: (x, y+a, z) - bottom-back-left
    /// 4..7: the same four corners at z+h
    pub fn vertices(&self) -> [Point3<f64>; 8] {
        let (x, y, z) = (self.origin.x, self.origin.y, self.origin.z);
        let (l, a, h) = (self.extents.x, self.extents.y, self.extents.z);
        [
            Point3::new(x, y, z),
            Point3::new(x + l, y, z),
            Point3::new(x + l, y + a, z),
            Point3::new(x, y + a, z),
            Point3::new(x, y, z + h),
            Point3::new(x + l, y, z + h),
            Point3::new(x + l, y + a, z + h),
            Point3::new(x, y + a, z + h),
        ]
    }

    /// Returns the 6 faces as 4-vertex loops, in [`FACE_INDICES`] order.
    pub fn faces(&self) -> [[Point3<f64>; 4]; 6] {
        let v = self.vertices();
        FACE_INDICES.map(|quad| quad.map(|i| v[i]))
    }

    /// Returns the bounding box.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_origin_extents(&self.origin, &self.extents)
    }
}

/// An RGB colour with a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Color {
    /// Colour name.
    pub name: &'static str,
    /// Red, green, blue.
    pub rgb: [u8; 3],
}

impl Color {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: [r, g, b],
        }
    }

    /// Returns the colour as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Unit colours, indexed by [`ColorTag`].
pub const PALETTE: [Color; 6] = [
    Color::new("red", 255, 0, 0),
    Color::new("green", 0, 128, 0),
    Color::new("blue", 0, 0, 255),
    Color::new("yellow", 255, 255, 0),
    Color::new("orange", 255, 165, 0),
    Color::new("purple", 128, 0, 128),
];

/// Cosmetic colour index so neighbouring units look different.
///
/// Has no effect on geometry or counts. Always a valid [`PALETTE`] index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8"))]
pub struct ColorTag(u8);

impl TryFrom<u8> for ColorTag {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        if usize::from(index) < PALETTE.len() {
            Ok(Self(index))
        } else {
            Err(Error::ConfigError(format!(
                "colour tag {} outside the {}-colour palette",
                index,
                PALETTE.len()
            )))
        }
    }
}

impl ColorTag {
    /// Tag for grid cell `(i, j, k)`: `(i + j + k) mod 6`.
    pub fn for_cell(i: usize, j: usize, k: usize) -> Self {
        Self(((i + j + k) % PALETTE.len()) as u8)
    }

    /// Palette index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Palette colour.
    pub fn color(self) -> Color {
        PALETTE[self.index()]
    }
}

/// Fill and outline for drawing a cuboid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FaceStyle {
    /// Fill colour.
    pub face_color: Color,
    /// Edge colour.
    pub edge_color: Color,
    /// Fill opacity (0.0 - 1.0).
    pub alpha: f32,
}

/// Container style: translucent cyan with blue edges.
pub const CONTAINER_STYLE: FaceStyle = FaceStyle {
    face_color: Color::new("cyan", 0, 255, 255),
    edge_color: Color::new("blue", 0, 0, 255),
    alpha: 0.1,
};

const UNIT_EDGE: Color = Color::new("black", 0, 0, 0);
const UNIT_ALPHA: f32 = 0.7;

/// One kit placed in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedUnit {
    /// Box occupied by the unit.
    pub cuboid: Cuboid,
    /// Grid cell `(i, j, k)`.
    pub cell: (usize, usize, usize),
    /// Colour tag.
    pub color: ColorTag,
}

impl PlacedUnit {
    /// Returns the drawing style for this unit.
    pub fn style(&self) -> FaceStyle {
        FaceStyle {
            face_color: self.color.color(),
            edge_color: UNIT_EDGE,
            alpha: UNIT_ALPHA,
        }
    }
}

/// Renderable geometry of a grid layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    container: Cuboid,
    units: Vec<PlacedUnit>,
}

impl Scene {
    /// Builds the scene for a successful fit; `None` for [`FitResult::NoFit`].
    pub fn from_fit(fit: &FitResult, container: &Dimensions3D) -> Option<Self> {
        match fit {
            FitResult::Fits {
                oriented_kit, grid, ..
            } => Some(build_scene(*oriented_kit, *container, *grid)),
            FitResult::NoFit => None,
        }
    }

    /// Returns the container cuboid.
    pub fn container(&self) -> &Cuboid {
        &self.container
    }

    /// Returns the placed units.
    pub fn units(&self) -> &[PlacedUnit] {
        &self.units
    }

    /// Returns the number of placed units.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Total volume of the placed units.
    pub fn packed_volume(&self) -> f64 {
        self.units.iter().map(|u| u.cuboid.volume()).sum()
    }

    /// Bounding box of all placed units, if any.
    pub fn bounds(&self) -> Option<AABB3D<f64>> {
        self.units
            .iter()
            .map(|u| u.cuboid.aabb())
            .reduce(|acc, b| acc.union(&b))
    }

    /// Plot limits per axis, `(0, container extent)`.
    pub fn plot_limits(&self) -> [(f64, f64); 3] {
        let e = self.container.extents();
        [(0.0, e.x), (0.0, e.y), (0.0, e.z)]
    }

    /// Container style.
    pub fn container_style(&self) -> FaceStyle {
        CONTAINER_STYLE
    }
}

/// Lays out `grid` copies of the oriented kit inside the container.
///
/// Unit `(i, j, k)` has its origin at `(i·l, j·a, k·h)` where `(l, a, h)` is
/// `kit_orientation`. The grid is trusted as given; no fit checks are made.
pub fn build_scene(
    kit_orientation: Dimensions3D,
    container: Dimensions3D,
    grid: GridCount,
) -> Scene {
    let extents = *kit_orientation.extents();

    let units = grid
        .cells()
        .map(|(i, j, k)| {
            let origin = Point3::new(
                i as f64 * extents.x,
                j as f64 * extents.y,
                k as f64 * extents.z,
            );
            PlacedUnit {
                cuboid: Cuboid::new(origin, extents),
                cell: (i, j, k),
                color: ColorTag::for_cell(i, j, k),
            }
        })
        .collect();

    Scene {
        container: Cuboid::at_origin(&container),
        units,
    }
}
