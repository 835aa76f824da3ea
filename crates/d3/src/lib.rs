//! # KitPack 3D
//!
//! Orientation search and grid layout for packing identical kit boxes into a
//! shipping box.
//!
//! The [`packer`] tries the six axis-aligned orientations of a kit and keeps
//! the one that fits the most whole units; [`scene`] turns the winning grid
//! into cuboids for an external renderer; [`export`] writes those cuboids as
//! GPU buffers or OBJ text.
//!
//! ```
//! use kitpack_d3::{build_scene, solve, Dimensions3D};
//!
//! let kit = Dimensions3D::new(10.0, 10.0, 10.0);
//! let container = Dimensions3D::new(30.0, 30.0, 30.0);
//!
//! let fit = solve(kit, container).unwrap();
//! assert_eq!(fit.total_units(), 27);
//!
//! let scene = build_scene(fit.oriented_kit().unwrap(), container, fit.grid().unwrap());
//! assert_eq!(scene.unit_count(), 27);
//! ```

pub mod boundary;
pub mod export;
pub mod geometry;
pub mod packer;
pub mod scene;

// Re-exports
pub use boundary::Container3D;
pub use export::{MeshBuffers, Obj};
pub use geometry::Kit3D;
pub use kitpack_core::{
    Config, Dimensions3D, Error, FitResult, GridCount, Orientation, OrientationConstraint,
    Result, ShipmentPlan, Solver,
};
pub use packer::{solve, GridPacker};
pub use scene::{build_scene, ColorTag, Cuboid, PlacedUnit, Scene};
