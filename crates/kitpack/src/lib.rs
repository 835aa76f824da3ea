//! # KitPack
//!
//! Works out how many identical kit boxes fit inside a shipping box and
//! produces the 3D layout for display.
//!
//! This crate provides:
//! - **Orientation search**: the best of the six axis-aligned kit orientations
//! - **Grid fitting**: whole units per container axis by floor division
//! - **Scene geometry**: 8-vertex cuboids with quad faces for each placed kit
//!
//! ## Quick Start
//!
//! ```rust
//! use kitpack::{build_scene, solve, Dimensions3D, ShipmentPlan};
//!
//! let kit = Dimensions3D::new(10.0, 10.0, 10.0);
//! let container = Dimensions3D::new(30.0, 30.0, 30.0);
//!
//! let fit = solve(kit, container)?;
//! let plan = ShipmentPlan::new(&fit, &container, 100)?;
//! assert_eq!(plan.containers_required, 4);
//!
//! if let (Some(oriented), Some(grid)) = (fit.oriented_kit(), fit.grid()) {
//!     let scene = build_scene(oriented, container, grid);
//!     assert_eq!(scene.unit_count(), 27);
//! }
//! # Ok::<(), kitpack::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and abstractions.
pub use kitpack_core as core;

/// Orientation search and scene generation.
pub use kitpack_d3 as d3;

// Re-export commonly used types at root level
pub use kitpack_core::{
    Config, Dimensions3D, Error, FitResult, GridCount, Orientation, OrientationConstraint,
    Result, ShipmentPlan, Solver,
};
pub use kitpack_d3::{build_scene, solve, Container3D, GridPacker, Kit3D, Scene};
