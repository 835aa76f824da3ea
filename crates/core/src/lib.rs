//! # KitPack Core
//!
//! Core types shared by the KitPack crates.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Dimensions3D`], the six-way [`Orientation`] enumeration and [`GridCount`]
//! - **Results**: [`FitResult`] and [`ShipmentPlan`]
//! - **Solver trait**: [`Solver`] with its [`Config`]
//! - **Bounding boxes**: [`AABB3D`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod bounds;
pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;

// Re-exports
pub use bounds::AABB3D;
pub use error::{Error, Result};
pub use geometry::{Dimensions3D, GridCount, Orientation, OrientationConstraint};
pub use result::{FitResult, ShipmentPlan};
pub use solver::{Config, Solver};
