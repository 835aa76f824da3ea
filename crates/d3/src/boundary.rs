//! Container (packaging box) types.

use kitpack_core::geometry::Dimensions3D;
use kitpack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The packaging box kits are packed into.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container3D {
    /// Dimensions (length, width, height).
    dimensions: Dimensions3D,
}

impl Container3D {
    /// Creates a new container with the given dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self::from_dimensions(Dimensions3D::new(length, width, height))
    }

    /// Creates a container from a dimension triple.
    pub fn from_dimensions(dimensions: Dimensions3D) -> Self {
        Self { dimensions }
    }

    /// Returns the dimensions.
    pub fn dimensions(&self) -> &Dimensions3D {
        &self.dimensions
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Validates that all dimensions are finite and positive.
    pub fn validate(&self) -> Result<()> {
        self.dimensions
            .check_positive()
            .map_err(|msg| Error::InvalidBoundary(format!("container: {}", msg)))
    }
}
