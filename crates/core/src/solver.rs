//! Solver traits and configuration.

use crate::geometry::{Orientation, OrientationConstraint};
use crate::result::FitResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for solvers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Orientations the kit may be placed in.
    pub orientation: OrientationConstraint,

    /// Reject immediately when the unrotated kit exceeds the unrotated
    /// container on any axis, without trying rotations.
    ///
    /// Enabled by default. Disabling it lets a kit that only fits rotated
    /// (e.g. 40×5×5 in 10×10×50) be found.
    pub unrotated_precheck: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: OrientationConstraint::default(),
            unrotated_precheck: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation constraint.
    pub fn with_orientation(mut self, constraint: OrientationConstraint) -> Self {
        self.orientation = constraint;
        self
    }

    /// Enables or disables the unrotated pre-check.
    pub fn with_unrotated_precheck(mut self, enabled: bool) -> Self {
        self.unrotated_precheck = enabled;
        self
    }

    /// Orientations the solver will try, in enumeration order.
    pub fn orientations(&self) -> &'static [Orientation] {
        self.orientation.allowed()
    }
}

/// Trait for kit-in-container solvers.
pub trait Solver {
    /// The kit type this solver handles.
    type Item;
    /// The container type this solver handles.
    type Container;

    /// Finds the best uniform grid of `item` inside `container`.
    fn solve(&self, item: &Self::Item, container: &Self::Container) -> Result<FitResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.orientation, OrientationConstraint::Any);
        assert!(config.unrotated_precheck);
        assert_eq!(config.orientations().len(), 6);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_orientation(OrientationConstraint::Upright)
            .with_unrotated_precheck(false);
        assert_eq!(config.orientations().len(), 2);
        assert!(!config.unrotated_precheck);
    }
}
