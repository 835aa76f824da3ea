//! Kit geometry.

use kitpack_core::geometry::{Dimensions3D, Orientation, OrientationConstraint};
use kitpack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular kit box to be packed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kit3D {
    /// Identifier used in logs and exports.
    id: String,

    /// Dimensions (length, width, height).
    dimensions: Dimensions3D,

    /// Number of kits to ship.
    quantity: usize,

    /// Orientation constraint.
    orientation: OrientationConstraint,
}

impl Kit3D {
    /// Creates a new kit with the given ID and dimensions.
    pub fn new(id: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self::from_dimensions(id, Dimensions3D::new(length, width, height))
    }

    /// Creates a new kit from a dimension triple.
    pub fn from_dimensions(id: impl Into<String>, dimensions: Dimensions3D) -> Self {
        Self {
            id: id.into(),
            dimensions,
            quantity: 1,
            orientation: OrientationConstraint::default(),
        }
    }

    /// Sets the quantity to ship.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Restricts which of the six orientations the solver may try.
    pub fn with_orientation(mut self, constraint: OrientationConstraint) -> Self {
        self.orientation = constraint;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the dimensions.
    pub fn dimensions(&self) -> &Dimensions3D {
        &self.dimensions
    }

    /// Returns the quantity to ship.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn orientation_constraint(&self) -> OrientationConstraint {
        self.orientation
    }

    /// Orientations permitted for this kit, in tie-break order.
    pub fn allowed_orientations(&self) -> &'static [Orientation] {
        self.orientation.allowed()
    }

    /// Returns dimensions for a given orientation.
    pub fn dimensions_for_orientation(&self, orientation: Orientation) -> Dimensions3D {
        orientation.apply(&self.dimensions)
    }

    /// Returns the volume of one kit.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Validates dimensions and quantity.
    pub fn validate(&self) -> Result<()> {
        self.dimensions.check_positive().map_err(|msg| {
            Error::InvalidGeometry(format!("kit '{}': {}", self.id, msg))
        })?;

        if self.quantity == 0 {
            return Err(Error::InvalidQuantity(self.quantity));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kit_volume() {
        let kit = Kit3D::new("K1", 10.0, 20.0, 30.0);
        assert_relative_eq!(kit.volume(), 6000.0, epsilon = 0.001);
    }

    #[test]
    fn test_orientations() {
        let kit = Kit3D::new("K1", 10.0, 20.0, 30.0);
        assert_eq!(kit.allowed_orientations().len(), 6);

        let upright = kit.clone().with_orientation(OrientationConstraint::Upright);
        assert_eq!(upright.allowed_orientations().len(), 2);

        let fixed = kit.clone().with_orientation(OrientationConstraint::Fixed);
        assert_eq!(fixed.allowed_orientations(), &[Orientation::Lwh]);

        let d = kit.dimensions_for_orientation(Orientation::Hwl);
        assert_eq!(d.as_array(), [30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_validation() {
        assert!(Kit3D::new("K1", 10.0, 20.0, 30.0).validate().is_ok());

        let err = Kit3D::new("K2", -10.0, 20.0, 30.0).validate().unwrap_err();
        assert!(err.to_string().contains("K2"));

        let zero_qty = Kit3D::new("K3", 10.0, 20.0, 30.0).with_quantity(0);
        assert!(matches!(
            zero_qty.validate(),
            Err(Error::InvalidQuantity(0))
        ));
    }
}
