//! Fit results and shipment plans.

use crate::geometry::{Dimensions3D, GridCount, Orientation};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of fitting a kit into a container.
///
/// `NoFit` carries nothing, so an orientation or grid can only be read when
/// at least one unit fits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum FitResult {
    /// At least one unit fits.
    Fits {
        /// Product of the grid counts. Always at least 1.
        total_units: usize,
        /// The winning orientation.
        orientation: Orientation,
        /// Kit dimensions after applying `orientation`.
        oriented_kit: Dimensions3D,
        /// Units along each container axis.
        grid: GridCount,
    },
    /// No orientation fits.
    NoFit,
}

impl FitResult {
    /// Builds a result from a grid, returning `NoFit` when the grid is empty.
    ///
    /// The unit count saturates; use [`GridCount::checked_total`] first when
    /// the grid may be too large to count.
    pub fn from_grid(
        orientation: Orientation,
        oriented_kit: Dimensions3D,
        grid: GridCount,
    ) -> Self {
        let total_units = grid.total();
        if total_units == 0 {
            return FitResult::NoFit;
        }
        FitResult::Fits {
            total_units,
            orientation,
            oriented_kit,
            grid,
        }
    }

    /// Units per container; 0 when nothing fits.
    pub fn total_units(&self) -> usize {
        match self {
            FitResult::Fits { total_units, .. } => *total_units,
            FitResult::NoFit => 0,
        }
    }

    /// Returns true if at least one unit fits.
    pub fn is_fit(&self) -> bool {
        matches!(self, FitResult::Fits { .. })
    }

    /// Returns the winning orientation.
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            FitResult::Fits { orientation, .. } => Some(*orientation),
            FitResult::NoFit => None,
        }
    }

    /// Returns the oriented kit dimensions.
    pub fn oriented_kit(&self) -> Option<Dimensions3D> {
        match self {
            FitResult::Fits { oriented_kit, .. } => Some(*oriented_kit),
            FitResult::NoFit => None,
        }
    }

    /// Returns the grid distribution.
    pub fn grid(&self) -> Option<GridCount> {
        match self {
            FitResult::Fits { grid, .. } => Some(*grid),
            FitResult::NoFit => None,
        }
    }

    /// Volume occupied by the packed units.
    pub fn packed_volume(&self) -> f64 {
        match self {
            FitResult::Fits {
                total_units,
                oriented_kit,
                ..
            } => *total_units as f64 * oriented_kit.volume(),
            FitResult::NoFit => 0.0,
        }
    }
}

/// How many containers a shipment of kits needs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipmentPlan {
    /// Kits to ship.
    pub quantity: usize,
    /// Kits per container.
    pub units_per_container: usize,
    /// Containers needed for `quantity` kits.
    pub containers_required: usize,
    /// Fraction of a container's volume filled by kits (0.0 - 1.0).
    pub utilization: f64,
}

impl ShipmentPlan {
    /// Plans a shipment of `quantity` kits from a successful fit.
    pub fn new(fit: &FitResult, container: &Dimensions3D, quantity: usize) -> Result<Self> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity(quantity));
        }
        container.check_positive().map_err(Error::InvalidBoundary)?;

        let units_per_container = match fit {
            FitResult::Fits { total_units, .. } => *total_units,
            FitResult::NoFit => return Err(Error::NoFit),
        };

        Ok(Self {
            quantity,
            units_per_container,
            containers_required: quantity.div_ceil(units_per_container),
            utilization: fit.packed_volume() / container.volume(),
        })
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Kits that fit in the containers beyond the requested quantity.
    ///
    /// `None` when the combined capacity of the containers overflows `usize`.
    pub fn spare_capacity(&self) -> Option<usize> {
        self.containers_required
            .checked_mul(self.units_per_container)
            .map(|capacity| capacity - self.quantity)
    }
}
