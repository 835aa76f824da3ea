//! Orientation search and uniform grid fitting.

use crate::boundary::Container3D;
use crate::geometry::Kit3D;
use kitpack_core::geometry::{Dimensions3D, GridCount, Orientation};
use kitpack_core::solver::{Config, Solver};
use kitpack_core::{Error, FitResult, Result};

/// Fits a uniform grid of one kit orientation into a container.
#[derive(Debug, Clone, Default)]
pub struct GridPacker {
    config: Config,
}

impl GridPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Solves for raw dimension triples using this packer's configuration.
    pub fn solve_dimensions(
        &self,
        kit: &Dimensions3D,
        container: &Dimensions3D,
    ) -> Result<FitResult> {
        kit.validate()?;
        container.check_positive().map_err(Error::InvalidBoundary)?;

        self.best_fit(kit, container, self.config.orientations())
    }

    /// Core search over `orientations`. Inputs must already be validated.
    ///
    /// Fails with [`Error::CapacityOverflow`] when a fitting grid holds more
    /// units than `usize` can count.
    fn best_fit(
        &self,
        kit: &Dimensions3D,
        container: &Dimensions3D,
        orientations: &[Orientation],
    ) -> Result<FitResult> {
        if self.config.unrotated_precheck && !kit.fits_within(container) {
            log::debug!(
                "kit {} exceeds container {} unrotated on {:?}; skipping rotations",
                kit,
                container,
                kit.exceeding_axes(container)
            );
            return Ok(FitResult::NoFit);
        }

        if orientations.is_empty() {
            log::warn!("no orientations allowed; nothing can be placed");
            return Ok(FitResult::NoFit);
        }

        let mut best = FitResult::NoFit;

        for &orientation in orientations {
            let oriented = orientation.apply(kit);
            if !oriented.fits_within(container) {
                continue;
            }

            let grid = GridCount::fit(container, &oriented);
            let units = grid
                .checked_total()
                .ok_or_else(|| Error::CapacityOverflow(grid.to_string()))?;
            log::trace!("orientation {} -> grid {} ({} units)", orientation, grid, units);

            // Strictly greater: the earliest orientation wins ties.
            if units > best.total_units() {
                best = FitResult::from_grid(orientation, oriented, grid);
            }
        }

        match &best {
            FitResult::Fits {
                total_units,
                orientation,
                grid,
                ..
            } => log::debug!(
                "best orientation {} with grid {} ({} units)",
                orientation,
                grid,
                total_units
            ),
            FitResult::NoFit => log::debug!("no orientation of {} fits {}", kit, container),
        }

        Ok(best)
    }
}

impl Solver for GridPacker {
    type Item = Kit3D;
    type Container = Container3D;

    fn solve(&self, kit: &Kit3D, container: &Container3D) -> Result<FitResult> {
        kit.validate()?;
        container.validate()?;

        // A per-kit constraint narrows the configured set, never widens it.
        let orientations: Vec<Orientation> = self
            .config
            .orientations()
            .iter()
            .copied()
            .filter(|o| kit.orientation_constraint().permits(*o))
            .collect();

        self.best_fit(kit.dimensions(), container.dimensions(), &orientations)
    }
}

/// Finds how many kits fit in the container, trying all six orientations.
///
/// Returns an error only when a dimension is not a finite positive number.
/// An infeasible fit is `Ok(FitResult::NoFit)`.
pub fn solve(kit: Dimensions3D, container: Dimensions3D) -> Result<FitResult> {
    GridPacker::default_config().solve_dimensions(&kit, &container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitpack_core::geometry::OrientationConstraint;

    fn dims(l: f64, w: f64, h: f64) -> Dimensions3D {
        Dimensions3D::new(l, w, h)
    }

    #[test]
    fn test_exact_cube_fit() {
        let result = solve(dims(10.0, 10.0, 10.0), dims(30.0, 30.0, 30.0)).unwrap();
        assert_eq!(result.total_units(), 27);
        assert_eq!(result.grid(), Some(GridCount::new(3, 3, 3)));
    }

    #[test]
    fn test_leftover_space_floors() {
        let result = solve(dims(10.0, 10.0, 10.0), dims(35.0, 35.0, 35.0)).unwrap();
        assert_eq!(result.total_units(), 27);
    }

    #[test]
    fn test_oversized_kit_no_fit() {
        let result = solve(dims(40.0, 5.0, 5.0), dims(30.0, 30.0, 30.0)).unwrap();
        assert_eq!(result, FitResult::NoFit);
        assert!(result.orientation().is_none());
    }

    #[test]
    fn test_ties_keep_first_orientation() {
        let result = solve(dims(10.0, 10.0, 10.0), dims(30.0, 30.0, 30.0)).unwrap();
        assert_eq!(result.orientation(), Some(Orientation::Lwh));
    }

    #[test]
    fn test_rotation_improves_count() {
        // As given: 1 × 4 × 10 = 40. Turned (W×L×H): 3 × 2 × 10 = 60.
        let kit = dims(20.0, 10.0, 5.0);
        let container = dims(30.0, 40.0, 50.0);
        let result = solve(kit, container).unwrap();

        let brute_force = Orientation::ALL
            .iter()
            .map(|o| o.apply(&kit))
            .filter(|d| d.fits_within(&container))
            .map(|d| GridCount::fit(&container, &d).total())
            .max()
            .unwrap();

        assert_eq!(result.total_units(), brute_force);
        assert!(result.total_units() > GridCount::fit(&container, &kit).total());
        let oriented = result.oriented_kit().unwrap();
        assert!(oriented.fits_within(&container));
    }

    #[test]
    fn test_unrotated_precheck_is_kept() {
        // Fits rotated (40 along the 50 axis) but not as given.
        let kit = dims(40.0, 5.0, 5.0);
        let container = dims(10.0, 10.0, 50.0);

        assert_eq!(solve(kit, container).unwrap(), FitResult::NoFit);

        let packer = GridPacker::new(Config::default().with_unrotated_precheck(false));
        let result = packer.solve_dimensions(&kit, &container).unwrap();
        assert_eq!(result.total_units(), 4);
        assert_eq!(result.orientation(), Some(Orientation::Hwl));
    }

    #[test]
    fn test_fixed_constraint() {
        let kit = dims(10.0, 20.0, 5.0);
        let container = dims(20.0, 20.0, 20.0);
        let packer =
            GridPacker::new(Config::default().with_orientation(OrientationConstraint::Fixed));
        let result = packer.solve_dimensions(&kit, &container).unwrap();
        assert_eq!(result.orientation(), Some(Orientation::Lwh));
        assert_eq!(result.total_units(), 8);
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        assert!(matches!(
            solve(dims(0.0, 1.0, 1.0), dims(10.0, 10.0, 10.0)),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            solve(dims(1.0, 1.0, 1.0), dims(10.0, f64::NAN, 10.0)),
            Err(Error::InvalidBoundary(_))
        ));
    }

    #[test]
    fn test_uncountable_grid_is_an_error() {
        // 1e7 units per axis: 1e21 in total, beyond usize.
        let result = solve(dims(0.01, 0.01, 0.01), dims(1e5, 1e5, 1e5));
        assert!(matches!(result, Err(Error::CapacityOverflow(_))));

        let kit = Kit3D::new("grain", 0.01, 0.01, 0.01);
        let container = Container3D::new(1e5, 1e5, 1e5);
        assert!(matches!(
            GridPacker::default_config().solve(&kit, &container),
            Err(Error::CapacityOverflow(_))
        ));
    }

    #[test]
    fn test_large_countable_grid() {
        let result = solve(dims(1.0, 1.0, 1.0), dims(1000.0, 1000.0, 1000.0)).unwrap();
        assert_eq!(result.total_units(), 1_000_000_000);
    }

    #[test]
    fn test_solver_trait_respects_kit_constraint() {
        let kit =
            Kit3D::new("K1", 10.0, 10.0, 30.0).with_orientation(OrientationConstraint::Upright);
        let container = Container3D::new(30.0, 30.0, 30.0);

        let result = GridPacker::default_config().solve(&kit, &container).unwrap();
        assert_eq!(result.total_units(), 9);
        assert!(OrientationConstraint::Upright.permits(result.orientation().unwrap()));
    }

    #[test]
    fn test_solver_trait_validates() {
        let kit = Kit3D::new("K1", 10.0, 10.0, 10.0).with_quantity(0);
        let container = Container3D::new(30.0, 30.0, 30.0);
        assert!(GridPacker::default_config().solve(&kit, &container).is_err());
    }
}
