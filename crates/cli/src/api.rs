//! Request handling shared by the CLI subcommands.

use crate::types::{ConfigRequest, SceneResponse, SolveRequest, SolveResponse, API_VERSION};
use kitpack_d3::{
    Config, Dimensions3D, Error, FitResult, GridPacker, OrientationConstraint, Result, Scene,
    ShipmentPlan,
};

/// Solves a JSON request string. Never fails; errors land in the response.
pub fn solve_json(json_str: &str) -> SolveResponse {
    match serde_json::from_str::<SolveRequest>(json_str) {
        Ok(request) => solve_request(&request),
        Err(e) => SolveResponse::failure(Error::SerializationError(e.to_string()).to_string()),
    }
}

/// Solves a parsed request.
pub fn solve_request(request: &SolveRequest) -> SolveResponse {
    if let Err(e) = check_version(request.version.as_deref()) {
        return SolveResponse::failure(e.to_string());
    }

    let config = match build_config(request.config.as_ref()) {
        Ok(config) => config,
        Err(e) => return SolveResponse::failure(e.to_string()),
    };

    let kit = Dimensions3D::from_array(request.kit);
    let container = Dimensions3D::from_array(request.container);
    let packer = GridPacker::new(config);

    match Outcome::compute(&packer, kit, container, request.quantity, request.include_scene) {
        Ok(outcome) => {
            let mut response = SolveResponse::from_fit(&outcome.fit, outcome.plan.as_ref());
            response.scene = outcome.scene.as_ref().map(SceneResponse::from);
            response
        }
        Err(e) => SolveResponse::failure(e.to_string()),
    }
}

/// Fit, shipment plan and scene for one kit/container pair.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Solver result.
    pub fit: FitResult,
    /// Shipment plan; `None` when nothing fits.
    pub plan: Option<ShipmentPlan>,
    /// Scene; `None` when nothing fits or it was not requested.
    pub scene: Option<Scene>,
}

impl Outcome {
    /// Runs the solver and derives the plan when something fits.
    ///
    /// The scene holds one cuboid per unit, so it is only built when
    /// `with_scene` is set.
    pub fn compute(
        packer: &GridPacker,
        kit: Dimensions3D,
        container: Dimensions3D,
        quantity: usize,
        with_scene: bool,
    ) -> Result<Self> {
        let fit = packer.solve_dimensions(&kit, &container)?;

        let plan = match fit {
            FitResult::Fits { .. } => Some(ShipmentPlan::new(&fit, &container, quantity)?),
            FitResult::NoFit => None,
        };
        let scene = if with_scene {
            Scene::from_fit(&fit, &container)
        } else {
            None
        };

        Ok(Self { fit, plan, scene })
    }
}

/// Accepts requests without a version or with the same `major.minor` as
/// this build.
pub fn check_version(version: Option<&str>) -> Result<()> {
    let Some(version) = version else {
        return Ok(());
    };
    fn major_minor(v: &str) -> Vec<&str> {
        v.split('.').take(2).collect()
    }
    if major_minor(version) == major_minor(API_VERSION) {
        Ok(())
    } else {
        Err(Error::ConfigError(format!(
            "unsupported request version {} (expected {})",
            version, API_VERSION
        )))
    }
}

/// Builds solver configuration from an optional request.
pub fn build_config(request: Option<&ConfigRequest>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(req) = request {
        if let Some(orientation) = &req.orientation {
            config.orientation = orientation.parse::<OrientationConstraint>()?;
        }
        if let Some(precheck) = req.unrotated_precheck {
            config.unrotated_precheck = precheck;
        }
    }

    Ok(config)
}
