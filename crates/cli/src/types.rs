//! JSON request and response types.

use kitpack_d3::scene::{Cuboid, FaceStyle, AXIS_LABELS, FACE_INDICES, FACE_NAMES};
use kitpack_d3::{FitResult, Scene, ShipmentPlan};
use serde::{Deserialize, Serialize};

/// API version from Cargo.toml.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request to fit a kit into a container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Kit dimensions [length, width, height].
    pub kit: [f64; 3],

    /// Container dimensions [length, width, height].
    pub container: [f64; 3],

    /// Kits to ship.
    #[serde(default = "default_quantity")]
    pub quantity: usize,

    /// Include the scene geometry in the response.
    #[serde(default)]
    pub include_scene: bool,

    /// Configuration.
    #[serde(default)]
    pub config: Option<ConfigRequest>,
}

/// Configuration request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigRequest {
    /// Orientation constraint: "any", "upright" or "fixed".
    pub orientation: Option<String>,

    /// Reject early when the unrotated kit does not fit.
    pub unrotated_precheck: Option<bool>,
}

/// Response for solve operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    /// API version.
    pub version: String,

    /// Whether the operation succeeded.
    pub success: bool,

    /// Error message if failed.
    pub error: Option<String>,

    /// Kits per container (0 when nothing fits).
    pub units_per_container: usize,

    /// Winning orientation label, e.g. "W×L×H".
    pub orientation: Option<String>,

    /// Oriented kit dimensions.
    pub oriented_kit: Option<[f64; 3]>,

    /// Units along [length, width, height].
    pub grid: Option<[usize; 3]>,

    /// Containers needed for the requested quantity.
    pub containers_required: Option<usize>,

    /// Utilization ratio (0.0 - 1.0).
    pub utilization: Option<f64>,

    /// Scene geometry, when requested and something fits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneResponse>,
}

impl SolveResponse {
    /// A failed response carrying only an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(message.into()),
            units_per_container: 0,
            orientation: None,
            oriented_kit: None,
            grid: None,
            containers_required: None,
            utilization: None,
            scene: None,
        }
    }

    /// A successful response for `fit`, with the plan when one could be made.
    pub fn from_fit(fit: &FitResult, plan: Option<&ShipmentPlan>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: true,
            error: None,
            units_per_container: fit.total_units(),
            orientation: fit.orientation().map(|o| o.to_string()),
            oriented_kit: fit.oriented_kit().map(|d| d.as_array()),
            grid: fit.grid().map(|g| g.as_array()),
            containers_required: plan.map(|p| p.containers_required),
            utilization: plan.map(|p| p.utilization),
            scene: None,
        }
    }
}

/// Scene geometry for renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneResponse {
    /// Axis labels.
    pub axis_labels: [String; 3],

    /// Names of the quads in each cuboid's `faces`, in the same order.
    pub face_names: [String; 6],

    /// Plot limits per axis.
    pub limits: [[f64; 2]; 3],

    /// The container.
    pub container: CuboidResponse,

    /// Placed units.
    pub units: Vec<CuboidResponse>,
}

/// One cuboid with derived vertices and faces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuboidResponse {
    /// Object name.
    pub name: String,

    /// Minimum corner.
    pub origin: [f64; 3],

    /// Extents.
    pub extents: [f64; 3],

    /// Eight corner vertices.
    pub vertices: Vec<[f64; 3]>,

    /// Six quad faces as vertex indices.
    pub faces: Vec<[usize; 4]>,

    /// Fill colour as `#rrggbb`.
    pub face_color: String,

    /// Edge colour as `#rrggbb`.
    pub edge_color: String,

    /// Fill opacity.
    pub alpha: f32,
}

impl CuboidResponse {
    fn new(name: String, cuboid: &Cuboid, style: FaceStyle) -> Self {
        let origin = cuboid.origin();
        let extents = cuboid.extents();
        Self {
            name,
            origin: [origin.x, origin.y, origin.z],
            extents: [extents.x, extents.y, extents.z],
            vertices: cuboid.vertices().iter().map(|v| [v.x, v.y, v.z]).collect(),
            faces: FACE_INDICES.to_vec(),
            face_color: style.face_color.hex(),
            edge_color: style.edge_color.hex(),
            alpha: style.alpha,
        }
    }
}

impl From<&Scene> for SceneResponse {
    fn from(scene: &Scene) -> Self {
        let limits = scene.plot_limits().map(|(lo, hi)| [lo, hi]);
        Self {
            axis_labels: AXIS_LABELS.map(String::from),
            face_names: FACE_NAMES.map(String::from),
            limits,
            container: CuboidResponse::new(
                "container".to_string(),
                scene.container(),
                scene.container_style(),
            ),
            units: scene
                .units()
                .iter()
                .map(|u| {
                    let (i, j, k) = u.cell;
                    CuboidResponse::new(format!("unit_{}_{}_{}", i, j, k), &u.cuboid, u.style())
                })
                .collect(),
        }
    }
}

fn default_quantity() -> usize {
    1
}
