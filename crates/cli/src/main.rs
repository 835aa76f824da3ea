//! KitPack command-line front end.

mod api;
mod types;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kitpack_d3::{Config, Dimensions3D, GridPacker, OrientationConstraint};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::api::Outcome;
use crate::types::{SceneResponse, SolveResponse};

#[derive(Parser)]
#[command(name = "kitpack")]
#[command(about = "How many kit boxes fit in a shipping box")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best orientation and report the shipment
    Solve {
        #[command(flatten)]
        input: FitArgs,

        /// Print a JSON response instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Solve, then write the 3D layout
    Scene {
        #[command(flatten)]
        input: FitArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: SceneFormat,
    },

    /// Solve a JSON request file
    RunFile {
        /// Path to the JSON request
        file: PathBuf,

        /// Output file for the response (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FitArgs {
    /// Kit length, width and height (cm)
    #[arg(long, num_args = 3, value_names = ["L", "W", "H"], default_values_t = vec![10.0, 10.0, 10.0])]
    kit: Vec<f64>,

    /// Container length, width and height (cm)
    #[arg(long, num_args = 3, value_names = ["L", "W", "H"], default_values_t = vec![30.0, 30.0, 30.0])]
    container: Vec<f64>,

    /// Kits to ship
    #[arg(short, long, default_value = "10")]
    quantity: usize,

    /// Allowed kit orientations
    #[arg(long, value_enum, default_value = "any")]
    orientation: OrientationArg,

    /// Try every orientation even if the kit as given does not fit
    #[arg(long)]
    no_precheck: bool,
}

impl FitArgs {
    fn kit(&self) -> anyhow::Result<Dimensions3D> {
        dimensions(&self.kit).context("--kit needs three values")
    }

    fn container(&self) -> anyhow::Result<Dimensions3D> {
        dimensions(&self.container).context("--container needs three values")
    }

    fn config(&self) -> Config {
        Config::new()
            .with_orientation(self.orientation.into())
            .with_unrotated_precheck(!self.no_precheck)
    }

    fn compute(&self, with_scene: bool) -> anyhow::Result<(Dimensions3D, Outcome)> {
        let container = self.container()?;
        let packer = GridPacker::new(self.config());
        let outcome =
            Outcome::compute(&packer, self.kit()?, container, self.quantity, with_scene)?;
        Ok((container, outcome))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    /// All six orientations
    Any,
    /// Keep the kit height vertical
    Upright,
    /// Only the kit as given
    Fixed,
}

impl From<OrientationArg> for OrientationConstraint {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Any => OrientationConstraint::Any,
            OrientationArg::Upright => OrientationConstraint::Upright,
            OrientationArg::Fixed => OrientationConstraint::Fixed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SceneFormat {
    /// Cuboids with vertices, faces and colours
    Json,
    /// Wavefront OBJ
    Obj,
}

fn dimensions(values: &[f64]) -> Option<Dimensions3D> {
    match values {
        [l, w, h] => Some(Dimensions3D::new(*l, *w, *h)),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { input, json } => {
            let (container, outcome) = input.compute(false)?;
            if json {
                let response = SolveResponse::from_fit(&outcome.fit, outcome.plan.as_ref());
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_report(&input, &container, &outcome)?;
            }
        }

        Commands::Scene {
            input,
            output,
            format,
        } => {
            let (container, outcome) = input.compute(true)?;
            let Some(scene) = outcome.scene else {
                bail!(
                    "kit {} does not fit in container {}",
                    input.kit()?,
                    container
                );
            };

            let text = match format {
                SceneFormat::Json => serde_json::to_string_pretty(&SceneResponse::from(&scene))?,
                SceneFormat::Obj => scene.to_obj_string(),
            };
            emit(&text, output.as_deref())?;
            tracing::info!(units = scene.unit_count(), "scene written");
        }

        Commands::RunFile { file, output } => {
            let json = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let response = api::solve_json(&json);
            if let Some(error) = &response.error {
                tracing::warn!(file = %file.display(), "request failed: {}", error);
            }
            emit(&serde_json::to_string_pretty(&response)?, output.as_deref())?;
        }
    }

    Ok(())
}

fn print_report(input: &FitArgs, container: &Dimensions3D, outcome: &Outcome) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_report(&mut out, input.quantity, container, outcome)
}

fn write_report<W: Write>(
    out: &mut W,
    quantity: usize,
    container: &Dimensions3D,
    outcome: &Outcome,
) -> io::Result<()> {
    let fit = &outcome.fit;
    let (Some(orientation), Some(oriented), Some(grid), Some(plan)) = (
        fit.orientation(),
        fit.oriented_kit(),
        fit.grid(),
        outcome.plan.as_ref(),
    ) else {
        writeln!(out, "The kit does not fit in the container.")?;
        return Ok(());
    };

    writeln!(out, "Container:            {}", container)?;
    writeln!(out, "Best orientation:     {} ({})", orientation, oriented)?;
    writeln!(out, "Distribution:         {}", grid)?;
    writeln!(out, "Kits per container:   {}", fit.total_units())?;
    writeln!(out, "Kits to ship:         {}", quantity)?;
    writeln!(out, "Containers required:  {}", plan.containers_required)?;
    writeln!(out, "Space used:           {}", plan.utilization_percent())?;
    Ok(())
}

fn emit(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// `log` records from the library crates are forwarded to it.
fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
