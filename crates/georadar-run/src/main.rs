//! Georadar Run - validates an input file and walks its models
//!
//! Reads the directive text, resolves the run configuration, then for each
//! model prints the banner and builds the scene-object list the solver
//! would consume. With `--json` the objects are written to stdout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use georadar_config::{GeneralSettings, ModelConfig, NumericalDispersion, RunArgs, SimulationConfig};
use georadar_directives::{DirectiveTable, SceneObject, parse};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "georadar-run")]
#[command(about = "Validate a georadar input file and resolve its model runs")]
struct Cli {
    /// Path to the input file
    input_file: PathBuf,

    /// Number of models to run
    #[arg(short = 'n', default_value = "1")]
    n: usize,

    /// Output file identifier (defaults to the input file path)
    #[arg(short = 'o', long)]
    output_file: Option<PathBuf>,

    /// Restart a batch from this 1-based model number
    #[arg(long)]
    restart: Option<usize>,

    /// Run only this 1-based job-array task
    #[arg(long)]
    task: Option<usize>,

    /// Distribute models over MPI workers
    #[arg(long)]
    mpi: bool,

    /// MPI workers were started externally
    #[arg(long)]
    mpi_no_spawn: bool,

    /// GPU device ids
    #[arg(long, num_args = 1..)]
    gpu: Vec<usize>,

    /// Only build the geometry
    #[arg(long)]
    geometry_only: bool,

    /// Geometry does not change between models
    #[arg(long)]
    geometry_fixed: bool,

    /// Write the processed input file
    #[arg(long)]
    write_processed: bool,

    /// Model uses subgrids
    #[arg(long)]
    subgrid: bool,

    /// Floating-point precision: single or double
    #[arg(long, default_value = "double")]
    precision: String,

    /// Suppress messages and progress bars
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Print each model's scene objects as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn run_args(&self) -> RunArgs {
        let general = if self.quiet {
            GeneralSettings::default().quiet()
        } else {
            GeneralSettings::default()
        };
        RunArgs {
            n: self.n,
            input_file: Some(self.input_file.clone()),
            output_file: self.output_file.clone(),
            restart: self.restart,
            task: self.task,
            mpi: self.mpi,
            mpi_no_spawn: self.mpi_no_spawn,
            gpu: self.gpu.clone(),
            geometry_only: self.geometry_only,
            geometry_fixed: self.geometry_fixed,
            write_processed: self.write_processed,
            subgrid: self.subgrid,
            precision: self.precision.clone(),
            scenes: Vec::new(),
            general,
            numerical_dispersion: NumericalDispersion::default(),
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "georadar_run=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    info!("Loading input from: {}", cli.input_file.display());
    let table = DirectiveTable::load(&cli.input_file)?;

    for name in table.unrecognized() {
        debug!(command = %name, "not a multi-use directive, skipped");
    }

    let sim = Arc::new(SimulationConfig::resolve(cli.run_args()).context("invalid run arguments")?);

    let host = sim.host();
    info!(
        host = %host.hostname,
        os = %host.os,
        cores = host.physical_cores,
        threads = host.logical_cores,
        memory_gib = host.total_memory >> 30,
        "host"
    );
    info!(
        models = sim.range().len(),
        precision = %sim.precision().label(),
        mode = ?sim.mode(),
        "configuration resolved"
    );

    for model in sim.models() {
        if sim.general().messages {
            print!("{}", model.banner(sim.terminal_width()).green());
        }
        let objects = scene_objects(&model, &table)?;
        let materials = model.materials(&objects);
        info!(
            model = model.number(),
            objects = objects.len(),
            max_poles = materials.max_poles,
            reuse_geometry = model.reuse_geometry(),
            output = %model.output_file_path().display(),
            "scene built"
        );
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&objects)?);
        }
    }

    Ok(())
}

/// Pre-built scene if the run has one, otherwise the parsed directive table.
fn scene_objects(model: &ModelConfig, table: &DirectiveTable) -> anyhow::Result<Vec<SceneObject>> {
    if let Some(scene) = model.scene()? {
        return Ok(scene.objects.clone());
    }
    parse(table).with_context(|| format!("model {}", model.number()))
}
