mod scenario;

use anyhow::Context;
use clap::{Parser, Subcommand};
use freelook_camera::CameraState;
use freelook_render::{DebugTextRenderer, RenderView, Renderer, SpinningCube, Viewport};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "freelook-cli", about = "Headless free-look camera tools")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Replay a YAML input script and print the final frame
    Replay {
        /// Script file
        #[arg(short, long)]
        script: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Viewport width for the projection
        #[arg(long, default_value = "800")]
        width: u32,
        /// Viewport height for the projection
        #[arg(long, default_value = "600")]
        height: u32,
        /// Cube spin time in seconds
        #[arg(long, default_value = "0")]
        time: f32,
    },
    /// Run the reference camera scenario and report each check
    Scenario {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ReplayReport {
    steps: usize,
    camera: CameraState,
    view: RenderView,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("freelook-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("camera: {}", freelook_camera::crate_info());
            println!("input: {}", freelook_input::crate_info());
            println!("render: {}", freelook_render::crate_info());
            println!("assets: {}", freelook_assets::crate_info());
        }
        Commands::Replay {
            script,
            json,
            width,
            height,
            time,
        } => {
            let loaded = freelook_input::load_script(&script)
                .with_context(|| format!("failed to load script {}", script.display()))?;
            let camera = loaded.run();
            let view = RenderView::from_camera(&camera, Viewport::new(width, height))?;
            tracing::info!("replayed {} steps from {}", loaded.steps.len(), script.display());

            if json {
                let report = ReplayReport {
                    steps: loaded.steps.len(),
                    camera: *camera.state(),
                    view,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let model = SpinningCube::default().model_matrix(time);
                print!("{}", DebugTextRenderer::new().render(&view, model));
            }
        }
        Commands::Scenario { json } => {
            let checks = scenario::run_scenario();
            let failed = checks.iter().filter(|c| !c.passed()).count();

            if json {
                println!("{}", serde_json::to_string_pretty(&checks)?);
            } else {
                for check in &checks {
                    println!(
                        "{:<24} expected={:?} actual={:?} {}",
                        check.name,
                        check.expected,
                        check.actual,
                        if check.passed() { "OK" } else { "MISMATCH" }
                    );
                }
            }

            if failed > 0 {
                anyhow::bail!("{failed} of {} checks failed", checks.len());
            }
        }
    }

    Ok(())
}
