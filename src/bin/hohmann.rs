use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hohmann_sim::export::{summary as export_summary, trajectory as export_trajectory};
use hohmann_sim::{Simulation, init_logging, resolve_config};
use tracing::info;

/// Sample the Hohmann transfer scenario and export the trajectory.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hohmann transfer kinematics (circular two-body approximation)"
)]
struct Cli {
    /// Scenario file (TOML or YAML); defaults to Earth -> Mars
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of time samples
    #[arg(long)]
    samples: Option<usize>,

    /// Override the outer body's phase lead at departure (degrees)
    #[arg(long, allow_hyphen_values = true)]
    phase_offset_deg: Option<f64>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/trajectory.csv")]
    output: PathBuf,

    /// Optional JSON summary sidecar
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(phase) = cli.phase_offset_deg {
        config.phase_offset_deg = phase;
    }

    let sim = Simulation::new(&config)?;
    let summary = sim.summary();

    let rows = export_trajectory::rows(&sim);
    let writer = export_trajectory::writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    export_trajectory::write_csv(writer, &rows)?;
    info!(rows = rows.len(), output = %cli.output.display(), "wrote trajectory");

    if let Some(path) = &cli.summary {
        export_summary::write_summary(path, &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(output = %path.display(), "wrote summary");
    }

    // Keep stdout clean for piping when the CSV goes there.
    if cli.output.as_os_str() == "-" {
        return Ok(());
    }

    println!(
        "=== {} -> {} Transfer ===",
        summary.inner_body, summary.outer_body
    );
    println!(
        "Periods          : {:.2} d / {:.2} d",
        summary.inner_period_days, summary.outer_period_days
    );
    println!("Semi-major axis  : {:.4e} m", summary.semi_major_axis_m);
    println!(
        "Phase offset     : {:.2} deg (ideal {:.2} deg)",
        summary.phase_offset_deg, summary.ideal_phase_angle_deg
    );
    println!(
        "Intercept        : sample {} of {} at day {:.1}",
        summary.intercept_index, summary.samples, summary.intercept_time_days
    );
    println!("Closest approach : {:.3e} m", summary.closest_approach_m);
    println!(
        "Hohmann estimate : Δv = {:.3} km/s, TOF = {:.1} d",
        summary.hohmann_dv_total_m_s / 1_000.0,
        summary.hohmann_tof_days
    );
    Ok(())
}
