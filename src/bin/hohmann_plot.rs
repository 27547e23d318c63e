use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hohmann_sim::primitives::vector::Vector2;
use hohmann_sim::transfer::Telemetry;
use hohmann_sim::{BodyId, Simulation, init_logging, resolve_config};
use plotters::prelude::*;
use tracing::{debug, info};

/// Render the transfer animation and the angle/distance plots.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render Hohmann transfer animation (GIF) and telemetry plots (PNG)"
)]
struct Cli {
    /// Scenario file (TOML or YAML); defaults to Earth -> Mars
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "artifacts")]
    output_dir: PathBuf,

    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Edge length of the square animation frames in pixels
    #[arg(long, default_value_t = 700)]
    frame_size: u32,

    /// Render every n-th sample as an animation frame
    #[arg(long, default_value_t = 1)]
    stride: usize,

    #[arg(long, default_value_t = 20)]
    frame_delay_ms: u32,

    /// Skip the GIF and only render the telemetry plots
    #[arg(long, default_value_t = false)]
    no_animation: bool,

    /// Trajectory used for the angle plot
    #[arg(long, value_enum, default_value_t = AngleSource::Rocket)]
    angle_source: AngleSource,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum AngleSource {
    /// Rocket path: transfer arc, then locked to the destination
    Rocket,
    /// Uncut transfer arc for every sample
    Arc,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;
    let sim = Simulation::new(&config)?;

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;

    let telemetry = sim.telemetry_series();
    let inner_name = &config.inner.name;

    let angle_path = cli.output_dir.join("angle.png");
    let (angle_series, angle_caption) = match cli.angle_source {
        AngleSource::Rocket => (
            telemetry.clone(),
            format!("Angle between Rocket and {inner_name} over Time"),
        ),
        AngleSource::Arc => (
            sim.arc_telemetry_series(),
            format!("Angle between Transfer Arc and {inner_name} over Time"),
        ),
    };
    let angle_points: Vec<(f64, f64)> = angle_series
        .iter()
        .map(|t| (t.time_days(), t.bearing_deg))
        .collect();
    line_plot(
        &angle_path,
        (cli.width, cli.height),
        &angle_caption,
        "Angle (degrees)",
        &angle_points,
        &BLUE,
    )?;
    info!(output = %angle_path.display(), source = ?cli.angle_source, "rendered angle plot");

    let distance_path = cli.output_dir.join("distance.png");
    let distance_points: Vec<(f64, f64)> = telemetry
        .iter()
        .map(|t| (t.time_days(), t.distance_m))
        .collect();
    line_plot(
        &distance_path,
        (cli.width, cli.height),
        &format!("Distance Between Rocket and {inner_name} Over Time"),
        "Distance (m)",
        &distance_points,
        &RED,
    )?;
    info!(output = %distance_path.display(), "rendered distance plot");

    if !cli.no_animation {
        let gif_path = cli.output_dir.join("transfer.gif");
        animate(
            &sim,
            &telemetry,
            &gif_path,
            cli.frame_size,
            cli.stride.max(1),
            cli.frame_delay_ms,
        )?;
        info!(output = %gif_path.display(), "rendered animation");
    }

    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if (max - min).abs() < f64::EPSILON {
        min.abs().max(1.0) * 0.05
    } else {
        (max - min) * 0.05
    };
    (min - pad, max + pad)
}

fn line_plot(
    path: &Path,
    size: (u32, u32),
    title: &str,
    y_desc: &str,
    points: &[(f64, f64)],
    color: &RGBColor,
) -> anyhow::Result<()> {
    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = padded_range(points.iter().map(|p| p.0));
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, caption_font)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (days)")
        .y_desc(y_desc)
        .label_style(label_font.clone())
        .axis_desc_style(label_font)
        .y_label_formatter(&|v| {
            if v.abs() >= 1.0e5 {
                format!("{v:.2e}")
            } else {
                format!("{v:.1}")
            }
        })
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), color))?;

    root.present()?;
    Ok(())
}

fn circle_points(radius: f64) -> Vec<(f64, f64)> {
    (0..=360)
        .map(|deg| {
            let theta = (deg as f64).to_radians();
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

fn xy(p: Vector2) -> (f64, f64) {
    (p[0], p[1])
}

fn animate(
    sim: &Simulation,
    telemetry: &[Telemetry],
    path: &Path,
    frame_size: u32,
    stride: usize,
    frame_delay_ms: u32,
) -> anyhow::Result<()> {
    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 22.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 14.0, FontStyle::Normal);

    let config = sim.config();
    let r_inner = sim.inner_orbit().radius_m();
    let r_outer = sim.outer_orbit().radius_m();
    let limit = r_outer * 1.1;
    let inner_orbit = circle_points(r_inner);
    let outer_orbit = circle_points(r_outer);
    let title = format!(
        "Simulation of Rocket from {} to {}",
        config.inner.name, config.outer.name
    );

    let root =
        BitMapBackend::gif(path, (frame_size, frame_size), frame_delay_ms)?.into_drawing_area();

    for frame in telemetry.iter().step_by(stride) {
        let i = frame.sample_index;
        let (Some(inner), Some(outer), Some(rocket)) = (
            sim.position(BodyId::Inner, i),
            sim.position(BodyId::Outer, i),
            sim.position(BodyId::Rocket, i),
        ) else {
            continue;
        };

        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .margin_top(40)
            .caption(&title, caption_font.clone())
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(-limit..limit, -limit..limit)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Distance (m)")
            .y_desc("Distance (m)")
            .label_style(label_font.clone())
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&|v| format!("{v:.1e}"))
            .y_label_formatter(&|v| format!("{v:.1e}"))
            .draw()?;

        chart.draw_series(LineSeries::new(inner_orbit.iter().copied(), &BLUE))?;
        chart.draw_series(LineSeries::new(outer_orbit.iter().copied(), &RED))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![xy(inner), xy(rocket)],
            GREEN.mix(0.6).stroke_width(1),
        )))?;

        chart
            .draw_series(std::iter::once(Circle::new(xy(inner), 5, BLUE.filled())))?
            .label(config.inner.name.as_str())
            .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));
        chart
            .draw_series(std::iter::once(Circle::new(xy(outer), 5, RED.filled())))?
            .label(config.outer.name.as_str())
            .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));
        chart
            .draw_series(std::iter::once(Circle::new(xy(rocket), 4, GREEN.filled())))?
            .label("Rocket")
            .legend(|(x, y)| Circle::new((x, y), 4, GREEN.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .label_font(label_font.clone())
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.draw(&Text::new(
            format!("Angle: {:.2}°", frame.bearing_deg),
            (20, 12),
            label_font.clone(),
        ))?;
        root.draw(&Text::new(
            format!("Distance: {:.2e} m", frame.distance_m),
            ((frame_size as f64 * 0.55) as i32, 12),
            label_font.clone(),
        ))?;

        root.present()?;
        if i % 100 == 0 {
            debug!(frame = i, "rendered frame");
        }
    }

    Ok(())
}
