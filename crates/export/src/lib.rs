//! Export helpers for CSV and JSON artifacts.

pub mod trajectory {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use hohmann_transfer::{BodyId, Simulation};
    use serde::Serialize;

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Which leg the rocket is on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Phase {
        Transfer,
        Captured,
    }

    /// CSV row emitted per sample.
    #[derive(Debug, Clone, Serialize)]
    pub struct TrajectoryRow {
        pub index: usize,
        pub time_s: f64,
        pub time_days: f64,
        pub inner_x_m: f64,
        pub inner_y_m: f64,
        pub outer_x_m: f64,
        pub outer_y_m: f64,
        pub rocket_x_m: f64,
        pub rocket_y_m: f64,
        pub bearing_deg: f64,
        pub distance_m: f64,
        pub phase: Phase,
    }

    /// One row per sample of the simulation, in grid order.
    pub fn rows(sim: &Simulation) -> Vec<TrajectoryRow> {
        sim.telemetry_series()
            .into_iter()
            .filter_map(|t| {
                let i = t.sample_index;
                let inner = sim.position(BodyId::Inner, i)?;
                let outer = sim.position(BodyId::Outer, i)?;
                let rocket = sim.position(BodyId::Rocket, i)?;
                Some(TrajectoryRow {
                    index: i,
                    time_s: t.time_s,
                    time_days: t.time_days(),
                    inner_x_m: inner[0],
                    inner_y_m: inner[1],
                    outer_x_m: outer[0],
                    outer_y_m: outer[1],
                    rocket_x_m: rocket[0],
                    rocket_y_m: rocket[1],
                    bearing_deg: t.bearing_deg,
                    distance_m: t.distance_m,
                    phase: if sim.in_transfer(i) {
                        Phase::Transfer
                    } else {
                        Phase::Captured
                    },
                })
            })
            .collect()
    }

    /// Serialize rows as CSV with a header line.
    pub fn write_csv<W: Write>(writer: W, rows: &[TrajectoryRow]) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

pub mod summary {
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use hohmann_transfer::TransferSummary;
    use serde_json::to_writer_pretty;

    /// Write the scenario summary as a pretty-printed JSON sidecar.
    pub fn write_summary(path: &Path, summary: &TransferSummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hohmann_transfer::{Simulation, SimulationConfig};

    fn small_sim() -> Simulation {
        let config = SimulationConfig {
            samples: 50,
            ..SimulationConfig::default()
        };
        Simulation::new(&config).unwrap()
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let sim = small_sim();
        let rows = trajectory::rows(&sim);
        let mut buf = Vec::new();
        trajectory::write_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "index,time_s,time_days,inner_x_m,inner_y_m,outer_x_m,outer_y_m,rocket_x_m,rocket_y_m,bearing_deg,distance_m,phase"
        );
        assert_eq!(lines.count(), 50);
        assert!(text.contains(",transfer\n"));
        assert!(text.contains(",captured\n"));
    }

    #[test]
    fn rows_flip_phase_at_intercept() {
        let sim = small_sim();
        let rows = trajectory::rows(&sim);
        let k = sim.intercept_index();
        assert_eq!(rows[k - 1].phase, trajectory::Phase::Transfer);
        assert_eq!(rows[k].phase, trajectory::Phase::Captured);
        assert_eq!(rows[k].rocket_x_m, rows[k].outer_x_m);
    }

    #[test]
    fn summary_json_round_trips_through_serde() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/summary.json");
        let sim = small_sim();
        summary::write_summary(&path, &sim.summary()).unwrap();
        let value: serde_json::Value =
            serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(value["intercept_index"], sim.intercept_index());
        assert_eq!(value["outer_body"], "Mars");
    }
}
