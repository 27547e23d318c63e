//! Hohmann transfer simulator.
//!
//! The physics lives in the member crates; this library re-exports them so
//! front-ends (the `hohmann` and `hohmann_plot` binaries, tests) share one path.

pub use hohmann_config as config;
pub use hohmann_core as primitives;
pub use hohmann_export as export;
pub use hohmann_impulsive as impulsive;
pub use hohmann_orbits as orbits;
pub use hohmann_transfer as transfer;

pub use hohmann_transfer::{BodyId, Simulation, SimulationConfig, SimulationError};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Install the stderr `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (tests, embedding) keeps the subscriber already installed.
    if let Err(err) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
    {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

/// Resolve the scenario for a binary: defaults, or a config file when given.
pub fn resolve_config(
    path: Option<&std::path::Path>,
) -> Result<SimulationConfig, hohmann_config::ConfigError> {
    match path {
        Some(path) => hohmann_config::load_config(path),
        None => Ok(SimulationConfig::default()),
    }
}
