//! thermokey daemon — holds a virtual Left-Ctrl while every CPU temperature
//! sensor spikes in unison.
//!
//! No arguments, no configuration: the only knob is `RUST_LOG` for log
//! verbosity. All fatal conditions surface before the poll loop starts and
//! exit with code 1; after that the process runs until terminated.

use std::convert::Infallible;
use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use thermokey_core::{
    discover_sensors, PollDriver, SensorSource, UinputKeyEmitter, HWMON_ROOT, MAX_SENSORS,
};

fn run() -> thermokey_core::Result<Infallible> {
    let paths = discover_sensors(Path::new(HWMON_ROOT), MAX_SENSORS)?;

    info!("found {} sensors", paths.len());
    for path in &paths {
        info!("  {}", path.display());
    }

    let sources = paths
        .into_iter()
        .map(SensorSource::open)
        .collect::<thermokey_core::Result<Vec<_>>>()?;

    // Register the virtual device before entering the loop; without it the
    // daemon has no way to act on spikes.
    let mut emitter = UinputKeyEmitter::register()?;

    PollDriver::new(sources).run(&mut emitter)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(never) => match never {},
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
