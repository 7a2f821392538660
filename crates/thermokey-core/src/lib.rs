//! # thermokey-core
//!
//! **Turn a thermal event into a virtual held key.**
//!
//! thermokey watches every CPU temperature sensor under `/sys/class/hwmon`
//! and, when all of them heat up at ≥ 10 °C/s within one 10 ms polling tick,
//! presses and holds a synthetic Left-Ctrl on a virtual uinput keyboard. The
//! key is released once every sensor cools at ≤ −5 °C/s. Paired with an
//! external load generator that busy-spins the cores while a physical key is
//! held, this closes the loop: holding one key becomes a synthetic hold of
//! another, routed through the CPU's thermals.
//!
//! ## Pipeline
//!
//! Scanner → sources (once) → reader (per tick, per sensor) → detector →
//! hysteresis machine → emitter (edges only)
//!
//! ```no_run
//! use std::path::Path;
//! use thermokey_core::{
//!     discover_sensors, PollDriver, SensorSource, UinputKeyEmitter, HWMON_ROOT, MAX_SENSORS,
//! };
//!
//! # fn main() -> thermokey_core::Result<()> {
//! let paths = discover_sensors(Path::new(HWMON_ROOT), MAX_SENSORS)?;
//! let sources = paths
//!     .into_iter()
//!     .map(SensorSource::open)
//!     .collect::<thermokey_core::Result<Vec<_>>>()?;
//! let mut emitter = UinputKeyEmitter::register()?;
//! PollDriver::new(sources).run(&mut emitter)
//! # }
//! ```
//!
//! Both thresholds are crossed unanimously or not at all: a single noisy or
//! unreadable sensor cannot move the state machine. The two thresholds
//! differ (rise fast, fall slow-and-clearly) so the key never chatters
//! around a single cutoff.

pub mod detector;
pub mod emit;
pub mod error;
pub mod hwmon;
pub mod hysteresis;
pub mod poll;
pub mod sensor;

pub use detector::{classify, Classification, DROP_RATE, SPIKE_RATE};
pub use emit::{KeyEmitter, UinputKeyEmitter, DEVICE_NAME, HELD_KEY};
pub use error::{Error, Result};
pub use hwmon::{discover_sensors, CHIP_ALLOW_LIST, HWMON_ROOT, MAX_SENSORS};
pub use hysteresis::{DetectorState, Hysteresis, KeyEdge};
pub use poll::{PollDriver, POLL_INTERVAL};
pub use sensor::SensorSource;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
