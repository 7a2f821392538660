//! Fatal error taxonomy.
//!
//! Everything here is detected at or before the start of the poll loop and
//! terminates the daemon with a diagnostic. Per-tick read failures are not
//! errors; they are modeled as `None` samples and handled inline by the
//! detector (see [`crate::sensor`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A condition the daemon cannot start (or keep starting) under.
#[derive(Debug, Error)]
pub enum Error {
    /// The hwmon root itself could not be enumerated.
    #[error("cannot open sensor root {root}: {source}")]
    DiscoveryUnavailable { root: PathBuf, source: io::Error },

    /// Discovery ran but matched zero temperature inputs. Running with no
    /// sensors would be a silent no-op, so this is fatal.
    #[error("no cpu temperature sensors found under {root}")]
    NoSensorsFound { root: PathBuf },

    /// More temperature inputs than the supported bound. Failing fast beats
    /// truncating: unanimity over a silently clipped sensor set would be a lie.
    #[error("found {found} temperature sensors, more than the supported {max}")]
    TooManySensors { found: usize, max: usize },

    /// A discovered sensor path could not be opened. The unanimity logic
    /// depends on a stable, known sensor count, so a partial set is refused.
    #[error("failed to open sensor {path}: {source}")]
    SourceOpenFailed { path: PathBuf, source: io::Error },

    /// The uinput device could not be registered. Without it the daemon has
    /// no way to act on spikes.
    #[error("failed to register virtual input device: {0}")]
    DeviceRegistrationFailed(#[source] io::Error),
}
