//! Sensor discovery under the hwmon sysfs tree.
//!
//! Each chip the kernel exposes is a subdirectory of `/sys/class/hwmon`
//! containing a `name` file (driver identifier, first line) and zero or more
//! `tempN_input` files (decimal milli-degrees Celsius, re-readable in place).
//! Discovery walks the root once at startup, keeps chips whose name matches
//! the CPU allow-list, and collects every temperature input beneath them.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Where the kernel exposes hardware-monitor chips.
pub const HWMON_ROOT: &str = "/sys/class/hwmon";

/// Driver names of CPU package/core temperature chips (substring match).
pub const CHIP_ALLOW_LIST: &[&str] = &["coretemp", "k10temp"];

/// Upper bound on discovered sensors. Exceeding it is a hard error.
pub const MAX_SENSORS: usize = 32;

/// Bytes of the chip `name` file considered for the allow-list match.
const NAME_BUF_LEN: u64 = 64;

/// Read the first line of a chip's `name` file, truncated to [`NAME_BUF_LEN`].
fn read_chip_name(chip_dir: &Path) -> Option<String> {
    let file = File::open(chip_dir.join("name")).ok()?;
    let mut line = String::new();
    BufReader::new(file)
        .take(NAME_BUF_LEN)
        .read_line(&mut line)
        .ok()?;
    let name = line.trim_end();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Whether a directory entry names a temperature input (`temp*..._input`).
fn is_temp_input(file_name: &str) -> bool {
    file_name.starts_with("temp") && file_name.contains("_input")
}

/// Walk `root` and collect every temperature-input path under allow-listed
/// chips. Order follows directory enumeration and is stable within one run.
///
/// Chip directories that vanish or turn unreadable mid-scan are skipped.
/// An unreadable `root` is [`Error::DiscoveryUnavailable`], zero matches is
/// [`Error::NoSensorsFound`], and more than `max_sensors` matches is
/// [`Error::TooManySensors`].
pub fn discover_sensors(root: &Path, max_sensors: usize) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|source| Error::DiscoveryUnavailable {
        root: root.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();

    for entry in entries.flatten() {
        let chip_entry = entry.file_name();
        if chip_entry.to_string_lossy().starts_with('.') {
            continue;
        }

        let chip_dir = entry.path();
        let chip_name = match read_chip_name(&chip_dir) {
            Some(name) => name,
            None => continue,
        };

        if !CHIP_ALLOW_LIST.iter().any(|id| chip_name.contains(id)) {
            debug!("skipping chip {} ({chip_name})", chip_dir.display());
            continue;
        }

        let temp_entries = match fs::read_dir(&chip_dir) {
            Ok(it) => it,
            Err(err) => {
                debug!("skipping unreadable chip {}: {err}", chip_dir.display());
                continue;
            }
        };

        for temp_entry in temp_entries.flatten() {
            if is_temp_input(&temp_entry.file_name().to_string_lossy()) {
                paths.push(temp_entry.path());
            }
        }
    }

    if paths.len() > max_sensors {
        return Err(Error::TooManySensors {
            found: paths.len(),
            max: max_sensors,
        });
    }

    if paths.is_empty() {
        return Err(Error::NoSensorsFound {
            root: root.to_path_buf(),
        });
    }

    Ok(paths)
}
