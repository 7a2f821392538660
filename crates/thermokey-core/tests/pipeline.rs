//! Integration tests for thermokey-core.
//!
//! These drive the full pipeline against a fake hwmon tree:
//! discovery → source open → primed poll driver → ticks → recorded edges.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use thermokey_core::{
    discover_sensors, DetectorState, KeyEdge, KeyEmitter, PollDriver, SensorSource, MAX_SENSORS,
};

struct RecordingEmitter {
    edges: Vec<KeyEdge>,
}

impl KeyEmitter for RecordingEmitter {
    fn emit(&mut self, edge: KeyEdge) -> std::io::Result<()> {
        self.edges.push(edge);
        Ok(())
    }
}

fn write_chip(root: &Path, dir: &str, name: &str, temps: &[(&str, i32)]) {
    let chip = root.join(dir);
    fs::create_dir(&chip).unwrap();
    fs::write(chip.join("name"), format!("{name}\n")).unwrap();
    for (file, value) in temps {
        fs::write(chip.join(file), format!("{value}\n")).unwrap();
    }
}

fn set_temps(paths: &[PathBuf], values: &[i32]) {
    for (path, value) in paths.iter().zip(values) {
        fs::write(path, format!("{value}\n")).unwrap();
    }
}

#[test]
fn discovery_through_emission() {
    let root = TempDir::new().unwrap();
    write_chip(
        root.path(),
        "hwmon0",
        "coretemp",
        &[("temp1_input", 40_000), ("temp2_input", 40_000)],
    );
    // An unrelated chip that must not contribute sensors.
    write_chip(root.path(), "hwmon1", "amdgpu", &[("temp1_input", 70_000)]);

    let mut paths = discover_sensors(root.path(), MAX_SENSORS).unwrap();
    paths.sort();
    assert_eq!(paths.len(), 2, "expected exactly the coretemp inputs");

    let sources: Vec<SensorSource> = paths
        .iter()
        .map(|p| SensorSource::open(p.clone()).unwrap())
        .collect();

    let mut driver = PollDriver::new(sources);
    let mut emitter = RecordingEmitter { edges: Vec::new() };
    assert_eq!(driver.sensor_count(), 2);
    assert_eq!(driver.state(), DetectorState::Idle);

    // Non-unanimous warmup: one sensor spikes, the other crawls.
    set_temps(&paths, &[51_000, 40_500]);
    driver.tick_with_elapsed(1.0, &mut emitter);
    assert!(emitter.edges.is_empty(), "partial agreement must not press");

    // Unanimous spike from [51000, 40500]: +11.0 and +12.0 °C/s.
    set_temps(&paths, &[62_000, 52_500]);
    driver.tick_with_elapsed(1.0, &mut emitter);
    assert_eq!(emitter.edges, vec![KeyEdge::Press]);
    assert_eq!(driver.state(), DetectorState::Spiking);

    // Holding hot: no repeated press.
    driver.tick_with_elapsed(1.0, &mut emitter);
    assert_eq!(emitter.edges, vec![KeyEdge::Press]);

    // Unanimous drop: −7.0 and −6.5 °C/s.
    set_temps(&paths, &[55_000, 46_000]);
    driver.tick_with_elapsed(1.0, &mut emitter);
    assert_eq!(emitter.edges, vec![KeyEdge::Press, KeyEdge::Release]);
    assert_eq!(driver.state(), DetectorState::Idle);
}

#[test]
fn one_broken_sensor_holds_the_whole_set_back() {
    let root = TempDir::new().unwrap();
    write_chip(
        root.path(),
        "hwmon0",
        "k10temp",
        &[("temp1_input", 40_000), ("temp2_input", 40_000)],
    );

    let mut paths = discover_sensors(root.path(), MAX_SENSORS).unwrap();
    paths.sort();
    let sources: Vec<SensorSource> = paths
        .iter()
        .map(|p| SensorSource::open(p.clone()).unwrap())
        .collect();

    let mut driver = PollDriver::new(sources);
    let mut emitter = RecordingEmitter { edges: Vec::new() };

    // Both sensors heat hard, but one read returns nothing that tick.
    fs::write(&paths[0], "55000\n").unwrap();
    fs::write(&paths[1], "").unwrap();
    driver.tick_with_elapsed(1.0, &mut emitter);
    assert!(emitter.edges.is_empty());
    assert_eq!(driver.state(), DetectorState::Idle);
}

#[test]
fn fresh_tree_with_no_matching_chips_refuses_to_start() {
    let root = TempDir::new().unwrap();
    write_chip(root.path(), "hwmon0", "iwlwifi", &[("temp1_input", 40_000)]);

    assert!(discover_sensors(root.path(), MAX_SENSORS).is_err());
}
