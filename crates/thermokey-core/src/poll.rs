//! The fixed-cadence sampling loop.
//!
//! One logical thread owns everything: sleep the cadence, read every sensor,
//! classify against the previous tick, advance the hysteresis machine, emit
//! on edges, then roll the current samples into the previous slots. The rate
//! computation always uses the actual measured elapsed time, not the nominal
//! cadence — scheduler delay stretches real polling intervals.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::detector::classify;
use crate::emit::KeyEmitter;
use crate::hysteresis::{DetectorState, Hysteresis, KeyEdge};
use crate::sensor::SensorSource;

/// Nominal delay between ticks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Owns the sensor handles, the one-deep sample history, and the state
/// machine. Previous samples are touched nowhere else: each tick reads them,
/// classifies, then overwrites them, in that order.
pub struct PollDriver {
    sources: Vec<SensorSource>,
    prev: Vec<Option<i32>>,
    prev_tick: Instant,
    hysteresis: Hysteresis,
}

impl PollDriver {
    /// Prime the driver: take one baseline reading per sensor and stamp the
    /// monotonic clock.
    pub fn new(mut sources: Vec<SensorSource>) -> Self {
        let prev = sources
            .iter_mut()
            .map(SensorSource::read_millidegrees)
            .collect();
        Self {
            sources,
            prev,
            prev_tick: Instant::now(),
            hysteresis: Hysteresis::new(),
        }
    }

    pub fn sensor_count(&self) -> usize {
        self.sources.len()
    }

    pub fn state(&self) -> DetectorState {
        self.hysteresis.state()
    }

    /// Run forever. The daemon has no graceful-shutdown path; it is
    /// terminated externally, and process teardown drops the uinput device.
    pub fn run(&mut self, emitter: &mut dyn KeyEmitter) -> ! {
        loop {
            thread::sleep(POLL_INTERVAL);

            let now = Instant::now();
            let elapsed_secs = now.duration_since(self.prev_tick).as_secs_f64();
            self.prev_tick = now;

            self.tick_with_elapsed(elapsed_secs, emitter);
        }
    }

    /// One tick with an injected elapsed time. `run` calls this with the
    /// measured interval; tests call it directly.
    pub fn tick_with_elapsed(&mut self, elapsed_secs: f64, emitter: &mut dyn KeyEmitter) {
        let curr: Vec<Option<i32>> = self
            .sources
            .iter_mut()
            .map(|source| {
                let sample = source.read_millidegrees();
                if sample.is_none() {
                    debug!("read failed on {}", source.path().display());
                }
                sample
            })
            .collect();

        let classification = classify(&self.prev, &curr, elapsed_secs);

        if let Some(edge) = self.hysteresis.advance(&classification) {
            match edge {
                KeyEdge::Press => info!("spike detected: {:.1}°C/s", classification.max_rate),
                KeyEdge::Release => info!("temperature dropped"),
            }
            if let Err(err) = emitter.emit(edge) {
                // Not fatal: the next edge retries against the same device.
                warn!("failed to emit {edge:?}: {err}");
            }
        }

        // Roll forward unconditionally. A failed read advances its slot to
        // the invalid marker, so the next tick's delta for that sensor fails
        // closed instead of being computed against a stale value.
        self.prev = curr;
    }
}
