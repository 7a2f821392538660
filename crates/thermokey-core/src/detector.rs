//! Per-tick rate-of-change classification across the whole sensor set.

/// Rate at or above which a sensor counts as spiking, in °C/s.
pub const SPIKE_RATE: f64 = 10.0;

/// Rate at or below which a sensor counts as dropping, in °C/s. More negative
/// than `-SPIKE_RATE` would be symmetric; the gap between the two thresholds
/// is the hysteresis band.
pub const DROP_RATE: f64 = -5.0;

/// Verdict for one tick over the full sensor set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Every discovered sensor read successfully and its rate was at or
    /// above [`SPIKE_RATE`].
    pub all_spiking: bool,
    /// Every discovered sensor read successfully and its rate was at or
    /// below [`DROP_RATE`].
    pub all_dropping: bool,
    /// Largest positive rate observed this tick, for diagnostics.
    pub max_rate: f64,
}

impl Classification {
    /// The no-op verdict: no transition in either direction.
    pub const NEUTRAL: Self = Self {
        all_spiking: false,
        all_dropping: false,
        max_rate: 0.0,
    };
}

/// Classify one tick given previous and current readings (`None` = failed
/// read) and the actual elapsed wall-clock seconds.
///
/// Unanimity is judged against the total discovered sensor count, not the
/// count of successful reads: a sensor that failed to read contributes to
/// neither tally, and therefore blocks both transitions for the tick. This
/// asymmetry is deliberate — treating failures as satisfying a threshold
/// would let a flaky sensor fire the key.
///
/// A non-positive `elapsed_secs` (clock anomaly, duplicate timestamp) skips
/// the tick entirely rather than dividing by zero.
pub fn classify(prev: &[Option<i32>], curr: &[Option<i32>], elapsed_secs: f64) -> Classification {
    debug_assert_eq!(prev.len(), curr.len());

    let total = prev.len();
    if total == 0 || elapsed_secs <= 0.0 {
        return Classification::NEUTRAL;
    }

    let mut spike_count = 0;
    let mut drop_count = 0;
    let mut max_rate = 0.0_f64;

    for (prev_sample, curr_sample) in prev.iter().zip(curr) {
        let (Some(prev_milli), Some(curr_milli)) = (*prev_sample, *curr_sample) else {
            continue;
        };

        let delta_celsius = f64::from(curr_milli - prev_milli) / 1000.0;
        let rate = delta_celsius / elapsed_secs;

        if rate >= SPIKE_RATE {
            spike_count += 1;
        }
        if rate <= DROP_RATE {
            drop_count += 1;
        }
        if rate > max_rate {
            max_rate = rate;
        }
    }

    Classification {
        all_spiking: spike_count == total,
        all_dropping: drop_count == total,
        max_rate,
    }
}
