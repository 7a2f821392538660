//! Two-state hysteresis machine driving edge-only key emission.
//!
//! The spike threshold (rise fast) and drop threshold (fall clearly) differ
//! on purpose: a single cutoff would chatter around thermal noise, toggling
//! the key many times per second. Transitions only fire on unanimous
//! agreement, and emission happens only on the transition itself.

use crate::detector::Classification;

/// Where the machine currently is. `Spiking` is in exact bijection with the
/// synthetic key being held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    Idle,
    Spiking,
}

impl std::fmt::Display for DetectorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Spiking => write!(f, "spiking"),
        }
    }
}

/// A key transition to emit. Produced only on state-machine edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Press,
    Release,
}

/// The state machine itself. Starts `Idle`.
#[derive(Debug)]
pub struct Hysteresis {
    state: DetectorState,
}

impl Hysteresis {
    pub fn new() -> Self {
        Self {
            state: DetectorState::Idle,
        }
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Feed one tick's classification. Returns the edge to emit, if any;
    /// every non-transition tick is a no-op.
    pub fn advance(&mut self, classification: &Classification) -> Option<KeyEdge> {
        match self.state {
            DetectorState::Idle if classification.all_spiking => {
                self.state = DetectorState::Spiking;
                Some(KeyEdge::Press)
            }
            DetectorState::Spiking if classification.all_dropping => {
                self.state = DetectorState::Idle;
                Some(KeyEdge::Release)
            }
            _ => None,
        }
    }
}

impl Default for Hysteresis {
    fn default() -> Self {
        Self::new()
    }
}
