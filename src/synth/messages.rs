//! Messages crossing the synthesizer boundary.

use bytemuck::NoUninit;
use std::fmt::{Display, Formatter, Result};

/// One-shot configuration message for the FSK synthesizer.
///
/// A message received while a run is in flight abruptly replaces it;
/// there are no drain or flush semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigureFsk {
    /// Output samples per symbol. Must be at least 1.
    pub samples_per_bit: u32,
    /// Tone deviation from the carrier centre, in Hz. The "zero" symbol
    /// is shifted by this amount and the "one" symbol by its exact
    /// negation.
    pub shift: i32,
    /// Payload length in bits, excluding the trailer guard symbols.
    pub stream_length: u32,
    /// Symbols between progress reports.
    pub progress_notice: u32,
}

/// Progress/completion notice pushed to the host's report queue.
///
/// The `progress` counter is a running total for the current run; the
/// final report of a run carries `done = true` and is sent exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressReport {
    /// Number of progress notices emitted so far in this run.
    pub progress: u32,
    /// Set on the completion report.
    pub done: bool,
}

/// Host-visible synthesizer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SynthStatus {
    /// Emitting silence until a configuration is applied.
    #[default]
    Idle,
    /// Synthesizing a bitstream.
    Active,
}

impl Display for SynthStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Active => write!(f, "active"),
        }
    }
}

unsafe impl NoUninit for SynthStatus {}
