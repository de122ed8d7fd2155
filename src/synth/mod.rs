//! FSK waveform synthesis and asynchronous reconfiguration.
//!
//! Two halves, built as a pair by [`FskSynth::new`]:
//!
//! - [`FskSynth`] lives on the real-time callback context and fills each
//!   sample buffer it is handed, one complex sample at a time.
//! - [`FskControl`] lives on the host's message dispatch context and
//!   feeds validated configuration snapshots to the synthesizer.
//!
//! Neither half ever blocks the other. Configurations cross over through
//! a triple buffer, progress reports come back through a bounded channel
//! the host owns, and the run status is a single atomic value.

use atomic::Atomic;
use crossbeam_channel::Sender as CCSender;
use std::sync::Arc;
use triple_buffer::TripleBuffer;

pub mod config;
pub mod messages;
pub mod process;

pub use config::{ConfigError, FskControl};
pub use messages::{ConfigureFsk, ProgressReport, SynthStatus};

use config::RunConfig;

/// Real-time half of the FSK synthesizer.
///
/// Owns the phase accumulator and all run position state. The only entry
/// point is [`process`](FskSynth::process), invoked from the host's
/// sample-buffer callback.
pub struct FskSynth {
    /// Parameters of the run currently being synthesized.
    config: RunConfig,
    /// Position and phase state, mutated sample by sample.
    state: RunState,
    /// Outbound report, reused across sends so the running progress
    /// total persists for the duration of a run.
    report: ProgressReport,
    /// Configuration snapshots published by the control side.
    pending: triple_buffer::Output<Option<RunConfig>>,
    /// Host-owned report queue. Sends never block; a full queue drops
    /// the report.
    reports: CCSender<ProgressReport>,
    /// Host-visible run state.
    status: Arc<Atomic<SynthStatus>>,
}

/// Mutable synthesis position state.
#[derive(Clone, Copy, Debug, Default)]
struct RunState {
    /// Fixed-point phase accumulator; wraps modulo 2^32. Carried across
    /// reconfigurations so the carrier stays phase-continuous.
    phase: u32,
    /// Samples emitted within the current symbol, in
    /// `0..=samples_per_bit`.
    sample_count: u32,
    /// Index of the next symbol to fetch.
    bit_position: u64,
    /// Symbol value currently on the air.
    current_symbol: bool,
    /// Symbols since the last progress report.
    progress_count: u32,
    /// Cleared when the run exhausts its bitstream.
    active: bool,
}

impl FskSynth {
    /// Builds a synthesizer and its control handle.
    ///
    /// `reports` should be the sending side of a bounded channel; see
    /// [`REPORT_CHANNEL_CAPACITY`](crate::settings::REPORT_CHANNEL_CAPACITY)
    /// for a sizing rule of thumb. The synthesizer starts idle and emits
    /// silence until the first configuration arrives.
    pub fn new(reports: CCSender<ProgressReport>) -> (Self, FskControl) {
        let (pending_in, pending_out) =
            TripleBuffer::new(&None::<RunConfig>).split();
        let status = Arc::new(Atomic::new(SynthStatus::Idle));

        (
            Self {
                config: RunConfig::default(),
                state: RunState::default(),
                report: ProgressReport::default(),
                pending: pending_out,
                reports,
                status: Arc::clone(&status),
            },
            FskControl {
                pending: pending_in,
                status,
            },
        )
    }
}
