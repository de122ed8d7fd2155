//! Global constants for the synthesis path.

/// Baseband sample rate of the transmit path, in samples per second.
///
/// The host's radio hardware clocks complex samples out at 2.28 MHz; the
/// sample-buffer callback cadence follows directly from this rate and the
/// buffer size the host chooses.
pub const SAMPLE_RATE: u32 = 2_280_000;

/// Fixed-point phase accumulator units per Hz of tone shift.
///
/// One full turn of the 32-bit accumulator is 2^32 units, so a tone at
/// `f` Hz advances the accumulator by about `f * 1883` units per sample
/// at [`SAMPLE_RATE`].
pub const PHASE_UNITS_PER_HZ: u32 = u32::MAX / SAMPLE_RATE;

/// Guard symbols appended after the payload bits so the final data symbol
/// completes its full period before the generator idles.
pub const TRAILER_BITS: u32 = 4;

/// Suggested capacity for the host's progress report channel.
///
/// A run emits one progress report per `progress_notice + 1` symbols plus
/// a single completion report. Reports are dropped, never blocked on, if
/// the channel is full when they come due.
pub const REPORT_CHANNEL_CAPACITY: usize = 16;
