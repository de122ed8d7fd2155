//! Configuration validation and publication.
//!
//! Validation and the fixed-point increment arithmetic run on the
//! message-handling context, never on the real-time path. A valid
//! message is frozen into a [`RunConfig`] and published through the
//! triple buffer as a single unit, so the synthesizer can never observe
//! half of an old run and half of a new one.

use super::messages::{ConfigureFsk, SynthStatus};
use crate::settings::{PHASE_UNITS_PER_HZ, TRAILER_BITS};
use atomic::Atomic;
use std::fmt;
use std::sync::atomic::Ordering::Acquire;
use std::sync::Arc;

/// Rejection reasons for a [`ConfigureFsk`] message.
///
/// A rejected message publishes nothing: whatever run was in flight
/// continues untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `samples_per_bit` was zero; the symbol clock needs at least one
    /// sample per symbol.
    ZeroSamplesPerBit,
    /// The requested shift scales to a phase increment outside the
    /// accumulator's signed 32-bit range.
    ShiftOutOfRange(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSamplesPerBit => {
                write!(f, "samples_per_bit must be at least 1")
            }
            Self::ShiftOutOfRange(shift) => {
                write!(f, "shift of {shift} Hz exceeds the accumulator range")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Frozen parameters of one synthesis run.
///
/// Built once per accepted message and never mutated afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RunConfig {
    /// Output samples per symbol, at least 1.
    pub samples_per_bit: u32,
    /// Payload bits plus the trailer guard symbols.
    pub total_bits: u64,
    /// Phase increment per sample while sending a "zero" symbol.
    pub phase_zero: i32,
    /// Phase increment per sample while sending a "one" symbol; the
    /// exact negation of `phase_zero`.
    pub phase_one: i32,
    /// Symbols between progress reports.
    pub progress_notice: u32,
}

impl RunConfig {
    /// Validates a configuration message and derives the run parameters.
    pub fn from_message(msg: &ConfigureFsk) -> Result<Self, ConfigError> {
        if msg.samples_per_bit == 0 {
            return Err(ConfigError::ZeroSamplesPerBit);
        }

        let scaled = i64::from(msg.shift) * i64::from(PHASE_UNITS_PER_HZ);
        let phase_zero = i32::try_from(scaled)
            .map_err(|_| ConfigError::ShiftOutOfRange(msg.shift))?;

        Ok(Self {
            samples_per_bit: msg.samples_per_bit,
            total_bits: u64::from(msg.stream_length) + u64::from(TRAILER_BITS),
            phase_zero,
            phase_one: phase_zero.wrapping_neg(),
            progress_notice: msg.progress_notice,
        })
    }
}

/// Control-side handle to the synthesizer.
///
/// Owned by the host's message dispatch context. Dropping it leaves the
/// synthesizer running whatever it was last configured with.
pub struct FskControl {
    pub(super) pending: triple_buffer::Input<Option<RunConfig>>,
    pub(super) status: Arc<Atomic<SynthStatus>>,
}

impl FskControl {
    /// Validates `msg` and publishes it to the real-time side.
    ///
    /// The new run replaces any in-flight run at the synthesizer's next
    /// callback. Several messages published between two callbacks
    /// coalesce; only the latest takes effect.
    pub fn configure(&mut self, msg: &ConfigureFsk) -> Result<(), ConfigError> {
        let config = RunConfig::from_message(msg)?;
        self.pending.write(Some(config));
        Ok(())
    }

    /// The synthesizer's current state, as of its last callback.
    pub fn status(&self) -> SynthStatus {
        self.status.load(Acquire)
    }
}
