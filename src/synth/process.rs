//! Real-time sample generation.
//!
//! Everything in this file runs on the host's sample-buffer callback and
//! must complete within the callback deadline: no locks, no allocation,
//! no blocking sends. Per sample the hot path is one compare, one
//! wrapping add and two table lookups.

use super::*;
use crate::dsp::{bits, sine, IqSample};
use std::sync::atomic::Ordering::Release;

impl FskSynth {
    /// Fills `buffer` with the next stretch of baseband waveform.
    ///
    /// `source` is the externally-owned bitstream for the current run;
    /// the synthesizer reads it bit by bit and never holds on to it
    /// between calls. Idle stretches (before the first configuration and
    /// after a run completes) are filled with zero samples.
    pub fn process(&mut self, buffer: &mut [IqSample], source: &[u8]) {
        self.poll_config();

        for slot in buffer.iter_mut() {
            if !self.state.active {
                *slot = IqSample::ZERO;
                continue;
            }

            debug_assert!(
                self.state.sample_count <= self.config.samples_per_bit
            );

            if self.state.sample_count == self.config.samples_per_bit {
                self.advance_symbol(source);
            } else {
                self.state.sample_count += 1;
            }

            *slot = if self.state.active {
                let increment = if self.state.current_symbol {
                    self.config.phase_one
                } else {
                    self.config.phase_zero
                };
                self.state.phase =
                    self.state.phase.wrapping_add_signed(increment);

                IqSample::new(
                    sine::lookup(self.state.phase),
                    sine::lookup(
                        self.state.phase.wrapping_add(sine::QUARTER_TURN),
                    ),
                )
            } else {
                IqSample::ZERO
            };
        }
    }

    /// Swaps in the latest configuration snapshot, if the control side
    /// published one since the last callback.
    ///
    /// Every counter restarts; only the phase accumulator carries over,
    /// keeping the carrier continuous across abrupt reconfigurations.
    fn poll_config(&mut self) {
        if !self.pending.updated() {
            return;
        }

        if let Some(config) = *self.pending.read() {
            self.config = config;
            self.state = RunState {
                phase: self.state.phase,
                // primed to force a symbol fetch on the very first slot
                sample_count: config.samples_per_bit,
                bit_position: 0,
                current_symbol: false,
                progress_count: 0,
                active: true,
            };
            self.report = ProgressReport::default();
            self.status.store(SynthStatus::Active, Release);
        }
    }

    /// Crosses a symbol boundary: fetches the next bit, or retires the
    /// run once the bitstream is exhausted.
    fn advance_symbol(&mut self, source: &[u8]) {
        if self.state.bit_position > self.config.total_bits {
            self.state.current_symbol = false;
            self.report.done = true;
            let _ = self.reports.try_send(self.report);
            self.state.active = false;
            self.status.store(SynthStatus::Idle, Release);
        } else {
            self.state.current_symbol =
                bits::bit_at(source, self.state.bit_position);
            self.state.bit_position += 1;

            if self.state.progress_count >= self.config.progress_notice {
                self.state.progress_count = 0;
                self.report.progress += 1;
                let _ = self.reports.try_send(self.report);
            } else {
                self.state.progress_count += 1;
            }
        }

        self.state.sample_count = 0;
    }
}
