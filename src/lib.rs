//! Real-time binary-FSK baseband sample generation.
//!
//! One [`FskSynth`](synth::FskSynth) fills buffers of complex 8-bit
//! samples from a hard real-time callback while its paired
//! [`FskControl`](synth::FskControl) accepts configuration messages from
//! whatever context the host dispatches them on. The two halves share no
//! locks; configuration snapshots cross over through a triple buffer and
//! progress reports come back through a bounded channel owned by the
//! host.

#![allow(clippy::module_name_repetitions, clippy::wildcard_imports)]

// Signal processing
pub mod dsp;

// Waveform synthesis and its control surface
pub mod synth;

// Some widely-used re-exports
pub mod prelude;

// Program-wide settings
pub mod settings;
