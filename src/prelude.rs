//! Project-wide exports for easy access.

pub use crate::dsp::{bits::bit_at, sine, IqSample};
pub use crate::settings::*;
pub use crate::synth::{
    ConfigError, ConfigureFsk, FskControl, FskSynth, ProgressReport,
    SynthStatus,
};
pub use crossbeam_channel::{
    bounded as bounded_channel, Receiver as CCReceiver, Sender as CCSender,
};
