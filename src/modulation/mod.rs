//! Analog-to-digital modulation: analog samples -> bit sequence
//!
//! Two quantizers are available: uniform fixed-depth PCM and one-bit
//! delta modulation. Neither has a decoder.

pub mod delta;
pub mod pcm;

use std::fmt;

use serde::Serialize;

use crate::error::{SignalError, SignalResult};
use crate::phy::bits::BitSequence;

pub use delta::DeltaModulator;
pub use pcm::PcmQuantizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Modulation {
    Pcm { bits_per_sample: u32 },
    Delta,
}

impl Modulation {
    /// Menu code: 1 = PCM, 2 = Delta Modulation
    pub fn from_code(code: u32, bits_per_sample: u32) -> SignalResult<Self> {
        match code {
            1 => Ok(Modulation::Pcm { bits_per_sample }),
            2 => Ok(Modulation::Delta),
            _ => Err(SignalError::InvalidSelection(format!(
                "modulation {code}"
            ))),
        }
    }

    /// Number of bits produced for `samples` analog samples
    pub fn output_len(&self, samples: usize) -> usize {
        match *self {
            Modulation::Pcm { bits_per_sample } => {
                samples.saturating_mul(bits_per_sample as usize)
            }
            Modulation::Delta => samples,
        }
    }

    pub fn encode(&self, samples: &[f64]) -> SignalResult<BitSequence> {
        match *self {
            Modulation::Pcm { bits_per_sample } => {
                Ok(PcmQuantizer::new(bits_per_sample)?.encode(samples))
            }
            Modulation::Delta => Ok(DeltaModulator::default().encode(samples)),
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modulation::Pcm { .. } => f.write_str("PCM"),
            Modulation::Delta => f.write_str("Delta Modulation"),
        }
    }
}
