// Pulse Code Modulation: uniform quantization over the observed [min, max]
// range, `bits_per_sample` bits per sample, MSB first.

use tracing::debug;

use crate::error::{SignalError, SignalResult};
use crate::phy::bits::{Bit, BitSequence};
use crate::utils::consts::MAX_BITS_PER_SAMPLE;

pub struct PcmQuantizer {
    bits_per_sample: u32,
}

impl PcmQuantizer {
    pub fn new(bits_per_sample: u32) -> SignalResult<Self> {
        if bits_per_sample == 0 || bits_per_sample > MAX_BITS_PER_SAMPLE {
            return Err(SignalError::InvalidBitDepth(bits_per_sample));
        }
        Ok(Self { bits_per_sample })
    }

    pub fn levels(&self) -> u32 {
        1 << self.bits_per_sample
    }

    /// Quantization level index of every sample.
    ///
    /// A constant signal (max == min) uses a step of 1, which puts every
    /// sample on level 0. Empty input gives no levels.
    pub fn quantize(&self, samples: &[f64]) -> Vec<u32> {
        let Some((min, max)) = min_max(samples) else {
            return Vec::new();
        };

        let levels = self.levels();
        let step = if max > min {
            (max - min) / levels as f64
        } else {
            1.0
        };
        debug!(
            "PCM: min={:.4}, max={:.4}, levels={}, step={:.4}",
            min, max, levels, step
        );

        samples
            .iter()
            .map(|&sample| quantize_level(sample, min, step, levels))
            .collect()
    }

    pub fn encode(&self, samples: &[f64]) -> BitSequence {
        let mut bits =
            Vec::with_capacity(samples.len() * self.bits_per_sample as usize);
        for q in self.quantize(samples) {
            for j in (0..self.bits_per_sample).rev() {
                bits.push(Bit::from((q >> j) & 1 == 1));
            }
        }
        BitSequence::new(bits)
    }
}

/// floor((sample - min) / step), clamped to the top level so that
/// `sample == max` does not overflow
pub fn quantize_level(sample: f64, min: f64, step: f64, levels: u32) -> u32 {
    let q = ((sample - min) / step).floor();
    if q <= 0.0 {
        0
    } else {
        (q as u32).min(levels - 1)
    }
}

fn min_max(samples: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = samples.split_first()?;
    Some(rest.iter().fold((first, first), |(min, max), &sample| {
        (min.min(sample), max.max(sample))
    }))
}
