// Delta modulation: one bit per sample, tracking a running prediction
// that moves by a fixed step towards the input.

use crate::phy::bits::{Bit, BitSequence};
use crate::utils::consts::DELTA_STEP;

pub struct DeltaModulator {
    step: f64,
}

impl Default for DeltaModulator {
    fn default() -> Self {
        Self::new(DELTA_STEP)
    }
}

impl DeltaModulator {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// 1 (prediction += step) when the sample is above the prediction,
    /// otherwise 0 (prediction -= step). Prediction starts at 0.0.
    pub fn encode(&self, samples: &[f64]) -> BitSequence {
        let mut prediction = 0.0;
        samples
            .iter()
            .map(|&sample| {
                let up = sample > prediction;
                prediction += if up { self.step } else { -self.step };
                Bit::from(up)
            })
            .collect()
    }

    /// Prediction value after each sample
    pub fn staircase(&self, samples: &[f64]) -> Vec<f64> {
        let mut prediction = 0.0;
        samples
            .iter()
            .map(|&sample| {
                prediction += if sample > prediction { self.step } else { -self.step };
                prediction
            })
            .collect()
    }
}
