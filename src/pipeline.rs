//! End-to-end run: input -> [quantizer] -> palindrome -> line code
//! -> [scrambler] -> zero-run analysis.
//!
//! Each stage consumes its input fully before the next one runs. Input
//! length is checked once, up front, against [`InputLimits`].

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{Palindrome, ZeroRun, longest_palindrome, longest_zero_run};
use crate::error::{SignalError, SignalResult};
use crate::modulation::{DeltaModulator, Modulation};
use crate::phy::{BitSequence, EncodingResult, ScrambleKind, Scheme, SignalEncoder};
use crate::utils::consts::MAX_INPUT_LEN;

#[derive(Debug, Clone)]
pub enum InputSource {
    Digital(BitSequence),
    Analog {
        samples: Vec<f64>,
        modulation: Modulation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_len: MAX_INPUT_LEN,
        }
    }
}

impl InputLimits {
    /// Reject input whose bit stream would exceed `max_len`
    pub fn validate(&self, input: &InputSource) -> SignalResult<()> {
        let len = match input {
            InputSource::Digital(bits) => bits.len(),
            InputSource::Analog {
                samples,
                modulation,
            } => {
                if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
                    return Err(SignalError::InvalidSample(bad.to_string()));
                }
                modulation.output_len(samples.len())
            }
        };

        if len > self.max_len {
            return Err(SignalError::CapacityExceeded {
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub scheme: Scheme,
    pub scramble: ScrambleKind,
    pub limits: InputLimits,
}

impl PipelineConfig {
    pub fn new(scheme: Scheme, scramble: ScrambleKind) -> Self {
        Self {
            scheme,
            scramble,
            limits: InputLimits::default(),
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.limits.max_len = max_len;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Set when the bits came from a quantizer
    pub modulation: Option<Modulation>,
    pub bits: BitSequence,
    /// Delta modulation prediction after each sample
    pub prediction: Option<Vec<f64>>,
    pub palindrome: Palindrome,
    pub result: EncodingResult,
    /// Only reported when a scrambling pass ran and left a zero
    pub zero_run: Option<ZeroRun>,
}

pub fn run(config: &PipelineConfig, input: InputSource) -> SignalResult<PipelineReport> {
    config.limits.validate(&input)?;
    let encoder = SignalEncoder::new(config.scheme, config.scramble)?;

    let (bits, modulation, prediction) = match input {
        InputSource::Digital(bits) => (bits, None, None),
        InputSource::Analog {
            samples,
            modulation,
        } => {
            let bits = modulation.encode(&samples)?;
            info!(
                "{}: {} samples -> {} bits",
                modulation,
                samples.len(),
                bits.len()
            );
            let prediction = match modulation {
                Modulation::Delta => Some(DeltaModulator::default().staircase(&samples)),
                Modulation::Pcm { .. } => None,
            };
            (bits, Some(modulation), prediction)
        }
    };

    let palindrome = longest_palindrome(&bits);
    debug!("Palindrome at {} (length {})", palindrome.start, palindrome.length);

    let result = encoder.encode(&bits);
    let zero_run = match config.scramble {
        ScrambleKind::None => None,
        _ => longest_zero_run(&result.levels),
    };

    Ok(PipelineReport {
        modulation,
        bits,
        prediction,
        palindrome,
        result,
        zero_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digital(s: &str) -> InputSource {
        InputSource::Digital(s.parse().unwrap())
    }

    #[test]
    fn test_digital_run() {
        let config = PipelineConfig::new(Scheme::NrzL, ScrambleKind::None);
        let report = run(&config, digital("0110")).unwrap();
        assert_eq!(report.palindrome.text, "0110");
        assert_eq!(report.result.levels_text(), "-1 1 1 -1");
        assert!(report.zero_run.is_none());
        assert!(report.modulation.is_none());
        assert!(report.prediction.is_none());
    }

    #[test]
    fn test_zero_run_only_after_scrambling() {
        let plain = PipelineConfig::new(Scheme::Ami, ScrambleKind::None);
        assert!(run(&plain, digital("1001")).unwrap().zero_run.is_none());

        let scrambled = PipelineConfig::new(Scheme::Ami, ScrambleKind::B8zs);
        let report = run(&scrambled, digital("1001")).unwrap();
        assert_eq!(report.zero_run, Some(ZeroRun { start: 1, count: 2 }));

        // No zero left after scrambling
        let report = run(&scrambled, digital("1111")).unwrap();
        assert!(report.zero_run.is_none());
    }

    #[test]
    fn test_capacity_exceeded() {
        let config = PipelineConfig::new(Scheme::NrzL, ScrambleKind::None).with_max_len(4);
        assert!(run(&config, digital("1010")).is_ok());
        assert!(matches!(
            run(&config, digital("10101")),
            Err(SignalError::CapacityExceeded { len: 5, max: 4 })
        ));

        // 3 samples * 2 bits = 6 bits > 4
        let analog = InputSource::Analog {
            samples: vec![0.0, 1.0, 2.0],
            modulation: Modulation::Pcm { bits_per_sample: 2 },
        };
        assert!(matches!(
            run(&config, analog),
            Err(SignalError::CapacityExceeded { len: 6, max: 4 })
        ));
    }

    #[test]
    fn test_rejects_non_finite_samples() {
        let config = PipelineConfig::new(Scheme::NrzL, ScrambleKind::None);
        let analog = InputSource::Analog {
            samples: vec![0.0, f64::NAN],
            modulation: Modulation::Delta,
        };
        assert!(matches!(
            run(&config, analog),
            Err(SignalError::InvalidSample(_))
        ));
    }

    #[test]
    fn test_invalid_selection_produces_nothing() {
        let config = PipelineConfig::new(Scheme::NrzI, ScrambleKind::Hdb3);
        assert!(matches!(
            run(&config, digital("0000")),
            Err(SignalError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_analog_run() {
        let config = PipelineConfig::new(Scheme::Manchester, ScrambleKind::None);
        let input = InputSource::Analog {
            samples: vec![1.0, 1.0, 0.2, 0.0],
            modulation: Modulation::Delta,
        };
        let report = run(&config, input).unwrap();
        assert_eq!(report.bits.to_string(), "1100");
        assert_eq!(report.modulation, Some(Modulation::Delta));
        assert_eq!(report.prediction, Some(vec![0.5, 1.0, 0.5, 0.0]));
        assert!(report.result.double_length);
        assert_eq!(report.result.levels.len(), 8);
    }
}
