// Line codes: bit sequence -> ternary signal levels
//
// NRZ-L, NRZ-I and AMI emit one level per bit, Manchester and
// Differential Manchester emit two (first half, second half).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::bits::Bit;
use crate::error::SignalError;

/// Signal level: negative voltage, zero, positive voltage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i8")]
#[repr(i8)]
pub enum Level {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Level {
    pub fn invert(self) -> Self {
        match self {
            Level::Negative => Level::Positive,
            Level::Zero => Level::Zero,
            Level::Positive => Level::Negative,
        }
    }

    pub fn as_i8(self) -> i8 {
        self as i8
    }

    pub fn is_zero(self) -> bool {
        self == Level::Zero
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.as_i8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

pub trait LineCode {
    /// Encode a bit slice into signal levels
    fn encode(&self, bits: &[Bit]) -> Vec<Level>;

    /// Number of output levels per input bit
    fn levels_per_bit(&self) -> usize;

    fn levels_for_bits(&self, num_bits: usize) -> usize {
        num_bits * self.levels_per_bit()
    }
}

// NRZ-L: 1 -> +1, 0 -> -1
pub struct NrzLEncoder;

impl LineCode for NrzLEncoder {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        bits.iter()
            .map(|&bit| if bit.is_one() { Level::Positive } else { Level::Negative })
            .collect()
    }

    fn levels_per_bit(&self) -> usize {
        1
    }
}

// NRZ-I: a 1 inverts the running level, a 0 keeps it
pub struct NrzIEncoder;

impl LineCode for NrzIEncoder {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        let mut level = Level::Negative;
        bits.iter()
            .map(|&bit| {
                if bit.is_one() {
                    level = level.invert();
                }
                level
            })
            .collect()
    }

    fn levels_per_bit(&self) -> usize {
        1
    }
}

// Manchester: 0 -> [+1, -1], 1 -> [-1, +1]
pub struct ManchesterEncoder;

impl LineCode for ManchesterEncoder {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        let mut levels = Vec::with_capacity(self.levels_for_bits(bits.len()));
        for &bit in bits {
            if bit.is_one() {
                // 1 -> low then high
                levels.extend([Level::Negative, Level::Positive]);
            } else {
                // 0 -> high then low
                levels.extend([Level::Positive, Level::Negative]);
            }
        }
        levels
    }

    fn levels_per_bit(&self) -> usize {
        2
    }
}

/// Differential Manchester: transition at every mid-bit, additional
/// transition at the start of the interval only for a 0.
pub struct DifferentialManchesterEncoder;

impl LineCode for DifferentialManchesterEncoder {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        let mut levels = Vec::with_capacity(self.levels_for_bits(bits.len()));
        let mut level = Level::Negative;
        for &bit in bits {
            if !bit.is_one() {
                level = level.invert();
            }
            levels.extend([level, level.invert()]);
            level = level.invert();
        }
        levels
    }

    fn levels_per_bit(&self) -> usize {
        2
    }
}

/// Alternate Mark Inversion: 0 -> zero level, marks alternate +1 / -1
/// starting with +1.
pub struct AmiEncoder;

impl LineCode for AmiEncoder {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        let mut polarity = Level::Positive;
        bits.iter()
            .map(|&bit| {
                if bit.is_one() {
                    let mark = polarity;
                    polarity = polarity.invert();
                    mark
                } else {
                    Level::Zero
                }
            })
            .collect()
    }

    fn levels_per_bit(&self) -> usize {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scheme {
    NrzL,
    NrzI,
    Manchester,
    DifferentialManchester,
    Ami,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
        Scheme::Ami,
    ];

    pub fn create(self) -> Box<dyn LineCode> {
        match self {
            Scheme::NrzL => Box::new(NrzLEncoder),
            Scheme::NrzI => Box::new(NrzIEncoder),
            Scheme::Manchester => Box::new(ManchesterEncoder),
            Scheme::DifferentialManchester => {
                Box::new(DifferentialManchesterEncoder)
            }
            Scheme::Ami => Box::new(AmiEncoder),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Diff Manchester",
            Scheme::Ami => "AMI",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Scheme::NrzL => "NRZ-L Encoding",
            Scheme::NrzI => "NRZ-I Encoding",
            Scheme::Manchester => "Manchester Encoding",
            Scheme::DifferentialManchester => "Differential Manchester",
            Scheme::Ami => "AMI Encoding",
        }
    }

    /// Manchester-style layout, two levels per bit
    pub fn is_double_length(self) -> bool {
        matches!(self, Scheme::Manchester | Scheme::DifferentialManchester)
    }

    /// Menu code (1-based, as listed in the interactive menu)
    pub fn from_code(code: u32) -> Result<Self, SignalError> {
        match code {
            1..=5 => Ok(Self::ALL[code as usize - 1]),
            _ => Err(SignalError::InvalidSelection(format!(
                "encoding scheme {code}"
            ))),
        }
    }
}

impl FromStr for Scheme {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nrz-l" | "nrzl" => Ok(Scheme::NrzL),
            "nrz-i" | "nrzi" => Ok(Scheme::NrzI),
            "manchester" => Ok(Scheme::Manchester),
            "diff-manchester" | "differential-manchester" => {
                Ok(Scheme::DifferentialManchester)
            }
            "ami" => Ok(Scheme::Ami),
            other => Err(SignalError::InvalidSelection(format!(
                "unknown encoding scheme '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
