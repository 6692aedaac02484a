// Logical bit stream: the input of every line code and of the palindrome search

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::error::SignalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn is_one(self) -> bool {
        self == Bit::One
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

/// Immutable sequence of bits, produced once per run by the input stage
/// or the quantizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence(Vec<Bit>);

impl BitSequence {
    pub fn new(bits: Vec<Bit>) -> Self {
        Self(bits)
    }

    /// Uniformly random bits
    pub fn random<R: Rng>(rng: &mut R, len: usize) -> Self {
        (0..len).map(|_| Bit::from(rng.random_bool(0.5))).collect()
    }
}

impl Deref for BitSequence {
    type Target = [Bit];

    fn deref(&self) -> &[Bit] {
        &self.0
    }
}

impl FromIterator<Bit> for BitSequence {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for BitSequence {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                Bit::from_char(ch).ok_or(SignalError::InvalidBit { ch, position })
            })
            .collect()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for BitSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
