use serde::Serialize;
use tracing::{debug, info};

use super::bits::BitSequence;
use super::line_coding::{Level, LineCode, Scheme};
use super::scrambling::{ScrambleKind, Scrambler};
use crate::error::{SignalError, SignalResult};

/// The only artifact handed to the rendering boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingResult {
    pub levels: Vec<Level>,
    pub title: String,
    /// Two levels per bit (Manchester-style layout)
    pub double_length: bool,
}

impl EncodingResult {
    /// Levels separated by spaces, e.g. `1 -1 0`
    pub fn levels_text(&self) -> String {
        self.levels
            .iter()
            .map(|level| level.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct SignalEncoder {
    scheme: Scheme,
    line_code: Box<dyn LineCode>,
    scrambler: Scrambler,
}

impl SignalEncoder {
    /// Create a new signal encoder
    ///
    /// Scrambling is only defined on top of AMI; any other combination is
    /// rejected here so that no partial output is produced.
    pub fn new(scheme: Scheme, scramble: ScrambleKind) -> SignalResult<Self> {
        if scramble != ScrambleKind::None && scheme != Scheme::Ami {
            return Err(SignalError::InvalidSelection(format!(
                "{scramble} scrambling requires AMI, got {scheme}"
            )));
        }

        info!("SignalEncoder initialized:");
        info!("  - line coding: {}", scheme);
        info!("  - scrambling: {}", scramble);

        Ok(Self {
            scheme,
            line_code: scheme.create(),
            scrambler: Scrambler::new(scramble),
        })
    }

    pub fn scramble(&self) -> ScrambleKind {
        self.scrambler.kind()
    }

    pub fn title(&self) -> String {
        match self.scramble() {
            ScrambleKind::None => self.scheme.title().to_string(),
            kind => format!("AMI + {kind}"),
        }
    }

    /// Encode bits into the labeled signal
    pub fn encode(&self, bits: &BitSequence) -> EncodingResult {
        let mut levels = self.line_code.encode(bits);
        let substitutions = self.scrambler.apply(&mut levels);

        debug!(
            "Encoded {} bits into {} levels with {} ({} substitutions)",
            bits.len(),
            levels.len(),
            self.scheme,
            substitutions
        );

        EncodingResult {
            levels,
            title: self.title(),
            double_length: self.scheme.is_double_length(),
        }
    }
}
