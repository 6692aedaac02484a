// Zero-substitution scrambling for AMI signals (B8ZS / HDB3)
//
// Single forward pass over the signal. Every mark is re-polarized to
// alternate from the last pulse written, so the line resumes ordinary AMI
// alternation after each substitution. A run of zeros that reaches the
// window length is rewritten in place; lookback never exceeds the window.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::trace;

use super::line_coding::Level;
use crate::error::SignalError;

pub const B8ZS_WINDOW: usize = 8;
pub const HDB3_WINDOW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ScrambleKind {
    #[default]
    None,
    B8zs,
    Hdb3,
}

impl ScrambleKind {
    /// Zero-run length that triggers a substitution
    pub fn window(self) -> Option<usize> {
        match self {
            ScrambleKind::None => None,
            ScrambleKind::B8zs => Some(B8ZS_WINDOW),
            ScrambleKind::Hdb3 => Some(HDB3_WINDOW),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScrambleKind::None => "None",
            ScrambleKind::B8zs => "B8ZS",
            ScrambleKind::Hdb3 => "HDB3",
        }
    }

    /// Menu code: 0 = none, 1 = B8ZS, 2 = HDB3
    pub fn from_code(code: u32) -> Result<Self, SignalError> {
        match code {
            0 => Ok(ScrambleKind::None),
            1 => Ok(ScrambleKind::B8zs),
            2 => Ok(ScrambleKind::Hdb3),
            _ => Err(SignalError::InvalidSelection(format!(
                "scrambling {code}"
            ))),
        }
    }
}

impl FromStr for ScrambleKind {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ScrambleKind::None),
            "b8zs" => Ok(ScrambleKind::B8zs),
            "hdb3" => Ok(ScrambleKind::Hdb3),
            other => Err(SignalError::InvalidSelection(format!(
                "unknown scrambling '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ScrambleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Only valid on AMI-derived signals: every non-zero level is treated as
/// a mark and re-polarized. `SignalEncoder` enforces the AMI pairing.
pub(crate) struct Scrambler {
    kind: ScrambleKind,
}

impl Scrambler {
    pub fn new(kind: ScrambleKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ScrambleKind {
        self.kind
    }

    /// Scramble an AMI signal in place.
    /// Returns the number of substitutions made.
    pub fn apply(&self, signal: &mut [Level]) -> usize {
        let Some(window) = self.kind.window() else {
            return 0;
        };

        // Complement of the AMI encoder's first mark
        let mut last_pulse = Level::Negative;
        let mut zeros = 0usize;
        let mut marks = 0usize;
        let mut substitutions = 0usize;

        for i in 0..signal.len() {
            if !signal[i].is_zero() {
                last_pulse = last_pulse.invert();
                signal[i] = last_pulse;
                marks += 1;
                zeros = 0;
                continue;
            }

            zeros += 1;
            if zeros < window {
                continue;
            }

            let start = i + 1 - window;
            let run = &mut signal[start..=i];
            last_pulse = match self.kind {
                ScrambleKind::B8zs => substitute_b8zs(run, last_pulse),
                ScrambleKind::Hdb3 => substitute_hdb3(run, last_pulse, marks),
                ScrambleKind::None => last_pulse,
            };
            trace!(
                "{} substitution at {}..={}, marks since last: {}",
                self.kind, start, i, marks
            );

            zeros = 0;
            marks = 0;
            substitutions += 1;
        }

        substitutions
    }
}

/// 0 0 0 V B 0 V B, with V repeating the polarity of the preceding pulse
fn substitute_b8zs(run: &mut [Level], last_pulse: Level) -> Level {
    run[3] = last_pulse;
    run[4] = last_pulse.invert();
    run[6] = last_pulse.invert();
    run[7] = last_pulse;
    last_pulse
}

/// Odd marks since the last substitution: 0 0 0 V.
/// Even: B 0 0 V, where B is a normal mark and V repeats it.
fn substitute_hdb3(run: &mut [Level], last_pulse: Level, marks: usize) -> Level {
    if marks % 2 == 1 {
        run[3] = last_pulse;
        last_pulse
    } else {
        let pulse = last_pulse.invert();
        run[0] = pulse;
        run[3] = pulse;
        pulse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phy::bits::{Bit, BitSequence};
    use crate::phy::line_coding::{AmiEncoder, LineCode};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ami(s: &str) -> Vec<Level> {
        AmiEncoder.encode(&s.parse::<BitSequence>().unwrap())
    }

    fn as_i8(levels: &[Level]) -> Vec<i8> {
        levels.iter().map(|l| l.as_i8()).collect()
    }

    fn longest_zero_run(levels: &[Level]) -> usize {
        levels
            .split(|l| !l.is_zero())
            .map(|run| run.len())
            .max()
            .unwrap_or(0)
    }

    /// Pulses repeating the polarity of the previous pulse
    fn violations(levels: &[Level]) -> Vec<Level> {
        let mut prev = Level::Negative;
        let mut out = Vec::new();
        for &level in levels.iter().filter(|l| !l.is_zero()) {
            if level == prev {
                out.push(level);
            }
            prev = level;
        }
        out
    }

    fn random_sparse_bits(rng: &mut StdRng) -> BitSequence {
        let len = rng.random_range(0..300);
        (0..len).map(|_| Bit::from(rng.random_bool(0.2))).collect()
    }

    #[test]
    fn test_b8zs_substitution() {
        let mut signal = ami("1000000001");
        let n = Scrambler::new(ScrambleKind::B8zs).apply(&mut signal);
        assert_eq!(n, 1);
        assert_eq!(as_i8(&signal), vec![1, 0, 0, 0, 1, -1, 0, -1, 1, -1]);
    }

    #[test]
    fn test_b8zs_after_negative_mark() {
        let mut signal = ami("11000000001");
        Scrambler::new(ScrambleKind::B8zs).apply(&mut signal);
        assert_eq!(
            as_i8(&signal),
            vec![1, -1, 0, 0, 0, -1, 1, 0, 1, -1, 1]
        );
    }

    #[test]
    fn test_b8zs_window_is_balanced() {
        let mut signal = ami("0000000000000000");
        let n = Scrambler::new(ScrambleKind::B8zs).apply(&mut signal);
        assert_eq!(n, 2);
        for window in signal.chunks(B8ZS_WINDOW) {
            let positive = window.iter().filter(|&&l| l == Level::Positive).count();
            let negative = window.iter().filter(|&&l| l == Level::Negative).count();
            assert_eq!((positive, negative), (2, 2));
        }
    }

    #[test]
    fn test_b8zs_back_to_back_windows() {
        // Both windows follow the last pulse (-1), so they get the same code
        let mut signal = ami("0000000000000000");
        Scrambler::new(ScrambleKind::B8zs).apply(&mut signal);
        assert_eq!(
            as_i8(&signal),
            vec![0, 0, 0, -1, 1, 0, 1, -1, 0, 0, 0, -1, 1, 0, 1, -1]
        );
        assert_eq!(violations(&signal).len(), 4);
    }

    #[test]
    fn test_b8zs_leaves_short_runs() {
        let mut signal = ami("1000000010000000");
        let before = signal.clone();
        let n = Scrambler::new(ScrambleKind::B8zs).apply(&mut signal);
        assert_eq!(n, 0);
        assert_eq!(signal, before);
    }

    #[test]
    fn test_hdb3_odd_marks() {
        let mut signal = ami("1000010000");
        let n = Scrambler::new(ScrambleKind::Hdb3).apply(&mut signal);
        assert_eq!(n, 2);
        assert_eq!(as_i8(&signal), vec![1, 0, 0, 0, 1, -1, 0, 0, 0, -1]);
    }

    #[test]
    fn test_hdb3_even_marks_and_repolarization() {
        let mut signal = ami("00001100001");
        Scrambler::new(ScrambleKind::Hdb3).apply(&mut signal);
        assert_eq!(
            as_i8(&signal),
            vec![1, 0, 0, 1, -1, 1, -1, 0, 0, -1, 1]
        );
    }

    #[test]
    fn test_trailing_partial_window_untouched() {
        let mut signal = ami("1000");
        Scrambler::new(ScrambleKind::Hdb3).apply(&mut signal);
        assert_eq!(as_i8(&signal), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_none_is_identity() {
        let mut signal = ami("100000000000");
        let before = signal.clone();
        assert_eq!(Scrambler::new(ScrambleKind::None).apply(&mut signal), 0);
        assert_eq!(signal, before);
    }

    #[test]
    fn test_b8zs_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let bits = random_sparse_bits(&mut rng);
            let original = AmiEncoder.encode(&bits);
            let mut signal = original.clone();
            let n = Scrambler::new(ScrambleKind::B8zs).apply(&mut signal);

            assert!(longest_zero_run(&signal) < B8ZS_WINDOW);
            assert_eq!(violations(&signal).len(), 2 * n);

            // Every position that was a mark is still a mark
            for (before, after) in original.iter().zip(&signal) {
                if !before.is_zero() {
                    assert!(!after.is_zero());
                }
            }
            // Each substitution writes 4 pulses into a run of zeros
            let pulses = |levels: &[Level]| {
                levels.iter().filter(|l| !l.is_zero()).count()
            };
            assert_eq!(pulses(&signal[..]), pulses(&original[..]) + 4 * n);
        }
    }

    #[test]
    fn test_hdb3_properties() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let bits = random_sparse_bits(&mut rng);
            let mut signal = AmiEncoder.encode(&bits);
            let n = Scrambler::new(ScrambleKind::Hdb3).apply(&mut signal);

            assert!(longest_zero_run(&signal) < HDB3_WINDOW);

            // One violation per substitution, alternating in polarity
            let v = violations(&signal);
            assert_eq!(v.len(), n);
            for pair in v.windows(2) {
                assert_eq!(pair[0], pair[1].invert());
            }
        }
    }

    #[test]
    fn test_selection() {
        assert_eq!(ScrambleKind::from_code(2).unwrap(), ScrambleKind::Hdb3);
        assert!(ScrambleKind::from_code(3).is_err());
        assert_eq!("B8ZS".parse::<ScrambleKind>().unwrap(), ScrambleKind::B8zs);
        assert_eq!(ScrambleKind::default(), ScrambleKind::None);
    }
}
