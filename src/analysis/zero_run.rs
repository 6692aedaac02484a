// Longest run of zero-level symbols in a signal

use std::fmt;

use serde::Serialize;

use crate::phy::line_coding::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZeroRun {
    pub start: usize,
    pub count: usize,
}

impl fmt::Display for ZeroRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Longest zero sequence: {} zeros starting at position {}",
            self.count, self.start
        )
    }
}

/// `None` when the signal holds no zero level. Ties keep the first run.
pub fn longest_zero_run(levels: &[Level]) -> Option<ZeroRun> {
    let mut best: Option<ZeroRun> = None;
    let mut current_start = 0;
    let mut current_len = 0;

    for (i, level) in levels.iter().enumerate() {
        if !level.is_zero() {
            current_len = 0;
            continue;
        }
        if current_len == 0 {
            current_start = i;
        }
        current_len += 1;
        if best.is_none_or(|run| current_len > run.count) {
            best = Some(ZeroRun {
                start: current_start,
                count: current_len,
            });
        }
    }

    best
}
