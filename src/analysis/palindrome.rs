// Longest palindromic substring of a bit sequence (Manacher's algorithm)

use std::fmt;

use serde::Serialize;

use crate::phy::bits::Bit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palindrome {
    pub start: usize,
    pub length: usize,
    pub text: String,
}

impl fmt::Display for Palindrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Longest Palindrome: {} (Length: {})", self.text, self.length)
    }
}

/// Linear time. Ties keep the leftmost palindrome. Any non-empty input
/// yields at least length 1; empty input yields length 0.
pub fn longest_palindrome(bits: &[Bit]) -> Palindrome {
    if bits.is_empty() {
        return Palindrome {
            start: 0,
            length: 0,
            text: String::new(),
        };
    }

    // Interleave separators: even indices are gaps, odd indices are bits.
    // Only bit positions are compared, so gaps need no sentinel value.
    let n = 2 * bits.len() + 1;
    let symbol = |i: usize| if i % 2 == 1 { Some(bits[i / 2]) } else { None };

    let mut radius = vec![0usize; n];
    let mut center = 0usize;
    let mut right = 0usize;
    let mut best_center = 1usize;
    let mut best_radius = 1usize;

    for i in 0..n {
        let mut r = if i < right {
            radius[2 * center - i].min(right - i)
        } else {
            0
        };
        while i >= r + 1 && i + r + 1 < n && symbol(i - r - 1) == symbol(i + r + 1) {
            r += 1;
        }
        radius[i] = r;

        if i + r > right {
            center = i;
            right = i + r;
        }
        if r > best_radius {
            best_center = i;
            best_radius = r;
        }
    }

    // Radius in the interleaved sequence equals the original length
    let start = (best_center - best_radius) / 2;
    let length = best_radius;
    let text = bits[start..start + length]
        .iter()
        .map(|bit| bit.to_char())
        .collect();

    Palindrome { start, length, text }
}
