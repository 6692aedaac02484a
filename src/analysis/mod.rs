//! Structural analysis over the intermediate and final sequences

pub mod palindrome;
pub mod zero_run;

pub use palindrome::{Palindrome, longest_palindrome};
pub use zero_run::{ZeroRun, longest_zero_run};
