// Physical layer: line coding and zero-substitution scrambling

pub mod bits;
pub mod encoder;
pub mod line_coding;
pub mod scrambling;

pub use bits::{Bit, BitSequence};
pub use encoder::{EncodingResult, SignalEncoder};
pub use line_coding::{Level, LineCode, Scheme};
pub use scrambling::ScrambleKind;
