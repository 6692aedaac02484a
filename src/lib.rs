pub mod analysis;
pub mod error;
pub mod modulation;
pub mod phy;
pub mod pipeline;
pub mod ui;
pub mod utils;

pub use error::{SignalError, SignalResult};
pub use phy::{Bit, BitSequence, EncodingResult, Level, ScrambleKind, Scheme};
pub use pipeline::{InputLimits, InputSource, PipelineConfig, PipelineReport};
