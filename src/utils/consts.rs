/// Log level (overridable with RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Input limits
// ============================================================================

/// Maximum number of bits entering the line coder, also bounds the
/// quantizer output (samples * bits per sample)
pub const MAX_INPUT_LEN: usize = 999;

// ============================================================================
// Modulation Parameters
// ============================================================================

/// Largest supported PCM bit depth
pub const MAX_BITS_PER_SAMPLE: u32 = 16;

/// Default PCM bit depth
pub const DEFAULT_BITS_PER_SAMPLE: u32 = 3;

/// Delta modulation step size
pub const DELTA_STEP: f64 = 0.5;
