use thiserror::Error;

/// Invalid-input failures raised by the engine.
///
/// Every variant is a caller mistake. Computation is deterministic and pure,
/// so a failed call fails identically on retry; callers must fix the input.
/// The engine never substitutes defaults for bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("denominator must be at least 2, got {0}")]
    DenominatorTooSmall(u64),
    #[error("denominator {denominator} does not fit base-{base} long division in 64 bits")]
    DenominatorTooLarge { denominator: u64, base: u64 },
    #[error("numerator {numerator} is outside [0, {denominator})")]
    NumeratorOutOfRange { numerator: u64, denominator: u64 },
    #[error("base must be in [2, 16], got {0}")]
    UnsupportedBase(u64),
    #[error("rotation position {position} is outside [1, {length}]")]
    RotationOutOfRange { position: usize, length: usize },
}

impl EngineError {
    /// Stable machine-readable kind for the JSON error reply.
    /// All variants share one taxonomy: the caller sent invalid input.
    pub fn kind(&self) -> &'static str {
        "InvalidInput"
    }
}
