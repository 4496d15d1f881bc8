//! Cyclic rotation between a group's canonical digit sequence and a
//! member's own-leading view of the same cycle.

use crate::error::EngineError;

/// Return `digits` as it reads starting from the 1-based `position`,
/// wrapping cyclically: `rotate(seq, pos) = seq[pos-1..] + seq[..pos-1]`.
///
/// `position` must satisfy `1 <= position <= digits.len()`.
pub fn rotate(digits: &str, position: usize) -> Result<String, EngineError> {
    if position == 0 || position > digits.len() {
        return Err(EngineError::RotationOutOfRange {
            position,
            length: digits.len(),
        });
    }
    // Digit strings are ASCII, so byte slicing is char-safe.
    let split = position - 1;
    let mut rotated = String::with_capacity(digits.len());
    rotated.push_str(&digits[split..]);
    rotated.push_str(&digits[..split]);
    Ok(rotated)
}
