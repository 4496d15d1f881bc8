//! Sectioned view of a single expansion.
//!
//! Splits the digit stream into the non-repeating prefix, the repeating run,
//! and the complement half of the cycle. The prefix length comes from the
//! base's prime factorization (`non_repeating_prefix`), not from inspecting
//! digits. The complement split is the Midy property: once the running
//! remainder and the remainder that opened the cycle sum to the denominator,
//! the remaining digits complement the first half of the cycle.

use rustc_hash::FxHashSet;

use crate::divide::{digit_char, DEFAULT_BASE, MAX_BASE};
use crate::error::EngineError;
use crate::number_theory::non_repeating_prefix;

/// A fraction's expansion split into its structural sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalSections {
    /// `"numerator / denominator"`, as displayed.
    pub fraction: String,
    /// Digits before the cycle (the whole expansion when it terminates).
    pub non_repeating: String,
    /// First half of the repeating cycle, up to the complement point.
    pub repeating: String,
    /// Complement half of the cycle; empty when the cycle has none.
    pub complement: String,
    /// Total number of digits emitted.
    pub period_length: usize,
    /// Number of digits in the repeating cycle (0 when terminating).
    pub repeating_length: usize,
    /// All sections joined, i.e. the full expansion.
    pub period: String,
}

/// Expand `numerator / denominator` in `base` and section the digit stream.
pub fn decimal_sections(
    numerator: u64,
    denominator: u64,
    base: u64,
) -> Result<DecimalSections, EngineError> {
    if denominator < 2 {
        return Err(EngineError::DenominatorTooSmall(denominator));
    }
    if !(2..=MAX_BASE).contains(&base) {
        return Err(EngineError::UnsupportedBase(base));
    }
    if denominator > u64::MAX / base {
        return Err(EngineError::DenominatorTooLarge { denominator, base });
    }
    if numerator >= denominator {
        return Err(EngineError::NumeratorOutOfRange {
            numerator,
            denominator,
        });
    }

    let prefix = non_repeating_prefix(denominator, base);

    let mut sections = [String::new(), String::new(), String::new()];
    let mut section = 0usize;
    let mut start_repeat = 0u64;
    let mut remainder = numerator;
    let mut seen = FxHashSet::default();
    let mut length = 0usize;

    while remainder != 0 && seen.insert(remainder) {
        if Some(length) == prefix {
            section = 1;
            // The remainder that opens the cycle; its complement marks the
            // switch to the mirrored half.
            start_repeat = remainder;
        }
        let digit = remainder * base / denominator;
        sections[section].push(digit_char(digit));
        remainder = remainder * base - digit * denominator;
        if section == 1 && remainder + start_repeat == denominator {
            section = 2;
        }
        length += 1;
    }

    // Non-reduced fractions can resolve before the denominator's generic
    // prefix length is reached (6/12 terminates after one digit), so the
    // subtraction must saturate.
    let repeating_length = match prefix {
        Some(prefix_length) => length.saturating_sub(prefix_length),
        None => 0,
    };
    let [non_repeating, repeating, complement] = sections;
    let mut period = String::with_capacity(length);
    period.push_str(&non_repeating);
    period.push_str(&repeating);
    period.push_str(&complement);

    Ok(DecimalSections {
        fraction: format!("{} / {}", numerator, denominator),
        non_repeating,
        repeating,
        complement,
        period_length: length,
        repeating_length,
        period,
    })
}

/// Convenience wrapper for the default base.
pub fn decimal_sections_base10(
    numerator: u64,
    denominator: u64,
) -> Result<DecimalSections, EngineError> {
    decimal_sections(numerator, denominator, DEFAULT_BASE)
}
