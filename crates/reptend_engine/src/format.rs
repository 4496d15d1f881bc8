//! Flattened, display-ready view of a grouping result.

use crate::error::EngineError;
use crate::expansions::Expansions;
use crate::rotate::rotate;

/// One row of the flattened listing: a numerator with its own-leading cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedExpansion {
    pub numerator: u64,
    /// The group's canonical digits rotated to this numerator's offset.
    pub period: String,
    pub cycle_start: Option<usize>,
}

/// Flatten every group into per-numerator rows, rotating each member's
/// canonical sequence to its own start, sorted ascending by numerator
/// (numeric sort, never lexical).
pub fn format_expansions(expansions: &Expansions) -> Result<Vec<FormattedExpansion>, EngineError> {
    let mut formatted = Vec::with_capacity(expansions.by_numerator.len());
    for (digits, members) in &expansions.by_expansion {
        for member in members {
            let period = if member.position == 1 {
                digits.clone()
            } else {
                rotate(digits, member.position)?
            };
            formatted.push(FormattedExpansion {
                numerator: member.numerator,
                period,
                cycle_start: member.cycle_start,
            });
        }
    }
    formatted.sort_by_key(|row| row.numerator);
    Ok(formatted)
}
