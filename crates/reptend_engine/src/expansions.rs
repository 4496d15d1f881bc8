//! Per-denominator expansion grouping.
//!
//! For prime denominators, one long division seeds every numerator that
//! appears in its remainder orbit: each of those numerators' expansions is a
//! rotation of the same cycle, so their records are pre-populated from the
//! seed's remainder map instead of re-running division. This keeps the total
//! work at O(d) division steps for a full-reptend prime instead of O(d^2).
//!
//! For composite denominators every numerator divides for itself, and groups
//! form purely from identical digit strings.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::divide::{divide, Division};
use crate::error::EngineError;
use crate::number_theory::is_prime;
use crate::rotate::rotate;

/// One numerator's membership in a `by_expansion` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub numerator: u64,
    /// 1-based offset into the group's canonical digit sequence where this
    /// numerator's own expansion begins. Always 1 outside prime cycles.
    pub position: usize,
    /// Where repetition begins within the expansion; `None` if it terminates.
    pub cycle_start: Option<usize>,
}

/// Everything known about one numerator's expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeratorView {
    /// Canonical digit sequence of the numerator's group.
    pub digits: String,
    /// The numerator's own-leading view: `digits` rotated to `position`.
    pub expansion: String,
    pub position: usize,
    pub cycle_start: Option<usize>,
}

/// Result of the per-denominator grouping query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansions {
    pub denominator: u64,
    /// Whether the denominator is prime (real primality test, not a table).
    pub prime: bool,
    /// Canonical digit sequence -> members, sorted ascending by numerator.
    pub by_expansion: BTreeMap<String, Vec<GroupMember>>,
    /// Numerator -> its expansion metadata, for the requested numerators only.
    pub by_numerator: BTreeMap<u64, NumeratorView>,
}

/// Single-fraction expansion metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionRecord {
    pub numerator: u64,
    /// The numerator's own-leading digit sequence.
    pub digits: String,
    /// 1-based offset of this expansion within its group's canonical sequence.
    pub position: usize,
    pub cycle_start: Option<usize>,
}

/// Record pending rotation into its own-leading view.
struct SeededRecord {
    digits: String,
    position: usize,
    cycle_start: Option<usize>,
}

/// Compute and group the expansions of `numerators / denominator`.
///
/// `numerators` defaults to all of `1..denominator`; an explicit list is
/// validated against `[1, denominator)`, then sorted and de-duplicated.
/// Pure function of its inputs; all working state is local to the call.
pub fn compute_expansions(
    denominator: u64,
    numerators: Option<&[u64]>,
) -> Result<Expansions, EngineError> {
    if denominator < 2 {
        return Err(EngineError::DenominatorTooSmall(denominator));
    }
    let numerators = requested_numerators(denominator, numerators)?;
    let prime = is_prime(denominator);

    let mut seeded: FxHashMap<u64, SeededRecord> = FxHashMap::default();
    for &numerator in &numerators {
        if seeded.contains_key(&numerator) {
            continue;
        }
        let division = divide(numerator, denominator)?;
        seed_records(&mut seeded, division, numerator, prime);
    }

    let mut by_expansion: BTreeMap<String, Vec<GroupMember>> = BTreeMap::new();
    let mut by_numerator: BTreeMap<u64, NumeratorView> = BTreeMap::new();
    for &numerator in &numerators {
        // Every requested numerator was seeded above; a missing entry would
        // mean the remainder orbit bookkeeping is broken.
        let Some(record) = seeded.get(&numerator) else {
            continue;
        };
        let expansion = if record.position == 1 {
            record.digits.clone()
        } else {
            rotate(&record.digits, record.position)?
        };
        by_expansion
            .entry(record.digits.clone())
            .or_default()
            .push(GroupMember {
                numerator,
                position: record.position,
                cycle_start: record.cycle_start,
            });
        by_numerator.insert(
            numerator,
            NumeratorView {
                digits: record.digits.clone(),
                expansion,
                position: record.position,
                cycle_start: record.cycle_start,
            },
        );
    }

    // Members were pushed in ascending numerator order already; the sort is
    // the contract, not an accident of insertion order.
    for members in by_expansion.values_mut() {
        members.sort_by_key(|member| member.numerator);
    }

    debug!(
        denominator,
        prime,
        groups = by_expansion.len(),
        numerators = by_numerator.len(),
        "grouped expansions"
    );

    Ok(Expansions {
        denominator,
        prime,
        by_expansion,
        by_numerator,
    })
}

/// Expansion of a single fraction `numerator / denominator`.
///
/// The returned `position` locates this expansion within the canonical
/// sequence of its group: for a prime denominator the group's seed is the
/// smallest numerator in the remainder orbit, exactly as the full grouping
/// query would choose it. Composite denominators are their own seed.
pub fn compute_single_expansion(
    numerator: u64,
    denominator: u64,
) -> Result<ExpansionRecord, EngineError> {
    if denominator < 2 {
        return Err(EngineError::DenominatorTooSmall(denominator));
    }
    if numerator == 0 || numerator >= denominator {
        return Err(EngineError::NumeratorOutOfRange {
            numerator,
            denominator,
        });
    }

    let own = divide(numerator, denominator)?;
    if is_prime(denominator) {
        let seed = own
            .remainder_positions
            .keys()
            .copied()
            .min()
            .unwrap_or(numerator);
        if seed != numerator {
            let canonical = divide(seed, denominator)?;
            // The two orbits are the same cycle, so the numerator must appear
            // in the seed's remainder map; fall through if it somehow doesn't.
            if let Some(&position) = canonical.remainder_positions.get(&numerator) {
                return Ok(ExpansionRecord {
                    numerator,
                    digits: own.digits,
                    position,
                    cycle_start: own.cycle_start,
                });
            }
        }
    }
    Ok(ExpansionRecord {
        numerator,
        digits: own.digits,
        position: 1,
        cycle_start: own.cycle_start,
    })
}

fn requested_numerators(
    denominator: u64,
    numerators: Option<&[u64]>,
) -> Result<Vec<u64>, EngineError> {
    let mut numerators = match numerators {
        Some(explicit) => {
            for &numerator in explicit {
                if numerator == 0 || numerator >= denominator {
                    return Err(EngineError::NumeratorOutOfRange {
                        numerator,
                        denominator,
                    });
                }
            }
            explicit.to_vec()
        }
        None => (1..denominator).collect(),
    };
    numerators.sort_unstable();
    numerators.dedup();
    Ok(numerators)
}

/// Record the seed numerator's expansion and, for prime denominators, every
/// other numerator in its remainder orbit (same cycle, different offset).
fn seed_records(
    seeded: &mut FxHashMap<u64, SeededRecord>,
    division: Division,
    numerator: u64,
    prime: bool,
) {
    if prime {
        for (&orbit_numerator, &position) in &division.remainder_positions {
            seeded.insert(
                orbit_numerator,
                SeededRecord {
                    digits: division.digits.clone(),
                    position,
                    cycle_start: division.cycle_start,
                },
            );
        }
    } else {
        seeded.insert(
            numerator,
            SeededRecord {
                digits: division.digits,
                position: 1,
                cycle_start: division.cycle_start,
            },
        );
    }
}
