//! Decimal-expansion engine.
//!
//! Computes the base-10 (or base-b) long-division expansion of fractions,
//! detects where the repeating cycle begins, and groups numerators that
//! share the same cyclic digit sequence — for a prime denominator every
//! numerator in the reciprocal's remainder orbit reads the same cycle at a
//! different offset.
//!
//! Entry points:
//! - [`compute_expansions`]: group every numerator of a denominator
//! - [`compute_single_expansion`]: one fraction's expansion metadata
//! - [`decimal_sections`]: one fraction split into prefix / cycle / complement
//!
//! Every query is a pure, bounded computation over its own local state;
//! nothing is cached or shared between calls.

pub mod divide;
pub mod error;
pub mod expansions;
pub mod format;
pub mod json;
pub mod number_theory;
pub mod rotate;
pub mod sections;

pub use divide::{divide, divide_in_base, Division, DEFAULT_BASE, MAX_BASE};
pub use error::EngineError;
pub use expansions::{
    compute_expansions, compute_single_expansion, ExpansionRecord, Expansions, GroupMember,
    NumeratorView,
};
pub use format::{format_expansions, FormattedExpansion};
pub use number_theory::{factorize, is_coprime, is_prime, non_repeating_prefix};
pub use rotate::rotate;
pub use sections::{decimal_sections, decimal_sections_base10, DecimalSections};
