//! Transport models for the expansion engine's JSON surface.
//!
//! This crate intentionally keeps transport models independent from engine
//! internals; the engine crate owns the conversions into these types.

mod json_types;

pub use json_types::{
    DecimalSectionsJson, ErrorReplyJson, ExpansionErrorJson, ExpansionRecordJson, ExpansionsJson,
    FormattedExpansionJson, GroupMemberJson, NumeratorViewJson, SCHEMA_VERSION,
};
