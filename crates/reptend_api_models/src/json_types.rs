//! JSON DTOs shared by CLI and handler layers.
//!
//! Field names reproduce the wire format consumed by existing frontends:
//! camelCase for the expansion queries (`byExpansion`, `byNumerator`,
//! `beginRepeat`), the historical snake_case names for the sectioned view.
//! A `beginRepeat` of -1 means the expansion terminates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable schema version for JSON outputs.
pub const SCHEMA_VERSION: u8 = 1;

/// One numerator's membership in a shared-cycle group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberJson {
    pub numerator: u64,
    pub position: usize,
    pub begin_repeat: i64,
}

/// Per-numerator expansion metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NumeratorViewJson {
    /// Canonical digit sequence of the numerator's group.
    pub digits: String,
    /// The numerator's own-leading rotation of `digits`.
    pub expansion: String,
    pub position: usize,
    pub begin_repeat: i64,
}

/// Response body of the per-denominator grouping query.
///
/// Ordered maps keep re-serialization byte-identical call to call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionsJson {
    pub by_expansion: BTreeMap<String, Vec<GroupMemberJson>>,
    pub by_numerator: BTreeMap<u64, NumeratorViewJson>,
}

/// Response body of the single-fraction query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionRecordJson {
    pub numerator: u64,
    pub digits: String,
    pub position: usize,
    pub begin_repeat: i64,
}

/// Response body of the sectioned-expansion query. Historical field names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DecimalSectionsJson {
    pub fraction: String,
    pub non_repeating: String,
    pub repeating_1: String,
    pub repeating_complement: String,
    pub period_length: usize,
    pub repeating: usize,
    pub period: String,
}

/// One row of the flattened per-numerator listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedExpansionJson {
    pub numerator: u64,
    pub period: String,
    pub begin_repeat: i64,
}

/// Machine-readable error payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExpansionErrorJson {
    /// Stable error kind (currently always `InvalidInput`).
    pub kind: String,
    /// Human-readable message; may change between versions.
    pub message: String,
}

/// Error reply envelope emitted when a query is rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorReplyJson {
    pub schema_version: u8,
    pub ok: bool,
    pub error: ExpansionErrorJson,
}

impl ErrorReplyJson {
    /// Build an error reply with the current schema version.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            error: ExpansionErrorJson {
                kind: kind.into(),
                message: message.into(),
            },
        }
    }
}

macro_rules! impl_to_json {
    ($($ty:ty),* $(,)?) => {
        $(impl $ty {
            /// Serialize to a compact JSON string.
            pub fn to_json(&self) -> String {
                serde_json::to_string(self).unwrap_or_else(|e| {
                    format!(
                        r#"{{"schema_version":1,"ok":false,"error":{{"kind":"InternalError","message":"JSON serialization failed: {}"}}}}"#,
                        e
                    )
                })
            }

            /// Serialize to pretty JSON.
            pub fn to_json_pretty(&self) -> String {
                serde_json::to_string_pretty(self).unwrap_or_else(|e| {
                    format!(
                        r#"{{"schema_version":1,"ok":false,"error":{{"kind":"InternalError","message":"JSON serialization failed: {}"}}}}"#,
                        e
                    )
                })
            }
        })*
    };
}

impl_to_json!(
    ExpansionsJson,
    ExpansionRecordJson,
    DecimalSectionsJson,
    ErrorReplyJson,
);
