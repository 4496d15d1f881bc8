//! Conversions from engine results into the transport DTOs.
//!
//! The engine models a terminating expansion as `cycle_start: None`; the
//! wire format keeps the historical `-1` sentinel in `beginRepeat`.

use reptend_api_models::{
    DecimalSectionsJson, ErrorReplyJson, ExpansionRecordJson, ExpansionsJson,
    FormattedExpansionJson, GroupMemberJson, NumeratorViewJson,
};

use crate::error::EngineError;
use crate::expansions::{ExpansionRecord, Expansions, GroupMember, NumeratorView};
use crate::format::FormattedExpansion;
use crate::sections::DecimalSections;

fn begin_repeat(cycle_start: Option<usize>) -> i64 {
    match cycle_start {
        Some(position) => position as i64,
        None => -1,
    }
}

impl From<&GroupMember> for GroupMemberJson {
    fn from(member: &GroupMember) -> Self {
        Self {
            numerator: member.numerator,
            position: member.position,
            begin_repeat: begin_repeat(member.cycle_start),
        }
    }
}

impl From<&NumeratorView> for NumeratorViewJson {
    fn from(view: &NumeratorView) -> Self {
        Self {
            digits: view.digits.clone(),
            expansion: view.expansion.clone(),
            position: view.position,
            begin_repeat: begin_repeat(view.cycle_start),
        }
    }
}

impl From<&Expansions> for ExpansionsJson {
    fn from(expansions: &Expansions) -> Self {
        Self {
            by_expansion: expansions
                .by_expansion
                .iter()
                .map(|(digits, members)| {
                    (
                        digits.clone(),
                        members.iter().map(GroupMemberJson::from).collect(),
                    )
                })
                .collect(),
            by_numerator: expansions
                .by_numerator
                .iter()
                .map(|(&numerator, view)| (numerator, NumeratorViewJson::from(view)))
                .collect(),
        }
    }
}

impl From<&ExpansionRecord> for ExpansionRecordJson {
    fn from(record: &ExpansionRecord) -> Self {
        Self {
            numerator: record.numerator,
            digits: record.digits.clone(),
            position: record.position,
            begin_repeat: begin_repeat(record.cycle_start),
        }
    }
}

impl From<&DecimalSections> for DecimalSectionsJson {
    fn from(sections: &DecimalSections) -> Self {
        Self {
            fraction: sections.fraction.clone(),
            non_repeating: sections.non_repeating.clone(),
            repeating_1: sections.repeating.clone(),
            repeating_complement: sections.complement.clone(),
            period_length: sections.period_length,
            repeating: sections.repeating_length,
            period: sections.period.clone(),
        }
    }
}

impl From<&FormattedExpansion> for FormattedExpansionJson {
    fn from(row: &FormattedExpansion) -> Self {
        Self {
            numerator: row.numerator,
            period: row.period.clone(),
            begin_repeat: begin_repeat(row.cycle_start),
        }
    }
}

impl From<&EngineError> for ErrorReplyJson {
    fn from(error: &EngineError) -> Self {
        ErrorReplyJson::new(error.kind(), error.to_string())
    }
}
