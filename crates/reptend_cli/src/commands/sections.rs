//! `sections` subcommand: prefix / cycle / complement view of one fraction.

use clap::Args;

use reptend_api_models::DecimalSectionsJson;
use reptend_engine::{decimal_sections, EngineError, DEFAULT_BASE};

use super::print_json;

#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Numerator (0 <= numerator < denominator)
    pub numerator: u64,

    /// Denominator (>= 2)
    pub denominator: u64,

    /// Numeric base for the expansion (2 to 16)
    #[arg(long, default_value_t = DEFAULT_BASE)]
    pub base: u64,

    /// Pretty-print the JSON body
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn run(args: SectionsArgs) -> Result<(), EngineError> {
    let sections = decimal_sections(args.numerator, args.denominator, args.base)?;
    print_json(&DecimalSectionsJson::from(&sections), args.pretty);
    Ok(())
}
