//! `single` subcommand: one fraction's expansion metadata.

use clap::Args;

use reptend_api_models::ExpansionRecordJson;
use reptend_engine::{compute_single_expansion, EngineError};

use super::print_json;

#[derive(Args, Debug)]
pub struct SingleArgs {
    /// Numerator (1 <= numerator < denominator)
    pub numerator: u64,

    /// Denominator (>= 2)
    pub denominator: u64,

    /// Pretty-print the JSON body
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn run(args: SingleArgs) -> Result<(), EngineError> {
    let record = compute_single_expansion(args.numerator, args.denominator)?;
    print_json(&ExpansionRecordJson::from(&record), args.pretty);
    Ok(())
}
