//! `expand` subcommand: the per-denominator grouping query.

use clap::Args;

use reptend_api_models::{ExpansionsJson, FormattedExpansionJson};
use reptend_engine::{compute_expansions, format_expansions, EngineError};

use super::print_json;

#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Denominator to expand (>= 2)
    pub denominator: u64,

    /// Restrict to these numerators (comma-separated) instead of all of
    /// 1..denominator
    #[arg(long, value_delimiter = ',')]
    pub numerators: Option<Vec<u64>>,

    /// Output shape: "grouped" (byExpansion/byNumerator) or "list"
    /// (flattened rows sorted by numerator)
    #[arg(long, default_value = "grouped")]
    pub format: String,

    /// Pretty-print the JSON body
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn run(args: ExpandArgs) -> Result<(), EngineError> {
    let expansions = compute_expansions(args.denominator, args.numerators.as_deref())?;
    match args.format.as_str() {
        "list" => {
            let rows = format_expansions(&expansions)?;
            let body: Vec<FormattedExpansionJson> =
                rows.iter().map(FormattedExpansionJson::from).collect();
            print_json(&body, args.pretty);
        }
        _ => {
            let body = ExpansionsJson::from(&expansions);
            print_json(&body, args.pretty);
        }
    }
    Ok(())
}
