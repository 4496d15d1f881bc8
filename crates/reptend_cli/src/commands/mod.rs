//! Subcommand handlers. One engine call per command.

pub mod expand;
pub mod sections;
pub mod single;

/// Print a JSON body, falling back to a minimal error object if
/// serialization itself fails.
pub(crate) fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(body) => println!("{}", body),
        Err(e) => {
            eprintln!("JSON serialization error: {}", e);
            println!(r#"{{"ok":false,"error":"JSON_SERIALIZATION_FAILED"}}"#);
        }
    }
}
