//! U256 command implementation.

use seqcommit_canonical::U256;
use serde_json::json;

use crate::output::{format_json, format_row};

pub fn run(value: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parsed: U256 = value
        .trim()
        .parse()
        .map_err(|e| format!("Invalid integer: {}", e))?;
    let be_bytes = hex::encode(parsed.to_be_bytes());

    if json_output {
        let out = json!({
            "canonical": parsed,
            "be_bytes": be_bytes,
        });
        println!("{}", format_json(&out));
    } else {
        println!("{}", format_row("CANONICAL", &parsed.to_string()));
        println!("{}", format_row("BE_BYTES", &be_bytes));
    }
    Ok(())
}
