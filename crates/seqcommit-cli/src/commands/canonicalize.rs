//! Canonicalize command implementation.

use seqcommit_types::{Header, NmtRoot, SequencerBlock};
use serde_json::Value;

use super::RecordKind;
use crate::input::read_json_input;

pub fn run(kind: RecordKind, input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_json_input(input)?;

    let value: Value = match kind {
        RecordKind::Header => {
            let header = Header::from_json(&text).map_err(|e| format!("Invalid header: {}", e))?;
            serde_json::to_value(header)?
        }
        RecordKind::NmtRoot => {
            let root = NmtRoot::from_json(&text).map_err(|e| format!("Invalid NMT root: {}", e))?;
            serde_json::to_value(root)?
        }
        RecordKind::Block => {
            let block: SequencerBlock =
                serde_json::from_str(&text).map_err(|e| format!("Invalid block: {}", e))?;
            serde_json::to_value(block)?
        }
    };

    // serde_json::Value objects are key-sorted, so output is stable.
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}
