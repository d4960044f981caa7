//! Commit command implementation.

use seqcommit_types::{Commitment, Committable, Header, NmtRoot};
use serde_json::json;
use tracing::info;

use super::CommitKind;
use crate::input::read_json_input;
use crate::output::{format_json, format_row};

pub fn run(
    kind: CommitKind,
    input: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_json_input(input)?;

    let (tag, commitment) = match kind {
        CommitKind::Header => (Header::TAG, commit_record::<Header>(&text, Header::from_json)?),
        CommitKind::NmtRoot => (
            NmtRoot::TAG,
            commit_record::<NmtRoot>(&text, NmtRoot::from_json)?,
        ),
    };
    info!(tag, %commitment, "computed commitment");

    if json_output {
        let value = json!({
            "tag": tag,
            "commitment": commitment,
        });
        println!("{}", format_json(&value));
    } else {
        println!("{}", format_row("TAG", tag));
        println!("{}", format_row("COMMITMENT", &commitment.to_string()));
    }
    Ok(())
}

fn commit_record<T: Committable>(
    text: &str,
    decode: fn(&str) -> Result<T, seqcommit_types::DecodeError>,
) -> Result<Commitment, Box<dyn std::error::Error>> {
    let record = decode(text).map_err(|e| format!("Invalid record: {}", e))?;
    Ok(record.commit())
}
