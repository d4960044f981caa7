//! Input helpers shared by commands.

use std::io::{self, Read};

use tracing::debug;

/// Reads JSON text from a file, or from stdin when no path is given.
pub fn read_json_input(input: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => {
            debug!(%path, "reading input file");
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
            Ok(text)
        }
        None => {
            debug!("reading input from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
