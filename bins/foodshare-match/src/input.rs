//! JSON document input from files or stdin.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Reads and decodes a JSON document; `-` reads stdin.
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .with_context(|| format!("Failed to read {what} from stdin"))?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {what} from {}", path.display()))?
    };

    serde_json::from_str(&content).with_context(|| format!("Invalid {what} JSON"))
}
