use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a JSON or YAML file into a typed struct. The format is picked by
/// extension; anything that is not .yaml/.yml is treated as JSON.
pub fn read_file<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("failed to read '{path}': {e}"))?;

    let is_yaml = Path::new(path)
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");

    let value: T = if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| format!("failed to parse '{path}': {e}"))?
    } else {
        serde_json::from_str(&contents).map_err(|e| format!("failed to parse '{path}': {e}"))?
    };
    Ok(value)
}

/// JSON piped on stdin, if any. None when stdin is a TTY (interactive).
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    Ok(Some(value))
}
