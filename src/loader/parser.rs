use serde::de::DeserializeOwned;
use std::fs;

use crate::error::Result;

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    log::debug!("Read {} bytes from '{}'.", data.len(), file_path);

    parse_json_str(&data)
}

/// Parses an in-memory JSON document into `T`.
pub fn parse_json_str<T: DeserializeOwned>(data: &str) -> Result<T> {
    let parsed_data: T = serde_json::from_str(data)?;
    Ok(parsed_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_file_is_io_error() {
        let result = parse_json_file::<serde_json::Value>("does_not_exist.json");
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let result = parse_json_str::<serde_json::Value>("{ not json");
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }
}
