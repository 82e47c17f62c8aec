use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoadError;
use crate::model::manifest::strip_bom;

/// Read the top-level tokens of a source data file.
///
/// The file must hold a JSON array. Its elements are returned untouched;
/// their structure only matters to the verb handlers.
pub async fn read_tokens(path: &Path) -> Result<Vec<Value>, LoadError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LoadError::FileMissing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(strip_bom(&text)).map_err(|source| LoadError::SourceFormat {
        path: path.to_path_buf(),
        source,
    })
}
