use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The REST verb applied to the records of a load instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verb {
    /// Delete the resource named by the API path
    #[serde(alias = "delete", alias = "DELETE")]
    Delete,
    /// Fetch one or all records. Recognized, but nothing handles it.
    #[serde(alias = "get", alias = "GET")]
    Get,
    /// Add the record in the body of the message
    #[serde(alias = "post", alias = "POST")]
    Post,
    /// Add or update the record in the body at the keyed URL
    #[default]
    #[serde(alias = "put", alias = "PUT")]
    Put,
}

impl Verb {
    /// Whether the dispatcher has a handler for this verb
    pub fn is_supported(self) -> bool {
        !matches!(self, Verb::Get)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Delete => "Delete",
            Verb::Get => "Get",
            Verb::Post => "Post",
            Verb::Put => "Put",
        };
        f.write_str(name)
    }
}

/// One entry of the manifest: which file to replay, where, and how.
///
/// Field names follow the manifest's PascalCase spelling; camelCase spellings
/// are accepted as well. Missing strings default to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadInstruction {
    /// Resource path relative to the configured host
    #[serde(alias = "api")]
    pub api: String,
    /// JSON source file holding the records
    #[serde(alias = "path")]
    pub path: PathBuf,
    /// Comma-separated field names forming the resource key for Put
    #[serde(alias = "key")]
    pub key: String,
    #[serde(alias = "verb")]
    pub verb: Verb,
    #[serde(rename = "IsDisabled", alias = "isDisabled")]
    pub disabled: bool,
    /// Label printed with the elapsed time
    #[serde(alias = "message")]
    pub message: String,
}

impl LoadInstruction {
    pub fn new(api: impl Into<String>, path: impl Into<PathBuf>, verb: Verb) -> Self {
        Self {
            api: api.into(),
            path: path.into(),
            verb,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
