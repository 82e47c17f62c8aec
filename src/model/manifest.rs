use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::ManifestError;
use crate::model::LoadInstruction;

/// Ordered list of load instructions driving a seeding run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    instructions: Vec<LoadInstruction>,
}

impl Manifest {
    pub fn new(instructions: Vec<LoadInstruction>) -> Self {
        Self { instructions }
    }

    /// Read and parse the manifest at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        strip_bom(&text).parse().map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject enabled instructions whose verb has no handler, before anything is sent.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let unsupported = self
            .instructions
            .iter()
            .enumerate()
            .find(|(_, instruction)| !instruction.disabled && !instruction.verb.is_supported());

        match unsupported {
            Some((position, instruction)) => Err(ManifestError::UnsupportedVerb {
                position,
                api: instruction.api.clone(),
                verb: instruction.verb,
            }),
            None => Ok(()),
        }
    }

    pub fn instructions(&self) -> &[LoadInstruction] {
        &self.instructions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoadInstruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl FromStr for Manifest {
    type Err = serde_json::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(text)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a LoadInstruction;
    type IntoIter = std::slice::Iter<'a, LoadInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Files saved by Windows tooling often start with a byte order mark
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verb;
    use std::io::Write;

    const MANIFEST: &str = r#"[
        { "Api": "api/regions", "Verb": "Delete", "Message": "Purge regions" },
        { "Api": "api/regions", "Path": "regions.json", "Key": "regionId", "Message": "Regions" },
        { "Api": "api/accounts", "Path": "accounts.json", "Verb": "Post", "IsDisabled": true, "Message": "Accounts" }
    ]"#;

    #[test]
    fn parses_instructions_in_order() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        assert_eq!(manifest.len(), 3);

        let apis: Vec<&str> = manifest.iter().map(|i| i.api.as_str()).collect();
        assert_eq!(apis, vec!["api/regions", "api/regions", "api/accounts"]);

        assert_eq!(manifest.instructions()[0].verb, Verb::Delete);
        assert_eq!(manifest.instructions()[1].verb, Verb::Put);
        assert!(manifest.instructions()[2].disabled);
        assert!(!manifest.is_empty());
        assert!(Manifest::default().is_empty());
    }

    #[test]
    fn load_reads_file_with_byte_order_mark() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}{}", MANIFEST).unwrap();

        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Manifest::load(dir.path().join("index.json")).unwrap_err();
        assert!(matches!(missing, ManifestError::Read { .. }));

        let malformed_path = dir.path().join("broken.json");
        std::fs::write(&malformed_path, r#"{ "Api": "not an array" }"#).unwrap();
        let malformed = Manifest::load(&malformed_path).unwrap_err();
        assert!(matches!(malformed, ManifestError::Parse { .. }));
    }

    #[test]
    fn validate_rejects_enabled_get() {
        let manifest: Manifest = r#"[
            { "Api": "api/users", "Path": "users.json", "Key": "id" },
            { "Api": "api/users", "Verb": "Get" }
        ]"#
        .parse()
        .unwrap();

        match manifest.validate() {
            Err(ManifestError::UnsupportedVerb { position, api, verb }) => {
                assert_eq!(position, 1);
                assert_eq!(api, "api/users");
                assert_eq!(verb, Verb::Get);
            }
            other => panic!("expected unsupported verb, got {:?}", other),
        }
    }

    #[test]
    fn validate_allows_disabled_get() {
        let manifest: Manifest = r#"[
            { "Api": "api/users", "Verb": "Get", "IsDisabled": true },
            { "Api": "api/users", "Verb": "Delete" }
        ]"#
        .parse()
        .unwrap();

        assert!(manifest.validate().is_ok());
    }
}
