//! Action definition documents.
//!
//! An action is authored as a TOML or YAML document holding the scalar
//! attributes and one table per variant block:
//!
//! ```toml
//! repository = "sandbox"
//! name = "action-email-test"
//! type = "EmailAction"
//!
//! [email]
//! recipients = ["test@example.org"]
//! ```
//!
//! A block given as an array of tables (`[[email]]`) yields several
//! candidates. An optional `previous` table records the stored state with the
//! same shape.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use alertsync_core::ActionType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::PropertyBlock;
use crate::error::DocumentError;
use crate::resource::{BlockCandidates, ResourceData};

/// Serialization format of a definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Candidates {
    One(PropertyBlock),
    Many(Vec<PropertyBlock>),
}

impl Candidates {
    fn into_vec(self) -> Vec<PropertyBlock> {
        match self {
            Self::One(block) => vec![block],
            Self::Many(blocks) => blocks,
        }
    }
}

/// Block values stay untyped until their names are checked, so a stray
/// scalar key is reported by name rather than as a shape mismatch.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ActionDocument {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    action_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    repository: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    action_type: String,
    #[serde(default, skip_serializing)]
    previous: BTreeMap<String, Value>,
    #[serde(flatten)]
    blocks: BTreeMap<String, Value>,
}

fn is_block_name(name: &str) -> bool {
    ActionType::ALL.iter().any(|t| t.block_name() == name)
}

fn candidates(name: &str, value: Option<Value>) -> Result<Vec<PropertyBlock>, DocumentError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    serde_json::from_value::<Candidates>(value)
        .map(Candidates::into_vec)
        .map_err(|source| DocumentError::InvalidBlock {
            block: name.to_owned(),
            source,
        })
}

impl TryFrom<ActionDocument> for ResourceData {
    type Error = DocumentError;

    fn try_from(mut doc: ActionDocument) -> Result<Self, Self::Error> {
        let names: BTreeSet<String> = doc
            .blocks
            .keys()
            .chain(doc.previous.keys())
            .cloned()
            .collect();

        let mut data = ResourceData::new(doc.repository, doc.name, doc.action_type);
        data.id = doc.id;
        data.action_id = doc.action_id;

        for name in names {
            if !is_block_name(&name) {
                return Err(DocumentError::UnknownBlock(name));
            }
            let previous = candidates(&name, doc.previous.remove(&name))?;
            let new = candidates(&name, doc.blocks.remove(&name))?;
            data.set_block(name, BlockCandidates::planned(previous, new));
        }

        Ok(data)
    }
}

impl From<&ResourceData> for ActionDocument {
    fn from(data: &ResourceData) -> Self {
        let blocks = data
            .blocks()
            .filter(|(_, candidates)| !candidates.is_empty())
            .map(|(name, candidates)| {
                let authoritative = if candidates.new.is_empty() {
                    &candidates.previous
                } else {
                    &candidates.new
                };
                let value = match authoritative.as_slice() {
                    [single] => Value::from(single.clone()),
                    many => Value::Array(many.iter().cloned().map(Value::from).collect()),
                };
                (name.clone(), value)
            })
            .collect();

        Self {
            id: data.id.clone(),
            action_id: data.action_id.clone(),
            repository: data.repository.clone(),
            name: data.name.clone(),
            action_type: data.action_type.clone(),
            previous: BTreeMap::new(),
            blocks,
        }
    }
}

/// Parse a definition document into resource data.
///
/// Top-level blocks become planned candidates; blocks under `previous` become
/// stored candidates.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<ResourceData, DocumentError> {
    let doc: ActionDocument = match format {
        DocumentFormat::Toml => toml::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml_ng::from_str(content)?,
    };
    ResourceData::try_from(doc)
}

/// Read and parse a definition document, choosing the format by extension.
pub fn load_document(path: &Path) -> Result<ResourceData, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&content, format)
}

/// Render resource data as a definition document.
///
/// Each block is written from its planned candidates, or from stored state
/// when nothing is planned.
pub fn render_document(data: &ResourceData, format: DocumentFormat) -> Result<String, DocumentError> {
    let doc = ActionDocument::from(data);
    Ok(match format {
        DocumentFormat::Toml => toml::to_string(&doc)?,
        DocumentFormat::Yaml => serde_yaml_ng::to_string(&doc)?,
    })
}
