//! Converters between property blocks and typed action payloads.
//!
//! Each action type has a codec implementing [`VariantCodec`]. Decoding a
//! block produced by encoding a payload yields that payload again: list
//! fields keep their order and map fields keep every pair exactly once.

mod email;
mod humiorepo;
mod opsgenie;
mod pagerduty;
mod slack;
mod victorops;
mod webhook;

use std::collections::BTreeMap;

use alertsync_core::{ActionError, ActionType};
use serde_json::Value;

use crate::block::PropertyBlock;

pub use email::EmailCodec;
pub use humiorepo::HumioRepoCodec;
pub use opsgenie::OpsGenieCodec;
pub use pagerduty::PagerDutyCodec;
pub use slack::{SlackCodec, SlackPostMessageCodec};
pub use victorops::VictorOpsCodec;
pub use webhook::WebhookCodec;

/// Symmetric conversion between one variant block and its payload type.
pub trait VariantCodec {
    /// The action type this codec handles.
    const TYPE: ActionType;

    /// Required attribute used to tell a real block from an empty duplicate.
    const DISCRIMINATOR: &'static str;

    /// The typed payload.
    type Payload;

    /// Build the payload from a selected block.
    ///
    /// Optional attributes the block omits take the schema defaults the
    /// configuration engine would have applied.
    fn to_payload(block: &PropertyBlock) -> Result<Self::Payload, ActionError>;

    /// Flatten the payload into a block. Every attribute is written.
    fn from_payload(payload: &Self::Payload) -> PropertyBlock;
}

/// Typed attribute access for one block, reporting failures against the
/// block's field name.
pub(crate) struct Fields<'a> {
    block_name: &'static str,
    block: &'a PropertyBlock,
}

impl<'a> Fields<'a> {
    pub(crate) fn new<C: VariantCodec>(block: &'a PropertyBlock) -> Self {
        Self {
            block_name: C::TYPE.block_name(),
            block,
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> ActionError {
        ActionError::InvalidFieldType {
            block: self.block_name,
            field,
            expected,
        }
    }

    pub(crate) fn required_str(&self, field: &'static str) -> Result<String, ActionError> {
        self.optional_str(field)?
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    pub(crate) fn optional_str(&self, field: &'static str) -> Result<Option<String>, ActionError> {
        match self.block.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.invalid(field, "a string")),
        }
    }

    pub(crate) fn str_or(&self, field: &'static str, default: &str) -> Result<String, ActionError> {
        Ok(self
            .optional_str(field)?
            .unwrap_or_else(|| default.to_owned()))
    }

    pub(crate) fn bool_or(&self, field: &'static str, default: bool) -> Result<bool, ActionError> {
        match self.block.get(field) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.invalid(field, "a boolean")),
        }
    }

    pub(crate) fn string_list(&self, field: &'static str) -> Result<Vec<String>, ActionError> {
        let Some(Value::Array(items)) = self.block.get(field) else {
            return Err(self.invalid(field, "a list of strings"));
        };
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| self.invalid(field, "a list of strings"))
            })
            .collect()
    }

    pub(crate) fn string_map(
        &self,
        field: &'static str,
    ) -> Result<BTreeMap<String, String>, ActionError> {
        let Some(Value::Object(map)) = self.block.get(field) else {
            return Err(self.invalid(field, "a map of strings"));
        };
        map.iter()
            .map(|(key, value)| {
                value
                    .as_str()
                    .map(|v| (key.clone(), v.to_owned()))
                    .ok_or_else(|| self.invalid(field, "a map of strings"))
            })
            .collect()
    }

    /// Parse a string attribute with `parse`, rejecting unknown values.
    pub(crate) fn parsed<T>(
        &self,
        field: &'static str,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, ActionError> {
        self.optional_str(field)?
            .map(|s| parse(&s).ok_or_else(|| self.invalid(field, expected)))
            .transpose()
    }

    /// Like [`parsed`](Self::parsed), but the attribute must be present.
    pub(crate) fn required_parsed<T>(
        &self,
        field: &'static str,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ActionError> {
        self.parsed(field, expected, parse)?
            .ok_or_else(|| self.invalid(field, expected))
    }
}

/// Encode a string list as a block attribute value.
pub(crate) fn list_value(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

/// Encode a string map as a block attribute value.
pub(crate) fn map_value(map: &BTreeMap<String, String>) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields(block: &PropertyBlock) -> Fields<'_> {
        Fields::new::<WebhookCodec>(block)
    }

    #[test]
    fn required_str_reports_missing_field() {
        let block = PropertyBlock::new();
        let err = fields(&block).required_str("url").unwrap_err();
        assert_eq!(
            err,
            ActionError::InvalidFieldType {
                block: "webhook",
                field: "url",
                expected: "a string",
            }
        );
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        let block = PropertyBlock::new()
            .with("url", 5)
            .with("headers", json!({"a": 1}))
            .with("list", json!(["a", 2]))
            .with("flag", "yes");
        let f = fields(&block);
        assert!(f.required_str("url").is_err());
        assert!(f.string_map("headers").is_err());
        assert!(f.string_list("list").is_err());
        assert!(f.bool_or("flag", true).is_err());
    }

    #[test]
    fn defaults_apply_only_when_absent() {
        let block = PropertyBlock::new()
            .with("set", "value")
            .with("null", Value::Null)
            .with("flag", false);
        let f = fields(&block);
        assert_eq!(f.str_or("set", "d").unwrap(), "value");
        assert_eq!(f.str_or("null", "d").unwrap(), "d");
        assert_eq!(f.str_or("absent", "d").unwrap(), "d");
        assert!(!f.bool_or("flag", true).unwrap());
        assert!(f.bool_or("absent", true).unwrap());
    }

    #[test]
    fn collections_round_trip_through_values() {
        let list = vec!["b".to_owned(), "a".to_owned()];
        let map: BTreeMap<String, String> = [("k".to_owned(), "v".to_owned())].into();
        let block = PropertyBlock::new()
            .with("list", list_value(&list))
            .with("map", map_value(&map));
        let f = fields(&block);
        assert_eq!(f.string_list("list").unwrap(), list);
        assert_eq!(f.string_map("map").unwrap(), map);
    }
}
