use alertsync_core::{
    ActionError, ActionType, DEFAULT_WEBHOOK_BODY_TEMPLATE, HttpMethod, WebhookAction,
};

use super::{Fields, VariantCodec, map_value};
use crate::block::PropertyBlock;

/// Codec for the `webhook` block.
pub struct WebhookCodec;

impl VariantCodec for WebhookCodec {
    const TYPE: ActionType = ActionType::Webhook;
    const DISCRIMINATOR: &'static str = "url";
    type Payload = WebhookAction;

    fn to_payload(block: &PropertyBlock) -> Result<WebhookAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(WebhookAction {
            body_template: fields.str_or("body_template", DEFAULT_WEBHOOK_BODY_TEMPLATE)?,
            headers: fields.string_map("headers")?,
            method: fields
                .parsed("method", "one of GET, POST, PUT", HttpMethod::parse)?
                .unwrap_or_default(),
            url: fields.required_str("url")?,
        })
    }

    fn from_payload(payload: &WebhookAction) -> PropertyBlock {
        PropertyBlock::new()
            .with("body_template", payload.body_template.as_str())
            .with("headers", map_value(&payload.headers))
            .with("method", payload.method.as_str())
            .with("url", payload.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_body_and_method_take_defaults() {
        let block = PropertyBlock::new()
            .with("headers", json!({"Content-Type": "application/json"}))
            .with("url", "https://example.org");
        let hook = WebhookCodec::to_payload(&block).unwrap();

        assert_eq!(hook.body_template, DEFAULT_WEBHOOK_BODY_TEMPLATE);
        assert_eq!(hook.method, HttpMethod::Post);
        assert_eq!(hook.url, "https://example.org");
        assert_eq!(hook.headers.len(), 1);
        assert_eq!(hook.headers["Content-Type"], "application/json");
    }

    #[test]
    fn method_is_validated() {
        let block = PropertyBlock::new()
            .with("headers", json!({}))
            .with("method", "PATCH")
            .with("url", "https://example.org");
        let err = WebhookCodec::to_payload(&block).unwrap_err();
        assert!(matches!(
            err,
            ActionError::InvalidFieldType {
                field: "method",
                ..
            }
        ));
    }

    #[test]
    fn round_trip_put() {
        let mut hook = WebhookAction::new("https://example.org/hook")
            .with_header("Authorization", "Bearer x")
            .with_header("Content-Type", "text/plain");
        hook.method = HttpMethod::Put;
        hook.body_template = "{alert_name}".into();

        let block = WebhookCodec::from_payload(&hook);
        assert_eq!(block.get("method"), Some(&json!("PUT")));
        assert_eq!(WebhookCodec::to_payload(&block).unwrap(), hook);
    }
}
