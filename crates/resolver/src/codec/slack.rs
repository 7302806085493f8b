use alertsync_core::{ActionError, ActionType, SlackAction, SlackPostMessageAction};

use super::{Fields, VariantCodec, list_value, map_value};
use crate::block::PropertyBlock;

/// Codec for the `slack` block.
pub struct SlackCodec;

impl VariantCodec for SlackCodec {
    const TYPE: ActionType = ActionType::Slack;
    const DISCRIMINATOR: &'static str = "url";
    type Payload = SlackAction;

    fn to_payload(block: &PropertyBlock) -> Result<SlackAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(SlackAction {
            url: fields.required_str("url")?,
            fields: fields.string_map("fields")?,
        })
    }

    fn from_payload(payload: &SlackAction) -> PropertyBlock {
        PropertyBlock::new()
            .with("fields", map_value(&payload.fields))
            .with("url", payload.url.as_str())
    }
}

/// Codec for the `slackpostmessage` block.
pub struct SlackPostMessageCodec;

impl VariantCodec for SlackPostMessageCodec {
    const TYPE: ActionType = ActionType::SlackPostMessage;
    const DISCRIMINATOR: &'static str = "api_token";
    type Payload = SlackPostMessageAction;

    fn to_payload(block: &PropertyBlock) -> Result<SlackPostMessageAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(SlackPostMessageAction {
            api_token: fields.required_str("api_token")?,
            channels: fields.string_list("channels")?,
            fields: fields.string_map("fields")?,
            use_proxy: fields.bool_or("use_proxy", true)?,
        })
    }

    fn from_payload(payload: &SlackPostMessageAction) -> PropertyBlock {
        PropertyBlock::new()
            .with("api_token", payload.api_token.as_str())
            .with("channels", list_value(&payload.channels))
            .with("fields", map_value(&payload.fields))
            .with("use_proxy", payload.use_proxy)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn slack_fields_keep_every_pair() {
        let block = PropertyBlock::new()
            .with("url", "https://hooks.slack.com/services/T0/B0/X")
            .with("fields", json!({"Query": "{query_string}", "Link": "{url}"}));
        let slack = SlackCodec::to_payload(&block).unwrap();
        assert_eq!(slack.fields.len(), 2);
        assert_eq!(slack.fields["Link"], "{url}");
        assert_eq!(slack.fields["Query"], "{query_string}");

        let back = SlackCodec::from_payload(&slack);
        assert_eq!(back.get("fields"), block.get("fields"));
    }

    #[test]
    fn slack_requires_fields_map() {
        let block = PropertyBlock::new().with("url", "https://hooks.slack.com/x");
        let err = SlackCodec::to_payload(&block).unwrap_err();
        assert!(matches!(
            err,
            ActionError::InvalidFieldType {
                block: "slack",
                field: "fields",
                ..
            }
        ));
    }

    #[test]
    fn post_message_reads_channels_not_fields() {
        let block = PropertyBlock::new()
            .with("api_token", "xoxb-token")
            .with("channels", json!(["#ops", "#alerts"]))
            .with("fields", json!({"Events": "{events_str}"}));
        let spm = SlackPostMessageCodec::to_payload(&block).unwrap();
        assert_eq!(spm.channels, ["#ops", "#alerts"]);
        assert_eq!(spm.fields["Events"], "{events_str}");
        assert!(spm.use_proxy);
    }

    #[test]
    fn post_message_round_trip_without_proxy() {
        let mut spm = SlackPostMessageAction::new("xoxb-token", vec!["#b".into(), "#a".into()]);
        spm.use_proxy = false;
        spm.fields.insert("Link".into(), "{url}".into());

        let block = SlackPostMessageCodec::from_payload(&spm);
        assert_eq!(block.get("use_proxy"), Some(&json!(false)));
        assert_eq!(SlackPostMessageCodec::to_payload(&block).unwrap(), spm);
    }
}
