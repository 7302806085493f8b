//! Dispatch between resource data and canonical actions.

use alertsync_core::{Action, ActionError, ActionPayload, ActionType, RemoteAction};
use tracing::debug;

use crate::block::PropertyBlock;
use crate::codec::{
    EmailCodec, HumioRepoCodec, OpsGenieCodec, PagerDutyCodec, SlackCodec, SlackPostMessageCodec,
    VariantCodec, VictorOpsCodec, WebhookCodec,
};
use crate::resource::{BlockCandidates, ResourceData};
use crate::selector::select_block;

/// Build an [`Action`] of the given type from resource data.
///
/// Fails with [`ActionError::UnsupportedActionType`] for an unknown
/// discriminator and with [`ActionError::MissingVariantData`] when no
/// candidate block for the type carries data.
pub fn decode(action_type: &str, data: &ResourceData) -> Result<Action, ActionError> {
    let action_type: ActionType = action_type.parse()?;
    debug!(%action_type, name = %data.name, "decoding action");

    let payload = match action_type {
        ActionType::Email => ActionPayload::Email(decode_block::<EmailCodec>(data)?),
        ActionType::HumioRepo => ActionPayload::HumioRepo(decode_block::<HumioRepoCodec>(data)?),
        ActionType::OpsGenie => ActionPayload::OpsGenie(decode_block::<OpsGenieCodec>(data)?),
        ActionType::PagerDuty => ActionPayload::PagerDuty(decode_block::<PagerDutyCodec>(data)?),
        ActionType::Slack => ActionPayload::Slack(decode_block::<SlackCodec>(data)?),
        ActionType::SlackPostMessage => {
            ActionPayload::SlackPostMessage(decode_block::<SlackPostMessageCodec>(data)?)
        }
        ActionType::VictorOps => ActionPayload::VictorOps(decode_block::<VictorOpsCodec>(data)?),
        ActionType::Webhook => ActionPayload::Webhook(decode_block::<WebhookCodec>(data)?),
    };

    Ok(Action {
        id: data.action_id.clone(),
        name: data.name.clone(),
        payload,
    })
}

/// Decode using the type declared in the resource data itself.
pub fn decode_declared(data: &ResourceData) -> Result<Action, ActionError> {
    decode(&data.action_type, data)
}

/// Flatten an action into fresh resource data with no repository.
pub fn encode(action: &Action) -> ResourceData {
    let mut data = ResourceData::default();
    encode_into(action, &mut data);
    data
}

/// Write an action into existing resource data, as a read does.
///
/// Scalars are overwritten and the action's block becomes the only stored
/// block. The repository and composite id are left untouched.
pub fn encode_into(action: &Action, data: &mut ResourceData) {
    let action_type = action.action_type();
    debug!(%action_type, name = %action.name, "encoding action");

    data.action_id.clone_from(&action.id);
    data.name.clone_from(&action.name);
    data.action_type = action_type.as_str().to_owned();
    data.clear_blocks();

    let block = match &action.payload {
        ActionPayload::Email(p) => EmailCodec::from_payload(p),
        ActionPayload::HumioRepo(p) => HumioRepoCodec::from_payload(p),
        ActionPayload::OpsGenie(p) => OpsGenieCodec::from_payload(p),
        ActionPayload::PagerDuty(p) => PagerDutyCodec::from_payload(p),
        ActionPayload::Slack(p) => SlackCodec::from_payload(p),
        ActionPayload::SlackPostMessage(p) => SlackPostMessageCodec::from_payload(p),
        ActionPayload::VictorOps(p) => VictorOpsCodec::from_payload(p),
        ActionPayload::Webhook(p) => WebhookCodec::from_payload(p),
    };
    data.set_block(action_type.block_name(), BlockCandidates::stored(vec![block]));
}

/// Flatten an action exactly as the remote service returned it.
///
/// A type this version does not know is reported as
/// [`ActionError::UnsupportedActionType`] instead of being dropped.
pub fn encode_remote(remote: RemoteAction) -> Result<ResourceData, ActionError> {
    let action = Action::try_from(remote)?;
    Ok(encode(&action))
}

fn decode_block<C: VariantCodec>(data: &ResourceData) -> Result<C::Payload, ActionError> {
    let block_name = C::TYPE.block_name();
    let block: &PropertyBlock = data
        .block(block_name)
        .and_then(|candidates| select_block(candidates, C::DISCRIMINATOR))
        .ok_or(ActionError::MissingVariantData { block: block_name })?;
    C::to_payload(block)
}

#[cfg(test)]
mod tests {
    use alertsync_core::{
        DEFAULT_WEBHOOK_BODY_TEMPLATE, EmailAction, HttpMethod, SlackAction, WebhookAction,
    };
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_type_is_unsupported() {
        let data = ResourceData::new("sandbox", "x", "NotARealType");
        let err = decode("NotARealType", &data).unwrap_err();
        assert_eq!(err, ActionError::UnsupportedActionType("NotARealType".into()));
    }

    #[test]
    fn absent_block_is_missing_variant_data() {
        let data = ResourceData::new("sandbox", "x", "SlackAction").with_block(
            "webhook",
            BlockCandidates::stored(vec![PropertyBlock::new().with("url", "https://x")]),
        );
        let err = decode("SlackAction", &data).unwrap_err();
        assert_eq!(err, ActionError::MissingVariantData { block: "slack" });
    }

    #[test]
    fn empty_planned_candidates_are_missing_variant_data() {
        let data = ResourceData::new("sandbox", "x", "EmailAction").with_block(
            "email",
            BlockCandidates::planned(
                Vec::new(),
                vec![PropertyBlock::new().with("recipients", json!([]))],
            ),
        );
        let err = decode_declared(&data).unwrap_err();
        assert_eq!(err, ActionError::MissingVariantData { block: "email" });
    }

    #[test]
    fn webhook_defaults_scenario() {
        let data = ResourceData::new("sandbox", "hook", "WebhookAction").with_planned_block(
            "webhook",
            PropertyBlock::new()
                .with("headers", json!({"Content-Type": "application/json"}))
                .with("url", "https://example.org"),
        );
        let action = decode_declared(&data).unwrap();

        let expected = WebhookAction {
            body_template: DEFAULT_WEBHOOK_BODY_TEMPLATE.to_owned(),
            headers: [("Content-Type".to_owned(), "application/json".to_owned())].into(),
            method: HttpMethod::Post,
            url: "https://example.org".into(),
        };
        assert_eq!(action.payload, ActionPayload::Webhook(expected));
        assert_eq!(action.name, "hook");
        assert!(action.id.is_empty());
    }

    #[test]
    fn duplicate_candidates_pick_first_populated() {
        let data = ResourceData::new("sandbox", "mail", "EmailAction").with_block(
            "email",
            BlockCandidates::planned(
                Vec::new(),
                vec![
                    PropertyBlock::new().with("recipients", json!([])),
                    PropertyBlock::new().with("recipients", json!(["a@b.com"])),
                ],
            ),
        );
        let action = decode_declared(&data).unwrap();
        assert_eq!(
            action.payload,
            ActionPayload::Email(EmailAction {
                recipients: vec!["a@b.com".into()],
                ..EmailAction::default()
            })
        );
    }

    #[test]
    fn encode_into_keeps_repository_and_replaces_blocks() {
        let mut data = ResourceData::new("sandbox", "old-name", "WebhookAction").with_block(
            "webhook",
            BlockCandidates::stored(vec![PropertyBlock::new().with("url", "https://x")]),
        );
        data.id = "sandbox+old-name".into();

        let action = Action::new(
            "slack-test",
            ActionPayload::Slack(SlackAction {
                url: "https://hooks.slack.com/x".into(),
                fields: [("Link".to_owned(), "{url}".to_owned())].into(),
            }),
        )
        .with_id("remote-1");
        encode_into(&action, &mut data);

        assert_eq!(data.repository, "sandbox");
        assert_eq!(data.id, "sandbox+old-name");
        assert_eq!(data.action_id, "remote-1");
        assert_eq!(data.name, "slack-test");
        assert_eq!(data.action_type, "SlackAction");
        assert!(data.block("webhook").is_none());
        assert_eq!(data.block("slack").unwrap().previous.len(), 1);
    }

    #[test]
    fn encode_remote_rejects_unknown_types() {
        let remote = RemoteAction {
            name: "future".into(),
            action_type: "TeamsAction".into(),
            ..RemoteAction::default()
        };
        let err = encode_remote(remote).unwrap_err();
        assert_eq!(err, ActionError::UnsupportedActionType("TeamsAction".into()));
    }
}
