//! JSON shape of actions as exchanged with the remote service.
//!
//! The remote API carries the type discriminator as an open string and one
//! optional settings section per type. Map-valued settings travel as entry
//! lists. [`Action`] converts to and from this shape; the conversion from the
//! wire rejects discriminators this version does not know.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::{
    Action, ActionPayload, ActionType, DEFAULT_WEBHOOK_BODY_TEMPLATE, EmailAction, HttpMethod,
    HumioRepoAction, OpsGenieAction, PagerDutyAction, SlackAction, SlackPostMessageAction,
    VictorOpsAction, WebhookAction,
};
use crate::error::ActionError;

/// One Slack message field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackFieldEntry {
    pub field_name: String,
    pub value: String,
}

/// One HTTP header of a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpHeaderEntry {
    pub header: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSlackAction {
    pub url: String,
    #[serde(default)]
    pub fields: Vec<SlackFieldEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSlackPostMessageAction {
    pub api_token: String,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub fields: Vec<SlackFieldEntry>,
    #[serde(default = "default_use_proxy")]
    pub use_proxy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteWebhookAction {
    #[serde(default = "default_body_template")]
    pub body_template: String,
    #[serde(default)]
    pub headers: Vec<HttpHeaderEntry>,
    #[serde(default)]
    pub method: HttpMethod,
    pub url: String,
}

fn default_use_proxy() -> bool {
    true
}

fn default_body_template() -> String {
    DEFAULT_WEBHOOK_BODY_TEMPLATE.to_owned()
}

/// An action as returned by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub action_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_action: Option<EmailAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humio_repo_action: Option<HumioRepoAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ops_genie_action: Option<OpsGenieAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pager_duty_action: Option<PagerDutyAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_action: Option<RemoteSlackAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_post_message_action: Option<RemoteSlackPostMessageAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victor_ops_action: Option<VictorOpsAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_action: Option<RemoteWebhookAction>,
}

impl RemoteAction {
    /// Returns `true` for the zero value some endpoints return instead of a
    /// not-found error.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn slack_fields_from_entries(entries: Vec<SlackFieldEntry>) -> BTreeMap<String, String> {
    entries
        .into_iter()
        .map(|e| (e.field_name, e.value))
        .collect()
}

fn slack_fields_to_entries(fields: &BTreeMap<String, String>) -> Vec<SlackFieldEntry> {
    fields
        .iter()
        .map(|(field_name, value)| SlackFieldEntry {
            field_name: field_name.clone(),
            value: value.clone(),
        })
        .collect()
}

impl TryFrom<RemoteAction> for Action {
    type Error = ActionError;

    fn try_from(remote: RemoteAction) -> Result<Self, Self::Error> {
        let action_type: ActionType = remote.action_type.parse()?;
        let missing = || ActionError::MissingVariantData {
            block: action_type.block_name(),
        };

        let payload = match action_type {
            ActionType::Email => ActionPayload::Email(remote.email_action.ok_or_else(missing)?),
            ActionType::HumioRepo => {
                ActionPayload::HumioRepo(remote.humio_repo_action.ok_or_else(missing)?)
            }
            ActionType::OpsGenie => {
                ActionPayload::OpsGenie(remote.ops_genie_action.ok_or_else(missing)?)
            }
            ActionType::PagerDuty => {
                ActionPayload::PagerDuty(remote.pager_duty_action.ok_or_else(missing)?)
            }
            ActionType::Slack => {
                let slack = remote.slack_action.ok_or_else(missing)?;
                ActionPayload::Slack(SlackAction {
                    url: slack.url,
                    fields: slack_fields_from_entries(slack.fields),
                })
            }
            ActionType::SlackPostMessage => {
                let spm = remote.slack_post_message_action.ok_or_else(missing)?;
                ActionPayload::SlackPostMessage(SlackPostMessageAction {
                    api_token: spm.api_token,
                    channels: spm.channels,
                    fields: slack_fields_from_entries(spm.fields),
                    use_proxy: spm.use_proxy,
                })
            }
            ActionType::VictorOps => {
                ActionPayload::VictorOps(remote.victor_ops_action.ok_or_else(missing)?)
            }
            ActionType::Webhook => {
                let hook = remote.webhook_action.ok_or_else(missing)?;
                ActionPayload::Webhook(WebhookAction {
                    body_template: hook.body_template,
                    headers: hook
                        .headers
                        .into_iter()
                        .map(|h| (h.header, h.value))
                        .collect(),
                    method: hook.method,
                    url: hook.url,
                })
            }
        };

        Ok(Action {
            id: remote.id,
            name: remote.name,
            payload,
        })
    }
}

impl From<&Action> for RemoteAction {
    fn from(action: &Action) -> Self {
        let mut remote = RemoteAction {
            id: action.id.clone(),
            name: action.name.clone(),
            action_type: action.action_type().as_str().to_owned(),
            ..Self::default()
        };

        match &action.payload {
            ActionPayload::Email(email) => remote.email_action = Some(email.clone()),
            ActionPayload::HumioRepo(repo) => remote.humio_repo_action = Some(repo.clone()),
            ActionPayload::OpsGenie(og) => remote.ops_genie_action = Some(og.clone()),
            ActionPayload::PagerDuty(pd) => remote.pager_duty_action = Some(pd.clone()),
            ActionPayload::Slack(slack) => {
                remote.slack_action = Some(RemoteSlackAction {
                    url: slack.url.clone(),
                    fields: slack_fields_to_entries(&slack.fields),
                });
            }
            ActionPayload::SlackPostMessage(spm) => {
                remote.slack_post_message_action = Some(RemoteSlackPostMessageAction {
                    api_token: spm.api_token.clone(),
                    channels: spm.channels.clone(),
                    fields: slack_fields_to_entries(&spm.fields),
                    use_proxy: spm.use_proxy,
                });
            }
            ActionPayload::VictorOps(vo) => remote.victor_ops_action = Some(vo.clone()),
            ActionPayload::Webhook(hook) => {
                remote.webhook_action = Some(RemoteWebhookAction {
                    body_template: hook.body_template.clone(),
                    headers: hook
                        .headers
                        .iter()
                        .map(|(header, value)| HttpHeaderEntry {
                            header: header.clone(),
                            value: value.clone(),
                        })
                        .collect(),
                    method: hook.method,
                    url: hook.url.clone(),
                });
            }
        }

        remote
    }
}
