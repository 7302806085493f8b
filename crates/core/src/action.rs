use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

/// Default `OpsGenie` API endpoint.
pub const DEFAULT_OPSGENIE_API_URL: &str = "https://api.opsgenie.com";

/// Default request body sent by webhook actions.
pub const DEFAULT_WEBHOOK_BODY_TEMPLATE: &str = "{\n  \"repository\": \"{repo_name}\",\n  \"timestamp\": \"{alert_triggered_timestamp}\",\n  \"alert\": {\n    \"name\": \"{alert_name}\",\n    \"description\": \"{alert_description}\",\n    \"query\": {\n      \"queryString\": \"{query_string} \",\n      \"end\": \"{query_time_end}\",\n      \"start\": \"{query_time_start}\"\n    },\n    \"actionID\": \"{alert_action_id}\",\n    \"id\": \"{alert_id}\"\n  },\n  \"warnings\": \"{warnings}\",\n  \"events\": {events},\n  \"numberOfEvents\": {event_count}\n  }";

/// Type discriminator of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "EmailAction")]
    Email,
    #[serde(rename = "HumioRepoAction")]
    HumioRepo,
    #[serde(rename = "OpsGenieAction")]
    OpsGenie,
    #[serde(rename = "PagerDutyAction")]
    PagerDuty,
    #[serde(rename = "SlackAction")]
    Slack,
    #[serde(rename = "SlackPostMessageAction")]
    SlackPostMessage,
    #[serde(rename = "VictorOpsAction")]
    VictorOps,
    #[serde(rename = "WebhookAction")]
    Webhook,
}

impl ActionType {
    /// Every known action type, in discriminator order.
    pub const ALL: [Self; 8] = [
        Self::Email,
        Self::HumioRepo,
        Self::OpsGenie,
        Self::PagerDuty,
        Self::Slack,
        Self::SlackPostMessage,
        Self::VictorOps,
        Self::Webhook,
    ];

    /// Returns the discriminator string used by the remote API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "EmailAction",
            Self::HumioRepo => "HumioRepoAction",
            Self::OpsGenie => "OpsGenieAction",
            Self::PagerDuty => "PagerDutyAction",
            Self::Slack => "SlackAction",
            Self::SlackPostMessage => "SlackPostMessageAction",
            Self::VictorOps => "VictorOpsAction",
            Self::Webhook => "WebhookAction",
        }
    }

    /// Returns the name of the configuration block holding this type's
    /// settings.
    pub fn block_name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::HumioRepo => "humiorepo",
            Self::OpsGenie => "opsgenie",
            Self::PagerDuty => "pagerduty",
            Self::Slack => "slack",
            Self::SlackPostMessage => "slackpostmessage",
            Self::VictorOps => "victorops",
            Self::Webhook => "webhook",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ActionError::UnsupportedActionType(s.to_owned()))
    }
}

/// Severity of a `PagerDuty` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagerDutySeverity {
    Critical,
    Error,
    Warning,
    Info,
}

impl PagerDutySeverity {
    /// Returns the severity as the lowercase string the API expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a severity string. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(Self::Critical),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// HTTP method used by webhook actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
}

impl HttpMethod {
    /// Returns the method name as an uppercase string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }

    /// Parse an uppercase method name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            _ => None,
        }
    }
}

/// Sends an email to a list of recipients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAction {
    /// Recipient addresses, in configuration order.
    pub recipients: Vec<String>,
    pub body_template: String,
    pub subject_template: String,
}

/// Ingests the triggering events into another repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumioRepoAction {
    pub ingest_token: String,
}

/// Creates an `OpsGenie` alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpsGenieAction {
    pub api_url: String,
    pub genie_key: String,
}

impl OpsGenieAction {
    /// Create an action against the default `OpsGenie` endpoint.
    pub fn new(genie_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_OPSGENIE_API_URL.to_owned(),
            genie_key: genie_key.into(),
        }
    }
}

/// Triggers a `PagerDuty` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerDutyAction {
    pub routing_key: String,
    pub severity: PagerDutySeverity,
}

/// Posts to a Slack incoming webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackAction {
    pub url: String,
    /// Message field name to template. Order is not significant.
    pub fields: BTreeMap<String, String>,
}

/// Posts a message to Slack channels through the Web API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackPostMessageAction {
    pub api_token: String,
    /// Target channels, in configuration order.
    pub channels: Vec<String>,
    pub fields: BTreeMap<String, String>,
    pub use_proxy: bool,
}

impl SlackPostMessageAction {
    /// Create an action posting to the given channels through the proxy.
    pub fn new(api_token: impl Into<String>, channels: Vec<String>) -> Self {
        Self {
            api_token: api_token.into(),
            channels,
            fields: BTreeMap::new(),
            use_proxy: true,
        }
    }
}

/// Notifies a `VictorOps` REST endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VictorOpsAction {
    pub message_type: String,
    pub notify_url: String,
}

/// Calls an arbitrary HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAction {
    pub body_template: String,
    /// Request headers. Order is not significant.
    pub headers: BTreeMap<String, String>,
    pub method: HttpMethod,
    pub url: String,
}

impl WebhookAction {
    /// Create a `POST` webhook with the default body template.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            body_template: DEFAULT_WEBHOOK_BODY_TEMPLATE.to_owned(),
            headers: BTreeMap::new(),
            method: HttpMethod::Post,
            url: url.into(),
        }
    }

    /// Add a request header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Type-specific settings of an action. Exactly one variant is populated, and
/// it determines the action's [`ActionType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "settings")]
pub enum ActionPayload {
    #[serde(rename = "EmailAction")]
    Email(EmailAction),
    #[serde(rename = "HumioRepoAction")]
    HumioRepo(HumioRepoAction),
    #[serde(rename = "OpsGenieAction")]
    OpsGenie(OpsGenieAction),
    #[serde(rename = "PagerDutyAction")]
    PagerDuty(PagerDutyAction),
    #[serde(rename = "SlackAction")]
    Slack(SlackAction),
    #[serde(rename = "SlackPostMessageAction")]
    SlackPostMessage(SlackPostMessageAction),
    #[serde(rename = "VictorOpsAction")]
    VictorOps(VictorOpsAction),
    #[serde(rename = "WebhookAction")]
    Webhook(WebhookAction),
}

impl ActionPayload {
    /// Returns the discriminator matching this payload.
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::Email(_) => ActionType::Email,
            Self::HumioRepo(_) => ActionType::HumioRepo,
            Self::OpsGenie(_) => ActionType::OpsGenie,
            Self::PagerDuty(_) => ActionType::PagerDuty,
            Self::Slack(_) => ActionType::Slack,
            Self::SlackPostMessage(_) => ActionType::SlackPostMessage,
            Self::VictorOps(_) => ActionType::VictorOps,
            Self::Webhook(_) => ActionType::Webhook,
        }
    }
}

/// A named notification action belonging to a repository.
///
/// The action's type is derived from its payload, so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Identifier assigned by the remote service. Empty until the action has
    /// been created.
    #[serde(default)]
    pub id: String,

    /// Action name, unique within its repository.
    pub name: String,

    #[serde(flatten)]
    pub payload: ActionPayload,
}

impl Action {
    /// Create a not-yet-persisted action.
    pub fn new(name: impl Into<String>, payload: ActionPayload) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            payload,
        }
    }

    /// Set the remote identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the type discriminator of this action.
    pub fn action_type(&self) -> ActionType {
        self.payload.action_type()
    }
}
