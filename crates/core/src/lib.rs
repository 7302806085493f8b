//! Core types for alertsync: the canonical action model, its remote wire
//! shape, and the composite identifiers used for import.

pub mod action;
pub mod error;
pub mod identifier;
pub mod wire;

pub use action::{
    Action, ActionPayload, ActionType, DEFAULT_OPSGENIE_API_URL, DEFAULT_WEBHOOK_BODY_TEMPLATE,
    EmailAction, HttpMethod, HumioRepoAction, OpsGenieAction, PagerDutyAction, PagerDutySeverity,
    SlackAction, SlackPostMessageAction, VictorOpsAction, WebhookAction,
};
pub use error::ActionError;
pub use wire::{
    HttpHeaderEntry, RemoteAction, RemoteSlackAction, RemoteSlackPostMessageAction,
    RemoteWebhookAction, SlackFieldEntry,
};
