use alertsync_core::{ActionError, ActionType, PagerDutyAction, PagerDutySeverity};

use super::{Fields, VariantCodec};
use crate::block::PropertyBlock;

/// Codec for the `pagerduty` block.
pub struct PagerDutyCodec;

impl VariantCodec for PagerDutyCodec {
    const TYPE: ActionType = ActionType::PagerDuty;
    const DISCRIMINATOR: &'static str = "routing_key";
    type Payload = PagerDutyAction;

    fn to_payload(block: &PropertyBlock) -> Result<PagerDutyAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(PagerDutyAction {
            routing_key: fields.required_str("routing_key")?,
            severity: fields.required_parsed(
                "severity",
                "one of critical, error, warning, info",
                PagerDutySeverity::parse,
            )?,
        })
    }

    fn from_payload(payload: &PagerDutyAction) -> PropertyBlock {
        PropertyBlock::new()
            .with("routing_key", payload.routing_key.as_str())
            .with("severity", payload.severity.as_str())
    }
}
