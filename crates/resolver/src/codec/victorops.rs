use alertsync_core::{ActionError, ActionType, VictorOpsAction};

use super::{Fields, VariantCodec};
use crate::block::PropertyBlock;

/// Codec for the `victorops` block.
pub struct VictorOpsCodec;

impl VariantCodec for VictorOpsCodec {
    const TYPE: ActionType = ActionType::VictorOps;
    const DISCRIMINATOR: &'static str = "notify_url";
    type Payload = VictorOpsAction;

    fn to_payload(block: &PropertyBlock) -> Result<VictorOpsAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(VictorOpsAction {
            message_type: fields.required_str("message_type")?,
            notify_url: fields.required_str("notify_url")?,
        })
    }

    fn from_payload(payload: &VictorOpsAction) -> PropertyBlock {
        PropertyBlock::new()
            .with("message_type", payload.message_type.as_str())
            .with("notify_url", payload.notify_url.as_str())
    }
}
