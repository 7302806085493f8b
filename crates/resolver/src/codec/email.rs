use alertsync_core::{ActionError, ActionType, EmailAction};

use super::{Fields, VariantCodec, list_value};
use crate::block::PropertyBlock;

/// Codec for the `email` block.
pub struct EmailCodec;

impl VariantCodec for EmailCodec {
    const TYPE: ActionType = ActionType::Email;
    const DISCRIMINATOR: &'static str = "recipients";
    type Payload = EmailAction;

    fn to_payload(block: &PropertyBlock) -> Result<EmailAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(EmailAction {
            recipients: fields.string_list("recipients")?,
            body_template: fields.str_or("body_template", "")?,
            subject_template: fields.str_or("subject_template", "")?,
        })
    }

    fn from_payload(payload: &EmailAction) -> PropertyBlock {
        PropertyBlock::new()
            .with("recipients", list_value(&payload.recipients))
            .with("body_template", payload.body_template.as_str())
            .with("subject_template", payload.subject_template.as_str())
    }
}
