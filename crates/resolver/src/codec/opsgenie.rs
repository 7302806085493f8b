use alertsync_core::{ActionError, ActionType, DEFAULT_OPSGENIE_API_URL, OpsGenieAction};

use super::{Fields, VariantCodec};
use crate::block::PropertyBlock;

/// Codec for the `opsgenie` block.
pub struct OpsGenieCodec;

impl VariantCodec for OpsGenieCodec {
    const TYPE: ActionType = ActionType::OpsGenie;
    const DISCRIMINATOR: &'static str = "genie_key";
    type Payload = OpsGenieAction;

    fn to_payload(block: &PropertyBlock) -> Result<OpsGenieAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(OpsGenieAction {
            api_url: fields.str_or("api_url", DEFAULT_OPSGENIE_API_URL)?,
            genie_key: fields.required_str("genie_key")?,
        })
    }

    fn from_payload(payload: &OpsGenieAction) -> PropertyBlock {
        PropertyBlock::new()
            .with("api_url", payload.api_url.as_str())
            .with("genie_key", payload.genie_key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_defaults() {
        let block = PropertyBlock::new().with("genie_key", "secretgeniekey");
        let og = OpsGenieCodec::to_payload(&block).unwrap();
        assert_eq!(og.api_url, "https://api.opsgenie.com");
        assert_eq!(og.genie_key, "secretgeniekey");
    }

    #[test]
    fn round_trip_custom_url() {
        let og = OpsGenieAction {
            api_url: "https://api.eu.opsgenie.com".into(),
            genie_key: "k".into(),
        };
        let block = OpsGenieCodec::from_payload(&og);
        assert_eq!(OpsGenieCodec::to_payload(&block).unwrap(), og);
    }
}
