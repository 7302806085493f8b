use alertsync_core::{ActionError, ActionType, HumioRepoAction};

use super::{Fields, VariantCodec};
use crate::block::PropertyBlock;

/// Codec for the `humiorepo` block.
pub struct HumioRepoCodec;

impl VariantCodec for HumioRepoCodec {
    const TYPE: ActionType = ActionType::HumioRepo;
    const DISCRIMINATOR: &'static str = "ingest_token";
    type Payload = HumioRepoAction;

    fn to_payload(block: &PropertyBlock) -> Result<HumioRepoAction, ActionError> {
        let fields = Fields::new::<Self>(block);
        Ok(HumioRepoAction {
            ingest_token: fields.required_str("ingest_token")?,
        })
    }

    fn from_payload(payload: &HumioRepoAction) -> PropertyBlock {
        PropertyBlock::new().with("ingest_token", payload.ingest_token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let repo = HumioRepoAction {
            ingest_token: "secrettoken".into(),
        };
        let block = HumioRepoCodec::from_payload(&repo);
        assert_eq!(HumioRepoCodec::to_payload(&block).unwrap(), repo);
    }

    #[test]
    fn token_is_required() {
        assert!(HumioRepoCodec::to_payload(&PropertyBlock::new()).is_err());
    }
}
