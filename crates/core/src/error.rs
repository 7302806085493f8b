use thiserror::Error;

/// Errors raised while translating actions between their configuration and
/// canonical forms.
///
/// None of these are transient: each one is either a caller-input problem or
/// a broken upstream contract, so callers should surface them verbatim instead
/// of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A composite identifier could not be split into a repository and an
    /// action name.
    #[error(
        "malformed identifier {0:?}: expected the form REPOSITORYNAME+ACTIONNAME (e.g. myRepoName+my-action)"
    )]
    MalformedIdentifier(String),

    /// The type discriminator is not one of the known action types.
    #[error("unsupported action type: {0}")]
    UnsupportedActionType(String),

    /// No candidate block carried data for the declared action type.
    #[error("missing {block} settings for action")]
    MissingVariantData {
        /// The variant block field that was expected to be populated.
        block: &'static str,
    },

    /// A resolved block lacked a required field or held a value of the wrong
    /// shape.
    #[error("invalid field {block}.{field}: expected {expected}")]
    InvalidFieldType {
        /// The variant block field being decoded.
        block: &'static str,
        /// The attribute inside the block.
        field: &'static str,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },
}

impl ActionError {
    /// Returns `true` if the error points at an upstream contract breach
    /// rather than at operator input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvalidFieldType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ActionError::UnsupportedActionType("NotARealType".into());
        assert_eq!(err.to_string(), "unsupported action type: NotARealType");

        let err = ActionError::MissingVariantData { block: "email" };
        assert_eq!(err.to_string(), "missing email settings for action");

        let err = ActionError::InvalidFieldType {
            block: "webhook",
            field: "headers",
            expected: "a map of strings",
        };
        assert_eq!(
            err.to_string(),
            "invalid field webhook.headers: expected a map of strings"
        );
    }

    #[test]
    fn malformed_identifier_mentions_expected_shape() {
        let err = ActionError::MalformedIdentifier("sandbox".into());
        let msg = err.to_string();
        assert!(msg.contains("\"sandbox\""));
        assert!(msg.contains("REPOSITORYNAME+ACTIONNAME"));
    }

    #[test]
    fn only_field_errors_are_invariant_violations() {
        assert!(
            ActionError::InvalidFieldType {
                block: "slack",
                field: "url",
                expected: "a string",
            }
            .is_invariant_violation()
        );
        assert!(!ActionError::MissingVariantData { block: "slack" }.is_invariant_violation());
        assert!(!ActionError::UnsupportedActionType("x".into()).is_invariant_violation());
    }
}
