//! Composite identifiers of the form `<repository>+<action name>`.
//!
//! The composite identifier is the externally visible id of an action
//! resource, used by import workflows where only the combined string is
//! known. Repository and action names may not contain the separator, so no
//! escaping is performed.

use crate::error::ActionError;

/// Separator between the repository and the action name.
pub const SEPARATOR: char = '+';

/// Build the composite identifier for an action in a repository.
#[must_use]
pub fn encode(repository: &str, name: &str) -> String {
    format!("{repository}{SEPARATOR}{name}")
}

/// Split a composite identifier into `(repository, name)`.
///
/// Splits on the first separator. Fails with
/// [`ActionError::MalformedIdentifier`] if the separator is missing or either
/// side is empty.
pub fn decode(identifier: &str) -> Result<(&str, &str), ActionError> {
    match identifier.split_once(SEPARATOR) {
        Some((repository, name)) if !repository.is_empty() && !name.is_empty() => {
            Ok((repository, name))
        }
        _ => Err(ActionError::MalformedIdentifier(identifier.to_owned())),
    }
}
