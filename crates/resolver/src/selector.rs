//! Picks the authoritative block out of a variant field's candidates.
//!
//! The configuration layer can report more than one candidate for a field
//! declared to hold at most one block, typically a stale empty entry next to
//! the real one. Rather than rejecting that, the selector applies a fixed
//! rule so every call resolves to the same block.

use tracing::{debug, warn};

use crate::block::PropertyBlock;
use crate::resource::BlockCandidates;

/// Select the block to decode for a variant field.
///
/// 1. With no planned candidates (the read path), the first stored block is
///    returned unchanged.
/// 2. Otherwise the first planned block whose `discriminator` attribute is
///    populated wins.
/// 3. If no planned block qualifies, `None` is returned. Callers that need a
///    block treat this as missing variant data.
pub fn select_block<'a>(
    candidates: &'a BlockCandidates,
    discriminator: &str,
) -> Option<&'a PropertyBlock> {
    if candidates.new.is_empty() {
        debug!(
            stored = candidates.previous.len(),
            "no planned blocks, using stored state"
        );
        return candidates.previous.first();
    }

    let selected = candidates
        .new
        .iter()
        .position(|block| block.is_populated(discriminator));

    match selected {
        Some(idx) => {
            if idx > 0 || candidates.new.len() > 1 {
                warn!(
                    candidates = candidates.new.len(),
                    selected = idx,
                    discriminator,
                    "multiple planned blocks for a single-block field"
                );
            }
            candidates.new.get(idx)
        }
        None => {
            debug!(discriminator, "no planned block carries the discriminator");
            None
        }
    }
}
