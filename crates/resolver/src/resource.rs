use std::collections::BTreeMap;

use crate::block::PropertyBlock;

/// Candidate blocks for one variant field.
///
/// Although the schema allows at most one block per field, the configuration
/// layer can surface several candidates, so both sides are kept as ordered
/// lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockCandidates {
    /// Blocks currently stored in state (the post-apply view).
    pub previous: Vec<PropertyBlock>,
    /// Blocks from the planned configuration. Empty on read.
    pub new: Vec<PropertyBlock>,
}

impl BlockCandidates {
    /// Candidates for a block that exists only in stored state.
    pub fn stored(blocks: Vec<PropertyBlock>) -> Self {
        Self {
            previous: blocks,
            new: Vec::new(),
        }
    }

    /// Candidates for a block that is being planned.
    pub fn planned(previous: Vec<PropertyBlock>, new: Vec<PropertyBlock>) -> Self {
        Self { previous, new }
    }

    /// Returns `true` if there are no candidates on either side.
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.new.is_empty()
    }
}

/// Configuration-side record of one action resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    /// Composite identifier of the resource (`<repository>+<name>`). Empty
    /// until created or when not yet imported.
    pub id: String,
    /// Identifier assigned by the remote service.
    pub action_id: String,
    pub repository: String,
    pub name: String,
    /// Declared type discriminator, as written by the operator.
    pub action_type: String,
    blocks: BTreeMap<String, BlockCandidates>,
}

impl ResourceData {
    /// Create an empty record for the given repository, name and type.
    pub fn new(
        repository: impl Into<String>,
        name: impl Into<String>,
        action_type: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            name: name.into(),
            action_type: action_type.into(),
            ..Self::default()
        }
    }

    /// Create a record that knows only its composite id, as during import.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Candidates for the named variant block, if any were recorded.
    pub fn block(&self, name: &str) -> Option<&BlockCandidates> {
        self.blocks.get(name)
    }

    /// Replace the candidates for a variant block.
    pub fn set_block(&mut self, name: impl Into<String>, candidates: BlockCandidates) {
        self.blocks.insert(name.into(), candidates);
    }

    /// Builder-style [`set_block`](Self::set_block).
    #[must_use]
    pub fn with_block(mut self, name: impl Into<String>, candidates: BlockCandidates) -> Self {
        self.set_block(name, candidates);
        self
    }

    /// Plan a single new block over the current stored state.
    #[must_use]
    pub fn with_planned_block(mut self, name: &str, block: PropertyBlock) -> Self {
        let previous = self
            .blocks
            .remove(name)
            .map(|c| c.previous)
            .unwrap_or_default();
        self.blocks
            .insert(name.to_owned(), BlockCandidates::planned(previous, vec![block]));
        self
    }

    /// Remove every variant block.
    pub fn clear_blocks(&mut self) {
        self.blocks.clear();
    }

    /// Iterate over the recorded variant blocks in name order.
    pub fn blocks(&self) -> impl Iterator<Item = (&String, &BlockCandidates)> {
        self.blocks.iter()
    }
}
