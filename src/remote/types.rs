// Gitmoji reference types.
// Shared by the remote dataset and the on-disk cache record.

use serde::{Deserialize, Serialize};

/// One gitmoji entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gitmoji {
    /// Short code, e.g. `:art:`.
    pub code: String,
    pub description: String,
    /// The emoji glyph itself.
    pub emoji: String,
    /// HTML entity encoding of the glyph, e.g. `&#x1f3a8;`.
    pub entity: String,
    pub name: String,
}

/// Response body of the remote gitmoji list.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteDataset {
    pub gitmojis: Vec<Gitmoji>,
}
