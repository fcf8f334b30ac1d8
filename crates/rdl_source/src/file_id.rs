//! Handle for a source text registered with the [`SourceDb`](crate::SourceDb).

use serde::{Deserialize, Serialize};

/// Index of a source text inside a [`SourceDb`](crate::SourceDb).
///
/// Text parsed without a database (for example a single property value handed
/// to the parser by an elaboration stage) uses [`FileId::DETACHED`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// File id for text that is not registered with any source database.
    pub const DETACHED: FileId = FileId(u32::MAX);

    /// Creates a `FileId` from its raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns `true` for [`FileId::DETACHED`].
    pub fn is_detached(self) -> bool {
        self == Self::DETACHED
    }
}
