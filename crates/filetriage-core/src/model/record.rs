/// A single classified filename.
///
/// Records are immutable once created and cheap to clone: both string
/// fields use `CompactString`, which stores short path components inline
/// without a heap allocation.
use compact_str::CompactString;
use serde::Serialize;

use super::category::Category;

/// The result of classifying one filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRecord {
    /// Original input filename, untouched.
    pub filename: CompactString,

    /// Lowercased suffix after the last `.`, or empty when the filename
    /// has no extension (no dot, or a trailing dot).
    pub extension: CompactString,

    /// Destination category resolved from the extension.
    pub category: Category,

    /// Processing priority, 1 (most urgent) to 5 (least).
    /// Always equal to `category.priority()`.
    pub priority: u8,
}

impl ClassificationRecord {
    /// Build a record from its parts. The priority is derived from the
    /// category here so the pairing cannot drift.
    pub fn new(filename: CompactString, extension: CompactString, category: Category) -> Self {
        Self {
            filename,
            extension,
            category,
            priority: category.priority(),
        }
    }
}
