/// File categories and the category→priority rule.
///
/// Each classified file lands in exactly one category; the processing
/// priority is a total function of the category, so a record can never
/// carry a category/priority pair outside the fixed table.
use serde::Serialize;

/// Destination category for a classified file.
///
/// Variants are declared in priority order (most urgent first), which is
/// also the order they appear in sorted reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Documents,
    SourceCode,
    Multimedia,
    Audio,
    Video,
    Archive,
    Miscellaneous,
}

impl Category {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::SourceCode => "Source Code",
            Self::Multimedia => "Multimedia",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Archive => "Archive",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Processing priority for this category: 1 (most urgent) to 5 (least).
    ///
    /// Multimedia, Audio, and Video share the same level — all media is
    /// processed with standard urgency.
    pub fn priority(self) -> u8 {
        match self {
            Self::Documents => 1,
            Self::SourceCode => 2,
            Self::Multimedia | Self::Audio | Self::Video => 3,
            Self::Archive => 4,
            Self::Miscellaneous => 5,
        }
    }
}
