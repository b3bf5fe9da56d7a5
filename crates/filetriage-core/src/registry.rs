/// The fixed extension→category registry.
///
/// The table is a compile-time `match` rather than a runtime-populated
/// map: it is process-wide, read-only, and total over every possible
/// input string.
use crate::model::Category;

/// Resolve a file extension to its category.
///
/// The caller (the classifier) owns normalization — `ext` must already
/// be lowercased; this lookup does no case folding of its own. Anything
/// not in the table, including the empty string, falls back to
/// [`Category::Miscellaneous`].
///
/// `jpg` and `jpeg` are deliberately separate literal entries, not
/// canonicalized to one another.
pub fn lookup(ext: &str) -> Category {
    match ext {
        // Documents
        "txt" | "doc" | "docx" | "pdf" | "rtf" => Category::Documents,
        // Multimedia
        "jpg" | "jpeg" | "png" | "gif" | "bmp" => Category::Multimedia,
        // Audio
        "mp3" | "wav" | "flac" | "aac" => Category::Audio,
        // Video
        "mp4" | "avi" | "mkv" | "mov" => Category::Video,
        // Archives
        "zip" | "rar" | "7z" | "tar" => Category::Archive,
        // Source code
        "cpp" | "c" | "py" | "java" | "js" | "html" => Category::SourceCode,
        _ => Category::Miscellaneous,
    }
}
