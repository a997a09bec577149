//! Cover identifier kinds accepted by the catalog lookup.

/// The three externally-defined key types usable to look up a book cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverIdKind {
    /// ISBN-10 or ISBN-13.
    Isbn,
    /// Open Library edition id.
    Id,
    /// Open Library work id (the numeric part of `OL…W`).
    Olid,
}

impl CoverIdKind {
    /// Parses the form value case-insensitively. Unknown kinds yield `None`;
    /// the caller falls back to the placeholder cover.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "isbn" => Some(Self::Isbn),
            "id" => Some(Self::Id),
            "olid" => Some(Self::Olid),
            _ => None,
        }
    }
}
