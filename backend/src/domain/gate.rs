//! Heuristic upload gate standing in for real image classification.
//!
//! The gate inspects upload metadata only. Acceptance requires an allowed
//! image content type, an allowed filename extension, and a cattle-related
//! keyword in the filename; an upload without a filename is always rejected
//! because the keyword heuristic cannot run.

/// Content types the gate accepts, lower case.
const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Filename extensions the gate accepts, lower case, without the dot.
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Keywords marking a filename as cattle-related.
const CATTLE_KEYWORDS: [&str; 11] = [
    "cow",
    "cattle",
    "bull",
    "calf",
    "ox",
    "heifer",
    "jersey",
    "holstein",
    "gir",
    "sahiwal",
    "tharparkar",
];

/// Accept/reject heuristic over upload metadata.
///
/// The allowed sets are bound at construction and immutable afterwards.
///
/// # Examples
/// ```
/// use breedsense::domain::UploadGate;
///
/// let gate = UploadGate::new();
/// assert!(gate.accept(Some("jersey_cow.jpg"), Some("image/jpeg")));
/// assert!(!gate.accept(None, Some("image/png")));
/// ```
#[derive(Debug, Clone)]
pub struct UploadGate {
    content_types: Vec<String>,
    extensions: Vec<String>,
    keywords: Vec<String>,
}

impl Default for UploadGate {
    fn default() -> Self {
        Self {
            content_types: ALLOWED_CONTENT_TYPES.iter().map(|ct| (*ct).to_owned()).collect(),
            extensions: ALLOWED_EXTENSIONS.iter().map(|ext| (*ext).to_owned()).collect(),
            keywords: CATTLE_KEYWORDS.iter().map(|kw| (*kw).to_owned()).collect(),
        }
    }
}

impl UploadGate {
    /// Create a gate with the stock allowed sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether an upload passes the heuristic.
    ///
    /// Pure and total: same inputs always yield the same answer, with no side
    /// effects. Matching is case-insensitive throughout. The extension is the
    /// substring after the last `.` in the filename.
    #[must_use]
    pub fn accept(&self, filename: Option<&str>, content_type: Option<&str>) -> bool {
        let Some(content_type) = content_type else {
            return false;
        };
        let content_type = content_type.to_lowercase();
        if !self.content_types.iter().any(|ct| *ct == content_type) {
            return false;
        }

        // No filename means the keyword heuristic cannot run; reject.
        let Some(filename) = filename.filter(|name| !name.is_empty()) else {
            return false;
        };
        let name = filename.to_lowercase();
        let Some((_, extension)) = name.rsplit_once('.') else {
            return false;
        };
        if !self.extensions.iter().any(|ext| ext == extension) {
            return false;
        }

        self.keywords.iter().any(|kw| name.contains(kw.as_str()))
    }
}
