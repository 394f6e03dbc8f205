//! Named page sections and their measured bounds.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of an anchor region of the page, e.g. `"about"`.
///
/// The same string is used as the DOM `id` of the section element,
/// so the host can look the element up by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Cow<'static, str>);

impl SectionId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for ids that are empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for SectionId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Top offset and rendered height of a section, in document coordinates.
///
/// Read from live layout on every query, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open test: `top <= y < top + height`.
    ///
    /// Zero-height sections and NaN measurements never contain anything.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let bounds = SectionBounds::new(800.0, 600.0);
        assert!(!bounds.contains(799.9));
        assert!(bounds.contains(800.0));
        assert!(bounds.contains(1399.9));
        assert!(!bounds.contains(1400.0));
    }

    #[test]
    fn zero_height_section_never_matches() {
        let bounds = SectionBounds::new(500.0, 0.0);
        assert!(!bounds.contains(500.0));
    }

    #[test]
    fn nan_measurement_never_matches() {
        let bounds = SectionBounds::new(f64::NAN, 100.0);
        assert!(!bounds.contains(0.0));
    }

    #[test]
    fn owned_and_static_ids_compare_equal() {
        assert_eq!(SectionId::new(String::from("about")), SectionId::from_static("about"));
        assert_eq!(SectionId::from_static("home"), "home");
    }

    #[test]
    fn whitespace_id_is_blank() {
        assert!(SectionId::new("  ").is_blank());
        assert!(SectionId::new("").is_blank());
        assert!(!SectionId::from_static("contact").is_blank());
    }

    #[test]
    fn id_deserializes_from_plain_string() {
        let id: SectionId = serde_json::from_str("\"projects\"").unwrap();
        assert_eq!(id, "projects");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"projects\"");
    }
}
