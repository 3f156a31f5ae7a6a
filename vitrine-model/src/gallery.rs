//! Image references and the ordered gallery shown by the carousel.

use crate::error::{ModelError, Result};

/// Opaque reference to an image resource, addressed by URL.
///
/// The model does not interpret the URL beyond requiring it to be
/// non-blank; fetching and decoding are the image pipeline's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ModelError::InvalidImageRef(
                "blank URL".to_string(),
            ));
        }
        Ok(ImageRef(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, non-empty, immutable sequence of image references.
///
/// Non-emptiness is a construction invariant: every lookup wraps via
/// modulo, so `entry` and `advance_from` are total for any index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gallery {
    entries: Vec<ImageRef>,
}

impl Gallery {
    pub fn new(entries: Vec<ImageRef>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ModelError::EmptyGallery);
        }
        Ok(Gallery { entries })
    }

    /// Build a gallery from raw URL strings, validating each entry.
    pub fn from_urls<I, S>(urls: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = urls
            .into_iter()
            .map(ImageRef::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entry at `index`, wrapping via modulo.
    pub fn entry(&self, index: usize) -> &ImageRef {
        &self.entries[index % self.entries.len()]
    }

    pub fn first(&self) -> &ImageRef {
        &self.entries[0]
    }

    /// The auto-advance target after `current`: the next index, wrapping
    /// back to the start past the final entry.
    pub fn advance_from(&self, current: usize) -> usize {
        (current + 1) % self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRef> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(urls: &[&str]) -> Gallery {
        Gallery::from_urls(urls.iter().copied()).expect("non-empty gallery")
    }

    #[test]
    fn empty_list_is_rejected_with_a_defined_error() {
        let result = Gallery::from_urls(Vec::<String>::new());
        assert!(matches!(result, Err(ModelError::EmptyGallery)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "empty carousel not permitted"
        );
    }

    #[test]
    fn blank_url_is_rejected() {
        assert!(matches!(
            ImageRef::new("   "),
            Err(ModelError::InvalidImageRef(_))
        ));
    }

    #[test]
    fn entry_wraps_via_modulo() {
        let g = gallery(&["a", "b", "c"]);
        for i in 0..12 {
            assert_eq!(g.entry(i).as_str(), ["a", "b", "c"][i % 3]);
        }
    }

    #[test]
    fn first_entry_is_the_initial_selection() {
        let g = gallery(&["a", "b", "c"]);
        assert_eq!(g.first().as_str(), "a");
    }

    #[test]
    fn advance_wraps_past_the_final_entry() {
        let g = gallery(&["a", "b", "c"]);
        assert_eq!(g.advance_from(0), 1);
        assert_eq!(g.advance_from(1), 2);
        assert_eq!(g.advance_from(2), 0);
    }

    #[test]
    fn single_entry_gallery_self_loops() {
        let g = gallery(&["a"]);
        assert_eq!(g.advance_from(0), 0);
        assert_eq!(g.entry(0).as_str(), "a");
        assert_eq!(g.entry(7).as_str(), "a");
    }
}
