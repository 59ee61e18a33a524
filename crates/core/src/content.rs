//! Normalization of element content before it enters the document.

use crate::types::ElementKind;
use unicode_normalization::UnicodeNormalization;

/// Normalizer for element content.
#[derive(Debug, Clone)]
pub struct ContentNormalizer {
    /// Whether to compose text to Unicode NFC.
    compose: bool,
}

impl Default for ContentNormalizer {
    fn default() -> Self {
        Self { compose: true }
    }
}

impl ContentNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether text is composed to NFC.
    pub fn with_compose(mut self, compose: bool) -> Self {
        self.compose = compose;
        self
    }

    /// Normalize a text element's content.
    ///
    /// - Converts `\r\n` and `\r` line endings to `\n`
    /// - Composes to NFC so visually equal strings compare equal
    pub fn normalize_text(&self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");

        if self.compose {
            unified.nfc().collect()
        } else {
            unified
        }
    }

    /// Normalize content according to the element type.
    ///
    /// Image URLs and shape markers only lose surrounding whitespace.
    pub fn normalize(&self, kind: ElementKind, content: &str) -> String {
        match kind {
            ElementKind::Text => self.normalize_text(content),
            ElementKind::Image | ElementKind::Shape => content.trim().to_string(),
        }
    }
}
