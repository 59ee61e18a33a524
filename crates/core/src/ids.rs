//! Identifiers for slides and elements, and the generators that mint them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque slide identifier, unique within a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(pub String);

/// Opaque element identifier, unique within a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_id!(SlideId);
impl_id!(ElementId);

/// Source of fresh slide and element ids.
///
/// Implementations must never hand out the same id twice during the
/// lifetime of one document.
pub trait IdGenerator {
    fn next_slide_id(&mut self) -> SlideId;
    fn next_element_id(&mut self) -> ElementId;
}

/// Random UUID v4 tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_slide_id(&mut self) -> SlideId {
        SlideId(Uuid::new_v4().to_string())
    }

    fn next_element_id(&mut self) -> ElementId {
        ElementId(Uuid::new_v4().to_string())
    }
}

/// Strictly increasing counters: `s1`, `s2`, ... for slides and
/// `e1`, `e2`, ... for elements.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next_slide: u64,
    next_element: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose ids never collide with the `s<N>`/`e<N>`
    /// ids already present in `presentation`.
    pub fn seeded_from(presentation: &crate::Presentation) -> Self {
        let max_slide = presentation
            .slides
            .iter()
            .filter_map(|s| counter_value(s.id.as_str(), 's'))
            .max()
            .unwrap_or(0);
        let max_element = presentation
            .slides
            .iter()
            .flat_map(|s| s.elements.iter())
            .filter_map(|e| counter_value(e.id.as_str(), 'e'))
            .max()
            .unwrap_or(0);

        Self {
            next_slide: max_slide,
            next_element: max_element,
        }
    }
}

fn counter_value(id: &str, prefix: char) -> Option<u64> {
    id.strip_prefix(prefix)?.parse().ok()
}

impl IdGenerator for SequentialIds {
    fn next_slide_id(&mut self) -> SlideId {
        self.next_slide += 1;
        SlideId(format!("s{}", self.next_slide))
    }

    fn next_element_id(&mut self) -> ElementId {
        self.next_element += 1;
        ElementId(format!("e{}", self.next_element))
    }
}
