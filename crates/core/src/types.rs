//! Domain types for the editable slide document.

use crate::error::{Error, Result};
use crate::ids::{ElementId, IdGenerator, SlideId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

/// Background applied to new blank slides.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Presentation attributes of a slide or element, keyed by camelCase
/// CSS-like property name.
pub type StyleMap = BTreeMap<String, Value>;

/// A whole presentation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Opaque document identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Slides in presentation order. Never empty.
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a presentation with a random id and one blank slide.
    pub fn new(title: impl Into<String>, ids: &mut dyn IdGenerator) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, ids)
    }

    /// Create a presentation with a known id and one blank slide.
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        ids: &mut dyn IdGenerator,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slides: vec![Slide::blank(ids.next_slide_id(), DEFAULT_BACKGROUND)],
        }
    }

    /// Get a slide by 0-based index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get an element on the given slide.
    pub fn element(&self, slide_index: usize, element_id: &ElementId) -> Option<&SlideElement> {
        self.slide(slide_index)?.element(element_id)
    }

    /// Index of the slide with the given id, if any.
    pub fn slide_index(&self, slide_id: &SlideId) -> Option<usize> {
        self.slides.iter().position(|s| &s.id == slide_id)
    }

    /// Index of the slide holding `element_id`, if any.
    pub fn slide_of_element(&self, element_id: &ElementId) -> Option<usize> {
        self.slides
            .iter()
            .position(|s| s.element(element_id).is_some())
    }

    /// Total number of elements across all slides.
    pub fn element_count(&self) -> usize {
        self.slides.iter().map(|s| s.elements.len()).sum()
    }

    /// Check the model invariants: at least one slide, unique slide ids,
    /// and element ids unique across the whole document.
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(Error::InvalidDocument(format!(
                "presentation {} has no slides",
                self.id
            )));
        }

        let mut slide_ids = HashSet::new();
        let mut element_ids = HashSet::new();
        for slide in &self.slides {
            if !slide_ids.insert(&slide.id) {
                return Err(Error::InvalidDocument(format!(
                    "duplicate slide id {}",
                    slide.id
                )));
            }
            for element in &slide.elements {
                if !element_ids.insert(&element.id) {
                    return Err(Error::InvalidDocument(format!(
                        "duplicate element id {}",
                        element.id
                    )));
                }
            }
        }

        Ok(())
    }
}

/// One page of a presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,

    /// Paint token: a class name, color, or gradient. Stored verbatim.
    #[serde(default)]
    pub background: String,

    #[serde(default)]
    pub border: String,

    #[serde(default)]
    pub border_radius: String,

    #[serde(default)]
    pub style: StyleMap,

    /// Elements in stacking order; later elements draw on top.
    #[serde(default)]
    pub elements: Vec<SlideElement>,

    /// Speaker notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    /// Create an empty slide with the given background.
    pub fn blank(id: SlideId, background: impl Into<String>) -> Self {
        Self {
            id,
            background: background.into(),
            border: String::new(),
            border_radius: String::new(),
            style: StyleMap::new(),
            elements: Vec::new(),
            notes: None,
        }
    }

    pub fn element(&self, element_id: &ElementId) -> Option<&SlideElement> {
        self.elements.iter().find(|e| &e.id == element_id)
    }

    pub fn element_index(&self, element_id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == element_id)
    }

    /// Text contents of the slide's text elements, bottom to top.
    pub fn text_contents(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.kind == ElementKind::Text)
            .map(|e| e.content.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

/// The closed set of element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Shape => "shape",
        }
    }
}

impl std::str::FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "shape" => Ok(Self::Shape),
            other => Err(format!("unknown element type: {}", other)),
        }
    }
}

/// A positioned visual object on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideElement {
    pub id: ElementId,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Text, image URL, or shape marker depending on `kind`.
    #[serde(default)]
    pub content: String,

    /// Geometry in unscaled document units.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,

    #[serde(default)]
    pub style: StyleMap,
}

/// An element as supplied by a tool menu or template, before it has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDraft {
    #[serde(rename = "type")]
    pub kind: ElementKind,

    #[serde(default)]
    pub content: String,

    #[serde(default = "default_x")]
    pub x: f64,
    #[serde(default = "default_y")]
    pub y: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default)]
    pub style: StyleMap,
}

fn default_x() -> f64 {
    100.0
}

fn default_y() -> f64 {
    100.0
}

fn default_width() -> f64 {
    300.0
}

fn default_height() -> f64 {
    50.0
}

impl ElementDraft {
    fn new(kind: ElementKind, content: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            kind,
            content: content.into(),
            x: default_x(),
            y: default_y(),
            width,
            height,
            style: StyleMap::new(),
        }
    }

    /// A text box with the toolbar's default size.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, content, 300.0, 50.0)
    }

    /// An image pointing at `url`.
    pub fn image(url: impl Into<String>) -> Self {
        Self::new(ElementKind::Image, url, 300.0, 200.0)
    }

    /// A shape identified by `marker` (e.g. "rectangle", "circle").
    pub fn shape(marker: impl Into<String>) -> Self {
        Self::new(ElementKind::Shape, marker, 150.0, 150.0)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Attach an id, producing a document element.
    pub fn into_element(self, id: ElementId) -> SlideElement {
        SlideElement {
            id,
            kind: self.kind,
            content: self.content,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            style: self.style,
        }
    }
}

impl From<&SlideElement> for ElementDraft {
    fn from(element: &SlideElement) -> Self {
        Self {
            kind: element.kind,
            content: element.content.clone(),
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            style: element.style.clone(),
        }
    }
}
