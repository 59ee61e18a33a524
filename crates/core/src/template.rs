//! Slide templates and the catalog they are looked up in.

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::mutation::prepare_draft;
use crate::types::{ElementDraft, Slide, StyleMap, DEFAULT_BACKGROUND};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// How a template treats the elements already on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMode {
    /// Existing elements are removed and replaced by the template's.
    Replace,
    /// The template's elements are added on top of the existing ones.
    Append,
}

/// A named preset of slide background, border, and default elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub background: String,

    #[serde(default)]
    pub border: String,

    #[serde(default)]
    pub border_radius: String,

    #[serde(default)]
    pub style: StyleMap,

    pub mode: TemplateMode,

    #[serde(default)]
    pub default_elements: Vec<ElementDraft>,
}

impl Template {
    /// Create a template with no elements.
    pub fn new(id: impl Into<String>, background: impl Into<String>, mode: TemplateMode) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            background: background.into(),
            border: String::new(),
            border_radius: String::new(),
            style: StyleMap::new(),
            mode,
            default_elements: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_border(mut self, border: impl Into<String>, radius: impl Into<String>) -> Self {
        self.border = border.into();
        self.border_radius = radius.into();
        self
    }

    pub fn with_slide_style(mut self, key: impl Into<String>, value: &str) -> Self {
        self.style.insert(key.into(), json!(value));
        self
    }

    pub fn with_element(mut self, element: ElementDraft) -> Self {
        self.default_elements.push(element);
        self
    }

    /// Produce a new slide with this template applied to `slide`.
    ///
    /// Background, border, border radius and slide style are replaced
    /// outright. Elements follow the template's mode; every element the
    /// template contributes gets a fresh id and is normalized the same way
    /// as a directly added element. The slide keeps its id and notes.
    pub fn apply_to(&self, slide: &Slide, ids: &mut dyn IdGenerator) -> Slide {
        let mut elements = match self.mode {
            TemplateMode::Replace => Vec::with_capacity(self.default_elements.len()),
            TemplateMode::Append => slide.elements.clone(),
        };
        elements.extend(
            self.default_elements
                .iter()
                .cloned()
                .filter_map(prepare_draft)
                .map(|draft| draft.into_element(ids.next_element_id())),
        );

        Slide {
            id: slide.id.clone(),
            background: self.background.clone(),
            border: self.border.clone(),
            border_radius: self.border_radius.clone(),
            style: self.style.clone(),
            elements,
            notes: slide.notes.clone(),
        }
    }
}

/// Read-only collection of templates, looked up by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    /// A catalog with no templates.
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// The templates shipped with the editor.
    pub fn builtin() -> Self {
        let templates = vec![
            Template::new("blank", DEFAULT_BACKGROUND, TemplateMode::Replace).with_name("Blank"),
            Template::new("title", DEFAULT_BACKGROUND, TemplateMode::Replace)
                .with_name("Title Slide")
                .with_element(heading("Click to add title", 48).at(80.0, 180.0).sized(800.0, 80.0))
                .with_element(
                    body("Click to add subtitle")
                        .with_style("textAlign", "center")
                        .at(180.0, 290.0)
                        .sized(600.0, 50.0),
                ),
            Template::new("title-content", DEFAULT_BACKGROUND, TemplateMode::Replace)
                .with_name("Title and Content")
                .with_element(heading("Click to add title", 36).at(60.0, 40.0).sized(840.0, 70.0))
                .with_element(body("Click to add text").at(60.0, 130.0).sized(840.0, 360.0)),
            Template::new("two-column", DEFAULT_BACKGROUND, TemplateMode::Replace)
                .with_name("Two Columns")
                .with_element(heading("Click to add title", 36).at(60.0, 40.0).sized(840.0, 70.0))
                .with_element(body("Left column").at(60.0, 130.0).sized(400.0, 360.0))
                .with_element(body("Right column").at(500.0, 130.0).sized(400.0, 360.0)),
            Template::new("image-caption", "#f5f5f5", TemplateMode::Replace)
                .with_name("Image with Caption")
                .with_border("1px solid #dddddd", "12px")
                .with_element(
                    ElementDraft::shape("image-placeholder")
                        .at(180.0, 60.0)
                        .sized(600.0, 340.0)
                        .with_style("backgroundColor", "#e0e0e0")
                        .with_style("borderRadius", "8px"),
                )
                .with_element(
                    body("Add a caption")
                        .with_style("textAlign", "center")
                        .at(180.0, 420.0)
                        .sized(600.0, 50.0),
                ),
            Template::new("footer", DEFAULT_BACKGROUND, TemplateMode::Append)
                .with_name("Footer")
                .with_element(
                    ElementDraft::text("Footer")
                        .at(60.0, 500.0)
                        .sized(840.0, 30.0)
                        .with_style("fontSize", 12)
                        .with_style("color", "#666666"),
                ),
            Template::new(
                "gradient-sunset",
                "linear-gradient(135deg, #f6d365 0%, #fda085 100%)",
                TemplateMode::Append,
            )
            .with_name("Sunset Gradient")
            .with_slide_style("color", "#ffffff"),
        ];

        Self { templates }
    }

    /// Parse a catalog from a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self> {
        let templates: Vec<Template> = serde_json::from_str(json)?;
        Ok(Self { templates })
    }

    /// Add a template, replacing any existing one with the same id.
    pub fn with_template(mut self, template: Template) -> Self {
        self.templates.retain(|t| t.id != template.id);
        self.templates.push(template);
        self
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Bold, centered placeholder text.
fn heading(content: &str, size: u32) -> ElementDraft {
    ElementDraft::text(content)
        .with_style("fontSize", size)
        .with_style("fontWeight", "bold")
        .with_style("textAlign", "center")
}

fn body(content: &str) -> ElementDraft {
    ElementDraft::text(content)
        .with_style("fontSize", 20)
        .with_style("textAlign", "left")
}
