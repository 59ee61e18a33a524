//! Editable slide document model, pure mutation layer, templates, and the
//! editor store for the design studio.

pub mod config;
pub mod content;
pub mod editor;
pub mod error;
pub mod export;
pub mod ids;
pub mod mutation;
pub mod persistence;
pub mod selection;
pub mod style;
pub mod template;
pub mod types;

pub use config::EditorConfig;
pub use content::ContentNormalizer;
pub use editor::{Applied, Editor, Intent};
pub use error::{Error, Result};
pub use export::{export, ExportFormat, OutlineFormatter};
pub use ids::{ElementId, IdGenerator, SequentialIds, SlideId, UuidIds};
pub use mutation::ZOrder;
pub use persistence::{JsonFileStore, MemoryStore, PresentationStore};
pub use selection::Selection;
pub use template::{Template, TemplateCatalog, TemplateMode};
pub use types::{
    ElementDraft, ElementKind, Presentation, Slide, SlideElement, StyleMap, DEFAULT_BACKGROUND,
};
