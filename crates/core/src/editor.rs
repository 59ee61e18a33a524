//! The editor store: the single writer of the current presentation.
//!
//! Views describe what they want as an [`Intent`]; the editor runs it
//! through the pure functions in [`mutation`](crate::mutation), keeps the
//! selection consistent with the result, and records undo history.

use crate::config::EditorConfig;
use crate::error::Result;
use crate::ids::{ElementId, IdGenerator, SlideId, UuidIds};
use crate::mutation::{self, ZOrder};
use crate::persistence::PresentationStore;
use crate::selection::Selection;
use crate::template::TemplateCatalog;
use crate::types::{ElementDraft, Presentation, StyleMap};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A requested change to the document or selection.
///
/// Slide indices are 0-based; `NavigateToSlide` takes a 1-based number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Intent {
    #[serde(rename_all = "camelCase")]
    AddElement { slide: usize, element: ElementDraft },

    #[serde(rename_all = "camelCase")]
    UpdateElementStyle {
        slide: usize,
        element_id: ElementId,
        style: StyleMap,
    },

    #[serde(rename_all = "camelCase")]
    UpdateElementContent {
        slide: usize,
        element_id: ElementId,
        content: String,
    },

    #[serde(rename_all = "camelCase")]
    MoveElement {
        slide: usize,
        element_id: ElementId,
        x: f64,
        y: f64,
    },

    #[serde(rename_all = "camelCase")]
    ResizeElement {
        slide: usize,
        element_id: ElementId,
        width: f64,
        height: f64,
    },

    #[serde(rename_all = "camelCase")]
    ReorderElement {
        slide: usize,
        element_id: ElementId,
        order: ZOrder,
    },

    #[serde(rename_all = "camelCase")]
    DeleteElement { slide: usize, element_id: ElementId },

    #[serde(rename_all = "camelCase")]
    AddSlide {
        #[serde(default)]
        after: Option<usize>,
        #[serde(default)]
        template_id: Option<String>,
    },

    DuplicateSlide { slide: usize },

    DeleteSlide { slide: usize },

    MoveSlide { from: usize, to: usize },

    #[serde(rename_all = "camelCase")]
    ApplyTemplate { slide: usize, template_id: String },

    SetBackground { slide: usize, background: String },

    #[serde(rename_all = "camelCase")]
    SetBorder {
        slide: usize,
        border: String,
        #[serde(default)]
        border_radius: String,
    },

    SetNotes {
        slide: usize,
        #[serde(default)]
        notes: Option<String>,
    },

    Rename { title: String },

    #[serde(rename_all = "camelCase")]
    NavigateToSlide { slide_number: usize },

    #[serde(rename_all = "camelCase")]
    SelectElement {
        #[serde(default)]
        element_id: Option<ElementId>,
    },
}

impl Intent {
    /// Whether the intent can change the document (as opposed to only the
    /// selection).
    pub fn edits_document(&self) -> bool {
        !matches!(
            self,
            Intent::NavigateToSlide { .. } | Intent::SelectElement { .. }
        )
    }
}

/// What a dispatched intent did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Applied {
    /// Nothing in the document changed (missing target, or a no-op edit).
    Unchanged,
    /// The document changed.
    Changed,
    /// An element was added with this id.
    AddedElement(ElementId),
    /// A slide was added at this 0-based index.
    AddedSlide(usize),
    /// The current slide is now this 1-based number.
    Navigated(usize),
}

/// Undo history entry.
#[derive(Debug, Clone)]
struct Snapshot {
    document: Presentation,
    selection: Selection,
    revision: u64,
}

/// Editing session around one presentation.
pub struct Editor {
    document: Presentation,
    selection: Selection,
    catalog: TemplateCatalog,
    ids: Box<dyn IdGenerator>,
    config: EditorConfig,
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Identifies the current document state.
    revision: u64,
    /// Source of new revision numbers; never reused, even across undo.
    next_revision: u64,
    saved_revision: Option<u64>,
}

impl Editor {
    /// Open an editor on `document`, which must satisfy the model invariants.
    pub fn new(document: Presentation) -> Result<Self> {
        document.validate()?;

        Ok(Self {
            document,
            selection: Selection::new(),
            catalog: TemplateCatalog::builtin(),
            ids: Box::new(UuidIds),
            config: EditorConfig::default(),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            revision: 0,
            next_revision: 1,
            saved_revision: None,
        })
    }

    /// Start an editor on a new one-slide presentation.
    pub fn create(title: &str, config: EditorConfig) -> Self {
        let mut ids = UuidIds;
        let mut document = Presentation::new(title, &mut ids);
        document.slides[0].background = config.default_background.clone();

        Self {
            document,
            selection: Selection::new(),
            catalog: TemplateCatalog::builtin(),
            ids: Box::new(ids),
            config,
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            revision: 0,
            next_revision: 1,
            saved_revision: None,
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self.trim_history();
        self
    }

    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Swap in another template catalog, e.g. one fetched after startup.
    pub fn set_catalog(&mut self, catalog: TemplateCatalog) {
        log::debug!("Installed template catalog with {} templates", catalog.len());
        self.catalog = catalog;
    }

    pub fn with_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Record that the current document was persisted by some other path
    /// (an external save, or a freshly loaded copy).
    pub fn mark_saved(&mut self) {
        self.saved_revision = Some(self.revision);
    }

    pub fn document(&self) -> &Presentation {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Whether the document differs from the last successfully saved one.
    pub fn is_dirty(&self) -> bool {
        self.saved_revision != Some(self.revision)
    }

    /// Apply an intent.
    ///
    /// Fails only when the intent breaks a document invariant (deleting the
    /// last slide), in which case nothing changes.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Applied> {
        log::debug!("Dispatching {:?}", intent);

        let doc = &self.document;
        let ids = &mut *self.ids;
        let (next, applied) = match &intent {
            Intent::AddElement { slide, element } => {
                let (next, id) = mutation::add_element(doc, *slide, element.clone(), ids);
                (next, id.map(Applied::AddedElement))
            }
            Intent::UpdateElementStyle {
                slide,
                element_id,
                style,
            } => (
                mutation::update_element_style(doc, *slide, element_id, style),
                None,
            ),
            Intent::UpdateElementContent {
                slide,
                element_id,
                content,
            } => (
                mutation::update_element_content(doc, *slide, element_id, content),
                None,
            ),
            Intent::MoveElement {
                slide,
                element_id,
                x,
                y,
            } => (
                mutation::move_element(doc, *slide, element_id, *x, *y),
                None,
            ),
            Intent::ResizeElement {
                slide,
                element_id,
                width,
                height,
            } => (
                mutation::resize_element(doc, *slide, element_id, *width, *height),
                None,
            ),
            Intent::ReorderElement {
                slide,
                element_id,
                order,
            } => (
                mutation::reorder_element(doc, *slide, element_id, *order),
                None,
            ),
            Intent::DeleteElement { slide, element_id } => {
                (mutation::delete_element(doc, *slide, element_id), None)
            }
            Intent::AddSlide { after, template_id } => {
                let (mut next, index) = mutation::add_slide(
                    doc,
                    *after,
                    template_id.as_deref(),
                    &self.catalog,
                    ids,
                );
                if let (Some(index), None) = (index, template_id) {
                    next = mutation::set_slide_background(
                        &next,
                        index,
                        &self.config.default_background,
                    );
                }
                (next, index.map(Applied::AddedSlide))
            }
            Intent::DuplicateSlide { slide } => {
                let (next, index) = mutation::duplicate_slide(doc, *slide, ids);
                (next, index.map(Applied::AddedSlide))
            }
            Intent::DeleteSlide { slide } => (mutation::delete_slide(doc, *slide)?, None),
            Intent::MoveSlide { from, to } => (mutation::move_slide(doc, *from, *to), None),
            Intent::ApplyTemplate { slide, template_id } => (
                mutation::apply_template(doc, *slide, template_id, &self.catalog, ids),
                None,
            ),
            Intent::SetBackground { slide, background } => (
                mutation::set_slide_background(doc, *slide, background),
                None,
            ),
            Intent::SetBorder {
                slide,
                border,
                border_radius,
            } => (
                mutation::set_slide_border(doc, *slide, border, border_radius),
                None,
            ),
            Intent::SetNotes { slide, notes } => (
                mutation::set_slide_notes(doc, *slide, notes.as_deref()),
                None,
            ),
            Intent::Rename { title } => (mutation::rename_presentation(doc, title), None),
            Intent::NavigateToSlide { slide_number } => {
                let number = mutation::navigate_to_slide(doc, *slide_number);
                self.selection.select_slide(&self.document, number - 1);
                return Ok(Applied::Navigated(number));
            }
            Intent::SelectElement { element_id } => {
                match element_id {
                    Some(id) => {
                        if !self.selection.select_element(&self.document, id) {
                            log::warn!(
                                "Cannot select {}: not on slide {}",
                                id,
                                self.selection.current_slide_number()
                            );
                        }
                    }
                    None => self.selection.clear_element(),
                }
                return Ok(Applied::Unchanged);
            }
        };

        if next == self.document {
            return Ok(Applied::Unchanged);
        }

        let current = self
            .document
            .slide(self.selection.current_slide)
            .map(|slide| slide.id.clone());
        let previous = Snapshot {
            document: std::mem::replace(&mut self.document, next),
            selection: self.selection.clone(),
            revision: self.revision,
        };
        self.record(previous);
        self.update_selection(&intent, applied.as_ref(), current);

        Ok(applied.unwrap_or(Applied::Changed))
    }

    /// Re-point the selection after the document changed.
    ///
    /// `current` is the id of the slide that was current before the edit.
    /// The selection follows that slide to its new index; if the slide was
    /// deleted the index stays where it was, clamped to the document.
    fn update_selection(
        &mut self,
        intent: &Intent,
        applied: Option<&Applied>,
        current: Option<SlideId>,
    ) {
        let select_new = self.config.select_new_items;

        match (intent, applied) {
            (Intent::AddElement { slide, .. }, Some(Applied::AddedElement(id))) if select_new => {
                self.selection.select_slide(&self.document, *slide);
                self.selection.select_element(&self.document, id);
            }
            (_, Some(Applied::AddedSlide(index))) if select_new => {
                self.selection.select_slide(&self.document, *index);
            }
            _ => {
                if let Some(index) = current.and_then(|id| self.document.slide_index(&id)) {
                    self.selection.current_slide = index;
                }
            }
        }

        self.selection.reconcile(&self.document);
    }

    fn record(&mut self, previous: Snapshot) {
        self.revision = self.next_revision;
        self.next_revision += 1;
        self.redo_stack.clear();

        if self.config.history_limit > 0 {
            self.undo_stack.push_back(previous);
            self.trim_history();
        }
    }

    fn trim_history(&mut self) {
        while self.undo_stack.len() > self.config.history_limit {
            self.undo_stack.pop_front();
        }
    }

    fn current_snapshot(&self) -> Snapshot {
        Snapshot {
            document: self.document.clone(),
            selection: self.selection.clone(),
            revision: self.revision,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.document = snapshot.document;
        self.selection = snapshot.selection;
        self.revision = snapshot.revision;
        self.selection.reconcile(&self.document);
    }

    /// Step back one change. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(self.current_snapshot());
        self.restore(snapshot);
        true
    }

    /// Re-apply the last undone change. Returns false when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push_back(self.current_snapshot());
        self.restore(snapshot);
        true
    }

    /// A copy of the current document, e.g. for a background save.
    pub fn snapshot(&self) -> Presentation {
        self.document.clone()
    }

    /// Save the current document.
    ///
    /// On failure the document, history and dirty state are left exactly as
    /// they were and the error is returned for the caller to report.
    pub fn save(&mut self, store: &mut dyn PresentationStore) -> Result<()> {
        match store.save(&self.document) {
            Ok(()) => {
                self.saved_revision = Some(self.revision);
                log::debug!(
                    "Saved presentation {} at revision {}",
                    self.document.id,
                    self.revision
                );
                Ok(())
            }
            Err(e) => {
                log::warn!("Saving presentation {} failed: {}", self.document.id, e);
                Err(e)
            }
        }
    }
}
