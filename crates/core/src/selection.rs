//! Which slide and element are active in the editor.
//!
//! The selection only points into a document and never owns any of it.
//! Slide indices are 0-based here; `current_slide_number` and
//! `from_slide_number` convert to and from the 1-based numbers shown to
//! users.

use crate::ids::ElementId;
use crate::types::Presentation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// 0-based index of the slide being edited.
    pub current_slide: usize,

    /// The element selected on the current slide, if any.
    pub selected_element: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from a 1-based slide number.
    pub fn from_slide_number(slide_number: usize) -> Self {
        Self {
            current_slide: slide_number.saturating_sub(1),
            selected_element: None,
        }
    }

    /// The current slide as a 1-based number.
    pub fn current_slide_number(&self) -> usize {
        self.current_slide + 1
    }

    /// Switch to another slide, clamped to the document.
    ///
    /// The element selection survives only if the new slide contains it.
    pub fn select_slide(&mut self, presentation: &Presentation, index: usize) {
        self.current_slide = index.min(presentation.slides.len().saturating_sub(1));
        self.drop_dangling_element(presentation);
    }

    /// Select an element on the current slide.
    ///
    /// Returns false, leaving the selection untouched, if the current slide
    /// has no such element.
    pub fn select_element(&mut self, presentation: &Presentation, element_id: &ElementId) -> bool {
        if presentation
            .element(self.current_slide, element_id)
            .is_none()
        {
            return false;
        }
        self.selected_element = Some(element_id.clone());
        true
    }

    pub fn clear_element(&mut self) {
        self.selected_element = None;
    }

    pub fn is_selected(&self, element_id: &ElementId) -> bool {
        self.selected_element.as_ref() == Some(element_id)
    }

    /// Bring the selection back in line with `presentation` after an edit:
    /// clamp the slide index and clear an element that no longer exists on
    /// the current slide.
    pub fn reconcile(&mut self, presentation: &Presentation) {
        let last = presentation.slides.len().saturating_sub(1);
        if self.current_slide > last {
            self.current_slide = last;
        }
        self.drop_dangling_element(presentation);
    }

    fn drop_dangling_element(&mut self, presentation: &Presentation) {
        if let Some(id) = &self.selected_element {
            if presentation.element(self.current_slide, id).is_none() {
                log::debug!("Clearing selection of {}", id);
                self.selected_element = None;
            }
        }
    }
}
