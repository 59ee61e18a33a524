//! Pure document transitions.
//!
//! Every function takes the current presentation by reference and returns
//! a new one; the input is never modified. Slide indices are 0-based.
//! Targeting a slide index or element id that does not exist returns an
//! unchanged copy. The only rejected operation is deleting the last slide.

use crate::content::ContentNormalizer;
use crate::error::{Error, Result};
use crate::ids::{ElementId, IdGenerator};
use crate::style::{merge_style, normalize_patch};
use crate::template::TemplateCatalog;
use crate::types::{ElementDraft, Presentation, Slide, SlideElement, StyleMap, DEFAULT_BACKGROUND};
use serde::{Deserialize, Serialize};

/// Smallest width or height an element can be resized to.
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// Direction for changing an element's place in the stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZOrder {
    /// One step up.
    Forward,
    /// One step down.
    Backward,
    /// To the top.
    Front,
    /// To the bottom.
    Back,
}

/// Replace the slide at `index` with `f(slide)`, or return an unchanged copy
/// when `f` yields nothing or the index is out of range.
fn edit_slide<F>(presentation: &Presentation, index: usize, op: &str, f: F) -> Presentation
where
    F: FnOnce(&Slide) -> Option<Slide>,
{
    let Some(slide) = presentation.slides.get(index) else {
        log::debug!("{}: slide index {} out of range", op, index);
        return presentation.clone();
    };

    match f(slide) {
        Some(updated) => {
            let mut next = presentation.clone();
            next.slides[index] = updated;
            log::debug!("{}: updated slide {}", op, index);
            next
        }
        None => presentation.clone(),
    }
}

/// Replace one element on one slide with `f(element)`.
fn edit_element<F>(
    presentation: &Presentation,
    slide_index: usize,
    element_id: &ElementId,
    op: &str,
    f: F,
) -> Presentation
where
    F: FnOnce(&SlideElement) -> SlideElement,
{
    edit_slide(presentation, slide_index, op, |slide| {
        let Some(position) = slide.element_index(element_id) else {
            log::debug!("{}: element {} not on slide {}", op, element_id, slide_index);
            return None;
        };
        let mut updated = slide.clone();
        updated.elements[position] = f(&slide.elements[position]);
        Some(updated)
    })
}

/// Shallow-merge `patch` into an element's style.
///
/// Keys are canonicalized and filtered to the ones the element type
/// recognizes before merging.
pub fn update_element_style(
    presentation: &Presentation,
    slide_index: usize,
    element_id: &ElementId,
    patch: &StyleMap,
) -> Presentation {
    edit_element(
        presentation,
        slide_index,
        element_id,
        "update_element_style",
        |element| {
            let patch = normalize_patch(element.kind, patch);
            SlideElement {
                style: merge_style(&element.style, &patch),
                ..element.clone()
            }
        },
    )
}

/// Bring a draft in line with what the document accepts: normalized
/// content, style keys the element type recognizes, and a size of at least
/// [`MIN_ELEMENT_SIZE`]. Returns `None` for non-finite geometry.
pub fn prepare_draft(draft: ElementDraft) -> Option<ElementDraft> {
    if ![draft.x, draft.y, draft.width, draft.height]
        .iter()
        .all(|v| v.is_finite())
    {
        log::warn!(
            "Ignoring element with non-finite geometry ({}, {}) {}x{}",
            draft.x,
            draft.y,
            draft.width,
            draft.height
        );
        return None;
    }

    Some(ElementDraft {
        content: ContentNormalizer::new().normalize(draft.kind, &draft.content),
        style: normalize_patch(draft.kind, &draft.style),
        width: draft.width.max(MIN_ELEMENT_SIZE),
        height: draft.height.max(MIN_ELEMENT_SIZE),
        ..draft
    })
}

/// Append a new element to the top of a slide's stacking order.
///
/// Returns the new presentation and the id given to the element, or `None`
/// when the slide does not exist or the draft's geometry is not finite.
pub fn add_element(
    presentation: &Presentation,
    slide_index: usize,
    draft: ElementDraft,
    ids: &mut dyn IdGenerator,
) -> (Presentation, Option<ElementId>) {
    if slide_index >= presentation.slides.len() {
        log::debug!("add_element: slide index {} out of range", slide_index);
        return (presentation.clone(), None);
    }

    let Some(draft) = prepare_draft(draft) else {
        return (presentation.clone(), None);
    };

    let id = ids.next_element_id();
    let element = draft.into_element(id.clone());

    let mut next = presentation.clone();
    next.slides[slide_index].elements.push(element);
    log::debug!("add_element: added {} to slide {}", id, slide_index);

    (next, Some(id))
}

/// Remove an element from a slide.
///
/// Clearing a selection that pointed at the element is the caller's job.
pub fn delete_element(
    presentation: &Presentation,
    slide_index: usize,
    element_id: &ElementId,
) -> Presentation {
    edit_slide(presentation, slide_index, "delete_element", |slide| {
        let position = slide.element_index(element_id)?;
        let mut updated = slide.clone();
        updated.elements.remove(position);
        Some(updated)
    })
}

/// Move an element to a new top-left position.
pub fn move_element(
    presentation: &Presentation,
    slide_index: usize,
    element_id: &ElementId,
    x: f64,
    y: f64,
) -> Presentation {
    if !x.is_finite() || !y.is_finite() {
        log::warn!("move_element: ignoring non-finite position ({}, {})", x, y);
        return presentation.clone();
    }

    edit_element(presentation, slide_index, element_id, "move_element", |element| {
        SlideElement {
            x,
            y,
            ..element.clone()
        }
    })
}

/// Resize an element. Sizes below [`MIN_ELEMENT_SIZE`] are raised to it.
pub fn resize_element(
    presentation: &Presentation,
    slide_index: usize,
    element_id: &ElementId,
    width: f64,
    height: f64,
) -> Presentation {
    if !width.is_finite() || !height.is_finite() {
        log::warn!(
            "resize_element: ignoring non-finite size {}x{}",
            width,
            height
        );
        return presentation.clone();
    }

    edit_element(
        presentation,
        slide_index,
        element_id,
        "resize_element",
        |element| SlideElement {
            width: width.max(MIN_ELEMENT_SIZE),
            height: height.max(MIN_ELEMENT_SIZE),
            ..element.clone()
        },
    )
}

/// Replace an element's content (text, image URL, or shape marker).
pub fn update_element_content(
    presentation: &Presentation,
    slide_index: usize,
    element_id: &ElementId,
    content: &str,
) -> Presentation {
    edit_element(
        presentation,
        slide_index,
        element_id,
        "update_element_content",
        |element| SlideElement {
            content: ContentNormalizer::new().normalize(element.kind, content),
            ..element.clone()
        },
    )
}

/// Change an element's place in the slide's stacking order.
pub fn reorder_element(
    presentation: &Presentation,
    slide_index: usize,
    element_id: &ElementId,
    order: ZOrder,
) -> Presentation {
    edit_slide(presentation, slide_index, "reorder_element", |slide| {
        let from = slide.element_index(element_id)?;
        let last = slide.elements.len() - 1;
        let to = match order {
            ZOrder::Forward => (from + 1).min(last),
            ZOrder::Backward => from.saturating_sub(1),
            ZOrder::Front => last,
            ZOrder::Back => 0,
        };
        if to == from {
            return None;
        }

        let mut updated = slide.clone();
        let element = updated.elements.remove(from);
        updated.elements.insert(to, element);
        Some(updated)
    })
}

/// Insert `slide` right after `after`, or at the end when `after` is `None`
/// or past the last slide. Returns the index of the inserted slide.
pub fn insert_slide(
    presentation: &Presentation,
    after: Option<usize>,
    slide: Slide,
) -> (Presentation, usize) {
    let len = presentation.slides.len();
    let index = match after {
        Some(after) if after < len => after + 1,
        _ => len,
    };

    let mut next = presentation.clone();
    next.slides.insert(index, slide);
    log::debug!("insert_slide: inserted slide at {}", index);

    (next, index)
}

/// Add a slide after `after` (or at the end), blank or seeded from a
/// template.
///
/// Returns `None` for the index, and the presentation unchanged, when
/// `template_id` names no template in `catalog`.
pub fn add_slide(
    presentation: &Presentation,
    after: Option<usize>,
    template_id: Option<&str>,
    catalog: &TemplateCatalog,
    ids: &mut dyn IdGenerator,
) -> (Presentation, Option<usize>) {
    let blank = Slide::blank(ids.next_slide_id(), DEFAULT_BACKGROUND);

    let slide = match template_id {
        None => blank,
        Some(id) => match catalog.get(id) {
            Some(template) => template.apply_to(&blank, ids),
            None => {
                log::warn!("add_slide: unknown template {:?}", id);
                return (presentation.clone(), None);
            }
        },
    };

    let (next, index) = insert_slide(presentation, after, slide);
    (next, Some(index))
}

/// Insert a deep copy of the slide at `index` right after it.
///
/// The copy and each of its elements receive fresh ids.
pub fn duplicate_slide(
    presentation: &Presentation,
    index: usize,
    ids: &mut dyn IdGenerator,
) -> (Presentation, Option<usize>) {
    let Some(original) = presentation.slides.get(index) else {
        log::debug!("duplicate_slide: slide index {} out of range", index);
        return (presentation.clone(), None);
    };

    let mut copy = original.clone();
    copy.id = ids.next_slide_id();
    for element in &mut copy.elements {
        element.id = ids.next_element_id();
    }

    let (next, inserted) = insert_slide(presentation, Some(index), copy);
    (next, Some(inserted))
}

/// Remove the slide at `index`.
///
/// Fails with [`Error::LastSlide`] when the presentation has only one slide;
/// an out-of-range index returns an unchanged copy.
pub fn delete_slide(presentation: &Presentation, index: usize) -> Result<Presentation> {
    if presentation.slides.len() <= 1 {
        log::warn!("delete_slide: refusing to delete the last slide");
        return Err(Error::LastSlide);
    }
    if index >= presentation.slides.len() {
        log::debug!("delete_slide: slide index {} out of range", index);
        return Ok(presentation.clone());
    }

    let mut next = presentation.clone();
    next.slides.remove(index);
    log::debug!("delete_slide: removed slide {}", index);

    Ok(next)
}

/// Move the slide at `from` so it ends up at `to` (clamped to the last
/// position).
pub fn move_slide(presentation: &Presentation, from: usize, to: usize) -> Presentation {
    let len = presentation.slides.len();
    if from >= len {
        log::debug!("move_slide: slide index {} out of range", from);
        return presentation.clone();
    }

    let to = to.min(len - 1);
    if to == from {
        return presentation.clone();
    }

    let mut next = presentation.clone();
    let slide = next.slides.remove(from);
    next.slides.insert(to, slide);
    next
}

/// Apply a catalog template to a slide. Unknown templates leave the
/// presentation unchanged.
pub fn apply_template(
    presentation: &Presentation,
    slide_index: usize,
    template_id: &str,
    catalog: &TemplateCatalog,
    ids: &mut dyn IdGenerator,
) -> Presentation {
    let Some(template) = catalog.get(template_id) else {
        log::warn!("apply_template: unknown template {:?}", template_id);
        return presentation.clone();
    };

    edit_slide(presentation, slide_index, "apply_template", |slide| {
        Some(template.apply_to(slide, ids))
    })
}

/// Set a slide's background paint token.
pub fn set_slide_background(
    presentation: &Presentation,
    slide_index: usize,
    background: &str,
) -> Presentation {
    edit_slide(presentation, slide_index, "set_slide_background", |slide| {
        Some(Slide {
            background: background.to_string(),
            ..slide.clone()
        })
    })
}

/// Set a slide's border and border radius.
pub fn set_slide_border(
    presentation: &Presentation,
    slide_index: usize,
    border: &str,
    border_radius: &str,
) -> Presentation {
    edit_slide(presentation, slide_index, "set_slide_border", |slide| {
        Some(Slide {
            border: border.to_string(),
            border_radius: border_radius.to_string(),
            ..slide.clone()
        })
    })
}

/// Set or clear a slide's speaker notes. Blank notes clear them.
pub fn set_slide_notes(
    presentation: &Presentation,
    slide_index: usize,
    notes: Option<&str>,
) -> Presentation {
    let notes = notes
        .map(|n| ContentNormalizer::new().normalize_text(n))
        .filter(|n| !n.trim().is_empty());

    edit_slide(presentation, slide_index, "set_slide_notes", |slide| {
        Some(Slide {
            notes,
            ..slide.clone()
        })
    })
}

/// Change the presentation title.
pub fn rename_presentation(presentation: &Presentation, title: &str) -> Presentation {
    Presentation {
        title: title.trim().to_string(),
        ..presentation.clone()
    }
}

/// Clamp a 1-based slide number to `[1, slides.len()]`.
pub fn navigate_to_slide(presentation: &Presentation, slide_number: usize) -> usize {
    slide_number.clamp(1, presentation.slides.len().max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{SequentialIds, SlideId};
    use crate::types::ElementKind;
    use serde_json::{json, Value};
    use std::collections::HashSet;

    fn style(value: Value) -> StyleMap {
        serde_json::from_value(value).unwrap()
    }

    fn deck(ids: &mut SequentialIds) -> Presentation {
        Presentation::with_id("p1", "Deck", ids)
    }

    /// A deck with two slides holding two elements each.
    fn populated(ids: &mut SequentialIds) -> Presentation {
        let catalog = TemplateCatalog::builtin();
        let mut p = deck(ids);
        (p, _) = add_slide(&p, None, None, &catalog, ids);
        for slide in 0..2 {
            (p, _) = add_element(&p, slide, ElementDraft::text("Hello"), ids);
            (p, _) = add_element(&p, slide, ElementDraft::shape("circle"), ids);
        }
        p
    }

    #[test]
    fn test_update_element_style_merges() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);
        let (p, id) = add_element(
            &p,
            0,
            ElementDraft::text("Hi").with_style("color", "#000000"),
            &mut ids,
        );
        let id = id.unwrap();

        let p = update_element_style(&p, 0, &id, &style(json!({"backgroundColor": "#ffffff"})));

        assert_eq!(
            p.element(0, &id).unwrap().style,
            style(json!({"color": "#000000", "backgroundColor": "#ffffff"}))
        );
    }

    #[test]
    fn test_update_element_style_unknown_element_is_noop() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);

        let result = update_element_style(
            &p,
            0,
            &ElementId::new("missing"),
            &style(json!({"color": "red"})),
        );
        assert_eq!(result, p);

        // Element exists, but on another slide.
        let other = p.slides[1].elements[0].id.clone();
        assert_eq!(
            update_element_style(&p, 0, &other, &style(json!({"color": "red"}))),
            p
        );
    }

    #[test]
    fn test_update_element_style_does_not_touch_input() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        let before = p.clone();
        let id = p.slides[0].elements[0].id.clone();

        let updated = update_element_style(&p, 0, &id, &style(json!({"color": "red"})));

        assert_eq!(p, before);
        assert_ne!(updated, before);
    }

    #[test]
    fn test_add_element_out_of_range_is_noop() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);

        let (result, id) = add_element(&p, 3, ElementDraft::text("x"), &mut ids);

        assert_eq!(result, p);
        assert_eq!(id, None);
    }

    #[test]
    fn test_add_element_appends_on_top_with_unique_ids() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);

        let (p, first) = add_element(&p, 0, ElementDraft::text("a"), &mut ids);
        let (p, second) = add_element(&p, 0, ElementDraft::image("b.png"), &mut ids);

        assert_ne!(first, second);
        assert_eq!(p.slides[0].elements.len(), 2);
        assert_eq!(p.slides[0].elements[1].kind, ElementKind::Image);
    }

    #[test]
    fn test_add_element_filters_style_for_kind() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);

        let draft = ElementDraft::image("a.png")
            .with_style("filter", "grayscale(100%)")
            .with_style("font-size", 12);
        let (p, id) = add_element(&p, 0, draft, &mut ids);

        assert_eq!(
            p.element(0, &id.unwrap()).unwrap().style,
            style(json!({"filter": "grayscale(100%)"}))
        );
    }

    #[test]
    fn test_add_element_rejects_non_finite_geometry() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);

        for draft in [
            ElementDraft::text("x").sized(f64::NAN, 20.0),
            ElementDraft::text("x").sized(20.0, f64::INFINITY),
            ElementDraft::text("x").at(f64::NEG_INFINITY, 0.0),
        ] {
            let (result, id) = add_element(&p, 0, draft, &mut ids);
            assert_eq!(result, p);
            assert_eq!(id, None);
        }
    }

    #[test]
    fn test_add_element_clamps_size() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);

        let (p, id) = add_element(&p, 0, ElementDraft::text("x").sized(0.0, -20.0), &mut ids);
        let element = p.element(0, &id.unwrap()).unwrap();
        assert_eq!(element.width, MIN_ELEMENT_SIZE);
        assert_eq!(element.height, MIN_ELEMENT_SIZE);

        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Presentation>(&json).unwrap(), p);
    }

    #[test]
    fn test_add_then_delete_round_trip() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);

        let (added, id) = add_element(&p, 1, ElementDraft::text("temp"), &mut ids);
        let restored = delete_element(&added, 1, &id.unwrap());

        assert_eq!(restored, p);
    }

    #[test]
    fn test_delete_element_missing_is_noop() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        assert_eq!(delete_element(&p, 0, &ElementId::new("nope")), p);
        assert_eq!(delete_element(&p, 9, &p.slides[0].elements[0].id), p);
    }

    #[test]
    fn test_add_slide_scenario() {
        let mut ids = SequentialIds::new();
        let catalog = TemplateCatalog::builtin();
        let p = deck(&mut ids);

        let (p, index) = add_slide(&p, None, None, &catalog, &mut ids);
        assert_eq!(index, Some(1));
        assert_eq!(p.slides.len(), 2);
        assert!(p.slides[1].elements.is_empty());
        assert_eq!(p.slides[1].background, DEFAULT_BACKGROUND);
        let added = p.slides[1].id.clone();

        let p = delete_slide(&p, 0).unwrap();
        assert_eq!(p.slides.len(), 1);
        assert_eq!(p.slides[0].id, added);

        let err = delete_slide(&p, 0).unwrap_err();
        assert!(matches!(err, Error::LastSlide));
        assert_eq!(p.slides.len(), 1);
    }

    #[test]
    fn test_add_slide_after_index() {
        let mut ids = SequentialIds::new();
        let catalog = TemplateCatalog::builtin();
        let p = deck(&mut ids);
        let (p, _) = add_slide(&p, None, None, &catalog, &mut ids);

        let (p, index) = add_slide(&p, Some(0), Some("title"), &catalog, &mut ids);

        assert_eq!(index, Some(1));
        assert_eq!(p.slides.len(), 3);
        assert_eq!(p.slides[1].elements.len(), 2);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_add_slide_unknown_template_is_noop() {
        let mut ids = SequentialIds::new();
        let catalog = TemplateCatalog::builtin();
        let p = deck(&mut ids);

        let (result, index) = add_slide(&p, None, Some("nope"), &catalog, &mut ids);

        assert_eq!(result, p);
        assert_eq!(index, None);
    }

    #[test]
    fn test_duplicate_slide_gets_fresh_ids() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);

        let (result, index) = duplicate_slide(&p, 0, &mut ids);

        assert_eq!(index, Some(1));
        assert_eq!(result.slides.len(), p.slides.len() + 1);
        assert_ne!(result.slides[1].id, result.slides[0].id);
        assert_eq!(
            result.slides[1].elements[0].content,
            result.slides[0].elements[0].content
        );

        let copy_ids: HashSet<_> = result.slides[1].elements.iter().map(|e| &e.id).collect();
        for (i, slide) in result.slides.iter().enumerate() {
            if i == 1 {
                continue;
            }
            for element in &slide.elements {
                assert!(!copy_ids.contains(&element.id));
            }
        }
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_duplicate_last_slide_appends() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);

        let (result, index) = duplicate_slide(&p, 1, &mut ids);

        assert_eq!(index, Some(2));
        assert_eq!(result.slides.len(), 3);
    }

    #[test]
    fn test_duplicate_out_of_range_is_noop() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        let (result, index) = duplicate_slide(&p, 5, &mut ids);
        assert_eq!(result, p);
        assert_eq!(index, None);
    }

    #[test]
    fn test_delete_slide_out_of_range_is_noop() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        assert_eq!(delete_slide(&p, 7).unwrap(), p);
    }

    #[test]
    fn test_delete_last_slide_rejected_even_with_bad_index() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);
        assert!(matches!(delete_slide(&p, 4), Err(Error::LastSlide)));
    }

    #[test]
    fn test_apply_template() {
        let mut ids = SequentialIds::new();
        let catalog = TemplateCatalog::builtin();
        let p = populated(&mut ids);

        let blank = apply_template(&p, 0, "blank", &catalog, &mut ids);
        assert!(blank.slides[0].elements.is_empty());
        assert_eq!(blank.slides[1], p.slides[1]);

        let footer = apply_template(&p, 0, "footer", &catalog, &mut ids);
        assert_eq!(footer.slides[0].elements.len(), 3);

        assert_eq!(apply_template(&p, 0, "missing", &catalog, &mut ids), p);
        assert_eq!(apply_template(&p, 8, "blank", &catalog, &mut ids), p);
    }

    #[test]
    fn test_move_and_resize_element() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        let id = p.slides[0].elements[0].id.clone();

        let p = move_element(&p, 0, &id, 12.5, -4.0);
        let p = resize_element(&p, 0, &id, 0.0, 80.0);

        let element = p.element(0, &id).unwrap();
        assert_eq!((element.x, element.y), (12.5, -4.0));
        assert_eq!((element.width, element.height), (MIN_ELEMENT_SIZE, 80.0));

        assert_eq!(move_element(&p, 0, &id, f64::NAN, 0.0), p);
    }

    #[test]
    fn test_update_element_content_normalizes_text() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        let id = p.slides[0].elements[0].id.clone();

        let p = update_element_content(&p, 0, &id, "line one\r\nline two");

        assert_eq!(p.element(0, &id).unwrap().content, "line one\nline two");
    }

    #[test]
    fn test_reorder_element() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        let bottom = p.slides[0].elements[0].id.clone();

        let p = reorder_element(&p, 0, &bottom, ZOrder::Front);
        assert_eq!(p.slides[0].elements[1].id, bottom);

        let unchanged = reorder_element(&p, 0, &bottom, ZOrder::Forward);
        assert_eq!(unchanged, p);

        let p = reorder_element(&p, 0, &bottom, ZOrder::Backward);
        assert_eq!(p.slides[0].elements[0].id, bottom);
    }

    #[test]
    fn test_move_slide() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);
        let first = p.slides[0].id.clone();

        let p = move_slide(&p, 0, 10);

        assert_eq!(p.slides[1].id, first);
        assert_eq!(move_slide(&p, 4, 0), p);
    }

    #[test]
    fn test_slide_properties() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);

        let p = set_slide_background(&p, 0, "bg-gradient-purple");
        let p = set_slide_border(&p, 0, "2px solid #000", "12px");
        let p = set_slide_notes(&p, 0, Some("Remember to smile"));

        let slide = &p.slides[0];
        assert_eq!(slide.background, "bg-gradient-purple");
        assert_eq!(slide.border, "2px solid #000");
        assert_eq!(slide.border_radius, "12px");
        assert_eq!(slide.notes.as_deref(), Some("Remember to smile"));

        let p = set_slide_notes(&p, 0, Some("   "));
        assert_eq!(p.slides[0].notes, None);
        assert_eq!(p.slides[0].id, SlideId::new("s1"));
    }

    #[test]
    fn test_rename_presentation() {
        let mut ids = SequentialIds::new();
        let p = deck(&mut ids);
        assert_eq!(rename_presentation(&p, "  Resume ").title, "Resume");
    }

    #[test]
    fn test_navigate_to_slide_clamps() {
        let mut ids = SequentialIds::new();
        let p = populated(&mut ids);

        assert_eq!(navigate_to_slide(&p, 0), 1);
        assert_eq!(navigate_to_slide(&p, 2), 2);
        assert_eq!(navigate_to_slide(&p, 99), 2);
    }
}
