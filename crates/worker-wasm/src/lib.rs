//! WASM bindings for the design studio editor.
//!
//! The browser front end holds one `EditorSession` per open presentation
//! and sends it intents as plain JavaScript objects; the session returns
//! what changed plus the updated selection. Saving over the network stays
//! on the JavaScript side, which calls `markSaved` once a save succeeds.

use serde::{Deserialize, Serialize};
use studio_core::{
    Applied, Editor, EditorConfig, Error, Intent, OutlineFormatter, Presentation, Selection,
    Template, TemplateCatalog,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of dispatching an intent.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    /// What the intent did.
    pub applied: Applied,
    /// Selection after the intent.
    pub selection: Selection,
    /// 1-based number of the current slide, for display.
    pub current_slide_number: usize,
    /// Whether there are changes not yet saved.
    pub dirty: bool,
}

/// Summary of a catalog template for the templates menu.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub background: String,
    pub element_count: usize,
}

impl From<&Template> for TemplateSummary {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            background: template.background.clone(),
            element_count: template.default_elements.len(),
        }
    }
}

/// Serialize to a plain JS object (maps become objects, not `Map`s).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(format!("Serialization error: {}", e)))
}

fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

/// An editing session around one presentation.
#[wasm_bindgen]
pub struct EditorSession {
    editor: Editor,
}

#[wasm_bindgen]
impl EditorSession {
    /// Start a new presentation with one blank slide.
    #[wasm_bindgen(constructor)]
    pub fn new(title: &str) -> EditorSession {
        EditorSession {
            editor: Editor::create(title, EditorConfig::default()),
        }
    }

    /// Open a presentation from its JSON form, e.g. as loaded from the API.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<EditorSession, JsValue> {
        let editor = open_impl(json).map_err(js_error)?;
        Ok(EditorSession { editor })
    }

    /// Apply an intent object such as `{type: "addSlide", templateId: "title"}`.
    ///
    /// Throws when the intent is malformed or rejected (deleting the last
    /// slide); the document is unchanged in both cases.
    pub fn dispatch(&mut self, intent: JsValue) -> Result<JsValue, JsValue> {
        let intent: Intent = serde_wasm_bindgen::from_value(intent)
            .map_err(|e| js_error(format!("Invalid intent: {}", e)))?;
        let result = dispatch_impl(&mut self.editor, intent).map_err(js_error)?;
        to_js(&result)
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    /// The current document as a plain object.
    pub fn document(&self) -> Result<JsValue, JsValue> {
        to_js(self.editor.document())
    }

    /// The current document as JSON, ready to send to the persistence API.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.editor.document())
            .map_err(|e| js_error(format!("Serialization error: {}", e)))
    }

    pub fn selection(&self) -> Result<JsValue, JsValue> {
        to_js(self.editor.selection())
    }

    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.editor.is_dirty()
    }

    /// Record that the JSON last taken from `toJson` was saved.
    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self) {
        self.editor.mark_saved();
    }

    /// Replace the session's templates with a catalog fetched as JSON.
    /// Returns the number of templates installed.
    #[wasm_bindgen(js_name = setTemplates)]
    pub fn set_templates(&mut self, json: &str) -> Result<usize, JsValue> {
        set_templates_impl(&mut self.editor, json).map_err(js_error)
    }

    /// The templates this session applies, for the templates menu.
    pub fn templates(&self) -> Result<JsValue, JsValue> {
        to_js(&summarize(self.editor.catalog()))
    }

    /// Plain-text outline of the slides.
    #[wasm_bindgen(js_name = exportOutline)]
    pub fn export_outline(&self) -> String {
        OutlineFormatter::new().format_with_newline(self.editor.document())
    }
}

/// The built-in templates, for the templates menu.
#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates() -> Result<JsValue, JsValue> {
    to_js(&list_templates_impl())
}

fn open_impl(json: &str) -> Result<Editor, String> {
    let document: Presentation =
        serde_json::from_str(json).map_err(|e| format!("Invalid presentation: {}", e))?;
    let mut editor = Editor::new(document).map_err(|e| e.to_string())?;
    editor.mark_saved();
    Ok(editor)
}

fn dispatch_impl(editor: &mut Editor, intent: Intent) -> Result<DispatchResult, String> {
    let applied = editor.dispatch(intent).map_err(|e| match e {
        Error::LastSlide => "Cannot delete the last slide".to_string(),
        other => other.to_string(),
    })?;

    Ok(DispatchResult {
        applied,
        selection: editor.selection().clone(),
        current_slide_number: editor.selection().current_slide_number(),
        dirty: editor.is_dirty(),
    })
}

fn set_templates_impl(editor: &mut Editor, json: &str) -> Result<usize, String> {
    let catalog =
        TemplateCatalog::from_json(json).map_err(|e| format!("Invalid template catalog: {}", e))?;
    let count = catalog.len();
    editor.set_catalog(catalog);
    Ok(count)
}

fn summarize(catalog: &TemplateCatalog) -> Vec<TemplateSummary> {
    catalog.templates().iter().map(TemplateSummary::from).collect()
}

fn list_templates_impl() -> Vec<TemplateSummary> {
    summarize(&TemplateCatalog::builtin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DECK: &str = r##"{
        "id": "deck-1",
        "title": "Portfolio",
        "slides": [
            {"id": "s1", "background": "#ffffff", "elements": [
                {"id": "e1", "type": "text", "content": "Hello",
                 "x": 0, "y": 0, "width": 100, "height": 40,
                 "style": {"color": "#000000"}}
            ]}
        ]
    }"##;

    fn intent(value: serde_json::Value) -> Intent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_open_is_clean() {
        let editor = open_impl(DECK).unwrap();
        assert!(!editor.is_dirty());
        assert_eq!(editor.document().title, "Portfolio");
    }

    #[test]
    fn test_open_rejects_empty_deck() {
        assert!(open_impl(r#"{"id": "x", "title": "x", "slides": []}"#).is_err());
        assert!(open_impl("not json").is_err());
    }

    #[test]
    fn test_dispatch_style_merge() {
        let mut editor = open_impl(DECK).unwrap();

        let result = dispatch_impl(
            &mut editor,
            intent(json!({
                "type": "updateElementStyle",
                "slide": 0,
                "elementId": "e1",
                "style": {"backgroundColor": "#ffffff"}
            })),
        )
        .unwrap();

        assert_eq!(result.applied, Applied::Changed);
        assert!(result.dirty);
        let style = &editor.document().slides[0].elements[0].style;
        assert_eq!(style["color"], "#000000");
        assert_eq!(style["backgroundColor"], "#ffffff");
    }

    #[test]
    fn test_dispatch_last_slide_message() {
        let mut editor = open_impl(DECK).unwrap();

        let err = dispatch_impl(&mut editor, intent(json!({"type": "deleteSlide", "slide": 0})))
            .unwrap_err();

        assert_eq!(err, "Cannot delete the last slide");
        assert_eq!(editor.document().slides.len(), 1);
    }

    #[test]
    fn test_dispatch_add_slide_reports_number() {
        let mut editor = open_impl(DECK).unwrap();

        let result = dispatch_impl(
            &mut editor,
            intent(json!({"type": "addSlide", "templateId": "title"})),
        )
        .unwrap();

        assert_eq!(result.applied, Applied::AddedSlide(1));
        assert_eq!(result.current_slide_number, 2);
    }

    #[test]
    fn test_fetched_templates_replace_builtin() {
        let mut editor = open_impl(DECK).unwrap();

        let count = set_templates_impl(
            &mut editor,
            r##"[{"id": "brand", "name": "Brand", "background": "#0b3d91", "mode": "replace",
                 "defaultElements": [{"type": "text", "content": "Acme"}]}]"##,
        )
        .unwrap();
        assert_eq!(count, 1);
        assert_eq!(summarize(editor.catalog())[0].id, "brand");

        let result = dispatch_impl(
            &mut editor,
            intent(json!({"type": "addSlide", "templateId": "brand"})),
        )
        .unwrap();
        assert_eq!(result.applied, Applied::AddedSlide(1));
        assert_eq!(editor.document().slides[1].background, "#0b3d91");

        let unknown = dispatch_impl(
            &mut editor,
            intent(json!({"type": "addSlide", "templateId": "title"})),
        )
        .unwrap();
        assert_eq!(unknown.applied, Applied::Unchanged);
    }

    #[test]
    fn test_invalid_templates_keep_catalog() {
        let mut editor = open_impl(DECK).unwrap();
        assert!(set_templates_impl(&mut editor, "{").is_err());
        assert!(editor.catalog().get("title").is_some());
    }

    #[test]
    fn test_list_templates() {
        let templates = list_templates_impl();
        assert!(templates.iter().any(|t| t.id == "blank" && t.element_count == 0));
        assert!(templates.iter().any(|t| t.id == "title" && t.element_count == 2));
    }
}
