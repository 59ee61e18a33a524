//! Storage of presentations outside the editor.
//!
//! Stores are plain collaborators: they neither retry nor cache on the
//! editor's behalf, and a failed save never touches the in-memory document.

use crate::error::{Error, Result};
use crate::types::Presentation;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Something that can save and load presentations by id.
pub trait PresentationStore {
    /// Persist a snapshot of `presentation`, replacing any earlier copy.
    fn save(&mut self, presentation: &Presentation) -> Result<()>;

    /// Load the presentation with the given id.
    ///
    /// Fails with [`Error::NotFound`] when there is none.
    fn load(&self, id: &str) -> Result<Presentation>;
}

/// In-memory store, mainly for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, Presentation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl PresentationStore for MemoryStore {
    fn save(&mut self, presentation: &Presentation) -> Result<()> {
        self.documents
            .insert(presentation.id.clone(), presentation.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Presentation> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

/// Stores each presentation as `<id>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a presentation id. Ids that could escape the root
    /// directory are rejected.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(Error::InvalidDocument(format!(
                "presentation id {:?} is not usable as a file name",
                id
            )));
        }
        Ok(self.root.join(format!("{}.json", id)))
    }

    /// Ids of all stored presentations, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

impl PresentationStore for JsonFileStore {
    fn save(&mut self, presentation: &Presentation) -> Result<()> {
        let path = self.path_for(&presentation.id)?;
        fs::create_dir_all(&self.root)?;

        // Write beside the target first so a failed write never truncates
        // the previous copy.
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(presentation)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;

        log::debug!("Saved presentation {} to {}", presentation.id, path.display());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Presentation> {
        let path = self.path_for(id)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let presentation: Presentation = serde_json::from_str(&json)?;
        presentation.validate()?;
        Ok(presentation)
    }
}
