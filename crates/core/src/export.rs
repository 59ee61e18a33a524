//! Export of presentation snapshots.
//!
//! Exports read the presentation and produce bytes; they never modify it.

use crate::error::{Error, Result};
use crate::types::{Presentation, Slide};
use serde::{Deserialize, Serialize};

/// Supported export artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The full document as pretty-printed JSON.
    Json,
    /// Plain-text outline of the slide text.
    Outline,
}

impl ExportFormat {
    /// File extension for the artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Outline => "txt",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "outline" | "txt" | "text" => Ok(Self::Outline),
            other => Err(Error::Export(format!("unsupported export format: {}", other))),
        }
    }
}

/// Produce an export artifact from a presentation snapshot.
pub fn export(presentation: &Presentation, format: ExportFormat) -> Result<Vec<u8>> {
    log::debug!(
        "Exporting presentation {} as {:?} ({} slides)",
        presentation.id,
        format,
        presentation.slides.len()
    );

    match format {
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(presentation)?),
        ExportFormat::Outline => Ok(OutlineFormatter::new()
            .format_with_newline(presentation)
            .into_bytes()),
    }
}

/// Formatter for plain-text outlines.
///
/// Each slide becomes one block: a `Slide N` heading, the slide's text
/// contents in stacking order, and optionally its notes. Blocks are
/// separated by a blank line.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Whether to add a `Notes:` line for slides with speaker notes.
    include_notes: bool,

    /// Whether to start each block with a `Slide N` heading.
    include_headings: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self {
            include_notes: true,
            include_headings: true,
        }
    }
}

impl OutlineFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(mut self, include: bool) -> Self {
        self.include_notes = include;
        self
    }

    pub fn with_headings(mut self, include: bool) -> Self {
        self.include_headings = include;
        self
    }

    /// Format one slide's block. `number` is 1-based.
    pub fn format_slide(&self, slide: &Slide, number: usize) -> String {
        let mut lines: Vec<String> = Vec::new();

        if self.include_headings {
            lines.push(format!("Slide {}", number));
        }
        lines.extend(slide.text_contents().into_iter().map(str::to_string));
        if self.include_notes {
            if let Some(notes) = &slide.notes {
                lines.push(format!("Notes: {}", notes));
            }
        }

        lines.join("\n")
    }

    /// Format the whole presentation.
    ///
    /// # Example output
    /// ```text
    /// Slide 1
    /// Quarterly Review
    ///
    /// Slide 2
    /// Revenue grew 12%
    /// Notes: mention the new region
    /// ```
    pub fn format(&self, presentation: &Presentation) -> String {
        presentation
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| self.format_slide(slide, i + 1))
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format and add a trailing newline to non-empty output.
    pub fn format_with_newline(&self, presentation: &Presentation) -> String {
        let formatted = self.format(presentation);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::mutation::{add_element, duplicate_slide, set_slide_notes, update_element_content};
    use crate::types::ElementDraft;

    fn sample() -> Presentation {
        let mut ids = SequentialIds::new();
        let p = Presentation::with_id("p1", "Review", &mut ids);
        let (p, _) = add_element(&p, 0, ElementDraft::text("Quarterly Review"), &mut ids);
        let (p, _) = add_element(&p, 0, ElementDraft::image("logo.png"), &mut ids);
        let (p, _) = duplicate_slide(&p, 0, &mut ids);
        let id = p.slides[1].elements[0].id.clone();
        let p = update_element_content(&p, 1, &id, "Revenue grew 12%");
        set_slide_notes(&p, 1, Some("mention the new region"))
    }

    #[test]
    fn test_outline() {
        let outline = OutlineFormatter::new().format(&sample());
        assert_eq!(
            outline,
            "Slide 1\nQuarterly Review\n\nSlide 2\nRevenue grew 12%\nNotes: mention the new region"
        );
    }

    #[test]
    fn test_outline_without_headings_or_notes() {
        let outline = OutlineFormatter::new()
            .with_headings(false)
            .with_notes(false)
            .format(&sample());
        assert_eq!(outline, "Quarterly Review\n\nRevenue grew 12%");
    }

    #[test]
    fn test_outline_trailing_newline() {
        let outline = OutlineFormatter::new().format_with_newline(&sample());
        assert!(outline.ends_with("region\n"));
    }

    #[test]
    fn test_json_export_parses_back() {
        let presentation = sample();
        let bytes = export(&presentation, ExportFormat::Json).unwrap();
        let parsed: Presentation = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, presentation);
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Outline);
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Outline.extension(), "txt");
    }
}
