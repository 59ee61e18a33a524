//! Command-line editor for design studio presentations.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use studio_core::{
    export, Applied, Editor, EditorConfig, ElementDraft, ElementId, ExportFormat, Intent,
    JsonFileStore, Presentation, PresentationStore, StyleMap, TemplateCatalog, UuidIds,
};

/// Edit presentations stored as JSON documents.
#[derive(Parser, Debug)]
#[command(name = "studio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Presentation id (file name without .json inside the store)
    id: String,

    #[command(subcommand)]
    command: Command,

    /// Directory holding presentation files
    #[arg(short, long, default_value = "presentations")]
    store: PathBuf,

    /// Editor settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template catalog file (JSON) used instead of the built-in templates
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Position and size overrides for a new element.
#[derive(clap::Args, Debug)]
struct Geometry {
    #[arg(long)]
    x: Option<f64>,
    #[arg(long)]
    y: Option<f64>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
}

impl Geometry {
    fn apply(&self, draft: ElementDraft) -> ElementDraft {
        let (x, y) = (self.x.unwrap_or(draft.x), self.y.unwrap_or(draft.y));
        let (w, h) = (
            self.width.unwrap_or(draft.width),
            self.height.unwrap_or(draft.height),
        );
        draft.at(x, y).sized(w, h)
    }
}

/// Slide numbers are 1-based throughout.
#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new presentation with one blank slide
    New { title: String },
    /// Print the slides and elements
    Show,
    /// Add a slide, blank or from a template
    AddSlide {
        /// Insert after this slide (default: at the end)
        #[arg(long)]
        after: Option<usize>,
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Copy a slide, placing the copy right after it
    DuplicateSlide { slide: usize },
    /// Delete a slide (the last remaining slide cannot be deleted)
    DeleteSlide { slide: usize },
    /// Move a slide to another position
    MoveSlide { from: usize, to: usize },
    /// Add a text box
    AddText {
        slide: usize,
        text: String,
        #[command(flatten)]
        geometry: Geometry,
    },
    /// Add an image
    AddImage {
        slide: usize,
        url: String,
        #[command(flatten)]
        geometry: Geometry,
    },
    /// Add a shape
    AddShape {
        slide: usize,
        marker: String,
        #[command(flatten)]
        geometry: Geometry,
    },
    /// Merge KEY=VALUE pairs into an element's style (VALUE null removes KEY)
    Style {
        slide: usize,
        element: String,
        #[arg(required = true)]
        pairs: Vec<String>,
    },
    /// Move an element
    Move {
        slide: usize,
        element: String,
        x: f64,
        y: f64,
    },
    /// Resize an element
    Resize {
        slide: usize,
        element: String,
        width: f64,
        height: f64,
    },
    /// Delete an element
    DeleteElement { slide: usize, element: String },
    /// Apply a template to a slide
    ApplyTemplate { slide: usize, template: String },
    /// Set a slide's background
    Background { slide: usize, background: String },
    /// Set or clear a slide's speaker notes
    Notes { slide: usize, notes: Option<String> },
    /// Rename the presentation
    Rename { title: String },
    /// List available templates
    Templates,
    /// Export the presentation
    Export {
        /// json or outline
        #[arg(short, long, default_value = "outline")]
        format: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };

    let catalog = match &args.templates {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            TemplateCatalog::from_json(&json)
                .with_context(|| format!("Invalid template catalog {}", path.display()))?
        }
        None => TemplateCatalog::builtin(),
    };

    let mut store = JsonFileStore::new(&args.store);

    match &args.command {
        Command::New { title } => {
            create_presentation(&mut store, &args.id, title, &config)?;
            if args.verbose {
                eprintln!("Created {} in {}", args.id, store.root().display());
            }
            return Ok(());
        }
        Command::Templates => {
            for template in catalog.templates() {
                println!(
                    "{:<16} {:<20} {:?} ({} elements)",
                    template.id,
                    template.name,
                    template.mode,
                    template.default_elements.len()
                );
            }
            return Ok(());
        }
        _ => {}
    }

    let document = store
        .load(&args.id)
        .with_context(|| format!("Failed to load {}", args.id))?;
    let mut editor = Editor::new(document)?
        .with_config(config)
        .with_catalog(catalog);
    editor.mark_saved();

    match &args.command {
        Command::Show => print_presentation(editor.document()),
        Command::Export { format, output } => {
            let format: ExportFormat = format.parse()?;
            let bytes = export(editor.document(), format)?;
            match output {
                Some(path) => std::fs::write(path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => std::io::stdout().write_all(&bytes)?,
            }
        }
        command => {
            let intent = to_intent(command)?;
            let applied = editor.dispatch(intent).context("Edit rejected")?;
            report(&applied);

            if editor.is_dirty() {
                editor
                    .save(&mut store)
                    .with_context(|| format!("Failed to save {}", args.id))?;
            }
        }
    }

    Ok(())
}

/// Create and save a one-slide presentation, refusing to replace an
/// existing one.
fn create_presentation(
    store: &mut dyn PresentationStore,
    id: &str,
    title: &str,
    config: &EditorConfig,
) -> Result<Presentation> {
    match store.load(id) {
        Err(studio_core::Error::NotFound(_)) => {}
        Ok(_) => bail!("Presentation {} already exists", id),
        Err(e) => {
            return Err(e).with_context(|| format!("Presentation {} exists but is unreadable", id))
        }
    }

    let mut document = Presentation::with_id(id, title, &mut UuidIds);
    document.slides[0].background = config.default_background.clone();
    store
        .save(&document)
        .with_context(|| format!("Failed to save {}", id))?;
    Ok(document)
}

/// Convert a 1-based slide number to an index.
fn to_index(slide_number: usize) -> Result<usize> {
    if slide_number == 0 {
        bail!("Slide numbers start at 1");
    }
    Ok(slide_number - 1)
}

/// Parse `key=value`. Values that parse as JSON (numbers, `null`, ...) are
/// kept as such; anything else is a string.
fn parse_style_pair(pair: &str) -> Result<(String, Value)> {
    let (key, value) = pair
        .split_once('=')
        .with_context(|| format!("Expected KEY=VALUE, got {:?}", pair))?;
    if key.trim().is_empty() {
        bail!("Empty style key in {:?}", pair);
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.trim().to_string(), value))
}

/// Translate an editing command into an editor intent.
fn to_intent(command: &Command) -> Result<Intent> {
    let intent = match command {
        Command::AddSlide { after, template } => Intent::AddSlide {
            after: after.map(to_index).transpose()?,
            template_id: template.clone(),
        },
        Command::DuplicateSlide { slide } => Intent::DuplicateSlide {
            slide: to_index(*slide)?,
        },
        Command::DeleteSlide { slide } => Intent::DeleteSlide {
            slide: to_index(*slide)?,
        },
        Command::MoveSlide { from, to } => Intent::MoveSlide {
            from: to_index(*from)?,
            to: to_index(*to)?,
        },
        Command::AddText {
            slide,
            text,
            geometry,
        } => Intent::AddElement {
            slide: to_index(*slide)?,
            element: geometry.apply(ElementDraft::text(text)),
        },
        Command::AddImage {
            slide,
            url,
            geometry,
        } => Intent::AddElement {
            slide: to_index(*slide)?,
            element: geometry.apply(ElementDraft::image(url)),
        },
        Command::AddShape {
            slide,
            marker,
            geometry,
        } => Intent::AddElement {
            slide: to_index(*slide)?,
            element: geometry.apply(ElementDraft::shape(marker)),
        },
        Command::Style {
            slide,
            element,
            pairs,
        } => Intent::UpdateElementStyle {
            slide: to_index(*slide)?,
            element_id: ElementId::new(element),
            style: pairs
                .iter()
                .map(|p| parse_style_pair(p))
                .collect::<Result<StyleMap>>()?,
        },
        Command::Move {
            slide,
            element,
            x,
            y,
        } => Intent::MoveElement {
            slide: to_index(*slide)?,
            element_id: ElementId::new(element),
            x: *x,
            y: *y,
        },
        Command::Resize {
            slide,
            element,
            width,
            height,
        } => Intent::ResizeElement {
            slide: to_index(*slide)?,
            element_id: ElementId::new(element),
            width: *width,
            height: *height,
        },
        Command::DeleteElement { slide, element } => Intent::DeleteElement {
            slide: to_index(*slide)?,
            element_id: ElementId::new(element),
        },
        Command::ApplyTemplate { slide, template } => Intent::ApplyTemplate {
            slide: to_index(*slide)?,
            template_id: template.clone(),
        },
        Command::Background { slide, background } => Intent::SetBackground {
            slide: to_index(*slide)?,
            background: background.clone(),
        },
        Command::Notes { slide, notes } => Intent::SetNotes {
            slide: to_index(*slide)?,
            notes: notes.clone(),
        },
        Command::Rename { title } => Intent::Rename {
            title: title.clone(),
        },
        Command::New { .. } | Command::Show | Command::Templates | Command::Export { .. } => {
            bail!("Not an editing command")
        }
    };

    Ok(intent)
}

fn report(applied: &Applied) {
    match applied {
        Applied::AddedElement(id) => println!("{}", id),
        Applied::AddedSlide(index) => println!("slide {}", index + 1),
        Applied::Unchanged => eprintln!("Nothing changed"),
        Applied::Changed | Applied::Navigated(_) => {}
    }
}

fn print_presentation(presentation: &Presentation) {
    println!("{} ({})", presentation.title, presentation.id);
    for (i, slide) in presentation.slides.iter().enumerate() {
        println!("  Slide {} [{}] background={}", i + 1, slide.id, slide.background);
        for element in &slide.elements {
            println!(
                "    {:<10} {:<6} ({}, {}) {}x{} {:?}",
                element.id.as_str(),
                element.kind.as_str(),
                element.x,
                element.y,
                element.width,
                element.height,
                element.content
            );
        }
        if let Some(notes) = &slide.notes {
            println!("    notes: {}", notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::MemoryStore;

    #[test]
    fn test_new_refuses_to_overwrite() {
        let mut store = MemoryStore::new();
        let config = EditorConfig::new().with_default_background("#101010");

        let created = create_presentation(&mut store, "deck", "Portfolio", &config).unwrap();
        assert_eq!(created.slides[0].background, "#101010");

        assert!(create_presentation(&mut store, "deck", "Other", &config).is_err());
        assert_eq!(store.load("deck").unwrap().title, "Portfolio");
    }

    #[test]
    fn test_to_index() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert!(to_index(0).is_err());
    }

    #[test]
    fn test_parse_style_pair() {
        assert_eq!(
            parse_style_pair("fontSize=24").unwrap(),
            ("fontSize".to_string(), Value::from(24))
        );
        assert_eq!(
            parse_style_pair("color=#ff0000").unwrap(),
            ("color".to_string(), Value::from("#ff0000"))
        );
        assert_eq!(
            parse_style_pair("color=null").unwrap(),
            ("color".to_string(), Value::Null)
        );
        assert!(parse_style_pair("color").is_err());
        assert!(parse_style_pair("=red").is_err());
    }

    #[test]
    fn test_command_to_intent() {
        let intent = to_intent(&Command::DeleteSlide { slide: 2 }).unwrap();
        assert_eq!(intent, Intent::DeleteSlide { slide: 1 });

        let intent = to_intent(&Command::AddText {
            slide: 1,
            text: "Hello".to_string(),
            geometry: Geometry {
                x: Some(5.0),
                y: None,
                width: None,
                height: Some(10.0),
            },
        })
        .unwrap();
        match intent {
            Intent::AddElement { slide, element } => {
                assert_eq!(slide, 0);
                assert_eq!((element.x, element.y), (5.0, 100.0));
                assert_eq!((element.width, element.height), (300.0, 10.0));
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(to_intent(&Command::Show).is_err());
    }
}
