//! HTML page generation.
//!
//! Loads the layered configuration, mounts the poster room, replays any
//! scripted filter events, and writes one standalone HTML document:
//!
//! ```text
//! dist/
//! └── index.html      # <!DOCTYPE html>, <html lang>, mount container
//! ```
//!
//! Replaying events lets a build produce a pre-filtered snapshot, for example
//! a page listing only one session's category.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Poster data is escaped automatically; label text is trusted and inserted
//! as-is.

use crate::config::{self, ConfigError};
use crate::controls::ControlEvent;
use crate::filters::ControlError;
use crate::gallery::CountSummary;
use crate::room::PosterRoom;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("control error: {0}")]
    Control(#[from] ControlError),
}

pub const DEFAULT_MOUNT_ID: &str = "poster_room";
pub const DEFAULT_TITLE: &str = "Poster room";

/// Everything the `render` command needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Configuration documents, layered in order over the stock defaults.
    pub config_paths: Vec<PathBuf>,
    pub output: PathBuf,
    pub mount_id: String,
    /// Page query string, checked for `poster_bypass`.
    pub query: String,
    /// Overrides the configured language.
    pub lang: Option<String>,
    pub title: Option<String>,
    /// Stylesheet href linked from the document head.
    pub stylesheet: Option<String>,
    /// Filter events replayed after mount, in order.
    pub events: Vec<ControlEvent>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            config_paths: Vec::new(),
            output: PathBuf::from("dist/index.html"),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            query: String::new(),
            lang: None,
            title: None,
            stylesheet: None,
            events: Vec::new(),
        }
    }
}

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub open: bool,
    pub posters: usize,
    /// `None` for a closed room.
    pub summary: Option<CountSummary>,
    pub events_applied: usize,
}

pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, GenerateError> {
    let mut overlays = options
        .config_paths
        .iter()
        .map(|p| config::load_document(p))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(lang) = &options.lang {
        overlays.push(serde_json::json!({ "lang": lang }));
    }
    let config = config::resolve_config(config::stock_defaults_value(), overlays)?;
    let lang = config.lang.clone();
    let posters = config.posters.len();

    let mut room = PosterRoom::mount(config, &options.mount_id, &options.query);
    for event in &options.events {
        room.dispatch(event)?;
    }

    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let document = base_document(title, &lang, options.stylesheet.as_deref(), room.render());
    write_document(&options.output, &document)?;

    Ok(GenerateReport {
        output: options.output.clone(),
        open: room.is_open(),
        posters,
        summary: room.gallery().map(|g| g.summary()),
        events_applied: options.events.len(),
    })
}

fn write_document(path: &Path, document: &Markup) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document.0.as_bytes())?;
    tracing::debug!(path = %path.display(), "wrote page");
    Ok(())
}

fn base_document(title: &str, lang: &str, stylesheet: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(href) = stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                (content)
            }
        }
    }
}
