//! Shared test utilities for the poster-room test suite.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let posters = vec![
//!     poster("7").title("Graphs").authors(&["Ada"]).categories(&["stat"]).build(),
//!     poster("8").hidden().build(),
//! ];
//! let (mut controls, mut entries) = setup(posters);
//! ```

use crate::config::Configuration;
use crate::controls::FilterControls;
use crate::index::{FilterIndex, GalleryEntry, prepare_entries};
use crate::types::{KeySet, PosterRecord};

// =========================================================================
// Poster builder
// =========================================================================

/// Start a displayable poster with the given number and no other field.
pub fn poster(number: &str) -> PosterBuilder {
    PosterBuilder(PosterRecord {
        number: number.to_string(),
        display: true,
        ..Default::default()
    })
}

pub struct PosterBuilder(PosterRecord);

impl PosterBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.0.title = Some(title.to_string());
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.0.authors = authors.iter().copied().collect::<KeySet>();
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.0.categories = categories.iter().copied().collect::<KeySet>();
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.0.keywords = Some(keywords.to_string());
        self
    }

    pub fn room(mut self, room: &str) -> Self {
        self.0.room = Some(room.to_string());
        self
    }

    pub fn file(mut self, file: &str) -> Self {
        self.0.poster_file = Some(file.to_string());
        self
    }

    pub fn thumbnail(mut self, thumbnail: &str) -> Self {
        self.0.thumbnail = Some(thumbnail.to_string());
        self
    }

    /// Mark the poster as never displayable.
    pub fn hidden(mut self) -> Self {
        self.0.display = false;
        self
    }

    pub fn build(self) -> PosterRecord {
        self.0
    }
}

// =========================================================================
// Engine setup
// =========================================================================

/// Filter controls and entries for `posters` under the default layout.
pub fn setup(posters: Vec<PosterRecord>) -> (FilterControls, Vec<GalleryEntry>) {
    let config = Configuration::default();
    let index = FilterIndex::build(&posters, &config.filter_dimensions);
    let controls = FilterControls::new(config.controls.clone(), &index);
    let entries = prepare_entries(posters, &config.text_filter_dimensions);
    (controls, entries)
}

/// An open room configuration with English labels and every base URL set.
pub fn open_config(posters: Vec<PosterRecord>) -> Configuration {
    Configuration {
        poster_show: true,
        lang: "en".to_string(),
        posters,
        meeting_room_base_url: "https://meet.example.org/".to_string(),
        poster_base_url: "https://example.org/pdf/".to_string(),
        thumbnail_base_url: "https://example.org/thumbs/".to_string(),
        ..Default::default()
    }
}

/// Find a gallery entry by poster number. Panics if not found.
pub fn find_entry<'a>(entries: &'a [GalleryEntry], number: &str) -> &'a GalleryEntry {
    entries
        .iter()
        .find(|e| e.record.number == number)
        .unwrap_or_else(|| {
            let numbers: Vec<&str> = entries.iter().map(|e| e.record.number.as_str()).collect();
            panic!("poster '{number}' not found. Available: {numbers:?}")
        })
}
