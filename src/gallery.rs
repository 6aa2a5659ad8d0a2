//! Gallery rendering.
//!
//! Every render cycle starts from scratch: [`update_visibility`] recomputes
//! the `visible` flag of every entry from the filter state and the text match
//! flags, then [`render_gallery`] emits markup for the visible posters only.
//!
//! ## Poster markup
//!
//! Fields are emitted in a fixed order, each one only when it has a value:
//!
//! ```text
//! #812 Graph Biology
//! Ada, Émile
//! Categories: stat, NGS
//! Keywords: biology, networks
//! [thumbnail or "no preview" placeholder]
//! Room: room-812
//! Download PDF
//! ```
//!
//! Thumbnails, room links and PDF links also need their base URL; without it
//! the field is dropped for every poster.

use crate::config::BaseUrls;
use crate::controls::{CLASS_PREFIX, ID_PREFIX};
use crate::filters::FilterState;
use crate::index::GalleryEntry;
use crate::labels::LabelDictionary;
use crate::types::{KeySet, PosterRecord, present};
use maud::{Markup, PreEscaped, html};
use std::fmt;

/// Displayed versus eligible poster counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Posters currently visible.
    pub displayed: usize,
    /// Posters that were displayable at mount, whatever the filters say.
    pub eligible: usize,
}

impl fmt::Display for CountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.displayed, self.eligible)
    }
}

/// Everything poster markup needs besides the poster itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub labels: &'a LabelDictionary,
    pub lang: &'a str,
    pub urls: &'a BaseUrls,
}

impl<'a> RenderContext<'a> {
    /// Label text, or `None` when the dictionary has nothing for it.
    fn label(&self, key: &str) -> Option<&'a str> {
        self.labels.resolve(key, self.lang).filter(|s| !s.is_empty())
    }

    fn label_or_key(&self, key: &'a str) -> &'a str {
        self.labels.label_or_key(key, self.lang)
    }
}

/// Recompute `visible` for every entry and count the result.
pub fn update_visibility(entries: &mut [GalleryEntry], filters: &FilterState) -> CountSummary {
    let mut summary = CountSummary::default();
    for entry in entries.iter_mut() {
        if entry.initially_visible {
            summary.eligible += 1;
        }
        entry.visible =
            entry.initially_visible && entry.matches_all_text() && filters.matches(&entry.record);
        if entry.visible {
            summary.displayed += 1;
        }
    }
    summary
}

/// Count line: `Displaying 3 / 5 posters`.
pub fn render_count(summary: CountSummary, ctx: &RenderContext<'_>) -> Markup {
    html! {
        div id={ (ID_PREFIX) "_count" } {
            (PreEscaped(ctx.label_or_key("posters_count")))
            " " (summary.to_string()) " "
            (PreEscaped(ctx.label_or_key("posters")))
        }
    }
}

/// Gallery container with every visible poster, in document order.
pub fn render_gallery(entries: &[GalleryEntry], ctx: &RenderContext<'_>) -> Markup {
    html! {
        div id={ (ID_PREFIX) "_gallery" } {
            @for entry in entries.iter().filter(|e| e.visible) {
                (render_poster(&entry.record, ctx))
            }
        }
    }
}

/// Markup of a single poster.
pub fn render_poster(poster: &PosterRecord, ctx: &RenderContext<'_>) -> Markup {
    html! {
        @let number = format!("#{}", poster.number);
        div class={ (CLASS_PREFIX) "-poster" } {
            (render_field(Some(number.as_str()), "poster-number", None))
            (PreEscaped("&nbsp;"))
            (render_field(present(&poster.title), "poster-title", None))
            br;
            (render_values(&poster.authors, "poster-authors", "poster-author", None))
            br;
            @if !poster.categories.is_empty() {
                (render_values(&poster.categories, "poster-categories", "poster-category", ctx.label("categories")))
                br;
            }
            @if let Some(keywords) = present(&poster.keywords) {
                (render_field(Some(keywords), "poster-keywords", ctx.label("keywords")))
                br;
                br;
            }
            @if let Some(thumbnail) = render_thumbnail(poster, ctx) {
                (thumbnail)
            }
            br;
            @if let (Some(base), Some(room)) = (&ctx.urls.meeting_room, present(&poster.room)) {
                span class={ (CLASS_PREFIX) "-poster-room" } {
                    @if let Some(label) = ctx.label("room") {
                        span class={ (CLASS_PREFIX) "-label" } { (PreEscaped(label)) ":" }
                        " "
                    }
                    a href={ (base) (room) } target="_blank" { (room) }
                }
            }
            @if let (Some(base), Some(file)) = (&ctx.urls.poster, present(&poster.poster_file)) {
                span class={ (CLASS_PREFIX) "-poster-pdf" } {
                    a href={ (base) (file) } target="_blank" {
                        (PreEscaped(ctx.label_or_key("pdf")))
                    }
                }
            }
        }
    }
}

/// Preview image, or the placeholder when the poster has none. `None` when
/// thumbnails are disabled.
fn render_thumbnail(poster: &PosterRecord, ctx: &RenderContext<'_>) -> Option<Markup> {
    let base = ctx.urls.thumbnail.as_deref()?;
    Some(match present(&poster.thumbnail) {
        Some(thumbnail) => html! {
            span class={ (CLASS_PREFIX) "-poster-thumbnail" } {
                img alt="Poster preview" src={ (base) (thumbnail) };
            }
        },
        None => html! {
            span class={ (CLASS_PREFIX) "-no-thumbnail" } {
                (PreEscaped(ctx.label_or_key("no_thumbnail")))
            }
        },
    })
}

/// A single value, wrapped with its label when the label is non-empty.
fn render_field(value: Option<&str>, class: &str, label: Option<&str>) -> Markup {
    let Some(value) = value else {
        return html! {};
    };
    let field = html! {
        span class={ (CLASS_PREFIX) "-" (class) } { (value) }
    };
    match label {
        Some(label) => html! {
            span class={ (CLASS_PREFIX) "-" (class) "-field" } {
                span class={ (CLASS_PREFIX) "-label" } { (PreEscaped(label)) }
                " "
                (field)
            }
        },
        None => field,
    }
}

/// A comma-separated list of set values.
fn render_values(
    values: &KeySet,
    container_class: &str,
    element_class: &str,
    label: Option<&str>,
) -> Markup {
    html! {
        span class={ (CLASS_PREFIX) "-" (container_class) } {
            @if let Some(label) = label {
                span class={ (CLASS_PREFIX) "-label" } { (PreEscaped(label)) }
                ": "
            }
            @for (i, value) in values.non_empty().enumerate() {
                @if i > 0 { ", " }
                span class={ (CLASS_PREFIX) "-" (element_class) } { (value) }
            }
        }
    }
}
