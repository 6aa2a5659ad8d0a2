//! Filter bar controls.
//!
//! [`FilterControls`] owns everything the filter bar writes to: the
//! [`FilterState`] of the set dimensions and the text typed into each search
//! box. It applies [`ControlEvent`]s (the click/change/input events of the
//! page) and renders the bar itself. It never decides visibility; that is
//! [`crate::gallery::update_visibility`]'s job.
//!
//! ## Element ids
//!
//! Ids are derived from the dimension name so stylesheets and tests can rely
//! on them:
//!
//! | control | id |
//! |---------|----|
//! | container | `poster_room_<dim>_filter` |
//! | master checkbox | `poster_room_<dim>_filter_master_checkbox` |
//! | value checkbox | `poster_room_<dim>_<value>` (non-word runs → `_`) |
//! | dropdown | `poster_room_<dim>_select` |
//! | search box | `poster_room_<dim>_filter_text` |

use crate::collate;
use crate::config::ControlSpec;
use crate::filters::{ControlError, DimensionFilter, FilterState, Selection};
use crate::index::{FilterIndex, GalleryEntry};
use crate::labels::LabelDictionary;
use crate::types::{SetDimension, TextDimension};
use maud::{Markup, PreEscaped, html};
use std::collections::BTreeMap;

pub const ID_PREFIX: &str = "poster_room";
pub const CLASS_PREFIX: &str = "poster-room";

const NBSP: PreEscaped<&str> = PreEscaped("&nbsp;");

/// A user interaction with the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// One value checkbox changed.
    Checkbox {
        dimension: SetDimension,
        value: String,
        checked: bool,
    },
    /// The master checkbox of a group was clicked.
    MasterCheckbox { dimension: SetDimension, checked: bool },
    /// A dropdown option was picked; `None` is the leading "-" option.
    Dropdown {
        dimension: SetDimension,
        value: Option<String>,
    },
    /// The content of a search box changed.
    Text { dimension: TextDimension, query: String },
}

/// State and markup of the filter bar.
#[derive(Debug, Clone)]
pub struct FilterControls {
    specs: Vec<ControlSpec>,
    filters: FilterState,
    queries: BTreeMap<TextDimension, String>,
}

impl FilterControls {
    pub fn new(specs: Vec<ControlSpec>, index: &FilterIndex) -> Self {
        let filters = FilterState::from_index(index, &specs);
        Self {
            specs,
            filters,
            queries: BTreeMap::new(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Text currently typed into the search box of `dimension`.
    pub fn query(&self, dimension: TextDimension) -> &str {
        self.queries.get(&dimension).map(String::as_str).unwrap_or_default()
    }

    /// Apply one event to the filter state or to the entries' match flags.
    ///
    /// Rejected events leave everything untouched.
    pub fn apply(
        &mut self,
        event: &ControlEvent,
        entries: &mut [GalleryEntry],
    ) -> Result<(), ControlError> {
        match event {
            ControlEvent::Checkbox {
                dimension,
                value,
                checked,
            } => self.filters.set_checked(*dimension, value, *checked),
            ControlEvent::MasterCheckbox { dimension, checked } => {
                self.filters.set_all(*dimension, *checked)
            }
            ControlEvent::Dropdown { dimension, value } => {
                self.filters.select(*dimension, value.as_deref())
            }
            ControlEvent::Text { dimension, query } => {
                let bound = self
                    .specs
                    .iter()
                    .any(|s| matches!(s, ControlSpec::Text { dimension: d, .. } if d == dimension));
                if !bound {
                    return Err(ControlError::NoControl {
                        dimension: dimension.to_string(),
                        expected: "text",
                    });
                }
                apply_text_query(entries, *dimension, query);
                self.queries.insert(*dimension, query.clone());
                Ok(())
            }
        }
    }

    /// Render the whole filter bar, reflecting the current state.
    pub fn render(&self, labels: &LabelDictionary, lang: &str) -> Markup {
        html! {
            div id={ (ID_PREFIX) "_filters" } {
                @for spec in &self.specs {
                    (self.render_control(spec, labels, lang))
                    br;
                }
            }
        }
    }

    fn render_control(&self, spec: &ControlSpec, labels: &LabelDictionary, lang: &str) -> Markup {
        let caption = PreEscaped(labels.label_or_key(spec.label(), lang));
        match spec {
            ControlSpec::Checkboxes { dimension, .. } => match self.filters.get(*dimension) {
                Some(DimensionFilter::Checkboxes { values, master }) => {
                    render_checkboxes(*dimension, caption, values, *master, labels, lang)
                }
                _ => render_checkboxes(*dimension, caption, &[], true, labels, lang),
            },
            ControlSpec::Dropdown { dimension, .. } => match self.filters.get(*dimension) {
                Some(DimensionFilter::Dropdown { values, selection }) => {
                    render_dropdown(*dimension, caption, values, selection)
                }
                _ => render_dropdown(*dimension, caption, &[], &Selection::All),
            },
            ControlSpec::Text { dimension, .. } => {
                render_text(*dimension, caption, self.query(*dimension))
            }
        }
    }
}

/// Recompute one text dimension's match flag on every entry.
///
/// An empty query matches everything. Otherwise the field must contain the
/// query, compared in lowercase.
pub fn apply_text_query(entries: &mut [GalleryEntry], dimension: TextDimension, query: &str) {
    if query.is_empty() {
        for entry in entries.iter_mut() {
            entry.set_match(dimension, true);
        }
        return;
    }
    let needle = query.to_lowercase();
    for entry in entries.iter_mut() {
        let haystack = entry.record.text_field(dimension).to_lowercase();
        entry.set_match(dimension, haystack.contains(&needle));
    }
}

/// Element id fragment for a value: runs of non-word characters become `_`.
pub fn sanitize_id(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

/// Display name of a filter value: its label when the dictionary has one in
/// `lang`, the (escaped) raw value otherwise.
fn value_label(value: &str, labels: &LabelDictionary, lang: &str) -> Markup {
    match labels.resolve(value, lang) {
        Some(text) => html! { (PreEscaped(text)) },
        None => html! { (value) },
    }
}

fn render_checkboxes(
    dimension: SetDimension,
    caption: PreEscaped<&str>,
    values: &[(String, bool)],
    master: bool,
    labels: &LabelDictionary,
    lang: &str,
) -> Markup {
    let container_id = format!("{ID_PREFIX}_{dimension}_filter");
    let master_id = format!("{container_id}_master_checkbox");
    let value_class = format!("{CLASS_PREFIX}-{dimension}");
    html! {
        div id=(container_id) class={ (CLASS_PREFIX) "-filter" } {
            input type="checkbox" id=(master_id) value="" class={ (CLASS_PREFIX) "-master-checkbox" } checked[master];
            label class={ (CLASS_PREFIX) "-label" } for=(master_id) { (caption) ":" }
            br;
            div class={ (CLASS_PREFIX) "-checkbox-group" } {
                @for (value, checked) in values {
                    @let checkbox_id = format!("{ID_PREFIX}_{dimension}_{}", sanitize_id(value));
                    div class={ (CLASS_PREFIX) "-checkbox" } {
                        input id=(checkbox_id) type="checkbox" value=(value) class=(value_class) checked[*checked];
                        (NBSP)
                        label for=(checkbox_id) { (value_label(value, labels, lang)) }
                    }
                }
            }
            br style="clear: both;";
        }
    }
}

fn render_dropdown(
    dimension: SetDimension,
    caption: PreEscaped<&str>,
    values: &[String],
    selection: &Selection,
) -> Markup {
    let mut options: Vec<&str> = values.iter().map(String::as_str).collect();
    collate::sort(&mut options);
    let selected = match selection {
        Selection::All => None,
        Selection::One(value) => Some(value.as_str()),
    };
    html! {
        div id={ (ID_PREFIX) "_" (dimension.as_str()) "_filter" } class={ (CLASS_PREFIX) "-filter" } {
            span class={ (CLASS_PREFIX) "-label" } { (caption) ":" }
            (NBSP)
            select name=(dimension.as_str()) id={ (ID_PREFIX) "_" (dimension.as_str()) "_select" } {
                option value="" selected[selected.is_none()] { "-" }
                @for option in options {
                    option value=(option) selected[selected == Some(option)] { (option) }
                }
            }
        }
    }
}

fn render_text(dimension: TextDimension, caption: PreEscaped<&str>, query: &str) -> Markup {
    let input_id = format!("{ID_PREFIX}_{dimension}_filter_text");
    html! {
        div id={ (ID_PREFIX) "_" (dimension.as_str()) "_filter" } class={ (CLASS_PREFIX) "-filter" } {
            label class={ (CLASS_PREFIX) "-label" } for=(input_id) { (caption) ":" }
            (NBSP)
            input type="text" id=(input_id) value=(query) class={ (CLASS_PREFIX) "-filter-" (dimension.as_str()) "-text" };
            br;
        }
    }
}
