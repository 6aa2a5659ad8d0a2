//! CLI output formatting for the `check` and `render` commands.
//!
//! # Information-First Display
//!
//! Output reads as a content inventory: each poster is shown by its
//! positional index, number, and title, with its filterable values as
//! indented context lines. Filter dimensions list their values in the same
//! first-seen order the filter bar uses.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Posters
//! 001 #7 Graphs
//!     Authors: Ada
//!     Categories: stat
//! 002 #9 Draft (hidden)
//!
//! Filters
//! categories (checkboxes)
//!     001 stat
//! authors (dropdown)
//!     001 Ada
//!
//! Room closed, 1 of 2 posters eligible
//! ```
//!
//! ## Render
//!
//! ```text
//! Room open → dist/index.html
//! Displaying 1 / 2 posters after 1 event
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::{Configuration, ControlSpec};
use crate::generate::GenerateReport;
use crate::index::FilterIndex;
use crate::types::{KeySet, PosterRecord, SetDimension, present};

const TITLE_WIDTH: usize = 60;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Poster header: positional index, number, and title.
///
/// ```text
/// 001 #7 Graphs
/// 002 #8 (untitled)
/// 003 #9 Draft (hidden)
/// ```
fn poster_line(index: usize, poster: &PosterRecord) -> String {
    let title = match present(&poster.title) {
        Some(t) => truncate(&strip_html_tags(t), TITLE_WIDTH),
        None => "(untitled)".to_string(),
    };
    let hidden = if poster.display { "" } else { " (hidden)" };
    format!("{} #{} {}{}", format_index(index), poster.number, title, hidden)
}

fn values_line(name: &str, values: &KeySet) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let joined: Vec<&str> = values.non_empty().collect();
    Some(format!("{}{}: {}", indent(1), name, joined.join(", ")))
}

fn control_kind(config: &Configuration, dimension: SetDimension) -> &'static str {
    config
        .controls
        .iter()
        .find(|c| c.set_dimension() == Some(dimension))
        .map(|c| match c {
            ControlSpec::Checkboxes { .. } => "checkboxes",
            ControlSpec::Dropdown { .. } => "dropdown",
            ControlSpec::Text { .. } => "text",
        })
        .unwrap_or("no control")
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(config: &Configuration) -> Vec<String> {
    let mut lines = vec!["Posters".to_string()];
    for (i, poster) in config.posters.iter().enumerate() {
        lines.push(poster_line(i + 1, poster));
        lines.extend(values_line("Authors", &poster.authors));
        lines.extend(values_line("Categories", &poster.categories));
        if let Some(room) = present(&poster.room) {
            lines.push(format!("{}Room: {}", indent(1), room));
        }
    }

    let index = FilterIndex::build(&config.posters, &config.filter_dimensions);
    lines.push(String::new());
    lines.push("Filters".to_string());
    for dimension in index.dimensions() {
        lines.push(format!(
            "{} ({})",
            dimension,
            control_kind(config, dimension)
        ));
        for (i, value) in index.values(dimension).unwrap_or_default().iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), value));
        }
    }

    let eligible = config.posters.iter().filter(|p| p.display).count();
    let state = if config.poster_show { "open" } else { "closed" };
    lines.push(String::new());
    lines.push(format!(
        "Room {}, {} of {} posters eligible",
        state,
        eligible,
        config.posters.len()
    ));
    lines
}

pub fn print_check_output(config: &Configuration) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let state = if report.open { "open" } else { "closed" };
    let mut lines = vec![format!("Room {} → {}", state, report.output.display())];
    if let Some(summary) = report.summary {
        let events = match report.events_applied {
            0 => String::new(),
            1 => " after 1 event".to_string(),
            n => format!(" after {} events", n),
        };
        lines.push(format!("Displaying {} posters{}", summary, events));
    }
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
