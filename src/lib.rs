//! # Poster Room
//!
//! A filterable gallery of conference posters. The configuration lists the
//! posters and describes a filter bar; the engine renders the bar, a count
//! line, and the gallery, and re-renders the results after every filter
//! interaction.
//!
//! # Architecture: Build Once, Re-render on Every Event
//!
//! ```text
//! config  ──►  PosterRoom::mount  ──►  FilterIndex   (distinct values, once)
//!                     │                FilterControls (bar + filter state)
//!                     ▼
//!              dispatch(event)  ──►  update_visibility  ──►  count + gallery
//! ```
//!
//! A poster is shown when it is displayable, every text filter matches it,
//! and every set-valued filter admits it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`room`] | Entry point: open/closed decision, `poster_bypass`, the `Gallery` state holder |
//! | [`config`] | Configuration types, layered JSON/TOML loading, validation, stock TOML |
//! | [`types`] | Poster records and the filterable dimensions |
//! | [`labels`] | Localized label dictionary with raw-key fallback |
//! | [`index`] | Filter index and per-poster derived flags |
//! | [`filters`] | Checkbox and dropdown filter state and the admission rules |
//! | [`controls`] | Filter bar markup and event application |
//! | [`gallery`] | Visibility recomputation, count line, poster markup |
//! | [`collate`] | Accent- and case-insensitive ordering for dropdown options |
//! | [`generate`] | Writes the standalone HTML page, replaying scripted events |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit State Holder
//!
//! All mutable state lives in one [`room::Gallery`] value: the entries with
//! their derived flags, the filter state, and the text queries. Events go
//! through `&mut self`; nothing is global.
//!
//! ## Tagged Dropdown State
//!
//! A dropdown holds [`filters::Selection`] (`All` or one value) rather than a
//! map of booleans. The boolean view is derived only when rendering or
//! inspecting the state.
//!
//! ## Checkbox Extremes Disable the Filter
//!
//! When none or all of a checkbox dimension's values are checked, that
//! dimension admits every poster. Unchecking the last checked category
//! therefore shows everything again rather than nothing.
//!
//! ## Labels Are Trusted Markup
//!
//! Labels come from the configuration and may contain HTML; they are inserted
//! unescaped. Poster fields are always escaped. A missing label renders as its
//! key.

pub mod collate;
pub mod config;
pub mod controls;
pub mod filters;
pub mod gallery;
pub mod generate;
pub mod index;
pub mod labels;
pub mod output;
pub mod room;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
