//! The poster room: initialization and the state holder.
//!
//! [`PosterRoom::mount`] is the entry point. It decides whether the room is
//! open, and if so builds the filter index once and runs the first render.
//! After that the host forwards every filter bar interaction to
//! [`PosterRoom::dispatch`] and swaps in the markup it returns.
//!
//! ```text
//! <div id="{mount_id}">
//!   <div id="poster_room_filters">…</div>
//!   <div id="poster_room_count">…</div>
//!   <div id="poster_room_gallery">…</div>
//! </div>
//! ```
//!
//! A closed room renders only the localized `closed` message. Organizers can
//! still open it by adding `poster_bypass` to the page's query string.

use crate::config::{BaseUrls, Configuration};
use crate::controls::{ControlEvent, FilterControls};
use crate::filters::{ControlError, FilterState};
use crate::gallery::{self, CountSummary, RenderContext};
use crate::index::{FilterIndex, GalleryEntry, prepare_entries};
use crate::labels::LabelDictionary;
use maud::{Markup, PreEscaped, html};
use url::form_urlencoded;

/// Query parameter that opens a closed room.
pub const BYPASS_PARAM: &str = "poster_bypass";

/// Whether the query string carries the bypass parameter, with any value.
///
/// Accepts the query with or without its leading `?`. Names are
/// form-decoded before comparison, so `poster%5Fbypass` counts too.
pub fn bypass_requested(query: &str) -> bool {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes()).any(|(name, _)| name == BYPASS_PARAM)
}

#[derive(Debug, Clone)]
pub enum PosterRoom {
    Closed(ClosedRoom),
    Open(Gallery),
}

impl PosterRoom {
    /// Initialize the room from its configuration.
    ///
    /// `query` is the page's query string, checked for the bypass flag.
    pub fn mount(config: Configuration, mount_id: &str, query: &str) -> Self {
        let bypass = bypass_requested(query);
        if config.poster_show || bypass {
            if !config.poster_show {
                tracing::info!("poster room closed, opened by {BYPASS_PARAM}");
            }
            PosterRoom::Open(Gallery::new(config, mount_id))
        } else {
            tracing::info!("poster room closed");
            PosterRoom::Closed(ClosedRoom {
                mount_id: mount_id.to_string(),
                message: config.labels.label_or_key("closed", &config.lang).to_string(),
            })
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PosterRoom::Open(_))
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            PosterRoom::Open(gallery) => Some(gallery),
            PosterRoom::Closed(_) => None,
        }
    }

    /// Full markup of the mount point.
    pub fn render(&self) -> Markup {
        match self {
            PosterRoom::Open(gallery) => gallery.render(),
            PosterRoom::Closed(closed) => closed.render(),
        }
    }

    /// Apply a filter bar event and return the redrawn count and gallery.
    ///
    /// The filter bar is not part of the returned markup. A master checkbox
    /// event changes every value checkbox of its group, so after one the
    /// host should redraw the bar from [`PosterRoom::render`].
    pub fn dispatch(&mut self, event: &ControlEvent) -> Result<Markup, ControlError> {
        match self {
            PosterRoom::Open(gallery) => gallery.dispatch(event),
            PosterRoom::Closed(_) => Err(ControlError::RoomClosed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClosedRoom {
    mount_id: String,
    message: String,
}

impl ClosedRoom {
    pub fn render(&self) -> Markup {
        html! {
            div id=(self.mount_id) {
                div { (PreEscaped(self.message.as_str())) }
            }
        }
    }
}

/// An open room: posters, derived flags, and filter state.
#[derive(Debug, Clone)]
pub struct Gallery {
    mount_id: String,
    lang: String,
    labels: LabelDictionary,
    urls: BaseUrls,
    controls: FilterControls,
    entries: Vec<GalleryEntry>,
    summary: CountSummary,
}

impl Gallery {
    /// Build the filter index and run the first visibility pass.
    pub fn new(mut config: Configuration, mount_id: &str) -> Self {
        config.retain_configured_controls();
        if config.filters.is_some() {
            tracing::debug!("ignoring supplied filters, rebuilding from posters");
        }
        let urls = config.base_urls();
        let index = FilterIndex::build(&config.posters, &config.filter_dimensions);
        let controls = FilterControls::new(config.controls, &index);
        let entries = prepare_entries(config.posters, &config.text_filter_dimensions);
        let mut gallery = Self {
            mount_id: mount_id.to_string(),
            lang: config.lang,
            labels: config.labels,
            urls,
            controls,
            entries,
            summary: CountSummary::default(),
        };
        gallery.refresh();
        tracing::info!(
            posters = gallery.entries.len(),
            eligible = gallery.summary.eligible,
            "poster room open"
        );
        gallery
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn filters(&self) -> &FilterState {
        self.controls.filters()
    }

    pub fn summary(&self) -> CountSummary {
        self.summary
    }

    /// Apply an event, recompute visibility, and redraw the count line and
    /// gallery. See [`PosterRoom::dispatch`] for redrawing the filter bar.
    pub fn dispatch(&mut self, event: &ControlEvent) -> Result<Markup, ControlError> {
        tracing::debug!(?event, "dispatch");
        self.controls.apply(event, &mut self.entries)?;
        self.refresh();
        tracing::debug!(summary = %self.summary, "gallery updated");
        Ok(self.render_results())
    }

    fn refresh(&mut self) {
        self.summary = gallery::update_visibility(&mut self.entries, self.controls.filters());
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            labels: &self.labels,
            lang: &self.lang,
            urls: &self.urls,
        }
    }

    /// Count line followed by the gallery container.
    pub fn render_results(&self) -> Markup {
        let ctx = self.context();
        html! {
            (gallery::render_count(self.summary, &ctx))
            (gallery::render_gallery(&self.entries, &ctx))
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            div id=(self.mount_id) {
                (self.controls.render(&self.labels, &self.lang))
                (self.render_results())
            }
        }
    }
}
