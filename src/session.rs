//! Search overlay session state.
//!
//! Holds what the overlay needs between keystrokes: the shared dataset, the
//! open flag, the current query and filter, and the keyboard selection. The
//! ranked results are never stored; [`SearchSession::view`] recomputes them so
//! the selection always indexes the same flattened list that is rendered.

use crate::search::{DisplayLimits, SearchOutcome, SearchView, search};
use crate::types::{EntityKind, SearchData, SearchResult, TypeFilter};
use std::sync::Arc;

/// Path of the page a result links to.
///
/// Cities have no detail page and link to the city index.
pub fn route_for(kind: EntityKind, id: &str, locale: &str) -> String {
    match kind {
        EntityKind::Event => format!("/{}/events/{}", locale, id),
        EntityKind::Artist => format!("/{}/artists/{}", locale, id),
        EntityKind::Venue => format!("/{}/venues/{}", locale, id),
        EntityKind::City => format!("/{}/cities", locale),
    }
}

/// State for one search overlay.
#[derive(Debug, Clone)]
pub struct SearchSession {
    data: Arc<SearchData>,
    limits: DisplayLimits,
    locale: String,
    open: bool,
    query: String,
    filter: TypeFilter,
    /// Index into the flattened view, `None` when nothing is highlighted.
    selected: Option<usize>,
}

impl SearchSession {
    pub fn new(data: Arc<SearchData>, limits: DisplayLimits, locale: impl Into<String>) -> Self {
        Self {
            data,
            limits,
            locale: locale.into(),
            open: false,
            query: String::new(),
            filter: TypeFilter::All,
            selected: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Replace the dataset, e.g. after upstream revalidation.
    pub fn set_data(&mut self, data: Arc<SearchData>) {
        self.data = data;
        self.selected = None;
    }

    /// Open the overlay with a fresh query, filter and selection.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.filter = TypeFilter::All;
        self.selected = None;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = None;
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
        self.selected = None;
    }

    /// Rank the current query and build the display view.
    pub fn view(&self) -> SearchView<'_> {
        let results = search(&self.query, &self.data, self.filter);
        SearchView::build(&results, self.filter, self.limits)
    }

    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome::classify(&self.query, &self.view())
    }

    /// Move the highlight down, stopping at the last result.
    pub fn select_next(&mut self) {
        let len = self.view().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
    }

    /// Move the highlight up; stepping above the first result clears it.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.and_then(|i| i.checked_sub(1));
    }

    /// Highlight the result at `index` in the flattened view, as on hover.
    ///
    /// Out-of-range indices clamp to the last result; an empty view clears the
    /// highlight.
    pub fn select(&mut self, index: usize) {
        let len = self.view().len();
        self.selected = len.checked_sub(1).map(|last| index.min(last));
    }

    /// The highlighted result, if any.
    pub fn selected_result(&self) -> Option<SearchResult<'_>> {
        let index = self.selected?;
        self.view().get(index).copied()
    }

    /// Follow the highlighted result: returns its route and closes the overlay.
    ///
    /// Does nothing when no result is highlighted.
    pub fn activate(&mut self) -> Option<String> {
        let route = self
            .selected_result()
            .map(|r| route_for(r.kind, r.id, &self.locale))?;
        tracing::debug!("Navigating to {}", route);
        self.close();
        Some(route)
    }

    /// Follow the result at `index` in the flattened view, as on click.
    ///
    /// Returns its route and closes the overlay, or `None` (leaving the
    /// overlay open) when `index` is past the end of the view.
    pub fn activate_index(&mut self, index: usize) -> Option<String> {
        let route = self
            .view()
            .get(index)
            .map(|r| route_for(r.kind, r.id, &self.locale))?;
        tracing::debug!("Navigating to {}", route);
        self.close();
        Some(route)
    }
}
