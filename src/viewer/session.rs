// SPDX-License-Identifier: MPL-2.0
//! Viewer session: the single owner of viewer state.
//!
//! Holds the page catalog, the drawer, the info-panel flag, one
//! [`ViewportTransform`] per page that has been shown, and the gesture
//! history. The presentation layer
//! reads state through [`ViewerSession::snapshot`] and feeds input through
//! [`ViewerSession::handle`]; nothing else mutates the session.

use std::collections::HashMap;

use crate::catalog::PageCatalog;
use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::domain::page::{Page, PageId};
use crate::error::Result;
use crate::history::GestureHistory;
use crate::viewer::arbiter::{Effect, GestureArbiter, GestureEvent};
use crate::viewer::drawer::{DrawerController, DrawerState};
use crate::viewer::readout::Readout;
use crate::viewer::transform::{ViewportState, ViewportTransform};

/// Everything the presentation layer needs for one render tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSnapshot {
    pub page_id: PageId,
    pub page_index: usize,
    pub page_count: usize,
    pub viewport: ViewportState,
    pub drawer: DrawerState,
    pub info_panel_visible: bool,
}

impl ViewerSnapshot {
    /// Returns the live scale/offset readout for this tick.
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout::new(self.viewport)
    }

    /// Returns the readout only while the info panel is shown.
    #[must_use]
    pub fn visible_readout(&self) -> Option<Readout> {
        self.info_panel_visible.then(|| self.readout())
    }
}

/// Owns the viewer state for one open magazine.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    catalog: PageCatalog,
    drawer: DrawerController,
    viewports: HashMap<PageId, ViewportTransform>,
    info_panel_visible: bool,
    history: GestureHistory,
}

impl ViewerSession {
    /// Opens a session on the catalog's first page, unzoomed, with the drawer
    /// closed and the info panel hidden.
    #[must_use]
    pub fn new(catalog: PageCatalog) -> Self {
        Self::with_history_capacity(catalog, DEFAULT_HISTORY_CAPACITY)
    }

    /// Opens a session keeping at most `capacity` gesture records.
    #[must_use]
    pub fn with_history_capacity(catalog: PageCatalog, capacity: usize) -> Self {
        let first = catalog.first().id();
        let mut viewports = HashMap::with_capacity(catalog.len());
        viewports.insert(first, ViewportTransform::new());

        Self {
            catalog,
            drawer: DrawerController::new(),
            viewports,
            info_panel_visible: false,
            history: GestureHistory::new(capacity),
        }
    }

    /// Dispatches one input event and records it in the history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPage`](crate::error::Error::InvalidPage) when a
    /// thumbnail selection names an unknown page. The session is unchanged
    /// apart from the history entry.
    pub fn handle(&mut self, event: GestureEvent) -> Result<Effect> {
        let result = GestureArbiter::dispatch(self, event);
        self.history.record(event, &result);
        result
    }

    #[must_use]
    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn drawer(&self) -> &DrawerController {
        &self.drawer
    }

    #[must_use]
    pub fn info_panel_visible(&self) -> bool {
        self.info_panel_visible
    }

    #[must_use]
    pub fn history(&self) -> &GestureHistory {
        &self.history
    }

    /// Returns the page currently shown.
    #[must_use]
    pub fn current_page(&self) -> &Page {
        self.catalog
            .get(self.drawer.current_page_index())
            .unwrap_or_else(|| self.catalog.first())
    }

    /// Returns the active page's viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportTransform {
        self.viewport_for(self.current_page().id())
            .unwrap_or_default()
    }

    /// Returns the retained viewport of any page that has been shown.
    #[must_use]
    pub fn viewport_for(&self, id: PageId) -> Option<ViewportTransform> {
        self.viewports.get(&id).cloned()
    }

    /// Captures the state the presentation layer renders from.
    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        let page = self.current_page();
        ViewerSnapshot {
            page_id: page.id(),
            page_index: self.drawer.current_page_index(),
            page_count: self.catalog.len(),
            viewport: self.viewport().state(),
            drawer: self.drawer.state(),
            info_panel_visible: self.info_panel_visible,
        }
    }

    pub(crate) fn drawer_mut(&mut self) -> &mut DrawerController {
        &mut self.drawer
    }

    /// Shows or hides the info panel and returns the new visibility.
    pub(crate) fn toggle_info_panel(&mut self) -> bool {
        self.info_panel_visible = !self.info_panel_visible;
        self.info_panel_visible
    }

    pub(crate) fn viewport_mut(&mut self) -> &mut ViewportTransform {
        let id = self.current_page().id();
        self.viewports.entry(id).or_default()
    }

    /// Makes `id` the active page and resets its viewport. Other pages'
    /// viewports are retained as they were.
    pub(crate) fn select_page(&mut self, id: PageId) -> Result<usize> {
        let index = self.drawer.select_page(&self.catalog, id)?;
        self.viewports.entry(id).or_default().reset_state();
        Ok(index)
    }
}
