use serde::{Deserialize, Serialize};
use tabwin_logging::tab_warn;

use crate::tab_item::TabItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowState {
    pub open_window_id: i64,
    pub window_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWindowState {
    pub folder_id: String,
    pub title: String,
}

/// The three window states worth tracking. A closed, unsaved window has no
/// identity and is simply dropped by whoever owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WindowFacets {
    OpenUnsaved(OpenWindowState),
    OpenSaved {
        open: OpenWindowState,
        saved: SavedWindowState,
    },
    ClosedSaved(SavedWindowState),
}

impl WindowFacets {
    pub fn open_state(&self) -> Option<&OpenWindowState> {
        match self {
            WindowFacets::OpenUnsaved(open) | WindowFacets::OpenSaved { open, .. } => Some(open),
            WindowFacets::ClosedSaved(_) => None,
        }
    }

    pub fn saved_state(&self) -> Option<&SavedWindowState> {
        match self {
            WindowFacets::OpenSaved { saved, .. } | WindowFacets::ClosedSaved(saved) => Some(saved),
            WindowFacets::OpenUnsaved(_) => None,
        }
    }

    /// Marks the window open with the given live identity, keeping any saved facet.
    pub fn opened(self, open: OpenWindowState) -> WindowFacets {
        match self {
            WindowFacets::OpenUnsaved(_) => WindowFacets::OpenUnsaved(open),
            WindowFacets::OpenSaved { saved, .. } | WindowFacets::ClosedSaved(saved) => {
                WindowFacets::OpenSaved { open, saved }
            }
        }
    }

    /// Marks the window saved into the given folder, keeping any open facet.
    pub fn saved(self, saved: SavedWindowState) -> WindowFacets {
        match self {
            WindowFacets::OpenUnsaved(open) | WindowFacets::OpenSaved { open, .. } => {
                WindowFacets::OpenSaved { open, saved }
            }
            WindowFacets::ClosedSaved(_) => WindowFacets::ClosedSaved(saved),
        }
    }
}

/// A logical window: its facets plus an ordered sequence of tab items.
///
/// Open items come first, ordered by tab index, followed by closed items
/// ordered by bookmark index. Every merge re-establishes that order; the
/// single-event mutators edit in place and leave ordering to the next merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabWindow {
    pub facets: WindowFacets,
    pub tab_items: Vec<TabItem>,
}

impl TabWindow {
    pub fn new(facets: WindowFacets, tab_items: Vec<TabItem>) -> Self {
        Self { facets, tab_items }
    }

    pub fn is_open(&self) -> bool {
        self.facets.open_state().is_some()
    }

    pub fn is_saved(&self) -> bool {
        self.facets.saved_state().is_some()
    }

    pub fn open_window_id(&self) -> Option<i64> {
        self.facets.open_state().map(|open| open.open_window_id)
    }

    pub fn window_type(&self) -> Option<&str> {
        self.facets.open_state().map(|open| open.window_type.as_str())
    }

    pub fn folder_id(&self) -> Option<&str> {
        self.facets.saved_state().map(|saved| saved.folder_id.as_str())
    }

    /// Display title, derived from the current state on every call.
    ///
    /// Saved windows use the folder title. Open, unsaved windows use the
    /// active tab's title, then the first open tab's title, then `""`.
    pub fn title(&self) -> &str {
        if let Some(saved) = self.facets.saved_state() {
            return &saved.title;
        }

        if let Some(active) = self.active_item() {
            return active.title();
        }
        if let Some(first) = self.open_items().next() {
            return first.title();
        }

        tab_warn!(
            "window {:?} has no open tabs to take a title from",
            self.open_window_id()
        );
        ""
    }

    pub fn open_items(&self) -> impl Iterator<Item = &TabItem> {
        self.tab_items.iter().filter(|item| item.is_open())
    }

    pub fn closed_items(&self) -> impl Iterator<Item = &TabItem> {
        self.tab_items.iter().filter(|item| !item.is_open())
    }

    pub fn active_item(&self) -> Option<&TabItem> {
        self.tab_items.iter().find(|item| item.is_active())
    }

    pub(crate) fn position_of_open_tab(&self, open_tab_id: i64) -> Option<usize> {
        self.tab_items
            .iter()
            .position(|item| item.open_tab_id() == Some(open_tab_id))
    }

    pub(crate) fn position_of_bookmark(&self, bookmark_id: &str) -> Option<usize> {
        self.tab_items
            .iter()
            .position(|item| item.bookmark_id() == Some(bookmark_id))
    }

    pub(crate) fn with_items(&self, tab_items: Vec<TabItem>) -> TabWindow {
        TabWindow {
            facets: self.facets.clone(),
            tab_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_item::{OpenTabState, SavedTabState};

    fn open_item(id: i64, title: &str, active: bool) -> TabItem {
        TabItem::OpenOnly(OpenTabState {
            url: format!("https://{title}.example"),
            open_tab_id: id,
            active,
            open_tab_index: id as usize,
            fav_icon_url: None,
            title: title.to_string(),
            audible: false,
        })
    }

    fn open_facets() -> WindowFacets {
        WindowFacets::OpenUnsaved(OpenWindowState {
            open_window_id: 3,
            window_type: "normal".to_string(),
        })
    }

    #[test]
    fn open_window_title_follows_active_tab() {
        let window = TabWindow::new(
            open_facets(),
            vec![open_item(0, "first", false), open_item(1, "second", true)],
        );
        assert_eq!(window.title(), "second");

        let moved = window.with_items(vec![
            open_item(0, "first", true),
            open_item(1, "second", false),
        ]);
        assert_eq!(moved.title(), "first");
    }

    #[test]
    fn open_window_without_active_tab_uses_first_open_tab() {
        let window = TabWindow::new(
            open_facets(),
            vec![open_item(0, "first", false), open_item(1, "second", false)],
        );
        assert_eq!(window.title(), "first");
    }

    #[test]
    fn empty_open_window_has_empty_title() {
        let window = TabWindow::new(open_facets(), Vec::new());
        assert_eq!(window.title(), "");
    }

    #[test]
    fn saved_window_uses_folder_title() {
        let saved = SavedWindowState {
            folder_id: "f1".to_string(),
            title: "Research".to_string(),
        };
        let window = TabWindow::new(
            open_facets().saved(saved),
            vec![open_item(0, "first", true)],
        );
        assert_eq!(window.title(), "Research");
        assert!(window.is_open());
        assert!(window.is_saved());
        assert_eq!(window.folder_id(), Some("f1"));
    }

    #[test]
    fn opening_a_closed_window_keeps_saved_facet() {
        let closed = WindowFacets::ClosedSaved(SavedWindowState {
            folder_id: "f1".to_string(),
            title: "Research".to_string(),
        });
        let opened = closed.opened(OpenWindowState {
            open_window_id: 9,
            window_type: "popup".to_string(),
        });
        assert_eq!(opened.open_state().map(|o| o.open_window_id), Some(9));
        assert_eq!(opened.saved_state().map(|s| s.folder_id.as_str()), Some("f1"));
    }

    #[test]
    fn closed_items_are_the_saved_only_ones() {
        let window = TabWindow::new(
            open_facets(),
            vec![
                open_item(0, "first", false),
                TabItem::SavedOnly(SavedTabState {
                    bookmark_id: "b1".to_string(),
                    bookmark_index: 0,
                    title: "kept".to_string(),
                    url: "https://kept.example".to_string(),
                }),
            ],
        );
        let closed: Vec<_> = window.closed_items().map(TabItem::title).collect();
        assert_eq!(closed, vec!["kept"]);
    }
}
