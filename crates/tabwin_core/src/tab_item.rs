use serde::{Deserialize, Serialize};

/// Persisted facts about a tab, taken from its bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTabState {
    pub bookmark_id: String,
    pub bookmark_index: usize,
    pub title: String,
    pub url: String,
}

/// Live facts about a tab, taken from the browser runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTabState {
    pub url: String,
    pub open_tab_id: i64,
    pub active: bool,
    pub open_tab_index: usize,
    pub fav_icon_url: Option<String>,
    pub title: String,
    pub audible: bool,
}

/// One logical tab: open, saved, or both. A tab that is neither does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facets", rename_all = "snake_case")]
pub enum TabItem {
    OpenOnly(OpenTabState),
    SavedOnly(SavedTabState),
    OpenAndSaved {
        open: OpenTabState,
        saved: SavedTabState,
    },
}

impl TabItem {
    /// Open URL when open, otherwise the bookmarked URL.
    pub fn url(&self) -> &str {
        match self {
            TabItem::OpenOnly(open) | TabItem::OpenAndSaved { open, .. } => &open.url,
            TabItem::SavedOnly(saved) => &saved.url,
        }
    }

    /// Open title when open, otherwise the bookmark title.
    pub fn title(&self) -> &str {
        match self {
            TabItem::OpenOnly(open) | TabItem::OpenAndSaved { open, .. } => &open.title,
            TabItem::SavedOnly(saved) => &saved.title,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_state().is_some()
    }

    pub fn is_saved(&self) -> bool {
        self.saved_state().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.open_state().is_some_and(|open| open.active)
    }

    pub fn open_state(&self) -> Option<&OpenTabState> {
        match self {
            TabItem::OpenOnly(open) | TabItem::OpenAndSaved { open, .. } => Some(open),
            TabItem::SavedOnly(_) => None,
        }
    }

    pub fn saved_state(&self) -> Option<&SavedTabState> {
        match self {
            TabItem::SavedOnly(saved) | TabItem::OpenAndSaved { saved, .. } => Some(saved),
            TabItem::OpenOnly(_) => None,
        }
    }

    pub fn open_tab_id(&self) -> Option<i64> {
        self.open_state().map(|open| open.open_tab_id)
    }

    pub fn bookmark_id(&self) -> Option<&str> {
        self.saved_state().map(|saved| saved.bookmark_id.as_str())
    }

    /// Drops the open facet. Yields `None` for an open-only item, which has
    /// nothing left to keep.
    pub fn reset_to_saved(self) -> Option<TabItem> {
        match self {
            TabItem::OpenOnly(_) => None,
            TabItem::SavedOnly(saved) | TabItem::OpenAndSaved { saved, .. } => {
                Some(TabItem::SavedOnly(saved))
            }
        }
    }

    /// Drops the saved facet. Yields `None` for a saved-only item.
    pub fn strip_saved(self) -> Option<TabItem> {
        match self {
            TabItem::SavedOnly(_) => None,
            TabItem::OpenOnly(open) | TabItem::OpenAndSaved { open, .. } => {
                Some(TabItem::OpenOnly(open))
            }
        }
    }

    /// Attaches (or replaces) the saved facet.
    pub fn attach_saved(self, saved: SavedTabState) -> TabItem {
        match self {
            TabItem::OpenOnly(open) | TabItem::OpenAndSaved { open, .. } => {
                TabItem::OpenAndSaved { open, saved }
            }
            TabItem::SavedOnly(_) => TabItem::SavedOnly(saved),
        }
    }

    /// Sets the active flag on the open facet; saved-only items are returned as is.
    pub fn set_active(self, active: bool) -> TabItem {
        match self {
            TabItem::OpenOnly(mut open) => {
                open.active = active;
                TabItem::OpenOnly(open)
            }
            TabItem::OpenAndSaved { mut open, saved } => {
                open.active = active;
                TabItem::OpenAndSaved { open, saved }
            }
            saved_only @ TabItem::SavedOnly(_) => saved_only,
        }
    }
}
