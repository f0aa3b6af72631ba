use serde::{Deserialize, Serialize};
use tabwin_core::{BookmarkNode, LiveTab, LiveWindow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// Full list of live windows; tracked windows missing from it are closed.
    WindowsSnapshot { windows: Vec<LiveWindow> },
    /// A saved, closed window was reopened as `window`.
    WindowRestored { folder_id: String, window: LiveWindow },
    /// A browser window went away.
    WindowClosed { window_id: i64 },
    /// An open window was bookmarked into `folder`.
    WindowSaved { window_id: i64, folder: BookmarkNode },
    /// A window's bookmark folder was deleted.
    FolderRemoved { folder_id: String },
    /// A tab was created or changed.
    TabUpdated { tab: LiveTab },
    TabClosed { window_id: i64, tab_id: i64 },
    TabActivated { window_id: i64, tab_id: i64 },
    /// A bookmark was created for an open tab.
    TabSaved {
        window_id: i64,
        tab_id: i64,
        bookmark: BookmarkNode,
    },
    /// A tab's bookmark was deleted.
    TabUnsaved { folder_id: String, bookmark_id: String },
}
