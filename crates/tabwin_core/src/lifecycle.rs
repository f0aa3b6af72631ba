//! Whole-window transitions: the live window went away, the window was saved
//! into a folder, or its folder was deleted.

use tabwin_logging::tab_debug;

use crate::construct::from_bookmark_folder;
use crate::reconcile::{merge_items, reset_to_saved_once};
use crate::source::BookmarkNode;
use crate::tab_item::TabItem;
use crate::window::{TabWindow, WindowFacets};

/// The browser window was closed.
///
/// A saved window reverts to its bookmarks, ordered by bookmark index. An
/// unsaved window has nothing left to track and yields `None`.
pub fn close_window(window: &TabWindow) -> Option<TabWindow> {
    let Some(saved) = window.facets.saved_state() else {
        tab_debug!(
            "close_window: dropping unsaved window {:?}",
            window.open_window_id()
        );
        return None;
    };

    let mut tab_items = reset_to_saved_once(window.tab_items.iter().cloned());
    tab_items.sort_by_key(|item| item.saved_state().map(|state| state.bookmark_index));

    Some(TabWindow::new(
        WindowFacets::ClosedSaved(saved.clone()),
        tab_items,
    ))
}

/// The window was saved into `folder`.
///
/// The folder's bookmarks become the saved side of the window; tabs that are
/// open right now are matched against them by URL.
pub fn save_window(window: &TabWindow, folder: &BookmarkNode) -> TabWindow {
    let TabWindow {
        facets: folder_facets,
        tab_items: bookmarks,
    } = from_bookmark_folder(folder);
    let open_side: Vec<TabItem> = window
        .tab_items
        .iter()
        .filter_map(|item| item.open_state().cloned().map(TabItem::OpenOnly))
        .collect();
    let tab_items = merge_items(bookmarks, open_side);

    let WindowFacets::ClosedSaved(saved) = folder_facets else {
        unreachable!("bookmark folders always build closed, saved windows");
    };
    TabWindow::new(window.facets.clone().saved(saved), tab_items)
}

/// The window's bookmark folder was removed.
///
/// An open window keeps its open tabs and loses every bookmark link. A closed
/// window has nothing left to track and yields `None`.
pub fn unsave_window(window: &TabWindow) -> Option<TabWindow> {
    let Some(open) = window.facets.open_state() else {
        tab_debug!(
            "unsave_window: dropping closed window for folder {:?}",
            window.folder_id()
        );
        return None;
    };

    let tab_items = window
        .tab_items
        .iter()
        .cloned()
        .filter_map(TabItem::strip_saved)
        .collect();
    Some(TabWindow::new(WindowFacets::OpenUnsaved(open.clone()), tab_items))
}
