//! Single-event transitions. Each takes the current window and returns the
//! next one; the input is never touched.

use tabwin_logging::{tab_debug, tab_warn};

use crate::construct::{from_live_tab, saved_state_from_bookmark};
use crate::error::TabLookupError;
use crate::source::{BookmarkNode, LiveTab};
use crate::tab_item::TabItem;
use crate::window::TabWindow;

/// A tab was closed in the browser.
///
/// Saved tabs stay in place as closed items; open-only tabs are removed.
pub fn close_tab(window: &TabWindow, open_tab_id: i64) -> TabWindow {
    let Some(position) = window.position_of_open_tab(open_tab_id) else {
        tab_warn!(
            "close_tab: no open tab {} in window {:?}",
            open_tab_id,
            window.open_window_id()
        );
        return window.clone();
    };

    let mut tab_items = window.tab_items.clone();
    if let Some(closed) = tab_items.remove(position).reset_to_saved() {
        tab_items.insert(position, closed);
    }
    window.with_items(tab_items)
}

/// A bookmark was created for an open tab.
///
/// `tab_item` must be open and present in `window` under its open tab id.
pub fn save_tab(
    window: &TabWindow,
    tab_item: &TabItem,
    bookmark: &BookmarkNode,
) -> Result<TabWindow, TabLookupError> {
    let lookup = tab_item
        .open_tab_id()
        .ok_or_else(|| TabLookupError::NotOpen {
            url: tab_item.url().to_string(),
        })
        .and_then(|id| {
            window
                .position_of_open_tab(id)
                .ok_or(TabLookupError::OpenTabNotFound(id))
        });
    let position = lookup.inspect_err(|err| tab_warn!("save_tab: {}", err))?;

    // New bookmarks are appended to the folder.
    let appended_at = window.tab_items.iter().filter(|item| item.is_saved()).count();
    let saved = saved_state_from_bookmark(bookmark, appended_at);

    let mut tab_items = window.tab_items.clone();
    let item = tab_items.remove(position).attach_saved(saved);
    tab_items.insert(position, item);
    Ok(window.with_items(tab_items))
}

/// The bookmark behind `tab_item` was removed.
///
/// `tab_item` must be saved and present in `window` under its bookmark id.
/// The item stays if it is still open, otherwise it is removed.
pub fn unsave_tab(window: &TabWindow, tab_item: &TabItem) -> Result<TabWindow, TabLookupError> {
    let lookup = tab_item
        .bookmark_id()
        .ok_or_else(|| TabLookupError::NotSaved {
            url: tab_item.url().to_string(),
        })
        .and_then(|id| {
            window
                .position_of_bookmark(id)
                .ok_or_else(|| TabLookupError::BookmarkNotFound(id.to_string()))
        });
    let position = lookup.inspect_err(|err| tab_warn!("unsave_tab: {}", err))?;

    let mut tab_items = window.tab_items.clone();
    if let Some(still_open) = tab_items.remove(position).strip_saved() {
        tab_items.insert(position, still_open);
    }
    Ok(window.with_items(tab_items))
}

/// A tab became the active one. Any other active item is cleared.
pub fn set_active_tab(window: &TabWindow, open_tab_id: i64) -> TabWindow {
    let Some(target) = window.position_of_open_tab(open_tab_id) else {
        tab_warn!(
            "set_active_tab: no open tab {} in window {:?}",
            open_tab_id,
            window.open_window_id()
        );
        return window.clone();
    };
    if window.tab_items[target].is_active() {
        tab_debug!("set_active_tab: tab {} already active", open_tab_id);
        return window.clone();
    }

    window.with_items(activate_only(&window.tab_items, target))
}

/// A tab was created or changed in the browser.
///
/// A known tab is replaced in place by a fresh open-only item built from the
/// snapshot, which drops any bookmark it was linked to until the next
/// reconcile. An unknown tab is inserted at its reported index.
pub fn update_tab_item(window: &TabWindow, tab: &LiveTab) -> TabWindow {
    let item = from_live_tab(tab);
    let becomes_active = item.is_active();

    let mut tab_items = window.tab_items.clone();
    let position = match window.position_of_open_tab(tab.id) {
        Some(position) => {
            tab_items[position] = item;
            position
        }
        None => {
            let position = tab.index.min(tab_items.len());
            tab_items.insert(position, item);
            position
        }
    };

    if becomes_active {
        tab_items = activate_only(&tab_items, position);
    }
    window.with_items(tab_items)
}

fn activate_only(tab_items: &[TabItem], target: usize) -> Vec<TabItem> {
    tab_items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            if position == target {
                item.clone().set_active(true)
            } else if item.is_active() {
                item.clone().set_active(false)
            } else {
                item.clone()
            }
        })
        .collect()
}
