use tabwin_core::{
    close_tab, close_window, from_live_window, save_tab, save_window, set_active_tab, unsave_tab,
    unsave_window, update_tab_item, update_window, LiveWindow, TabWindow,
};
use tabwin_logging::{tab_debug, tab_warn};

use crate::event::Event;
use crate::store::WindowStore;

/// Applies one browser event to the store and returns the next store.
///
/// Events that name a window the store does not track are logged and ignored.
pub fn update(mut store: WindowStore, event: Event) -> WindowStore {
    match event {
        Event::WindowsSnapshot { windows } => sync_windows(&mut store, &windows),
        Event::WindowRestored { folder_id, window } => {
            match store.position_by_folder_id(&folder_id) {
                Some(position) => {
                    let next = update_window(&store.windows()[position], &window);
                    store.replace(position, Some(next));
                }
                None => {
                    tab_warn!("restored window {} names unknown folder {:?}", window.id, folder_id);
                    store.push(from_live_window(&window));
                }
            }
        }
        Event::WindowClosed { window_id } => {
            with_open_window(&mut store, window_id, close_window);
        }
        Event::WindowSaved { window_id, folder } => {
            with_open_window(&mut store, window_id, |window| {
                Some(save_window(window, &folder))
            });
        }
        Event::FolderRemoved { folder_id } => match store.position_by_folder_id(&folder_id) {
            Some(position) => {
                let next = unsave_window(&store.windows()[position]);
                store.replace(position, next);
            }
            None => tab_warn!("folder {:?} is not tracked", folder_id),
        },
        Event::TabUpdated { tab } => {
            with_open_window(&mut store, tab.window_id, |window| {
                Some(update_tab_item(window, &tab))
            });
        }
        Event::TabClosed { window_id, tab_id } => {
            with_open_window(&mut store, window_id, |window| Some(close_tab(window, tab_id)));
        }
        Event::TabActivated { window_id, tab_id } => {
            with_open_window(&mut store, window_id, |window| {
                Some(set_active_tab(window, tab_id))
            });
        }
        Event::TabSaved {
            window_id,
            tab_id,
            bookmark,
        } => {
            with_open_window(&mut store, window_id, |window| {
                let Some(item) = window
                    .tab_items
                    .iter()
                    .find(|item| item.open_tab_id() == Some(tab_id))
                else {
                    tab_warn!("tab {} is not open in window {}", tab_id, window_id);
                    return Some(window.clone());
                };
                Some(save_tab(window, item, &bookmark).unwrap_or_else(|_| window.clone()))
            });
        }
        Event::TabUnsaved {
            folder_id,
            bookmark_id,
        } => match store.position_by_folder_id(&folder_id) {
            Some(position) => {
                let window = &store.windows()[position];
                let next = match window
                    .tab_items
                    .iter()
                    .find(|item| item.bookmark_id() == Some(bookmark_id.as_str()))
                {
                    Some(item) => unsave_tab(window, item).unwrap_or_else(|_| window.clone()),
                    None => {
                        tab_warn!("bookmark {:?} is not in folder {:?}", bookmark_id, folder_id);
                        window.clone()
                    }
                };
                store.replace(position, Some(next));
            }
            None => tab_warn!("folder {:?} is not tracked", folder_id),
        },
    }
    store
}

/// Reconciles every live window, starts tracking new ones, and closes
/// tracked windows the snapshot no longer lists.
fn sync_windows(store: &mut WindowStore, live_windows: &[LiveWindow]) {
    for live in live_windows {
        match store.position_by_open_id(live.id) {
            Some(position) => {
                let next = update_window(&store.windows()[position], live);
                store.replace(position, Some(next));
            }
            None => {
                tab_debug!("tracking new window {}", live.id);
                store.push(from_live_window(live));
            }
        }
    }

    let gone: Vec<i64> = store
        .windows()
        .iter()
        .filter_map(TabWindow::open_window_id)
        .filter(|id| live_windows.iter().all(|live| live.id != *id))
        .collect();
    for window_id in gone {
        tab_debug!("window {} missing from snapshot, closing", window_id);
        with_open_window(store, window_id, close_window);
    }
}

fn with_open_window(
    store: &mut WindowStore,
    window_id: i64,
    transition: impl FnOnce(&TabWindow) -> Option<TabWindow>,
) {
    match store.position_by_open_id(window_id) {
        Some(position) => {
            let next = transition(&store.windows()[position]);
            store.replace(position, next);
        }
        None => tab_warn!("window {} is not tracked", window_id),
    }
}
