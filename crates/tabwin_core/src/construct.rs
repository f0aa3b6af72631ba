use tabwin_logging::{tab_debug, tab_warn};

use crate::source::{BookmarkNode, LiveTab, LiveWindow};
use crate::tab_item::{OpenTabState, SavedTabState, TabItem};
use crate::window::{OpenWindowState, SavedWindowState, TabWindow, WindowFacets};

/// Builds a saved-only tab item from a bookmark leaf.
pub fn from_bookmark(node: &BookmarkNode) -> TabItem {
    TabItem::SavedOnly(saved_state_from_bookmark(node, 0))
}

/// Builds a closed, saved window from a bookmark folder.
///
/// Sub-folders are skipped. Children without an `index` take their position
/// within the folder.
pub fn from_bookmark_folder(folder: &BookmarkNode) -> TabWindow {
    let tab_items: Vec<TabItem> = folder
        .children
        .iter()
        .flatten()
        .enumerate()
        .filter(|(_, child)| !child.is_folder())
        .map(|(position, child)| TabItem::SavedOnly(saved_state_from_bookmark(child, position)))
        .collect();

    let title = match &folder.title {
        Some(title) => title.clone(),
        None => {
            let fallback = tab_items
                .first()
                .map(|item| item.title().to_string())
                .unwrap_or_default();
            tab_warn!(
                "bookmark folder {} has no title, falling back to {:?}",
                folder.id,
                fallback
            );
            fallback
        }
    };

    TabWindow::new(
        WindowFacets::ClosedSaved(SavedWindowState {
            folder_id: folder.id.clone(),
            title,
        }),
        tab_items,
    )
}

/// Builds an open-only tab item from a live tab.
pub fn from_live_tab(tab: &LiveTab) -> TabItem {
    if tab.url.is_none() {
        tab_debug!("live tab {} reported without a url", tab.id);
    }
    TabItem::OpenOnly(OpenTabState {
        url: tab.url.clone().unwrap_or_default(),
        open_tab_id: tab.id,
        active: tab.active,
        open_tab_index: tab.index,
        fav_icon_url: tab.fav_icon_url.clone(),
        title: tab.title.clone().unwrap_or_default(),
        audible: tab.audible,
    })
}

/// Builds an open, unsaved window from a live window. A missing tab list is
/// an empty window.
pub fn from_live_window(window: &LiveWindow) -> TabWindow {
    TabWindow::new(
        WindowFacets::OpenUnsaved(OpenWindowState {
            open_window_id: window.id,
            window_type: window.window_type.clone(),
        }),
        window.tabs().iter().map(from_live_tab).collect(),
    )
}

pub(crate) fn saved_state_from_bookmark(
    node: &BookmarkNode,
    fallback_index: usize,
) -> SavedTabState {
    let url = match &node.url {
        Some(url) => url.clone(),
        None => {
            tab_warn!("bookmark {} has no url, using an empty one", node.id);
            String::new()
        }
    };
    SavedTabState {
        bookmark_id: node.id.clone(),
        bookmark_index: node.index.unwrap_or(fallback_index),
        title: node.title.clone().unwrap_or_default(),
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, index: Option<usize>, url: &str) -> BookmarkNode {
        BookmarkNode {
            id: id.to_string(),
            index,
            title: Some(format!("title {id}")),
            url: Some(url.to_string()),
            children: None,
        }
    }

    #[test]
    fn bookmark_without_url_gets_an_empty_one() {
        let node = BookmarkNode {
            id: "b1".to_string(),
            index: Some(4),
            ..BookmarkNode::default()
        };
        let item = from_bookmark(&node);
        assert_eq!(item.url(), "");
        assert_eq!(item.bookmark_id(), Some("b1"));
        assert_eq!(item.saved_state().map(|s| s.bookmark_index), Some(4));
    }

    #[test]
    fn folder_positions_fill_missing_indices() {
        let folder = BookmarkNode {
            id: "f1".to_string(),
            title: Some("Reading".to_string()),
            children: Some(vec![
                leaf("b1", None, "https://a.com"),
                BookmarkNode {
                    id: "sub".to_string(),
                    children: Some(vec![leaf("deep", Some(0), "https://deep.com")]),
                    ..BookmarkNode::default()
                },
                leaf("b2", None, "https://b.com"),
            ]),
            ..BookmarkNode::default()
        };
        let window = from_bookmark_folder(&folder);
        let indices: Vec<_> = window
            .tab_items
            .iter()
            .filter_map(|item| item.saved_state().map(|s| s.bookmark_index))
            .collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn live_tab_without_url_or_title_defaults_to_empty() {
        let tab = LiveTab {
            id: 11,
            index: 2,
            active: true,
            ..LiveTab::default()
        };
        let item = from_live_tab(&tab);
        assert_eq!(item.url(), "");
        assert_eq!(item.title(), "");
        assert!(item.is_active());
        assert_eq!(item.open_state().map(|o| o.open_tab_index), Some(2));
    }

    #[test]
    fn live_window_without_tab_list_is_empty() {
        let window = from_live_window(&LiveWindow {
            id: 3,
            window_type: "popup".to_string(),
            tabs: None,
        });
        assert!(window.is_open());
        assert!(!window.is_saved());
        assert_eq!(window.open_window_id(), Some(3));
        assert!(window.tab_items.is_empty());
        assert_eq!(window.title(), "");
    }
}
