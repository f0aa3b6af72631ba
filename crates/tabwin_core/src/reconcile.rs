//! Merging a window's known tab items with a fresh live snapshot.

use std::collections::{BTreeMap, BTreeSet};

use tabwin_logging::tab_debug;

use crate::construct::from_live_tab;
use crate::source::{LiveTab, LiveWindow};
use crate::tab_item::TabItem;
use crate::window::{OpenWindowState, TabWindow};

/// Combines `prior` items with the current live tabs of the same window.
///
/// Open facets of `prior` are discarded; live tabs are matched to saved items
/// by exact URL. The result lists open items by tab index, then closed items
/// by bookmark index.
pub fn reconcile(prior: &[TabItem], live_tabs: &[LiveTab]) -> Vec<TabItem> {
    let live_items = live_tabs.iter().map(from_live_tab).collect();
    merge_items(prior.iter().cloned(), live_items)
}

/// Reconciles `window` against a live window snapshot and marks it open under
/// the snapshot's id and type. Saved facets are kept as they are.
pub fn update_window(window: &TabWindow, live: &LiveWindow) -> TabWindow {
    let tab_items = reconcile(&window.tab_items, live.tabs());
    let facets = window.facets.clone().opened(OpenWindowState {
        open_window_id: live.id,
        window_type: live.window_type.clone(),
    });
    TabWindow::new(facets, tab_items)
}

/// Saved facets come from `saved_side` (open facets there are dropped), open
/// facets from `open_side`.
///
/// When several open items share a URL they all take the saved facet of the
/// first saved item at that URL, and any further saved items at that URL are
/// absorbed. Saved state is therefore not distributed one-to-one between
/// duplicate tabs.
pub(crate) fn merge_items(
    saved_side: impl IntoIterator<Item = TabItem>,
    open_side: Vec<TabItem>,
) -> Vec<TabItem> {
    let mut open_by_url = group_by_url(open_side);
    let saved_by_url = group_by_url(reset_to_saved_once(saved_side));

    let mut merged = Vec::new();
    for (url, saved_items) in saved_by_url {
        let Some(open_items) = open_by_url.remove(&url) else {
            merged.extend(saved_items);
            continue;
        };
        if open_items.len() > 1 || saved_items.len() > 1 {
            tab_debug!(
                "{} open and {} saved items share url {:?}; broadcasting the first bookmark",
                open_items.len(),
                saved_items.len(),
                url
            );
        }
        match saved_items.iter().find_map(TabItem::saved_state) {
            Some(saved) => merged.extend(
                open_items
                    .into_iter()
                    .map(|item| item.attach_saved(saved.clone())),
            ),
            None => merged.extend(open_items),
        }
    }
    merged.extend(open_by_url.into_values().flatten());

    let (mut open, mut closed): (Vec<TabItem>, Vec<TabItem>) =
        merged.into_iter().partition(TabItem::is_open);
    open.sort_by_key(|item| item.open_state().map(|state| state.open_tab_index));
    closed.sort_by_key(|item| item.saved_state().map(|state| state.bookmark_index));

    open.extend(closed);
    open
}

/// Resets every item to its saved facet, keeping only the first item per
/// bookmark. Open tabs sharing a URL all carry the same bookmark, so without
/// this one bookmark would come back as several closed tabs.
pub(crate) fn reset_to_saved_once(items: impl IntoIterator<Item = TabItem>) -> Vec<TabItem> {
    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .filter_map(TabItem::reset_to_saved)
        .filter(|item| {
            item.bookmark_id()
                .is_none_or(|bookmark_id| seen.insert(bookmark_id.to_string()))
        })
        .collect()
}

fn group_by_url(items: impl IntoIterator<Item = TabItem>) -> BTreeMap<String, Vec<TabItem>> {
    let mut grouped: BTreeMap<String, Vec<TabItem>> = BTreeMap::new();
    for item in items {
        grouped.entry(item.url().to_string()).or_default().push(item);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_item::SavedTabState;

    fn saved(bookmark_id: &str, index: usize, url: &str) -> TabItem {
        TabItem::SavedOnly(SavedTabState {
            bookmark_id: bookmark_id.to_string(),
            bookmark_index: index,
            title: bookmark_id.to_string(),
            url: url.to_string(),
        })
    }

    fn live(id: i64, index: usize, url: &str) -> LiveTab {
        LiveTab {
            id,
            index,
            url: Some(url.to_string()),
            ..LiveTab::default()
        }
    }

    #[test]
    fn duplicate_urls_share_the_first_bookmark() {
        let prior = vec![
            saved("b1", 0, "https://a.com"),
            saved("b2", 1, "https://a.com"),
        ];
        let merged = reconcile(&prior, &[live(1, 0, "https://a.com"), live(2, 1, "https://a.com")]);

        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|item| item.bookmark_id() == Some("b1")));
    }

    #[test]
    fn shared_bookmark_closes_into_a_single_item() {
        let prior = vec![saved("b1", 0, "https://a.com")];
        let live_tabs = [live(1, 0, "https://a.com"), live(2, 1, "https://a.com")];
        let open = reconcile(&prior, &live_tabs);
        assert_eq!(open.len(), 2);

        let closed = reconcile(&open, &[]);
        let ids: Vec<_> = closed.iter().filter_map(TabItem::bookmark_id).collect();
        assert_eq!(ids, vec!["b1"]);
        assert!(!closed[0].is_open());
    }

    #[test]
    fn prior_open_only_items_vanish() {
        let prior = vec![from_live_tab(&live(5, 0, "https://gone.com"))];
        let merged = reconcile(&prior, &[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn no_live_tabs_closes_everything_saved() {
        let prior = vec![
            saved("b2", 1, "https://b.com"),
            saved("b1", 0, "https://a.com"),
        ];
        let merged = reconcile(&prior, &[]);
        let ids: Vec<_> = merged.iter().filter_map(TabItem::bookmark_id).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
        assert!(merged.iter().all(|item| !item.is_open()));
    }
}
