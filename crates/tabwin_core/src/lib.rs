//! Tabwin core: a pure model of browser windows whose tabs may be open,
//! bookmarked, or both, and the transitions that keep it in step with the
//! browser.
mod construct;
mod error;
mod lifecycle;
mod mutate;
mod reconcile;
mod source;
mod tab_item;
mod window;

pub use construct::{from_bookmark, from_bookmark_folder, from_live_tab, from_live_window};
pub use error::TabLookupError;
pub use lifecycle::{close_window, save_window, unsave_window};
pub use mutate::{close_tab, save_tab, set_active_tab, unsave_tab, update_tab_item};
pub use reconcile::{reconcile, update_window};
pub use source::{BookmarkNode, LiveTab, LiveWindow};
pub use tab_item::{OpenTabState, SavedTabState, TabItem};
pub use window::{OpenWindowState, SavedWindowState, TabWindow, WindowFacets};
