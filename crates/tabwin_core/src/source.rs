//! Shapes handed to us by the browser runtime and the bookmark store.
//!
//! Every field a collaborator may leave out is optional or defaulted, so a
//! malformed record deserializes instead of failing; the construction
//! functions decide on fallbacks.

use serde::{Deserialize, Serialize};

/// A node of the bookmark tree. Folders carry `children`, leaves carry `url`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookmarkNode {
    pub id: String,
    pub index: Option<usize>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub children: Option<Vec<BookmarkNode>>,
}

impl BookmarkNode {
    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }
}

/// A tab as reported by the browser runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveTab {
    pub id: i64,
    pub url: Option<String>,
    pub title: Option<String>,
    pub fav_icon_url: Option<String>,
    pub active: bool,
    pub index: usize,
    pub audible: bool,
    pub window_id: i64,
}

/// A window as reported by the browser runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveWindow {
    pub id: i64,
    #[serde(rename = "type")]
    pub window_type: String,
    pub tabs: Option<Vec<LiveTab>>,
}

impl LiveWindow {
    pub fn tabs(&self) -> &[LiveTab] {
        self.tabs.as_deref().unwrap_or_default()
    }
}
