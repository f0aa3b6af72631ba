use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tabwin_core::{BookmarkNode, TabWindow};
use tabwin_logging::tab_info;

use crate::event::Event;
use crate::store::WindowStore;
use crate::update::update;

/// Bookmark folders known at startup plus the events to replay, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub folders: Vec<BookmarkNode>,
    pub events: Vec<Event>,
}

/// One window of the replay output, with its derived title alongside.
#[derive(Debug, Serialize)]
pub struct WindowView<'a> {
    pub title: &'a str,
    #[serde(flatten)]
    pub window: &'a TabWindow,
}

pub fn load_script(path: &Path) -> Result<Script> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read replay script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse replay script {}", path.display()))
}

/// Replays `script` one event at a time and returns the final store.
pub fn replay(script: Script) -> WindowStore {
    let store = WindowStore::from_folders(&script.folders);
    tab_info!(
        "replaying {} events over {} saved windows",
        script.events.len(),
        store.windows().len()
    );
    script.events.into_iter().fold(store, update)
}

/// Renders the tracked windows as pretty JSON.
pub fn render(store: &WindowStore) -> Result<String> {
    let views: Vec<WindowView<'_>> = store
        .windows()
        .iter()
        .map(|window| WindowView {
            title: window.title(),
            window,
        })
        .collect();
    serde_json::to_string_pretty(&views).context("failed to serialize windows")
}
