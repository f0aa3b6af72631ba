use tabwin_core::{from_bookmark_folder, BookmarkNode, TabWindow};

/// The host-side collection of tracked windows, in the order they were first
/// seen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowStore {
    windows: Vec<TabWindow>,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with one closed window per bookmark folder.
    pub fn from_folders(folders: &[BookmarkNode]) -> Self {
        Self {
            windows: folders.iter().map(from_bookmark_folder).collect(),
        }
    }

    pub fn windows(&self) -> &[TabWindow] {
        &self.windows
    }

    pub fn by_open_id(&self, open_window_id: i64) -> Option<&TabWindow> {
        self.position_by_open_id(open_window_id)
            .map(|position| &self.windows[position])
    }

    pub fn by_folder_id(&self, folder_id: &str) -> Option<&TabWindow> {
        self.position_by_folder_id(folder_id)
            .map(|position| &self.windows[position])
    }

    pub(crate) fn position_by_open_id(&self, open_window_id: i64) -> Option<usize> {
        self.windows
            .iter()
            .position(|window| window.open_window_id() == Some(open_window_id))
    }

    pub(crate) fn position_by_folder_id(&self, folder_id: &str) -> Option<usize> {
        self.windows
            .iter()
            .position(|window| window.folder_id() == Some(folder_id))
    }

    pub(crate) fn push(&mut self, window: TabWindow) {
        self.windows.push(window);
    }

    /// Swaps in the next state of the window at `position`; `None` stops
    /// tracking it.
    pub(crate) fn replace(&mut self, position: usize, next: Option<TabWindow>) {
        match next {
            Some(window) => self.windows[position] = window,
            None => {
                self.windows.remove(position);
            }
        }
    }
}
