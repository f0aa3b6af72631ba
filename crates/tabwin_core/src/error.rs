use thiserror::Error;

/// Raised by the save/unsave mutators when the event does not line up with
/// the window it was routed to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabLookupError {
    #[error("tab item for {url:?} is not open")]
    NotOpen { url: String },
    #[error("no open tab with id {0} in window")]
    OpenTabNotFound(i64),
    #[error("tab item for {url:?} is not saved")]
    NotSaved { url: String },
    #[error("no saved tab with bookmark id {0:?} in window")]
    BookmarkNotFound(String),
}
