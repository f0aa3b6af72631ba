//! Tabwin replay host: owns the tracked windows and feeds browser events to
//! the core one at a time.
mod event;
mod script;
mod store;
mod update;

pub use event::Event;
pub use script::{load_script, render, replay, Script, WindowView};
pub use store::WindowStore;
pub use update::update;
