pub mod app;
pub mod terminal;

pub use app::{App, Flow, Key, ScreenKind, View};
pub use terminal::run_app;
