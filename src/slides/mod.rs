pub mod card;
pub mod emblem;
pub mod pane;
pub mod panel;
pub mod transition;

pub use pane::SlidePane;
