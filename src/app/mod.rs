pub mod event;
pub mod forms;
pub mod tui;
pub mod ui;

pub use event::{StoreEvent, StoreHandle};
pub use tui::{run, App};
