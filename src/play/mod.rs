//! Interactive play: drag-and-drop and click gestures plus undo.
//!
//! These helpers turn what a player does at the table into moves. Every
//! gesture either applies a legal move or leaves the table as it was.

pub mod controller;
pub mod history;

pub use controller::{
    click_column, click_stock, drop_on_column, drop_on_foundation, DragSession, Dropped,
};
pub use history::UndoHistory;
