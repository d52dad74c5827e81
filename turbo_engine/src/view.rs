//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, handlers push semantic
//! [`ViewItem`]s; at the end of the turn the whole frame, together with the
//! current [`StatusLine`], is handed to a [`Presenter`] for display.
mod console;
mod icons;
mod view_item;

pub use console::ConsolePresenter;
pub use view_item::{InventoryLine, ViewItem};

use log::debug;
use serde::{Deserialize, Serialize};

/// Values a front end keeps on screen between commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub location: String,
    pub item_count: usize,
    pub quest: String,
}

/// Anything that can display a finished frame.
pub trait Presenter {
    /// Display the frame's items in order, then the status line.
    fn present(&mut self, frame: &[ViewItem], status: &StatusLine);
}

/// View aggregates the messages produced by one pass through the REPL.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}
impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove and return every item queued so far.
    pub fn take_frame(&mut self) -> Vec<ViewItem> {
        std::mem::take(&mut self.items)
    }

    /// Hand the current frame to `presenter` and clear the buffer for the next turn.
    pub fn flush(&mut self, presenter: &mut dyn Presenter, status: &StatusLine) {
        let frame = self.take_frame();
        debug!("presenting frame of {} item(s)", frame.len());
        presenter.present(&frame, status);
    }
}
