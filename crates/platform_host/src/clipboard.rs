//! Clipboard write contract.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Boxed, non-`Send` future returned by [`ClipboardService`].
pub type ClipboardFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + 'a>>;

/// Host service that writes plain text to the system clipboard.
pub trait ClipboardService {
    /// Writes `text` to the clipboard.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard that rejects every write, used where no clipboard exists.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn write_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a> {
        Box::pin(async { Err("clipboard unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard recording the last written text.
pub struct MemoryClipboardService {
    last: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboardService {
    /// Returns the most recent text written.
    pub fn contents(&self) -> Option<String> {
        self.last.borrow().clone()
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a> {
        Box::pin(async move {
            *self.last.borrow_mut() = Some(text.to_string());
            Ok(())
        })
    }
}
