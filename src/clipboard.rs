//! Clipboard access behind a single copy capability.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Something that can put text on a clipboard.
pub trait CopyText {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A platform clipboard connection.
pub trait ClipboardBackend: Sized {
    fn open() -> Result<Self, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl ClipboardBackend for arboard::Clipboard {
    fn open() -> Result<Self, ClipboardError> {
        Ok(arboard::Clipboard::new()?)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        arboard::Clipboard::set_text(self, text)?;
        Ok(())
    }
}

/// The system clipboard, `arboard` unless another backend is named.
///
/// The connection is opened lazily and kept. If writing through it fails, a
/// fresh connection is opened for one more attempt; some platforms drop the
/// connection behind a long-lived handle.
pub struct SystemClipboard<B = arboard::Clipboard> {
    handle: Option<B>,
}

impl<B> Default for SystemClipboard<B> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: ClipboardBackend> SystemClipboard<B> {
    fn copy_fresh(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = B::open()?;
        clipboard.set_text(text)?;
        self.handle = Some(clipboard);
        Ok(())
    }
}

impl<B: ClipboardBackend> CopyText for SystemClipboard<B> {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(clipboard) = self.handle.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    log::debug!("Cached clipboard handle failed ({err}), reopening");
                    self.handle = None;
                }
            }
        }
        self.copy_fresh(text)
    }
}
