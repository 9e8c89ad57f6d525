//! System clipboard access
//!
//! A successful copy posts one toast; a failed copy is only logged.

use crate::app::state::{Toast, ToastQueue};
use anyhow::Context;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Clipboard backed by `arboard`, opened per write.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let mut cb = arboard::Clipboard::new().context("open clipboard")?;
        cb.set_text(text.to_string()).context("write clipboard")?;
        Ok(())
    }
}

/// Copy `color` and report success with a toast. Returns whether it worked.
pub fn copy_to_clipboard(
    sink: &mut dyn ClipboardSink,
    color: &str,
    toasts: &mut ToastQueue,
) -> bool {
    match sink.set_text(color) {
        Ok(()) => {
            tracing::info!(%color, "copied to clipboard");
            toasts.push(Toast::success(format!("Copied {color} to clipboard")));
            true
        }
        Err(e) => {
            tracing::error!(%color, error = %format!("{e:#}"), "could not copy text");
            false
        }
    }
}
