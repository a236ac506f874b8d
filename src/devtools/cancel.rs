//! Process-wide cancellation.
//!
//! A [`CancelToken`] is created once at startup and handed to every command
//! handler by value. Clones share the same flag, so cancelling any of them is
//! visible to all.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit status used when a second interrupt arrives while the first one is
/// still being honoured.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token that is cancelled by SIGINT or SIGTERM.
    ///
    /// The first signal only flips the token. A second one terminates the
    /// process, since blocking reads never look at the token.
    pub fn from_signals() -> Self {
        let token = Self::new();
        let handler_token = token.clone();

        if let Err(e) = ctrlc::set_handler(move || {
            if handler_token.cancel() {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            log::debug!("interrupt received, cancelling");
        }) {
            log::warn!("could not install signal handler: {}", e);
        }

        token
    }

    /// Marks the token as cancelled. Returns whether it already was.
    pub fn cancel(&self) -> bool {
        self.cancelled.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_cancelled() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();

        assert!(!clone.cancel());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_reports_previous_state() {
        let token = CancelToken::new();
        assert!(!token.cancel());
        assert!(token.cancel());
    }
}
