//! Clipboard-based selection capture.
//!
//! There is no direct API to read another application's selection, so the
//! protocol approximates it through the clipboard: inject select-all and
//! copy, then poll until the clipboard reports text. The fixed delays give
//! the target application time to process each synthetic keystroke, and
//! the acceptance predicate rejects the common failure mode where
//! select-all silently selects nothing and the clipboard still holds stale
//! content.

use std::thread;
use std::time::Duration;

use super::ports::{Clipboard, Keystrokes};

/// Retry/poll policy for one capture run.
///
/// The defaults are the tuned production constants; tests shrink the delays
/// to zero to run the protocol deterministically.
#[derive(Clone, Debug)]
pub struct CapturePolicy {
    /// Select-all + copy rounds before giving up.
    pub attempts: usize,
    /// Settle time after the select-all keystroke.
    pub select_delay: Duration,
    /// Settle time after the copy keystroke.
    pub copy_delay: Duration,
    /// Clipboard reads per attempt.
    pub polls: usize,
    /// Pause between clipboard reads.
    pub poll_interval: Duration,
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            select_delay: Duration::from_millis(100),
            copy_delay: Duration::from_millis(150),
            polls: 5,
            poll_interval: Duration::from_millis(40),
        }
    }
}

/// Best-effort read of the current selection in the foreground application.
///
/// Returns `None` when nothing new was selected: either the selection is
/// truly empty or the clipboard never changed from its pre-capture value.
/// The clipboard is left holding whatever the last copy produced; callers
/// overwrite it with the transcoded text anyway.
pub fn capture_selection(
    clipboard: &impl Clipboard,
    keys: &impl Keystrokes,
    policy: &CapturePolicy,
) -> Option<String> {
    // Read failure here means "no prior content", not a fatal error.
    let original = clipboard.try_get_text();

    for attempt in 1..=policy.attempts {
        // Both keystrokes are best effort; a failed injection just makes
        // this attempt fail the acceptance test below.
        let _ = keys.select_all();
        thread::sleep(policy.select_delay);
        let _ = keys.copy();
        thread::sleep(policy.copy_delay);

        let Some(text) = poll_for_text(clipboard, policy) else {
            tracing::trace!(attempt, "clipboard never reported text");
            continue;
        };

        if is_accepted(&text, original.as_deref()) {
            tracing::trace!(attempt, len = text.chars().count(), "selection captured");
            return Some(text);
        }

        tracing::trace!(attempt, "clipboard content rejected");
    }

    None
}

/// Polls until the clipboard reports text, absorbing the asynchronous gap
/// between the copy keystroke being delivered and the clipboard updating.
fn poll_for_text(clipboard: &impl Clipboard, policy: &CapturePolicy) -> Option<String> {
    for poll in 0..policy.polls {
        if let Some(text) = clipboard.try_get_text() {
            return Some(text);
        }
        if poll + 1 < policy.polls {
            thread::sleep(policy.poll_interval);
        }
    }
    None
}

/// Acceptance predicate for one attempt's result.
///
/// Single-character content is treated as noise, and content equal to the
/// pre-capture snapshot means nothing was actually copied.
fn is_accepted(text: &str, original: Option<&str>) -> bool {
    text.chars().nth(1).is_some() && original != Some(text)
}
