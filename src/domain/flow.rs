//! The hotkey-triggered correction flow.
//!
//! One blocking run per activation: capture the selection through the
//! clipboard, detect its layout, transcode it, put the result on the
//! clipboard, paste it over the selection and request the next input
//! language. Collaborator failures degrade to a silent no-op; nothing in
//! here is allowed to escape to the message loop.

use std::cell::Cell;
use std::thread;
use std::time::Duration;

use super::capture::{CapturePolicy, capture_selection};
use super::detect::Layout;
use super::mapping::transcode;
use super::outcome::{Failure, FlowOutcome, SkipReason};
use super::ports::{Clipboard, Keystrokes, LayoutSwitcher};

/// Settle delays for the tail of the flow.
#[derive(Clone, Debug)]
pub struct FlowDelays {
    /// Gap between the clipboard write and the paste keystroke.
    pub paste_settle: Duration,
    /// Gap between the paste keystroke and the language switch request,
    /// long enough for the paste to complete in the target application.
    pub switch_settle: Duration,
}

impl Default for FlowDelays {
    fn default() -> Self {
        Self {
            paste_settle: Duration::from_millis(20),
            switch_settle: Duration::from_millis(200),
        }
    }
}

/// Drops activations that arrive while a flow is already running.
///
/// The whole flow blocks the message thread, so a second `WM_HOTKEY` can
/// only be observed once the queue is pumped again; the guard still makes
/// the re-entrancy policy explicit instead of relying on that.
pub struct BusyGuard(Cell<bool>);

/// Marks the guard busy while alive; released on drop.
pub struct BusyToken<'a>(&'a BusyGuard);

impl BusyGuard {
    pub const fn new() -> Self {
        Self(Cell::new(false))
    }

    pub fn try_acquire(&self) -> Option<BusyToken<'_>> {
        if self.0.replace(true) {
            None
        } else {
            Some(BusyToken(self))
        }
    }
}

impl Drop for BusyToken<'_> {
    fn drop(&mut self) {
        self.0.0.set(false);
    }
}

impl Default for BusyGuard {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CorrectionFlow<C, K, L> {
    clipboard: C,
    keys: K,
    switcher: L,
    capture: CapturePolicy,
    delays: FlowDelays,
    busy: BusyGuard,
}

impl<C, K, L> CorrectionFlow<C, K, L>
where
    C: Clipboard,
    K: Keystrokes,
    L: LayoutSwitcher,
{
    pub fn new(clipboard: C, keys: K, switcher: L) -> Self {
        Self::with_policy(
            clipboard,
            keys,
            switcher,
            CapturePolicy::default(),
            FlowDelays::default(),
        )
    }

    pub fn with_policy(
        clipboard: C,
        keys: K,
        switcher: L,
        capture: CapturePolicy,
        delays: FlowDelays,
    ) -> Self {
        Self {
            clipboard,
            keys,
            switcher,
            capture,
            delays,
            busy: BusyGuard::new(),
        }
    }

    /// Runs one correction flow for a hotkey activation.
    pub fn on_hotkey(&self) -> FlowOutcome {
        let Some(_busy) = self.busy.try_acquire() else {
            tracing::debug!("activation dropped, flow already in progress");
            return FlowOutcome::Skipped(SkipReason::Busy);
        };

        let outcome = self.run();

        match &outcome {
            FlowOutcome::Applied => tracing::debug!("selection corrected"),
            FlowOutcome::Skipped(reason) => tracing::trace!(reason = reason.as_str(), "skipped"),
            FlowOutcome::Failed(f) => tracing::warn!(failure = ?f, "correction flow failed"),
        }

        outcome
    }

    fn run(&self) -> FlowOutcome {
        let Some(text) = capture_selection(&self.clipboard, &self.keys, &self.capture) else {
            return FlowOutcome::Skipped(SkipReason::NoSelection);
        };

        let direction = Layout::of(&text).correction_direction();
        let converted = transcode(&text, direction);

        if !self.clipboard.try_set_text(&converted) {
            // Abort before pasting; the user's selection is left as-is,
            // though the clipboard may already hold the captured text.
            return FlowOutcome::Failed(Failure::ClipboardWrite);
        }

        thread::sleep(self.delays.paste_settle);
        if !self.keys.paste() {
            // The transcoded text stays on the clipboard for a manual paste.
            tracing::warn!("paste injection failed, converted text left on clipboard");
        }

        thread::sleep(self.delays.switch_settle);
        self.switcher.request_next_layout();

        FlowOutcome::Applied
    }
}
