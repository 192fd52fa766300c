//! Input language switching for the foreground window.

use windows::Win32::{
    Foundation::{HWND, LPARAM, WPARAM},
    UI::WindowsAndMessaging::{GetForegroundWindow, PostMessageW, WM_INPUTLANGCHANGEREQUEST},
};

use crate::domain::ports::LayoutSwitcher;

/// `INPUTLANGCHANGE_FORWARD`: ask for the next language in the user's
/// configured list rather than a specific HKL.
const INPUTLANGCHANGE_FORWARD: usize = 0x0002;

fn foreground_window() -> Option<HWND> {
    let fg = unsafe { GetForegroundWindow() };
    (!fg.0.is_null()).then_some(fg)
}

/// Posts a forward language change request to the foreground window.
///
/// Fire-and-forget: no foreground window or a failed post is only traced.
fn request_next_input_language() {
    let Some(fg) = foreground_window() else {
        tracing::trace!("no foreground window for language switch");
        return;
    };

    let posted = unsafe {
        PostMessageW(
            Some(fg),
            WM_INPUTLANGCHANGEREQUEST,
            WPARAM(INPUTLANGCHANGE_FORWARD),
            LPARAM(0),
        )
    };

    if let Err(e) = posted {
        tracing::trace!(error = ?e, "language switch request failed");
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct WinLayoutSwitcher;

impl LayoutSwitcher for WinLayoutSwitcher {
    fn request_next_layout(&self) {
        request_next_input_language();
    }
}
