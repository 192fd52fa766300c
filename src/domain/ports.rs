//! Capability traits for the OS collaborators.
//!
//! The capture protocol and the correction flow only ever talk to the
//! system through these seams, so both can be driven by deterministic
//! fakes in tests. The Win32 implementations live under `platform::win`.

/// Shared mutable text buffer (the system clipboard).
///
/// Both operations may fail transiently; failures must surface as
/// `None`/`false` rather than panics or errors.
pub trait Clipboard {
    fn try_get_text(&self) -> Option<String>;
    fn try_set_text(&self, text: &str) -> bool;
}

/// Best-effort keystroke injection into whatever has OS input focus.
///
/// Return values mean "all input events were submitted", nothing more; the
/// target application may still ignore them.
pub trait Keystrokes {
    fn select_all(&self) -> bool;
    fn copy(&self) -> bool;
    fn paste(&self) -> bool;
}

/// Fire-and-forget request to advance the foreground application's active
/// input language by one step. No confirmation is awaited.
pub trait LayoutSwitcher {
    fn request_next_layout(&self);
}
