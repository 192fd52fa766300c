//! Global hotkey registration.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, RegisterHotKey, UnregisterHotKey,
};
use windows::core::Result;

use crate::config::HotkeyBinding;

/// The single correction hotkey id (1000+ range keeps clear of control
/// ids, should a settings window ever be added).
pub const HK_CORRECTION_ID: i32 = 1001;

pub fn unregister(hwnd: HWND) {
    unsafe {
        let _ = UnregisterHotKey(Some(hwnd), HK_CORRECTION_ID);
    }
}

/// Registers `binding` as the correction hotkey.
///
/// Registration failure (typically the combination is taken by another
/// application) is the one collaborator error surfaced to the caller;
/// the embedding code reports it and exits.
pub fn register(hwnd: HWND, binding: &HotkeyBinding) -> Result<()> {
    // Re-registration is safest as unregister-then-register.
    unregister(hwnd);

    unsafe {
        RegisterHotKey(
            Some(hwnd),
            HK_CORRECTION_ID,
            HOT_KEY_MODIFIERS(binding.modifiers()),
            binding.vk,
        )?;
    }

    Ok(())
}
