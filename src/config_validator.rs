//! Binding invariants enforced at configuration time, not inside the flow.

use crate::config::HotkeyBinding;

/// A binding must carry at least one modifier (a bare key would swallow
/// normal typing) and a non-zero virtual key code.
pub fn validate_binding(binding: &HotkeyBinding) -> Result<(), String> {
    if !binding.has_modifier() {
        return Err("hotkey binding requires at least one modifier".to_string());
    }

    if binding.vk == 0 {
        return Err("hotkey binding requires a key".to_string());
    }

    Ok(())
}
