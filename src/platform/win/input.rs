//! Synthetic keystrokes via `SendInput`.

use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_KEYUP, SendInput,
    VIRTUAL_KEY, VK_CONTROL,
};

use crate::domain::ports::Keystrokes;

const VK_A_KEY: VIRTUAL_KEY = VIRTUAL_KEY(0x41);
const VK_C_KEY: VIRTUAL_KEY = VIRTUAL_KEY(0x43);
const VK_V_KEY: VIRTUAL_KEY = VIRTUAL_KEY(0x56);

/// RAII helper that tracks pressed modifier keys and releases them on drop,
/// in reverse order, even when a later event fails.
struct KeySequence {
    pressed: Vec<VIRTUAL_KEY>,
}

impl KeySequence {
    fn new() -> Self {
        Self {
            pressed: Vec::new(),
        }
    }

    /// Sends a key down event and records the key for automatic release.
    fn down(&mut self, vk: VIRTUAL_KEY) -> bool {
        send_key(vk, false).then(|| self.pressed.push(vk)).is_some()
    }

    /// Taps a key (down then up).
    fn tap(vk: VIRTUAL_KEY) -> bool {
        send_key(vk, false) && send_key(vk, true)
    }
}

impl Drop for KeySequence {
    fn drop(&mut self) {
        for vk in self.pressed.drain(..).rev() {
            let _ = send_key(vk, true);
        }
    }
}

/// Presses Ctrl, taps `vk`, releases Ctrl.
fn send_ctrl_combo(vk: VIRTUAL_KEY) -> bool {
    let mut seq = KeySequence::new();
    seq.down(VK_CONTROL) && KeySequence::tap(vk)
}

fn send_key(vk: VIRTUAL_KEY, key_up: bool) -> bool {
    let input = INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: 0,
                dwFlags: if key_up {
                    KEYEVENTF_KEYUP
                } else {
                    KEYBD_EVENT_FLAGS::default()
                },
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };

    let Ok(input_size) = i32::try_from(size_of::<INPUT>()) else {
        return false;
    };

    let sent = unsafe { SendInput(&[input], input_size) };
    sent != 0
}

/// Ctrl+A / Ctrl+C / Ctrl+V into whatever has OS input focus.
#[derive(Copy, Clone, Debug, Default)]
pub struct WinKeystrokes;

impl Keystrokes for WinKeystrokes {
    fn select_all(&self) -> bool {
        send_ctrl_combo(VK_A_KEY)
    }

    fn copy(&self) -> bool {
        send_ctrl_combo(VK_C_KEY)
    }

    fn paste(&self) -> bool {
        send_ctrl_combo(VK_V_KEY)
    }
}
