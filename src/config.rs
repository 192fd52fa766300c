//! Hotkey binding persistence.
//!
//! One binding is loaded at startup and replaced wholesale when
//! reconfigured. Load never fails: any read, parse or validation problem
//! falls back to the documented default binding (Shift+Win+E). Save is
//! best-effort and validates before writing.

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::config_validator::validate_binding;

// RegisterHotKey modifier flags, kept as plain constants so the domain and
// config stay buildable off Windows.
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;

/// Virtual key code of the default hotkey key (`E`).
const VK_E: u32 = 0x45;

const APP_DIR: &str = "ScriptSwap";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub use_ctrl: bool,
    pub use_shift: bool,
    pub use_alt: bool,
    pub use_win: bool,
    pub vk: u32,
}

impl Default for HotkeyBinding {
    fn default() -> Self {
        Self {
            use_ctrl: false,
            use_shift: true,
            use_alt: false,
            use_win: true,
            vk: VK_E,
        }
    }
}

impl HotkeyBinding {
    /// Modifier bits in `RegisterHotKey` encoding.
    pub fn modifiers(&self) -> u32 {
        let mut mods = 0;
        if self.use_ctrl {
            mods |= MOD_CONTROL;
        }
        if self.use_shift {
            mods |= MOD_SHIFT;
        }
        if self.use_alt {
            mods |= MOD_ALT;
        }
        if self.use_win {
            mods |= MOD_WIN;
        }
        mods
    }

    pub fn has_modifier(&self) -> bool {
        self.use_ctrl || self.use_shift || self.use_alt || self.use_win
    }

    /// Human readable form, e.g. `"Shift + Win + E"`. Used for logging.
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.use_ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.use_shift {
            parts.push("Shift".to_string());
        }
        if self.use_alt {
            parts.push("Alt".to_string());
        }
        if self.use_win {
            parts.push("Win".to_string());
        }
        parts.push(key_name(self.vk));
        parts.join(" + ")
    }
}

fn key_name(vk: u32) -> String {
    match vk {
        0x30..=0x39 => char::from(b'0' + (vk - 0x30) as u8).to_string(),
        0x41..=0x5A => char::from(b'A' + (vk - 0x41) as u8).to_string(),
        0x70..=0x7B => format!("F{}", vk - 0x70 + 1),
        other => format!("VK_{other:02X}"),
    }
}

/// On-disk shape; validated before it becomes a [`HotkeyBinding`].
/// Missing fields fall back to the default binding's values.
#[derive(Debug, Deserialize)]
struct RawBinding {
    #[serde(default)]
    use_ctrl: bool,
    #[serde(default = "enabled")]
    use_shift: bool,
    #[serde(default)]
    use_alt: bool,
    #[serde(default = "enabled")]
    use_win: bool,
    #[serde(default = "default_vk")]
    vk: u32,
}

fn enabled() -> bool {
    true
}

fn default_vk() -> u32 {
    VK_E
}

impl TryFrom<RawBinding> for HotkeyBinding {
    type Error = String;

    fn try_from(raw: RawBinding) -> Result<Self, Self::Error> {
        let binding = Self {
            use_ctrl: raw.use_ctrl,
            use_shift: raw.use_shift,
            use_alt: raw.use_alt,
            use_win: raw.use_win,
            vk: raw.vk,
        };
        validate_binding(&binding)?;
        Ok(binding)
    }
}

impl<'de> Deserialize<'de> for HotkeyBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBinding::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

pub fn settings_path() -> io::Result<PathBuf> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "APPDATA is not set"))?;

    Ok(PathBuf::from(appdata).join(APP_DIR).join(SETTINGS_FILE))
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

fn try_load() -> io::Result<HotkeyBinding> {
    let path = settings_path()?;
    ensure_parent_dir(&path)?;

    confy::load_path(&path).map_err(confy_err)
}

/// Loads the binding, falling back to the default on any failure.
pub fn load() -> HotkeyBinding {
    match try_load() {
        Ok(binding) => binding,
        Err(e) => {
            tracing::warn!(error = %e, "settings load failed, using default binding");
            HotkeyBinding::default()
        }
    }
}

pub fn save(binding: &HotkeyBinding) -> io::Result<()> {
    validate_binding(binding)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let path = settings_path()?;
    ensure_parent_dir(&path)?;
    confy::store_path(path, binding).map_err(confy_err)
}
