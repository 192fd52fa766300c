//! Win32 clipboard access (`CF_UNICODETEXT` only).

use windows::Win32::{
    Foundation::{HANDLE, HGLOBAL},
    System::{
        DataExchange::{
            CloseClipboard, EmptyClipboard, GetClipboardData, OpenClipboard, SetClipboardData,
        },
        Memory::{GMEM_MOVEABLE, GlobalAlloc, GlobalFree, GlobalLock, GlobalSize, GlobalUnlock},
    },
};

use crate::domain::ports::Clipboard;

/// Win32 clipboard format id for UTF-16 text (`CF_UNICODETEXT`).
const CF_UNICODETEXT_ID: u32 = 13;

/// RAII guard that opens the clipboard on creation and closes it on drop.
///
/// The clipboard is a global shared resource; opening fails when another
/// process has it open, which callers treat as a transient miss.
struct ClipboardGuard;

impl ClipboardGuard {
    fn open() -> Option<Self> {
        unsafe { OpenClipboard(None).ok()? };
        Some(Self)
    }
}

impl Drop for ClipboardGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseClipboard();
        }
    }
}

/// Owns an `HGLOBAL` until it is handed over to the clipboard.
struct GlobalMem {
    handle: HGLOBAL,
    owned: bool,
}

impl GlobalMem {
    fn new(handle: HGLOBAL) -> Self {
        Self {
            handle,
            owned: true,
        }
    }

    /// After a successful `SetClipboardData` the system owns the block.
    fn disarm(&mut self) {
        self.owned = false;
    }
}

impl Drop for GlobalMem {
    fn drop(&mut self) {
        if self.owned && !self.handle.0.is_null() {
            unsafe {
                let _ = GlobalFree(self.handle);
            }
        }
    }
}

fn get_unicode_text() -> Option<String> {
    let _clip = ClipboardGuard::open()?;

    unsafe {
        let handle = GetClipboardData(CF_UNICODETEXT_ID).ok()?;
        if handle.0.is_null() {
            return None;
        }

        // The handle is owned by the clipboard; lock it, copy out, unlock.
        let hglobal = HGLOBAL(handle.0);
        let max_units = GlobalSize(hglobal) / size_of::<u16>();
        if max_units == 0 {
            return None;
        }

        let ptr = GlobalLock(hglobal) as *const u16;
        if ptr.is_null() {
            return None;
        }

        // NUL terminated UTF-16; scan up to the allocation size.
        let mut len = 0usize;
        while len < max_units && *ptr.add(len) != 0 {
            len += 1;
        }

        let text = String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len));
        let _ = GlobalUnlock(hglobal);
        Some(text)
    }
}

fn set_unicode_text(text: &str) -> bool {
    let Some(_clip) = ClipboardGuard::open() else {
        return false;
    };

    unsafe {
        let _ = EmptyClipboard();

        let mut units: Vec<u16> = text.encode_utf16().collect();
        units.push(0);

        let bytes = units.len() * size_of::<u16>();
        let hmem = match GlobalAlloc(GMEM_MOVEABLE, bytes) {
            Ok(h) => h,
            Err(e) => {
                tracing::warn!(error = ?e, "GlobalAlloc failed");
                return false;
            }
        };

        let mut mem = GlobalMem::new(hmem);

        let ptr = GlobalLock(hmem).cast::<u16>();
        if ptr.is_null() {
            tracing::warn!("GlobalLock returned null");
            return false;
        }

        std::ptr::copy_nonoverlapping(units.as_ptr(), ptr, units.len());
        let _ = GlobalUnlock(hmem);

        match SetClipboardData(CF_UNICODETEXT_ID, Some(HANDLE(hmem.0))) {
            Ok(_) => {
                mem.disarm();
                true
            }
            Err(e) => {
                tracing::warn!(error = ?e, "SetClipboardData failed");
                false
            }
        }
    }
}

/// The system clipboard as a [`Clipboard`] capability.
#[derive(Copy, Clone, Debug, Default)]
pub struct WinClipboard;

impl Clipboard for WinClipboard {
    fn try_get_text(&self) -> Option<String> {
        get_unicode_text()
    }

    fn try_set_text(&self, text: &str) -> bool {
        set_unicode_text(text)
    }
}
