//! Small Win32 helpers shared by the platform layer.

use windows::Win32::Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, HANDLE};
use windows::Win32::System::Threading::CreateMutexW;
use windows::core::{Error, HRESULT, PCWSTR, Result, w};

/// Retrieve the last OS error as a `windows::core::Error`.
pub fn last_error() -> Error {
    Error::from_hresult(HRESULT::from_win32(unsafe { GetLastError() }.0))
}

/// RAII guard ensuring a single running instance.
///
/// Two instances would race for the same hotkey registration and fight
/// over the clipboard mid-flow, so the second one exits immediately.
pub struct SingleInstanceGuard(pub HANDLE);

impl Drop for SingleInstanceGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Acquire the single instance mutex, or `None` if another instance
/// already owns it.
pub fn single_instance_guard() -> Result<Option<SingleInstanceGuard>> {
    unsafe {
        let name = w!("Global\\ScriptSwap_SingleInstance");
        let handle = CreateMutexW(None, false, PCWSTR(name.as_ptr()))?;

        if GetLastError() == ERROR_ALREADY_EXISTS {
            let _ = CloseHandle(handle);
            return Ok(None);
        }

        Ok(Some(SingleInstanceGuard(handle)))
    }
}
