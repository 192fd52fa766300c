//! Message window and event loop.
//!
//! The application has no visible UI: a message-only window exists solely
//! to receive `WM_HOTKEY` and dispatch it into the correction flow.

mod clipboard;
mod hotkeys;
mod input;
mod layout;

pub use clipboard::WinClipboard;
pub use input::WinKeystrokes;
pub use layout::WinLayoutSwitcher;

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, HWND_MESSAGE, MSG,
    PostQuitMessage, RegisterClassExW, TranslateMessage, WINDOW_EX_STYLE, WINDOW_STYLE, WM_DESTROY,
    WM_HOTKEY, WNDCLASSEXW,
};
use windows::core::{PCWSTR, Result, w};

use crate::config;
use crate::domain::flow::CorrectionFlow;
use crate::helpers;
use self::hotkeys::HK_CORRECTION_ID;

thread_local! {
    static FLOW: CorrectionFlow<WinClipboard, WinKeystrokes, WinLayoutSwitcher> =
        CorrectionFlow::new(WinClipboard, WinKeystrokes, WinLayoutSwitcher);
}

fn register_class(
    class_name: PCWSTR,
    hinstance: windows::Win32::Foundation::HINSTANCE,
) -> Result<()> {
    let wc = WNDCLASSEXW {
        cbSize: size_of::<WNDCLASSEXW>() as u32,
        lpfnWndProc: Some(wndproc),
        lpszClassName: class_name,
        hInstance: hinstance,
        ..Default::default()
    };

    unsafe {
        if RegisterClassExW(&wc) == 0 {
            return Err(helpers::last_error());
        }
    }
    Ok(())
}

fn create_message_window(
    class_name: PCWSTR,
    hinstance: windows::Win32::Foundation::HINSTANCE,
) -> Result<HWND> {
    unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            class_name,
            w!("ScriptSwap"),
            WINDOW_STYLE(0),
            0,
            0,
            0,
            0,
            Some(HWND_MESSAGE),
            None,
            Some(hinstance),
            None,
        )
    }
}

fn message_loop() -> Result<()> {
    unsafe {
        let mut msg = MSG::default();
        loop {
            let r = GetMessageW(&mut msg, None, 0, 0);
            if r.0 == -1 {
                return Err(helpers::last_error());
            }
            if r.0 == 0 {
                break;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
    Ok(())
}

/// Register the hotkey, then pump messages until quit.
pub fn run() -> Result<()> {
    let binding = config::load();

    let class_name = w!("ScriptSwapMessageWindow");
    let hinstance = unsafe { GetModuleHandleW(PCWSTR::null())? }.into();

    register_class(class_name, hinstance)?;
    let hwnd = create_message_window(class_name, hinstance)?;

    // Registration failure is the one collaborator error that is fatal to
    // the feature; it propagates to main.
    hotkeys::register(hwnd, &binding)?;
    tracing::info!(hotkey = %binding.display(), "correction hotkey registered");

    message_loop()
}

fn on_hotkey(wparam: WPARAM) -> LRESULT {
    let id = (wparam.0 & 0xffff) as i32;
    if id != HK_CORRECTION_ID {
        return LRESULT(0);
    }

    // Never unwind across the FFI boundary: a panicking flow is logged and
    // dropped so a malformed activation cannot take down the process.
    let run = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        FLOW.with(|flow| flow.on_hotkey())
    }));

    if run.is_err() {
        tracing::error!("correction flow panicked, activation discarded");
    }

    LRESULT(0)
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_HOTKEY => on_hotkey(wparam),
        WM_DESTROY => {
            hotkeys::unregister(hwnd);
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
