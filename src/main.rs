#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(windows)]
fn main() -> windows::core::Result<()> {
    scriptswap::util::tracing::init_tracing();

    let Some(_guard) = scriptswap::helpers::single_instance_guard()? else {
        return Ok(());
    };

    scriptswap::platform::win::run()
}

#[cfg(not(windows))]
fn main() {
    eprintln!("scriptswap drives the Win32 clipboard and hotkey APIs and only runs on Windows");
    std::process::exit(1);
}
