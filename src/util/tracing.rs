#[cfg(feature = "debug-tracing")]
mod enabled {
    use std::sync::Mutex;

    use tracing_appender::non_blocking::WorkerGuard;

    static TRACING_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

    pub fn init_tracing() {
        let file_appender = tracing_appender::rolling::hourly("./logs", "output.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let subscriber = tracing_subscriber::fmt()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_level(true)
            .with_target(true)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            *TRACING_GUARD.lock().unwrap() = Some(guard);
        }
    }
}

#[cfg(feature = "debug-tracing")]
pub use enabled::init_tracing;

#[cfg(not(feature = "debug-tracing"))]
pub fn init_tracing() {}
