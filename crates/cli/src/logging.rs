use std::backtrace::Backtrace;

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).compact().init();
    set_panic_hook();
}

/// Panics during a seed run should land in the log stream, not on a bare
/// stderr the operator already scrolled past.
fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown panic");

        let backtrace = Backtrace::capture();
        match info.location() {
            Some(location) => {
                tracing::error!(panic = %message, %location, backtrace = %backtrace, "panic")
            }
            None => tracing::error!(panic = %message, backtrace = %backtrace, "panic"),
        }
    }));
}
