use cfg_if::cfg_if;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::LogConfig;

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.default_filter))
}

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        /// Route `tracing` into the browser console. Safe to call more than once.
        pub fn init(config: &LogConfig) {
            let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());

            let _ = tracing_subscriber::registry()
                .with(env_filter(config))
                .with(wasm_layer)
                .try_init();

            #[cfg(feature = "console_error_panic_hook")]
            console_error_panic_hook::set_once();
        }
    } else {
        use std::io;
        use std::path::Path;
        use once_cell::sync::OnceCell;
        use tracing_appender::non_blocking::WorkerGuard;
        use tracing_subscriber::fmt;

        static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

        /// Compact stderr logging plus an optional daily-rolling file.
        /// Safe to call more than once; only the first call installs anything.
        pub fn init(config: &LogConfig) {
            let console_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .compact();

            let file_layer = config.file.as_deref().map(|path| {
                let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
                let name = path.file_name().map(|n| n.to_os_string()).unwrap_or_else(|| "moonview.log".into());
                let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
                let _ = FILE_GUARD.set(guard);
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .compact()
            });

            let installed = tracing_subscriber::registry()
                .with(env_filter(config))
                .with(console_layer)
                .with(file_layer)
                .try_init()
                .is_ok();

            if installed {
                std::panic::set_hook(Box::new(|info| {
                    let bt = std::backtrace::Backtrace::force_capture();
                    tracing::error!("{info}\nBacktrace:\n{bt}");
                }));
            }
        }
    }
}
