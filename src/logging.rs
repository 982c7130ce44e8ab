// File: ./src/logging.rs
// File logger setup. The terminal belongs to the TUI, so logs go to disk.
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Starts appending log records to `utsav.log` in the data directory.
///
/// Returns the log path. Calling this twice fails because the global logger
/// can only be set once.
pub fn init(ctx: &dyn AppContext, level: LevelFilter) -> Result<PathBuf> {
    let path = ctx
        .get_log_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine log file location"))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).context("Logger already initialized")?;
    log::info!("utsav v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(path)
}

/// Records panics to `utsav_panic.log` before handing over to `then`.
pub fn install_panic_hook<F>(ctx: &dyn AppContext, then: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let panic_path = ctx
        .get_data_dir()
        .map(|d| d.join("utsav_panic.log"))
        .unwrap_or_else(|_| PathBuf::from("utsav_panic.log"));

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        then();
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&panic_path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        log::error!("panic: {}", info);
        default_hook(info);
    }));
}
