//! Logging setup.

use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

/// Keeps the log file writer alive; drop it last to flush.
pub type LogGuard = Option<WorkerGuard>;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Setup logging with the given level.
///
/// `RUST_LOG` overrides `level`. With `file`, events are also appended to
/// that file as plain text.
pub fn setup_logging(level: &str, json: bool, file: Option<&str>) -> io::Result<LogGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if json {
        layers.push(fmt::layer().json().boxed());
    } else {
        layers.push(fmt::layer().pretty().boxed());
    }

    let guard = match file {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(file)?);
            layers.push(fmt::layer().with_ansi(false).with_writer(writer).boxed());
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(guard)
}

fn open_log_file(path: &str) -> io::Result<std::fs::File> {
    let path = Path::new(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
