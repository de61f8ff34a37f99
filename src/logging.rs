use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::ServerConfig;

/// Writes log records to a single file. Stdout carries protocol traffic,
/// so logs never go there.
struct FileLogger {
    file: Mutex<std::fs::File>,
    level: LevelFilter,
}

impl FileLogger {
    fn new(file_path: &Path, level: LevelFilter) -> io::Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(FileLogger {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(
                    file,
                    "[{}] [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                );
                let _ = file.flush();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Get the platform-specific log file path
fn get_log_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir()
        .ok_or("Could not determine local data directory")?;

    Ok(data_dir.join("ColorMcp").join("color_mcp.log"))
}

/// Initialize the logger to write to a single file, overwriting previous logs
pub fn init_logger(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_file_path = match &config.log_file {
        Some(path) => path.clone(),
        None => get_log_file_path()?,
    };
    let logger = FileLogger::new(&log_file_path, config.log_level)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(config.log_level))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_file_logger_writes_enabled_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("test.log");
        let logger = FileLogger::new(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("converted {}", "#FF0000"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("hidden detail"))
                .level(Level::Debug)
                .build(),
        );
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO] converted #FF0000"));
        assert!(!contents.contains("hidden detail"));
    }

    #[test]
    fn test_file_logger_truncates_previous_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        fs::write(&path, "old contents\n").unwrap();

        let logger = FileLogger::new(&path, LevelFilter::Trace).unwrap();
        logger.flush();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
