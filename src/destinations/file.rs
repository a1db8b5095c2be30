//! File destination implementation

use crate::core::{
    Destination, DestinationCore, FanlogError, Filter, Level, LogEntry, Result, SerialQueue,
};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileDestination {
    core: DestinationCore,
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl FileDestination {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            core: DestinationCore::new("file"),
            path,
            writer: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.core = std::mem::replace(&mut self.core, DestinationCore::unbound()).min_level(level);
        self
    }

    /// Deliver synchronously: the log call blocks until the line is written.
    #[must_use]
    pub fn synchronous(mut self) -> Self {
        self.core = std::mem::replace(&mut self.core, DestinationCore::unbound()).synchronous();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.core = std::mem::replace(&mut self.core, DestinationCore::unbound()).filter(filter);
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn format_line(entry: &LogEntry) -> String {
        let mut line = format!(
            "[{}] [{:7}] {}:{} {} - {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            entry.level.to_str(),
            entry.file_name(),
            entry.line,
            entry.function,
            entry.message
        );

        if !entry.thread.is_empty() {
            line = format!("{} [{}]", line, entry.thread);
        }
        if let Some(ref context) = entry.context {
            line.push_str(" | ");
            line.push_str(&context.to_string());
        }

        line.push('\n');
        line
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(ref mut writer) = *self.writer.lock() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Destination for FileDestination {
    fn min_level(&self) -> Level {
        self.core.level_threshold()
    }

    fn asynchronous(&self) -> bool {
        self.core.is_asynchronous()
    }

    fn queue(&self) -> Option<&SerialQueue> {
        self.core.queue()
    }

    fn filters(&self) -> &[Filter] {
        self.core.filters()
    }

    fn send(&self, entry: &LogEntry) -> Result<()> {
        let mut guard = self.writer.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| FanlogError::writer("File writer not initialized"))?;

        writer.write_all(Self::format_line(entry).as_bytes())?;
        // Sends are already serialized by the queue; flushing per line keeps
        // the file current for tail readers at this call volume.
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileDestination {
    fn drop(&mut self) {
        // Ensure all buffered data reaches disk.
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_send_writes_line() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("out.log");

        let dest = FileDestination::new(&log_file).expect("Failed to create destination");
        let entry = LogEntry::new(Level::Warning, "disk almost full".to_string())
            .with_location("src/monitor.rs", "check()", 13);

        dest.send(&entry).expect("send failed");

        let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
        assert!(content.contains("WARNING"));
        assert!(content.contains("monitor.rs:13"));
        assert!(content.contains("disk almost full"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_context_appended() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("ctx.log");

        let dest = FileDestination::new(&log_file).expect("Failed to create destination");
        let entry = LogEntry::new(Level::Info, "user login".to_string())
            .with_context(serde_json::json!({"user_id": 12345}));

        dest.send(&entry).expect("send failed");

        let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
        assert!(content.contains("user_id"));
        assert!(content.contains("12345"));
    }

    #[test]
    fn test_invalid_path_is_an_error() {
        let result = FileDestination::new("/nonexistent-dir-fanlog/out.log");
        assert!(result.is_err());
    }
}
