//! Console destination implementation

use crate::core::{Destination, DestinationCore, Filter, Level, LogEntry, Result, SerialQueue};
use colored::{Color, Colorize};

pub struct ConsoleDestination {
    core: DestinationCore,
    use_colors: bool,
}

impl ConsoleDestination {
    pub fn new() -> Self {
        Self {
            core: DestinationCore::new("console"),
            use_colors: true,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.core = self.core.min_level(level);
        self
    }

    /// Deliver synchronously: the log call blocks until the line is written.
    #[must_use]
    pub fn synchronous(mut self) -> Self {
        self.core = self.core.synchronous();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.core = self.core.filter(filter);
        self
    }

    fn level_color(level: Level) -> Color {
        match level {
            Level::Verbose => Color::BrightBlack,
            Level::Debug => Color::Blue,
            Level::Info => Color::Green,
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
        }
    }

    fn format_text(&self, entry: &LogEntry) -> String {
        let level_str = if self.use_colors {
            format!("{:7}", entry.level.to_str())
                .color(Self::level_color(entry.level))
                .to_string()
        } else {
            format!("{:7}", entry.level.to_str())
        };

        let mut line = format!(
            "{} {} {}:{} {} - {}",
            entry.timestamp.format("%H:%M:%S%.3f"),
            level_str,
            entry.file_name(),
            entry.line,
            entry.function,
            entry.message
        );

        if !entry.thread.is_empty() {
            line = format!("{} [{}]", line, entry.thread);
        }
        if let Some(ref context) = entry.context {
            line.push_str(&format!(" {}", context));
        }

        line
    }
}

impl Default for ConsoleDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for ConsoleDestination {
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
        let output = self.format_text(entry);

        // Errors go to stderr, everything else to stdout.
        match entry.level {
            Level::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
