//! Chain of Responsibility: each logger handles entries at its own level
//! and passes everything else to the next link. An entry nobody handles
//! falls off the end of the chain as `None`.

use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Error => "Error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub level: LogLevel,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }
}

pub trait Logger {
    fn set_next(&mut self, next: Box<dyn Logger>);

    fn next(&self) -> Option<&dyn Logger>;

    /// The single level this link is responsible for.
    fn level(&self) -> LogLevel;

    /// Handles the entry here if the level matches, otherwise forwards it.
    fn log(&self, entry: &LogEntry) -> Option<String> {
        if entry.level == self.level() {
            return Some(format!("{}: {}", self.level(), entry.message));
        }
        debug!(handler = %self.level(), entry = %entry.level, "forwarding");
        self.next()?.log(entry)
    }
}

#[derive(Default)]
pub struct InfoLogger {
    next: Option<Box<dyn Logger>>,
}

impl InfoLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Logger for InfoLogger {
    fn set_next(&mut self, next: Box<dyn Logger>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn Logger> {
        self.next.as_deref()
    }

    fn level(&self) -> LogLevel {
        LogLevel::Info
    }
}

#[derive(Default)]
pub struct DebugLogger {
    next: Option<Box<dyn Logger>>,
}

impl DebugLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Logger for DebugLogger {
    fn set_next(&mut self, next: Box<dyn Logger>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn Logger> {
        self.next.as_deref()
    }

    fn level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

#[derive(Default)]
pub struct ErrorLogger {
    next: Option<Box<dyn Logger>>,
}

impl ErrorLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Logger for ErrorLogger {
    fn set_next(&mut self, next: Box<dyn Logger>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn Logger> {
        self.next.as_deref()
    }

    fn level(&self) -> LogLevel {
        LogLevel::Error
    }
}

/// Info → Debug → Error.
pub struct LoggerChain {
    first: Box<dyn Logger>,
}

impl LoggerChain {
    pub fn new() -> Self {
        let mut debug_logger = DebugLogger::new();
        debug_logger.set_next(Box::new(ErrorLogger::new()));
        let mut info_logger = InfoLogger::new();
        info_logger.set_next(Box::new(debug_logger));
        Self {
            first: Box::new(info_logger),
        }
    }

    pub fn log(&self, entry: &LogEntry) -> Option<String> {
        self.first.log(entry)
    }
}

impl Default for LoggerChain {
    fn default() -> Self {
        Self::new()
    }
}
