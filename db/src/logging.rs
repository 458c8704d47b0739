//! Module-scoped logging on top of `tracing`.
//!
//! A [`Logger`] carries a dotted module name (`parent.child`) that is attached
//! to every event it emits as the `module` field. Installing a subscriber is
//! left to binaries.

use std::fmt::Display;

use tracing::{error, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Info,
    Warn,
    Error,
    /// Reported at error level with `fatal = true`.
    Fatal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logger {
    module: String,
}

impl Logger {
    pub fn new(module: impl Into<String>) -> Self {
        Self { module: module.into() }
    }

    /// A logger for a sub-module, named `self.child`.
    pub fn child(&self, name: &str) -> Logger {
        if self.module.is_empty() {
            Logger::new(name)
        } else {
            Logger::new(format!("{}.{}", self.module, name))
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn log(&self, level: Level, message: impl Display) {
        let module = self.module.as_str();
        match level {
            Level::Trace => trace!(module, "{message}"),
            Level::Info => info!(module, "{message}"),
            Level::Warn => warn!(module, "{message}"),
            Level::Error => error!(module, "{message}"),
            Level::Fatal => error!(module, fatal = true, "{message}"),
        }
    }

    pub fn trace(&self, message: impl Display) {
        self.log(Level::Trace, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    pub fn fatal(&self, message: impl Display) {
        self.log(Level::Fatal, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "db", "db")]
    #[case("sqlitepp", "statement", "sqlitepp.statement")]
    #[case("a.b", "c", "a.b.c")]
    fn test_child_names(#[case] parent: &str, #[case] child: &str, #[case] expected: &str) {
        assert_eq!(Logger::new(parent).child(child).module(), expected);
    }

    #[rstest]
    fn test_logging_without_subscriber_is_silent() {
        let logger = Logger::new("sqlitepp").child("tests");
        logger.trace("trace");
        logger.info(42);
        logger.warn("warn");
        logger.error("error");
        logger.fatal("fatal");
    }
}
