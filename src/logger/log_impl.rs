// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use crate::Append;
use crate::Context;
use crate::Error;
use crate::Level;
use crate::Record;
use crate::append::Console;
use crate::logger::LoggerBuilder;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A named channel that dispatches log records to a fixed sequence of handlers.
///
/// Handlers are called in the order they were added. A handler that fails does not stop the
/// remaining handlers: its error goes to the logger's [`Trap`] and dispatch continues. Log
/// methods never fail and never panic.
///
/// # Examples
///
/// ```
/// use logforth_channel::Context;
/// use logforth_channel::Level;
/// use logforth_channel::Logger;
/// use logforth_channel::append::Console;
///
/// let logger = Logger::builder("app")
///     .append(Console::stdout().level(Level::Info))
///     .build();
///
/// logger.info("User {id} logged in", [("id", 42)]);
/// logger.debug("not printed", ());
/// logger.log(Level::Warning, "disk at {pct}%", Context::new().with("pct", 91));
/// ```
#[derive(Debug)]
pub struct Logger {
    name: String,
    appends: Vec<Box<dyn Append>>,
    trap: Box<dyn Trap>,
}

impl Logger {
    /// Create a logger with the given handlers and the [`DefaultTrap`].
    pub fn new(name: impl Into<String>, appends: Vec<Box<dyn Append>>) -> Self {
        Self::from_parts(name.into(), appends, Box::new(DefaultTrap::default()))
    }

    pub(super) fn from_parts(
        name: String,
        appends: Vec<Box<dyn Append>>,
        trap: Box<dyn Trap>,
    ) -> Self {
        Self {
            name,
            appends,
            trap,
        }
    }

    /// Create a [`LoggerBuilder`] for a logger with the given name.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Create a logger named `null` without handlers; it discards everything.
    pub fn null() -> Self {
        Self::new("null", vec![])
    }

    /// Create a logger named `bootstrap` that writes every level to stdout.
    ///
    /// This is the logger handed out before the application context is ready.
    pub fn bootstrap() -> Self {
        Self::new("bootstrap", vec![Box::new(Console::stdout())])
    }

    /// The name of the channel.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any handler would write records of the given level.
    pub fn enabled(&self, level: Level) -> bool {
        self.appends.iter().any(|append| append.enabled(level))
    }

    /// Log a message at the given level.
    pub fn log(&self, level: Level, message: impl fmt::Display, context: impl Into<Context>) {
        if self.appends.is_empty() {
            return;
        }

        let message = message.to_string();
        let context = context.into();
        let record = Record::new(&self.name, level, &message, &context);
        self.dispatch(&record);
    }

    /// Dispatch a prepared record to every handler.
    pub fn dispatch(&self, record: &Record) {
        for append in &self.appends {
            if let Err(err) = append.append(record) {
                self.handle_error(
                    Error::append_failed(&self.name, record.level()).with_source(err),
                );
            }
        }
    }

    /// Flush every handler.
    pub fn flush(&self) {
        for append in &self.appends {
            if let Err(err) = append.flush() {
                self.handle_error(
                    Error::new("failed to flush appender")
                        .with_context("channel", &self.name)
                        .with_source(err),
                );
            }
        }
    }

    fn handle_error(&self, err: Error) {
        self.trap.trap(&err);
    }

    /// Log a message at the debug level.
    pub fn debug(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Debug, message, context);
    }

    /// Log a message at the info level.
    pub fn info(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Info, message, context);
    }

    /// Log a message at the notice level.
    pub fn notice(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Notice, message, context);
    }

    /// Log a message at the warning level.
    pub fn warning(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Warning, message, context);
    }

    /// Log a message at the error level.
    pub fn error(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Error, message, context);
    }

    /// Log a message at the critical level.
    pub fn critical(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Critical, message, context);
    }

    /// Log a message at the alert level.
    pub fn alert(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Alert, message, context);
    }

    /// Log a message at the emergency level.
    pub fn emergency(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Emergency, message, context);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default, Clone)]
    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Append for Collect {
        fn append(&self, record: &Record) -> Result<(), Error> {
            let line = format!("{}:{}:{}", record.channel(), record.level(), record.message());
            self.0.lock().unwrap().push(line);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Append for Failing {
        fn append(&self, _: &Record) -> Result<(), Error> {
            Err(Error::new("handler is closed"))
        }
    }

    #[derive(Debug, Default, Clone)]
    struct Remember(Arc<Mutex<Vec<String>>>);

    impl Trap for Remember {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    #[test]
    fn dispatches_to_every_handler_in_order() {
        let first = Collect::default();
        let second = Collect::default();
        let logger = Logger::builder("app")
            .append(first.clone())
            .append(second.clone())
            .build();

        logger.notice("hello", ());
        logger.emergency("bye", ());

        let expected = vec!["app:NOTICE:hello", "app:EMERGENCY:bye"];
        assert_eq!(*first.0.lock().unwrap(), expected);
        assert_eq!(*second.0.lock().unwrap(), expected);
    }

    #[test]
    fn failing_handler_does_not_stop_dispatch() {
        let collect = Collect::default();
        let trap = Remember::default();
        let logger = Logger::builder("audit")
            .append(Failing)
            .append(collect.clone())
            .trap(trap.clone())
            .build();

        logger.error("still delivered", ());

        assert_eq!(*collect.0.lock().unwrap(), vec!["audit:ERROR:still delivered"]);
        let trapped = trap.0.lock().unwrap();
        assert_eq!(trapped.len(), 1);
        assert!(trapped[0].contains("channel: audit"), "{}", trapped[0]);
        assert!(trapped[0].contains("handler is closed"), "{}", trapped[0]);
    }

    #[test]
    fn null_logger_accepts_everything_silently() {
        let logger = Logger::null();
        assert_eq!(logger.name(), "null");
        for level in Level::ALL {
            assert!(!logger.enabled(level));
            logger.log(level, "dropped", [("k", "v")]);
        }
        logger.flush();
    }

    #[test]
    fn message_accepts_any_display() {
        let collect = Collect::default();
        let logger = Logger::new("app", vec![Box::new(collect.clone())]);

        logger.info(42, ());
        logger.info(format_args!("{}-{}", "a", 1), ());

        assert_eq!(*collect.0.lock().unwrap(), vec!["app:INFO:42", "app:INFO:a-1"]);
    }
}
