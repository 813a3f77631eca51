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

//! The application-level logging facade.
//!
//! A [`Log`] starts out uninitialized. [`Log::install`] registers the configured channels and
//! makes it ready. Resolution never fails:
//!
//! * before installation, every lookup yields a fresh [bootstrap](Logger::bootstrap) logger
//!   writing to stdout, so early messages are not lost;
//! * after installation, a known channel yields its registered logger;
//! * an unknown channel yields a [null](Logger::null) logger that discards everything.

use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

use crate::ChannelRegistry;
use crate::Context;
use crate::Error;
use crate::Level;
use crate::LogConfig;
use crate::Logger;

/// Returned by [`Log::context`] when the facade has not been installed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextNotReady;

impl fmt::Display for ContextNotReady {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("log context is not ready")
    }
}

impl std::error::Error for ContextNotReady {}

/// The state published by [`Log::install`]: the default channel name and the channel registry.
#[derive(Debug)]
pub struct AppContext {
    default: String,
    registry: ChannelRegistry,
}

impl AppContext {
    /// The name of the channel used when no channel is given.
    pub fn default_channel(&self) -> &str {
        &self.default
    }

    /// The registered channels.
    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }
}

/// The logging facade of an application.
///
/// # Examples
///
/// ```
/// use logforth_channel::Log;
/// use logforth_channel::LogConfig;
/// use logforth_channel::append::Console;
///
/// let log = Log::new();
/// log.info("printed by the bootstrap logger", ());
///
/// log.install(LogConfig::new("app").channel("app", |c| c.append(Console::stdout())))
///     .unwrap();
/// log.info("User {id} logged in", [("id", 42)]);
/// log.channel("unknown").error("discarded", ());
/// ```
#[derive(Debug, Default)]
pub struct Log {
    context: OnceLock<AppContext>,
}

impl Log {
    /// Create an uninitialized facade.
    pub const fn new() -> Self {
        Self {
            context: OnceLock::new(),
        }
    }

    /// Register the configured channels and publish the application context.
    ///
    /// # Errors
    ///
    /// Return an error if the facade has already been installed; the first installation stays
    /// in effect.
    pub fn install(&self, config: LogConfig) -> Result<(), Error> {
        if self.is_ready() {
            return Err(Error::already_installed());
        }

        let (default, loggers) = config.into_parts();
        let registry = ChannelRegistry::new();
        for logger in loggers {
            let name = logger.name().to_owned();
            registry.add(name, logger);
        }

        let context = AppContext { default, registry };
        self.context
            .set(context)
            .map_err(|_| Error::already_installed())
    }

    /// Return the application context, or [`ContextNotReady`] before [`Log::install`].
    pub fn context(&self) -> Result<&AppContext, ContextNotReady> {
        self.context.get().ok_or(ContextNotReady)
    }

    /// Whether [`Log::install`] has completed.
    pub fn is_ready(&self) -> bool {
        self.context().is_ok()
    }

    /// Register a channel after installation, replacing any channel with the same name.
    pub fn add_channel(
        &self,
        name: impl Into<String>,
        logger: impl Into<Arc<Logger>>,
    ) -> Result<(), ContextNotReady> {
        self.context()?.registry().add(name, logger);
        Ok(())
    }

    /// Resolve the logger of `channel`, or of the default channel if `channel` is `None`.
    pub fn resolve(&self, channel: Option<&str>) -> Arc<Logger> {
        let context = match self.context() {
            Ok(context) => context,
            Err(ContextNotReady) => return Arc::new(Logger::bootstrap()),
        };

        let name = channel.unwrap_or(context.default_channel());
        context
            .registry()
            .get(name)
            .unwrap_or_else(|| Arc::new(Logger::null()))
    }

    /// The logger of the given channel.
    pub fn channel(&self, name: &str) -> Arc<Logger> {
        self.resolve(Some(name))
    }

    /// The logger of the default channel.
    pub fn logger(&self) -> Arc<Logger> {
        self.resolve(None)
    }

    /// Flush every registered channel.
    pub fn flush(&self) {
        if let Ok(context) = self.context() {
            context.registry().flush();
        }
    }

    /// Log a message to the default channel.
    pub fn log(&self, level: Level, message: impl fmt::Display, context: impl Into<Context>) {
        self.logger().log(level, message, context);
    }

    /// Log a debug message to the default channel.
    pub fn debug(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Debug, message, context);
    }

    /// Log an info message to the default channel.
    pub fn info(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Info, message, context);
    }

    /// Log a notice message to the default channel.
    pub fn notice(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Notice, message, context);
    }

    /// Log a warning message to the default channel.
    pub fn warning(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Warning, message, context);
    }

    /// Log an error message to the default channel.
    pub fn error(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Error, message, context);
    }

    /// Log a critical message to the default channel.
    pub fn critical(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Critical, message, context);
    }

    /// Log an alert message to the default channel.
    pub fn alert(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Alert, message, context);
    }

    /// Log an emergency message to the default channel.
    pub fn emergency(&self, message: impl fmt::Display, context: impl Into<Context>) {
        self.log(Level::Emergency, message, context);
    }
}

static GLOBAL: Log = Log::new();

/// The process-wide facade.
pub fn global() -> &'static Log {
    &GLOBAL
}

/// Install the process-wide facade. See [`Log::install`].
///
/// # Errors
///
/// Return an error if the process-wide facade has already been installed.
pub fn install(config: LogConfig) -> Result<(), Error> {
    GLOBAL.install(config)
}

/// The logger of the given channel of the process-wide facade.
pub fn channel(name: &str) -> Arc<Logger> {
    GLOBAL.channel(name)
}

/// The logger of the default channel of the process-wide facade.
pub fn logger() -> Arc<Logger> {
    GLOBAL.logger()
}

/// Log a message to the default channel of the process-wide facade.
pub fn log(level: Level, message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.log(level, message, context);
}

/// Log a debug message to the default channel of the process-wide facade.
pub fn debug(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.debug(message, context);
}

/// Log an info message to the default channel of the process-wide facade.
pub fn info(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.info(message, context);
}

/// Log a notice message to the default channel of the process-wide facade.
pub fn notice(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.notice(message, context);
}

/// Log a warning message to the default channel of the process-wide facade.
pub fn warning(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.warning(message, context);
}

/// Log an error message to the default channel of the process-wide facade.
pub fn error(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.error(message, context);
}

/// Log a critical message to the default channel of the process-wide facade.
pub fn critical(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.critical(message, context);
}

/// Log an alert message to the default channel of the process-wide facade.
pub fn alert(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.alert(message, context);
}

/// Log an emergency message to the default channel of the process-wide facade.
pub fn emergency(message: impl fmt::Display, context: impl Into<Context>) {
    GLOBAL.emergency(message, context);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_bootstrap_logger_before_install() {
        let log = Log::new();
        assert_eq!(log.context().unwrap_err(), ContextNotReady);
        assert!(!log.is_ready());

        let logger = log.resolve(None);
        assert_eq!(logger.name(), "bootstrap");
        assert!(Level::ALL.iter().all(|level| logger.enabled(*level)));
        assert_eq!(log.channel("anything").name(), "bootstrap");
    }

    #[test]
    fn resolves_registered_and_null_loggers_after_install() {
        let log = Log::new();
        log.install(LogConfig::new("app").channel("app", |c| c).channel("db", |c| c))
            .unwrap();

        assert_eq!(log.logger().name(), "app");
        assert_eq!(log.channel("db").name(), "db");
        assert!(Arc::ptr_eq(&log.channel("db"), &log.channel("db")));
        assert_eq!(log.channel("nope").name(), "null");
    }

    #[test]
    fn second_install_is_rejected() {
        let log = Log::new();
        log.install(LogConfig::new("first").channel("first", |c| c))
            .unwrap();
        let err = log.install(LogConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "log facade is already installed");
        assert_eq!(log.context().unwrap().default_channel(), "first");
    }

    #[test]
    fn late_channels_need_a_ready_context() {
        let log = Log::new();
        assert_eq!(
            log.add_channel("late", Logger::null()),
            Err(ContextNotReady)
        );

        log.install(LogConfig::default()).unwrap();
        log.add_channel("late", Logger::builder("late").build())
            .unwrap();
        assert_eq!(log.channel("late").name(), "late");
    }

    #[test]
    fn default_channel_may_be_missing() {
        let log = Log::new();
        log.install(LogConfig::new("missing")).unwrap();
        assert_eq!(log.logger().name(), "null");
        log.error("dropped", ());
    }
}
