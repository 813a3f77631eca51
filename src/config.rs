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

use crate::Logger;
use crate::append::Null;
use crate::logger::LoggerBuilder;

/// The channels to register at startup and the name of the default channel.
///
/// # Examples
///
/// ```
/// use logforth_channel::Level;
/// use logforth_channel::LogConfig;
/// use logforth_channel::append;
///
/// let config = LogConfig::new("app")
///     .channel("app", |c| c.append(append::Console::stdout().level(Level::Info)))
///     .channel("audit", |c| {
///         c.append(append::Console::stdout())
///             .append(append::Console::new(std::io::stderr()).level(Level::Error))
///     })
///     .channel("metrics", |c| c);
///
/// assert_eq!(config.default_channel(), "app");
/// assert_eq!(config.channel_names(), vec!["app", "audit", "metrics"]);
/// ```
#[must_use = "pass the config to `Log::install`"]
#[derive(Debug)]
pub struct LogConfig {
    default: String,
    channels: Vec<LoggerBuilder>,
}

impl Default for LogConfig {
    /// A `default` channel that discards everything.
    fn default() -> Self {
        LogConfig::new("default").channel("default", |c| c.append(Null::default()))
    }
}

impl LogConfig {
    /// Create a config without channels whose default channel is `default`.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            channels: vec![],
        }
    }

    /// Add a channel. The closure configures the handlers of the channel's logger.
    ///
    /// Channels are registered in the order they are added; a later channel with the same name
    /// replaces an earlier one.
    pub fn channel<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(LoggerBuilder) -> LoggerBuilder,
    {
        self.channels.push(f(Logger::builder(name)));
        self
    }

    /// The name of the channel used when no channel is given.
    pub fn default_channel(&self) -> &str {
        &self.default
    }

    /// The names of the configured channels, in configuration order.
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(LoggerBuilder::name).collect()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Logger>) {
        let loggers = self.channels.into_iter().map(LoggerBuilder::build).collect();
        (self.default, loggers)
    }
}
