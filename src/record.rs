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

//! Log record and severity levels.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;

use crate::Error;
use crate::kv::Context;

/// The severity of a log record, ordered from the least to the most severe.
///
/// ```
/// use logforth_channel::Level;
///
/// assert!(Level::Debug < Level::Info);
/// assert!(Level::Alert < Level::Emergency);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed debug information.
    Debug,
    /// Interesting events.
    Info,
    /// Normal but significant events.
    Notice,
    /// Exceptional occurrences that are not errors.
    Warning,
    /// Runtime errors that do not require immediate action.
    Error,
    /// Critical conditions.
    Critical,
    /// Action must be taken immediately.
    Alert,
    /// The system is unusable.
    Emergency,
}

impl Level {
    /// All levels, from the least to the most severe.
    pub const ALL: [Level; 8] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Alert,
        Level::Emergency,
    ];

    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }

    /// Return the numeric code of the `Level`, as used by RFC 5424 derived logging libraries.
    pub fn value(&self) -> u16 {
        match self {
            Level::Debug => 100,
            Level::Info => 200,
            Level::Notice => 250,
            Level::Warning => 300,
            Level::Error => 400,
            Level::Critical => 500,
            Level::Alert => 550,
            Level::Emergency => 600,
        }
    }

    /// Find the `Level` with the given numeric code.
    ///
    /// ```
    /// use logforth_channel::Level;
    ///
    /// assert_eq!(Level::from_value(300), Some(Level::Warning));
    /// assert_eq!(Level::from_value(301), None);
    /// ```
    pub fn from_value(value: u16) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.value() == value)
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        let s = s.trim();

        for (name, level) in [
            ("debug", Level::Debug),
            ("info", Level::Info),
            ("notice", Level::Notice),
            ("warning", Level::Warning),
            ("warn", Level::Warning),
            ("error", Level::Error),
            ("err", Level::Error),
            ("critical", Level::Critical),
            ("crit", Level::Critical),
            ("alert", Level::Alert),
            ("emergency", Level::Emergency),
            ("emerg", Level::Emergency),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        if let Some(level) = s.parse::<u16>().ok().and_then(Level::from_value) {
            return Ok(level);
        }

        Err(Error::malformed_level(s))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

/// The minimum severity a handler accepts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum LevelFilter {
    /// Disables all levels.
    Off,
    /// Enables if the target level is more severe than or equal to the filter level.
    MoreSevereEqual(Level),
    /// Enables all levels.
    All,
}

impl LevelFilter {
    /// Checks the given level if satisfies the filter condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use logforth_channel::Level;
    /// use logforth_channel::LevelFilter;
    ///
    /// let level_filter = LevelFilter::MoreSevereEqual(Level::Warning);
    ///
    /// assert_eq!(level_filter.test(Level::Info), false);
    /// assert_eq!(level_filter.test(Level::Warning), true);
    /// assert_eq!(level_filter.test(Level::Emergency), true);
    /// ```
    pub fn test(&self, level: Level) -> bool {
        match self {
            LevelFilter::Off => false,
            LevelFilter::MoreSevereEqual(l) => level >= *l,
            LevelFilter::All => true,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter::MoreSevereEqual(level)
    }
}

/// The payload of a log call.
///
/// A `Record` lives only for the duration of one log call: the [`Logger`](crate::Logger) builds
/// it, every handler sees it once, and then it is dropped.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    channel: &'a str,
    level: Level,
    message: &'a str,
    context: &'a Context,
    time: Timestamp,
}

impl<'a> Record<'a> {
    /// Create a record stamped with the current time.
    pub fn new(channel: &'a str, level: Level, message: &'a str, context: &'a Context) -> Self {
        Self {
            channel,
            level,
            message,
            context,
            time: Timestamp::now(),
        }
    }

    /// Override the timestamp of the record.
    pub fn with_time(mut self, time: Timestamp) -> Self {
        self.time = time;
        self
    }

    /// The name of the channel the record was logged to.
    pub fn channel(&self) -> &'a str {
        self.channel
    }

    /// The severity of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The raw message template, before placeholder substitution.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The key-values supplied with the log call.
    pub fn context(&self) -> &'a Context {
        self.context
    }

    /// The time the record was created.
    pub fn time(&self) -> Timestamp {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        let mut sorted = Level::ALL;
        sorted.sort();
        assert_eq!(sorted, Level::ALL);

        let values = Level::ALL.map(|level| level.value());
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn parse_names_aliases_and_codes() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("NOTICE".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" crit ".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("emerg".parse::<Level>().unwrap(), Level::Emergency);
        assert_eq!("550".parse::<Level>().unwrap(), Level::Alert);

        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), r#"malformed level: "verbose""#);
        assert!("301".parse::<Level>().is_err());
    }

    #[test]
    fn value_round_trips() {
        for level in Level::ALL {
            assert_eq!(Level::from_value(level.value()), Some(level));
        }
    }

    #[test]
    fn log_levels_are_normalized() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Warn), Level::Warning);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn level_filter_thresholds() {
        let warn = LevelFilter::from(Level::Warning);
        assert!(!warn.test(Level::Info));
        assert!(warn.test(Level::Warning));
        assert!(warn.test(Level::Critical));

        assert!(LevelFilter::All.test(Level::Debug));
        assert!(!LevelFilter::Off.test(Level::Emergency));
    }
}
