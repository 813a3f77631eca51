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
use std::io;
use std::io::Write;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Layout;
use crate::Level;
use crate::LevelFilter;
use crate::append::Append;
use crate::layout::ConsoleLayout;
use crate::record::Record;

enum Target {
    Stdout,
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Stdout => f.write_str("Stdout"),
            Target::Writer(_) => f.write_str("Writer"),
        }
    }
}

/// An appender that writes formatted lines to stdout, or to any other stream.
///
/// Records less severe than the configured level are dropped before they are formatted.
///
/// # Examples
///
/// ```
/// use logforth_channel::Level;
/// use logforth_channel::append::Console;
///
/// let console = Console::stdout().level(Level::Warning);
/// ```
#[derive(Debug)]
pub struct Console {
    target: Target,
    level: LevelFilter,
    layout: Box<dyn Layout>,
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    /// Create a console appender that writes to stdout.
    pub fn stdout() -> Self {
        Self::with_target(Target::Stdout)
    }

    /// Create a console appender that writes to the given stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use logforth_channel::append::Console;
    ///
    /// let console = Console::new(std::io::stderr());
    /// ```
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self::with_target(Target::Writer(Mutex::new(Box::new(writer))))
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            level: LevelFilter::All,
            layout: Box::new(ConsoleLayout::default()),
        }
    }

    /// Set the minimum level of the records to write.
    ///
    /// Default to accepting every level.
    pub fn level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the layout of the written lines.
    ///
    /// Default to [`ConsoleLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }
}

fn lock(writer: &Mutex<Box<dyn Write + Send>>) -> MutexGuard<'_, Box<dyn Write + Send>> {
    writer.lock().unwrap_or_else(|e| e.into_inner())
}

impl Append for Console {
    fn enabled(&self, level: Level) -> bool {
        self.level.test(level)
    }

    fn append(&self, record: &Record) -> Result<(), Error> {
        if !self.enabled(record.level()) {
            return Ok(());
        }

        let bytes = self.layout.format(record)?;
        let result = match &self.target {
            Target::Stdout => io::stdout().lock().write_all(&bytes),
            Target::Writer(writer) => lock(writer).write_all(&bytes),
        };
        result.map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        let result = match &self.target {
            Target::Stdout => io::stdout().flush(),
            Target::Writer(writer) => lock(writer).flush(),
        };
        result.map_err(Error::from_io_error)
    }
}
