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

//! Handlers that receive the records of a channel.

use std::fmt;

use crate::Error;
use crate::Level;
use crate::record::Record;

mod console;
mod null;

pub use self::console::Console;
pub use self::null::Null;

/// A handler that can process log records.
///
/// Each handler applies its own threshold: [`Append::enabled`] is consulted by
/// [`Logger::enabled`](crate::Logger::enabled), and [`Append::append`] is expected to drop
/// records the handler is not interested in.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Whether records of the given level would be written.
    ///
    /// Default to `true`.
    fn enabled(&self, level: Level) -> bool {
        let _ = level;
        true
    }

    /// Dispatch a log record to the append target.
    fn append(&self, record: &Record) -> Result<(), Error>;

    /// Flush any buffered records.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
