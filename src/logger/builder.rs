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

use crate::Append;
use crate::Logger;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A builder for configuring the handlers of a [`Logger`].
///
/// # Examples
///
/// ```
/// use logforth_channel::Level;
/// use logforth_channel::Logger;
/// use logforth_channel::append;
///
/// let logger = Logger::builder("app")
///     .append(append::Console::stdout().level(Level::Warning))
///     .build();
/// ```
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    appends: Vec<Box<dyn Append>>,
    trap: Box<dyn Trap>,
}

impl LoggerBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            appends: vec![],
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// The name of the logger under construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a handler. Handlers receive records in the order they are added.
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends.push(append.into());
        self
    }

    /// Set the trap that receives handler errors.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        Logger::from_parts(self.name, self.appends, self.trap)
    }
}
