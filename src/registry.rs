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

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::Logger;

/// A cache of loggers keyed by channel name.
///
/// Entries are never removed. Adding a name twice replaces the first logger.
///
/// # Examples
///
/// ```
/// use logforth_channel::ChannelRegistry;
/// use logforth_channel::Logger;
///
/// let registry = ChannelRegistry::new();
/// registry
///     .add("app", Logger::bootstrap())
///     .add("audit", Logger::null());
///
/// assert_eq!(registry.get("audit").unwrap().name(), "null");
/// assert!(registry.get("missing").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: RwLock<HashMap<String, Arc<Logger>>>,
}

impl ChannelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Logger>>> {
        self.channels.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Logger>>> {
        self.channels.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Add the logger of a channel, replacing any logger previously added under `name`.
    pub fn add(&self, name: impl Into<String>, logger: impl Into<Arc<Logger>>) -> &Self {
        self.write().insert(name.into(), logger.into());
        self
    }

    /// Get the logger of a channel.
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.read().get(name).cloned()
    }

    /// Whether a channel named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// The number of registered channels.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no channel is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The names of the registered channels, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.read().keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Flush the handlers of every registered channel.
    pub fn flush(&self) {
        // clone out so handlers never run under the lock
        let loggers = self.read().values().cloned().collect::<Vec<_>>();
        for logger in loggers {
            logger.flush();
        }
    }
}
