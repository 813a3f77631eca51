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

//! The key-value context attached to a log call.

use std::fmt;

/// An ordered set of key-values supplied with a log call.
///
/// Values are rendered with their [`Display`](fmt::Display) implementation when they are added.
/// Inserting an existing key replaces its value and keeps its position.
///
/// # Examples
///
/// ```
/// use logforth_channel::Context;
///
/// let ctx = Context::new().with("user_id", 42).with("action", "login");
/// assert_eq!(ctx.get("user_id"), Some("42"));
///
/// let ctx = Context::from([("id", 7)]);
/// assert_eq!(ctx.get("id"), Some("7"));
///
/// let empty = Context::from(());
/// assert!(empty.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    entries: Vec<(String, String)>,
}

impl Context {
    /// Create an empty context.
    pub const fn new() -> Self {
        Self { entries: vec![] }
    }

    /// Add a key-value and return the context.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a key-value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the rendered value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the key-values in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The number of key-values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context has no key-values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<()> for Context {
    fn from(_: ()) -> Self {
        Context::new()
    }
}

impl From<&Context> for Context {
    fn from(ctx: &Context) -> Self {
        ctx.clone()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Context
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from(kvs: [(K, V); N]) -> Self {
        kvs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Context
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from(kvs: Vec<(K, V)>) -> Self {
        kvs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Context::new();
        for (k, v) in iter {
            ctx.insert(k, v);
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut ctx = Context::new().with("a", 1).with("b", 2);
        ctx.insert("a", "one");

        let kvs = ctx.iter().collect::<Vec<_>>();
        assert_eq!(kvs, vec![("a", "one"), ("b", "2")]);
    }

    #[test]
    fn values_render_with_display() {
        let ctx = Context::new()
            .with("float", 1.5)
            .with("flag", true)
            .with("level", crate::Level::Notice);

        assert_eq!(ctx.get("float"), Some("1.5"));
        assert_eq!(ctx.get("flag"), Some("true"));
        assert_eq!(ctx.get("level"), Some("NOTICE"));
        assert_eq!(ctx.get("missing"), None);
    }
}
