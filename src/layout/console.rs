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

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;

use crate::Error;
use crate::Level;
use crate::kv::Context;
use crate::layout::Layout;
use crate::layout::LevelStyle;
use crate::record::Record;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: the pattern is a valid regex literal
    Regex::new(r"\{[A-Za-z0-9_]+\}").unwrap()
});

/// A layout that renders a record as one colorized line.
///
/// Output format:
///
/// ```text
///   DBUG  connecting to 127.0.0.1:5432
///   INFO  User 42 logged in
///   WARN  cache miss for {session}
///   ERRO  query failed after 3 retries
/// ```
///
/// The level tag is the four character label of the level framed by single spaces and painted
/// with the level's [`LevelStyle`]. Placeholders like `{user_id}` in the message are replaced
/// with the matching value of the record's context; placeholders without a matching key are
/// kept verbatim. Context entries that no placeholder refers to are not printed.
///
/// Color codes follow the `colored` crate's global control, so setting `NO_COLOR` disables them.
/// Call [`ConsoleLayout::no_color`] to disable them for this layout only.
///
/// # Examples
///
/// ```
/// use logforth_channel::layout::ConsoleLayout;
///
/// let layout = ConsoleLayout::default().no_color();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleLayout {
    no_color: bool,
}

impl ConsoleLayout {
    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Render the level tag, e.g. `" WARN "` wrapped in its color codes.
    pub fn level_tag(&self, level: Level) -> String {
        let style = LevelStyle::of(level);
        let text = format!(" {} ", style.label());
        if self.no_color {
            text
        } else {
            style.paint(&text).to_string()
        }
    }
}

impl Layout for ConsoleLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let tag = self.level_tag(record.level());
        let message = substitute(record.message(), record.context());
        Ok(format!("  {tag} {message}\n").into_bytes())
    }
}

/// Replace every `{key}` placeholder in `message` with the value of `key` in `context`.
///
/// Placeholders whose key is absent are left as they are. Substituted values are not scanned
/// again.
///
/// # Examples
///
/// ```
/// use logforth_channel::Context;
/// use logforth_channel::layout::substitute;
///
/// let ctx = Context::from([("id", 42)]);
/// assert_eq!(substitute("User {id} logged in", &ctx), "User 42 logged in");
/// assert_eq!(substitute("Missing {unset}", &ctx), "Missing {unset}");
/// ```
pub fn substitute<'a>(message: &'a str, context: &Context) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(message, |caps: &Captures| {
        let token = &caps[0];
        let key = &token[1..token.len() - 1];
        match context.get(key) {
            Some(value) => value.to_owned(),
            None => token.to_owned(),
        }
    })
}
