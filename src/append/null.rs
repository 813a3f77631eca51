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

use crate::Error;
use crate::Level;
use crate::append::Append;
use crate::record::Record;

/// An appender that discards every record.
///
/// # Examples
///
/// ```
/// use logforth_channel::append::Null;
///
/// let null_appender = Null::default();
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Null {}

impl Append for Null {
    fn enabled(&self, _: Level) -> bool {
        false
    }

    fn append(&self, _: &Record) -> Result<(), Error> {
        Ok(())
    }
}
