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

//! An example of forwarding the `log` crate macros to channels.
//!
//! Run with `RUST_LOG=info` to drop the debug and trace records.

use logforth_channel::Level;
use logforth_channel::LogConfig;
use logforth_channel::append;

fn main() {
    logforth_channel::install(
        LogConfig::new("app")
            .channel("app", |c| c.append(append::Console::stdout()))
            .channel("db", |c| c.append(append::Console::stdout().level(Level::Warning))),
    )
    .expect("failed to install the log facade");
    logforth_channel::bridge::setup(logforth_channel::global())
        .expect("failed to set up the log bridge");

    log::error!("Hello error!");
    log::warn!("Hello warn!");
    log::info!(user = "alice"; "Hello {{user}}!");
    log::debug!("Hello debug!");
    log::trace!("Hello trace!");

    log::info!(target: "db", "not printed: below the db threshold");
    log::error!(target: "db", table = "users"; "lost connection while writing {{table}}");
}
