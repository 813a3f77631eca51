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

//! An example of channels with their own handlers and a custom layout.

use logforth_channel::Context;
use logforth_channel::Error;
use logforth_channel::Layout;
use logforth_channel::Level;
use logforth_channel::LogConfig;
use logforth_channel::Record;
use logforth_channel::append;
use logforth_channel::layout::substitute;

#[derive(Debug)]
struct BracketLayout;

impl Layout for BracketLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let message = substitute(record.message(), record.context());
        Ok(format!("[{}] {}: {message}\n", record.level(), record.channel()).into_bytes())
    }
}

fn main() {
    logforth_channel::notice("configuring channels", ());

    logforth_channel::install(
        LogConfig::new("app")
            .channel("app", |c| c.append(append::Console::stdout()))
            .channel("audit", |c| {
                c.append(append::Console::stdout().level(Level::Warning))
                    .append(append::Console::new(std::io::stderr()).layout(BracketLayout))
            })
            .channel("metrics", |c| c.append(append::Null::default())),
    )
    .expect("failed to install the log facade");

    for level in Level::ALL {
        logforth_channel::log(level, "Hello {level}!", [("level", level)]);
    }

    let audit = logforth_channel::channel("audit");
    audit.info(
        "User {user} read {path}",
        Context::new().with("user", "alice").with("path", "/etc/hosts"),
    );
    audit.warning("User {user} failed to log in", [("user", "bob")]);

    logforth_channel::channel("metrics").info("never printed", ());
    logforth_channel::channel("unknown").emergency("never printed", ());
}
