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

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use logforth_channel::Context;
use logforth_channel::Level;
use logforth_channel::Log;
use logforth_channel::LogConfig;
use logforth_channel::Logger;
use logforth_channel::append::Console;
use logforth_channel::layout::ConsoleLayout;
use logforth_channel::layout::LevelStyle;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn plain_console(buf: &Buffer) -> Console {
    Console::new(buf.clone()).layout(ConsoleLayout::default().no_color())
}

#[test]
fn every_level_renders_its_label() {
    let buf = Buffer::default();
    let logger = Logger::builder("app").append(plain_console(&buf)).build();

    for level in Level::ALL {
        logger.log(level, "message", ());
    }

    let lines = buf.contents();
    let labels = lines
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec!["DBUG", "INFO", "NOTI", "WARN", "ERRO", "CRIT", "ALRT", "EMRG"]
    );
    for level in Level::ALL {
        assert_eq!(LevelStyle::of(level).label().len(), 4);
    }
}

#[test]
fn plain_message_is_framed_by_tag_and_newline() {
    let buf = Buffer::default();
    let layout = ConsoleLayout::default().no_color();
    let logger = Logger::builder("app").append(plain_console(&buf)).build();

    logger.critical("cache node {3} is down!", ());

    let tag = layout.level_tag(Level::Critical);
    assert_eq!(buf.contents(), format!("  {tag} cache node {{3}} is down!\n"));
}

#[test]
fn placeholders_resolve_from_context() {
    let buf = Buffer::default();
    let logger = Logger::builder("app").append(plain_console(&buf)).build();

    logger.info("User {id} logged in", [("id", 42)]);
    logger.warning("Missing {unset}", ());
    logger.error(
        "{method} {path} took {ms}ms",
        Context::new()
            .with("method", "GET")
            .with("path", "/health")
            .with("ms", 12.5)
            .with("unused", "not printed"),
    );

    assert_eq!(
        buf.contents(),
        concat!(
            "   INFO  User 42 logged in\n",
            "   WARN  Missing {unset}\n",
            "   ERRO  GET /health took 12.5ms\n",
        )
    );
}

#[test]
fn registered_channel_resolves_to_the_same_logger() {
    let log = Log::new();
    log.install(LogConfig::new("app").channel("app", |c| c).channel("audit", |c| c))
        .unwrap();

    let first = log.channel("audit");
    for _ in 0..10 {
        assert!(Arc::ptr_eq(&first, &log.channel("audit")));
    }
    assert!(Arc::ptr_eq(&log.logger(), &log.resolve(Some("app"))));
}

#[test]
fn unknown_channel_writes_nothing() {
    let buf = Buffer::default();
    let log = Log::new();
    log.install(LogConfig::new("app").channel("app", |c| c.append(plain_console(&buf))))
        .unwrap();

    let unknown = log.channel("unknown");
    for level in Level::ALL {
        unknown.log(level, "dropped {x}", [("x", 1)]);
    }
    unknown.flush();

    assert_eq!(unknown.name(), "null");
    assert_eq!(buf.contents(), "");
}

#[test]
fn later_registration_wins() {
    let (first, second) = (Buffer::default(), Buffer::default());
    let log = Log::new();
    log.install(
        LogConfig::new("app")
            .channel("app", |c| c.append(plain_console(&first)))
            .channel("app", |c| c.append(plain_console(&second))),
    )
    .unwrap();

    log.info("hello", ());

    assert_eq!(first.contents(), "");
    assert_eq!(second.contents(), "   INFO  hello\n");

    let third = Buffer::default();
    log.add_channel(
        "app",
        Logger::builder("app").append(plain_console(&third)).build(),
    )
    .unwrap();
    log.info("again", ());
    assert_eq!(second.contents(), "   INFO  hello\n");
    assert_eq!(third.contents(), "   INFO  again\n");
}

#[test]
fn warning_threshold_end_to_end() {
    let file = tempfile::NamedTempFile::new().expect("failed to create a temporary file");
    let writer = file.reopen().expect("failed to reopen the temporary file");

    let log = Log::new();
    log.install(LogConfig::new("default").channel("default", |c| {
        c.append(
            Console::new(writer)
                .level(Level::Warning)
                .layout(ConsoleLayout::default().no_color()),
        )
    }))
    .unwrap();

    log.info("not written", ());
    log.error("written once", ());
    log.flush();

    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, "   ERRO  written once\n");
}

#[test]
fn root_functions_drive_the_global_facade() {
    let buf = Buffer::default();
    logforth_channel::install(
        LogConfig::new("app").channel("app", |c| c.append(plain_console(&buf))),
    )
    .unwrap();

    assert!(logforth_channel::global().is_ready());
    assert_eq!(logforth_channel::logger().name(), "app");
    logforth_channel::log(Level::Notice, "{who} joined", [("who", "carol")]);
    logforth_channel::channel("app").alert("paging", ());

    assert_eq!(buf.contents(), "   NOTI  carol joined\n   ALRT  paging\n");
}
