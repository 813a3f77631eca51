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

use std::sync::Arc;

use crate::Context;
use crate::Error;
use crate::Level;
use crate::Log;
use crate::Logger;

const DEFAULT_FILTER_ENV: &str = "RUST_LOG";

/// A [`log::Log`] implementation that forwards records to a [`Log`] facade.
///
/// * The level is mapped with `From<log::Level>`; `trace` becomes [`Level::Debug`].
/// * The record's key-values become the context, so `log::info!(id = 42; "User {{id}}")`
///   renders as `User 42`.
/// * The record's target selects the channel when a channel with that name is registered;
///   other targets go to the default channel.
///
/// Records are first checked against an [`env_filter`] directive string, read from `RUST_LOG`
/// by default and accepting everything when the variable is unset.
///
/// # Examples
///
/// ```
/// use logforth_channel::bridge::LogBridge;
///
/// let bridge = LogBridge::new(logforth_channel::global()).filter("info,hyper=warn");
/// ```
#[derive(Debug)]
pub struct LogBridge {
    log: &'static Log,
    filter: env_filter::Filter,
}

impl LogBridge {
    /// Create a bridge into `log` with the filter directives of `RUST_LOG`.
    pub fn new(log: &'static Log) -> Self {
        let mut builder = env_filter::Builder::new();
        match std::env::var(DEFAULT_FILTER_ENV) {
            Ok(directives) => builder.parse(&directives),
            Err(_) => builder.filter_level(::log::LevelFilter::Trace),
        };

        Self {
            log,
            filter: builder.build(),
        }
    }

    /// Replace the filter with the given directives, e.g. `info,my_crate::db=debug`.
    ///
    /// See [the `env_logger` documentation](https://docs.rs/env_logger/#enabling-logging) for
    /// the syntax.
    pub fn filter(mut self, directives: &str) -> Self {
        self.filter = env_filter::Builder::new().parse(directives).build();
        self
    }

    /// Set up the bridge as the global logger of the `log` crate.
    ///
    /// # Errors
    ///
    /// Return an error if a global `log` logger has already been set.
    pub fn apply(self) -> Result<(), Error> {
        let max_level = self.filter.filter();
        ::log::set_boxed_logger(Box::new(self))
            .map_err(|err| Error::new("failed to set the global logger").with_source(err))?;
        ::log::set_max_level(max_level);
        Ok(())
    }

    fn route(&self, target: &str) -> Arc<Logger> {
        match self.log.context() {
            Ok(context) if context.registry().contains(target) => self.log.channel(target),
            _ => self.log.logger(),
        }
    }
}

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &::log::Metadata) -> bool {
        self.filter.enabled(metadata)
            && self
                .route(metadata.target())
                .enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &::log::Record) {
        if !self.filter.matches(record) {
            return;
        }

        struct ContextVisitor<'a>(&'a mut Context);

        impl<'kvs> ::log::kv::VisitSource<'kvs> for ContextVisitor<'_> {
            fn visit_pair(
                &mut self,
                key: ::log::kv::Key<'kvs>,
                value: ::log::kv::Value<'kvs>,
            ) -> Result<(), ::log::kv::Error> {
                self.0.insert(key.as_str(), value);
                Ok(())
            }
        }

        let mut context = Context::new();
        // a failed visit keeps the pairs collected so far
        let _ = record.key_values().visit(&mut ContextVisitor(&mut context));

        self.route(record.target())
            .log(Level::from(record.level()), record.args(), context);
    }

    fn flush(&self) {
        self.log.flush();
    }
}

/// Forward the `log` crate macros to `log`, filtered by `RUST_LOG`.
///
/// # Errors
///
/// Return an error if a global `log` logger has already been set.
pub fn setup(log: &'static Log) -> Result<(), Error> {
    LogBridge::new(log).apply()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::Write;
    use std::sync::Mutex;

    use ::log::Log as _;

    use super::*;
    use crate::LogConfig;
    use crate::append::Console;
    use crate::layout::ConsoleLayout;

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
        fn take(&self) -> String {
            let bytes = std::mem::take(&mut *self.0.lock().unwrap());
            String::from_utf8(bytes).unwrap()
        }
    }

    fn console(buf: &Buffer) -> Console {
        Console::new(buf.clone()).layout(ConsoleLayout::default().no_color())
    }

    fn installed(app: &Buffer, audit: &Buffer) -> &'static Log {
        let log: &'static Log = Box::leak(Box::new(Log::new()));
        log.install(
            LogConfig::new("app")
                .channel("app", |c| c.append(console(app)))
                .channel("audit", |c| c.append(console(audit).level(Level::Warning))),
        )
        .unwrap();
        log
    }

    #[test]
    fn routes_by_target_and_substitutes_key_values() {
        let (app, audit) = (Buffer::default(), Buffer::default());
        let bridge = LogBridge::new(installed(&app, &audit)).filter("trace");

        let kvs: &[(&str, i32)] = &[("id", 42)];
        bridge.log(
            &::log::Record::builder()
                .level(::log::Level::Warn)
                .target("audit")
                .args(format_args!("User {{id}} logged in"))
                .key_values(&kvs)
                .build(),
        );
        bridge.log(
            &::log::Record::builder()
                .level(::log::Level::Trace)
                .target("my_crate::db")
                .args(format_args!("query done"))
                .build(),
        );

        assert_eq!(audit.take(), "   WARN  User 42 logged in\n");
        assert_eq!(app.take(), "   DBUG  query done\n");
    }

    #[test]
    fn directives_filter_records() {
        let (app, audit) = (Buffer::default(), Buffer::default());
        let bridge = LogBridge::new(installed(&app, &audit)).filter("warn,chatty=off");

        bridge.log(
            &::log::Record::builder()
                .level(::log::Level::Info)
                .target("server")
                .args(format_args!("filtered"))
                .build(),
        );
        bridge.log(
            &::log::Record::builder()
                .level(::log::Level::Error)
                .target("chatty")
                .args(format_args!("filtered too"))
                .build(),
        );
        bridge.log(
            &::log::Record::builder()
                .level(::log::Level::Error)
                .target("server")
                .args(format_args!("kept"))
                .build(),
        );

        assert_eq!(app.take(), "   ERRO  kept\n");
        assert_eq!(audit.take(), "");
    }

    #[test]
    fn enabled_consults_the_routed_channel() {
        let (app, audit) = (Buffer::default(), Buffer::default());
        let bridge = LogBridge::new(installed(&app, &audit)).filter("trace");

        fn info(target: &str) -> ::log::Metadata<'_> {
            ::log::Metadata::builder()
                .level(::log::Level::Info)
                .target(target)
                .build()
        }

        assert!(bridge.enabled(&info("server")));
        assert!(!bridge.enabled(&info("audit")));
    }
}
