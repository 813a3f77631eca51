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

//! Named logging channels with colorized console output.
//!
//! # Overview
//!
//! An application declares its channels once at startup in a [`LogConfig`]. Each channel is a
//! [`Logger`] bound to a fixed sequence of handlers ([`Append`]). The [`Log`] facade resolves
//! channels by name:
//!
//! * before [`Log::install`], every channel resolves to a bootstrap logger that prints to
//!   stdout;
//! * afterwards, known channels resolve to their registered logger and unknown channels to a
//!   logger that discards everything.
//!
//! Log calls never fail. Handler errors go to the logger's [`Trap`](trap::Trap) and the
//! remaining handlers still run.
//!
//! The [`Console`](append::Console) handler renders each record as one line: a colored
//! four-character level tag followed by the message, with `{placeholders}` replaced from the
//! call's [`Context`]:
//!
//! ```text
//!   INFO  User 42 logged in
//!   WARN  disk at 91%
//! ```
//!
//! # Examples
//!
//! Log through the process-wide facade:
//!
//! ```
//! use logforth_channel::Level;
//! use logforth_channel::LogConfig;
//! use logforth_channel::append;
//!
//! logforth_channel::info("printed by the bootstrap logger", ());
//!
//! logforth_channel::install(
//!     LogConfig::new("app")
//!         .channel("app", |c| c.append(append::Console::stdout()))
//!         .channel("audit", |c| {
//!             c.append(append::Console::stdout().level(Level::Warning))
//!         }),
//! )
//! .unwrap();
//!
//! logforth_channel::info("User {id} logged in", [("id", 42)]);
//! logforth_channel::channel("audit").error("permission denied for {user}", [("user", "bob")]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
#[cfg(feature = "bridge-log")]
pub mod bridge;
pub mod facade;
pub mod layout;
pub mod trap;

mod config;
mod error;
mod kv;
mod logger;
mod record;
mod registry;

pub use self::append::Append;
pub use self::config::LogConfig;
pub use self::error::Error;
pub use self::facade::Log;
pub use self::facade::alert;
pub use self::facade::channel;
pub use self::facade::critical;
pub use self::facade::debug;
pub use self::facade::emergency;
pub use self::facade::error;
pub use self::facade::global;
pub use self::facade::info;
pub use self::facade::install;
pub use self::facade::log;
pub use self::facade::logger;
pub use self::facade::notice;
pub use self::facade::warning;
pub use self::kv::Context;
pub use self::layout::Layout;
pub use self::logger::Logger;
pub use self::logger::LoggerBuilder;
pub use self::record::Level;
pub use self::record::LevelFilter;
pub use self::record::Record;
pub use self::registry::ChannelRegistry;
