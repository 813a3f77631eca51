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

//! Terminal styles of the level tags.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::Level;

/// A display attribute applied to a level tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Background color.
    Background(Color),
    /// Foreground color.
    Foreground(Color),
    /// Blinking text.
    Blink,
}

/// The label and display attributes of a [`Level`].
///
/// | Level     | Label | Attributes                         |
/// |-----------|-------|------------------------------------|
/// | Debug     | DBUG  | bg blue, fg white                  |
/// | Info      | INFO  | bg blue, fg white                  |
/// | Notice    | NOTI  | bg bright cyan, fg white           |
/// | Warning   | WARN  | bg yellow, fg white                |
/// | Error     | ERRO  | bg bright red, fg white            |
/// | Critical  | CRIT  | bg red, fg white, blink            |
/// | Alert     | ALRT  | bg bright magenta, fg white, blink |
/// | Emergency | EMRG  | bg magenta, fg white, blink        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyle {
    label: &'static str,
    attributes: &'static [Attribute],
}

static DEBUG: LevelStyle = LevelStyle {
    label: "DBUG",
    attributes: &[
        Attribute::Background(Color::Blue),
        Attribute::Foreground(Color::White),
    ],
};

static INFO: LevelStyle = LevelStyle {
    label: "INFO",
    attributes: &[
        Attribute::Background(Color::Blue),
        Attribute::Foreground(Color::White),
    ],
};

static NOTICE: LevelStyle = LevelStyle {
    label: "NOTI",
    attributes: &[
        Attribute::Background(Color::BrightCyan),
        Attribute::Foreground(Color::White),
    ],
};

static WARNING: LevelStyle = LevelStyle {
    label: "WARN",
    attributes: &[
        Attribute::Background(Color::Yellow),
        Attribute::Foreground(Color::White),
    ],
};

static ERROR: LevelStyle = LevelStyle {
    label: "ERRO",
    attributes: &[
        Attribute::Background(Color::BrightRed),
        Attribute::Foreground(Color::White),
    ],
};

static CRITICAL: LevelStyle = LevelStyle {
    label: "CRIT",
    attributes: &[
        Attribute::Background(Color::Red),
        Attribute::Foreground(Color::White),
        Attribute::Blink,
    ],
};

static ALERT: LevelStyle = LevelStyle {
    label: "ALRT",
    attributes: &[
        Attribute::Background(Color::BrightMagenta),
        Attribute::Foreground(Color::White),
        Attribute::Blink,
    ],
};

static EMERGENCY: LevelStyle = LevelStyle {
    label: "EMRG",
    attributes: &[
        Attribute::Background(Color::Magenta),
        Attribute::Foreground(Color::White),
        Attribute::Blink,
    ],
};

impl LevelStyle {
    /// Return the style of the given level.
    pub fn of(level: Level) -> &'static LevelStyle {
        match level {
            Level::Debug => &DEBUG,
            Level::Info => &INFO,
            Level::Notice => &NOTICE,
            Level::Warning => &WARNING,
            Level::Error => &ERROR,
            Level::Critical => &CRITICAL,
            Level::Alert => &ALERT,
            Level::Emergency => &EMERGENCY,
        }
    }

    /// The four character label, e.g. `DBUG`.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The display attributes, in the order they are applied.
    pub fn attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    /// Apply the display attributes to `text`.
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = ColoredString::from(text);
        for attribute in self.attributes {
            painted = match *attribute {
                Attribute::Background(color) => painted.on_color(color),
                Attribute::Foreground(color) => painted.color(color),
                Attribute::Blink => painted.blink(),
            };
        }
        painted
    }
}
