//! Extraction strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which extraction strategy parses the document.
///
/// The string identifiers (`parse5`, `loose`, `cheerio`) are the wire names
/// accepted from callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Full tree parse, then explicit walks of `head` and `body`.
    #[default]
    Default,
    /// Single-pass tolerant token stream.
    Loose,
    /// Declarative element/attribute queries over a parsed tree.
    SelectorBased,
}

impl Mode {
    /// Wire name of the strict tree strategy.
    pub const DEFAULT_NAME: &'static str = "parse5";
    /// Wire name of the streaming strategy.
    pub const LOOSE_NAME: &'static str = "loose";
    /// Wire name of the selector strategy.
    pub const SELECTOR_NAME: &'static str = "cheerio";

    /// Maps an optional mode name to a strategy, never failing.
    ///
    /// `"loose"` and `"cheerio"` select their strategies. Everything else,
    /// including `None`, `"parse5"` and any unrecognised string, falls back
    /// to [`Mode::Default`]. Use [`Mode::from_str`] to reject unknown names
    /// instead.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(Self::LOOSE_NAME) => Mode::Loose,
            Some(Self::SELECTOR_NAME) => Mode::SelectorBased,
            Some(Self::DEFAULT_NAME) | None => Mode::Default,
            Some(other) => {
                tracing::debug!(mode = other, "unknown scrape mode, using default");
                Mode::Default
            }
        }
    }

    /// The wire name for this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Default => Self::DEFAULT_NAME,
            Mode::Loose => Self::LOOSE_NAME,
            Mode::SelectorBased => Self::SELECTOR_NAME,
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Strict parse: only the three wire names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DEFAULT_NAME => Ok(Mode::Default),
            Self::LOOSE_NAME => Ok(Mode::Loose),
            Self::SELECTOR_NAME => Ok(Mode::SelectorBased),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
