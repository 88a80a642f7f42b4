//! Acceptance filter deciding which key names count as regular printable input.

use crate::error::{KeyInputError, KeyInputResult};
use regex::Regex;
use std::fmt;

/// Pattern used when no valid acceptance pattern is configured: one character
/// from space to tilde, or from the Hangul Compatibility Jamo block.
pub const DEFAULT_ACCEPT_PATTERN: &str = r"[ -~\x{3130}-\x{318F}]";

const HANGUL_COMPATIBILITY_JAMO: std::ops::RangeInclusive<char> = '\u{3130}'..='\u{318F}';

/// Predicate over key names.
///
/// A key name is accepted only when the pattern matches it as a whole, so a
/// single-character class never accepts multi-character names such as
/// `"Backspace"` or `"Shift"`.
#[derive(Clone)]
pub struct AcceptFilter {
    matcher: Matcher,
}

#[derive(Clone)]
enum Matcher {
    /// [`DEFAULT_ACCEPT_PATTERN`], evaluated without the regex engine.
    Default,
    Pattern { source: String, anchored: Regex },
    /// A caller-built regex, kept with its builder options.
    Compiled(Regex),
}

impl AcceptFilter {
    /// Compile `pattern`, reporting an error when it is not a valid regex.
    pub fn new(pattern: &str) -> KeyInputResult<Self> {
        Regex::new(pattern).map_err(|e| KeyInputError::invalid_pattern(pattern, e))?;
        let anchored = Regex::new(&format!(r"\A(?:{pattern})\z"))
            .map_err(|e| KeyInputError::invalid_pattern(pattern, e))?;

        Ok(Self {
            matcher: Matcher::Pattern {
                source: pattern.to_string(),
                anchored,
            },
        })
    }

    /// Use an already compiled regex as is.
    ///
    /// A key is accepted when the leftmost match of `regex` spans the whole
    /// key name. With alternations that means the first matching branch must
    /// cover it: `a|ab` rejects `"ab"`.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            matcher: Matcher::Compiled(regex),
        }
    }

    /// Compile `pattern` if one is given, falling back to the default filter
    /// when it is absent or invalid.
    pub fn or_default(pattern: Option<&str>) -> Self {
        let Some(pattern) = pattern else {
            return Self::default();
        };

        match Self::new(pattern) {
            Ok(filter) => filter,
            Err(err) => {
                log::warn!("{err}; using default acceptance pattern");
                Self::default()
            }
        }
    }

    /// Whether `key` is regular printable input.
    pub fn accepts(&self, key: &str) -> bool {
        match &self.matcher {
            Matcher::Default => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => is_default_printable(ch),
                    _ => false,
                }
            }
            Matcher::Pattern { anchored, .. } => anchored.is_match(key),
            Matcher::Compiled(regex) => regex
                .find(key)
                .is_some_and(|m| m.start() == 0 && m.end() == key.len()),
        }
    }

    /// The pattern as supplied, before anchoring.
    pub fn as_str(&self) -> &str {
        match &self.matcher {
            Matcher::Default => DEFAULT_ACCEPT_PATTERN,
            Matcher::Pattern { source, .. } => source,
            Matcher::Compiled(regex) => regex.as_str(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self.matcher, Matcher::Default)
    }
}

fn is_default_printable(ch: char) -> bool {
    (' '..='~').contains(&ch) || HANGUL_COMPATIBILITY_JAMO.contains(&ch)
}

impl Default for AcceptFilter {
    fn default() -> Self {
        Self {
            matcher: Matcher::Default,
        }
    }
}

impl fmt::Debug for AcceptFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AcceptFilter").field(&self.as_str()).finish()
    }
}
