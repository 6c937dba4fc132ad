//! Pattern compilation and the name-to-value capture table.

use std::collections::HashMap;

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::binder;
use crate::descriptor::Capture;
use crate::error::Result;

/// Compilation flags applied through [`RegexBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOptions {
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub multi_line: bool,
    #[serde(default)]
    pub dot_matches_new_line: bool,
    #[serde(default)]
    pub ignore_whitespace: bool,
    /// Upper bound on the compiled program size, in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<usize>,
}

/// A compiled regular expression with named groups.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with default options.
    pub fn new(source: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    pub fn with_options(source: &str, options: &PatternOptions) -> Result<Self> {
        let mut builder = RegexBuilder::new(source);
        builder
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .ignore_whitespace(options.ignore_whitespace);
        if let Some(limit) = options.size_limit {
            builder.size_limit(limit);
        }
        Ok(Self {
            regex: builder.build()?,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Names of the named groups, in group order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// Match `text` and build its capture table.
    ///
    /// A text the pattern does not match yields an empty table.
    #[must_use]
    pub fn table(&self, text: &str) -> CaptureTable {
        self.regex.captures(text).map_or_else(
            || {
                trace!("Pattern {:?} did not match", self.regex.as_str());
                CaptureTable::default()
            },
            |captures| CaptureTable::from_captures(&self.regex, &captures),
        )
    }

    /// Match `text` and bind the result into `destination`.
    ///
    /// An empty `text` leaves `destination` untouched.
    pub fn parse<T: Capture>(&self, text: &str, destination: &mut T) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        binder::bind(&self.table(text), destination)
    }
}

impl std::str::FromStr for Pattern {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Group name to captured text, for one match.
///
/// Groups that did not take part in the match map to `""`. Unnamed groups
/// share the `""` key and never meet a real binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureTable {
    entries: HashMap<String, String>,
}

impl CaptureTable {
    fn from_captures(regex: &Regex, captures: &Captures<'_>) -> Self {
        // Index 0 is the whole match; names and values pair up positionally after it.
        let entries = regex
            .capture_names()
            .skip(1)
            .zip(captures.iter().skip(1))
            .map(|(name, value)| {
                (
                    name.unwrap_or_default().to_string(),
                    value.map_or_else(String::new, |m| m.as_str().to_string()),
                )
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, group: &str) -> Option<&str> {
        self.entries.get(group).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, group: &str) -> bool {
        self.entries.contains_key(group)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for CaptureTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
