use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::rewrite::rewrite;
use crate::{Flags, GroupNames, NamedMatcher, OutOfRangeError, PatternSyntaxError};

/// The marker used by [`NamedPattern::new`]: named groups are written as `(?P<name>...)`.
pub const DEFAULT_MARKER: &str = "P";

/// A compiled regex with named capture groups.
///
/// The named groups are written as `(?<marker><name>...)`, with a configurable marker that is
/// `P` by default. Before the pattern is handed to the regex engine, all names are stripped, so
/// that the engine only ever sees plain numbered groups. The names are kept in a separate table
/// and resolved by [`NamedMatcher`].
///
/// ## Example
/// ```
/// use named_capture::NamedPattern;
///
/// let pattern = NamedPattern::new("(?P<name>[^\t]+)\t(?P<file>[^\t]+)(\t(?P<address>[^\t]+))?").unwrap();
/// assert_eq!(pattern.stripped_pattern(), "([^\t]+)\t([^\t]+)(\t([^\t]+))?");
/// assert_eq!(pattern.named_group_count(), 3);
/// assert_eq!(pattern.group_index("address"), Some(4));
///
/// let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS");
/// assert!(matcher.find());
/// assert_eq!(matcher.group_by_name("file"), Some("FILE"));
/// ```
///
/// A `NamedPattern` is immutable and can be shared between threads. [`copy`](Self::copy) creates
/// an instance with its own compiled regex if that is needed instead.
pub struct NamedPattern {
    source: String,
    marker: String,
    flags: Flags,
    stripped: String,
    names: GroupNames,
    pub(crate) regex: Regex,
}

fn build_regex(stripped: &str, flags: Flags) -> Result<Regex, PatternSyntaxError> {
    let mut builder = RegexBuilder::new(stripped);
    flags.apply(&mut builder);
    builder
        .build()
        .map_err(|err| PatternSyntaxError::Syntax(err.to_string()))
}

impl NamedPattern {
    /// Compile `source` with the default marker `P` and no flags.
    pub fn new(source: &str) -> Result<Self, PatternSyntaxError> {
        Self::compile(source, Flags::NONE, DEFAULT_MARKER)
    }

    /// Compile `source` with a custom marker and no flags.
    ///
    /// ```
    /// use named_capture::NamedPattern;
    ///
    /// let pattern = NamedPattern::with_marker(r"(?Z<id>\d+)", "Z").unwrap();
    /// assert_eq!(pattern.group_index("id"), Some(1));
    /// ```
    pub fn with_marker(source: &str, marker: &str) -> Result<Self, PatternSyntaxError> {
        Self::compile(source, Flags::NONE, marker)
    }

    /// Start configuring the compilation of `source`.
    pub fn builder(source: &str) -> NamedPatternBuilder {
        NamedPatternBuilder::new(source)
    }

    /// Compile `source` with the given flags and marker.
    ///
    /// Fails if the marker is invalid, if a named group has an empty name, or if the regex engine
    /// rejects the stripped pattern. Also fails if the engine's groups don't line up with the
    /// name table: either because the engine still finds a named group in the stripped pattern,
    /// or because it counts a different number of groups than the name scan did.
    pub fn compile(source: &str, flags: Flags, marker: &str) -> Result<Self, PatternSyntaxError> {
        let rewrite = rewrite(source, marker)?;
        let regex = build_regex(&rewrite.stripped, flags)?;

        // every name with the marker was stripped, so any name left shifts the table
        if let Some(name) = regex.capture_names().flatten().next() {
            return Err(PatternSyntaxError::UnmarkedNamedGroup(name.to_owned()));
        }
        let engine_groups = regex.captures_len() - 1;
        let names = rewrite.names.len() - 1;
        if engine_groups != names {
            return Err(PatternSyntaxError::GroupCountMismatch {
                names,
                engine: engine_groups,
            });
        }

        tracing::debug!(
            source,
            marker,
            stripped = %rewrite.stripped,
            groups = names,
            named = rewrite.names.named_count(),
            "compiled named pattern"
        );

        Ok(Self {
            source: source.to_owned(),
            marker: marker.to_owned(),
            flags,
            stripped: rewrite.stripped,
            names: rewrite.names,
            regex,
        })
    }

    /// Create an independent copy of this pattern.
    ///
    /// Unlike sharing a reference, the copy owns a freshly compiled regex and its own name table.
    pub fn copy(&self) -> Result<Self, PatternSyntaxError> {
        let regex = build_regex(&self.stripped, self.flags)?;
        tracing::debug!(source = %self.source, "copied named pattern");
        Ok(Self {
            source: self.source.clone(),
            marker: self.marker.clone(),
            flags: self.flags,
            stripped: self.stripped.clone(),
            names: self.names.clone(),
            regex,
        })
    }

    /// Create a matcher that searches `text`.
    pub fn matcher<'p, 'h>(&'p self, text: &'h str) -> NamedMatcher<'p, 'h> {
        NamedMatcher::new(self, text)
    }

    /// Returns `true` if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of named groups. Groups with duplicate names are counted separately.
    pub fn named_group_count(&self) -> usize {
        self.names.named_count()
    }

    /// Number of capture groups, named and unnamed, not counting group 0.
    pub fn group_count(&self) -> usize {
        self.names.len() - 1
    }

    /// The index of the first group called `name`.
    ///
    /// Returns `None` if `name` is empty or not used in this pattern.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.names.index_of(name)
    }

    /// The name of group `index`. Unnamed groups and group 0 have the name `""`.
    pub fn name_for_group(&self, index: usize) -> Result<&str, OutOfRangeError> {
        self.names.get(index).ok_or(OutOfRangeError::Group {
            index,
            group_count: self.group_count(),
        })
    }

    /// The names of all groups.
    pub fn names(&self) -> &GroupNames {
        &self.names
    }

    /// The pattern as it was passed to the regex engine, without any group names.
    pub fn stripped_pattern(&self) -> &str {
        &self.stripped
    }

    /// The pattern as it was written, including group names.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The marker that introduces named groups in [`source`](Self::source).
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The flags the pattern was compiled with.
    pub fn flags(&self) -> Flags {
        self.flags
    }
}

impl FromStr for NamedPattern {
    type Err = PatternSyntaxError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for NamedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Debug for NamedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedPattern")
            .field("source", &self.source)
            .field("marker", &self.marker)
            .field("flags", &self.flags)
            .field("stripped", &self.stripped)
            .field("names", &self.names)
            .finish()
    }
}

/// Configures and compiles a [`NamedPattern`].
///
/// ```
/// use named_capture::NamedPattern;
///
/// let pattern = NamedPattern::builder(r"(?Q<ext>\.xls)$")
///     .marker("Q")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert!(pattern.is_match("report.XLS"));
/// ```
#[derive(Debug, Clone)]
pub struct NamedPatternBuilder {
    source: String,
    marker: String,
    flags: Flags,
}

impl NamedPatternBuilder {
    /// Create a builder for `source` with the default marker and no flags.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_owned(),
            marker: DEFAULT_MARKER.to_owned(),
            flags: Flags::NONE,
        }
    }

    /// Compile the pattern.
    pub fn build(&self) -> Result<NamedPattern, PatternSyntaxError> {
        NamedPattern::compile(&self.source, self.flags, &self.marker)
    }

    /// Set the marker that introduces named groups.
    pub fn marker(&mut self, marker: &str) -> &mut Self {
        self.marker = marker.to_owned();
        self
    }

    /// Replace all flags.
    pub fn flags(&mut self, flags: Flags) -> &mut Self {
        self.flags = flags;
        self
    }

    /// See [`Flags::CASE_INSENSITIVE`].
    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.set(Flags::CASE_INSENSITIVE, yes)
    }

    /// See [`Flags::MULTI_LINE`].
    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.set(Flags::MULTI_LINE, yes)
    }

    /// See [`Flags::DOT_MATCHES_NEW_LINE`].
    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut Self {
        self.set(Flags::DOT_MATCHES_NEW_LINE, yes)
    }

    /// See [`Flags::IGNORE_WHITESPACE`].
    pub fn ignore_whitespace(&mut self, yes: bool) -> &mut Self {
        self.set(Flags::IGNORE_WHITESPACE, yes)
    }

    /// See [`Flags::SWAP_GREED`].
    pub fn swap_greed(&mut self, yes: bool) -> &mut Self {
        self.set(Flags::SWAP_GREED, yes)
    }

    /// See [`Flags::CRLF`].
    pub fn crlf(&mut self, yes: bool) -> &mut Self {
        self.set(Flags::CRLF, yes)
    }

    /// See [`Flags::ASCII`].
    pub fn ascii(&mut self, yes: bool) -> &mut Self {
        self.set(Flags::ASCII, yes)
    }

    fn set(&mut self, flag: Flags, yes: bool) -> &mut Self {
        self.flags = self.flags.with(flag, yes);
        self
    }
}
