use std::ops::Range;

use regex::CaptureLocations;

use crate::{NamedPattern, OutOfRangeError};

/// A search cursor of a [`NamedPattern`] over one text.
///
/// Created with [`NamedPattern::matcher`]. Each successful [`find`](Self::find) stores the
/// match and moves the cursor behind it, so repeated calls enumerate all non-overlapping
/// matches from left to right. The groups of the latest match can be queried by index or by
/// name.
///
/// Querying a group by index fails with an [`OutOfRangeError`] if the pattern has no such group,
/// while querying by an unknown name just returns `None`:
/// ```
/// use named_capture::NamedPattern;
///
/// let pattern = NamedPattern::new(r"(?P<key>\w+)=(?P<value>\w+)").unwrap();
/// let mut matcher = pattern.matcher("a=1 b=2");
///
/// assert!(matcher.find());
/// assert_eq!(matcher.group_by_name("key"), Some("a"));
/// assert_eq!(matcher.group_by_name("nope"), None);
/// assert_eq!(matcher.group(2), Ok(Some("1")));
/// assert!(matcher.group(3).is_err());
///
/// assert!(matcher.find());
/// assert_eq!(matcher.group_by_name("key"), Some("b"));
/// assert!(!matcher.find());
/// ```
///
/// Group queries before the first `find` or after a failed `find` return `None`.
#[derive(Debug)]
pub struct NamedMatcher<'p, 'h> {
    pattern: &'p NamedPattern,
    text: &'h str,
    locations: CaptureLocations,
    region: Range<usize>,
    /// Where the next search starts. `None` once the region is exhausted.
    next: Option<usize>,
    matched: bool,
}

impl<'p, 'h> NamedMatcher<'p, 'h> {
    pub(crate) fn new(pattern: &'p NamedPattern, text: &'h str) -> Self {
        Self {
            pattern,
            text,
            locations: pattern.regex.capture_locations(),
            region: 0..text.len(),
            next: Some(0),
            matched: false,
        }
    }

    /// Search for the next match in the current region.
    ///
    /// Returns `true` if a match was found. After an empty match, the next search starts one
    /// character later.
    pub fn find(&mut self) -> bool {
        self.matched = false;
        let from = match self.next {
            Some(from) => from,
            None => return false,
        };

        // the engine only sees the region, so `^` and `$` anchor at its bounds
        let text = self.text;
        let haystack = &text[self.region.clone()];
        let base = self.region.start;
        let found = self
            .pattern
            .regex
            .captures_read_at(&mut self.locations, haystack, from - base)
            .map(|m| (m.start() + base, m.end() + base));

        let (start, end) = match found {
            Some(span) => span,
            None => {
                tracing::trace!(from, "no match");
                self.next = None;
                return false;
            }
        };
        tracing::trace!(from, start, end, "found match");

        self.next = if start == end {
            text[end..self.region.end]
                .chars()
                .next()
                .map(|c| end + c.len_utf8())
        } else {
            Some(end)
        };
        self.matched = true;
        true
    }

    /// Reset the matcher and search for a match starting at `start`.
    ///
    /// Like [`reset`](Self::reset), this removes any region restriction.
    pub fn find_at(&mut self, start: usize) -> Result<bool, OutOfRangeError> {
        self.check_offset(start)?;
        self.reset();
        self.next = Some(start);
        Ok(self.find())
    }

    /// Restrict all following searches to `text[start..end]`.
    ///
    /// Discards the current match and moves the cursor to `start`.
    ///
    /// ```
    /// use named_capture::NamedPattern;
    ///
    /// let pattern = NamedPattern::new(r"^(?P<digits>\d+)").unwrap();
    /// let mut matcher = pattern.matcher("abc123");
    /// assert!(!matcher.find());
    ///
    /// matcher.region(3, 5).unwrap();
    /// assert!(matcher.find());
    /// assert_eq!(matcher.group_by_name("digits"), Some("12"));
    /// assert_eq!(matcher.start(1), Ok(Some(3)));
    /// ```
    pub fn region(&mut self, start: usize, end: usize) -> Result<(), OutOfRangeError> {
        if start > end || end > self.text.len() {
            return Err(OutOfRangeError::Region {
                start,
                end,
                len: self.text.len(),
            });
        }
        self.check_offset(start)?;
        self.check_offset(end)?;

        self.region = start..end;
        self.next = Some(start);
        self.matched = false;
        Ok(())
    }

    /// Remove the region restriction, discard the current match and move the cursor to the
    /// start of the text.
    pub fn reset(&mut self) {
        self.region = 0..self.text.len();
        self.next = Some(0);
        self.matched = false;
    }

    /// Start of the current region.
    pub fn region_start(&self) -> usize {
        self.region.start
    }

    /// End of the current region.
    pub fn region_end(&self) -> usize {
        self.region.end
    }

    /// The text this matcher searches.
    pub fn text(&self) -> &'h str {
        self.text
    }

    /// The text matched by group `index` of the current match.
    ///
    /// Group 0 is the whole match. Returns `None` if the group did not participate in the match.
    pub fn group(&self, index: usize) -> Result<Option<&'h str>, OutOfRangeError> {
        Ok(self.span(index)?.map(|(start, end)| &self.text[start..end]))
    }

    /// The text matched by the first group called `name`.
    ///
    /// Returns `None` if the group did not participate in the match, or if the pattern has no
    /// group called `name`.
    pub fn group_by_name(&self, name: &str) -> Option<&'h str> {
        let index = self.pattern.group_index(name)?;
        self.group(index).ok().flatten()
    }

    /// Number of capture groups of the pattern, not counting group 0.
    pub fn group_count(&self) -> usize {
        self.pattern.group_count()
    }

    /// Start offset of group `index` in the text, or `None` if it did not participate.
    pub fn start(&self, index: usize) -> Result<Option<usize>, OutOfRangeError> {
        Ok(self.span(index)?.map(|(start, _)| start))
    }

    /// End offset of group `index` in the text, or `None` if it did not participate.
    pub fn end(&self, index: usize) -> Result<Option<usize>, OutOfRangeError> {
        Ok(self.span(index)?.map(|(_, end)| end))
    }

    /// The index of the first named group that participated in the current match, or 0 if
    /// there is none.
    ///
    /// Useful for patterns made of named alternatives, to tell which one matched:
    /// ```
    /// use named_capture::NamedPattern;
    ///
    /// let pattern = NamedPattern::new(r"(?P<number>\d+)|(?P<word>[a-z]+)").unwrap();
    /// let mut matcher = pattern.matcher("hello");
    /// assert!(matcher.find());
    /// let index = matcher.first_matched_named_group();
    /// assert_eq!(matcher.name_for_group(index), Ok("word"));
    /// ```
    pub fn first_matched_named_group(&self) -> usize {
        if !self.matched {
            return 0;
        }
        let names = self.pattern.names();
        (1..=self.group_count())
            .find(|&i| {
                self.locations.get(i).is_some() && names.get(i).map_or(false, |n| !n.is_empty())
            })
            .unwrap_or(0)
    }

    /// The name of group `index`. See [`NamedPattern::name_for_group`].
    pub fn name_for_group(&self, index: usize) -> Result<&'p str, OutOfRangeError> {
        self.pattern.name_for_group(index)
    }

    /// All named groups of the pattern with the text they matched in the current match.
    ///
    /// ```
    /// use named_capture::NamedPattern;
    ///
    /// let pattern = NamedPattern::new(r"(?P<h>\d\d):(?P<m>\d\d)(:(?P<s>\d\d))?").unwrap();
    /// let mut matcher = pattern.matcher("12:34");
    /// assert!(matcher.find());
    /// let groups: Vec<_> = matcher.named_groups().collect();
    /// assert_eq!(groups, [("h", Some("12")), ("m", Some("34")), ("s", None)]);
    /// ```
    pub fn named_groups(&self) -> impl Iterator<Item = (&'p str, Option<&'h str>)> + '_ {
        let pattern: &'p NamedPattern = self.pattern;
        pattern
            .names()
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(move |(index, name)| (name, self.group(index).ok().flatten()))
    }

    fn check_offset(&self, offset: usize) -> Result<(), OutOfRangeError> {
        if offset > self.text.len() {
            Err(OutOfRangeError::Offset {
                offset,
                len: self.text.len(),
            })
        } else if !self.text.is_char_boundary(offset) {
            Err(OutOfRangeError::NotCharBoundary { offset })
        } else {
            Ok(())
        }
    }

    /// Absolute span of group `index` in the current match.
    fn span(&self, index: usize) -> Result<Option<(usize, usize)>, OutOfRangeError> {
        let group_count = self.group_count();
        if index > group_count {
            return Err(OutOfRangeError::Group { index, group_count });
        }
        if !self.matched {
            return Ok(None);
        }
        let base = self.region.start;
        Ok(self
            .locations
            .get(index)
            .map(|(start, end)| (start + base, end + base)))
    }
}
