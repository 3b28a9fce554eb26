use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Compile flags passed on to the regex engine.
///
/// Flags can be combined with `|`:
/// ```
/// use named_capture::{Flags, NamedPattern};
///
/// let flags = Flags::CASE_INSENSITIVE | Flags::MULTI_LINE;
/// assert!(flags.contains(Flags::MULTI_LINE));
///
/// let pattern = NamedPattern::compile(r"^(?P<word>abc)$", flags, "P").unwrap();
/// assert!(pattern.is_match("xyz\nABC"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// No flags. Unicode matching is on, everything else is off.
    pub const NONE: Flags = Flags(0);
    /// `(?i)`: letters match both upper and lower case.
    pub const CASE_INSENSITIVE: Flags = Flags(1);
    /// `(?m)`: `^` and `$` match at the beginning and end of lines.
    pub const MULTI_LINE: Flags = Flags(1 << 1);
    /// `(?s)`: `.` also matches `\n`.
    pub const DOT_MATCHES_NEW_LINE: Flags = Flags(1 << 2);
    /// `(?x)`: whitespace is ignored and `#` starts a comment.
    pub const IGNORE_WHITESPACE: Flags = Flags(1 << 3);
    /// `(?U)`: the meaning of `x*` and `x*?` is swapped.
    pub const SWAP_GREED: Flags = Flags(1 << 4);
    /// `(?R)`: `\r\n` is treated as a line terminator in multi line mode.
    pub const CRLF: Flags = Flags(1 << 5);
    /// `(?-u)`: character classes like `\w` only match ASCII.
    ///
    /// Patterns that could then match invalid UTF-8, like a bare `.`, are rejected by the engine.
    pub const ASCII: Flags = Flags(1 << 6);

    /// Returns `true` if all flags in `other` are set.
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `self` with the flags in `other` set or cleared.
    pub fn with(self, other: Flags, enabled: bool) -> Flags {
        if enabled {
            Flags(self.0 | other.0)
        } else {
            Flags(self.0 & !other.0)
        }
    }

    pub(crate) fn apply(self, builder: &mut regex::RegexBuilder) {
        builder
            .case_insensitive(self.contains(Flags::CASE_INSENSITIVE))
            .multi_line(self.contains(Flags::MULTI_LINE))
            .dot_matches_new_line(self.contains(Flags::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(self.contains(Flags::IGNORE_WHITESPACE))
            .swap_greed(self.contains(Flags::SWAP_GREED))
            .crlf(self.contains(Flags::CRLF))
            .unicode(!self.contains(Flags::ASCII));
    }
}

impl BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;
    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}
