//! A file with the macro definitions to separate the documentation from the crate root docs

/// Compile a [`NamedPattern`](crate::NamedPattern) once and return a `&'static` reference to it.
///
/// ## Signature
/// ```ignore
/// named_pattern!(pattern: &str) -> &'static NamedPattern
/// named_pattern!(pattern: &str, marker: &str) -> &'static NamedPattern
/// ```
///
/// The pattern is compiled the first time the macro invocation is evaluated. Every later
/// evaluation of the same invocation returns the same pattern, which makes it suitable for
/// functions that are called in a loop.
///
/// ## Panics
/// If the pattern does not compile. Patterns used with this macro are usually literals, so an
/// invalid pattern is a programming error.
///
/// ## Examples
/// ```
/// use named_capture::named_pattern;
///
/// fn parse_line(line: &str) -> Option<(&str, &str)> {
///     let pattern = named_pattern!(r"^(?P<key>\w+)\s*=\s*(?P<value>.*)$");
///     let mut matcher = pattern.matcher(line);
///     if !matcher.find() {
///         return None;
///     }
///     Some((matcher.group_by_name("key")?, matcher.group_by_name("value")?))
/// }
///
/// assert_eq!(parse_line("color = blue"), Some(("color", "blue")));
/// assert_eq!(parse_line("# comment"), None);
///
/// let custom = named_pattern!(r"(?N<n>\d+)", "N");
/// assert_eq!(custom.group_index("n"), Some(1));
/// ```
#[macro_export]
macro_rules! named_pattern {
    ($pattern:expr $(,)?) => {
        $crate::named_pattern!($pattern, $crate::DEFAULT_MARKER)
    };
    ($pattern:expr, $marker:expr $(,)?) => {{
        $crate::lazy_static::lazy_static! {
            static ref PATTERN: $crate::NamedPattern = {
                let source: &str = $pattern;
                match $crate::NamedPattern::with_marker(source, $marker) {
                    ::std::result::Result::Ok(pattern) => pattern,
                    ::std::result::Result::Err(err) => ::std::panic!(
                        "named_capture: invalid pattern {:?}: {}",
                        source,
                        err
                    ),
                }
            };
        }
        let pattern: &'static $crate::NamedPattern = &PATTERN;
        pattern
    }};
}
