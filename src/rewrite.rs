//! Conversion of a pattern with named groups into one with only numbered groups.

use crate::{GroupNames, PatternSyntaxError};

/// The result of [`rewrite`]: a pattern without group names, and the names it had.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The pattern with every named group opening replaced by a plain `(`
    pub stripped: String,
    /// The group names, aligned with the group numbers of `stripped`
    pub names: GroupNames,
}

/// Check that `marker` can be used in the `(?<marker><name>` syntax.
fn validate_marker(marker: &str) -> Result<(), PatternSyntaxError> {
    let valid = !marker.is_empty()
        && marker
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(PatternSyntaxError::InvalidMarker(marker.to_owned()))
    }
}

/// Scan `pattern` for capture group openings and strip the names of named groups.
///
/// An unescaped `(` opens a capture group if it is followed by anything other than `?`, or if
/// it is followed by `?<marker><name>` where `<name>` runs up to the next `>`. Every other `(?`
/// construct (`(?:`, `(?i)`, lookarounds, named groups with a different marker...) is left
/// untouched and gets no entry in the name table.
///
/// ```
/// use named_capture::rewrite::rewrite;
///
/// let rewrite = rewrite(r"(?P<year>\d{4})-(?:\d\d)-(\d\d)", "P").unwrap();
/// assert_eq!(rewrite.stripped, r"(\d{4})-(?:\d\d)-(\d\d)");
/// assert_eq!(rewrite.names.iter().collect::<Vec<_>>(), ["", "year", ""]);
/// assert_eq!(rewrite.names.named_count(), 1);
/// ```
pub fn rewrite(pattern: &str, marker: &str) -> Result<Rewrite, PatternSyntaxError> {
    validate_marker(marker)?;

    let bytes = pattern.as_bytes();
    let mut stripped = String::with_capacity(pattern.len());
    let mut names = GroupNames::new();

    // everything before `copied` has already been written to `stripped`
    let mut copied = 0;
    // number of consecutive backslashes directly before `i`
    let mut escapes = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                escapes += 1;
                i += 1;
                continue;
            }
            b'(' if escapes % 2 == 0 => match bytes.get(i + 1) {
                None => {} // dangling `(`, left for the engine to reject
                Some(b'?') => {
                    let name_start = i + 2 + marker.len() + 1;
                    let is_named = pattern[i + 2..].starts_with(marker)
                        && bytes.get(name_start - 1) == Some(&b'<');
                    if is_named {
                        match pattern[name_start..].find('>') {
                            Some(0) => {
                                return Err(PatternSyntaxError::EmptyGroupName { position: i })
                            }
                            Some(len) => {
                                names.push_named(&pattern[name_start..name_start + len]);

                                stripped.push_str(&pattern[copied..i]);
                                stripped.push('(');
                                copied = name_start + len + 1;

                                escapes = 0;
                                i = copied;
                                continue;
                            }
                            None => {} // unterminated name, left for the engine to reject
                        }
                    }
                }
                Some(_) => names.push_unnamed(),
            },
            _ => {}
        }
        escapes = 0;
        i += 1;
    }
    stripped.push_str(&pattern[copied..]);

    Ok(Rewrite { stripped, names })
}
