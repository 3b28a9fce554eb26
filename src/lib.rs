#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::bare_urls
)]
#![doc = include_str!("../README.md")]
//! # How Names Are Resolved
//!
//! A pattern is scanned once from left to right. Every unescaped `(` that opens a capture group
//! gets an entry in a name table, in the order in which the regex engine numbers its groups:
//! the name for `(?P<name>...)`, and `""` for a plain `(...)`. Non-capturing constructs like
//! `(?:...)` or `(?i)` get no entry. All names are then stripped, and the plain pattern is
//! compiled by the regex engine:
//! ```
//! use named_capture::NamedPattern;
//!
//! let pattern = NamedPattern::new(r"(?P<a>x)(?:y)(z)(?P<b>w)").unwrap();
//! assert_eq!(pattern.stripped_pattern(), r"(x)(?:y)(z)(w)");
//! assert_eq!(pattern.names().iter().collect::<Vec<_>>(), ["", "a", "", "b"]);
//! ```
//!
//! # Failing Soft and Failing Hard
//!
//! Everything that takes a group *name* treats an unknown or empty name as a normal case and
//! returns `None`. Everything that takes a group *index* returns an [`OutOfRangeError`] if the
//! index is larger than [`group_count`](NamedPattern::group_count), since that is a bug in the
//! calling code rather than a property of the pattern.

mod error;
pub use error::*;

mod names;
pub use names::*;

pub mod rewrite;

mod flags;
pub use flags::*;

mod pattern;
pub use pattern::*;

mod matcher;
pub use matcher::*;

mod macros;

#[doc(hidden)]
pub use lazy_static;
