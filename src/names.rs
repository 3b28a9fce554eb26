/// The names of all capture groups of a pattern, indexed by group number.
///
/// Index 0 stands for the whole match and is always `""`. Unnamed groups are `""` as well.
/// The same name may appear more than once, in which case lookups return the first index.
///
/// ```
/// use named_capture::NamedPattern;
///
/// let pattern = NamedPattern::new(r"(?P<key>\w+)=(\d+)(?P<unit>[a-z]+)?").unwrap();
/// let names = pattern.names();
/// assert_eq!(names.len(), 4);
/// assert_eq!(names.iter().collect::<Vec<_>>(), ["", "key", "", "unit"]);
/// assert_eq!(names.index_of("unit"), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNames {
    names: Vec<String>,
}

#[allow(clippy::len_without_is_empty)] // never empty, entry 0 always exists
impl GroupNames {
    pub(crate) fn new() -> Self {
        Self {
            names: vec![String::new()],
        }
    }

    pub(crate) fn push_unnamed(&mut self) {
        self.names.push(String::new());
    }

    pub(crate) fn push_named(&mut self, name: &str) {
        self.names.push(name.to_owned());
    }

    /// Number of entries, which is the number of capture groups plus one for group 0.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// The name of group `index`, or `None` if there is no such group.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The first group index carrying `name`. Empty names are never found.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.names.iter().position(|n| n == name)
    }

    /// Number of named groups. Duplicate names are counted separately.
    pub fn named_count(&self) -> usize {
        self.names.iter().filter(|n| !n.is_empty()).count()
    }

    /// All entries in group order, starting with group 0.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
