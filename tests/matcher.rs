use named_capture::*;

const TAB_PATTERN: &str = "(?P<name>[^\t]+)\t(?P<file>[^\t]+)(\t(?P<address>[^\t]+))?";

fn tab_pattern() -> NamedPattern {
    NamedPattern::new(TAB_PATTERN).unwrap()
}

#[test]
fn find_true() {
    let pattern = tab_pattern();
    let mut matcher =
        pattern.matcher("name\tfile\taddress\tname2\tfile2\taddress2\tname3\tfile3\taddress3");

    assert!(matcher.find());
    assert_eq!(matcher.group(0), Ok(Some("name\tfile\taddress")));
    assert!(matcher.find());
    assert_eq!(matcher.group(0), Ok(Some("name2\tfile2\taddress2")));
    assert!(matcher.find());
    assert_eq!(matcher.group(0), Ok(Some("name3\tfile3\taddress3")));
    assert!(!matcher.find());
    assert!(!matcher.find());
}

#[test]
fn find_false() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("namefileaddress");
    assert!(!matcher.find());
    assert_eq!(matcher.group(0), Ok(None));
    assert_eq!(matcher.group_by_name("name"), None);
    assert_eq!(matcher.first_matched_named_group(), 0);
}

#[test]
fn find_at() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("n\tf\ta");

    assert_eq!(matcher.find_at(0), Ok(true));
    // starting at the 4th character, there is nothing left to match
    assert_eq!(matcher.find_at(3), Ok(false));
    assert_eq!(matcher.find_at(2), Ok(true));
    assert_eq!(matcher.group(0), Ok(Some("f\ta")));

    assert_eq!(
        matcher.find_at(6),
        Err(OutOfRangeError::Offset { offset: 6, len: 5 })
    );
}

#[test]
fn find_at_clears_region() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("a\tb c\td");
    matcher.region(0, 3).unwrap();
    assert_eq!(matcher.find_at(4), Ok(true));
    assert_eq!(matcher.group(0), Ok(Some("c\td")));
    assert_eq!(matcher.region_end(), 7);
}

#[test]
fn group_by_name() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS");

    assert!(matcher.find());
    assert_eq!(matcher.group_by_name("name"), Some("NAME"));
    assert_eq!(matcher.group_by_name("file"), Some("FILE"));
    assert_eq!(matcher.group_by_name("address"), Some("ADDRESS"));
    assert_eq!(matcher.group_by_name("test"), None);
    assert_eq!(matcher.group_by_name(""), None);
}

#[test]
fn group_by_name_not_participating() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE");

    assert!(matcher.find());
    assert_eq!(matcher.group_by_name("file"), Some("FILE"));
    assert_eq!(matcher.group_by_name("address"), None);
    assert_eq!(matcher.group(3), Ok(None));
    assert_eq!(matcher.start(4), Ok(None));
    assert_eq!(matcher.end(4), Ok(None));
}

#[test]
fn group_by_index() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS");

    assert!(matcher.find());
    assert_eq!(matcher.group(1), Ok(Some("NAME")));
    assert_eq!(matcher.group(2), Ok(Some("FILE")));
    assert_eq!(matcher.group(3), Ok(Some("\tADDRESS")));
    assert_eq!(matcher.group(4), Ok(Some("ADDRESS")));
}

#[test]
fn group_index_out_of_range() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS");

    let expected = Err(OutOfRangeError::Group {
        index: 5,
        group_count: 4,
    });
    // also before the first find
    assert_eq!(matcher.group(5), expected);

    assert!(matcher.find());
    assert_eq!(matcher.group(5), expected);
    assert!(matcher.start(5).is_err());
    assert!(matcher.end(usize::MAX).is_err());
    assert!(matcher.name_for_group(5).is_err());
}

#[test]
fn group_count() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS");
    assert_eq!(matcher.group_count(), 4);
    assert!(matcher.find());
    assert_eq!(matcher.group_count(), 4);
}

#[test]
fn region() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("123N\tF\tA789");

    matcher.region(3, 8).unwrap();
    assert!(matcher.find());
    assert_eq!(matcher.group(0), Ok(Some("N\tF\tA")));
    assert_eq!(matcher.start(0), Ok(Some(3)));
    assert_eq!(matcher.end(0), Ok(Some(8)));
    assert_eq!(matcher.group_by_name("address"), Some("A"));

    matcher.region(0, 2).unwrap();
    assert!(!matcher.find());

    matcher.region(8, 10).unwrap();
    assert!(!matcher.find());

    matcher.reset();
    assert!(matcher.find());
    assert_eq!(matcher.group(0), Ok(Some("123N\tF\tA789")));
}

#[test]
fn region_out_of_range() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("abc");

    assert_eq!(
        matcher.region(2, 4),
        Err(OutOfRangeError::Region {
            start: 2,
            end: 4,
            len: 3
        })
    );
    assert_eq!(
        matcher.region(2, 1),
        Err(OutOfRangeError::Region {
            start: 2,
            end: 1,
            len: 3
        })
    );

    let mut matcher = pattern.matcher("ä\tö");
    assert_eq!(
        matcher.region(1, 3),
        Err(OutOfRangeError::NotCharBoundary { offset: 1 })
    );
    assert_eq!(
        matcher.find_at(4),
        Err(OutOfRangeError::NotCharBoundary { offset: 4 })
    );
}

#[test]
fn region_anchors() {
    let pattern = NamedPattern::new(r"^(?P<word>\w+)$").unwrap();
    let mut matcher = pattern.matcher("one two three");
    assert!(!matcher.find());

    matcher.region(4, 7).unwrap();
    assert!(matcher.find());
    assert_eq!(matcher.group_by_name("word"), Some("two"));
    assert_eq!(matcher.start(1), Ok(Some(4)));
}

#[test]
fn start_end() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS\t");

    assert!(matcher.find());
    assert_eq!(matcher.start(1), Ok(Some(0)));
    assert_eq!(matcher.end(1), Ok(Some(4)));
    assert_eq!(matcher.start(2), Ok(Some(5)));
    assert_eq!(matcher.end(2), Ok(Some(9)));
    assert_eq!(matcher.start(4), Ok(Some(10)));
    assert_eq!(matcher.end(4), Ok(Some(17)));
}

#[test]
fn first_matched_named_group() {
    let pattern = NamedPattern::new("([^\t]+)\t(?P<file>[^\t]+)(\t(?P<address>[^\t]+))?").unwrap();
    let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS\t");

    assert_eq!(matcher.first_matched_named_group(), 0);
    assert!(matcher.find());
    assert_eq!(matcher.first_matched_named_group(), 2);
}

#[test]
fn first_matched_named_group_alternatives() {
    let pattern = NamedPattern::new(r"(?P<number>\d+)|(?P<word>[a-z]+)|(\s+)").unwrap();
    let mut matcher = pattern.matcher("42 abc");
    let mut fired = vec![];
    while matcher.find() {
        let index = matcher.first_matched_named_group();
        fired.push(matcher.name_for_group(index).unwrap());
    }
    assert_eq!(fired, ["number", "", "word"]);
}

#[test]
fn name_for_group() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE\tADDRESS\t");

    assert!(matcher.find());
    assert_eq!(matcher.name_for_group(0), Ok(""));
    assert_eq!(matcher.name_for_group(1), Ok("name"));
    assert_eq!(matcher.name_for_group(2), Ok("file"));
    assert_eq!(matcher.name_for_group(4), Ok("address"));
}

#[test]
fn named_groups() {
    let pattern = tab_pattern();
    let mut matcher = pattern.matcher("NAME\tFILE");
    assert!(matcher.find());
    let groups: Vec<_> = matcher.named_groups().collect();
    assert_eq!(
        groups,
        [
            ("name", Some("NAME")),
            ("file", Some("FILE")),
            ("address", None)
        ]
    );
}

#[test]
fn duplicate_names_resolve_to_first() {
    let pattern = NamedPattern::new(r"(?P<x>a)(?P<x>b)").unwrap();
    let mut matcher = pattern.matcher("ab");
    assert!(matcher.find());
    assert_eq!(matcher.group_by_name("x"), Some("a"));
    assert_eq!(matcher.group(2), Ok(Some("b")));
}

#[test]
fn empty_matches_advance() {
    let pattern = NamedPattern::new(r"(?P<digits>\d*)").unwrap();
    let mut matcher = pattern.matcher("1äb22");
    let mut found = vec![];
    while matcher.find() {
        found.push((matcher.start(0).unwrap(), matcher.group_by_name("digits")));
    }
    assert_eq!(
        found,
        [
            (Some(0), Some("1")),
            (Some(1), Some("")),
            (Some(3), Some("")),
            (Some(4), Some("22")),
            (Some(6), Some("")),
        ]
    );
}

#[test]
fn matchers_are_independent() {
    let pattern = tab_pattern();
    let mut first = pattern.matcher("a\tb\tc\td\te");
    let mut second = pattern.matcher("x\ty");

    assert!(first.find());
    assert!(second.find());
    assert!(first.find());
    assert!(!second.find());

    assert_eq!(first.group_by_name("name"), Some("d"));
    assert_eq!(first.group_by_name("file"), Some("e"));
    assert_eq!(second.group_by_name("name"), None);
}
