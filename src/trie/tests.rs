use super::{InsertError, PathTrie};

#[test]
fn test_literal_round_trip() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "foo", "bar", "baz"], 1).unwrap();

    assert_eq!(trie.lookup(&["GET", "foo"]), None);
    assert_eq!(trie.lookup(&["GET", "foo", "bar"]), None);
    assert_eq!(trie.lookup(&["GET", "foo", "bar", "baz"]), Some(&1));
}

#[test]
fn test_shorter_route_after_longer() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "foo", "bar", "baz"], 1).unwrap();

    assert_eq!(trie.lookup(&["GET", "foo", "bar"]), None);

    // Registering the shorter prefix afterwards must not disturb the
    // longer registration.
    trie.insert(&["GET", "foo", "bar"], 2).unwrap();

    assert_eq!(trie.lookup(&["GET", "foo", "bar"]), Some(&2));
    assert_eq!(trie.lookup(&["GET", "foo", "bar", "baz"]), Some(&1));
}

#[test]
fn test_empty_segment_list_targets_root() {
    let mut trie = PathTrie::new();
    trie.insert(&[], 3).unwrap();

    assert_eq!(trie.lookup(&[]), Some(&3));
    assert_eq!(trie.lookup(&["foo"]), None);
}

#[test]
fn test_dynamic_matches_any_single_segment() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "foo", ":bar", "baz"], 1).unwrap();

    assert_eq!(trie.lookup(&["GET", "foo"]), None);
    assert_eq!(trie.lookup(&["GET", "foo", "anything"]), None);
    assert_eq!(trie.lookup(&["GET", "foo", "anything", "baz"]), Some(&1));
    assert_eq!(trie.lookup(&["GET", "foo", "12345", "baz"]), Some(&1));

    // One segment each: dynamic does not absorb a remainder.
    assert_eq!(trie.lookup(&["GET", "foo", "a", "b", "baz"]), None);
}

#[test]
fn test_dynamic_is_capture_agnostic() {
    let mut trie = PathTrie::new();
    // Different parameter names at the same position share one slot; only
    // the trailing literal distinguishes these templates.
    trie.insert(&["GET", "foo", ":name", "baz"], 1).unwrap();
    trie.insert(&["GET", "foo", ":other", "foo"], 2).unwrap();

    assert_eq!(trie.lookup(&["GET", "foo", "x", "baz"]), Some(&1));
    assert_eq!(trie.lookup(&["GET", "foo", "x", "foo"]), Some(&2));
    assert_eq!(trie.lookup(&["GET", "foo", "x", "bar"]), None);
}

#[test]
fn test_literal_beats_dynamic() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "users", ":id"], 1).unwrap();
    trie.insert(&["GET", "users", "me"], 2).unwrap();

    assert_eq!(trie.lookup(&["GET", "users", "me"]), Some(&2));
    assert_eq!(trie.lookup(&["GET", "users", "42"]), Some(&1));
}

#[test]
fn test_wildcard_precedence() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "foo", "*"], 1).unwrap();
    trie.insert(&["GET", "foo", "bar"], 2).unwrap();
    trie.insert(&["GET", "foo"], 3).unwrap();

    // Exact match wins over the catch-all.
    assert_eq!(trie.lookup(&["GET", "foo", "bar"]), Some(&2));
    // Unmatched sibling falls back to the catch-all.
    assert_eq!(trie.lookup(&["GET", "foo", "baz"]), Some(&1));
    // The catch-all does not shadow the node it hangs off.
    assert_eq!(trie.lookup(&["GET", "foo"]), Some(&3));
    // The catch-all absorbs an arbitrarily long remainder.
    assert_eq!(trie.lookup(&["GET", "foo", "a", "b", "c"]), Some(&1));
}

#[test]
fn test_root_catch_all() {
    let mut trie = PathTrie::new();
    trie.insert(&["*"], 404).unwrap();
    trie.insert(&["foo", "bar", ":name", "hi"], 1).unwrap();

    assert_eq!(trie.lookup(&["foo", "bar", "baz", "hi"]), Some(&1));
    assert_eq!(trie.lookup(&["foo"]), Some(&404));
    assert_eq!(trie.lookup(&["foo", "bar"]), Some(&404));
    assert_eq!(trie.lookup(&["nope"]), Some(&404));
    // Longer than any registered route still falls back.
    assert_eq!(trie.lookup(&["foo", "bar", "baz", "hi", "extra"]), Some(&404));
}

#[test]
fn test_deepest_wildcard_wins() {
    let mut trie = PathTrie::new();
    trie.insert(&["*"], 1).unwrap();
    trie.insert(&["a", "*"], 2).unwrap();
    trie.insert(&["a", "b", "c"], 3).unwrap();

    assert_eq!(trie.lookup(&["a", "b", "c"]), Some(&3));
    // The walk advances past the catch-all at "a" into the "b" branch and
    // dead-ends there; the fallback is the deepest catch-all seen, not the
    // root one.
    assert_eq!(trie.lookup(&["a", "b", "z"]), Some(&2));
    assert_eq!(trie.lookup(&["a", "b", "c", "d"]), Some(&2));
    assert_eq!(trie.lookup(&["z", "b"]), Some(&1));
}

#[test]
fn test_empty_segments_are_literal() {
    let mut trie = PathTrie::new();
    trie.insert(&["foo", "", "bar"], 1).unwrap();

    // An empty segment is an exact key, not a skip marker.
    assert_eq!(trie.lookup(&["foo", "bar"]), None);
    assert_eq!(trie.lookup(&["foo", "", "bar"]), Some(&1));
}

#[test]
fn test_wildcard_must_be_last() {
    let mut trie = PathTrie::new();
    let err = trie.insert(&["foo", "*", "bar"], 1).unwrap_err();

    assert_eq!(
        err,
        InsertError::WildcardNotLast {
            template: "foo/*/bar".to_string()
        }
    );
    assert!(err
        .to_string()
        .contains("wildcard segments must be the last segment"));

    // The failed insert must not leave a partial registration behind.
    assert_eq!(trie.lookup(&["foo", "x", "bar"]), None);
}

#[test]
fn test_wildcard_only_once_per_node() {
    let mut trie = PathTrie::new();
    trie.insert(&["foo", "*"], 1).unwrap();
    let err = trie.insert(&["foo", "*"], 2).unwrap_err();

    assert_eq!(
        err,
        InsertError::WildcardTaken {
            template: "foo/*".to_string()
        }
    );
    assert!(err
        .to_string()
        .contains("wildcard segments can only be used once"));

    // The original registration survives the rejected one.
    assert_eq!(trie.lookup(&["foo", "anything"]), Some(&1));
}

#[test]
fn test_duplicate_route_rejected() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "foo"], 1).unwrap();
    let err = trie.insert(&["GET", "foo"], 2).unwrap_err();

    assert_eq!(
        err,
        InsertError::DuplicateRoute {
            template: "GET/foo".to_string()
        }
    );
    assert!(err.to_string().contains("duplicate route detected"));

    // No silent overwrite.
    assert_eq!(trie.lookup(&["GET", "foo"]), Some(&1));
}

#[test]
fn test_dynamic_and_literal_share_a_node() {
    let mut trie = PathTrie::new();
    // Registering a literal and a dynamic template through the same node is
    // legal; only exact duplicates are rejected.
    trie.insert(&["GET", "foo", ":id"], 1).unwrap();
    trie.insert(&["GET", "foo", ":id", "edit"], 2).unwrap();

    assert_eq!(trie.lookup(&["GET", "foo", "7"]), Some(&1));
    assert_eq!(trie.lookup(&["GET", "foo", "7", "edit"]), Some(&2));
}

#[test]
fn test_methods_partition_the_tree() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "widgets"], 1).unwrap();
    trie.insert(&["POST", "widgets"], 2).unwrap();

    assert_eq!(trie.lookup(&["GET", "widgets"]), Some(&1));
    assert_eq!(trie.lookup(&["POST", "widgets"]), Some(&2));
    assert_eq!(trie.lookup(&["DELETE", "widgets"]), None);
}

#[test]
fn test_reserved_spellings_do_not_collide() {
    let mut trie = PathTrie::new();
    trie.insert(&["GET", "files", ":name"], 1).unwrap();

    // A request segment literally spelled ":name" or "*" is just text; it
    // matches through the dynamic slot like any other value.
    assert_eq!(trie.lookup(&["GET", "files", ":name"]), Some(&1));
    assert_eq!(trie.lookup(&["GET", "files", "*"]), Some(&1));
}
