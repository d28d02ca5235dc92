// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{PATH_SEPARATOR, PathSplit, join_paths, split};

#[test]
fn test_split_keeps_empty_segments() {
    let segments: Vec<&str> = split("a:b::c:", ':').collect();
    assert_eq!(segments, ["a", "b", "", "c", ""]);
}

#[test]
fn test_split_empty_input() {
    assert_eq!(split("", ':').count(), 0);
}

#[test]
fn test_split_without_separator() {
    let segments: Vec<&str> = split("onlyone", ':').collect();
    assert_eq!(segments, ["onlyone"]);
}

#[test]
fn test_split_only_separators() {
    let segments: Vec<&str> = split(":", ':').collect();
    assert_eq!(segments, ["", ""]);
}

#[test]
fn test_split_multibyte_separator() {
    let segments: Vec<&str> = split("α→β→", '→').collect();
    assert_eq!(segments, ["α", "β", ""]);
}

#[test]
fn test_split_is_fused() {
    let mut segments = split("x", ':');
    assert_eq!(segments.next(), Some("x"));
    assert_eq!(segments.next(), None);
    assert_eq!(segments.next(), None);
}

#[test]
fn test_path_split_replays() {
    let path = PathSplit::new("/usr/local/bin:/usr/bin", ':');
    let first = path.to_vec();
    let second: Vec<&str> = (&path).into_iter().collect();

    assert_eq!(first, second);
    assert_eq!(path.value(), "/usr/local/bin:/usr/bin");
    assert_eq!(path.separator(), ':');
}

#[test]
fn test_join_paths() {
    let cases = [
        join_paths(["/usr/bin", "/bin"], ':'),
        join_paths(["/usr/bin", ""], ':'),
        join_paths(Vec::<String>::new(), ':'),
        join_paths(["", "", ""], ';'),
    ];
    assert_eq!(cases, ["/usr/bin:/bin", "/usr/bin", "", ";"]);
}

#[test]
fn test_join_then_split() {
    let joined = join_paths(["a", "b", "c"], PATH_SEPARATOR);
    let segments: Vec<&str> = split(&joined, PATH_SEPARATOR).collect();
    assert_eq!(segments, ["a", "b", "c"]);
}
