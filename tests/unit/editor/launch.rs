use super::*;

#[test]
fn remotion_anywhere_in_the_query_opens_the_registry() {
    assert_eq!(LaunchMode::from_query("?remotion"), LaunchMode::Registry);
    assert_eq!(LaunchMode::from_query("?mode=remotion&x=1"), LaunchMode::Registry);
    assert_eq!(LaunchMode::from_query("?studio=remotionx"), LaunchMode::Registry);
}

#[test]
fn everything_else_opens_the_editor() {
    assert_eq!(LaunchMode::from_query(""), LaunchMode::Editor);
    assert_eq!(LaunchMode::from_query("?mode=studio"), LaunchMode::Editor);
    assert_eq!(LaunchMode::from_query("?REMOTION"), LaunchMode::Editor);
}
