use super::*;

#[test]
fn root_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/dashboard", "/"));
}

#[test]
fn trailing_slash_is_ignored() {
    assert!(is_active("/insights/", "/insights"));
    assert!(is_active("", "/"));
}

#[test]
fn nested_paths_do_not_match_parent() {
    assert!(!is_active("/chat/history", "/chat"));
}

#[test]
fn nav_covers_all_pages_in_order() {
    let names: Vec<&str> = NAV_ITEMS.iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Upload", "Dashboard", "Insights", "Chat"]);
    assert_eq!(NAV_ITEMS[0].href, "/");
}
