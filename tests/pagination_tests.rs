use repolens::github::pagination::has_next_page;

#[test]
fn test_next_and_last() {
    let link = r#"<https://api.github.com/user/repos?page=2>; rel="next", <https://api.github.com/user/repos?page=5>; rel="last""#;
    assert!(has_next_page(link));
}

#[test]
fn test_next_only() {
    let link = r#"<https://api.github.com/user/repos?page=2>; rel="next""#;
    assert!(has_next_page(link));
}

#[test]
fn test_next_not_first_entry() {
    let link = r#"<https://api.github.com/user/repos?page=1>; rel="prev", <https://api.github.com/user/repos?page=1>; rel="first", <https://api.github.com/user/repos?page=3>; rel="next""#;
    assert!(has_next_page(link));
}

#[test]
fn test_no_next_relation() {
    let link = r#"<https://api.github.com/user/repos?page=1>; rel="prev", <https://api.github.com/user/repos?page=1>; rel="first""#;
    assert!(!has_next_page(link));
}

#[test]
fn test_last_page() {
    let link = r#"<https://api.github.com/user/repos?page=4>; rel="prev", <https://api.github.com/user/repos?page=1>; rel="first""#;
    assert!(!has_next_page(link));
}

#[test]
fn test_empty_string() {
    assert!(!has_next_page(""));
}

#[test]
fn test_whitespace_around_semicolon() {
    let link = "<https://api.github.com/user/repos?page=2> ;  rel=\"next\"";
    assert!(has_next_page(link));
}

#[test]
fn test_unquoted_relation() {
    let link = "<https://api.github.com/user/repos?page=2>; rel=next";
    assert!(has_next_page(link));
}

#[test]
fn test_extra_parameters() {
    let link = "<https://api.github.com/user/repos?page=2>; title=\"page two\"; rel=\"next\"";
    assert!(has_next_page(link));
}

#[test]
fn test_malformed_no_url_brackets() {
    assert!(!has_next_page("https://example.com; rel=\"next\""));
}

#[test]
fn test_malformed_no_rel() {
    assert!(!has_next_page("<https://example.com>"));
}

#[test]
fn test_rel_next_substring_does_not_match() {
    // "next-ish" relations must not count.
    let link = "<https://example.com>; rel=\"nexturl\"";
    assert!(!has_next_page(link));
}

#[test]
fn test_garbage_input() {
    assert!(!has_next_page("rel=next"));
    assert!(!has_next_page(",,,"));
    assert!(!has_next_page("   "));
}
