use repolens::github::queries::{build_search_query, language_qualifier};

#[test]
fn test_text_and_user() {
    let q = build_search_query("octocat", "widget", None);
    assert_eq!(q, "widget user:octocat fork:true");
}

#[test]
fn test_language_only() {
    let q = build_search_query("octocat", "", Some("Rust"));
    assert_eq!(q, "user:octocat fork:true language:Rust");
}

#[test]
fn test_text_and_language() {
    let q = build_search_query("octocat", "cli tool", Some("Go"));
    assert_eq!(q, "cli tool user:octocat fork:true language:Go");
}

#[test]
fn test_text_is_trimmed() {
    let q = build_search_query("octocat", "  widget  ", None);
    assert_eq!(q, "widget user:octocat fork:true");
}

#[test]
fn test_blank_language_omitted() {
    let q = build_search_query("octocat", "widget", Some("   "));
    assert_eq!(q, "widget user:octocat fork:true");
}

#[test]
fn test_cpp_gets_safe_token() {
    assert_eq!(language_qualifier("C++"), "language:Cpp");
    let q = build_search_query("octocat", "", Some("C++"));
    assert_eq!(q, "user:octocat fork:true language:Cpp");
}

#[test]
fn test_csharp_gets_safe_token() {
    assert_eq!(language_qualifier("C#"), "language:Csharp");
}

#[test]
fn test_multiword_language_is_quoted() {
    assert_eq!(
        language_qualifier("Jupyter Notebook"),
        "language:\"Jupyter Notebook\""
    );
}

#[test]
fn test_plain_language_unchanged() {
    assert_eq!(language_qualifier("Rust"), "language:Rust");
}
