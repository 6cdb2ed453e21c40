// Tests for URL classification

use sitelens_core::classify::{HOME_TITLE, ROOT_SECTION, classify, url_host};

// ============================================================================
// Segment / Section Tests
// ============================================================================

#[test]
fn test_classify_simple_path() {
    let facets = classify("https://example.com/blog/2024/01/liquid-drop/");
    assert_eq!(facets.segments, vec!["blog", "2024", "01", "liquid-drop"]);
    assert_eq!(facets.section, "blog");
}

#[test]
fn test_classify_root_url() {
    let facets = classify("https://example.com/");
    assert!(facets.segments.is_empty());
    assert_eq!(facets.section, ROOT_SECTION);
    assert_eq!(facets.title, HOME_TITLE);
}

#[test]
fn test_classify_no_path() {
    let facets = classify("https://example.com");
    assert!(facets.segments.is_empty());
    assert_eq!(facets.section, ROOT_SECTION);
}

#[test]
fn test_classify_empty_components_removed() {
    let facets = classify("https://example.com//blog//post/");
    assert_eq!(facets.segments, vec!["blog", "post"]);
    assert_eq!(facets.section, "blog");
}

#[test]
fn test_classify_single_segment() {
    let facets = classify("https://example.com/about");
    assert_eq!(facets.segments, vec!["about"]);
    assert_eq!(facets.section, "about");
    assert_eq!(facets.title, "about");
}

#[test]
fn test_classify_query_and_fragment_ignored() {
    let facets = classify("https://example.com/blog/post?page=2#top");
    assert_eq!(facets.segments, vec!["blog", "post"]);
    assert_eq!(facets.title, "post");
}

// ============================================================================
// Category Tests
// ============================================================================

#[test]
fn test_classify_category() {
    let facets = classify("https://example.com/blog/category/Physics/");
    assert_eq!(facets.category, Some("physics".to_string()));
}

#[test]
fn test_classify_category_lowercased() {
    let facets = classify("https://example.com/category/RUST/");
    assert_eq!(facets.category, Some("rust".to_string()));
}

#[test]
fn test_classify_no_category() {
    let facets = classify("https://example.com/blog/2024/01/post/");
    assert_eq!(facets.category, None);
}

#[test]
fn test_classify_category_segment_without_value() {
    // A trailing literal "category" has nothing following it
    let facets = classify("https://example.com/blog/category/");
    assert_eq!(facets.category, None);
}

// ============================================================================
// Year/Month Tests
// ============================================================================

#[test]
fn test_classify_year_month() {
    let facets = classify("https://example.com/2024/01/post/");
    assert_eq!(facets.year_month, Some("2024/01".to_string()));
}

#[test]
fn test_classify_year_month_after_section() {
    let facets = classify("https://example.com/blog/2024/01/post/");
    assert_eq!(facets.year_month, Some("2024/01".to_string()));
}

#[test]
fn test_classify_year_month_deep_position_ignored() {
    // Date segments deeper than the second position do not count
    let facets = classify("https://example.com/blog/archive/2024/01/post/");
    assert_eq!(facets.year_month, None);
}

#[test]
fn test_classify_year_without_month() {
    let facets = classify("https://example.com/2024/post/");
    assert_eq!(facets.year_month, None);
}

#[test]
fn test_classify_year_month_wrong_widths() {
    let facets = classify("https://example.com/202/011/post/");
    assert_eq!(facets.year_month, None);
}

#[test]
fn test_classify_year_month_non_digits() {
    let facets = classify("https://example.com/abcd/ef/post/");
    assert_eq!(facets.year_month, None);
}

// ============================================================================
// Title Tests
// ============================================================================

#[test]
fn test_classify_title_hyphens_to_spaces() {
    let facets = classify("https://example.com/blog/liquid-drop-dynamics/");
    assert_eq!(facets.title, "liquid drop dynamics");
}

#[test]
fn test_classify_title_percent_decoded() {
    let facets = classify("https://example.com/blog/hello%20world/");
    assert_eq!(facets.title, "hello world");
}

#[test]
fn test_classify_title_decoded_then_dehyphenated() {
    let facets = classify("https://example.com/docs/api%2Dreference/");
    assert_eq!(facets.title, "api reference");
}

// ============================================================================
// Malformed Input Tests
// ============================================================================

#[test]
fn test_classify_malformed_url_degrades() {
    let facets = classify("not a valid url");
    assert!(facets.segments.is_empty());
    assert_eq!(facets.section, ROOT_SECTION);
    assert_eq!(facets.category, None);
    assert_eq!(facets.year_month, None);
    assert_eq!(facets.title, "not a valid url");
}

#[test]
fn test_classify_empty_string_degrades() {
    let facets = classify("");
    assert!(facets.segments.is_empty());
    assert_eq!(facets.section, ROOT_SECTION);
    assert_eq!(facets.title, "");
}

// ============================================================================
// Host Tests
// ============================================================================

#[test]
fn test_url_host() {
    assert_eq!(
        url_host("https://cdn.example.com/a.jpg"),
        Some("cdn.example.com".to_string())
    );
}

#[test]
fn test_url_host_with_port() {
    assert_eq!(
        url_host("http://localhost:3000/x"),
        Some("localhost".to_string())
    );
}

#[test]
fn test_url_host_invalid() {
    assert_eq!(url_host("not a url"), None);
}
