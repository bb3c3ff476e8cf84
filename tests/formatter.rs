//! Selection-aware formatting through the public API

use format_toolbar::compute_formatted_value;

fn upper(s: &str) -> String {
    s.to_uppercase()
}

#[test]
fn test_selection_prefix() {
    assert_eq!(
        compute_formatted_value("hello world", Some(0), Some(5), upper),
        "HELLO world"
    );
}

#[test]
fn test_caret_formats_whole_value() {
    assert_eq!(
        compute_formatted_value("hello world", Some(3), Some(3), upper),
        "HELLO WORLD"
    );
}

#[test]
fn test_full_selection_equals_whole_value() {
    let text = "mixed Case";
    let len = text.chars().count();
    assert_eq!(
        compute_formatted_value(text, Some(0), Some(len), upper),
        compute_formatted_value(text, None, None, upper)
    );
}

#[test]
fn test_input_is_not_mutated() {
    let text = String::from("keep me");
    let result = compute_formatted_value(&text, Some(0), Some(4), upper);
    assert_eq!(text, "keep me");
    assert_eq!(result, "KEEP me");
}

#[test]
fn test_empty_value() {
    assert_eq!(compute_formatted_value("", None, None, |_| "x".to_string()), "x");
    assert_eq!(compute_formatted_value("", Some(0), Some(0), upper), "");
}

#[test]
fn test_prefix_and_suffix_verbatim() {
    let result = compute_formatted_value("<a> b <c>", Some(4), Some(5), |s| format!("[{s}]"));
    assert_eq!(result, "<a> [b] <c>");
}
