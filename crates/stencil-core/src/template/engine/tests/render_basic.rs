//! Basic rendering tests - variable substitution and passthrough

use serde_json::json;

use super::helpers::simple_context;
use super::*;

#[test]
fn test_render_simple_substitution() {
    let context = TemplateContext::new(json!({ "title": "Test" }));
    let result = process_template("<h1>{{title}}</h1>", &context).unwrap();
    assert_eq!(result, "<h1>Test</h1>");
}

#[test]
fn test_render_multiple_variables() {
    let context = TemplateContext::new(json!({
        "title": "Test Title",
        "content": "Test Content",
    }));
    let result = process_template("<h1>{{title}}</h1><p>{{content}}</p>", &context).unwrap();
    assert_eq!(result, "<h1>Test Title</h1><p>Test Content</p>");
}

#[test]
fn test_render_variable_with_spaces() {
    let context = simple_context();
    let result = process_template("Title: {{ title }}", &context).unwrap();
    assert_eq!(result, "Title: Test Title");
}

#[test]
fn test_render_integer_value() {
    let context = simple_context();
    let result = process_template("Count: {{count}}", &context).unwrap();
    assert_eq!(result, "Count: 42");
}

#[test]
fn test_render_float_value() {
    let context = simple_context();
    let result = process_template("Ratio: {{ratio}}", &context).unwrap();
    assert_eq!(result, "Ratio: 9.5");
}

#[test]
fn test_render_boolean_value() {
    let context = simple_context();
    let result = process_template("Enabled: {{enabled}}", &context).unwrap();
    assert_eq!(result, "Enabled: true");
}

#[test]
fn test_render_unmatched_variable_left_literal() {
    let context = TemplateContext::new(json!({ "title": "Test Title" }));
    let result = process_template("<h1>{{title}}</h1><p>{{missing}}</p>", &context).unwrap();
    assert_eq!(result, "<h1>Test Title</h1><p>{{missing}}</p>");
}

#[test]
fn test_render_empty_context_leaves_tokens() {
    let context = TemplateContext::default();
    let result = process_template("<h1>{{title}}</h1>", &context).unwrap();
    assert_eq!(result, "<h1>{{title}}</h1>");
}

#[test]
fn test_render_null_value_left_literal() {
    let context = TemplateContext::new(json!({ "title": null }));
    let result = process_template("{{title}}", &context).unwrap();
    assert_eq!(result, "{{title}}");
}

#[test]
fn test_render_composite_value_left_literal() {
    let context = TemplateContext::new(json!({
        "list": [1, 2],
        "obj": { "a": 1 },
    }));
    let result = process_template("{{list}}|{{obj}}", &context).unwrap();
    assert_eq!(result, "{{list}}|{{obj}}");
}

#[test]
fn test_render_literal_token_keeps_spacing() {
    let context = TemplateContext::default();
    let result = process_template("{{ missing }}", &context).unwrap();
    assert_eq!(result, "{{ missing }}");
}

#[test]
fn test_render_no_tags_passthrough() {
    let context = simple_context();
    let source = "This is plain text with no tags.";
    assert_eq!(process_template(source, &context).unwrap(), source);
}

#[test]
fn test_render_tag_free_text_is_unchanged() {
    // Idempotence: text without block or variable tags passes through
    // byte-for-byte, stray braces and non-grammar spans included
    let context = simple_context();
    for source in [
        "",
        "plain",
        "{ not } a { tag }",
        "{{a.b}}",
        "{{not a tag}}",
        "{{{x}}}",
        "unterminated {{ stays",
        "lonely } brace",
    ] {
        assert_eq!(process_template(source, &context).unwrap(), source);
    }
}

#[test]
fn test_render_substituted_values_are_not_reparsed() {
    // Template syntax arriving through data must come out verbatim
    let context = TemplateContext::new(json!({
        "title": "{{#if x}}injected{{/if}}",
        "x": true,
    }));
    let result = process_template("<h1>{{title}}</h1>", &context).unwrap();
    assert_eq!(result, "<h1>{{#if x}}injected{{/if}}</h1>");
}
