//! Error and edge case tests

use serde_json::json;

use super::helpers::simple_context;
use super::*;
use crate::template::engine::parse::MAX_BLOCK_DEPTH;
use crate::template::error::TemplateError;

#[test]
fn test_error_unclosed_if() {
    let context = TemplateContext::new(json!({ "a": true }));
    let result = process_template("{{#if a}}no close", &context);
    match result {
        Err(TemplateError::Syntax { message, line }) => {
            assert!(message.contains("unclosed"), "message: {message}");
            assert_eq!(line, 1);
        }
        other => panic!("expected Syntax error, got {other:?}"),
    }
}

#[test]
fn test_error_unclosed_each() {
    let context = simple_context();
    let result = process_template("{{#each items}}{{name}}", &context);
    match result {
        Err(TemplateError::Syntax { message, .. }) => {
            assert!(message.contains("unclosed"));
        }
        other => panic!("expected Syntax error, got {other:?}"),
    }
}

#[test]
fn test_error_unclosed_block_reports_opening_line() {
    let context = simple_context();
    let result = process_template("line one\nline two\n{{#if a}}\nno close", &context);
    match result {
        Err(TemplateError::Syntax { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected Syntax error, got {other:?}"),
    }
}

#[test]
fn test_error_close_without_open() {
    let context = simple_context();
    assert!(matches!(
        process_template("text {{/if}}", &context),
        Err(TemplateError::Syntax { .. })
    ));
    assert!(matches!(
        process_template("text {{/each}}", &context),
        Err(TemplateError::Syntax { .. })
    ));
}

#[test]
fn test_error_else_outside_if() {
    let context = simple_context();
    let result = process_template("{{#else}}", &context);
    match result {
        Err(TemplateError::Syntax { message, .. }) => {
            assert!(message.contains("outside"), "message: {message}");
        }
        other => panic!("expected Syntax error, got {other:?}"),
    }
}

#[test]
fn test_error_else_inside_each() {
    let context = simple_context();
    let result = process_template("{{#each items}}{{#else}}{{/each}}", &context);
    assert!(matches!(result, Err(TemplateError::Syntax { .. })));
}

#[test]
fn test_error_duplicate_else() {
    let context = simple_context();
    let result = process_template("{{#if a}}x{{#else}}y{{#else}}z{{/if}}", &context);
    match result {
        Err(TemplateError::Syntax { message, .. }) => {
            assert!(message.contains("duplicate"), "message: {message}");
        }
        other => panic!("expected Syntax error, got {other:?}"),
    }
}

#[test]
fn test_error_block_tag_missing_name() {
    let context = simple_context();
    assert!(matches!(
        process_template("{{#if}}x{{/if}}", &context),
        Err(TemplateError::Syntax { .. })
    ));
    assert!(matches!(
        process_template("{{#each}}x{{/each}}", &context),
        Err(TemplateError::Syntax { .. })
    ));
}

#[test]
fn test_error_invalid_block_name() {
    let context = simple_context();
    let result = process_template("{{#if a.b}}x{{/if}}", &context);
    match result {
        Err(TemplateError::Syntax { message, .. }) => {
            assert!(message.contains("a.b"), "message: {message}");
        }
        other => panic!("expected Syntax error, got {other:?}"),
    }
}

#[test]
fn test_error_nesting_too_deep() {
    let depth = MAX_BLOCK_DEPTH + 1;
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("{{#if a}}");
    }
    for _ in 0..depth {
        source.push_str("{{/if}}");
    }

    let context = TemplateContext::new(json!({ "a": true }));
    let result = process_template(&source, &context);
    match result {
        Err(TemplateError::DepthExceeded { max, .. }) => assert_eq!(max, MAX_BLOCK_DEPTH),
        other => panic!("expected DepthExceeded, got {other:?}"),
    }
}

#[test]
fn test_nesting_at_limit_is_accepted() {
    let mut source = String::new();
    for _ in 0..MAX_BLOCK_DEPTH {
        source.push_str("{{#if a}}");
    }
    source.push('x');
    for _ in 0..MAX_BLOCK_DEPTH {
        source.push_str("{{/if}}");
    }

    let context = TemplateContext::new(json!({ "a": true }));
    assert_eq!(process_template(&source, &context).unwrap(), "x");
}

#[test]
fn test_check_template() {
    assert!(check_template("<h1>{{title}}</h1>").is_ok());
    assert!(check_template("{{#if a}}{{#each xs}}{{/each}}{{/if}}").is_ok());
    assert!(check_template("{{#if a}}no close").is_err());
    assert!(check_template("{{/each}}").is_err());
}
