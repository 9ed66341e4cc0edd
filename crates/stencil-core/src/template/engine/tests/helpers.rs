//! Shared test helpers for template engine tests

use serde_json::json;

use crate::template::engine::TemplateContext;

/// Context with basic scalar values
pub(super) fn simple_context() -> TemplateContext {
    TemplateContext::new(json!({
        "title": "Test Title",
        "count": 42,
        "ratio": 9.5,
        "enabled": true,
    }))
}

/// Context with services the way a status document would carry them
pub(super) fn services_context() -> TemplateContext {
    TemplateContext::new(json!({
        "serviceName": "Example Status",
        "hasServices": true,
        "services": [
            { "name": "API", "description": "REST API", "status": "operational" },
            { "name": "DB", "description": "Database", "status": "degraded" },
        ],
    }))
}
