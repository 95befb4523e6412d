//! Tests for db::repository::error module.

use contacts_api::api::ContactId;
use contacts_api::db::repository::{ErrorContext, RepositoryError};

#[test]
fn test_error_context_new() {
    let ctx = ErrorContext::new("create_contact");
    assert_eq!(ctx.operation, Some("create_contact".to_string()));
    assert!(ctx.entity.is_none());
    assert!(ctx.entity_id.is_none());
    assert!(ctx.details.is_none());
    assert!(!ctx.retryable);
}

#[test]
fn test_error_context_chaining() {
    let ctx = ErrorContext::new("update_contact")
        .with_entity("contact")
        .with_entity_id(42)
        .with_details("timeout occurred")
        .retryable();

    assert_eq!(ctx.operation, Some("update_contact".to_string()));
    assert_eq!(ctx.entity, Some("contact".to_string()));
    assert_eq!(ctx.entity_id, Some("42".to_string()));
    assert_eq!(ctx.details, Some("timeout occurred".to_string()));
    assert!(ctx.retryable);
}

#[test]
fn test_error_context_display() {
    let ctx = ErrorContext::new("delete_contact")
        .with_entity("contact")
        .with_entity_id("7")
        .with_details("extra info")
        .retryable();

    let display = ctx.to_string();
    assert!(display.contains("operation=delete_contact"));
    assert!(display.contains("entity=contact"));
    assert!(display.contains("id=7"));
    assert!(display.contains("details=extra info"));
    assert!(display.contains("retryable=true"));
}

#[test]
fn test_error_context_default_is_empty() {
    let ctx = ErrorContext::default();
    assert!(ctx.operation.is_none());
    assert!(!ctx.retryable);
    assert_eq!(ctx.to_string(), "[]");
}

#[test]
fn test_repository_error_messages() {
    let cases = [
        (RepositoryError::connection("pool exhausted"), "Connection error"),
        (RepositoryError::query("bad column"), "Query error"),
        (RepositoryError::not_found("gone"), "Not found"),
        (RepositoryError::validation("null phone"), "validation error"),
        (RepositoryError::configuration("no url"), "Configuration error"),
        (RepositoryError::internal("join failed"), "Internal error"),
    ];

    for (err, prefix) in cases {
        assert!(
            err.to_string().contains(prefix),
            "{} should contain {}",
            err,
            prefix
        );
    }
}

#[test]
fn test_repository_error_connection_with_context() {
    let ctx = ErrorContext::new("connect").with_entity("database");
    let err = RepositoryError::connection_with_context("failed to connect", ctx);
    let err_str = err.to_string();
    assert!(err_str.contains("failed to connect"));
    assert!(err_str.contains("operation=connect"));
}

#[test]
fn test_contact_not_found() {
    let err = RepositoryError::contact_not_found("delete_contact", ContactId::new(9));
    assert!(err.is_not_found());
    assert!(!err.is_retryable());

    let ctx = err.context();
    assert_eq!(ctx.operation.as_deref(), Some("delete_contact"));
    assert_eq!(ctx.entity.as_deref(), Some("contact"));
    assert_eq!(ctx.entity_id.as_deref(), Some("9"));
    assert!(err.to_string().contains("Contact 9 not found"));
}

#[test]
fn test_retryable_follows_context() {
    assert!(RepositoryError::connection("down").is_retryable());
    assert!(
        RepositoryError::connection_with_context("down", ErrorContext::new("get_conn"))
            .is_retryable()
    );
    assert!(!RepositoryError::query("syntax error").is_retryable());

    let query = RepositoryError::query_with_context(
        "serialization failure",
        ErrorContext::new("update_contact").retryable(),
    );
    assert!(query.is_retryable());
}

#[test]
fn test_non_transient_errors_are_not_retryable() {
    assert!(!RepositoryError::not_found("missing").is_retryable());
    assert!(!RepositoryError::validation("invalid").is_retryable());
    assert!(!RepositoryError::configuration("bad").is_retryable());
}

#[test]
fn test_with_operation_overrides_context() {
    let err = RepositoryError::not_found_with_context("missing", ErrorContext::new("get_contact"))
        .with_operation("update_contact");
    assert_eq!(err.context().operation.as_deref(), Some("update_contact"));
    assert!(err.to_string().contains("operation=update_contact"));
}
