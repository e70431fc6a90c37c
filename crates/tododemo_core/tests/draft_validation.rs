use tododemo_core::{is_valid, validate, EditDraft, ValidationResult};

#[test]
fn empty_draft_reports_empty_title_only() {
    let result = validate(&EditDraft::new("", ""));
    assert_eq!(result.title_error.as_deref(), Some("Title cannot be empty"));
    assert_eq!(result.content_error, None);
    assert!(!result.is_valid());
}

#[test]
fn short_title_reports_minimum_length() {
    let result = validate(&EditDraft::new("ab", ""));
    assert_eq!(
        result.title_error.as_deref(),
        Some("Title must be at least 3 characters")
    );
}

#[test]
fn long_title_reports_maximum_length() {
    let result = validate(&EditDraft::new("t".repeat(51), ""));
    assert_eq!(
        result.title_error.as_deref(),
        Some("Title can't be more than 50 characters")
    );
}

#[test]
fn long_content_is_invalid_with_valid_title() {
    let draft = EditDraft::new("Valid Title", "x".repeat(121));
    let result = validate(&draft);

    assert_eq!(result.title_error, None);
    assert_eq!(
        result.content_error.as_deref(),
        Some("Description can't be longer than 120 characters")
    );
    assert!(!is_valid(&draft));
}

#[test]
fn both_fields_can_fail_together() {
    let result = validate(&EditDraft::new("", "x".repeat(121)));
    assert!(result.title_error.is_some());
    assert!(result.content_error.is_some());
}

#[test]
fn boundary_values_are_valid() {
    assert!(is_valid(&EditDraft::new("abc", "")));
    assert!(is_valid(&EditDraft::new("a".repeat(50), "c".repeat(120))));
    assert_eq!(
        validate(&EditDraft::new("Buy groceries", "Milk, eggs, bread")),
        ValidationResult::default()
    );
}
