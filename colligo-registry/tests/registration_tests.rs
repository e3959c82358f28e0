//! Integration tests for the registration error taxonomy

use colligo_registry::*;

#[test]
fn test_register_scenario_reports_three_fields_in_order() {
    let mut registry = UserRegistry::new();
    let error = registry
        .register("ab", "ab.example.com", "12345")
        .unwrap_err();

    let errors = error.as_multi().expect("validation pass should aggregate");
    assert_eq!(errors.len(), 3);

    let collected: Vec<(&str, &str)> = errors
        .iter()
        .map(|e| {
            let validation = e.as_validation().expect("field error");
            (validation.field(), validation.message())
        })
        .collect();

    assert_eq!(
        collected,
        vec![
            ("username", "must be at least 3 characters"),
            ("email", "must contain '@'"),
            ("password", "must be at least 8 characters"),
        ]
    );
}

#[test]
fn test_classification_priority() {
    let mut registry = UserRegistry::new();
    registry
        .register("alice", "alice@example.com", "s3cretpass")
        .unwrap();

    let duplicate = registry
        .register("alice", "alice2@example.com", "s3cretpass")
        .unwrap_err();
    assert_eq!(
        classify(&duplicate),
        Classification::Sentinel(Sentinel::UserExists)
    );

    let invalid = registry.register("al", "alice3@example.com", "s3cretpass").unwrap_err();
    assert_eq!(
        classify(&invalid),
        Classification::Multi(vec![Classification::Validation {
            field: "username".to_string(),
            message: "must be at least 3 characters".to_string(),
        }])
    );
}

#[test]
fn test_sentinel_survives_multiple_wrap_layers() {
    let mut registry = UserRegistry::new();
    let error = registry
        .update_email(3, "x@example.com")
        .wrap_err("profile page")
        .wrap_err("request 42")
        .unwrap_err();

    assert!(error.is(Sentinel::UserNotFound));
    assert_eq!(error.contexts(), vec!["request 42", "profile page", "user id 3"]);
    assert_eq!(describe(&error), vec!["no such user"]);
}

#[test]
fn test_multi_error_contains_sentinel_after_batch() {
    let mut registry = UserRegistry::new();
    let mut batch = MultiError::new();

    for (username, email) in [
        ("alice", "alice@example.com"),
        ("alice", "dup@example.com"),
        ("bob", "bob@example.com"),
    ] {
        batch.check(
            registry
                .register(username, email, "s3cretpass")
                .map(|_| ())
                .wrap_err_with(|| format!("row '{username}'")),
        );
    }

    assert_eq!(batch.len(), 1);
    assert!(batch.contains(Sentinel::UserExists));
    assert!(!batch.contains(Sentinel::WeakPassword));
    assert!(batch.into_result().is_err());
}

#[test]
fn test_registry_config_from_toml() {
    let config: ValidationConfig = toml::from_str(
        r#"
min_username_len = 5
max_username_len = 12
min_password_len = 10
"#,
    )
    .unwrap();

    let mut registry = UserRegistry::with_config(config).unwrap();
    let error = registry
        .register("abcd", "abcd@example.com", "123456789")
        .unwrap_err();
    assert_eq!(
        error.as_multi().unwrap().fields(),
        vec!["username", "password"]
    );
}

#[test]
fn test_report_serializes() {
    let mut registry = UserRegistry::new();
    let report = handle_registration(&mut registry, "bob", "bob@example.com", "s3cretpass");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["subject"], "bob");
    assert_eq!(json["success"], true);
}
