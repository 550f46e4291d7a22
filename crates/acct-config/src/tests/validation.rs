use crate::ValidationConfig;

use googletest::prelude::*;

#[test]
fn given_default_validation_config_when_validate_then_ok() {
    let config = ValidationConfig::default();
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_zero_max_field_length_when_validate_then_error() {
    let config = ValidationConfig {
        max_field_length: 0,
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_huge_max_field_length_when_validate_then_error() {
    let config = ValidationConfig {
        max_field_length: 1_000_000,
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("max_field_length"));
}

#[test]
fn given_boundary_values_when_validate_then_ok() {
    for max_field_length in [1, 4096] {
        let config = ValidationConfig { max_field_length };
        assert_that!(config.validate(), ok(anything()));
    }
}
