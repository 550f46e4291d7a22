pub mod field_validator;
