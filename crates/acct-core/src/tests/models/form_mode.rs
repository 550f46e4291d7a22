use crate::FormMode;

use std::str::FromStr;

#[test]
fn test_form_mode_as_str() {
    assert_eq!(FormMode::Login.as_str(), "login");
    assert_eq!(FormMode::Register.as_str(), "register");
}

#[test]
fn test_form_mode_from_str() {
    assert_eq!(FormMode::from_str("login").unwrap(), FormMode::Login);
    assert_eq!(FormMode::from_str("register").unwrap(), FormMode::Register);
    assert!(FormMode::from_str("signup").is_err());
}

#[test]
fn test_form_mode_default_is_login() {
    assert_eq!(FormMode::default(), FormMode::Login);
}

#[test]
fn test_form_mode_toggle_flips_between_modes() {
    assert_eq!(FormMode::Login.toggled(), FormMode::Register);
    assert_eq!(FormMode::Register.toggled(), FormMode::Login);
    assert_eq!(FormMode::Login.toggled().toggled(), FormMode::Login);
}

#[test]
fn test_form_mode_labels() {
    assert_eq!(FormMode::Login.submit_label(), "Sign In");
    assert_eq!(FormMode::Register.submit_label(), "Sign Up");
    assert_eq!(FormMode::Register.title(), "Create Account");
}
