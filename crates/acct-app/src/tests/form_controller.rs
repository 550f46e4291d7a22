use super::alice_input;
use crate::{FormController, FormInput, SubmitOutcome};

use acct_core::{FieldValidator, FormMode, SessionState};

use googletest::prelude::*;

fn controller(mode: FormMode, input: FormInput) -> FormController {
    let mut form = FormController::new(FieldValidator::default());
    form.set_mode(mode);
    form.set_input(input);
    form
}

#[test]
fn given_new_controller_then_login_mode_with_empty_input() {
    let form = FormController::new(FieldValidator::default());

    assert_that!(form.mode(), eq(FormMode::Login));
    assert_that!(form.input(), eq(&FormInput::default()));
}

#[test]
fn given_typed_input_when_mode_toggled_then_only_mode_changes() {
    let mut form = controller(FormMode::Login, alice_input());

    assert_that!(form.toggle_mode(), eq(FormMode::Register));
    assert_that!(form.toggle_mode(), eq(FormMode::Login));
    assert_that!(form.input(), eq(&alice_input()));
}

#[test]
fn given_login_mode_when_only_credentials_entered_then_valid() {
    let form = controller(FormMode::Login, FormInput::credentials("alice", "pw12345"));

    assert_that!(form.validate(), ok(anything()));
}

#[test]
fn given_login_mode_when_password_blank_then_validation_error() {
    let form = controller(FormMode::Login, FormInput::credentials("alice", "   "));

    let error = form.validate().unwrap_err();

    assert!(error.is_validation());
}

#[test]
fn given_register_mode_when_only_credentials_entered_then_validation_error() {
    let form = controller(FormMode::Register, FormInput::credentials("alice", "pw12345"));

    let error = form.validate().unwrap_err();

    assert!(error.is_validation());
    assert_that!(error.user_message(), eq("Please fill in all fields"));
}

#[test]
fn given_register_mode_when_phone_has_five_digits_then_invalid_phone() {
    let mut input = alice_input();
    input.contact_number = "12345".to_string();
    let form = controller(FormMode::Register, input);

    let error = form.validate().unwrap_err();

    assert_that!(error.user_message(), eq("Invalid phone number"));
}

#[test]
fn given_register_mode_when_complete_input_then_valid() {
    let form = controller(FormMode::Register, alice_input());

    assert_that!(form.validate(), ok(anything()));
}

#[test]
fn given_form_input_with_empty_picture_when_converted_then_no_picture() {
    let profile = alice_input().to_profile();

    assert_that!(profile.profile_picture, none());
    assert_that!(profile.username, eq("alice"));
}

#[test]
fn given_form_input_with_picture_when_converted_then_picture_kept() {
    let mut input = alice_input();
    input.profile_picture = "https://example.com/a.png".to_string();

    let profile = input.to_profile();

    assert_that!(profile.profile_picture, some(eq("https://example.com/a.png")));
}

#[test]
fn given_input_when_credentials_cleared_then_profile_fields_kept() {
    let mut form = controller(FormMode::Register, alice_input());

    form.clear_credentials();

    assert!(form.input().username.is_empty());
    assert!(form.input().password.is_empty());
    assert_that!(form.input().first_name, eq("Alice"));
}

#[test]
fn given_outcomes_then_messages_match_alerts() {
    let logged_in = SubmitOutcome::LoggedIn(SessionState::logged_out());
    let registered = SubmitOutcome::Registered {
        username: "alice".to_string(),
    };

    assert_that!(logged_in.message(), eq("Logged in successfully"));
    assert_that!(registered.message(), eq("Registration successful"));
}
