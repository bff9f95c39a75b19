//! End-to-end tests for phone number fields

mod common;

use common::{full_phone_input, phone_input};
use masked_input::Key;

// ========================================================================
// Typing
// ========================================================================

#[test]
fn test_typing_first_four_digits() {
    let mut t = phone_input();
    t.type_text("5551");

    assert_eq!(t.formatted_history(), vec!["5", "55", "555", "555-1"]);
    for state in t.emissions.borrow().iter() {
        assert!(!state.valid);
        assert_eq!(state.error_message, "");
    }
    assert_eq!(t.display(), "555-1|");
}

#[test]
fn test_blur_reports_incomplete_number() {
    let mut t = phone_input();
    t.type_text("5551");
    t.blur();

    let last = t.last_emission();
    assert_eq!(last.formatted, "555-1");
    assert!(!last.valid);
    assert_eq!(last.error_message, "Phone number must be 10 digits");
    assert!(t.state().shows_error());
}

#[test]
fn test_complete_number_is_valid() {
    let mut t = phone_input();
    t.type_text("5551234567");

    let last = t.last_emission();
    assert_eq!(last.canonical, "5551234567");
    assert_eq!(last.numeric, 5_551_234_567.0);
    assert_eq!(last.formatted, "555-123-4567");
    assert!(last.valid);
    assert_eq!(t.display(), "555-123-4567|");

    t.blur();
    assert_eq!(t.last_emission().error_message, "");
    assert!(t.state().shows_valid_indicator());
}

#[test]
fn test_second_separator_appears_at_seventh_digit() {
    let mut t = phone_input();
    t.type_text("555123");
    assert_eq!(t.display(), "555-123|");
    t.type_text("4");
    assert_eq!(t.display(), "555-123-4|");
}

#[test]
fn test_typed_separators_and_letters_are_dropped() {
    let mut t = phone_input();
    t.type_text("555-x1");
    assert_eq!(t.state().canonical, "5551");
    assert_eq!(t.text(), "555-1");
}

#[test]
fn test_typing_clears_blur_error() {
    let mut t = phone_input();
    t.type_text("55");
    t.blur();
    assert!(t.state().shows_error());

    t.type_text("5");
    assert_eq!(t.last_emission().error_message, "");
    assert!(!t.state().shows_error());
}

// ========================================================================
// Overflow
// ========================================================================

#[test]
fn test_eleventh_digit_is_rejected() {
    let mut t = full_phone_input(12);
    let emitted_before = t.emission_count();
    let state_before = t.state();

    t.type_text("8");

    assert_eq!(t.notices(), vec!["Phone number can only be 10 digits!"]);
    assert_eq!(t.emission_count(), emitted_before);
    assert_eq!(t.state(), state_before);
    assert_eq!(t.text(), "555-123-4567");
}

#[test]
fn test_digit_inserted_mid_number_is_rejected_too() {
    let mut t = full_phone_input(4);
    t.type_text("9");

    assert_eq!(t.notices().len(), 1);
    assert_eq!(t.display(), "555-|123-4567");
    assert_eq!(t.state().canonical, "5551234567");
}

#[test]
fn test_rejected_digit_keeps_caret_for_next_edit() {
    // "555-123|-4567"
    let mut t = full_phone_input(7);
    t.type_text("0");
    assert_eq!(t.display(), "555-123|-4567");

    t.press(Key::Backspace);
    assert_eq!(t.display(), "555-12|4-567");
}

#[test]
fn test_editing_continues_after_overflow() {
    let mut t = full_phone_input(12);
    t.type_text("8");
    t.press(Key::End);
    t.press(Key::Backspace);

    assert_eq!(t.last_emission().formatted, "555-123-456");
    assert_eq!(t.display(), "555-123-456|");
}

// ========================================================================
// Clearing
// ========================================================================

#[test]
fn test_clearing_resets_state() {
    let mut t = phone_input();
    t.type_text("1");
    t.press(Key::Backspace);

    let last = t.last_emission();
    assert_eq!(last.canonical, "");
    assert_eq!(last.numeric, 0.0);
    assert_eq!(last.formatted, "");
    assert!(!last.valid);
    assert_eq!(last.error_message, "");
    assert_eq!(t.display(), "|");
}

#[test]
fn test_clearing_after_blur_drops_error() {
    let mut t = phone_input();
    t.type_text("1");
    t.blur();
    t.press(Key::Backspace);

    assert_eq!(t.last_emission().error_message, "");
}

// ========================================================================
// Keys without edits
// ========================================================================

#[test]
fn test_enter_does_not_edit_or_emit() {
    let mut t = phone_input();
    t.type_text("555");
    let count = t.emission_count();

    t.press(Key::Enter);

    assert_eq!(t.emission_count(), count);
    assert_eq!(t.input.field().last_key(), Some(Key::Enter));
    assert_eq!(t.text(), "555");
}

#[test]
fn test_tab_blurs() {
    let mut t = phone_input();
    t.type_text("555");
    t.press_named("Tab");

    assert_eq!(
        t.last_emission().error_message,
        "Phone number must be 10 digits"
    );
}

#[test]
fn test_blur_on_empty_field_reports_error() {
    let mut t = phone_input();
    t.blur();

    let last = t.last_emission();
    assert_eq!(last.formatted, "");
    assert_eq!(last.error_message, "Phone number must be 10 digits");
}
