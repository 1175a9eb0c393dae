use std::collections::BTreeMap;

use chrono::{Duration, Utc};

use mitto_core::AppError;
use mitto_domain::Provider;

use super::{CloseOutcome, CredentialEditor, EditorState};
use crate::NoticeKind;

fn instagram_settings() -> BTreeMap<String, String> {
    BTreeMap::from([
        // Masked placeholder, as the backend obscures stored tokens.
        ("accessToken".to_owned(), "\u{2022}\u{2022}\u{2022}\u{2022}7bFt".to_owned()),
        ("businessAccountId".to_owned(), "17841400000000001".to_owned()),
    ])
}

fn open_instagram(editor: &mut CredentialEditor) {
    assert!(editor.open(Provider::Instagram));
    editor.apply_fetch_result(Provider::Instagram, Ok(instagram_settings()));
}

#[test]
fn masked_secret_becomes_empty_editable_field() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);

    let form = editor.form().unwrap_or_else(|| panic!("form should be open"));
    assert_eq!(form.value("accessToken"), Some(""));
    assert!(form.is_masked("accessToken"));
    assert_eq!(form.value("businessAccountId"), Some("17841400000000001"));
    assert!(!form.is_masked("businessAccountId"));
}

#[test]
fn long_plaintext_secret_is_shown_verbatim() {
    let mut editor = CredentialEditor::new();
    assert!(editor.open(Provider::Instagram));
    let token = "eyJhbGciOiJSUzI1NiJ9.xxxxxxxxxxxxxxxxxxxxx";
    editor.apply_fetch_result(
        Provider::Instagram,
        Ok(BTreeMap::from([("accessToken".to_owned(), token.to_owned())])),
    );

    let form = editor.form().unwrap_or_else(|| panic!("form should be open"));
    assert_eq!(form.value("accessToken"), Some(token));
    assert!(!form.is_masked("accessToken"));
}

#[test]
fn second_open_is_rejected_while_a_modal_is_up() {
    let mut editor = CredentialEditor::new();
    assert!(editor.open(Provider::Instagram));
    assert!(!editor.open(Provider::Brevo));
    assert_eq!(editor.provider(), Some(Provider::Instagram));
}

#[test]
fn fetch_failure_degrades_to_an_empty_form() {
    let now = Utc::now();
    let mut editor = CredentialEditor::new();
    assert!(editor.open(Provider::Brevo));
    editor.apply_fetch_result(Provider::Brevo, Err(AppError::Network("timeout".to_owned())));

    let form = editor.form().unwrap_or_else(|| panic!("form should be open"));
    assert_eq!(form.value("apiKey"), Some(""));
    assert!(!form.is_masked("apiKey"));
    assert!(editor.notice(now).is_none());
}

#[test]
fn late_fetch_response_after_close_is_dropped() {
    let mut editor = CredentialEditor::new();
    assert!(editor.open(Provider::Instagram));
    assert_eq!(editor.request_close(), CloseOutcome::Closed);

    editor.apply_fetch_result(Provider::Instagram, Ok(instagram_settings()));
    assert!(matches!(editor.state(), EditorState::Closed));
}

#[test]
fn fetch_response_for_a_different_provider_is_dropped() {
    let mut editor = CredentialEditor::new();
    assert!(editor.open(Provider::Facebook));
    editor.apply_fetch_result(Provider::Instagram, Ok(instagram_settings()));
    assert!(matches!(editor.state(), EditorState::Opening { .. }));
}

#[test]
fn readonly_and_unknown_fields_reject_edits() {
    let mut editor = CredentialEditor::new();
    assert!(editor.open(Provider::GoHighLevel));
    editor.apply_fetch_result(Provider::GoHighLevel, Ok(BTreeMap::new()));

    assert!(!editor.edit("locationId", "loc_123"));
    assert!(!editor.edit("nonsense", "x"));
    assert!(editor.edit("apiKey", "ghl_live_key_0123456789abcdef"));
}

#[test]
fn save_payload_omits_untouched_masked_secrets() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);

    assert!(editor.edit("businessAccountId", "17841400000000002"));
    let (provider, payload) = editor
        .begin_save()
        .unwrap_or_else(|| panic!("save should start"));

    assert_eq!(provider, Provider::Instagram);
    // The masked token was never retyped, so it stays out of the payload.
    assert!(!payload.contains_key("accessToken"));
    assert_eq!(
        payload.get("businessAccountId").map(String::as_str),
        Some("17841400000000002")
    );
}

#[test]
fn retyped_secret_is_included_in_the_payload() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);

    assert!(editor.edit("accessToken", "EAAGnew-token-value-0123456789"));
    let (_, payload) = editor
        .begin_save()
        .unwrap_or_else(|| panic!("save should start"));
    assert_eq!(
        payload.get("accessToken").map(String::as_str),
        Some("EAAGnew-token-value-0123456789")
    );
    // The untouched text field still rides along in schema order.
    assert_eq!(
        payload.get("businessAccountId").map(String::as_str),
        Some("17841400000000001")
    );
}

#[test]
fn save_requires_a_dirty_form() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);
    assert!(editor.begin_save().is_none());
}

#[test]
fn successful_save_returns_to_editing_with_a_success_notice() {
    let now = Utc::now();
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);
    editor.edit("businessAccountId", "17841400000000002");
    let _payload = editor.begin_save();

    assert!(editor.complete_save(Ok(()), now));
    assert!(matches!(editor.state(), EditorState::Ready(_)));

    let form = editor.form().unwrap_or_else(|| panic!("form should be open"));
    assert!(!form.is_dirty());
    assert!(
        editor
            .notice(now)
            .is_some_and(|notice| notice.kind() == NoticeKind::Success)
    );
    assert!(editor.notice(now + Duration::seconds(10)).is_none());

    // The form is clean again, so the close control needs no confirmation.
    assert_eq!(editor.request_close(), CloseOutcome::Closed);
    assert!(matches!(editor.state(), EditorState::Closed));
}

#[test]
fn failed_save_returns_to_editing_with_edits_intact() {
    let now = Utc::now();
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);
    editor.edit("businessAccountId", "17841400000000002");
    let _payload = editor.begin_save();

    assert!(!editor.complete_save(Err(AppError::Api("invalid account".to_owned())), now));
    let form = editor.form().unwrap_or_else(|| panic!("form should be open"));
    assert_eq!(form.value("businessAccountId"), Some("17841400000000002"));
    assert!(form.is_dirty());
    assert_eq!(
        editor.notice(now).map(crate::Notice::message),
        Some("invalid account")
    );
}

#[test]
fn closing_a_clean_form_needs_no_confirmation() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);
    assert_eq!(editor.request_close(), CloseOutcome::Closed);
    assert!(matches!(editor.state(), EditorState::Closed));
}

#[test]
fn closing_a_dirty_form_requires_confirmation() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);
    editor.edit("businessAccountId", "changed");

    assert_eq!(editor.request_close(), CloseOutcome::ConfirmRequested);
    assert!(matches!(editor.state(), EditorState::ConfirmDiscard(_)));

    // A repeated close while the prompt is up changes nothing.
    assert_eq!(editor.request_close(), CloseOutcome::Ignored);

    editor.cancel_close();
    let form = editor.form().unwrap_or_else(|| panic!("form should be open"));
    assert_eq!(form.value("businessAccountId"), Some("changed"));
    assert!(form.is_dirty());
}

#[test]
fn confirmed_discard_closes_and_drops_edits() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);
    editor.edit("businessAccountId", "changed");
    editor.request_close();
    editor.discard_and_close();
    assert!(matches!(editor.state(), EditorState::Closed));

    // Reopening starts from the fetched values, not the discarded edits.
    open_instagram(&mut editor);
    let form = editor.form().unwrap_or_else(|| panic!("form should be open"));
    assert_eq!(form.value("businessAccountId"), Some("17841400000000001"));
}

#[test]
fn close_is_ignored_while_saving() {
    let mut editor = CredentialEditor::new();
    open_instagram(&mut editor);
    editor.edit("businessAccountId", "changed");
    let _payload = editor.begin_save();

    assert_eq!(editor.request_close(), CloseOutcome::Ignored);
    assert!(matches!(editor.state(), EditorState::Saving(_)));
    assert!(!editor.edit("businessAccountId", "changed again"));
}
