use serde_json::json;

use super::fixtures::*;
use crate::config::PanelConfig;
use crate::error::LoadError;
use crate::panel::{LoadOutcome, LoadSequence, PanelState, PanelStatus};

fn panel() -> PanelState {
    PanelState::new(PanelConfig::default())
}

#[test]
fn test_sequence_issues_increasing_tickets() {
    let mut seq = LoadSequence::new();
    let a = seq.issue();
    let b = seq.issue();
    assert!(b > a);
    assert_eq!(b.value(), a.value() + 1);
}

#[test]
fn test_begin_sets_loading_without_touching_view() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    state.begin(seq.issue());
    assert_eq!(
        state.status(),
        &PanelStatus::Loading("Loading client details...".to_string())
    );
    assert!(state.view().is_none());
    assert!(!state.is_visible());
}

#[test]
fn test_success_renders_and_shows_modal() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    let ticket = seq.issue();
    state.begin(ticket);

    let outcome = state.finish(ticket, Ok(acme_detail()));
    assert_eq!(outcome, LoadOutcome::Rendered);
    assert_eq!(state.status(), &PanelStatus::Idle);
    assert!(state.is_visible());
    assert_eq!(state.view().map(|v| v.name.as_str()), Some("Acme"));
}

#[test]
fn test_server_failure_keeps_previous_fields_and_visibility() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    let first = seq.issue();
    state.begin(first);
    state.finish(first, Ok(acme_detail()));
    let before = state.view().cloned();

    let second = seq.issue();
    state.begin(second);
    let outcome = state.finish(second, Err(LoadError::Server { status: 500 }));

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(
        state.status().message(),
        Some("Unable to load client details. Please try again.")
    );
    assert_eq!(state.view().cloned(), before);
    assert!(state.is_visible());
}

#[test]
fn test_failure_while_hidden_does_not_open_modal() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    for error in [
        LoadError::Transport("connection refused".to_string()),
        LoadError::Server { status: 404 },
        LoadError::Parse("expected value at line 1".to_string()),
    ] {
        let ticket = seq.issue();
        state.begin(ticket);
        assert_eq!(state.finish(ticket, Err(error)), LoadOutcome::Failed);
        assert!(state.status().is_failed());
        assert!(!state.is_visible());
        assert!(state.view().is_none());
    }
}

#[test]
fn test_late_response_from_older_click_is_discarded() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    let older = seq.issue();
    state.begin(older);
    let newer = seq.issue();
    state.begin(newer);

    let newer_detail = detail_from(json!({ "name": "Bayanihan Foods" }));
    assert_eq!(state.finish(newer, Ok(newer_detail)), LoadOutcome::Rendered);
    assert_eq!(state.finish(older, Ok(acme_detail())), LoadOutcome::Stale);
    assert_eq!(state.view().map(|v| v.name.as_str()), Some("Bayanihan Foods"));
}

#[test]
fn test_stale_failure_does_not_replace_loading_message() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    let older = seq.issue();
    state.begin(older);
    let newer = seq.issue();
    state.begin(newer);

    let outcome = state.finish(older, Err(LoadError::Server { status: 500 }));
    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(state.status().is_loading());
}

#[test]
fn test_begin_for_superseded_ticket_is_ignored() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    let older = seq.issue();
    let newer = seq.issue();
    state.begin(newer);
    state.begin(older);
    assert_eq!(state.latest(), Some(newer));
}

#[test]
fn test_close_discards_record() {
    let mut seq = LoadSequence::new();
    let mut state = panel();
    let ticket = seq.issue();
    state.begin(ticket);
    state.finish(ticket, Ok(acme_detail()));

    state.close();
    assert!(!state.is_visible());
    assert!(state.view().is_none());
}

#[test]
fn test_error_codes_for_diagnostics() {
    assert_eq!(LoadError::Server { status: 503 }.code(), "HTTP_503");
    assert_eq!(LoadError::Transport("x".into()).code(), "NETWORK_ERROR");
    assert!(LoadError::Parse("x".into()).is_parse());
    assert!(LoadError::Server { status: 500 }.is_server());
    assert!(LoadError::Transport("x".into()).is_transport());
}
