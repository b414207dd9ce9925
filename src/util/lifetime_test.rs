use super::*;

#[test]
fn fresh_token_is_live() {
    assert!(!ScreenToken::new().is_cancelled());
}

#[test]
fn cancel_is_observed_by_every_clone() {
    let token = ScreenToken::new();
    let held_by_request = token.clone();
    assert!(!held_by_request.is_cancelled());

    token.cancel();
    assert!(held_by_request.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let token = ScreenToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}
