use std::time::Duration;

use crate::domain::capture::{CapturePolicy, capture_selection};
use crate::tests::fakes::{CopyEffect, FakeClipboard, FakeKeys};

/// Production attempt/poll counts with zero delays.
fn fast_policy() -> CapturePolicy {
    CapturePolicy {
        select_delay: Duration::ZERO,
        copy_delay: Duration::ZERO,
        poll_interval: Duration::ZERO,
        ..CapturePolicy::default()
    }
}

#[test]
fn unchanged_clipboard_is_rejected_through_all_attempts() {
    let clip = FakeClipboard::with_text("X");
    let keys = FakeKeys::new(&clip);
    // Every copy leaves the stale content in place.

    let captured = capture_selection(&clip, &keys, &fast_policy());

    assert_eq!(captured, None);
    assert_eq!(keys.select_alls.get(), 3);
    assert_eq!(keys.copies.get(), 3);
}

#[test]
fn fresh_text_is_accepted_on_the_first_attempt() {
    let clip = FakeClipboard::with_text("X");
    let keys = FakeKeys::new(&clip);
    keys.script_copies([CopyEffect::Set("Xyz")]);

    let captured = capture_selection(&clip, &keys, &fast_policy());

    assert_eq!(captured.as_deref(), Some("Xyz"));
    // No further retries after an accepted attempt.
    assert_eq!(keys.copies.get(), 1);
}

#[test]
fn single_character_content_is_noise() {
    let clip = FakeClipboard::empty();
    let keys = FakeKeys::new(&clip);
    keys.script_copies([
        CopyEffect::Set("y"),
        CopyEffect::Set("y"),
        CopyEffect::Set("y"),
    ]);

    assert_eq!(capture_selection(&clip, &keys, &fast_policy()), None);
    assert_eq!(keys.copies.get(), 3);
}

#[test]
fn empty_prior_clipboard_accepts_any_real_selection() {
    let clip = FakeClipboard::empty();
    let keys = FakeKeys::new(&clip);
    keys.script_copies([CopyEffect::Set("hello")]);

    let captured = capture_selection(&clip, &keys, &fast_policy());

    assert_eq!(captured.as_deref(), Some("hello"));
}

#[test]
fn second_attempt_can_succeed_after_a_silent_first_copy() {
    let clip = FakeClipboard::with_text("stale");
    let keys = FakeKeys::new(&clip);
    keys.script_copies([CopyEffect::Leave, CopyEffect::Set("fresh text")]);

    let captured = capture_selection(&clip, &keys, &fast_policy());

    assert_eq!(captured.as_deref(), Some("fresh text"));
    assert_eq!(keys.copies.get(), 2);
}

#[test]
fn polling_absorbs_a_late_clipboard_update() {
    let clip = FakeClipboard::empty();
    let keys = FakeKeys::new(&clip);
    // Text becomes visible only on the fourth poll of the attempt.
    keys.script_copies([CopyEffect::SetDelayed("late text", 3)]);

    let captured = capture_selection(&clip, &keys, &fast_policy());

    assert_eq!(captured.as_deref(), Some("late text"));
    assert_eq!(keys.copies.get(), 1);
}

#[test]
fn update_later_than_the_poll_budget_is_caught_by_the_next_attempt() {
    let clip = FakeClipboard::empty();
    let keys = FakeKeys::new(&clip);
    // Hidden for more reads than one attempt's five polls.
    keys.script_copies([CopyEffect::SetDelayed("very late", 7)]);

    let captured = capture_selection(&clip, &keys, &fast_policy());

    assert_eq!(captured.as_deref(), Some("very late"));
    assert_eq!(keys.copies.get(), 2);
}
