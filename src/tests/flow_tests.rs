use std::rc::Rc;
use std::time::Duration;

use tracing_test::traced_test;

use crate::domain::capture::CapturePolicy;
use crate::domain::flow::{BusyGuard, CorrectionFlow, FlowDelays};
use crate::domain::outcome::{Failure, FlowOutcome, SkipReason};
use crate::tests::fakes::{CopyEffect, FakeClipboard, FakeKeys, FakeSwitcher};

struct Harness {
    clip: Rc<FakeClipboard>,
    keys: Rc<FakeKeys>,
    switcher: Rc<FakeSwitcher>,
    flow: CorrectionFlow<Rc<FakeClipboard>, Rc<FakeKeys>, Rc<FakeSwitcher>>,
}

fn harness(prior_clipboard: Option<&str>) -> Harness {
    let clip = match prior_clipboard {
        Some(text) => FakeClipboard::with_text(text),
        None => FakeClipboard::empty(),
    };
    let keys = FakeKeys::new(&clip);
    let switcher = Rc::new(FakeSwitcher::default());

    let capture = CapturePolicy {
        select_delay: Duration::ZERO,
        copy_delay: Duration::ZERO,
        poll_interval: Duration::ZERO,
        ..CapturePolicy::default()
    };
    let delays = FlowDelays {
        paste_settle: Duration::ZERO,
        switch_settle: Duration::ZERO,
    };

    let flow = CorrectionFlow::with_policy(
        Rc::clone(&clip),
        Rc::clone(&keys),
        Rc::clone(&switcher),
        capture,
        delays,
    );

    Harness {
        clip,
        keys,
        switcher,
        flow,
    }
}

#[test]
fn latin_selection_is_retyped_as_arabic() {
    let h = harness(Some(""));
    h.keys.script_copies([CopyEffect::Set("hello")]);

    assert_eq!(h.flow.on_hotkey(), FlowOutcome::Applied);

    assert_eq!(h.clip.text().as_deref(), Some("اثممخ"));
    assert_eq!(h.keys.pastes.get(), 1);
    assert_eq!(h.switcher.requests.get(), 1);
}

#[test]
fn arabic_selection_is_retyped_as_lowercase_latin() {
    let h = harness(None);
    h.keys.script_copies([CopyEffect::Set("اثر")]);

    assert_eq!(h.flow.on_hotkey(), FlowOutcome::Applied);
    assert_eq!(h.clip.text().as_deref(), Some("hev"));
}

#[test]
fn double_b_selection_pastes_four_symbols() {
    let h = harness(None);
    h.keys.script_copies([CopyEffect::Set("bb")]);

    assert_eq!(h.flow.on_hotkey(), FlowOutcome::Applied);

    let written = h.clip.text().unwrap();
    assert_eq!(written, "لالا");
    assert_eq!(written.chars().count(), 4);
}

#[test]
fn no_selection_is_a_silent_noop() {
    let h = harness(Some("stale clipboard"));
    // All copies leave the clipboard unchanged.

    assert_eq!(
        h.flow.on_hotkey(),
        FlowOutcome::Skipped(SkipReason::NoSelection)
    );

    assert!(h.clip.writes.borrow().is_empty());
    assert_eq!(h.keys.pastes.get(), 0);
    assert_eq!(h.switcher.requests.get(), 0);
}

#[test]
fn clipboard_write_failure_aborts_before_pasting() {
    let h = harness(None);
    h.keys.script_copies([CopyEffect::Set("hello")]);
    h.clip.write_ok.set(false);

    assert_eq!(
        h.flow.on_hotkey(),
        FlowOutcome::Failed(Failure::ClipboardWrite)
    );

    assert_eq!(h.keys.pastes.get(), 0);
    assert_eq!(h.switcher.requests.get(), 0);
}

#[traced_test]
#[test]
fn paste_failure_is_logged_and_the_layout_still_switches() {
    let h = harness(None);
    h.keys.script_copies([CopyEffect::Set("hello")]);
    h.keys.paste_ok.set(false);

    assert_eq!(h.flow.on_hotkey(), FlowOutcome::Applied);

    assert!(logs_contain("paste injection failed"));
    assert_eq!(h.switcher.requests.get(), 1);
}

#[test]
fn flow_is_reusable_after_a_skip() {
    let h = harness(Some("stale"));
    assert_eq!(
        h.flow.on_hotkey(),
        FlowOutcome::Skipped(SkipReason::NoSelection)
    );

    // The busy guard was released; a later activation with a real
    // selection goes through.
    h.keys.script_copies([CopyEffect::Set("go on")]);
    assert_eq!(h.flow.on_hotkey(), FlowOutcome::Applied);
}

#[test]
fn busy_guard_drops_overlapping_activations() {
    let guard = BusyGuard::new();

    let token = guard.try_acquire().expect("idle guard acquires");
    // A second activation mid-flow is dropped, not queued.
    assert!(guard.try_acquire().is_none());
    assert!(guard.try_acquire().is_none());

    // Released on drop, even if the flow unwinds.
    drop(token);
    assert!(guard.try_acquire().is_some());
}
