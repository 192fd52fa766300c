#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Applied,
    Skipped(SkipReason),
    Failed(Failure),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Capture protocol exhausted its attempts without an accepted
    /// selection. A defined outcome, not an error.
    NoSelection,
    /// Activation arrived while a previous flow was still running.
    Busy,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The transcoded text could not be written to the clipboard; the flow
    /// aborts before pasting so the user's selection stays untouched.
    ClipboardWrite,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoSelection => "no_selection",
            SkipReason::Busy => "busy",
        }
    }
}
