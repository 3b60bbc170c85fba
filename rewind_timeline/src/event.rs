/// A unit of simulation change that can be applied forward and undone
/// backward.
///
/// Events mutate state owned by the host; the timeline only decides when the
/// forward or backward action runs, never what it does.
pub trait TimelineEvent {
    /// Apply the event's change.
    ///
    /// `is_main_timeline` is true when the owning frame is the frame
    /// currently on the main timeline at its index, and false when the frame
    /// is being replayed as part of a parallel branch. Implementations that
    /// perform one-shot side effects should check the flag so that branch
    /// replays don't repeat them.
    ///
    /// This method must be deterministic.
    fn apply_forward(&mut self, is_main_timeline: bool);

    /// Undo the event's change.
    ///
    /// Called with the same flag semantics as
    /// [apply_forward](Self::apply_forward). Must exactly invert it.
    fn apply_backward(&mut self, is_main_timeline: bool);
}
