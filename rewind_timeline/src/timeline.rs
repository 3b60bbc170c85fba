use crate::{
    frame::{FrameArena, FrameId},
    TimelineError, TimelineEvent, TimelineFrame,
};

/// Bookkeeping for the main timeline and every parallel branch.
///
/// The manager owns an arena of frames and two views into it: the main
/// timeline, a stack of frames forming the currently live path with the
/// current frame on top, and the history, which records for every frame
/// index the set of frames ever created there and still retained. Advancing
/// pushes a fresh frame; rewinding pops one; time travel pops the top and
/// forks a fresh frame at the target index, leaving the frames in between as
/// a parallel branch that is kept in sync by replaying its events.
///
/// All mutating operations are silent no-ops when their preconditions fail,
/// so a host loop can call them speculatively. Each has a `try_` variant
/// that reports the rejection instead.
#[derive(Debug)]
pub struct TimelineManager {
    frames: FrameArena,
    /// Ids of the frames on the currently live path; top of stack = current.
    main_timeline: Vec<FrameId>,
    /// Entry `i` holds every retained frame created at index `i`, in
    /// creation order.
    history: Vec<Vec<FrameId>>,
    /// Debug stat counting successful forward advances.
    num_advances: usize,
    /// Debug stat counting branch-frame replays done to keep branches in
    /// sync.
    num_replays: usize,
}

impl TimelineManager {
    /// Create a manager holding a single empty frame at index 0.
    pub fn new() -> Self {
        let mut manager = Self {
            frames: FrameArena::default(),
            main_timeline: Vec::new(),
            history: Vec::new(),
            num_advances: 0,
            num_replays: 0,
        };
        manager
            .add_frame(0)
            .expect("frame 0 allocation cannot fail on an empty history");
        manager
    }

    /// Register an event on the current frame.
    ///
    /// Does nothing if the main timeline is empty. See
    /// [try_add_event](Self::try_add_event).
    pub fn add_event(&mut self, event: Box<dyn TimelineEvent>) {
        if let Err(error) = self.try_add_event(event) {
            tracing::debug!("add_event ignored: {}", error);
        }
    }

    /// Register an event on the current frame, or report why it was dropped.
    pub fn try_add_event(&mut self, event: Box<dyn TimelineEvent>) -> Result<(), TimelineError> {
        let &current = self
            .main_timeline
            .last()
            .ok_or(TimelineError::EmptyTimeline)?;
        self.frames.get_mut(current).add_event(event);
        Ok(())
    }

    /// Advance the simulation by one frame.
    ///
    /// Does nothing if the main timeline is empty. See
    /// [try_tick_forward](Self::try_tick_forward).
    pub fn tick_forward(&mut self) {
        if let Err(error) = self.try_tick_forward() {
            tracing::debug!("tick_forward ignored: {}", error);
        }
    }

    /// Advance the simulation by one frame, or report why it couldn't.
    ///
    /// A fresh frame is pushed at the next index, then every branch frame at
    /// the index just left is replayed forward; the main-timeline flag is
    /// true only for the frame that was on the live path there. The freshly
    /// pushed frame is not ticked; it accumulates events until the next
    /// advance.
    pub fn try_tick_forward(&mut self) -> Result<(), TimelineError> {
        let &current = self
            .main_timeline
            .last()
            .ok_or(TimelineError::EmptyTimeline)?;
        let current_number = self.frames.get(current).frame_number();
        self.add_frame(current_number + 1)?;

        self.replay_forward_at(current_number, Some(current));
        self.num_advances = self.num_advances.saturating_add(1);
        Ok(())
    }

    /// Rewind the simulation by one frame.
    ///
    /// Does nothing if the main timeline is empty. See
    /// [try_tick_backward](Self::try_tick_backward).
    pub fn tick_backward(&mut self) {
        if let Err(error) = self.try_tick_backward() {
            tracing::debug!("tick_backward ignored: {}", error);
        }
    }

    /// Rewind the simulation by one frame, or report why it couldn't.
    ///
    /// The current frame is discarded, then branch frames at every index
    /// from the discarded frame's up to the newly exposed frame's are
    /// replayed forward (off the main timeline) to keep their per-branch
    /// state caught up; finally every frame at the exposed index is ticked
    /// backward, with the main-timeline flag true only for the exposed frame
    /// itself.
    ///
    /// Rewinding the initial frame discards it and leaves the timeline
    /// empty; the discard persists even though an error is returned, and
    /// every later operation is rejected.
    pub fn try_tick_backward(&mut self) -> Result<(), TimelineError> {
        let removed = self
            .remove_current_frame()
            .ok_or(TimelineError::EmptyTimeline)?;
        let &last = self
            .main_timeline
            .last()
            .ok_or(TimelineError::EmptyTimeline)?;
        let last_number = self.frames.get(last).frame_number();

        // Empty on a plain rewind, where the removed frame sits past the
        // exposed one; non-empty after a backward time travel is popped.
        for index in removed.frame_number()..=last_number {
            self.replay_forward_at(index, None);
        }
        self.replay_backward_at(last_number, Some(last));
        Ok(())
    }

    /// Jump directly to an arbitrary frame index, forking a branch there.
    ///
    /// Does nothing if the main timeline is empty or the target is out of
    /// range. See [try_time_travel](Self::try_time_travel).
    pub fn time_travel(&mut self, frame_number: u32) {
        if let Err(error) = self.try_time_travel(frame_number) {
            tracing::debug!("time_travel ignored: {}", error);
        }
    }

    /// Jump directly to an arbitrary frame index, or report why it couldn't.
    ///
    /// The current frame is discarded and a fresh branch frame is created at
    /// the target index; history is never reused, so resuming from the
    /// target forks a new timeline. Branch frames between the old and new
    /// position are replayed (backward when jumping into the past, forward
    /// when jumping ahead) off the main timeline to keep their state in
    /// step.
    ///
    /// A target past the retained range is rejected, but only after the
    /// current frame was discarded; the discard persists.
    pub fn try_time_travel(&mut self, frame_number: u32) -> Result<(), TimelineError> {
        self.remove_current_frame()
            .ok_or(TimelineError::EmptyTimeline)?;
        let &current = self
            .main_timeline
            .last()
            .ok_or(TimelineError::EmptyTimeline)?;
        let current_number = self.frames.get(current).frame_number();
        self.add_frame(frame_number)?;

        // Jumping into the past: unwind branch state down to the target.
        for index in (frame_number..=current_number).rev() {
            self.replay_backward_at(index, None);
        }
        // Jumping ahead: catch branch state up to just before the target.
        for index in (current_number + 1)..frame_number {
            self.replay_forward_at(index, None);
        }
        Ok(())
    }

    /// Frame number of the current frame, or None once the timeline has
    /// been rewound past frame 0.
    pub fn current_frame(&self) -> Option<u32> {
        self.main_timeline
            .last()
            .map(|&id| self.frames.get(id).frame_number())
    }

    /// One past the highest frame index still retained.
    pub fn retained_frames(&self) -> u32 {
        self.history.len() as u32
    }

    /// Number of branch frames retained at the given index (0 if out of
    /// range).
    pub fn branch_count(&self, frame_number: u32) -> usize {
        self.history
            .get(frame_number as usize)
            .map_or(0, Vec::len)
    }

    /// Frame numbers currently on the main timeline, bottom of the stack
    /// first.
    pub fn main_timeline_frames(&self) -> Vec<u32> {
        self.main_timeline
            .iter()
            .map(|&id| self.frames.get(id).frame_number())
            .collect()
    }

    /// Debug stat counting successful forward advances.
    pub fn num_advances(&self) -> usize {
        self.num_advances
    }

    /// Debug stat counting branch-frame replays performed to keep parallel
    /// branches in sync.
    pub fn num_replays(&self) -> usize {
        self.num_replays
    }

    /// Allocate a fresh frame at `frame_number`, record it in the history,
    /// and push it onto the main timeline. Only the next contiguous index or
    /// an already retained one may be entered.
    fn add_frame(&mut self, frame_number: u32) -> Result<(), TimelineError> {
        let limit = self.history.len();
        if frame_number as usize > limit {
            return Err(TimelineError::FrameOutOfRange {
                frame: frame_number,
                limit: limit as u32,
            });
        }
        if frame_number as usize == limit {
            self.history.push(Vec::new());
        }

        let id = self.frames.insert(TimelineFrame::new(frame_number));
        self.history[frame_number as usize].push(id);
        self.main_timeline.push(id);
        Ok(())
    }

    /// Pop the current frame from the stack and drop it from the history,
    /// removing the history slot entirely if it empties.
    fn remove_current_frame(&mut self) -> Option<TimelineFrame> {
        let id = self.main_timeline.pop()?;
        let frame = self.frames.remove(id);
        let index = frame.frame_number() as usize;

        let slot = &mut self.history[index];
        slot.retain(|&other| other != id);
        if slot.is_empty() {
            self.history.remove(index);
        }
        Some(frame)
    }

    /// Tick every frame at `index` forward, in creation order. The
    /// main-timeline flag is true only for `main`; replays with the flag
    /// false count toward the replay stat.
    fn replay_forward_at(&mut self, index: u32, main: Option<FrameId>) {
        for id in self.history[index as usize].clone() {
            let is_main = Some(id) == main;
            if !is_main {
                self.num_replays = self.num_replays.saturating_add(1);
            }
            self.frames.get_mut(id).tick_forward(is_main);
        }
    }

    /// Tick every frame at `index` backward, in creation order, with the
    /// same flag semantics as [replay_forward_at](Self::replay_forward_at).
    fn replay_backward_at(&mut self, index: u32, main: Option<FrameId>) {
        for id in self.history[index as usize].clone() {
            let is_main = Some(id) == main;
            if !is_main {
                self.num_replays = self.num_replays.saturating_add(1);
            }
            self.frames.get_mut(id).tick_backward(is_main);
        }
    }
}

impl Default for TimelineManager {
    fn default() -> Self {
        Self::new()
    }
}
