use std::{collections::HashMap, fmt};

use crate::TimelineEvent;

/// Identifier of a frame in the manager's arena.
///
/// Ids are generated monotonically and never reused, so a stale id can be
/// detected rather than silently resolving to a different frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FrameId(u64);

/// A single simulation step and the events registered during it.
///
/// A frame's number is fixed at creation. The events it owns are replayed in
/// registration order in both directions.
pub struct TimelineFrame {
    frame_number: u32,
    events: Vec<Box<dyn TimelineEvent>>,
}

impl TimelineFrame {
    /// Create an empty frame at the given index.
    pub fn new(frame_number: u32) -> Self {
        Self {
            frame_number,
            events: Vec::new(),
        }
    }

    /// The frame index this frame was created at.
    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    /// Number of events registered on this frame.
    pub fn num_events(&self) -> usize {
        self.events.len()
    }

    /// Append an event. Registration order is replay order.
    pub fn add_event(&mut self, event: Box<dyn TimelineEvent>) {
        self.events.push(event);
    }

    /// Apply every owned event forward, in registration order.
    pub fn tick_forward(&mut self, is_main_timeline: bool) {
        for event in &mut self.events {
            event.apply_forward(is_main_timeline);
        }
    }

    /// Apply every owned event backward.
    ///
    /// Events are visited in registration order, not reverse order. Hosts
    /// rely on this exact order.
    pub fn tick_backward(&mut self, is_main_timeline: bool) {
        for event in &mut self.events {
            event.apply_backward(is_main_timeline);
        }
    }
}

impl fmt::Debug for TimelineFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineFrame")
            .field("frame_number", &self.frame_number)
            .field("num_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

/// Owner of every frame still retained by a timeline.
///
/// The main-timeline stack and the history refer to frames by [FrameId],
/// which resolves the frames' shared ownership without reference cycles.
#[derive(Debug, Default)]
pub(crate) struct FrameArena {
    frames: HashMap<FrameId, TimelineFrame>,
    next_id: u64,
}

impl FrameArena {
    pub(crate) fn insert(&mut self, frame: TimelineFrame) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.frames.insert(id, frame);
        id
    }

    /// Panics if the id does not resolve; the stack and history must only
    /// hold ids of retained frames.
    pub(crate) fn get(&self, id: FrameId) -> &TimelineFrame {
        self.frames.get(&id).expect("frame missing from arena")
    }

    pub(crate) fn get_mut(&mut self, id: FrameId) -> &mut TimelineFrame {
        self.frames.get_mut(&id).expect("frame missing from arena")
    }

    pub(crate) fn remove(&mut self, id: FrameId) -> TimelineFrame {
        self.frames.remove(&id).expect("frame missing from arena")
    }
}
