//! Timeline bookkeeping for a deterministic time-rewind mechanic.
//!
//! There are three components to the timeline:
//! - A [TimelineEvent] implemented by the host for each unit of simulation
//!   change, with a forward action and a backward undo
//! - [TimelineFrame] which holds the events registered during one simulation
//!   step and replays them in either direction
//! - [TimelineManager] which owns every frame, tracks the currently live path
//!   and the full history of parallel branches per frame index, and decides
//!   when each event's forward or backward action runs
//!
//! # Note on replay order
//!
//! A frame replays its events in registration order in both directions;
//! backward replay is not reversed. Each event's undo is expected to be
//! independent of the others on its frame, and hosts may rely on the exact
//! order.
//!
//! # Note on branching
//!
//! Resuming forward after a rewind never reuses an old frame: the index is
//! re-entered with a freshly created frame, and the frames left behind become
//! a parallel branch that the manager keeps in sync by replaying their events
//! as the main line moves. An event can distinguish the two cases through the
//! `is_main_timeline` flag passed to its actions.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use error::*;
pub use event::*;
pub use frame::*;
pub use timeline::*;

mod error;
mod event;
mod frame;
mod timeline;
