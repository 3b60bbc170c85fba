//! Sample simulation layer used to exercise the timeline core.
//!
//! The timeline never mutates game state itself; the types here sit on the
//! host side of the event boundary and perform the actual mutations. State
//! is shared between the host and its registered events through
//! `Rc<RefCell<_>>`, matching the core's single-threaded model.

#![warn(missing_docs, missing_debug_implementations)]

pub use events::*;
pub use player::*;

mod events;
mod player;
