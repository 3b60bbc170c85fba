use std::{cell::RefCell, rc::Rc};

use nalgebra::Vector2;
use rewind_timeline::TimelineEvent;

use crate::Player;

/// Moves a player by a fixed displacement each time its frame plays.
///
/// The undo subtracts the same displacement, so movement round-trips exactly
/// on whichever timeline the replay happens. The main-timeline flag is
/// ignored.
#[derive(Debug)]
pub struct MovementEvent {
    player: Rc<RefCell<Player>>,
    movement: Vector2<f32>,
}

impl MovementEvent {
    /// Create a movement of `movement` applied to the shared player.
    pub fn new(player: &Rc<RefCell<Player>>, movement: Vector2<f32>) -> Self {
        Self {
            player: Rc::clone(player),
            movement,
        }
    }
}

impl TimelineEvent for MovementEvent {
    fn apply_forward(&mut self, _is_main_timeline: bool) {
        self.player.borrow_mut().position += self.movement;
    }

    fn apply_backward(&mut self, _is_main_timeline: bool) {
        self.player.borrow_mut().position -= self.movement;
    }
}

/// Records a named one-shot cue, but only on the canonical timeline.
///
/// Branch replays arrive with `is_main_timeline` false and are ignored, so a
/// cue fires once when its frame first plays on the live path and is
/// retracted when the live path rewinds over it.
#[derive(Debug)]
pub struct CueEvent {
    cues: Rc<RefCell<Vec<String>>>,
    name: String,
}

impl CueEvent {
    /// Create a cue named `name` recorded into the shared cue log.
    pub fn new(cues: &Rc<RefCell<Vec<String>>>, name: impl Into<String>) -> Self {
        Self {
            cues: Rc::clone(cues),
            name: name.into(),
        }
    }
}

impl TimelineEvent for CueEvent {
    fn apply_forward(&mut self, is_main_timeline: bool) {
        if is_main_timeline {
            self.cues.borrow_mut().push(self.name.clone());
        }
    }

    fn apply_backward(&mut self, is_main_timeline: bool) {
        if is_main_timeline {
            self.cues.borrow_mut().pop();
        }
    }
}
