//! Console walkthrough of the rewind timeline: advance, fork into a branch,
//! and watch the abandoned branch keep its state.

use std::{cell::RefCell, rc::Rc};

use nalgebra::Vector2;
use rewind_sim::{CueEvent, MovementEvent, Player};
use rewind_timeline::TimelineManager;

fn main() {
    tracing_subscriber::fmt::init();

    let mut timeline = TimelineManager::new();
    let player = Rc::new(RefCell::new(Player::new()));
    let cues = Rc::new(RefCell::new(Vec::new()));

    // Walk the player one unit per frame for ten frames, dropping a one-shot
    // cue halfway.
    let step = Vector2::new(1.0, 1.0);
    for frame in 0..10u32 {
        if frame == 5 {
            timeline.add_event(Box::new(CueEvent::new(&cues, "halfway")));
        }
        timeline.add_event(Box::new(MovementEvent::new(&player, step)));
        timeline.tick_forward();
    }
    tracing::info!(
        "after 10 frames: position = {:?}, cues = {:?}",
        player.borrow().position,
        cues.borrow()
    );

    // Jump back to frame 5 and fork. The fork drives a ghost copy of the
    // state taken at the fork point; the original run keeps its own state.
    timeline.time_travel(5);
    tracing::info!(
        "traveled to frame {:?}: position = {:?}",
        timeline.current_frame(),
        player.borrow().position
    );

    let ghost = Rc::new(RefCell::new(player.borrow().clone()));
    let retreat = Vector2::new(-1.0, -1.0);
    for _ in 0..5 {
        timeline.add_event(Box::new(MovementEvent::new(&ghost, retreat)));
        timeline.tick_forward();
    }
    tracing::info!(
        "forked branch reached frame {:?}: ghost = {:?}, original = {:?}, cues = {:?}",
        timeline.current_frame(),
        ghost.borrow().position,
        player.borrow().position,
        cues.borrow()
    );
    tracing::info!(
        "{} frames retained, {} branches at frame 5, {} advances, {} branch replays",
        timeline.retained_frames(),
        timeline.branch_count(5),
        timeline.num_advances(),
        timeline.num_replays()
    );
}
