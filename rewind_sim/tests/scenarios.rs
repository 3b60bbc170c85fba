//! End-to-end scenarios driving the timeline core with the sample
//! simulation layer.

use std::{cell::RefCell, rc::Rc};

use nalgebra::Vector2;
use rewind_sim::{CueEvent, MovementEvent, Player};
use rewind_timeline::TimelineManager;

fn shared_player() -> Rc<RefCell<Player>> {
    Rc::new(RefCell::new(Player::new()))
}

fn position(player: &Rc<RefCell<Player>>) -> Vector2<f32> {
    player.borrow().position
}

/// Register one movement event per frame and advance, `count` times.
fn advance(
    timeline: &mut TimelineManager,
    player: &Rc<RefCell<Player>>,
    movement: Vector2<f32>,
    count: u32,
) {
    for _ in 0..count {
        timeline.add_event(Box::new(MovementEvent::new(player, movement)));
        timeline.tick_forward();
    }
}

fn rewind(timeline: &mut TimelineManager, count: u32) {
    for _ in 0..count {
        timeline.tick_backward();
    }
}

#[test]
fn forward_ticks_apply_movement() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();

    advance(&mut timeline, &player, Vector2::new(1.0, 1.0), 10);
    assert_eq!(position(&player), Vector2::new(10.0, 10.0));
    assert_eq!(timeline.current_frame(), Some(10));
}

#[test]
fn rewind_without_progress_changes_nothing() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();

    rewind(&mut timeline, 10);
    assert_eq!(position(&player), Vector2::zeros());
}

#[test]
fn rewind_undoes_recent_frames() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();
    let movement = Vector2::new(1.0, 1.0);

    advance(&mut timeline, &player, movement, 10);
    rewind(&mut timeline, 5);
    assert_eq!(position(&player), movement * 5.0);
}

#[test]
fn equal_rewind_round_trips_exactly() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();

    advance(&mut timeline, &player, Vector2::new(1.0, 1.0), 10);
    assert_eq!(position(&player), Vector2::new(10.0, 10.0));

    rewind(&mut timeline, 10);
    assert_eq!(position(&player), Vector2::zeros());
}

#[test]
fn over_rewind_stops_at_the_origin() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();

    advance(&mut timeline, &player, Vector2::new(1.0, 1.0), 5);
    rewind(&mut timeline, 10);
    assert_eq!(position(&player), Vector2::zeros());
}

#[test]
fn travel_back_rewinds_state() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();
    let movement = Vector2::new(1.0, 1.0);

    advance(&mut timeline, &player, movement, 10);
    timeline.time_travel(5);
    assert_eq!(position(&player), movement * 5.0);
    assert_eq!(timeline.current_frame(), Some(5));
}

#[test]
fn travel_beyond_retained_range_keeps_state() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();
    let movement = Vector2::new(1.0, 1.0);

    advance(&mut timeline, &player, movement, 5);
    timeline.time_travel(6);
    assert_eq!(position(&player), movement * 5.0);
}

#[test]
fn branch_diverges_without_touching_the_original() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();
    let movement = Vector2::new(1.0, -1.0);

    advance(&mut timeline, &player, movement, 10);
    timeline.time_travel(5);

    // Snapshot the state at the fork and drive the new branch from it.
    let branch_player = Rc::new(RefCell::new(player.borrow().clone()));
    advance(&mut timeline, &branch_player, -movement, 5);

    // The abandoned branch was replayed back to its own end state while the
    // fork walked its snapshot back to the origin.
    assert_eq!(position(&player), movement * 10.0);
    assert_eq!(position(&branch_player), Vector2::zeros());
}

#[test]
fn travel_forward_restores_the_original_branch() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();
    let movement = Vector2::new(1.0, 1.0);

    advance(&mut timeline, &player, movement, 10);
    timeline.time_travel(5);
    let branch_player = Rc::new(RefCell::new(player.borrow().clone()));
    advance(&mut timeline, &branch_player, -movement, 2);

    timeline.time_travel(10);
    assert_eq!(position(&player), movement * 10.0);
    assert_eq!(position(&branch_player), movement * 3.0);
}

#[test]
fn rewind_after_branching_keeps_both_timelines_in_sync() {
    let mut timeline = TimelineManager::new();
    let player = shared_player();
    let movement = Vector2::new(1.0, 1.0);

    advance(&mut timeline, &player, movement, 10);
    timeline.time_travel(5);
    let branch_player = Rc::new(RefCell::new(player.borrow().clone()));
    advance(&mut timeline, &branch_player, -movement, 5);

    rewind(&mut timeline, 10);
    assert_eq!(position(&player), movement * 5.0);
    assert_eq!(position(&branch_player), movement * 5.0);
}

#[test]
fn cues_fire_once_and_stay_quiet_on_branches() {
    let mut timeline = TimelineManager::new();
    let cues = Rc::new(RefCell::new(Vec::new()));

    timeline.add_event(Box::new(CueEvent::new(&cues, "checkpoint")));
    timeline.tick_forward();
    assert_eq!(*cues.borrow(), ["checkpoint"]);

    // Rewinding the live path retracts the cue, and re-advancing over the
    // same frame fires it again.
    timeline.tick_backward();
    assert!(cues.borrow().is_empty());
    timeline.tick_forward();
    assert_eq!(*cues.borrow(), ["checkpoint"]);

    // After forking at index 0 the old frame only ever replays as a branch,
    // so the cue is not duplicated.
    timeline.time_travel(0);
    assert_eq!(*cues.borrow(), ["checkpoint"]);
    timeline.tick_forward();
    assert_eq!(*cues.borrow(), ["checkpoint"]);
}
