//! Session controller
//!
//! Drives the session through calibration, countdown, play and game over.
//! The host calls `update` once per animation frame with the elapsed time;
//! the start trigger, the 1 Hz countdown and the frame logic all run from
//! that single call, so no two of them can interleave.

use super::collision::resolve_collisions;
use super::geometry::{Joint, Keypoint, create_hand_keypoints, find_coord};
use super::physics::{physics_step, prune};
use super::spawn::spawn;
use super::state::{Session, SessionEvent};
use crate::consts::SHOULDER_OFFSET;
use crate::platform::PoseSource;

/// Advance the session by one animation frame of `dt` seconds
pub fn update<P: PoseSource + ?Sized>(state: &mut Session, pose: &P, dt: f32) {
    // Calibration gating; a trigger armed this call keeps its full delay
    let armed = set_calibrated(state, pose.is_calibrated());

    // Delayed start
    if !armed && state.start_trigger.advance(dt) {
        start_game(state);
    }

    // 1 Hz countdown
    let ticks = state.timer.advance(dt);
    for _ in 0..ticks {
        timer_tick(state);
        if state.game_over {
            break;
        }
    }

    frame(state, pose.keypoints());
}

/// Record the pose source's calibration state.
///
/// Gaining calibration schedules the start trigger; losing it before the
/// trigger fires cancels it. Returns true when this call armed the trigger.
pub fn set_calibrated(state: &mut Session, calibrated: bool) -> bool {
    let was = state.calibrated;
    state.calibrated = calibrated;

    if calibrated && !state.is_game_started && !state.game_over && state.start_trigger.arm() {
        let seconds = state.settings.start_delay_secs;
        log::info!("Calibrated, starting in {seconds}s");
        state.push_event(SessionEvent::CountdownStarted { seconds });
        return true;
    }
    if !calibrated && was && state.start_trigger.cancel() {
        log::info!("Calibration lost, countdown cancelled");
        state.push_event(SessionEvent::CountdownCancelled);
    }
    false
}

/// External start signal. No-op once started or over.
pub fn start_game(state: &mut Session) {
    if state.is_game_started || state.game_over {
        return;
    }
    state.start_trigger.cancel();
    state.is_game_started = true;
    log::info!(
        "Game started ({}, {}s)",
        state.settings.difficulty.as_str(),
        state.time
    );
    state.push_event(SessionEvent::GameStarted);
}

/// One countdown second elapsed. Ignored unless the timer is running.
pub fn timer_tick(state: &mut Session) {
    if state.game_over || !state.timer.is_running() {
        return;
    }
    state.time -= 1;
    if state.time <= 0 {
        end_game(state);
    }
}

/// Per-frame game logic against the latest keypoints
pub fn frame(state: &mut Session, keypoints: &[Keypoint]) {
    if !state.is_game_started || state.game_over {
        return;
    }

    // Start the countdown on the first active frame
    if state.timer.start() {
        log::debug!("Countdown timer started at {}s", state.time);
    }

    update_boundaries(state, keypoints);

    // Hands vs entities
    let hands = create_hand_keypoints(keypoints);
    let hits = resolve_collisions(&hands, &mut state.fruits, &mut state.bombs);
    for hit in hits {
        state.score += hit.delta;
        state.push_event(SessionEvent::Score {
            delta: hit.delta,
            x: hit.pos.x,
            y: hit.pos.y,
        });
    }

    spawn(state);

    // Move everything, destroyed entities included
    let canvas = state.assets.canvas;
    physics_step(&mut state.fruits, &canvas);
    physics_step(&mut state.bombs, &canvas);

    if let Some(config) = state.settings.prune {
        let removed = prune(&mut state.fruits, &canvas, &config) + prune(&mut state.bombs, &canvas, &config);
        if removed > 0 {
            log::debug!("Pruned {removed} entities");
        }
    }

    state.frame += 1;

    // Catch an expiry the timer did not report
    if state.time <= 0 {
        end_game(state);
    }
}

/// Recompute spawn boundaries from the shoulders; a missing shoulder keeps
/// its side's previous value
pub fn update_boundaries(state: &mut Session, keypoints: &[Keypoint]) {
    let left = find_coord(Joint::LeftShoulder.as_str(), keypoints);
    let right = find_coord(Joint::RightShoulder.as_str(), keypoints);

    if let Some(shoulder) = left {
        state.boundaries.left = shoulder.x - SHOULDER_OFFSET;
    }
    if let Some(shoulder) = right {
        state.boundaries.right = shoulder.x + SHOULDER_OFFSET;
    }
    if let (Some(l), Some(r)) = (left, right) {
        state.boundaries.center = (l.x + r.x) / 2.0;
    }
}

/// Enter game over. Happens at most once per session.
fn end_game(state: &mut Session) {
    if state.game_over {
        return;
    }
    state.game_over = true;
    state.timer.stop();
    state.start_trigger.cancel();
    log::info!("Game over: score {} after {} frames", state.score, state.frame);
    state.push_event(SessionEvent::GameOver { score: state.score });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetBundle, Canvas, SkinPair};
    use crate::platform::PoseFrame;
    use crate::settings::{PruneConfig, Settings};
    use crate::sim::entity::{Entity, EntityKind, Side};
    use crate::sim::profile::DifficultyProfile;
    use crate::sim::state::SessionPhase;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn session() -> Session {
        Session::new(12345, Settings::default(), AssetBundle::numbered(4, Canvas::default()))
    }

    fn no_spawns(state: &mut Session) {
        state.profile = DifficultyProfile {
            fruit_trigger_constant: 1.0,
            bomb_trigger_constant: 1.0,
            ..state.profile
        };
    }

    fn pose(keypoints: Vec<Keypoint>) -> PoseFrame {
        PoseFrame {
            keypoints,
            calibrated: true,
        }
    }

    fn running() -> Session {
        let mut state = session();
        no_spawns(&mut state);
        set_calibrated(&mut state, true);
        start_game(&mut state);
        state.drain_events();
        state
    }

    #[test]
    fn test_calibration_countdown_start() {
        let mut state = session();
        let calibrated = pose(Vec::new());

        update(&mut state, &PoseFrame::default(), DT);
        assert_eq!(state.phase(), SessionPhase::Calibrating);

        update(&mut state, &calibrated, DT);
        assert_eq!(state.phase(), SessionPhase::Countdown);
        assert_eq!(
            state.drain_events(),
            vec![SessionEvent::CountdownStarted { seconds: 4.0 }]
        );

        // 4 seconds of frames
        for _ in 0..239 {
            update(&mut state, &calibrated, DT);
        }
        assert!(state.phase() == SessionPhase::Countdown || state.phase() == SessionPhase::Running);
        for _ in 0..5 {
            update(&mut state, &calibrated, DT);
        }
        assert_eq!(state.phase(), SessionPhase::Running);
        assert!(state.is_timer_on());
        assert!(state.drain_events().contains(&SessionEvent::GameStarted));
    }

    #[test]
    fn test_calibration_loss_cancels_start() {
        let mut state = session();
        update(&mut state, &pose(Vec::new()), 2.0);
        assert_eq!(state.phase(), SessionPhase::Countdown);

        update(&mut state, &PoseFrame::default(), DT);
        assert_eq!(state.phase(), SessionPhase::Calibrating);
        assert!(state.drain_events().contains(&SessionEvent::CountdownCancelled));

        // The cancelled trigger never fires
        update(&mut state, &PoseFrame::default(), 10.0);
        assert!(!state.is_game_started);
    }

    #[test]
    fn test_recalibration_restarts_full_delay() {
        let mut state = session();
        update(&mut state, &pose(Vec::new()), 3.0);
        update(&mut state, &PoseFrame::default(), DT);
        update(&mut state, &pose(Vec::new()), DT);
        assert!(state.countdown_remaining().unwrap() > 3.9);
    }

    #[test]
    fn test_calibration_frame_keeps_full_delay() {
        let mut state = session();
        // A long frame gap before calibration is first reported
        update(&mut state, &pose(Vec::new()), 4.0);
        assert!(!state.is_game_started);
        assert_eq!(state.phase(), SessionPhase::Countdown);
        assert_eq!(state.countdown_remaining(), Some(4.0));

        update(&mut state, &pose(Vec::new()), 4.0);
        assert!(state.is_game_started);
    }

    #[test]
    fn test_timer_tick_ignored_before_timer_runs() {
        let mut state = session();
        timer_tick(&mut state);
        assert_eq!(state.time, 60);

        // Started but no active frame yet: timer still off
        start_game(&mut state);
        timer_tick(&mut state);
        assert_eq!(state.time, 60);

        frame(&mut state, &[]);
        timer_tick(&mut state);
        assert_eq!(state.time, 59);
    }

    #[test]
    fn test_external_start_signal() {
        let mut state = session();
        start_game(&mut state);
        assert_eq!(state.phase(), SessionPhase::Running);
        // Second signal is ignored
        start_game(&mut state);
        assert_eq!(
            state.drain_events().iter().filter(|e| **e == SessionEvent::GameStarted).count(),
            1
        );
    }

    #[test]
    fn test_frame_is_noop_before_start() {
        let mut state = session();
        state.profile.fruit_trigger_constant = 0.0;
        frame(&mut state, &[]);
        assert!(state.fruits.is_empty());
        assert!(!state.is_timer_on());
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_timer_runs_out_once() {
        let mut state = running();
        frame(&mut state, &[]);
        assert!(state.is_timer_on());

        for _ in 0..59 {
            timer_tick(&mut state);
        }
        assert_eq!(state.time, 1);
        assert!(!state.game_over);
        timer_tick(&mut state);
        assert_eq!(state.time, 0);
        assert!(state.game_over);
        assert!(!state.is_timer_on());

        // Further ticks change nothing
        timer_tick(&mut state);
        assert_eq!(state.time, 0);
        let game_overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, SessionEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_full_round_via_update() {
        let mut state = running();
        let frame_pose = pose(Vec::new());
        let mut frames = 0;
        while !state.game_over && frames < 60 * 70 {
            update(&mut state, &frame_pose, DT);
            frames += 1;
        }
        assert!(state.game_over);
        assert_eq!(state.time, 0);
        // Roughly 60 seconds of frames
        assert!((3590..=3610).contains(&frames), "frames {frames}");
    }

    #[test]
    fn test_timer_double_start_is_single_interval() {
        let mut state = running();
        frame(&mut state, &[]);
        frame(&mut state, &[]);
        frame(&mut state, &[]);
        update(&mut state, &pose(Vec::new()), 1.0);
        assert_eq!(state.time, 59);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = running();
        state.profile.fruit_trigger_constant = 0.0;
        frame(&mut state, &[]);
        let spawned = state.fruits.len();
        let y = state.fruits[0].pos.y;

        state.time = 1;
        timer_tick(&mut state);
        assert!(state.game_over);

        for _ in 0..10 {
            update(&mut state, &pose(Vec::new()), DT);
        }
        assert_eq!(state.fruits.len(), spawned);
        assert_eq!(state.fruits[0].pos.y, y);
        assert_eq!(state.time, 0);
    }

    #[test]
    fn test_boundaries_follow_shoulders() {
        let mut state = running();
        frame(
            &mut state,
            &[
                Keypoint::new("leftShoulder", 300.0, 200.0),
                Keypoint::new("rightShoulder", 500.0, 200.0),
            ],
        );
        assert_eq!(state.boundaries.left, 180.0);
        assert_eq!(state.boundaries.right, 620.0);
        assert_eq!(state.boundaries.center, 400.0);

        // Missing shoulder keeps the last value
        frame(&mut state, &[Keypoint::new("rightShoulder", 520.0, 200.0)]);
        assert_eq!(state.boundaries.left, 180.0);
        assert_eq!(state.boundaries.right, 640.0);
        assert_eq!(state.boundaries.center, 400.0);
    }

    #[test]
    fn test_frame_scores_fruit_and_bomb() {
        let mut state = running();
        let mut fruit = Entity::new(
            100,
            EntityKind::Fruit,
            Side::Left,
            Vec2::new(150.0, 120.0),
            0.0,
            0.0,
            SkinPair::new(0, 1),
        )
        .with_diameter(30.0);
        fruit.mark_shown();
        state.fruits.push(fruit);
        state.bombs.push(
            Entity::new(
                101,
                EntityKind::Bomb,
                Side::Right,
                Vec2::new(600.0, 300.0),
                0.0,
                0.0,
                SkinPair::new(8, 9),
            )
            .with_diameter(30.0),
        );

        frame(
            &mut state,
            &[
                Keypoint::new("leftWrist", 100.0, 100.0),
                Keypoint::new("rightWrist", 620.0, 310.0),
            ],
        );
        assert_eq!(state.score, 0);
        assert!(state.fruits[0].is_destroyed());
        assert!(state.bombs[0].is_destroyed());
        assert_eq!(
            state.drain_events(),
            vec![
                SessionEvent::Score { delta: 100, x: 150.0, y: 120.0 },
                SessionEvent::Score { delta: -100, x: 600.0, y: 300.0 },
            ]
        );

        // Already destroyed: no further score
        frame(&mut state, &[Keypoint::new("leftWrist", 100.0, 100.0)]);
        assert_eq!(state.score, 0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = session();
        let mut b = session();
        let keypoints = vec![
            Keypoint::new("leftShoulder", 300.0, 200.0),
            Keypoint::new("rightShoulder", 500.0, 200.0),
            Keypoint::new("leftWrist", 150.0, 300.0),
            Keypoint::new("rightWrist", 650.0, 300.0),
        ];
        let frame_pose = pose(keypoints);
        for _ in 0..600 {
            update(&mut a, &frame_pose, DT);
            update(&mut b, &frame_pose, DT);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.fruits.len(), b.fruits.len());
        assert_eq!(a.bombs.len(), b.bombs.len());
        for (x, y) in a.entities().zip(b.entities()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.pos, y.pos);
        }
    }

    #[test]
    fn test_pruning_bounds_live_set() {
        let mut kept = session();
        let mut pruned = Session::new(
            12345,
            Settings {
                prune: Some(PruneConfig { grace_frames: 10 }),
                ..Settings::default()
            },
            AssetBundle::numbered(4, Canvas::default()),
        );
        let frame_pose = pose(Vec::new());
        for _ in 0..60 * 30 {
            update(&mut kept, &frame_pose, DT);
            update(&mut pruned, &frame_pose, DT);
        }
        assert!(!kept.fruits.is_empty());
        assert!(pruned.fruits.len() < kept.fruits.len());
    }
}
