//! Fruit Swipe entry point
//!
//! The game runs in the browser (see `platform::web`). Natively this plays one
//! headless round with a scripted pose and prints the result.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fruit Swipe (native) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let difficulty = args
        .next()
        .and_then(|s| fruit_swipe::Difficulty::from_str(&s))
        .unwrap_or_default();

    run_demo(seed, difficulty);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}

/// Scripted player: shoulders fixed, wrists sweeping across each spawn side
#[cfg(not(target_arch = "wasm32"))]
fn scripted_pose(t: f32) -> fruit_swipe::platform::PoseFrame {
    use fruit_swipe::sim::Keypoint;

    let keypoints = vec![
        Keypoint::new("leftShoulder", 300.0, 250.0),
        Keypoint::new("rightShoulder", 500.0, 250.0),
        Keypoint::new("leftWrist", 180.0 + 60.0 * (t * 1.7).sin(), 320.0 + 220.0 * (t * 2.3).sin()),
        Keypoint::new("rightWrist", 620.0 + 60.0 * (t * 1.3).cos(), 320.0 + 220.0 * (t * 2.9).cos()),
    ];
    fruit_swipe::platform::PoseFrame::new(keypoints, true)
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64, difficulty: fruit_swipe::Difficulty) {
    use fruit_swipe::audio::{BackgroundMusic, SilentSink};
    use fruit_swipe::sim::{Session, SessionEvent, update};
    use fruit_swipe::{AssetBundle, Canvas, Settings};

    const DT: f32 = 1.0 / 60.0;
    // Countdown + round + slack
    const MAX_FRAMES: u32 = 60 * 70;

    let settings = Settings {
        difficulty,
        ..Settings::default()
    };
    let mut state = Session::new(seed, settings, AssetBundle::numbered(6, Canvas::default()));
    let mut music = BackgroundMusic::new(SilentSink::default(), state.settings.music_volume);

    let mut sliced = 0;
    let mut bombed = 0;
    let mut frames = 0;
    while !state.game_over && frames < MAX_FRAMES {
        let t = frames as f32 * DT;
        update(&mut state, &scripted_pose(t), DT);
        for event in state.drain_events() {
            music.handle(&event);
            match event {
                SessionEvent::Score { delta, .. } if delta > 0 => sliced += 1,
                SessionEvent::Score { .. } => bombed += 1,
                other => log::debug!("{other:?}"),
            }
        }
        frames += 1;
    }

    println!(
        "{} round (seed {}): score {}, {} fruit sliced, {} bombs hit, {} fruit / {} bombs spawned, {} frames",
        difficulty.as_str(),
        seed,
        state.score,
        sliced,
        bombed,
        state.fruits.len(),
        state.bombs.len(),
        frames
    );
}
