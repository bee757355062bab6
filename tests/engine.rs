//! Engine-level behavior: the tick pipeline, theme switching, lifecycle and
//! debounced resizes.

mod common;

use backdrop_wasm::config::{MOTE_COUNT, ORB_COUNT, STAR_COUNT};
use backdrop_wasm::engine::Engine;
use backdrop_wasm::theme::Theme;
use common::{Op, Recorder};

#[test]
fn retro_frame_draws_squares_only() {
    let mut engine = Engine::with_seed(320.0, 240.0, 9);
    let mut out = Recorder::new();
    assert!(engine.tick(16.0, &mut out));

    assert_eq!(out.count(|op| matches!(op, Op::Wash(_))), 1);
    assert_eq!(out.count(|op| matches!(op, Op::Rect { .. })), STAR_COUNT);
    assert_eq!(
        out.count(|op| matches!(op, Op::Circle { .. } | Op::Line { .. })),
        0
    );
}

#[test]
fn theme_switch_renders_only_the_new_model() {
    let mut engine = Engine::with_seed(320.0, 240.0, 9);
    engine.set_theme(Theme::Futuristic);
    assert_eq!(engine.theme(), Theme::Futuristic);

    let mut out = Recorder::new();
    assert!(engine.tick(16.0, &mut out));
    assert_eq!(
        out.count(|op| matches!(op, Op::Rect { .. } | Op::Streak { .. })),
        0
    );
    assert_eq!(out.count(|op| matches!(op, Op::Circle { .. })), ORB_COUNT);

    engine.set_theme(Theme::Anime);
    out.clear();
    assert!(engine.tick(32.0, &mut out));
    assert_eq!(out.count(|op| matches!(op, Op::Circle { .. })), MOTE_COUNT);
    assert_eq!(
        out.count(|op| matches!(op, Op::Rect { .. } | Op::Line { .. })),
        0
    );
}

#[test]
fn unknown_theme_tags_never_reach_the_engine() {
    // The string boundary filters unknown tags to None; a selector holding an
    // engine handle simply has nothing to call.
    assert_eq!(Theme::parse("vaporwave"), None);
    assert_eq!(Theme::parse("retro"), Some(Theme::Retro));
    assert_eq!(Theme::parse("futuristic"), Some(Theme::Futuristic));
    assert_eq!(Theme::parse("anime"), Some(Theme::Anime));

    let engine = Engine::with_seed(100.0, 100.0, 1);
    assert_eq!(engine.theme(), Theme::Retro);
}

#[test]
fn destroy_halts_ticks_for_good() {
    let mut engine = Engine::with_seed(200.0, 100.0, 2);
    let mut out = Recorder::new();
    assert!(engine.tick(16.0, &mut out));

    engine.destroy();
    assert!(!engine.is_running());

    out.clear();
    for i in 0..10 {
        // Frame signals keep arriving; nothing runs and nothing is drawn.
        assert!(!engine.tick(32.0 + 16.0 * i as f64, &mut out));
    }
    assert!(out.ops.is_empty());
}

#[test]
fn resize_bursts_collapse_into_one_rebuild() {
    let mut engine = Engine::with_seed(300.0, 200.0, 4);
    let mut out = Recorder::new();

    // A window drag: ten signals inside one quiet period.
    for i in 0..10 {
        engine.notify_resize(10.0 * i as f64, 400.0 + i as f64, 300.0);
    }

    // Quiet period (150ms after the last signal at t=90) not over yet.
    engine.tick(100.0, &mut out);
    assert_eq!(out.count(|op| matches!(op, Op::Resized { .. })), 0);
    assert_eq!(engine.surface().w, 300.0);

    // One tick past the deadline applies exactly one resize, at the last size.
    engine.tick(250.0, &mut out);
    let resizes: Vec<_> = out
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Resized { .. }))
        .collect();
    assert_eq!(resizes.len(), 1);
    assert_eq!(*resizes[0], Op::Resized { w: 409.0, h: 300.0 });
    assert_eq!(engine.surface().w, 409.0);

    // And only once: later ticks see no further resize.
    out.clear();
    engine.tick(400.0, &mut out);
    assert_eq!(out.count(|op| matches!(op, Op::Resized { .. })), 0);
}

#[test]
fn degenerate_resize_is_tolerated() {
    let mut engine = Engine::with_seed(300.0, 200.0, 6);
    let mut out = Recorder::new();
    engine.notify_resize(0.0, 0.0, 0.0);
    assert!(engine.tick(200.0, &mut out));
    assert_eq!(engine.surface(), backdrop_wasm::viewport::Surface { w: 0.0, h: 0.0 });
    // Frames still run; the pools rebuilt against the empty surface.
    assert!(engine.tick(216.0, &mut out));
}
