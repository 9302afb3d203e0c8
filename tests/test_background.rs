use voidstrike::background::Backdrop;
use voidstrike::config::{BACKGROUND_HEIGHT, GAME_HEIGHT};

/// The tiling invariant: layer tops exactly one unit apart, viewport
/// covered top to bottom.
fn assert_tiling(bd: &Backdrop) {
    let mut tops: Vec<f32> = bd.layers.iter().map(|l| l.top).collect();
    tops.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert!((tops[1] - tops[0] - BACKGROUND_HEIGHT).abs() < 0.5);
    assert!((tops[2] - tops[1] - BACKGROUND_HEIGHT).abs() < 0.5);
    assert!(tops[0] <= 0.0, "gap above the viewport");
    assert!(
        tops[2] + BACKGROUND_HEIGHT >= GAME_HEIGHT,
        "gap below the viewport"
    );
}

#[test]
fn initial_layout_tiles_the_field() {
    let bd = Backdrop::new();
    assert_tiling(&bd);
    assert_eq!(bd.layers[0].top, 0.0);
    assert_eq!(bd.layers[1].top, -BACKGROUND_HEIGHT);
    assert_eq!(bd.layers[2].top, -2.0 * BACKGROUND_HEIGHT);
    assert_eq!(bd.current(), 0);
    assert_eq!(bd.layers[0].asset, 0);
}

#[test]
fn scrolling_keeps_the_tiling_invariant() {
    let mut bd = Backdrop::new();
    // Several full wraps at a per-tick step
    for _ in 0..5000 {
        bd.advance(4.0);
        assert_tiling(&bd);
    }
}

#[test]
fn layer_reanchors_behind_the_tail() {
    let mut bd = Backdrop::new();
    bd.advance(2719.0);
    assert_eq!(bd.layers[0].top, 2719.0); // not yet past one unit
    bd.advance(1.0);
    // Lead layer jumped one unit behind the tail
    assert_eq!(bd.layers[0].top, -2.0 * BACKGROUND_HEIGHT);
    assert_tiling(&bd);
    assert_eq!(bd.current(), 1);
}

#[test]
fn current_tracks_the_layer_over_the_viewport_origin() {
    let mut bd = Backdrop::new();
    assert_eq!(bd.current(), 0);
    bd.advance(100.0);
    // Layer 0 slid below the origin; layer 1 now covers it
    assert_eq!(bd.current(), 1);
}

#[test]
fn rotate_advances_the_visible_artwork() {
    let mut bd = Backdrop::new();
    assert_eq!(bd.layers[bd.current()].asset, 0);

    bd.rotate();
    assert_eq!(bd.layers[bd.current()].asset, 1);
    // Rotation restarts the scroll from a clean layout
    assert_eq!(bd.layers[bd.current()].top, 0.0);
    assert_tiling(&bd);

    bd.rotate();
    assert_eq!(bd.layers[bd.current()].asset, 2);
    bd.rotate();
    assert_eq!(bd.layers[bd.current()].asset, 0);
}

#[test]
fn rotate_mid_scroll_still_picks_the_next_artwork() {
    let mut bd = Backdrop::new();
    bd.advance(1000.0);
    let visible = bd.layers[bd.current()].asset;
    bd.rotate();
    assert_eq!(bd.layers[bd.current()].asset, (visible + 1) % 3);
}

#[test]
fn reset_restores_the_initial_layout() {
    let mut bd = Backdrop::new();
    bd.advance(12_345.0);
    bd.rotate();
    bd.reset();
    assert_eq!(bd, Backdrop::new());
}
