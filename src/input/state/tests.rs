use super::core::{InputState, StencilSettings};
use crate::draw::{Brush, color};
use crate::input::events::{CanvasRect, PointerEvent};

fn pad() -> InputState {
    let brush = Brush {
        color: color::BLACK,
        width: 6.0,
        symmetry: 4,
    };
    let stencil = StencilSettings {
        visible: false,
        circles: 5,
    };
    InputState::new(800.0, 800.0, 1.0, brush, stencil).unwrap()
}

fn rect() -> CanvasRect {
    CanvasRect::new(0.0, 0.0, 800.0, 800.0)
}

fn ev(x: f64, y: f64, t: f64) -> PointerEvent {
    PointerEvent::new(x, y, t)
}

fn alpha_at(state: &mut InputState, x: usize, y: usize) -> u8 {
    let stride = state.surface().stride();
    let data = state.surface_mut().raw_pixels().unwrap();
    // ARgb32 little-endian: B, G, R, A per pixel.
    data[y * stride + x * 4 + 3]
}

fn overlay_alpha_at(state: &mut InputState, x: usize, y: usize) -> u8 {
    let stride = state.overlay().stride();
    let data = state.overlay_mut().raw_pixels().unwrap();
    data[y * stride + x * 4 + 3]
}

fn drag(state: &mut InputState, from: (f64, f64), to: (f64, f64), t0: f64) {
    state.on_pointer_down(&ev(from.0, from.1, t0), &rect());
    state
        .on_pointer_motion(&ev(to.0, to.1, t0 + 10.0), &rect())
        .unwrap();
    state.on_pointer_up();
}

#[test]
fn drag_paints_every_symmetric_copy() {
    let mut state = pad();
    drag(&mut state, (100.0, 100.0), (120.0, 100.0), 0.0);

    // The segment midpoint and its three quarter-turn copies about the
    // surface center (400, 400) all carry ink.
    assert!(alpha_at(&mut state, 110, 100) > 0);
    assert!(alpha_at(&mut state, 700, 110) > 0);
    assert!(alpha_at(&mut state, 690, 700) > 0);
    assert!(alpha_at(&mut state, 100, 690) > 0);
    // A point off every copy stays blank.
    assert_eq!(alpha_at(&mut state, 400, 100), 0);
}

#[test]
fn motion_records_interpolated_points() {
    let mut state = pad();
    // 20 px in 10 ms is 2 px/ms, which interpolates in 10 steps.
    drag(&mut state, (100.0, 100.0), (120.0, 100.0), 0.0);

    assert_eq!(state.history.applied().len(), 1);
    assert_eq!(state.history.applied()[0].len(), 11);
}

#[test]
fn undo_erases_and_redo_restores_identical_pixels() {
    let mut state = pad();
    drag(&mut state, (100.0, 100.0), (160.0, 140.0), 0.0);
    let drawn = state.surface_mut().raw_pixels().unwrap();

    state.undo().unwrap();
    let blank = state.surface_mut().raw_pixels().unwrap();
    assert!(blank.iter().all(|&b| b == 0));

    state.redo().unwrap();
    let redone = state.surface_mut().raw_pixels().unwrap();
    assert_eq!(drawn, redone);
}

#[test]
fn redo_after_brush_change_repaints_with_the_new_settings() {
    let mut state = pad();
    drag(&mut state, (100.0, 100.0), (160.0, 100.0), 0.0);
    let black = state.surface_mut().raw_pixels().unwrap();

    state.undo().unwrap();
    state.set_color(color::WHITE);
    state.redo().unwrap();
    let white = state.surface_mut().raw_pixels().unwrap();

    // Same geometry, different ink: strokes store no brush snapshot.
    assert_ne!(black, white);
    let stride = state.surface().stride();
    let idx = 100 * stride + 130 * 4;
    assert_eq!(white[idx], 255); // blue channel of a white pixel
}

#[test]
fn clear_empties_history_and_surface() {
    let mut state = pad();
    drag(&mut state, (100.0, 100.0), (150.0, 100.0), 0.0);
    drag(&mut state, (200.0, 200.0), (250.0, 200.0), 100.0);

    state.clear().unwrap();

    assert!(!state.history.can_undo());
    assert!(!state.history.can_redo());
    let pixels = state.surface_mut().raw_pixels().unwrap();
    assert!(pixels.iter().all(|&b| b == 0));
    // Undo after clear has nothing to act on.
    state.undo().unwrap();
    assert!(state.history.applied().is_empty());
}

#[test]
fn pointer_leave_commits_the_partial_stroke() {
    let mut state = pad();
    state.on_pointer_down(&ev(100.0, 100.0, 0.0), &rect());
    state
        .on_pointer_motion(&ev(130.0, 100.0, 10.0), &rect())
        .unwrap();
    state.on_pointer_leave();

    assert_eq!(state.history.applied().len(), 1);
    assert!(!state.history.is_drawing());

    // Motion after the leave does not extend anything.
    state
        .on_pointer_motion(&ev(200.0, 200.0, 20.0), &rect())
        .unwrap();
    assert_eq!(state.history.applied().len(), 1);
}

#[test]
fn motion_without_a_gesture_is_ignored() {
    let mut state = pad();
    state
        .on_pointer_motion(&ev(100.0, 100.0, 0.0), &rect())
        .unwrap();

    assert!(state.history.applied().is_empty());
    let pixels = state.surface_mut().raw_pixels().unwrap();
    assert!(pixels.iter().all(|&b| b == 0));
}

#[test]
fn css_coordinates_map_through_the_display_scale() {
    let brush = Brush {
        color: color::BLACK,
        width: 6.0,
        symmetry: 2,
    };
    let stencil = StencilSettings {
        visible: false,
        circles: 5,
    };
    // 400 CSS px at scale 2 backs an 800 px surface.
    let mut state = InputState::new(400.0, 400.0, 2.0, brush, stencil).unwrap();
    let rect = CanvasRect::new(0.0, 0.0, 400.0, 400.0);

    state.on_pointer_down(&ev(50.0, 200.0, 0.0), &rect);
    state
        .on_pointer_motion(&ev(60.0, 200.0, 10.0), &rect)
        .unwrap();
    state.on_pointer_up();

    // CSS (55, 200) lands at surface (110, 400).
    assert!(alpha_at(&mut state, 110, 400) > 0);
    assert_eq!(alpha_at(&mut state, 55, 200), 0);
}

#[test]
fn stencil_overlay_toggles_without_touching_the_drawing() {
    let mut state = pad();
    state.set_stencil_visible(true).unwrap();
    // A point on the first radial, which runs from (400, 400) to (720, 400).
    assert!(overlay_alpha_at(&mut state, 600, 400) > 0);
    // The drawing surface stays blank.
    assert_eq!(alpha_at(&mut state, 600, 400), 0);

    state.set_stencil_visible(false).unwrap();
    assert_eq!(overlay_alpha_at(&mut state, 600, 400), 0);
}

#[test]
fn setters_clamp_to_their_control_ranges() {
    let mut state = pad();

    state.set_brush_width(0.2);
    assert_eq!(state.brush().width, 1.0);
    state.set_brush_width(300.0);
    assert_eq!(state.brush().width, 20.0);

    state.set_symmetry(1).unwrap();
    assert_eq!(state.brush().symmetry, 2);
    state.set_symmetry(99).unwrap();
    assert_eq!(state.brush().symmetry, 16);

    state.set_circles(0).unwrap();
    assert_eq!(state.stencil().circles, 1);
    state.set_circles(50).unwrap();
    assert_eq!(state.stencil().circles, 10);
}
