use camera_toolkit::camera::{CameraFrame, CameraStyle};
use camera_toolkit::config::CameraConfig;
use camera_toolkit::core::{CameraPreset, CameraRig, CameraSnapshot, DragAction, InputEvent, MotionAxis};
use camera_toolkit::math::Vector3;
use camera_toolkit::traits::Button;

const EPSILON: f32 = 1e-4;

fn run_motion(rig: &mut CameraRig) -> u32 {
    let mut ticks = 0;
    while rig.is_animating() && ticks < 1_000 {
        ticks += rig.advance(1.0 / 60.0 + 1e-4);
    }
    ticks
}

#[cfg(test)]
mod style_switch_tests {
    use super::*;

    #[test]
    fn test_orbit_game_orbit_restores_focus() {
        let mut rig = CameraRig::default();

        assert!(rig.switch_style(CameraStyle::Game));
        assert_eq!(rig.style(), CameraStyle::Game);
        assert!((rig.camera().center() - Vector3::new(0.0, 1.0, 9.0)).length() < EPSILON);

        assert!(rig.switch_style(CameraStyle::Orbit));
        assert!((rig.camera().center() - Vector3::new(0.0, 1.0, 0.0)).length() < EPSILON);
        assert_eq!(rig.camera().eye(), Vector3::new(0.0, 1.0, 10.0));
    }

    #[test]
    fn test_switch_to_active_style_is_noop() {
        let mut rig = CameraRig::default();
        assert!(!rig.switch_style(CameraStyle::Orbit));
        assert_eq!(rig.camera().frame(), &CameraFrame::default());
    }

    #[test]
    fn test_walk_then_orbit_keeps_radius() {
        let mut rig = CameraRig::default();
        rig.handle_key('j');

        // Walk forward two units
        rig.camera_mut().zoom(0.0, 40.0);
        let eye = rig.camera().eye();

        rig.handle_key('o');
        assert_eq!(rig.style(), CameraStyle::Orbit);
        assert_eq!(rig.camera().eye(), eye);
        assert!((rig.camera().frame().radius() - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_switch_cancels_motion() {
        let mut rig = CameraRig::default();
        assert!(rig.start_motion(MotionAxis::Z, 2.0));
        rig.switch_style(CameraStyle::Game);
        assert!(!rig.is_animating());
    }
}

#[cfg(test)]
mod preset_tests {
    use super::*;

    #[test]
    fn test_save_and_restore_through_preset() {
        let mut rig = CameraRig::default();
        rig.camera_mut().rotate_y(0.0, 40.0);
        rig.handle_key('s');
        let saved = *rig.saved_snapshot().expect("snapshot saved");

        rig.apply_preset(CameraPreset::Default);
        assert_eq!(rig.camera().frame(), &CameraFrame::default());

        rig.apply_preset(CameraPreset::Saved);
        assert_eq!(rig.snapshot(), saved);
    }

    #[test]
    fn test_saved_game_camera_restores_style() {
        let mut rig = CameraRig::default();
        rig.handle_key('j');
        rig.save_snapshot();

        rig.handle_key('C');
        assert_eq!(rig.preset(), CameraPreset::Close);
        assert_eq!(rig.style(), CameraStyle::Orbit);

        rig.handle_key('C');
        assert_eq!(rig.preset(), CameraPreset::Saved);
        assert_eq!(rig.style(), CameraStyle::Game);
    }

    #[test]
    fn test_restored_game_snapshot_returns_to_default_radius() {
        let json = r#"{
            "style": "game",
            "eye": { "x": 2.0, "y": 0.0, "z": 0.0 },
            "center": { "x": 2.0, "y": 0.0, "z": -1.0 },
            "up": { "x": 0.0, "y": 1.0, "z": 0.0 }
        }"#;
        let snapshot = CameraSnapshot::from_json(json).expect("valid snapshot");

        let mut rig = CameraRig::default();
        rig.camera_mut().zoom(120.0, 0.0);
        rig.handle_key('j');

        rig.restore(snapshot);
        rig.handle_key('o');
        assert!((rig.camera().frame().radius() - 10.0).abs() < EPSILON);
        assert!((rig.camera().center() - Vector3::new(2.0, 0.0, -10.0)).length() < EPSILON);
    }

    #[test]
    fn test_previous_preset_wraps_to_saved() {
        let mut rig = CameraRig::default();
        rig.handle_key('c');
        assert_eq!(rig.preset(), CameraPreset::Saved);
    }

    #[test]
    fn test_restore_from_json() {
        let json = r#"{
            "style": "orbit",
            "eye": { "x": 0.0, "y": 4.0, "z": 3.0 },
            "center": { "x": 0.0, "y": 0.0, "z": 0.0 },
            "up": { "x": 0.0, "y": 0.6, "z": -0.8 }
        }"#;
        let snapshot = CameraSnapshot::from_json(json).expect("valid snapshot");

        let mut rig = CameraRig::default();
        rig.restore(snapshot);
        assert!((rig.ortho_factor() - 5.0 * 0.00025).abs() < 1e-7);
    }
}

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn test_zoom_key_animates_over_iterations() {
        let mut rig = CameraRig::default();
        rig.set_motion_iterations(4);
        rig.handle_key('Z');

        assert_eq!(run_motion(&mut rig), 4);
        assert!((rig.camera().frame().radius() - 12.0).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_in_refused_close_to_focus() {
        let frame = CameraFrame::new(Vector3::new(0.0, 0.0, 1.0), Vector3::ZERO, Vector3::Y);
        let mut rig = CameraRig::with_camera(CameraStyle::Orbit, frame, CameraConfig::default());

        rig.handle_key('z');
        assert!(!rig.is_animating());
        assert_eq!(rig.camera().frame(), &frame);
    }

    #[test]
    fn test_pitch_and_back() {
        let mut rig = CameraRig::default();
        rig.handle_key('x');
        run_motion(&mut rig);
        assert!((rig.camera().eye().y - 1.0).abs() > 1.0);

        rig.handle_key('X');
        run_motion(&mut rig);
        assert!((rig.camera().eye() - Vector3::new(0.0, 1.0, 10.0)).length() < 0.05);
    }

    #[test]
    fn test_advance_without_motion_applies_nothing() {
        let mut rig = CameraRig::default();
        assert_eq!(rig.advance(1.0), 0);
        assert_eq!(rig.camera().frame(), &CameraFrame::default());
    }
}

#[cfg(test)]
mod pointer_tests {
    use super::*;

    #[test]
    fn test_left_drag_orbits() {
        let mut rig = CameraRig::default();
        rig.handle_input(&InputEvent::ButtonPressed { button: Button::MouseLeft, x: 100.0, y: 100.0 });
        let action = rig.handle_input(&InputEvent::CursorMoved { x: 140.0, y: 120.0 });

        assert_eq!(action, DragAction::Orbit);
        assert!((rig.camera().frame().radius() - 10.0).abs() < 1e-3);
        assert_ne!(rig.camera().eye(), Vector3::new(0.0, 1.0, 10.0));
        assert_eq!(rig.camera().center(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_both_buttons_zoom() {
        let mut rig = CameraRig::default();
        rig.handle_input(&InputEvent::ButtonPressed { button: Button::MouseLeft, x: 0.0, y: 0.0 });
        rig.handle_input(&InputEvent::ButtonPressed { button: Button::MouseRight, x: 0.0, y: 0.0 });
        let action = rig.handle_input(&InputEvent::CursorMoved { x: 0.0, y: 40.0 });

        assert_eq!(action, DragAction::Zoom);
        assert!((rig.camera().frame().radius() - 8.0).abs() < 1e-3);
    }

    #[test]
    fn test_released_buttons_stop_dragging() {
        let mut rig = CameraRig::default();
        rig.handle_input(&InputEvent::ButtonPressed { button: Button::MouseRight, x: 0.0, y: 0.0 });
        rig.handle_input(&InputEvent::ButtonReleased { button: Button::MouseRight, x: 0.0, y: 0.0 });
        let action = rig.handle_input(&InputEvent::CursorMoved { x: 50.0, y: 50.0 });

        assert_eq!(action, DragAction::None);
        assert_eq!(rig.camera().frame(), &CameraFrame::default());
    }
}
