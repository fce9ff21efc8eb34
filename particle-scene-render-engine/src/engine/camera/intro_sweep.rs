use bevy::prelude::*;
use std::f32::consts::PI;

use crate::engine::core::app_state::FrameCounter;
use constants::scene_settings::{
    CAMERA_AZIMUTH, CAMERA_HEIGHT, INTRO_EASE_WINDOW, INTRO_SWEEP_TURNS, LOOK_TARGET, ORBIT_RADIUS,
};

/// Ease-out circ: decelerates towards 1 with a quartic root.
pub fn ease_out_circ(x: f32) -> f32 {
    (1.0 - (x - 1.0).powi(4)).sqrt()
}

/// Rotation about the vertical axis applied to the initial camera position
/// at the given intro frame.
pub fn sweep_rotation(frame: u32) -> f32 {
    -ease_out_circ(frame as f32 / INTRO_EASE_WINDOW) * PI * INTRO_SWEEP_TURNS
}

/// Camera rest position at a fixed azimuth and height.
pub fn initial_camera_position() -> Vec3 {
    Vec3::new(
        ORBIT_RADIUS * CAMERA_AZIMUTH.sin(),
        CAMERA_HEIGHT,
        ORBIT_RADIUS * CAMERA_AZIMUTH.cos(),
    )
}

pub fn look_target() -> Vec3 {
    Vec3::from_array(LOOK_TARGET)
}

/// Override the camera orbit during the intro phase: rotate the rest
/// position about the vertical axis by the eased sweep angle, keep the
/// height fixed and re-aim at the target every frame.
pub fn intro_camera_sweep(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    counter: Res<FrameCounter>,
) {
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        let rest = initial_camera_position();
        let (sin_rot, cos_rot) = sweep_rotation(counter.frame).sin_cos();
        camera_transform.translation = Vec3::new(
            rest.x * cos_rot + rest.z * sin_rot,
            CAMERA_HEIGHT,
            rest.z * cos_rot - rest.x * sin_rot,
        );
        camera_transform.look_at(look_target(), Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_spans_zero_to_one() {
        assert!(ease_out_circ(0.0).abs() < 1e-6);
        assert!((ease_out_circ(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn easing_is_monotone_over_the_sweep() {
        let mut previous = ease_out_circ(0.0);
        for step in 1..=120 {
            let value = ease_out_circ(step as f32 / 120.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn sweep_starts_at_rest() {
        assert!(sweep_rotation(0).abs() < 1e-6);
    }

    #[test]
    fn rest_position_matches_azimuth() {
        let rest = initial_camera_position();
        assert!((rest.x - 20.0 * (0.2 * PI).sin()).abs() < 1e-5);
        assert!((rest.y - 10.0).abs() < f32::EPSILON);
        assert!((rest.z - 20.0 * (0.2 * PI).cos()).abs() < 1e-5);
    }

    #[test]
    fn sweep_preserves_distance_from_axis() {
        let rest = initial_camera_position();
        let radius = (rest.x * rest.x + rest.z * rest.z).sqrt();
        for frame in [1, 25, 50, 100] {
            let (sin_rot, cos_rot) = sweep_rotation(frame).sin_cos();
            let x = rest.x * cos_rot + rest.z * sin_rot;
            let z = rest.z * cos_rot - rest.x * sin_rot;
            assert!(((x * x + z * z).sqrt() - radius).abs() < 1e-3);
        }
    }
}
