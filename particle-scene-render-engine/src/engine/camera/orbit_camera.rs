use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::intro_sweep::{initial_camera_position, look_target};
use constants::scene_settings::{AUTO_ROTATE_SPEED, CAMERA_LERP_SPEED};

/// Orbit camera state for the idle phase: spherical coordinates around a
/// fixed target, with idle auto-rotation and manual mouse control.
#[derive(Resource)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub auto_rotate: bool,
}

impl OrbitCamera {
    pub fn new(target: Vec3) -> Self {
        let mut orbit = Self {
            target,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            auto_rotate: true,
        };
        orbit.sync_from_position(initial_camera_position());
        orbit
    }

    /// Re-derive spherical coordinates from a world-space camera position so
    /// control hand-over does not jump.
    pub fn sync_from_position(&mut self, position: Vec3) {
        let offset = position - self.target;
        self.distance = offset.length().max(0.001);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
    }

    /// World-space camera position for the current orbit state.
    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(look_target())
    }
}

/// Sync the orbit state from wherever the intro sweep left the camera.
pub fn sync_orbit_from_camera(
    camera_query: Query<&Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if let Ok(camera_transform) = camera_query.single() {
        orbit.sync_from_position(camera_transform.translation);
    }
}

/// Idle-phase controller: auto-rotation plus mouse orbit and wheel dolly,
/// applied to the camera transform with smoothing.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Read mouse motion
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Drag to orbit
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        orbit.yaw += -mouse_delta.x * yaw_sens;
        orbit.pitch += mouse_delta.y * pitch_sens;
        orbit.pitch = orbit.pitch.clamp(-1.55, 1.55);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Dolly towards/away from the target
    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (orbit.distance * 0.2).clamp(0.5, 50.0);
        orbit.distance = (orbit.distance - scroll_accum * dolly_speed).clamp(1.0, 500.0);
    }

    if orbit.auto_rotate {
        orbit.yaw += AUTO_ROTATE_SPEED * time.delta_secs();
    }

    let target_pos = orbit.position();
    let target_rot = Transform::from_translation(target_pos)
        .looking_at(orbit.target, Vec3::Y)
        .rotation;

    let lerp_speed = (CAMERA_LERP_SPEED * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_round_trips_through_sync() {
        let mut orbit = OrbitCamera::new(Vec3::new(0.0, -1.5, 0.0));
        let start = initial_camera_position();
        orbit.sync_from_position(start);
        assert!(orbit.position().distance(start) < 1e-3);
    }

    #[test]
    fn auto_rotation_is_enabled_by_default() {
        assert!(OrbitCamera::default().auto_rotate);
    }

    #[test]
    fn orbit_keeps_distance_while_yaw_drifts() {
        let mut orbit = OrbitCamera::default();
        let before = orbit.distance;
        orbit.yaw += 1.2;
        let position = orbit.position();
        assert!(((position - orbit.target).length() - before).abs() < 1e-4);
    }
}
