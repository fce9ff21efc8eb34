use bevy::app::AppExit;
use bevy::prelude::*;

use crate::engine::core::app_state::SceneTeardown;
use crate::engine::point_cloud::ParticleCloud;

/// Host request to tear the scene down (view unmounted).
#[derive(Event)]
pub struct TeardownRequest;

/// Release the scene: despawn the particle cloud and camera, stop all
/// per-frame work and ask the app to exit. Safe to invoke repeatedly; only
/// the first request does anything.
pub fn handle_teardown_requests(
    mut teardown_events: EventReader<TeardownRequest>,
    mut teardown: ResMut<SceneTeardown>,
    mut commands: Commands,
    cameras: Query<Entity, With<Camera3d>>,
    particles: Query<Entity, With<ParticleCloud>>,
    mut exit: EventWriter<AppExit>,
) {
    if teardown_events.is_empty() {
        return;
    }
    teardown_events.clear();

    if teardown.done {
        info!("Teardown already applied");
        return;
    }

    for entity in &particles {
        commands.entity(entity).despawn();
    }
    for entity in &cameras {
        commands.entity(entity).despawn();
    }
    teardown.done = true;
    info!("Scene torn down, exiting");
    exit.write(AppExit::Success);
}
