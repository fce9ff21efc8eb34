use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use rand::Rng;
use std::f32::consts::PI;

use crate::engine::camera::intro_sweep::{initial_camera_position, look_target};
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::app_state::ScenePhase;
use crate::engine::shaders::{ParticleShader, point_colour_for};
use crate::engine::systems::surface::SurfaceDims;
use crate::engine::theme::ThemeState;
use constants::scene_settings::{
    CAMERA_FAR, CAMERA_NEAR, POINT_COUNT, SPHERE_RADIUS, view_half_extent,
};

#[derive(Component)]
pub struct ParticleCloud;

/// Sample points uniformly on the surface of a sphere using the standard
/// spherical transform: theta = 2*pi*u, phi = acos(2v - 1).
pub fn generate_sphere_points<R: Rng>(rng: &mut R, count: usize, radius: f32) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            let u: f32 = rng.gen_range(0.0..1.0);
            let v: f32 = rng.gen_range(0.0..1.0);
            let theta = 2.0 * PI * u;
            let phi = (2.0 * v - 1.0).acos();
            [
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ]
        })
        .collect()
}

/// Point-list mesh carrying the particle positions for GPU rendering.
pub fn create_particle_mesh(points: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, points);
    mesh
}

/// Construct the whole scene once the surface has usable dimensions: camera,
/// orbit controller and particle cloud. Runs while `Waiting` and performs
/// the transition into the intro sweep.
pub fn spawn_scene_when_ready(
    mut commands: Commands,
    dims: Res<SurfaceDims>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ParticleShader>>,
    theme: Res<ThemeState>,
    mut next_phase: ResMut<NextState<ScenePhase>>,
) {
    if !dims.is_measured() {
        return;
    }

    // View volume half-extent scales linearly with surface height.
    let extent = view_half_extent(dims.height);
    commands.spawn((
        Camera3d::default(),
        Projection::Orthographic(OrthographicProjection {
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            scaling_mode: ScalingMode::Fixed {
                width: extent * 2.0,
                height: extent * 2.0,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(initial_camera_position()).looking_at(look_target(), Vec3::Y),
    ));
    commands.insert_resource(OrbitCamera::new(look_target()));

    let mut rng = rand::thread_rng();
    let points = generate_sphere_points(&mut rng, POINT_COUNT, SPHERE_RADIUS);
    let mesh = create_particle_mesh(points);
    let material = ParticleShader {
        time: 0.0,
        colour: point_colour_for(theme.current),
    };

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(material)),
        Transform::from_translation(Vec3::ZERO),
        Visibility::Visible,
        ParticleCloud,
        NoFrustumCulling,
    ));

    info!(
        "Particle scene spawned: {} points on a {}x{} surface",
        POINT_COUNT, dims.width, dims.height
    );
    next_phase.set(ScenePhase::IntroSweep);
}
