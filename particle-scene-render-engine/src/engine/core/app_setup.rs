use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

// Crate engine modules
use crate::engine::camera::intro_sweep::intro_camera_sweep;
use crate::engine::camera::orbit_camera::{orbit_camera_controller, sync_orbit_from_camera};
use crate::engine::core::app_state::{
    FrameCounter, ScenePhase, SceneTeardown, advance_frame_counter, scene_active,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::point_cloud::spawn_scene_when_ready;
use crate::engine::shaders::{ParticleShader, update_shader_uniforms};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::surface::{SurfaceDims, handle_window_resize, measure_surface};
use crate::engine::systems::teardown::{TeardownRequest, handle_teardown_requests};
use crate::engine::theme::{ThemeState, resolve_theme};
// Crate web RPC modules
use crate::rpc::web_rpc::{WebRpcPlugin, announce_scene_ready};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<ParticleShader>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .init_state::<ScenePhase>();

    // Initialise resources early
    app.init_resource::<SurfaceDims>()
        .init_resource::<FrameCounter>()
        .init_resource::<SceneTeardown>()
        .init_resource::<ThemeState>()
        .add_event::<TeardownRequest>();

    // Phase-bound systems
    app.add_systems(
        Update,
        (measure_surface, spawn_scene_when_ready)
            .chain()
            .run_if(in_state(ScenePhase::Waiting)),
    )
    .add_systems(
        Update,
        (advance_frame_counter, intro_camera_sweep)
            .chain()
            .run_if(in_state(ScenePhase::IntroSweep).and(scene_active)),
    )
    .add_systems(
        Update,
        orbit_camera_controller.run_if(in_state(ScenePhase::IdleOrbit).and(scene_active)),
    )
    .add_systems(OnEnter(ScenePhase::IntroSweep), announce_scene_ready)
    .add_systems(OnEnter(ScenePhase::IdleOrbit), sync_orbit_from_camera);

    // Every frame regardless of phase, while the scene is alive: theme
    // resolution then shader uniform updates.
    app.add_systems(
        Update,
        (resolve_theme, update_shader_uniforms)
            .chain()
            .run_if(scene_active),
    )
    .add_systems(
        Update,
        (
            handle_window_resize,
            handle_teardown_requests,
            fps_notification_system,
        ),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, create_native_overlays)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}
