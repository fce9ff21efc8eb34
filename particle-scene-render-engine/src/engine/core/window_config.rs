use bevy::prelude::*;
use bevy::window::PresentMode;

/// Window sized by the embedding container. On wasm the canvas tracks its
/// parent element, which is how host resize events reach the surface.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(constants::embed::CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "particle scene".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
