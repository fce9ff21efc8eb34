use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Last measured dimensions of the rendering surface, in logical pixels.
/// The scene does not initialize until both are nonzero.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SurfaceDims {
    pub width: f32,
    pub height: f32,
}

impl SurfaceDims {
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Poll the primary window while waiting for a usable surface.
pub fn measure_surface(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut dims: ResMut<SurfaceDims>,
) {
    if let Ok(window) = windows.single() {
        dims.width = window.width();
        dims.height = window.height();
    }
}

/// Host resizes re-measure the surface; the windowing layer resizes the
/// canvas itself and no other scene state changes.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut dims: ResMut<SurfaceDims>,
) {
    for resized in resize_events.read() {
        dims.width = resized.width;
        dims.height = resized.height;
        debug!("Surface resized to {}x{}", resized.width, resized.height);
    }
}
