/// Number of particles generated for the decorative cloud.
pub const POINT_COUNT: usize = 1500;

/// Radius of the sphere the particles are sampled on.
pub const SPHERE_RADIUS: f32 = 3.5;

/// Frames the intro camera sweep runs for before idle orbit takes over.
pub const INTRO_FRAME_LIMIT: u32 = 100;

/// Divisor applied to the frame counter before easing; the sweep therefore
/// never reaches the end of its easing window.
pub const INTRO_EASE_WINDOW: f32 = 120.0;

/// Full sweep amounts to this many half-turns around the vertical axis.
pub const INTRO_SWEEP_TURNS: f32 = 20.0;

/// Distance of the camera from the vertical axis.
pub const ORBIT_RADIUS: f32 = 20.0;

/// Fixed camera height during the intro sweep.
pub const CAMERA_HEIGHT: f32 = 10.0;

/// Initial camera azimuth around the vertical axis.
pub const CAMERA_AZIMUTH: f32 = 0.2 * std::f32::consts::PI;

/// Camera look-at point, offset below the origin.
pub const LOOK_TARGET: [f32; 3] = [0.0, -1.5, 0.0];

/// Orthographic view volume half-extent, linear in surface height (pixels).
pub const EXTENT_PER_PIXEL: f32 = 0.005;
pub const EXTENT_BASE: f32 = 4.8;

pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 50000.0;

/// Shader time uniform advances by elapsed milliseconds times this factor.
pub const SHADER_TIME_SCALE: f32 = 0.004;

/// Idle auto-rotation speed in radians per second.
pub const AUTO_ROTATE_SPEED: f32 = 0.2;

/// Smoothing factor for orbit camera transform application.
pub const CAMERA_LERP_SPEED: f32 = 12.0;

/// Orthographic half-extent for a surface of the given pixel height.
pub fn view_half_extent(surface_height: f32) -> f32 {
    EXTENT_PER_PIXEL * surface_height + EXTENT_BASE
}
