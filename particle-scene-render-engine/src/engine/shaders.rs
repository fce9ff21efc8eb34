/// Particle cloud shader material with time and theme colour uniforms.
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::{AsBindGroup, ShaderRef};

use crate::engine::theme::ThemeState;
use constants::palette::{Theme, point_colour};
use constants::scene_settings::SHADER_TIME_SCALE;

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleShader {
    #[uniform(0)]
    pub time: f32,

    #[uniform(1)]
    pub colour: LinearRgba,
}

impl Material for ParticleShader {
    fn vertex_shader() -> ShaderRef {
        "shaders/particles.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/particles.wgsl".into()
    }

    // Additive blending; the transparent pass leaves depth writes off.
    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}

/// Shader colour for the active theme: black points on light, white on dark.
pub fn point_colour_for(theme: Theme) -> LinearRgba {
    let [r, g, b] = point_colour(theme);
    LinearRgba::rgb(r, g, b)
}

/// Advance the time uniform and re-resolve the theme colour every frame,
/// in both sweep and orbit phases.
pub fn update_shader_uniforms(
    time: Res<Time>,
    theme: Res<ThemeState>,
    mut materials: ResMut<Assets<ParticleShader>>,
) {
    let elapsed_ms = time.elapsed_secs() * 1000.0;
    for (_, material) in materials.iter_mut() {
        material.time = elapsed_ms * SHADER_TIME_SCALE;
        material.colour = point_colour_for(theme.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_uniform_follows_theme() {
        assert_eq!(point_colour_for(Theme::Light), LinearRgba::rgb(0.0, 0.0, 0.0));
        assert_eq!(point_colour_for(Theme::Dark), LinearRgba::rgb(1.0, 1.0, 1.0));
    }
}
