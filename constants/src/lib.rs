pub mod embed;
pub mod palette;
pub mod scene_settings;
pub mod typography;
