/// Custom single-tag markdown extension embedding the particle scene.
pub const EMBED_TAG: &str = "voxel-art";

/// Embed dimensions when the tag carries no width/height attributes.
pub const DEFAULT_EMBED_WIDTH: &str = "100%";
pub const DEFAULT_EMBED_HEIGHT: &str = "400px";

/// CSS selector of the canvas the scene renders into when embedded.
pub const CANVAS_SELECTOR: &str = "#particle-scene";

/// localStorage key the hosting page persists its colour mode under.
pub const THEME_STORAGE_KEY: &str = "chakra-ui-color-mode";
