use bevy::prelude::*;

use constants::palette::Theme;

/// Active theme, refreshed once per frame from the persisted preference.
/// Systems read this resource only; the platform probe is the single place
/// ambient state is touched.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ThemeState {
    pub current: Theme,
}

/// Re-resolve the persisted preference. On wasm this reads the hosting
/// page's localStorage; natively the last RPC-set value is kept.
pub fn resolve_theme(mut theme: ResMut<ThemeState>) {
    if let Some(stored) = read_stored_preference() {
        if stored != theme.current {
            info!("Theme preference changed to {}", stored.name());
            theme.current = stored;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_stored_preference() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let value = storage
        .get_item(constants::embed::THEME_STORAGE_KEY)
        .ok()
        .flatten()?;
    Theme::from_name(&value)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_stored_preference() -> Option<Theme> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_light() {
        assert_eq!(ThemeState::default().current, Theme::Light);
    }
}
