/// Spacing and scale values for rendered document elements. Lengths are in
/// rem so the host can map them onto its own root font size.
pub struct HeadingStyle {
    pub level: u8,
    pub font_scale: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

/// Distinct scale and spacing per heading level 1-3. Levels beyond 3 use the
/// host's default heading treatment.
pub const HEADING_STYLES: &[HeadingStyle] = &[
    HeadingStyle {
        level: 1,
        font_scale: 2.25,
        margin_top: 2.0,
        margin_bottom: 1.5,
    },
    HeadingStyle {
        level: 2,
        font_scale: 1.875,
        margin_top: 1.5,
        margin_bottom: 1.0,
    },
    HeadingStyle {
        level: 3,
        font_scale: 1.5,
        margin_top: 1.25,
        margin_bottom: 0.75,
    },
];

pub const HEADING_FONT_FAMILY: &str = "Arial";

pub fn heading_style(level: u8) -> Option<&'static HeadingStyle> {
    HEADING_STYLES.iter().find(|s| s.level == level)
}

pub const PARAGRAPH_MARGIN_BOTTOM: f32 = 1.0;
pub const PARAGRAPH_LINE_HEIGHT: f32 = 1.7;

pub const LIST_MARGIN_BOTTOM: f32 = 1.0;
pub const LIST_ITEM_SPACING: f32 = 0.5;

/// Inline code badge metrics.
pub const CODE_PADDING_X: f32 = 0.5;
pub const CODE_PADDING_Y: f32 = 0.24;
pub const CODE_CORNER_RADIUS: f32 = 0.375;

/// Block code metrics; shares the badge colour scheme.
pub const CODE_BLOCK_PADDING: f32 = 1.0;
pub const CODE_BLOCK_MARGIN_BOTTOM: f32 = 1.0;

pub const QUOTE_BORDER_WIDTH: f32 = 0.25;
pub const QUOTE_PADDING_LEFT: f32 = 1.0;
pub const QUOTE_PADDING_Y: f32 = 0.5;
pub const QUOTE_MARGIN_BOTTOM: f32 = 1.0;

pub const DIVIDER_SPACING: f32 = 1.5;
