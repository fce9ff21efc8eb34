use constants::palette::{
    CODE_BACKGROUND, CODE_FOREGROUND, Theme, quote_accent, quote_background,
};
use constants::typography;
use serde::Serialize;

use crate::document::content_tree::NodeKind;

/// Presentation rule attached to a content tree node kind. Lengths are in
/// rem; colours are CSS hex strings from the shared palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PresentationRule {
    Heading {
        font_scale: f32,
        margin_top: f32,
        margin_bottom: f32,
        font_family: &'static str,
    },
    Paragraph {
        margin_bottom: f32,
        line_height: f32,
    },
    List {
        margin_bottom: f32,
        item_spacing: f32,
    },
    ListItem,
    InlineCode {
        padding_x: f32,
        padding_y: f32,
        corner_radius: f32,
        background: &'static str,
        foreground: &'static str,
    },
    BlockCode {
        padding: f32,
        margin_bottom: f32,
        corner_radius: f32,
        scroll_on_overflow: bool,
        background: &'static str,
        foreground: &'static str,
    },
    Link {
        open_in_new_context: bool,
    },
    BlockQuote {
        border_width: f32,
        padding_left: f32,
        padding_y: f32,
        margin_bottom: f32,
        italic: bool,
        accent: &'static str,
        background: &'static str,
    },
    Divider {
        spacing: f32,
    },
    Embed {
        width: String,
        height: String,
    },
    /// Host rendering library default for kinds without a dedicated rule.
    Default,
}

/// Deterministic, total mapping from node kind to presentation rule. Only the
/// block quote branches on the theme palette; every unlisted kind falls back
/// to the host default.
pub fn rule_for(kind: &NodeKind, theme: Theme) -> PresentationRule {
    match kind {
        NodeKind::Heading(level) => match typography::heading_style(*level) {
            Some(style) => PresentationRule::Heading {
                font_scale: style.font_scale,
                margin_top: style.margin_top,
                margin_bottom: style.margin_bottom,
                font_family: typography::HEADING_FONT_FAMILY,
            },
            None => PresentationRule::Default,
        },
        NodeKind::Paragraph => PresentationRule::Paragraph {
            margin_bottom: typography::PARAGRAPH_MARGIN_BOTTOM,
            line_height: typography::PARAGRAPH_LINE_HEIGHT,
        },
        NodeKind::UnorderedList | NodeKind::OrderedList { .. } => PresentationRule::List {
            margin_bottom: typography::LIST_MARGIN_BOTTOM,
            item_spacing: typography::LIST_ITEM_SPACING,
        },
        NodeKind::ListItem => PresentationRule::ListItem,
        NodeKind::InlineCode => PresentationRule::InlineCode {
            padding_x: typography::CODE_PADDING_X,
            padding_y: typography::CODE_PADDING_Y,
            corner_radius: typography::CODE_CORNER_RADIUS,
            background: CODE_BACKGROUND,
            foreground: CODE_FOREGROUND,
        },
        NodeKind::BlockCode { .. } => PresentationRule::BlockCode {
            padding: typography::CODE_BLOCK_PADDING,
            margin_bottom: typography::CODE_BLOCK_MARGIN_BOTTOM,
            corner_radius: typography::CODE_CORNER_RADIUS,
            scroll_on_overflow: true,
            background: CODE_BACKGROUND,
            foreground: CODE_FOREGROUND,
        },
        NodeKind::Link { .. } => PresentationRule::Link {
            open_in_new_context: true,
        },
        NodeKind::BlockQuote => PresentationRule::BlockQuote {
            border_width: typography::QUOTE_BORDER_WIDTH,
            padding_left: typography::QUOTE_PADDING_LEFT,
            padding_y: typography::QUOTE_PADDING_Y,
            margin_bottom: typography::QUOTE_MARGIN_BOTTOM,
            italic: true,
            accent: quote_accent(theme),
            background: quote_background(theme),
        },
        NodeKind::HorizontalRule => PresentationRule::Divider {
            spacing: typography::DIVIDER_SPACING,
        },
        NodeKind::VoxelEmbed { width, height } => PresentationRule::Embed {
            width: width.clone(),
            height: height.clone(),
        },
        _ => PresentationRule::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_carry_distinct_scales() {
        let scales: Vec<f32> = (1..=3)
            .map(|level| match rule_for(&NodeKind::Heading(level), Theme::Light) {
                PresentationRule::Heading { font_scale, .. } => font_scale,
                other => panic!("heading {level} mapped to {other:?}"),
            })
            .collect();
        assert!(scales[0] > scales[1] && scales[1] > scales[2]);
    }

    #[test]
    fn deep_headings_use_host_default() {
        assert_eq!(
            rule_for(&NodeKind::Heading(4), Theme::Light),
            PresentationRule::Default
        );
    }

    #[test]
    fn code_styles_share_colours_but_differ_in_shape() {
        let inline = rule_for(&NodeKind::InlineCode, Theme::Light);
        let block = rule_for(
            &NodeKind::BlockCode {
                language: Some("rust".into()),
            },
            Theme::Light,
        );
        match (inline, block) {
            (
                PresentationRule::InlineCode {
                    background: inline_bg,
                    ..
                },
                PresentationRule::BlockCode {
                    background: block_bg,
                    scroll_on_overflow,
                    ..
                },
            ) => {
                assert_eq!(inline_bg, block_bg);
                assert!(scroll_on_overflow);
            }
            other => panic!("unexpected rules: {other:?}"),
        }
    }

    #[test]
    fn block_quote_palette_follows_theme() {
        let light = rule_for(&NodeKind::BlockQuote, Theme::Light);
        let dark = rule_for(&NodeKind::BlockQuote, Theme::Dark);
        match (light, dark) {
            (
                PresentationRule::BlockQuote {
                    accent: light_accent,
                    ..
                },
                PresentationRule::BlockQuote {
                    accent: dark_accent, ..
                },
            ) => assert_ne!(light_accent, dark_accent),
            other => panic!("unexpected rules: {other:?}"),
        }
    }

    #[test]
    fn links_open_a_new_browsing_context() {
        assert_eq!(
            rule_for(
                &NodeKind::Link {
                    href: "https://example.org".into(),
                    title: String::new()
                },
                Theme::Dark
            ),
            PresentationRule::Link {
                open_in_new_context: true
            }
        );
    }

    #[test]
    fn unlisted_kinds_fall_back_to_default() {
        for kind in [
            NodeKind::Table,
            NodeKind::Emphasis,
            NodeKind::InlineMath("x".into()),
            NodeKind::RawHtml("<aside/>".into()),
        ] {
            assert_eq!(rule_for(&kind, Theme::Light), PresentationRule::Default);
        }
    }
}
