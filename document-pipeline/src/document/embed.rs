use constants::embed::{DEFAULT_EMBED_HEIGHT, DEFAULT_EMBED_WIDTH, EMBED_TAG};

/// Parsed `voxel-art` tag attributes with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedAttributes {
    pub width: String,
    pub height: String,
}

/// Recognise a raw-markup span that consists of a single `voxel-art` tag.
/// Anything else (other tags, surrounding content) is not an embed and passes
/// through as raw markup.
pub fn parse_embed_tag(html: &str) -> Option<EmbedAttributes> {
    let trimmed = html.trim();
    let open = format!("<{EMBED_TAG}");
    if !trimmed.starts_with(open.as_str()) || !trimmed.ends_with('>') {
        return None;
    }
    // The character after the tag name must end the name ('>', '/' or space).
    match trimmed.as_bytes().get(open.len()) {
        Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\n') => {}
        _ => return None,
    }
    Some(EmbedAttributes {
        width: attribute_value(trimmed, "width").unwrap_or_else(|| DEFAULT_EMBED_WIDTH.to_string()),
        height: attribute_value(trimmed, "height")
            .unwrap_or_else(|| DEFAULT_EMBED_HEIGHT.to_string()),
    })
}

/// Extract a quoted attribute value from a single tag. Accepts single or
/// double quotes; a missing or unquoted attribute yields None.
fn attribute_value(tag: &str, name: &str) -> Option<String> {
    let mut rest = tag;
    while let Some(pos) = rest.find(name) {
        let after = &rest[pos + name.len()..];
        let after = after.trim_start();
        if let Some(stripped) = after.strip_prefix('=') {
            let stripped = stripped.trim_start();
            let quote = stripped.chars().next()?;
            if quote == '"' || quote == '\'' {
                let inner = &stripped[1..];
                let end = inner.find(quote)?;
                return Some(inner[..end].to_string());
            }
        }
        rest = &rest[pos + name.len()..];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dimensions_are_parsed() {
        let attrs = parse_embed_tag(r#"<voxel-art width="300px" height="200px" />"#).unwrap();
        assert_eq!(attrs.width, "300px");
        assert_eq!(attrs.height, "200px");
    }

    #[test]
    fn missing_attributes_fall_back_to_defaults() {
        let attrs = parse_embed_tag("<voxel-art />").unwrap();
        assert_eq!(attrs.width, DEFAULT_EMBED_WIDTH);
        assert_eq!(attrs.height, DEFAULT_EMBED_HEIGHT);

        let attrs = parse_embed_tag(r#"<voxel-art width="50%">"#).unwrap();
        assert_eq!(attrs.width, "50%");
        assert_eq!(attrs.height, DEFAULT_EMBED_HEIGHT);
    }

    #[test]
    fn single_quoted_attributes_are_accepted() {
        let attrs = parse_embed_tag("<voxel-art width='640px'/>").unwrap();
        assert_eq!(attrs.width, "640px");
    }

    #[test]
    fn other_markup_is_not_an_embed() {
        assert_eq!(parse_embed_tag("<video src=\"a.mp4\">"), None);
        assert_eq!(parse_embed_tag("<voxel-artist>"), None);
        assert_eq!(parse_embed_tag("plain text"), None);
    }
}
