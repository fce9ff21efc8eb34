use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Faults raised while listing posts. Individual bad files are skipped by
/// [`load_posts`]; these surface only when loading a single post directly.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("missing front matter delimiter")]
    MissingFrontMatter,
    #[error("missing required front matter field: {0}")]
    MissingField(&'static str),
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PostResult<T> = Result<T, PostError>;

/// One listed post: front matter plus the body with the header stripped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub body: String,
}

/// Split a `---`-delimited front matter header off a document and parse its
/// `title` and `date` fields. Returns the metadata and the remaining body.
pub fn parse_front_matter(text: &str) -> PostResult<(String, NaiveDate, &str)> {
    let rest = text
        .strip_prefix("---")
        .ok_or(PostError::MissingFrontMatter)?;
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    let end = rest
        .find("\n---")
        .ok_or(PostError::MissingFrontMatter)?;
    let header = &rest[..end];
    let body = rest[end + 4..].trim_start_matches('\n');

    let mut title = None;
    let mut date = None;
    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');
        match key.trim() {
            "title" => title = Some(value.to_string()),
            "date" => {
                let parsed = value
                    .parse::<NaiveDate>()
                    .map_err(|source| PostError::InvalidDate {
                        value: value.to_string(),
                        source,
                    })?;
                date = Some(parsed);
            }
            _ => {}
        }
    }

    let title = title.ok_or(PostError::MissingField("title"))?;
    let date = date.ok_or(PostError::MissingField("date"))?;
    Ok((title, date, body))
}

/// URL-safe identifier derived from a file name: extension stripped,
/// lowercased, runs of non-alphanumerics collapsed to single hyphens.
pub fn slug_from_file_name(name: &str) -> String {
    let stem = name.strip_suffix(".md").unwrap_or(name);
    let mut slug = String::with_capacity(stem.len());
    let mut pending_hyphen = false;
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Load a single markdown post from disk.
pub fn load_post(path: &Path) -> PostResult<Post> {
    let text = fs::read_to_string(path)?;
    let (title, date, body) = parse_front_matter(&text)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Post {
        slug: slug_from_file_name(&file_name),
        title,
        date,
        body: body.to_string(),
    })
}

/// List every `.md` post in a directory, sorted by date descending. Files
/// with missing or malformed front matter are skipped with a warning; only an
/// unreadable directory is fatal.
pub fn load_posts(dir: &Path) -> PostResult<Vec<Post>> {
    let mut posts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        match load_post(&path) {
            Ok(post) => {
                debug!(slug = %post.slug, date = %post.date, "listed post");
                posts.push(post);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping post");
            }
        }
    }
    // Newest first; slug breaks date ties so the listing order is stable.
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "---\ntitle: \"Ode to Nothing\"\ndate: 2024-01-05\n---\n\nBody text.\n";

    #[test]
    fn front_matter_is_parsed_and_stripped() {
        let (title, date, body) = parse_front_matter(DOCUMENT).unwrap();
        assert_eq!(title, "Ode to Nothing");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(body, "Body text.\n");
    }

    #[test]
    fn missing_delimiter_is_an_error() {
        assert!(matches!(
            parse_front_matter("title: x\n"),
            Err(PostError::MissingFrontMatter)
        ));
    }

    #[test]
    fn missing_fields_are_reported() {
        assert!(matches!(
            parse_front_matter("---\ntitle: x\n---\nbody"),
            Err(PostError::MissingField("date"))
        ));
        assert!(matches!(
            parse_front_matter("---\ndate: 2023-11-20\n---\nbody"),
            Err(PostError::MissingField("title"))
        ));
    }

    #[test]
    fn bad_dates_are_reported() {
        assert!(matches!(
            parse_front_matter("---\ntitle: x\ndate: yesterday\n---\nbody"),
            Err(PostError::InvalidDate { .. })
        ));
    }

    #[test]
    fn slugs_are_url_safe() {
        assert_eq!(slug_from_file_name("Ode To Nothing.md"), "ode-to-nothing");
        assert_eq!(slug_from_file_name("2024_01_05-notes.md"), "2024-01-05-notes");
        assert_eq!(slug_from_file_name("plain.md"), "plain");
    }
}
