/// Build-time export: renders a directory of markdown posts into content
/// tree JSON documents plus a listing index for the hosting site.
use std::env;
use std::fs;
use std::path::Path;

use document_pipeline::document::pipeline::DocumentRenderer;
use document_pipeline::posts::load_posts;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <posts_dir> <output_dir>", args[0]);
        std::process::exit(1);
    }

    let posts_dir = Path::new(&args[1]);
    let output_dir = Path::new(&args[2]);
    fs::create_dir_all(output_dir)?;

    let renderer = DocumentRenderer::new();
    let posts = load_posts(posts_dir)?;
    tracing::info!(count = posts.len(), "rendering posts");

    let mut index = Vec::new();
    for post in &posts {
        let tree = renderer.render(&post.body);
        let document = serde_json::json!({
            "slug": post.slug,
            "title": post.title,
            "date": post.date,
            "tree": tree,
        });
        let out_path = output_dir.join(format!("{}.json", post.slug));
        fs::write(&out_path, serde_json::to_string_pretty(&document)?)?;
        index.push(serde_json::json!({
            "slug": post.slug,
            "title": post.title,
            "date": post.date,
        }));
    }

    // The index preserves the listing order; consumers must not re-sort.
    fs::write(
        output_dir.join("index.json"),
        serde_json::to_string_pretty(&index)?,
    )?;

    Ok(())
}
