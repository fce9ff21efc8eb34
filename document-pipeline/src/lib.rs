//! Markdown document pipeline for the portfolio site.
//!
//! Converts raw markdown into a structured content tree, maps tree nodes to
//! presentation rules, and lists front-matter posts for the writing index.
//! Rendering is pure and permissive: the same input always produces the same
//! tree, and malformed input degrades to literal text instead of erroring.

pub mod document;
pub mod posts;
pub mod presentation;

pub use document::content_tree::{ContentNode, NodeKind};
pub use document::pipeline::DocumentRenderer;
pub use posts::{Post, PostError};
pub use presentation::rules::{PresentationRule, rule_for};
