//! Shared content and view types.
//!
//! These types appear both in authored records (TOML files under `content/`)
//! and in the composed site manifest, so they derive both `Serialize` and
//! `Deserialize` and must stay identical across the load and compose stages.
//!
//! Absent optional fields are omitted from serialized output entirely — a
//! gallery image with no tags serializes without a `tags` key, which is not
//! the same thing as `tags: []`. Downstream renderers rely on that
//! distinction.

use serde::{Deserialize, Serialize};

/// Semantic color slot for a gallery tag.
///
/// The renderer maps these onto the design-token palette; records never
/// carry raw color values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagColor {
    Primary,
    Accent,
    Neutral,
}

/// A short label overlaid on a gallery image (`"By Gil"`, `"Featured"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
    /// Absent means the renderer's default tag styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TagColor>,
}

/// A single image in a gallery grid.
///
/// `src` is an opaque reference — a path or URL the asset pipeline
/// understands. This crate never touches image bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// `None` (field absent) when the image has no tags at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// A titled block of paragraphs composing a long-form record page,
/// optionally with its own gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub title: String,
    /// Paragraphs are Markdown; compose renders them to HTML fragments.
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryImage>>,
}

/// A linked artist name. `href` is absent for guest artists that have no
/// record of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistLink {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A linked style name. Styles always resolve to a page, so `href` is
/// mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleLink {
    pub name: String,
    pub href: String,
}
