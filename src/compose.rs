//! View manifest composition.
//!
//! Stage 2 of the stencil pipeline. Joins the loaded catalog through the
//! cross-reference layer ([`crate::xref`]) into a view-ready `SiteManifest`,
//! then writes it to the output directory alongside the design-token
//! stylesheet:
//!
//! ```text
//! dist/
//! ├── manifest.json   # resolved artist and style views
//! └── tokens.css      # design tokens as CSS custom properties
//! ```
//!
//! The page renderer that consumes these files is an external collaborator;
//! everything it needs — effective slugs, linked names, aggregated
//! galleries, HTML fragments — is resolved here so it never touches raw
//! records.
//!
//! ## Fallback ladder
//!
//! Computed views win, authored content backs them up:
//! - an artist's gallery comes from their tagged works, else the authored
//!   gallery;
//! - a style's artist list comes from `related_artists`, else the authored
//!   list (guest artists live only there);
//! - a style's gallery comes from tagged works, else the synthesized cover
//!   entry, else the authored gallery.

use std::fs;
use std::path::Path;

use pulldown_cmark::{Parser, html as md_html};
use serde::Serialize;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::Catalog;
use crate::tokens;
use crate::types::{ArtistLink, ContentSection, GalleryImage, StyleLink};
use crate::xref;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The composed site, ready for the external renderer.
#[derive(Debug, Serialize)]
pub struct SiteManifest {
    pub site: SiteInfo,
    pub artists: Vec<ArtistView>,
    pub styles: Vec<StyleView>,
}

#[derive(Debug, Serialize)]
pub struct SiteInfo {
    pub title: String,
    pub base_url: String,
}

/// A fully-resolved artist page model.
#[derive(Debug, Serialize)]
pub struct ArtistView {
    /// Effective slug; the renderer builds `/artists/{slug}` from it.
    pub slug: String,
    pub name: String,
    pub bio_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_bio_html: Option<String>,
    pub image: String,
    pub instagram: String,
    pub booking_href: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<StyleLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionView>,
}

/// A fully-resolved style page model.
#[derive(Debug, Serialize)]
pub struct StyleView {
    pub slug: String,
    pub name: String,
    pub description_html: String,
    pub booking_href: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<ArtistLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub title: String,
    pub paragraphs_html: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryImage>>,
}

/// Render a Markdown fragment to HTML.
fn markdown_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

fn render_sections(sections: &[ContentSection]) -> Vec<SectionView> {
    sections
        .iter()
        .map(|section| SectionView {
            title: section.title.clone(),
            paragraphs_html: section.paragraphs.iter().map(|p| markdown_html(p)).collect(),
            gallery: section.gallery.clone(),
        })
        .collect()
}

/// Build the site manifest from a loaded catalog. Pure: the catalog is
/// borrowed and never mutated.
pub fn compose(catalog: &Catalog, config: &SiteConfig) -> SiteManifest {
    let artists = catalog
        .artists
        .iter()
        .map(|artist| {
            let slug = artist.effective_slug();
            let works = xref::works_by_artist(slug, &catalog.works);
            let gallery = if works.is_empty() {
                artist.data.gallery.clone()
            } else {
                xref::works_to_gallery_images(&works, &artist.data.name, &catalog.styles)
            };
            ArtistView {
                slug: slug.to_string(),
                name: artist.data.name.clone(),
                bio_html: markdown_html(&artist.data.bio),
                full_bio_html: artist.data.full_bio.as_deref().map(markdown_html),
                image: artist.data.image.clone(),
                instagram: artist.data.instagram.clone(),
                booking_href: artist.data.booking_href.clone(),
                styles: xref::resolve_styles(&artist.data.styles, &catalog.styles),
                gallery,
                sections: render_sections(&artist.data.sections),
            }
        })
        .collect();

    let styles = catalog
        .styles
        .iter()
        .map(|style| {
            let slug = style.effective_slug();
            let related = xref::related_artists(slug, &catalog.artists, &catalog.works);
            let artists = if related.is_empty() {
                style.data.artists.clone()
            } else {
                related
            };
            let gallery = xref::style_gallery_images(
                slug,
                &catalog.works,
                &catalog.artists,
                &style.data.name,
                style.data.cover.as_deref(),
            );
            let gallery = if gallery.is_empty() {
                style.data.gallery.clone()
            } else {
                gallery
            };
            StyleView {
                slug: slug.to_string(),
                name: style.data.name.clone(),
                description_html: markdown_html(&style.data.description),
                booking_href: style.data.booking_href.clone(),
                artists,
                gallery,
                sections: render_sections(&style.data.sections),
            }
        })
        .collect();

    SiteManifest {
        site: SiteInfo {
            title: config.site.title.clone(),
            base_url: config.site.base_url.clone(),
        },
        artists,
        styles,
    }
}

/// Write the manifest and the token stylesheet into the output directory.
pub fn write(manifest: &SiteManifest, out_dir: &Path) -> Result<(), ComposeError> {
    fs::create_dir_all(out_dir)?;

    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(out_dir.join("manifest.json"), json)?;

    fs::write(out_dir.join("tokens.css"), tokens::stylesheet())?;

    tracing::info!(
        artists = manifest.artists.len(),
        styles = manifest.styles.len(),
        out = %out_dir.display(),
        "site manifest written"
    );
    Ok(())
}
