//! Content record loading and the in-memory catalog.
//!
//! Stage 1 of the stencil pipeline. Records are authored externally (by hand
//! or through the CMS) as TOML files under the content root:
//!
//! ```text
//! content/
//! ├── config.toml                  # Site configuration (see [`crate::config`])
//! ├── artists/
//! │   ├── alex.toml                # File stem = storage-derived slug
//! │   └── 020-gil.toml             # NNN- prefix controls collection order
//! ├── styles/
//! │   ├── linework.toml
//! │   └── blackwork.toml
//! └── works/
//!     ├── 001-eagle.toml           # Works are ordered the same way
//!     └── 002-woodcut-wolf.toml
//! ```
//!
//! ## Slugs
//!
//! Every record's storage-derived slug is its file stem (ordering prefix
//! stripped). A record may carry a `slug_override` in its data; the
//! *effective* slug — the one published URLs use — is the override when
//! present. This lets authors rename or renumber files without breaking
//! links that are already out in the world.
//!
//! ## Validation
//!
//! The loader enforces exactly one hard rule: effective slugs are unique
//! within their collection. Cross-collection references (a work's artist,
//! a style tag) are deliberately *not* validated here — the lookup layer
//! drops unresolved references at query time, and [`Catalog::dangling_refs`]
//! reports them as lint findings for `stencil check`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::naming;
use crate::types::{ArtistLink, ContentSection, GalleryImage};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {0}: {1}")]
    Toml(PathBuf, #[source] toml::de::Error),
    #[error("Duplicate {0} slug '{1}'")]
    DuplicateSlug(&'static str, String),
    #[error("Content root not found: {0}")]
    MissingRoot(PathBuf),
}

/// A loaded content record: the storage-derived slug plus the typed payload
/// from the file body.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    /// Storage-derived slug (file stem, ordering prefix stripped).
    pub slug: String,
    pub data: T,
}

/// Access to a record's optional slug override.
pub trait Sluggable {
    fn slug_override(&self) -> Option<&str>;
}

impl<T: Sluggable> Entry<T> {
    /// The slug published URLs use: the override when present, otherwise
    /// the storage-derived slug.
    pub fn effective_slug(&self) -> &str {
        self.data.slug_override().unwrap_or(&self.slug)
    }
}

/// An artist record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtistData {
    pub name: String,
    /// Keeps the published URL stable across file renames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_override: Option<String>,
    /// Short bio shown on listings. Markdown.
    pub bio: String,
    /// Extended bio for the artist page. Markdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_bio: Option<String>,
    /// Cover image reference (portrait shown on listings).
    pub image: String,
    /// Instagram handle, without the leading `@`.
    pub instagram: String,
    /// Style slugs this artist works in, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    pub booking_href: String,
    /// Authored gallery, used when the artist has no tagged works yet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ContentSection>,
}

impl Sluggable for ArtistData {
    fn slug_override(&self) -> Option<&str> {
        self.slug_override.as_deref()
    }
}

/// A tattoo style record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_override: Option<String>,
    /// Style description. Markdown.
    pub description: String,
    /// Representative image, used as the fallback gallery entry when no
    /// work is tagged with this style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub booking_href: String,
    /// Authored artist list; guest artists may have no `href`. Used when
    /// no loaded artist resolves to this style.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artists: Vec<ArtistLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ContentSection>,
}

impl Sluggable for StyleData {
    fn slug_override(&self) -> Option<&str> {
        self.slug_override.as_deref()
    }
}

/// A single photographed tattoo piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkData {
    /// Photo of the finished piece.
    pub image: String,
    /// Effective slug of the owning artist.
    pub artist: String,
    /// Style slugs this piece is tagged with. May be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
}

impl Sluggable for WorkData {
    // Works are addressed by file, never by URL; no override exists.
    fn slug_override(&self) -> Option<&str> {
        None
    }
}

/// The three loaded collections. Read-only after load: every derived view
/// is a fresh value computed by [`crate::xref`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub artists: Vec<Entry<ArtistData>>,
    pub styles: Vec<Entry<StyleData>>,
    pub works: Vec<Entry<WorkData>>,
}

impl Catalog {
    /// Cross-collection reference check for `stencil check`.
    ///
    /// Dangling references are reported, never fatal: the lookup layer
    /// drops them at query time and the page simply renders less content.
    pub fn dangling_refs(&self) -> Vec<String> {
        let style_slugs: BTreeSet<&str> =
            self.styles.iter().map(|s| s.effective_slug()).collect();
        let artist_slugs: BTreeSet<&str> =
            self.artists.iter().map(|a| a.effective_slug()).collect();

        let mut findings = Vec::new();
        for artist in &self.artists {
            for style in &artist.data.styles {
                if !style_slugs.contains(style.as_str()) {
                    findings.push(format!(
                        "artist '{}' references unknown style '{}'",
                        artist.effective_slug(),
                        style
                    ));
                }
            }
        }
        for work in &self.works {
            if !artist_slugs.contains(work.data.artist.as_str()) {
                findings.push(format!(
                    "work '{}' references unknown artist '{}'",
                    work.slug, work.data.artist
                ));
            }
            for style in &work.data.styles {
                if !style_slugs.contains(style.as_str()) {
                    findings.push(format!(
                        "work '{}' references unknown style '{}'",
                        work.slug, style
                    ));
                }
            }
        }
        findings
    }
}

/// Load all three collections from the content root.
///
/// A missing collection directory is an empty collection, not an error —
/// a site can launch with styles only and add works later.
pub fn load(root: &Path) -> Result<Catalog, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::MissingRoot(root.to_path_buf()));
    }

    let catalog = Catalog {
        artists: load_collection(&root.join("artists"))?,
        styles: load_collection(&root.join("styles"))?,
        works: load_collection(&root.join("works"))?,
    };

    ensure_unique_slugs("artist", &catalog.artists)?;
    ensure_unique_slugs("style", &catalog.styles)?;
    ensure_unique_slugs("work", &catalog.works)?;

    tracing::info!(
        artists = catalog.artists.len(),
        styles = catalog.styles.len(),
        works = catalog.works.len(),
        "content loaded"
    );
    Ok(catalog)
}

fn load_collection<T>(dir: &Path) -> Result<Vec<Entry<T>>, ContentError>
where
    T: serde::de::DeserializeOwned,
{
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stems: Vec<(naming::ParsedStem, PathBuf)> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("toml"))
                    .unwrap_or(false)
        })
        .map(|p| {
            let stem = p
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            (naming::parse_stem(&stem), p)
        })
        .collect();

    // Author-controlled input order: numbered files first, then the rest.
    stems.sort_by_key(|(parsed, _)| parsed.sort_key());

    let mut entries = Vec::with_capacity(stems.len());
    for (parsed, path) in stems {
        let raw = fs::read_to_string(&path)?;
        let data: T =
            toml::from_str(&raw).map_err(|e| ContentError::Toml(path.clone(), e))?;
        entries.push(Entry {
            slug: parsed.slug,
            data,
        });
    }
    Ok(entries)
}

fn ensure_unique_slugs<T: Sluggable>(
    kind: &'static str,
    entries: &[Entry<T>],
) -> Result<(), ContentError> {
    let mut seen = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.effective_slug()) {
            return Err(ContentError::DuplicateSlug(
                kind,
                entry.effective_slug().to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_content(tmp: &TempDir, rel: &str, body: &str) {
        let path = tmp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn minimal_artist(name: &str) -> String {
        format!(
            r#"
name = "{name}"
bio = "Short bio."
image = "/images/placeholder.png"
instagram = "{handle}"
booking_href = "/book"
"#,
            handle = name.to_lowercase()
        )
    }

    #[test]
    fn load_empty_root_gives_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let catalog = load(tmp.path()).unwrap();
        assert!(catalog.artists.is_empty());
        assert!(catalog.styles.is_empty());
        assert!(catalog.works.is_empty());
    }

    #[test]
    fn missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = load(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ContentError::MissingRoot(_))));
    }

    #[test]
    fn slug_derived_from_file_stem() {
        let tmp = TempDir::new().unwrap();
        write_content(&tmp, "artists/gil.toml", &minimal_artist("Gil"));

        let catalog = load(tmp.path()).unwrap();
        assert_eq!(catalog.artists.len(), 1);
        assert_eq!(catalog.artists[0].slug, "gil");
        assert_eq!(catalog.artists[0].effective_slug(), "gil");
    }

    #[test]
    fn ordering_prefix_stripped_from_slug() {
        let tmp = TempDir::new().unwrap();
        write_content(&tmp, "artists/020-gil.toml", &minimal_artist("Gil"));

        let catalog = load(tmp.path()).unwrap();
        assert_eq!(catalog.artists[0].slug, "gil");
    }

    #[test]
    fn collection_order_follows_number_prefix() {
        let tmp = TempDir::new().unwrap();
        write_content(&tmp, "artists/020-sarah.toml", &minimal_artist("Sarah"));
        write_content(&tmp, "artists/010-alex.toml", &minimal_artist("Alex"));
        write_content(&tmp, "artists/arseniy.toml", &minimal_artist("Arseniy"));

        let catalog = load(tmp.path()).unwrap();
        let slugs: Vec<&str> = catalog.artists.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alex", "sarah", "arseniy"]);
    }

    #[test]
    fn slug_override_wins_over_file_stem() {
        let tmp = TempDir::new().unwrap();
        let mut body = minimal_artist("Gil");
        body.push_str("slug_override = \"gil-engraving\"\n");
        write_content(&tmp, "artists/gil.toml", &body);

        let catalog = load(tmp.path()).unwrap();
        assert_eq!(catalog.artists[0].slug, "gil");
        assert_eq!(catalog.artists[0].effective_slug(), "gil-engraving");
    }

    #[test]
    fn duplicate_effective_slug_is_error() {
        let tmp = TempDir::new().unwrap();
        write_content(&tmp, "artists/gil.toml", &minimal_artist("Gil"));
        let mut body = minimal_artist("Gil Two");
        body.push_str("slug_override = \"gil\"\n");
        write_content(&tmp, "artists/gil-two.toml", &body);

        let result = load(tmp.path());
        assert!(matches!(
            result,
            Err(ContentError::DuplicateSlug("artist", _))
        ));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let mut body = minimal_artist("Gil");
        body.push_str("instagramm = \"typo\"\n");
        write_content(&tmp, "artists/gil.toml", &body);

        let result = load(tmp.path());
        assert!(matches!(result, Err(ContentError::Toml(_, _))));
    }

    #[test]
    fn work_files_parse_with_optional_styles() {
        let tmp = TempDir::new().unwrap();
        write_content(
            &tmp,
            "works/001-eagle.toml",
            r#"
image = "/images/works/eagle.png"
artist = "alex"
styles = ["traditional-and-old-school"]
"#,
        );
        write_content(
            &tmp,
            "works/002-untagged.toml",
            r#"
image = "/images/works/untagged.png"
artist = "alex"
"#,
        );

        let catalog = load(tmp.path()).unwrap();
        assert_eq!(catalog.works.len(), 2);
        assert_eq!(catalog.works[0].slug, "eagle");
        assert!(catalog.works[1].data.styles.is_empty());
    }

    #[test]
    fn dangling_refs_reported_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let mut body = minimal_artist("Gil");
        body.push_str("styles = [\"engraving\", \"retired-style\"]\n");
        write_content(&tmp, "artists/gil.toml", &body);
        write_content(
            &tmp,
            "styles/engraving.toml",
            r#"
name = "Engraving"
description = "Woodcut-inspired work."
booking_href = "/book?style=engraving"
"#,
        );
        write_content(
            &tmp,
            "works/001-wolf.toml",
            r#"
image = "/images/works/wolf.png"
artist = "nobody"
styles = ["engraving"]
"#,
        );

        let catalog = load(tmp.path()).unwrap();
        let findings = catalog.dangling_refs();
        assert_eq!(findings.len(), 2);
        assert!(findings[0].contains("retired-style"));
        assert!(findings[1].contains("nobody"));
    }
}
