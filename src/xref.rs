//! Cross-reference lookups over the content collections.
//!
//! Joins artists, styles, and works into view-ready structures: linked
//! artist lists for a style page, gallery images aggregated from tagged
//! works, style-slug lists resolved to names or links.
//!
//! Every function here is pure and total. There is deliberately no error
//! type: an unresolved reference degrades to an empty result, a dropped
//! entry, or a raw-slug fallback. The data feeds a presentation layer
//! where a missing cross-reference should render less content, not fail
//! a build. Inputs are borrowed, outputs are fresh values.

use crate::content::{ArtistData, Entry, StyleData, WorkData};
use crate::types::{ArtistLink, GalleryImage, StyleLink, Tag, TagColor};

/// Artists associated with a style, in artist input order.
///
/// An artist qualifies either through their own style list or through any
/// work of theirs tagged with the style. Filtering is over artists, so an
/// artist with ten matching works still appears once.
pub fn related_artists(
    style_slug: &str,
    artists: &[Entry<ArtistData>],
    works: &[Entry<WorkData>],
) -> Vec<ArtistLink> {
    artists
        .iter()
        .filter(|artist| {
            artist.data.styles.iter().any(|s| s == style_slug)
                || works.iter().any(|work| {
                    work.data.artist == artist.effective_slug()
                        && work.data.styles.iter().any(|s| s == style_slug)
                })
        })
        .map(|artist| ArtistLink {
            name: artist.data.name.clone(),
            href: Some(format!("/artists/{}", artist.effective_slug())),
        })
        .collect()
}

/// Gallery images for a style page, one per tagged work, in work input
/// order.
///
/// When the work's artist slug resolves, the display name is used; when it
/// doesn't, the raw slug stands in — a half-labelled image beats a missing
/// one. An empty result with a fallback cover supplied yields a single
/// synthesized entry; the fallback is ignored whenever any work matched.
pub fn style_gallery_images(
    style_slug: &str,
    works: &[Entry<WorkData>],
    artists: &[Entry<ArtistData>],
    style_name: &str,
    fallback_cover: Option<&str>,
) -> Vec<GalleryImage> {
    let mut images: Vec<GalleryImage> = works
        .iter()
        .filter(|work| work.data.styles.iter().any(|s| s == style_slug))
        .map(|work| {
            let by = artists
                .iter()
                .find(|artist| artist.effective_slug() == work.data.artist)
                .map(|artist| artist.data.name.as_str())
                .unwrap_or(work.data.artist.as_str());
            GalleryImage {
                src: work.data.image.clone(),
                alt: Some(format!("{style_name} tattoo by {by}")),
                tags: Some(vec![Tag {
                    text: format!("By {by}"),
                    color: Some(TagColor::Accent),
                }]),
            }
        })
        .collect();

    if images.is_empty()
        && let Some(cover) = fallback_cover
    {
        images.push(GalleryImage {
            src: cover.to_string(),
            alt: Some(format!("{style_name} example")),
            tags: Some(vec![Tag {
                text: style_name.to_string(),
                color: Some(TagColor::Primary),
            }]),
        });
    }

    images
}

/// Resolve style slugs to display names, dropping slugs that no longer
/// resolve. Style lists may reference retired styles; output length ≤
/// input length.
pub fn resolve_style_names(style_slugs: &[String], styles: &[Entry<StyleData>]) -> Vec<String> {
    style_slugs
        .iter()
        .filter_map(|slug| {
            styles
                .iter()
                .find(|style| style.effective_slug() == slug)
                .map(|style| style.data.name.clone())
        })
        .collect()
}

/// Resolve style slugs to linked names, same drop policy as
/// [`resolve_style_names`].
pub fn resolve_styles(style_slugs: &[String], styles: &[Entry<StyleData>]) -> Vec<StyleLink> {
    style_slugs
        .iter()
        .filter_map(|slug| {
            styles
                .iter()
                .find(|style| style.effective_slug() == slug)
                .map(|style| StyleLink {
                    name: style.data.name.clone(),
                    href: format!("/styles/{}", style.effective_slug()),
                })
        })
        .collect()
}

/// Convert works to gallery images for an artist page, in work input order.
///
/// The alt text uses the supplied display name for every image; it is not
/// re-derived per work. Tags are the resolved style names — omitted
/// entirely (not an empty list) when none of the work's styles resolve.
pub fn works_to_gallery_images(
    works: &[Entry<WorkData>],
    artist_name: &str,
    styles: &[Entry<StyleData>],
) -> Vec<GalleryImage> {
    works
        .iter()
        .map(|work| {
            let names = resolve_style_names(&work.data.styles, styles);
            GalleryImage {
                src: work.data.image.clone(),
                alt: Some(format!("Tattoo by {artist_name}")),
                tags: if names.is_empty() {
                    None
                } else {
                    Some(
                        names
                            .into_iter()
                            .map(|name| Tag {
                                text: name,
                                color: Some(TagColor::Primary),
                            })
                            .collect(),
                    )
                },
            }
        })
        .collect()
}

/// All works attributed to an artist slug, input order preserved.
pub fn works_by_artist(artist_slug: &str, works: &[Entry<WorkData>]) -> Vec<Entry<WorkData>> {
    works
        .iter()
        .filter(|work| work.data.artist == artist_slug)
        .cloned()
        .collect()
}
