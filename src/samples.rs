//! Built-in sample content: the studio's launch roster.
//!
//! Four artists and four styles, plus a handful of tagged works, shipped as
//! in-code tables so `stencil seed` can scaffold a working content directory
//! before any real photography exists. Gallery slots are filled with
//! placeholder images by a repeat-and-label helper until real work photos
//! replace them.
//!
//! This is configuration data, not logic; the only behavior worth testing
//! lives in [`placeholder_gallery`] and [`seed`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::content::{ArtistData, Catalog, Entry, StyleData, WorkData};
use crate::types::{ArtistLink, ContentSection, GalleryImage, Tag, TagColor};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialize error: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("Refusing to seed into non-empty collection: {0}")]
    NotEmpty(PathBuf),
}

const PLACEHOLDER: &str = "/images/placeholder.png";
const PORTRAIT_PLACEHOLDER: &str = "/images/artist-placeholder.png";

/// Fill `count` gallery slots with placeholder images for `owner`.
///
/// Only the first entry is tagged `Featured`; the rest stay untagged so the
/// grid doesn't shout.
pub fn placeholder_gallery(owner: &str, count: usize) -> Vec<GalleryImage> {
    (0..count)
        .map(|i| GalleryImage {
            src: PLACEHOLDER.to_string(),
            alt: Some(format!("{owner}'s tattoo work {}", i + 1)),
            tags: (i == 0).then(|| {
                vec![Tag {
                    text: "Featured".to_string(),
                    color: Some(TagColor::Accent),
                }]
            }),
        })
        .collect()
}

fn section(title: &str, paragraphs: &[&str]) -> ContentSection {
    ContentSection {
        title: title.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        gallery: None,
    }
}

fn section_with_gallery(
    title: &str,
    paragraphs: &[&str],
    gallery: Vec<GalleryImage>,
) -> ContentSection {
    ContentSection {
        gallery: Some(gallery),
        ..section(title, paragraphs)
    }
}

fn artist(
    slug: &str,
    name: &str,
    bio: &str,
    full_bio: &str,
    instagram: &str,
    styles: &[&str],
    sections: Vec<ContentSection>,
) -> Entry<ArtistData> {
    Entry {
        slug: slug.to_string(),
        data: ArtistData {
            name: name.to_string(),
            slug_override: None,
            bio: bio.to_string(),
            full_bio: Some(full_bio.to_string()),
            image: PORTRAIT_PLACEHOLDER.to_string(),
            instagram: instagram.to_string(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
            booking_href: format!("/book?artist={slug}"),
            gallery: placeholder_gallery(name, 12),
            sections,
        },
    }
}

fn guest(name: &str) -> ArtistLink {
    ArtistLink {
        name: name.to_string(),
        href: None,
    }
}

fn work(slug: &str, image: &str, artist: &str, styles: &[&str]) -> Entry<WorkData> {
    Entry {
        slug: slug.to_string(),
        data: WorkData {
            image: image.to_string(),
            artist: artist.to_string(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// The full sample catalog, in roster order.
pub fn sample_catalog() -> Catalog {
    Catalog {
        artists: sample_artists(),
        styles: sample_styles(),
        works: sample_works(),
    }
}

fn sample_artists() -> Vec<Entry<ArtistData>> {
    vec![
        artist(
            "alex",
            "Alex",
            "I'm a traditional tattoo artist rooted in the hardcore punk scene. My work \
             blends classic American traditional with contemporary influences, always \
             aiming for bold lines and vibrant colors that stand the test of time.",
            "I've been tattooing professionally for over a decade, drawing inspiration \
             from the rich history of American traditional tattooing while adding my own \
             modern twist. Every piece I create is designed to age beautifully.",
            "alex_hct",
            &["linework"],
            vec![
                section(
                    "Style & Direction",
                    &["My tattooing philosophy centers on honoring the craft's heritage \
                       while pushing creative boundaries. Bold eagles, classic roses, and \
                       iconic flash, with contemporary elements that make each piece \
                       unique to its wearer."],
                ),
                section_with_gallery(
                    "Flash & Custom Work",
                    &["My flash collection features a curated selection of ready-to-tattoo \
                       designs, perfect for walk-ins or anyone looking for something \
                       classic. For custom work, I sketch multiple options until we find \
                       the perfect piece for you."],
                    placeholder_gallery("Alex Flash", 6),
                ),
            ],
        ),
        artist(
            "arseniy",
            "Arseniy",
            "Born from hardcore punk, tattooing since 2013. My Traditional and Old School \
             tattoos are fast, bold, and built to last. Choose from my ready-made flash \
             designs, or I'll bring your own idea to life.",
            "From my roots in the hardcore punk scene, I've developed a tattooing style \
             that values authenticity, craftsmanship, and community. Over a decade of \
             experience lets me execute Traditional designs with speed and precision \
             without sacrificing quality.",
            "arspunx",
            &["linework", "blackwork"],
            vec![section(
                "Flash & Custom Work",
                &["My flash sheets are always growing, from classic Americana to punk \
                   rock imagery. Flash pieces are available for walk-ins when my schedule \
                   allows, or book ahead to secure a specific design."],
            )],
        ),
        artist(
            "gil",
            "Gil",
            "Born and raised in Berlin. I do engraving tattoos inspired by medieval \
             woodcuts and copper engravings. I enjoy nature themed tattoos: flowers, \
             animals, medieval imagery, and designs out of the soulsborne universe.",
            "Growing up surrounded by Berlin's artistic heritage shaped my approach to \
             tattooing. I found my calling in the intricate world of engraving-style \
             tattoos, where every line tells a story.",
            "gil_engraving",
            &["linework", "floral-and-botanic"],
            vec![section(
                "Style & Direction",
                &["My engraving style pays homage to the master printmakers of the \
                   medieval and Renaissance periods. Precise linework and careful shading \
                   recreate the look of woodcuts and copper engravings directly on skin."],
            )],
        ),
        artist(
            "sarah",
            "Sarah",
            "I'm a beginner artist based in Berlin. My tattoo style is kinda blackwork \
             traditional. What matters most to me is that you feel comfortable, not just \
             with your tattoo, but with the whole process around it.",
            "My journey into tattooing started from a deep love for art and a desire to \
             create meaningful work that people carry with them forever. Though I'm newer \
             to the craft, I bring fresh perspective and genuine care to every piece.",
            "sarah_rawk_tattoo",
            &["linework", "blackwork"],
            vec![section(
                "Booking & Sessions",
                &["I keep my booking process simple and stress-free. Reach out on \
                   Instagram or through the booking form with your ideas, and I'll let \
                   you know if it's a good fit for my current skill set."],
            )],
        ),
    ]
}

fn sample_styles() -> Vec<Entry<StyleData>> {
    let style = |slug: &str,
                 name: &str,
                 description: &str,
                 artists: Vec<ArtistLink>,
                 sections: Vec<ContentSection>| Entry {
        slug: slug.to_string(),
        data: StyleData {
            name: name.to_string(),
            slug_override: None,
            description: description.to_string(),
            cover: Some(PLACEHOLDER.to_string()),
            booking_href: format!("/book?style={slug}"),
            artists,
            gallery: Vec::new(),
            sections,
        },
    };

    vec![
        style(
            "linework",
            "Linework",
            "Built around clarity, precision, and visual restraint. Instead of relying \
             on shading or color, the entire composition is carried by line alone, \
             resulting in tattoos that feel clean, intentional, and timeless.",
            vec![guest("Sera"), guest("Bruno")],
            vec![section(
                "Precision & Clarity",
                &["Linework tattooing strips away everything but the essential: the \
                   line. Without shading or color to rely on, every stroke must be \
                   deliberate, every curve intentional.",
                  "The result is work that reads clearly at any distance and ages \
                   gracefully over time."],
            )],
        ),
        style(
            "floral-and-botanic",
            "Floral & Botanic",
            "Inspired by nature, this approach translates organic shapes into tattoo \
             designs that work harmoniously with the body. The focus is on flow, \
             structure, and balance rather than strict realism.",
            vec![guest("Nastia Zlotin"), guest("Luara")],
            vec![section(
                "Movement & Growth",
                &["Botanic forms are treated as living structures, shaped by implied \
                   motion. Stems bend, leaves stretch, and petals unfold along the \
                   natural lines of the body."],
            )],
        ),
        style(
            "blackwork",
            "Blackwork",
            "Defined by contrast and discipline, this approach uses only black ink to \
             create strong, graphic tattoos. The absence of color places full emphasis \
             on shape, density, and negative space.",
            vec![guest("Skezy")],
            vec![section(
                "Contrast & Density",
                &["Blackwork thrives on the tension between solid black and untouched \
                   skin. The density of black ink can be modulated to create subtle \
                   gradients or stark boundaries."],
            )],
        ),
        style(
            "illustrative",
            "Illustrative",
            "Rooted in drawing and visual storytelling, this approach blends artistic \
             expression with tattoo-specific structure. The result is tattoos that feel \
             expressive and personal while remaining technically sound.",
            vec![guest("Zohar"), guest("Ed")],
            vec![section(
                "Drawing Meets Tattooing",
                &["Illustrative tattooing bridges the gap between fine art and skin, \
                   like a page torn from a sketchbook and made permanent."],
            )],
        ),
    ]
}

fn sample_works() -> Vec<Entry<WorkData>> {
    vec![
        work("eagle", "/images/works/eagle.png", "alex", &["linework"]),
        work(
            "woodcut-wolf",
            "/images/works/woodcut-wolf.png",
            "gil",
            &["floral-and-botanic", "linework"],
        ),
        work(
            "fern",
            "/images/works/fern.png",
            "gil",
            &["floral-and-botanic"],
        ),
        work("raven", "/images/works/raven.png", "sarah", &["blackwork"]),
        work(
            "dagger",
            "/images/works/dagger.png",
            "arseniy",
            &["blackwork", "linework"],
        ),
        // Fresh off the machine, not yet categorized.
        work("sketch", "/images/works/sketch.png", "sarah", &[]),
    ]
}

/// Write the sample catalog into `root` as authorable TOML files, plus a
/// stock `config.toml` when none exists.
///
/// Refuses to touch collections that already contain records: seeding is
/// for empty sites, not a way to overwrite an authored one.
pub fn seed(root: &Path) -> Result<(), SeedError> {
    let catalog = sample_catalog();

    let plan: [(&str, Vec<(String, String)>); 3] = [
        ("artists", serialize_all(&catalog.artists)?),
        ("styles", serialize_all(&catalog.styles)?),
        ("works", serialize_all(&catalog.works)?),
    ];

    for (dir_name, _) in &plan {
        let dir = root.join(dir_name);
        if dir.is_dir() && fs::read_dir(&dir)?.next().is_some() {
            return Err(SeedError::NotEmpty(dir));
        }
    }

    for (dir_name, files) in plan {
        let dir = root.join(dir_name);
        fs::create_dir_all(&dir)?;
        for (stem, body) in files {
            fs::write(dir.join(format!("{stem}.toml")), body)?;
        }
    }

    let config_path = root.join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, crate::config::stock_config_toml())?;
    }

    tracing::info!(root = %root.display(), "sample content written");
    Ok(())
}

/// Serialize a collection to `(file stem, TOML body)` pairs, numbering the
/// file names so the catalog reloads in roster order.
fn serialize_all<T: Serialize>(entries: &[Entry<T>]) -> Result<Vec<(String, String)>, SeedError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let stem = format!("{:03}-{}", (i + 1) * 10, entry.slug);
            let body = toml::to_string_pretty(&entry.data)?;
            Ok((stem, body))
        })
        .collect()
}
