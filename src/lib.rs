//! # Stencil
//!
//! Content pipeline and CMS glue for a tattoo studio portfolio site.
//! Your filesystem is the data source: TOML records under `content/` become
//! artists, styles, and works; the composed output is a view-ready manifest
//! the site renderer consumes.
//!
//! # Architecture: Load, Then Compose
//!
//! ```text
//! 1. Load      content/  →  Catalog          (TOML records → typed collections)
//! 2. Compose   Catalog   →  dist/            (manifest.json + tokens.css)
//! ```
//!
//! Between the two sits the cross-reference layer ([`xref`]): pure functions
//! that join the three collections into view structures — which artists work
//! in a style, which photos belong on a style page, what a work's style tags
//! are called. Keeping that layer free of I/O and state means the whole join
//! logic is unit-testable with literal records, and a build is just
//! load → compose → write.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Record types, the `NNN-name` loader, catalog validation |
//! | [`xref`] | Cross-reference lookups: related artists, gallery aggregation, slug resolution |
//! | [`compose`] | Joins the catalog into `manifest.json` + `tokens.css` |
//! | [`tokens`] | The design-token table and its CSS emission |
//! | [`samples`] | Built-in launch roster; backs `stencil seed` |
//! | [`config`] | `config.toml` loading and validation |
//! | [`auth`] | `GET /api/auth` — the CMS OAuth redirect endpoint |
//! | [`types`] | Shared content/view types (gallery images, tags, links) |
//! | [`naming`] | `NNN-name` filename convention parser |
//!
//! # Design Decisions
//!
//! ## Best-Effort Cross-References
//!
//! The lookup layer never fails. A work tagged with a retired style, or an
//! artist slug that no longer resolves, degrades to a dropped entry or a
//! raw-slug label — a page renders less content instead of the build
//! crashing. `stencil check` surfaces these as warnings so authors can fix
//! them on their own schedule. Slug uniqueness within a collection is the
//! one hard rule, enforced at load time.
//!
//! ## Slug Overrides
//!
//! A record's effective slug is its file stem unless the record sets
//! `slug_override`. Files can be renamed and renumbered freely; published
//! URLs only change when an author explicitly changes them.
//!
//! ## Manifest Output, Not HTML
//!
//! The renderer is a separate system. This crate resolves everything that
//! requires knowing all three collections at once (joins, fallbacks, alt
//! text, link targets) and hands over plain JSON, so the renderer never
//! reimplements content semantics. The only HTML here is the OAuth
//! endpoint's two self-contained pages, rendered with
//! [Maud](https://maud.lambda.xyz/) — compile-time checked and XSS-safe by
//! default.

pub mod auth;
pub mod compose;
pub mod config;
pub mod content;
pub mod naming;
pub mod samples;
pub mod tokens;
pub mod types;
pub mod xref;
