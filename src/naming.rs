//! Centralized filename parsing for the NNN-name convention.
//!
//! Content files may carry an optional numeric prefix (`NNN-`) that controls
//! collection order without affecting the record's identity:
//! - `010-alex.toml` → sorts at 10, storage slug `alex`
//! - `alex.toml` → unnumbered (sorts after all numbered files), slug `alex`
//!
//! The slug part keeps its dashes — it is a URL segment, not a display title.
//! Display names live inside the record data.

/// Result of parsing a content file stem like `010-alex`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStem {
    /// Ordering prefix if present (e.g. `10` from `010-alex`).
    pub number: Option<u32>,
    /// Storage slug: the stem with any `NNN-` prefix stripped.
    /// For a number-only stem (`010`), the full stem is kept as the slug so
    /// the record still has an identity.
    pub slug: String,
}

impl ParsedStem {
    /// Sort key placing numbered files first (by number), then unnumbered
    /// files. Ties break on the slug.
    pub fn sort_key(&self) -> (u32, String) {
        (self.number.unwrap_or(u32::MAX), self.slug.clone())
    }
}

/// Parse a file stem following the `NNN-name` convention.
///
/// - `"010-alex"` → number=Some(10), slug="alex"
/// - `"003-floral-and-botanic"` → number=Some(3), slug="floral-and-botanic"
/// - `"alex"` → number=None, slug="alex"
/// - `"010"` → number=Some(10), slug="010" (number-only: stem is the slug)
pub fn parse_stem(stem: &str) -> ParsedStem {
    if let Some(dash_pos) = stem.find('-') {
        let prefix = &stem[..dash_pos];
        let rest = &stem[dash_pos + 1..];
        if let Ok(num) = prefix.parse::<u32>()
            && !rest.is_empty()
        {
            return ParsedStem {
                number: Some(num),
                slug: rest.to_string(),
            };
        }
    }
    ParsedStem {
        number: stem.parse::<u32>().ok(),
        slug: stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_single_word() {
        let p = parse_stem("010-alex");
        assert_eq!(p.number, Some(10));
        assert_eq!(p.slug, "alex");
    }

    #[test]
    fn numbered_multi_dash_slug_kept_intact() {
        let p = parse_stem("003-floral-and-botanic");
        assert_eq!(p.number, Some(3));
        assert_eq!(p.slug, "floral-and-botanic");
    }

    #[test]
    fn unnumbered_stem_is_slug() {
        let p = parse_stem("alex");
        assert_eq!(p.number, None);
        assert_eq!(p.slug, "alex");
    }

    #[test]
    fn unnumbered_with_dashes() {
        let p = parse_stem("traditional-and-old-school");
        assert_eq!(p.number, None);
        assert_eq!(p.slug, "traditional-and-old-school");
    }

    #[test]
    fn number_only_keeps_stem_as_slug() {
        let p = parse_stem("010");
        assert_eq!(p.number, Some(10));
        assert_eq!(p.slug, "010");
    }

    #[test]
    fn trailing_dash_is_not_a_prefix() {
        // "010-" has an empty name part; treat the whole stem as the slug.
        let p = parse_stem("010-");
        assert_eq!(p.number, None);
        assert_eq!(p.slug, "010-");
    }

    #[test]
    fn numbered_sorts_before_unnumbered() {
        let a = parse_stem("020-zelda");
        let b = parse_stem("anna");
        assert!(a.sort_key() < b.sort_key());
    }

    #[test]
    fn unnumbered_tie_breaks_on_slug() {
        let a = parse_stem("anna");
        let b = parse_stem("bruno");
        assert!(a.sort_key() < b.sort_key());
    }

    #[test]
    fn zero_prefix() {
        let p = parse_stem("000-first");
        assert_eq!(p.number, Some(0));
        assert_eq!(p.slug, "first");
    }
}
