//! Design tokens for the high-contrast studio theme.
//!
//! The single source of truth for colors, typography, spacing, and layout
//! constants. `stencil build` emits the whole table as CSS custom
//! properties (`dist/tokens.css`) so the external renderer and any
//! hand-written stylesheets draw from the same palette.
//!
//! Tokens are static data, not configuration: the studio's visual identity
//! is versioned with the code, while per-site knobs live in `config.toml`.

/// Color scale: `(shade, hex)` pairs, darkest last.
pub type Scale = &'static [(&'static str, &'static str)];

pub const COLOR_PRIMARY: Scale = &[
    ("50", "#f3fafa"),
    ("100", "#e6f1f1"),
    ("200", "#d3e2e2"),
    ("300", "#b0c2c2"),
    ("400", "#8aa5a5"),
    ("500", "#6c8787"),
    ("600", "#506a6a"),
    ("700", "#354e4e"),
    ("800", "#1b3333"),
    ("900", "#0f2727"),
    ("950", "#041b1b"),
];

pub const COLOR_ACCENT: Scale = &[
    ("50", "#fff4f8"),
    ("100", "#ffe5ef"),
    ("200", "#fccee0"),
    ("300", "#eda1c1"),
    ("400", "#d976a3"),
    ("500", "#b55e75"),
    ("600", "#954059"),
    ("700", "#75223e"),
    ("800", "#510b26"),
    ("900", "#3e071b"),
    ("950", "#2b0311"),
];

pub const COLOR_NEUTRAL: Scale = &[
    ("0", "#ffffff"),
    ("50", "#f8f8f8"),
    ("100", "#eeeeee"),
    ("200", "#dedede"),
    ("300", "#bebebe"),
    ("400", "#9e9e9e"),
    ("500", "#808080"),
    ("600", "#6f6f6f"),
    ("900", "#262626"),
    ("950", "#121212"),
    ("1000", "#000000"),
];

pub const COLOR_WARNING: Scale = &[("500", "#f3b200")];

/// Semantic color slots the renderer targets directly.
pub const COLOR_SEMANTIC: Scale = &[
    ("text", "#000000"),
    ("text-inverse", "#ffffff"),
    ("background", "#ffffff"),
    ("border", "#000000"),
    ("foreground", "#ffffff"),
];

pub const FONT_FAMILIES: Scale = &[
    (
        "sans",
        r#""Stack Sans Text", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif"#,
    ),
    (
        "sans-notch",
        r#""Stack Sans Notch", "Stack Sans Text", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif"#,
    ),
];

/// Core size ramp shared by type and spacing scales. The `NNN-size` keys
/// come from the studio's design files; they are opaque identifiers, not
/// arithmetic.
pub const FONT_SIZE_CORE: Scale = &[
    ("600-md", "12px"),
    ("700-md", "16px"),
    ("800-sm", "20px"),
    ("800-md", "24px"),
    ("800-lg", "28px"),
    ("900-md", "36px"),
    ("1000-sm", "48px"),
    ("1000-md", "52px"),
    ("1000-lg", "60px"),
];

pub const FONT_SIZE_TEXT: Scale = &[
    ("tiny", "12px"),
    ("small", "14px"),
    ("regular", "16px"),
    ("medium", "18px"),
];

pub const FONT_SIZE_HEADING: Scale = &[
    ("h1", "56px"),
    ("h2", "48px"),
    ("h3", "36px"),
    ("h4", "28px"),
    ("h5", "24px"),
    ("h6", "20px"),
];

pub const FONT_WEIGHTS: Scale = &[
    ("light", "300"),
    ("regular", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
];

pub const LINE_HEIGHTS: Scale = &[
    ("tight", "1.2"),
    ("normal", "1.5"),
    ("relaxed", "1.4"),
];

pub const SPACING_CORE: Scale = &[
    ("100-md", "1px"),
    ("300-md", "4px"),
    ("500-md", "8px"),
    ("600-md", "12px"),
    ("700-md", "16px"),
    ("800-sm", "20px"),
    ("800-md", "24px"),
    ("800-lg", "28px"),
    ("900-md", "36px"),
    ("1000-sm", "48px"),
    ("1000-md", "52px"),
    ("1000-lg", "60px"),
    ("1100-md", "72px"),
    ("1200-sm", "84px"),
    ("1200-md", "96px"),
    ("1300-md", "128px"),
    ("1300-lg", "144px"),
    ("1400-md", "192px"),
    ("1400-lg", "216px"),
    ("1500-sm", "252px"),
    ("1500-md", "288px"),
    ("1500-lg", "324px"),
    ("1600-sm", "364px"),
    ("1600-md", "416px"),
    ("1700-md", "640px"),
    ("1700-lg", "720px"),
    ("1800-sm", "840px"),
    ("1800-md", "960px"),
    ("1900-md", "1440px"),
];

pub const SPACING_SEMANTIC: Scale = &[
    ("section-medium", "80px"),
    ("section-large", "112px"),
    ("page-padding", "64px"),
    ("container-large", "1280px"),
];

pub const CONTAINER_MAX_WIDTH: Scale = &[
    ("xsmall", "400px"),
    ("small", "480px"),
    ("large", "768px"),
    ("xlarge", "1280px"),
];

/// Square corners throughout; the zero radii are intentional tokens so the
/// renderer never hard-codes the look.
pub const BORDER: Scale = &[
    ("width-divider", "1px"),
    ("width-default", "1px"),
    ("radius-medium", "0"),
    ("radius-large", "0"),
];

pub const BREAKPOINTS: Scale = &[
    ("mobile-max", "767px"),
    ("tablet-min", "768px"),
    ("tablet-max", "1023px"),
    ("desktop-min", "1024px"),
];

fn push_group(out: &mut String, label: &str, prefix: &str, scale: Scale) {
    out.push_str(&format!("\n    /* {label} */\n"));
    for (key, value) in scale {
        out.push_str(&format!("    --{prefix}-{key}: {value};\n"));
    }
}

/// Render the full token table as a `:root` block of CSS custom properties.
pub fn stylesheet() -> String {
    let mut out = String::from(":root {\n");
    push_group(&mut out, "Colors: primary", "color-primary", COLOR_PRIMARY);
    push_group(&mut out, "Colors: accent", "color-accent", COLOR_ACCENT);
    push_group(&mut out, "Colors: neutral", "color-neutral", COLOR_NEUTRAL);
    push_group(&mut out, "Colors: warning", "color-warning", COLOR_WARNING);
    push_group(&mut out, "Colors: semantic", "color", COLOR_SEMANTIC);
    push_group(&mut out, "Typography: families", "font-family", FONT_FAMILIES);
    push_group(&mut out, "Typography: core sizes", "font-size-core", FONT_SIZE_CORE);
    push_group(&mut out, "Typography: text sizes", "font-size", FONT_SIZE_TEXT);
    push_group(&mut out, "Typography: headings", "font-size", FONT_SIZE_HEADING);
    push_group(&mut out, "Typography: weights", "font-weight", FONT_WEIGHTS);
    push_group(&mut out, "Typography: line heights", "line-height", LINE_HEIGHTS);
    push_group(&mut out, "Spacing: core", "spacing", SPACING_CORE);
    push_group(&mut out, "Spacing: semantic", "spacing", SPACING_SEMANTIC);
    push_group(&mut out, "Layout: containers", "container", CONTAINER_MAX_WIDTH);
    push_group(&mut out, "Layout: borders", "border", BORDER);
    push_group(&mut out, "Layout: breakpoints", "breakpoint", BREAKPOINTS);
    out.push_str("}\n");
    out
}
