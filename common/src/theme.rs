// design tokens
//
// the whole palette is a constant table; the webapp renders it once into css custom
// properties and every stylesheet refers to those properties by name

pub struct Token {
    pub name: &'static str,
    pub value: &'static str,
}

const fn token(name: &'static str, value: &'static str) -> Token {
    Token { name, value }
}

pub const FOREST: &str = "#1a1f1a";
pub const FOREST_LIGHT: &str = "#2a332a";
pub const MOSS: &str = "#2f3a2f";
pub const BARK: &str = "#3b2f29";
pub const BARK_LIGHT: &str = "#4a423a";
pub const AMBERWOOD: &str = "#b7791f";

// media queries cannot read custom properties, so the breakpoint is spliced in directly
pub const COMPACT_BREAKPOINT: &str = "768px";

pub const HEADER_HEIGHT: &str = "5rem";

pub const TOKENS: &[Token] = &[
    // brand palette
    token("forest", FOREST),
    token("forest-light", FOREST_LIGHT),
    token("moss", MOSS),
    token("bark", BARK),
    token("bark-light", BARK_LIGHT),
    token("amberwood", AMBERWOOD),
    token("amberwood-hover", "rgba(183, 121, 31, 0.9)"),
    token("amberwood-soft", "rgba(183, 121, 31, 0.1)"),
    token("amberwood-line", "rgba(183, 121, 31, 0.2)"),
    token("header-bg", "rgba(26, 31, 26, 0.9)"),
    token("panel-bg", "rgba(30, 35, 32, 0.95)"),
    token("overlay", "rgba(0, 0, 0, 0.5)"),
    token("overlay-deep", "rgba(0, 0, 0, 0.6)"),
    // text
    token("stone-100", "#f5f5f4"),
    token("stone-200", "#e7e5e4"),
    token("stone-300", "#d6d3d1"),
    token("stone-400", "#a8a29e"),
    token("stone-500", "#78716c"),
    // layout
    token("header-height", HEADER_HEIGHT),
    token("container-width", "72rem"),
    token("space-2", "8px"),
    token("space-3", "12px"),
    token("space-4", "16px"),
    token("space-6", "24px"),
    token("space-8", "32px"),
    token("space-10", "40px"),
    token("space-12", "48px"),
    token("space-20", "80px"),
    token("radius-lg", "8px"),
    token("radius-xl", "12px"),
    token("radius-2xl", "16px"),
    token("shadow-md", "0 4px 6px -1px rgba(0, 0, 0, 0.3)"),
    token("shadow-lg", "0 10px 15px -3px rgba(0, 0, 0, 0.4)"),
    // motion
    token("menu-duration", "300ms"),
    token("reveal-duration", "600ms"),
    token("fade-duration", "700ms"),
    token("entrance-duration", "800ms"),
    token("easing-standard", "cubic-bezier(0.4, 0.0, 0.2, 1)"),
];

pub fn css_variables() -> String {
    let mut css = String::from(":root {\n");

    for token in TOKENS {
        css.push_str(&format!("  --{}: {};\n", token.name, token.value));
    }

    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn token_names_are_unique() {
        let names: HashSet<_> = TOKENS.iter().map(|token| token.name).collect();

        assert_eq!(names.len(), TOKENS.len());
    }

    #[test]
    fn variables_cover_brand_palette() {
        let css = css_variables();

        for (name, value) in [
            ("forest", FOREST),
            ("moss", MOSS),
            ("bark", BARK),
            ("amberwood", AMBERWOOD),
        ] {
            assert!(css.contains(&format!("--{name}: {value};")), "missing {name}");
        }
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
    }
}
