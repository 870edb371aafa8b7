//! Template-driven text formats.
//!
//! Stylesheet, config and object-literal exports are minijinja templates
//! rendered against the collected token entries. Whitespace control in the
//! templates (`{%-`) is what keeps the output free of blank lines.

use minijinja::{context, AutoEscape, Environment};
use once_cell::sync::Lazy;

use super::case::to_kebab;
use super::{group_first_seen, TokenEntry};

const CSS: &str = r#"/* {{ name }} — CSS Custom Properties */
:root {
{%- for token in tokens %}
  {{ token.key | css_var }}: {{ token.value }};
{%- endfor %}
}"#;

const TAILWIND: &str = r#"// {{ name }} — Tailwind CSS Config
/** @type {import('tailwindcss').Config} */
module.exports = {
  theme: {
    extend: {
      colors: {
{%- for token in tokens %}
      {{ token.key }}: '{{ token.value }}',
{%- endfor %}
      },
    },
  },
};"#;

const SCSS: &str = r#"// {{ name }} — SCSS Variables
{% for group in groups %}
// {{ group.category }}
{%- for token in group.tokens %}
{{ token.key | scss_var }}: {{ token.value }};
{%- endfor %}
{% endfor %}"#;

const STYLE_OBJECT: &str = r#"// {{ name }} — Style Object
export const theme = {
{%- for token in tokens %}
  {{ token.key }}: '{{ token.value }}',
{%- endfor %}
};"#;

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    // Output is source code for other tools, never HTML.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("css_var", |key: String| -> String { format!("--{}", to_kebab(&key)) });
    env.add_filter("scss_var", |key: String| -> String { format!("${}", to_kebab(&key)) });
    env
});

pub(crate) fn css(tokens: &[TokenEntry], name: &str) -> Result<String, minijinja::Error> {
    ENV.render_named_str("css", CSS, context! { name => name, tokens => tokens })
}

pub(crate) fn tailwind(tokens: &[TokenEntry], name: &str) -> Result<String, minijinja::Error> {
    ENV.render_named_str("tailwind", TAILWIND, context! { name => name, tokens => tokens })
}

pub(crate) fn scss(tokens: &[TokenEntry], name: &str) -> Result<String, minijinja::Error> {
    let groups = group_first_seen(tokens);
    ENV.render_named_str("scss", SCSS, context! { name => name, groups => groups })
}

pub(crate) fn style_object(tokens: &[TokenEntry], name: &str) -> Result<String, minijinja::Error> {
    ENV.render_named_str("style-object", STYLE_OBJECT, context! { name => name, tokens => tokens })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKey;

    fn entries() -> Vec<TokenEntry> {
        vec![
            TokenEntry::new(TokenKey::CheckboxFill, "#112233"),
            TokenEntry::new(TokenKey::BackdropTint, "rgba(0,0,0,0.8)"),
        ]
    }

    #[test]
    fn test_css_layout() {
        let out = css(&entries(), "Test").unwrap();
        assert_eq!(
            out,
            "/* Test — CSS Custom Properties */\n\
             :root {\n  \
             --checkbox-fill: #112233;\n  \
             --backdrop-tint: rgba(0,0,0,0.8);\n\
             }"
        );
    }

    #[test]
    fn test_tailwind_layout() {
        let out = tailwind(&entries(), "Test").unwrap();
        let expected = [
            "// Test — Tailwind CSS Config",
            "/** @type {import('tailwindcss').Config} */",
            "module.exports = {",
            "  theme: {",
            "    extend: {",
            "      colors: {",
            "      checkboxFill: '#112233',",
            "      backdropTint: 'rgba(0,0,0,0.8)',",
            "      },",
            "    },",
            "  },",
            "};",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_scss_layout() {
        let out = scss(&entries(), "Test").unwrap();
        let expected = [
            "// Test — SCSS Variables",
            "",
            "// Interactive & Form",
            "$checkbox-fill: #112233;",
            "",
            "// Layout & Structural",
            "$backdrop-tint: rgba(0,0,0,0.8);",
            "",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_style_object_layout() {
        let out = style_object(&entries(), "Test").unwrap();
        let expected = [
            "// Test — Style Object",
            "export const theme = {",
            "  checkboxFill: '#112233',",
            "  backdropTint: 'rgba(0,0,0,0.8)',",
            "};",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_name_is_not_escaped() {
        let out = css(&entries(), "A & B <x>").unwrap();
        assert!(out.starts_with("/* A & B <x> — CSS"));
    }

    #[test]
    fn test_empty_css() {
        let out = css(&[], "Empty").unwrap();
        assert_eq!(out, "/* Empty — CSS Custom Properties */\n:root {\n}");
    }
}
