/// Whether `value` can be a custom property value without breaking out of
/// its declaration or the enclosing `<style>` element
pub fn is_safe_value(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && !value.contains("/*")
        && !value
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\\') || c.is_control())
}

/// Text safe to place inside a `<style>` element
pub fn style_body(css: &str) -> String {
    css.replace("</", "<\\/")
}

/// One CSS rule holding custom properties
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub properties: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: Vec::new(),
        }
    }

    /// Add `--name: value`
    pub fn variable(mut self, name: &str, value: impl Into<String>) -> Self {
        self.properties.push((format!("--{}", name), value.into()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }
}

/// Generated theme stylesheet: a light scope and a `.dark` scope
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStylesheet {
    pub rules: Vec<CssRule>,
}

impl ThemeStylesheet {
    pub fn rule(&self, selector: &str) -> Option<&CssRule> {
        self.rules.iter().find(|rule| rule.selector == selector)
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for rule in &self.rules {
            css.push_str(&rule.selector);
            css.push_str(" {\n");

            for (key, value) in &rule.properties {
                css.push_str("  ");
                css.push_str(key);
                css.push_str(": ");
                css.push_str(value);
                css.push_str(";\n");
            }

            css.push_str("}\n\n");
        }

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_values() {
        for ok in ["#fff", "oklch(0.62 0.19 259)", "hsl(0 0% 9%)", "\"Inter\", ui-sans-serif", "0.5rem"] {
            assert!(is_safe_value(ok), "{ok}");
        }
        for bad in ["", "  ", "red; color: blue", "red}</style>", "a\\b", "x /* y", "1p\nx"] {
            assert!(!is_safe_value(bad), "{bad:?}");
        }
    }

    #[test]
    fn test_style_body_never_closes_element() {
        let body = style_body("a { b: c }</style><script>");
        assert!(!body.contains("</"));
    }

    #[test]
    fn test_to_css() {
        let sheet = ThemeStylesheet {
            rules: vec![
                CssRule::new(":root").variable("primary", "#111").variable("radius", "0.5rem"),
                CssRule::new(".dark").variable("primary", "#eee"),
            ],
        };
        assert_eq!(
            sheet.to_css(),
            ":root {\n  --primary: #111;\n  --radius: 0.5rem;\n}\n\n.dark {\n  --primary: #eee;\n}\n\n"
        );
        assert_eq!(sheet.rule(".dark").unwrap().get("--primary"), Some("#eee"));
    }
}
