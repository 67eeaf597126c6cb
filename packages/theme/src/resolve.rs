//! # Theme Resolution
//!
//! A site's theme is a preset plus sparse overrides. Resolution merges them
//! per key: every color role and font slot takes the override when one is set
//! and the preset value otherwise, so the output never has a missing role.
//! Overrides that could escape their CSS declaration are dropped in favour of
//! the preset value.

use crate::presets::{preset_or_default, DEFAULT_PRESET};
use crate::roles::ColorRole;
use crate::stylesheet::{is_safe_value, CssRule, ThemeStylesheet};
use std::collections::BTreeMap;
use storefront_document::{ColorMode, FontConfig, ThemeConfig};
use tracing::{debug, instrument, warn};

pub const DARK_SELECTOR: &str = ".dark";
pub const LIGHT_SELECTOR: &str = ":root";

/// Everything theme resolution reads
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeInputs {
    pub preset: String,
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
    pub fonts: FontConfig,
    pub radius: Option<String>,
    /// Whether visitors may toggle dark mode
    pub dark_mode_enabled: bool,
    /// Mode used when toggling is disabled or nobody picked one
    pub default_mode: ColorMode,
}

impl Default for ThemeInputs {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_string(),
            light: BTreeMap::new(),
            dark: BTreeMap::new(),
            fonts: FontConfig::default(),
            radius: None,
            dark_mode_enabled: true,
            default_mode: ColorMode::Light,
        }
    }
}

impl ThemeInputs {
    pub fn preset(preset: impl Into<String>) -> Self {
        Self {
            preset: preset.into(),
            ..Default::default()
        }
    }

    /// Inputs for a stored site theme.
    ///
    /// `global_preset` replaces the document's preset when set; the site's
    /// color and font overrides still apply on top of it.
    pub fn from_config(config: Option<&ThemeConfig>, global_preset: Option<&str>) -> Self {
        let mut inputs = match config {
            Some(config) => Self {
                preset: config.preset.clone().unwrap_or_else(|| DEFAULT_PRESET.to_string()),
                light: config.light.clone(),
                dark: config.dark.clone(),
                fonts: config.fonts.clone(),
                radius: config.radius.clone(),
                dark_mode_enabled: config.dark_mode_enabled.unwrap_or(true),
                default_mode: config.default_mode.unwrap_or_default(),
            },
            None => Self::default(),
        };

        if let Some(preset) = global_preset.filter(|p| !p.is_empty()) {
            inputs.preset = preset.to_string();
        }
        inputs
    }

    pub fn with_light(mut self, role: ColorRole, value: impl Into<String>) -> Self {
        self.light.insert(role.key().to_string(), value.into());
        self
    }

    pub fn with_dark(mut self, role: ColorRole, value: impl Into<String>) -> Self {
        self.dark.insert(role.key().to_string(), value.into());
        self
    }

    /// The mode the page should show.
    ///
    /// With toggling disabled the default mode always wins. Otherwise the
    /// user's preference applies, falling back to the default mode.
    pub fn color_mode(&self, user_prefers_dark: Option<bool>) -> ColorMode {
        apply_color_mode(self.dark_mode_enabled, self.default_mode, user_prefers_dark)
    }
}

pub fn apply_color_mode(dark_mode_enabled: bool, default_mode: ColorMode, user_prefers_dark: Option<bool>) -> ColorMode {
    if !dark_mode_enabled {
        return default_mode;
    }
    match user_prefers_dark {
        Some(true) => ColorMode::Dark,
        Some(false) => ColorMode::Light,
        None => default_mode,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFonts {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

/// Fully merged theme with a value for every role in both modes
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// Preset actually used, after fallback
    pub preset: &'static str,
    pub light: BTreeMap<ColorRole, String>,
    pub dark: BTreeMap<ColorRole, String>,
    pub fonts: ResolvedFonts,
    pub radius: String,
}

impl ResolvedTheme {
    pub fn color(&self, role: ColorRole, mode: ColorMode) -> &str {
        let colors = match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        };
        colors.get(&role).map(String::as_str).unwrap_or_default()
    }

    pub fn stylesheet(&self) -> ThemeStylesheet {
        let mut root = CssRule::new(LIGHT_SELECTOR);
        for (role, value) in &self.light {
            root = root.variable(role.css_name(), value.as_str());
        }
        root = root
            .variable("font-sans", self.fonts.sans.as_str())
            .variable("font-serif", self.fonts.serif.as_str())
            .variable("font-mono", self.fonts.mono.as_str())
            .variable("radius", self.radius.as_str());

        let mut dark = CssRule::new(DARK_SELECTOR);
        for (role, value) in &self.dark {
            dark = dark.variable(role.css_name(), value.as_str());
        }

        ThemeStylesheet {
            rules: vec![root, dark],
        }
    }

    pub fn to_css(&self) -> String {
        self.stylesheet().to_css()
    }
}

#[instrument(skip(inputs), fields(preset = %inputs.preset))]
pub fn resolve_theme(inputs: &ThemeInputs) -> ResolvedTheme {
    let preset = preset_or_default(&inputs.preset);

    let light = merge_colors(&inputs.light, |role| preset.color(role, ColorMode::Light));
    let dark = merge_colors(&inputs.dark, |role| preset.color(role, ColorMode::Dark));

    let fonts = ResolvedFonts {
        sans: pick(inputs.fonts.sans.as_deref(), preset.fonts.sans),
        serif: pick(inputs.fonts.serif.as_deref(), preset.fonts.serif),
        mono: pick(inputs.fonts.mono.as_deref(), preset.fonts.mono),
    };

    let radius = pick(inputs.radius.as_deref(), preset.radius);

    debug!(
        preset = preset.id,
        light_overrides = inputs.light.len(),
        dark_overrides = inputs.dark.len(),
        "Resolved theme"
    );

    ResolvedTheme {
        preset: preset.id,
        light,
        dark,
        fonts,
        radius,
    }
}

fn merge_colors(
    overrides: &BTreeMap<String, String>,
    preset: impl Fn(ColorRole) -> &'static str,
) -> BTreeMap<ColorRole, String> {
    let mut merged: BTreeMap<ColorRole, String> = ColorRole::ALL
        .iter()
        .map(|role| (*role, preset(*role).to_string()))
        .collect();

    for (key, value) in overrides {
        match ColorRole::from_key(key) {
            Some(role) if is_safe_value(value) => {
                merged.insert(role, value.trim().to_string());
            }
            Some(_) if value.trim().is_empty() => {}
            Some(role) => warn!(role = role.key(), "Ignoring unsafe color override"),
            None => debug!(key = %key, "Ignoring unknown color role"),
        }
    }
    merged
}

fn pick(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| is_safe_value(v))
        .map(str::trim)
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_single_role() {
        let inputs = ThemeInputs::preset("forest").with_light(ColorRole::Primary, "#ff0000");
        let theme = resolve_theme(&inputs);
        assert_eq!(theme.color(ColorRole::Primary, ColorMode::Light), "#ff0000");
        assert_eq!(theme.color(ColorRole::Accent, ColorMode::Light), "#dcfce7");
        // light overrides do not leak into dark
        assert_eq!(theme.color(ColorRole::Primary, ColorMode::Dark), "#4ade80");
    }

    #[test]
    fn test_every_role_present() {
        let theme = resolve_theme(&ThemeInputs::preset("nope"));
        assert_eq!(theme.preset, DEFAULT_PRESET);
        assert_eq!(theme.light.len(), ColorRole::COUNT);
        assert_eq!(theme.dark.len(), ColorRole::COUNT);
        assert!(theme.light.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_blank_and_unknown_overrides_ignored() {
        let mut inputs = ThemeInputs::default();
        inputs.light.insert("primary".to_string(), "  ".to_string());
        inputs.light.insert("glow".to_string(), "#fff".to_string());
        let theme = resolve_theme(&inputs);
        assert_eq!(theme.color(ColorRole::Primary, ColorMode::Light), "#171717");
        assert_eq!(theme.light.len(), ColorRole::COUNT);
    }

    #[test]
    fn test_unsafe_overrides_fall_back_to_preset() {
        let mut inputs = ThemeInputs::default()
            .with_light(ColorRole::Primary, "red}</style><script>alert(1)</script>")
            .with_dark(ColorRole::Ring, "#fff; background: url(x)");
        inputs.fonts.sans = Some("Inter</style>".to_string());
        inputs.radius = Some("1rem}body{display:none".to_string());

        let theme = resolve_theme(&inputs);
        assert_eq!(theme.color(ColorRole::Primary, ColorMode::Light), "#171717");
        assert_eq!(theme.color(ColorRole::Ring, ColorMode::Dark), preset_or_default(DEFAULT_PRESET).color(ColorRole::Ring, ColorMode::Dark));
        assert_eq!(theme.radius, "0.625rem");
        assert!(!theme.fonts.sans.contains('<'));

        let css = theme.to_css();
        assert!(!css.contains("script"));
        assert_eq!(css.matches('{').count(), 2);
    }

    #[test]
    fn test_fonts_and_radius() {
        let mut inputs = ThemeInputs::preset("ocean");
        inputs.fonts.mono = Some("JetBrains Mono".to_string());
        let theme = resolve_theme(&inputs);
        assert_eq!(theme.fonts.sans, "Inter, ui-sans-serif, sans-serif");
        assert_eq!(theme.fonts.mono, "JetBrains Mono");
        assert_eq!(theme.radius, "0.75rem");
    }

    #[test]
    fn test_color_mode() {
        assert_eq!(apply_color_mode(false, ColorMode::Dark, Some(false)), ColorMode::Dark);
        assert_eq!(apply_color_mode(false, ColorMode::Light, Some(true)), ColorMode::Light);
        assert_eq!(apply_color_mode(true, ColorMode::Light, Some(true)), ColorMode::Dark);
        assert_eq!(apply_color_mode(true, ColorMode::Dark, Some(false)), ColorMode::Light);
        assert_eq!(apply_color_mode(true, ColorMode::Dark, None), ColorMode::Dark);
    }

    #[test]
    fn test_global_preset_keeps_site_overrides() {
        let config = ThemeConfig {
            preset: Some("ocean".to_string()),
            light: [("accent".to_string(), "#222".to_string())].into(),
            dark_mode_enabled: Some(false),
            ..Default::default()
        };
        let inputs = ThemeInputs::from_config(Some(&config), Some("sunset"));
        assert_eq!(inputs.preset, "sunset");
        assert!(!inputs.dark_mode_enabled);

        let theme = resolve_theme(&inputs);
        assert_eq!(theme.color(ColorRole::Accent, ColorMode::Light), "#222");
        assert_eq!(theme.color(ColorRole::Primary, ColorMode::Light), "#ea580c");
    }

    #[test]
    fn test_stylesheet_scopes() {
        let css = resolve_theme(&ThemeInputs::default()).to_css();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --card-foreground: #0a0a0a;\n"));
        assert!(css.contains("  --radius: 0.625rem;\n"));
        assert!(css.contains(".dark {\n  --background: #0a0a0a;\n"));
    }
}
