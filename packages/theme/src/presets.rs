//! Built-in theme presets.
//!
//! The `default` preset defines every color role in both modes. Other presets
//! only list the roles they change and take the rest from `default`.

use crate::roles::ColorRole;
use storefront_document::ColorMode;
use tracing::warn;

pub const DEFAULT_PRESET: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetFonts {
    pub sans: &'static str,
    pub serif: &'static str,
    pub mono: &'static str,
}

const SYSTEM_FONTS: PresetFonts = PresetFonts {
    sans: "ui-sans-serif, system-ui, sans-serif",
    serif: "ui-serif, Georgia, serif",
    mono: "ui-monospace, SFMono-Regular, monospace",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    light: &'static [(ColorRole, &'static str)],
    dark: &'static [(ColorRole, &'static str)],
    pub fonts: PresetFonts,
    pub radius: &'static str,
}

impl ThemePreset {
    /// Preset value for `role`.
    ///
    /// A dark role the preset leaves out falls back to the preset's own light
    /// value for that role. Roles the preset never lists come from `default`.
    pub fn color(&self, role: ColorRole, mode: ColorMode) -> &'static str {
        let own = match mode {
            ColorMode::Light => lookup(self.light, role),
            ColorMode::Dark => lookup(self.dark, role).or_else(|| lookup(self.light, role)),
        };
        if let Some(value) = own {
            return value;
        }
        let base = match mode {
            ColorMode::Light => DEFAULT_LIGHT,
            ColorMode::Dark => DEFAULT_DARK,
        };
        lookup(base, role).unwrap_or_default()
    }
}

fn lookup(colors: &[(ColorRole, &'static str)], role: ColorRole) -> Option<&'static str> {
    colors.iter().find(|(r, _)| *r == role).map(|(_, value)| *value)
}

pub static PRESETS: &[ThemePreset] = &[
    ThemePreset {
        id: DEFAULT_PRESET,
        name: "Default",
        light: DEFAULT_LIGHT,
        dark: DEFAULT_DARK,
        fonts: SYSTEM_FONTS,
        radius: "0.625rem",
    },
    ThemePreset {
        id: "ocean",
        name: "Ocean",
        light: OCEAN_LIGHT,
        dark: OCEAN_DARK,
        fonts: PresetFonts {
            sans: "Inter, ui-sans-serif, sans-serif",
            ..SYSTEM_FONTS
        },
        radius: "0.75rem",
    },
    ThemePreset {
        id: "forest",
        name: "Forest",
        light: FOREST_LIGHT,
        dark: FOREST_DARK,
        fonts: PresetFonts {
            serif: "Merriweather, ui-serif, serif",
            ..SYSTEM_FONTS
        },
        radius: "0.5rem",
    },
    ThemePreset {
        id: "sunset",
        name: "Sunset",
        light: SUNSET_LIGHT,
        dark: SUNSET_DARK,
        fonts: PresetFonts {
            sans: "Nunito, ui-sans-serif, sans-serif",
            ..SYSTEM_FONTS
        },
        radius: "1rem",
    },
];

pub fn find_preset(id: &str) -> Option<&'static ThemePreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

/// Preset `id`, or `default` when there is no such preset
pub fn preset_or_default(id: &str) -> &'static ThemePreset {
    if let Some(preset) = find_preset(id) {
        return preset;
    }
    warn!(preset = id, "Unknown theme preset, using default");
    &PRESETS[0]
}

const DEFAULT_LIGHT: &[(ColorRole, &str)] = &[
    (ColorRole::Background, "#ffffff"),
    (ColorRole::Foreground, "#0a0a0a"),
    (ColorRole::Card, "#ffffff"),
    (ColorRole::CardForeground, "#0a0a0a"),
    (ColorRole::Popover, "#ffffff"),
    (ColorRole::PopoverForeground, "#0a0a0a"),
    (ColorRole::Primary, "#171717"),
    (ColorRole::PrimaryForeground, "#fafafa"),
    (ColorRole::Secondary, "#f5f5f5"),
    (ColorRole::SecondaryForeground, "#171717"),
    (ColorRole::Muted, "#f5f5f5"),
    (ColorRole::MutedForeground, "#737373"),
    (ColorRole::Accent, "#f5f5f5"),
    (ColorRole::AccentForeground, "#171717"),
    (ColorRole::Destructive, "#e7000b"),
    (ColorRole::Border, "#e5e5e5"),
    (ColorRole::Input, "#e5e5e5"),
    (ColorRole::Ring, "#a1a1a1"),
    (ColorRole::Chart1, "#f54900"),
    (ColorRole::Chart2, "#009689"),
    (ColorRole::Chart3, "#104e64"),
    (ColorRole::Chart4, "#ffb900"),
    (ColorRole::Chart5, "#fe9a00"),
    (ColorRole::Sidebar, "#fafafa"),
    (ColorRole::SidebarForeground, "#0a0a0a"),
    (ColorRole::SidebarPrimary, "#171717"),
    (ColorRole::SidebarPrimaryForeground, "#fafafa"),
    (ColorRole::SidebarAccent, "#f5f5f5"),
    (ColorRole::SidebarAccentForeground, "#171717"),
    (ColorRole::SidebarBorder, "#e5e5e5"),
];

const DEFAULT_DARK: &[(ColorRole, &str)] = &[
    (ColorRole::Background, "#0a0a0a"),
    (ColorRole::Foreground, "#fafafa"),
    (ColorRole::Card, "#171717"),
    (ColorRole::CardForeground, "#fafafa"),
    (ColorRole::Popover, "#171717"),
    (ColorRole::PopoverForeground, "#fafafa"),
    (ColorRole::Primary, "#e5e5e5"),
    (ColorRole::PrimaryForeground, "#171717"),
    (ColorRole::Secondary, "#262626"),
    (ColorRole::SecondaryForeground, "#fafafa"),
    (ColorRole::Muted, "#262626"),
    (ColorRole::MutedForeground, "#a1a1a1"),
    (ColorRole::Accent, "#262626"),
    (ColorRole::AccentForeground, "#fafafa"),
    (ColorRole::Destructive, "#ff6467"),
    (ColorRole::Border, "#ffffff1a"),
    (ColorRole::Input, "#ffffff26"),
    (ColorRole::Ring, "#737373"),
    (ColorRole::Chart1, "#1447e6"),
    (ColorRole::Chart2, "#00bc7d"),
    (ColorRole::Chart3, "#fe9a00"),
    (ColorRole::Chart4, "#ad46ff"),
    (ColorRole::Chart5, "#ff2056"),
    (ColorRole::Sidebar, "#171717"),
    (ColorRole::SidebarForeground, "#fafafa"),
    (ColorRole::SidebarPrimary, "#1447e6"),
    (ColorRole::SidebarPrimaryForeground, "#fafafa"),
    (ColorRole::SidebarAccent, "#262626"),
    (ColorRole::SidebarAccentForeground, "#fafafa"),
    (ColorRole::SidebarBorder, "#ffffff1a"),
];

const OCEAN_LIGHT: &[(ColorRole, &str)] = &[
    (ColorRole::Primary, "#0369a1"),
    (ColorRole::PrimaryForeground, "#f0f9ff"),
    (ColorRole::Accent, "#e0f2fe"),
    (ColorRole::AccentForeground, "#075985"),
    (ColorRole::Ring, "#38bdf8"),
    (ColorRole::SidebarPrimary, "#0369a1"),
    (ColorRole::Chart1, "#0284c7"),
    (ColorRole::Chart2, "#0891b2"),
];

const OCEAN_DARK: &[(ColorRole, &str)] = &[
    (ColorRole::Primary, "#38bdf8"),
    (ColorRole::PrimaryForeground, "#082f49"),
    (ColorRole::Accent, "#0c4a6e"),
    (ColorRole::AccentForeground, "#e0f2fe"),
    (ColorRole::Ring, "#0ea5e9"),
    (ColorRole::SidebarPrimary, "#38bdf8"),
];

const FOREST_LIGHT: &[(ColorRole, &str)] = &[
    (ColorRole::Primary, "#15803d"),
    (ColorRole::PrimaryForeground, "#f0fdf4"),
    (ColorRole::Accent, "#dcfce7"),
    (ColorRole::AccentForeground, "#166534"),
    (ColorRole::Ring, "#4ade80"),
    (ColorRole::SidebarPrimary, "#15803d"),
    (ColorRole::Chart1, "#16a34a"),
    (ColorRole::Chart2, "#65a30d"),
];

const FOREST_DARK: &[(ColorRole, &str)] = &[
    (ColorRole::Primary, "#4ade80"),
    (ColorRole::PrimaryForeground, "#052e16"),
    (ColorRole::Accent, "#14532d"),
    (ColorRole::AccentForeground, "#dcfce7"),
    (ColorRole::Ring, "#22c55e"),
    (ColorRole::SidebarPrimary, "#4ade80"),
];

const SUNSET_LIGHT: &[(ColorRole, &str)] = &[
    (ColorRole::Primary, "#ea580c"),
    (ColorRole::PrimaryForeground, "#fff7ed"),
    (ColorRole::Accent, "#ffedd5"),
    (ColorRole::AccentForeground, "#9a3412"),
    (ColorRole::Ring, "#fb923c"),
    (ColorRole::SidebarPrimary, "#ea580c"),
    (ColorRole::Chart1, "#f97316"),
    (ColorRole::Chart2, "#e11d48"),
];

const SUNSET_DARK: &[(ColorRole, &str)] = &[
    (ColorRole::Primary, "#fb923c"),
    (ColorRole::PrimaryForeground, "#431407"),
    (ColorRole::Accent, "#7c2d12"),
    (ColorRole::AccentForeground, "#ffedd5"),
    (ColorRole::Ring, "#f97316"),
    (ColorRole::SidebarPrimary, "#fb923c"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_complete() {
        for role in ColorRole::ALL {
            assert!(lookup(DEFAULT_LIGHT, *role).is_some(), "light {role}");
            assert!(lookup(DEFAULT_DARK, *role).is_some(), "dark {role}");
        }
    }

    #[test]
    fn test_presets_inherit_from_default() {
        let ocean = find_preset("ocean").unwrap();
        assert_eq!(ocean.color(ColorRole::Primary, ColorMode::Light), "#0369a1");
        assert_eq!(ocean.color(ColorRole::Border, ColorMode::Light), "#e5e5e5");
        assert_eq!(ocean.color(ColorRole::Border, ColorMode::Dark), "#ffffff1a");
        // listed in light only
        assert_eq!(ocean.color(ColorRole::Chart1, ColorMode::Dark), "#0284c7");
    }

    #[test]
    fn test_unknown_preset_falls_back() {
        assert!(find_preset("neon").is_none());
        assert_eq!(preset_or_default("neon").id, DEFAULT_PRESET);
    }

    #[test]
    fn test_preset_ids_unique() {
        for (i, preset) in PRESETS.iter().enumerate() {
            assert!(PRESETS[i + 1..].iter().all(|other| other.id != preset.id));
        }
    }
}
