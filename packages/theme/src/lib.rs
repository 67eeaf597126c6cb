//! Theme presets, per-key override merging and stylesheet generation for
//! storefront sites, plus a controller that keeps the generated stylesheet
//! injected while a page is shown.

pub mod controller;
pub mod host;
pub mod presets;
pub mod resolve;
pub mod roles;
pub mod stylesheet;

pub use controller::{ThemeController, THEME_STYLE_ID};
pub use host::{HeadStyles, StyleHost};
pub use presets::{find_preset, preset_or_default, PresetFonts, ThemePreset, DEFAULT_PRESET, PRESETS};
pub use resolve::{apply_color_mode, resolve_theme, ResolvedFonts, ResolvedTheme, ThemeInputs};
pub use roles::ColorRole;
pub use stylesheet::{CssRule, ThemeStylesheet};
