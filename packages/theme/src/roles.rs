use serde::Serialize;
use std::fmt;

macro_rules! color_roles {
    ($($variant:ident => $key:literal, $css:literal;)*) => {
        /// Semantic color slot of a theme
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum ColorRole {
            $($variant,)*
        }

        impl ColorRole {
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$variant,)*];

            /// Key used in stored theme maps
            pub fn key(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $key,)*
                }
            }

            /// CSS custom property name without the leading dashes
            pub fn css_name(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $css,)*
                }
            }
        }
    };
}

color_roles! {
    Background => "background", "background";
    Foreground => "foreground", "foreground";
    Card => "card", "card";
    CardForeground => "cardForeground", "card-foreground";
    Popover => "popover", "popover";
    PopoverForeground => "popoverForeground", "popover-foreground";
    Primary => "primary", "primary";
    PrimaryForeground => "primaryForeground", "primary-foreground";
    Secondary => "secondary", "secondary";
    SecondaryForeground => "secondaryForeground", "secondary-foreground";
    Muted => "muted", "muted";
    MutedForeground => "mutedForeground", "muted-foreground";
    Accent => "accent", "accent";
    AccentForeground => "accentForeground", "accent-foreground";
    Destructive => "destructive", "destructive";
    Border => "border", "border";
    Input => "input", "input";
    Ring => "ring", "ring";
    Chart1 => "chart1", "chart-1";
    Chart2 => "chart2", "chart-2";
    Chart3 => "chart3", "chart-3";
    Chart4 => "chart4", "chart-4";
    Chart5 => "chart5", "chart-5";
    Sidebar => "sidebar", "sidebar";
    SidebarForeground => "sidebarForeground", "sidebar-foreground";
    SidebarPrimary => "sidebarPrimary", "sidebar-primary";
    SidebarPrimaryForeground => "sidebarPrimaryForeground", "sidebar-primary-foreground";
    SidebarAccent => "sidebarAccent", "sidebar-accent";
    SidebarAccentForeground => "sidebarAccentForeground", "sidebar-accent-foreground";
    SidebarBorder => "sidebarBorder", "sidebar-border";
}

impl ColorRole {
    pub const COUNT: usize = 30;

    /// Accepts the stored key or the CSS name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.key() == key || role.css_name() == key)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_thirty_distinct_roles() {
        assert_eq!(ColorRole::ALL.len(), ColorRole::COUNT);
        let keys: HashSet<_> = ColorRole::ALL.iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), ColorRole::COUNT);
    }

    #[test]
    fn test_from_key_accepts_both_spellings() {
        assert_eq!(ColorRole::from_key("cardForeground"), Some(ColorRole::CardForeground));
        assert_eq!(ColorRole::from_key("card-foreground"), Some(ColorRole::CardForeground));
        assert_eq!(ColorRole::from_key("chart-3"), Some(ColorRole::Chart3));
        assert_eq!(ColorRole::from_key("shadow"), None);
    }
}
