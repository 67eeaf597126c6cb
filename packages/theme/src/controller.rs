//! # Theme Controller
//!
//! Keeps one generated theme stylesheet in a [`StyleHost`] in sync with its
//! inputs: the site's theme config, an optional global preset, and the user's
//! dark-mode preference. Inputs can be pushed directly or followed through
//! store subscriptions. The stylesheet is removed when the controller drops.

use crate::host::StyleHost;
use crate::resolve::{resolve_theme, ResolvedTheme, ThemeInputs};
use std::sync::Arc;
use storefront_common::Subscription;
use storefront_document::{ColorMode, SiteConfig, ThemeConfig};
use tracing::{debug, info};

/// Id of the injected style element
pub const THEME_STYLE_ID: &str = "site-theme";

pub struct ThemeController<H: StyleHost> {
    host: H,
    theme: Option<ThemeConfig>,
    global_preset: Option<String>,
    user_prefers_dark: Option<bool>,
    dark_mode: Option<Subscription<bool>>,
    site: Option<Subscription<Arc<SiteConfig>>>,
    current: Option<ResolvedTheme>,
    mode: ColorMode,
}

impl<H: StyleHost> ThemeController<H> {
    /// Create a controller and inject the initial stylesheet
    pub fn new(host: H, theme: Option<&ThemeConfig>) -> Self {
        let mut controller = Self {
            host,
            theme: theme.cloned(),
            global_preset: None,
            user_prefers_dark: None,
            dark_mode: None,
            site: None,
            current: None,
            mode: ColorMode::Light,
        };
        controller.apply();
        controller
    }

    /// Preset forced on every site, replacing the document's own preset
    pub fn with_global_preset(mut self, preset: Option<String>) -> Self {
        self.global_preset = preset;
        self.apply();
        self
    }

    /// Follow the user's dark-mode preference
    pub fn follow_dark_mode(mut self, mut subscription: Subscription<bool>) -> Self {
        self.user_prefers_dark = Some(subscription.latest());
        self.dark_mode = Some(subscription);
        self.apply();
        self
    }

    /// Follow committed site snapshots and re-theme when their theme changes
    pub fn follow_site(mut self, mut subscription: Subscription<Arc<SiteConfig>>) -> Self {
        let site = subscription.latest();
        self.site = Some(subscription);
        self.set_theme(site.theme.as_ref());
        self
    }

    pub fn resolved(&self) -> Option<&ResolvedTheme> {
        self.current.as_ref()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Replace the site theme and re-inject
    pub fn set_theme(&mut self, theme: Option<&ThemeConfig>) {
        self.theme = theme.cloned();
        self.apply();
    }

    /// Feed a dark-mode preference in directly
    pub fn set_user_prefers_dark(&mut self, prefers_dark: Option<bool>) {
        self.user_prefers_dark = prefers_dark;
        self.apply();
    }

    /// Pick up pending notifications without waiting.
    /// Returns whether anything was recomputed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        if let Some(sub) = self.dark_mode.as_mut().filter(|sub| sub.has_changed()) {
            self.user_prefers_dark = Some(sub.latest());
            changed = true;
        }

        if let Some(sub) = self.site.as_mut().filter(|sub| sub.has_changed()) {
            let site = sub.latest();
            if site.theme != self.theme {
                self.theme = site.theme.clone();
                changed = true;
            }
        }

        if changed {
            self.apply();
        }
        changed
    }

    /// Wait for the next dark-mode notification and apply it.
    /// Returns `false` once there is nothing left to follow.
    pub async fn next_dark_mode_change(&mut self) -> bool {
        let Some(sub) = self.dark_mode.as_mut() else {
            return false;
        };
        if !sub.changed().await {
            return false;
        }
        self.user_prefers_dark = Some(sub.latest());
        self.apply();
        true
    }

    fn apply(&mut self) {
        let inputs = ThemeInputs::from_config(self.theme.as_ref(), self.global_preset.as_deref());
        let theme = resolve_theme(&inputs);
        let mode = inputs.color_mode(self.user_prefers_dark);

        if self.current.as_ref() != Some(&theme) {
            self.host.remove_style(THEME_STYLE_ID);
            self.host.insert_style(THEME_STYLE_ID, theme.to_css());
            info!(preset = theme.preset, "Applied theme stylesheet");
            self.current = Some(theme);
        }

        if mode != self.mode {
            debug!(mode = mode.as_str(), "Switched color mode");
        }
        self.mode = mode;
        self.host.set_color_mode(mode);
    }
}

impl<H: StyleHost> Drop for ThemeController<H> {
    fn drop(&mut self) {
        if self.host.remove_style(THEME_STYLE_ID) {
            debug!("Removed theme stylesheet");
        }
    }
}
