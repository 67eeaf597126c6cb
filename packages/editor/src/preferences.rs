use storefront_common::Store;
use storefront_document::Language;

/// Per-visitor settings shared by everything on the page.
///
/// Built once at startup and passed by reference. A change made in another
/// window is fed in with `set` like a local change.
#[derive(Debug, Default)]
pub struct Preferences {
    pub language: Store<Language>,
    pub dark_mode: Store<bool>,
}

impl Preferences {
    pub fn new(language: Language, dark_mode: bool) -> Self {
        Self {
            language: Store::new(language),
            dark_mode: Store::new(dark_mode),
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }
}
