//! Injection of the generated stylesheet into the page.

use crate::stylesheet::style_body;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use storefront_document::ColorMode;

/// Where theme styles live while a page is shown
pub trait StyleHost {
    /// Add a style element with the given id
    fn insert_style(&mut self, id: &str, css: String);

    /// Remove the style element with the given id. Returns whether one existed.
    fn remove_style(&mut self, id: &str) -> bool;

    /// Switch the document between light and dark
    fn set_color_mode(&mut self, mode: ColorMode);
}

#[derive(Debug, Default)]
struct HeadState {
    styles: BTreeMap<String, String>,
    mode: ColorMode,
    inserts: usize,
}

/// In-memory document head.
///
/// Clones share state, so a caller can keep a handle and inspect what a
/// controller injected, including after the controller is dropped.
#[derive(Debug, Clone, Default)]
pub struct HeadStyles {
    state: Rc<RefCell<HeadState>>,
}

impl HeadStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, id: &str) -> Option<String> {
        self.state.borrow().styles.get(id).cloned()
    }

    pub fn style_count(&self) -> usize {
        self.state.borrow().styles.len()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.state.borrow().mode
    }

    /// Number of inserts performed so far
    pub fn insert_count(&self) -> usize {
        self.state.borrow().inserts
    }

    /// Whole head rendered as `<style>` tags; bodies never contain `</`
    pub fn to_html(&self) -> String {
        self.state
            .borrow()
            .styles
            .iter()
            .map(|(id, css)| format!("<style id=\"{}\">\n{}</style>\n", id, style_body(css)))
            .collect()
    }
}

impl StyleHost for HeadStyles {
    fn insert_style(&mut self, id: &str, css: String) {
        let mut state = self.state.borrow_mut();
        state.styles.insert(id.to_string(), css);
        state.inserts += 1;
    }

    fn remove_style(&mut self, id: &str) -> bool {
        self.state.borrow_mut().styles.remove(id).is_some()
    }

    fn set_color_mode(&mut self, mode: ColorMode) {
        self.state.borrow_mut().mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_keeps_style_element_closed() {
        let mut head = HeadStyles::new();
        head.insert_style("site-theme", ":root { --x: y; }</style><script>alert(1)</script>".to_string());

        let html = head.to_html();
        assert_eq!(html.matches("</style>").count(), 1);
        assert!(html.ends_with("</style>\n"));
        assert_eq!(head.insert_count(), 1);
    }
}
