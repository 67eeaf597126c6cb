//! Render output tree.
//!
//! Block renderers produce [`VNode`] trees; presentation code maps them onto
//! whatever the host displays. [`VNode::to_html`] is the reference mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },

    /// Siblings without a wrapper element
    Fragment { children: Vec<VNode> },

    /// Nothing to render (unknown block, missing data, empty field)
    Empty,
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn fragment(children: Vec<VNode>) -> Self {
        VNode::Fragment {
            children: children.into_iter().filter(|c| !c.is_empty()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, VNode::Empty)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut attributes, .. } = self {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    /// Append a child; `Empty` children are dropped
    pub fn with_child(mut self, child: VNode) -> Self {
        self.push_child(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        for child in children {
            self.push_child(child);
        }
        self
    }

    pub fn push_child(&mut self, child: VNode) {
        if child.is_empty() {
            return;
        }
        match self {
            VNode::Element { children, .. } | VNode::Fragment { children } => children.push(child),
            VNode::Text { .. } | VNode::Empty => {}
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } | VNode::Fragment { children } => children,
            VNode::Text { .. } | VNode::Empty => &[],
        }
    }

    /// All text content in document order, concatenated
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Text { content } => out.push_str(content),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for the first element with `attr == value`
    pub fn find_by_attr(&self, key: &str, value: &str) -> Option<&VNode> {
        if self.attr(key) == Some(value) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_attr(key, value))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            VNode::Element {
                tag,
                attributes,
                styles,
                children,
            } => {
                out.push('<');
                out.push_str(tag);

                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }

                if !styles.is_empty() {
                    let inline = styles
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, v))
                        .collect::<Vec<_>>()
                        .join("; ");
                    out.push_str(" style=\"");
                    out.push_str(&escape_html(&inline));
                    out.push('"');
                }

                out.push('>');

                if is_void_tag(tag) {
                    return;
                }

                for child in children {
                    child.write_html(out);
                }

                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            VNode::Text { content } => out.push_str(&escape_html(content)),
            VNode::Fragment { children } => {
                for child in children {
                    child.write_html(out);
                }
            }
            VNode::Empty => {}
        }
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_void_tag(tag: &str) -> bool {
    matches!(tag, "img" | "input" | "br" | "hr" | "meta" | "link" | "source")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_output() {
        let node = VNode::element("a")
            .with_attr("href", "/sale?x=1&y=2")
            .with_style("color", "red")
            .with_child(VNode::text("<Buy>"));

        assert_eq!(
            node.to_html(),
            r#"<a href="/sale?x=1&amp;y=2" style="color: red">&lt;Buy&gt;</a>"#
        );
    }

    #[test]
    fn test_void_tags_have_no_close() {
        let node = VNode::element("img").with_attr("src", "/a.png");
        assert_eq!(node.to_html(), r#"<img src="/a.png">"#);
    }

    #[test]
    fn test_empty_children_are_dropped() {
        let node = VNode::element("div")
            .with_child(VNode::Empty)
            .with_child(VNode::text("x"));
        assert_eq!(node.children().len(), 1);

        let fragment = VNode::fragment(vec![VNode::Empty, VNode::text("a"), VNode::Empty]);
        assert_eq!(fragment.children().len(), 1);
        assert_eq!(VNode::Empty.to_html(), "");
    }

    #[test]
    fn test_find_by_attr() {
        let tree = VNode::element("section").with_child(
            VNode::element("h1")
                .with_attr("data-field", "title")
                .with_child(VNode::text("Hi")),
        );
        let title = tree.find_by_attr("data-field", "title").unwrap();
        assert_eq!(title.text_content(), "Hi");
    }
}
