//! Rendering for the primitive components nested inside blocks.

use crate::context::RenderContext;
use crate::vdom::VNode;
use serde_json::Value;
use storefront_document::{resolve_json_text, ButtonValue, ComponentInstance, ComponentKind};

pub fn render_components(components: &[ComponentInstance], ctx: &RenderContext) -> Vec<VNode> {
    components
        .iter()
        .map(|component| render_component(component, ctx))
        .filter(|node| !node.is_empty())
        .collect()
}

pub fn render_component(component: &ComponentInstance, ctx: &RenderContext) -> VNode {
    let node = match component.component_kind() {
        Some(ComponentKind::Text) => {
            let content = resolve_json_text(component.props.get("text"), ctx.language);
            if content.is_empty() && !ctx.is_builder() {
                return VNode::Empty;
            }
            let tag = component
                .props
                .get("tag")
                .and_then(Value::as_str)
                .filter(|tag| matches!(*tag, "p" | "span" | "h1" | "h2" | "h3" | "h4"))
                .unwrap_or("p");
            VNode::element(tag).with_child(VNode::text(content))
        }
        Some(ComponentKind::Button) => {
            let Some(button) = component.props.get("button").and_then(ButtonValue::from_json) else {
                return VNode::Empty;
            };
            crate::builtin::button_node(&button, ctx)
        }
        Some(ComponentKind::Image) => {
            let Some(src) = component.props.get("src").and_then(Value::as_str) else {
                return VNode::Empty;
            };
            let alt = resolve_json_text(component.props.get("alt"), ctx.language);
            VNode::element("img").with_attr("src", src).with_attr("alt", alt)
        }
        Some(ComponentKind::Row) => VNode::element("div")
            .with_class("row")
            .with_children(render_components(component.children(), ctx)),
        None => return VNode::Empty,
    };

    let mut node = apply_inline_style(node, component);
    if ctx.is_builder() {
        node = node.with_attr("data-component-id", component.id.as_str());
    }
    node
}

fn apply_inline_style(mut node: VNode, component: &ComponentInstance) -> VNode {
    if let Some(style) = &component.style {
        for (key, value) in style {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => continue,
            };
            node = node.with_style(kebab_case(key), value);
        }
    }
    node
}

/// `fontSize` -> `font-size`
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ViewMode;
    use serde_json::json;
    use storefront_document::Language;

    #[test]
    fn test_row_renders_children_in_order() {
        let row = ComponentInstance::new("row", ComponentKind::Row)
            .with_child(ComponentInstance::new("t1", ComponentKind::Text).with_prop("text", json!({ "en": "One" })))
            .with_child(ComponentInstance::new("t2", ComponentKind::Text).with_prop("text", json!("Two")));

        let ctx = RenderContext::new(Language::En, ViewMode::Render);
        let node = render_component(&row, &ctx);
        assert_eq!(node.to_html(), r#"<div class="row"><p>One</p><p>Two</p></div>"#);
    }

    #[test]
    fn test_unknown_component_kind_is_skipped() {
        let mut video = ComponentInstance::new("v", ComponentKind::Text);
        video.kind = "video".to_string();
        assert!(render_component(&video, &RenderContext::default()).is_empty());
    }

    #[test]
    fn test_inline_style_is_kebab_cased() {
        let mut text = ComponentInstance::new("t", ComponentKind::Text).with_prop("text", json!("Hi"));
        let mut style = serde_json::Map::new();
        style.insert("fontSize".to_string(), json!("12px"));
        style.insert("opacity".to_string(), json!(0.5));
        text.style = Some(style);

        let html = render_component(&text, &RenderContext::default()).to_html();
        assert_eq!(html, r#"<p style="font-size: 12px; opacity: 0.5">Hi</p>"#);
    }

    #[test]
    fn test_builder_keeps_empty_text_editable() {
        let text = ComponentInstance::new("t", ComponentKind::Text);
        assert!(render_component(&text, &RenderContext::default()).is_empty());

        let ctx = RenderContext::new(Language::Ru, ViewMode::Builder);
        let node = render_component(&text, &ctx);
        assert_eq!(node.attr("data-component-id"), Some("t"));
    }
}
