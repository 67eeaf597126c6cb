use serde_json::json;
use storefront_blocks::{BlockRegistry, RenderContext, VNode, ViewMode};
use storefront_document::{parse_site_config, BlockInstance, Language, SiteConfig};

fn registry() -> BlockRegistry {
    BlockRegistry::with_builtin_blocks()
}

fn block(id: &str, tag: &str, registry: &BlockRegistry) -> BlockInstance {
    let props = registry
        .props_for_new_block(tag, &Default::default())
        .unwrap_or_default();
    BlockInstance::new(id, tag).with_props(props)
}

fn block_ids(node: &VNode, out: &mut Vec<String>) {
    if let Some(id) = node.attr("data-block-id") {
        out.push(id.to_string());
    }
    for child in node.children() {
        block_ids(child, out);
    }
}

#[test]
fn test_unknown_block_type_renders_nothing_and_page_survives() {
    let registry = registry();
    let site = SiteConfig::new("s", "Shop")
        .with_block(block("hero", "heroSection", &registry))
        .with_block(BlockInstance::new("x", "carousel3d"))
        .with_block(block("text", "textBlock", &registry));

    assert!(registry.get_schema("carousel3d").is_none());
    assert!(registry
        .render_block(&site.blocks[1], &RenderContext::default())
        .is_empty());

    let ctx = RenderContext::new(Language::Ru, ViewMode::Builder);
    let mut ids = Vec::new();
    block_ids(&registry.render_page(&site, &ctx), &mut ids);
    assert_eq!(ids, ["hero", "text"]);
}

#[test]
fn test_last_footer_wins() {
    let registry = registry();
    let mut first = block("f1", "footer", &registry);
    first.props.insert("companyName".into(), json!("First"));
    let mut second = block("f2", "footerMinimal", &registry);
    second.props.insert("companyName".into(), json!("Second"));

    let site = SiteConfig::new("s", "Shop")
        .with_block(first)
        .with_block(block("hero", "heroSection", &registry))
        .with_block(second);

    let html = registry
        .render_page(&site, &RenderContext::new(Language::En, ViewMode::Render))
        .to_html();
    assert!(html.contains("Second"));
    assert!(!html.contains("First"));
    assert_eq!(html.matches("<footer").count(), 1);
}

#[test]
fn test_navigation_first_then_body_then_footer() {
    let registry = registry();
    let site = SiteConfig::new("s", "Shop")
        .with_block(block("footer", "footer", &registry))
        .with_block(block("hero", "heroSection", &registry))
        .with_block(block("nav", "navigation", &registry))
        .with_block(block("list", "productsList", &registry));

    let ctx = RenderContext::new(Language::Uz, ViewMode::Builder);
    let mut ids = Vec::new();
    block_ids(&registry.render_page(&site, &ctx), &mut ids);
    assert_eq!(ids, ["nav", "hero", "list", "footer"]);
}

#[test]
fn test_document_with_mixed_text_shapes_renders() {
    let site = parse_site_config(
        r#"{
            "id": "home",
            "name": "Home",
            "blocks": [
                {
                    "id": "hero",
                    "type": "heroSection",
                    "props": {
                        "title": "Plain title",
                        "subtitle": { "text": "Legacy subtitle" },
                        "button": { "en": "Go", "href": "/go", "style": { "variant": "outline" } }
                    }
                },
                {
                    "id": "t",
                    "type": "textBlock",
                    "props": { "title": { "ru": "Заголовок", "en": "" } },
                    "children": [
                        { "id": "c1", "type": "text", "props": { "text": { "en": "Child" } } }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let html = registry()
        .render_page(&site, &RenderContext::new(Language::En, ViewMode::Render))
        .to_html();
    assert!(html.contains("Plain title"));
    assert!(html.contains("Legacy subtitle"));
    assert!(html.contains(r#"<a class="btn btn-outline btn-default" href="/go">Go</a>"#));
    assert!(!html.contains("Заголовок"));
    assert!(html.contains("Child"));
}
