use super::{image_node, optional_button, section, text_node};
use crate::context::RenderContext;
use crate::registry::typed_props;
use crate::schema::{BlockSchema, InputKind};
use crate::vdom::VNode;
use serde::Deserialize;
use serde_json::json;
use storefront_document::{resolve_text, BlockInstance, BlockType, ButtonValue, TextValue};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub title: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub subtitle: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::button")]
    pub button: Option<ButtonValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::button")]
    pub secondary_button: Option<ButtonValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub alignment: Option<String>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub background_color: Option<String>,
}

pub(super) fn schema(ty: BlockType) -> BlockSchema {
    let schema = BlockSchema::new(ty.label())
        .field("title", "Title", InputKind::RichText)
        .field("subtitle", "Subtitle", InputKind::RichText)
        .field("button", "Primary button", InputKind::Button)
        .field("secondaryButton", "Secondary button", InputKind::Button)
        .field("alignment", "Alignment", InputKind::select(&["left", "center", "right"]))
        .field("backgroundColor", "Background", InputKind::Color);

    let schema = match ty {
        BlockType::HeroMinimal => schema,
        _ => schema.field("image", "Image", InputKind::Image),
    };

    let alignment = if ty == BlockType::HeroSplit { "left" } else { "center" };

    schema.defaults(json!({
        "title": {
            "ru": "Новая коллекция",
            "en": "New collection",
            "uz": "Yangi kolleksiya"
        },
        "subtitle": {
            "ru": "Лучшие товары сезона",
            "en": "The best products of the season",
            "uz": "Mavsumning eng yaxshi mahsulotlari"
        },
        "button": {
            "ru": "В каталог",
            "en": "Shop now",
            "uz": "Katalogga",
            "href": "/catalog",
            "style": { "variant": "default", "size": "lg" }
        },
        "alignment": alignment,
        "image": ""
    }))
}

pub(super) fn render(ty: BlockType, block: &BlockInstance, ctx: &RenderContext) -> VNode {
    let Some(props) = typed_props::<HeroProps>(block) else {
        return VNode::Empty;
    };

    let alignment = props.alignment.as_deref().unwrap_or("center");
    let copy = VNode::element("div")
        .with_class(format!("hero-copy text-{}", alignment))
        .with_child(text_node("h1", props.title.as_ref(), "title", ctx))
        .with_child(text_node("p", props.subtitle.as_ref(), "subtitle", ctx))
        .with_child(
            VNode::element("div")
                .with_class("hero-actions")
                .with_child(optional_button(props.button.as_ref(), "button", ctx))
                .with_child(optional_button(props.secondary_button.as_ref(), "secondaryButton", ctx)),
        );

    let alt = resolve_text(props.title.as_ref(), ctx.language);
    let image = match ty {
        BlockType::HeroMinimal => VNode::Empty,
        _ => image_node(props.image.as_deref(), &alt, "image", ctx),
    };

    let mut node = section(ty);
    if let Some(color) = &props.background_color {
        node = node.with_style("background-color", color.as_str());
    }

    match ty {
        BlockType::HeroSplit => node.with_child(
            VNode::element("div")
                .with_class("hero-split")
                .with_child(copy)
                .with_child(image),
        ),
        _ => node.with_child(image).with_child(copy),
    }
}
