use super::{section, text_node};
use crate::context::RenderContext;
use crate::registry::typed_props;
use crate::schema::{BlockSchema, InputKind};
use crate::vdom::VNode;
use serde::Deserialize;
use serde_json::json;
use storefront_document::{resolve_text, BlockInstance, BlockType, TextValue};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "storefront_document::lenient::id")]
    pub name: String,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub role: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub quote: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsProps {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub title: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub subtitle: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::list")]
    pub items: Vec<Testimonial>,
    #[serde(default)]
    pub columns: Option<u8>,
}

pub(super) fn schema(ty: BlockType) -> BlockSchema {
    let schema = BlockSchema::new(ty.label())
        .field("title", "Title", InputKind::RichText)
        .field("subtitle", "Subtitle", InputKind::RichText)
        .field("items", "Testimonials", InputKind::List);

    let schema = match ty {
        BlockType::TestimonialsGrid => schema.field("columns", "Columns", InputKind::Number),
        _ => schema,
    };

    schema.defaults(json!({
        "title": {
            "ru": "Отзывы покупателей",
            "en": "What our customers say",
            "uz": "Mijozlarimiz fikri"
        },
        "items": [
            {
                "name": "Dilnoza",
                "quote": {
                    "ru": "Быстрая доставка и отличное качество.",
                    "en": "Fast delivery and great quality.",
                    "uz": "Tez yetkazib berish va ajoyib sifat."
                },
                "rating": 5
            },
            {
                "name": "Alexey",
                "quote": {
                    "ru": "Буду заказывать ещё.",
                    "en": "Will order again.",
                    "uz": "Yana buyurtma beraman."
                },
                "rating": 4
            }
        ],
        "columns": 3
    }))
}

pub(super) fn render(ty: BlockType, block: &BlockInstance, ctx: &RenderContext) -> VNode {
    let Some(props) = typed_props::<TestimonialsProps>(block) else {
        return VNode::Empty;
    };

    let list_class = match ty {
        BlockType::TestimonialsGrid => format!("testimonials-grid cols-{}", props.columns.unwrap_or(3).clamp(1, 6)),
        _ => "testimonials-list".to_string(),
    };

    let items = props.items.iter().map(|item| render_item(item, ctx));

    section(ty)
        .with_child(text_node("h2", props.title.as_ref(), "title", ctx))
        .with_child(text_node("p", props.subtitle.as_ref(), "subtitle", ctx))
        .with_child(ctx.mark_field(
            VNode::element("div").with_class(list_class).with_children(items),
            "items",
        ))
}

fn render_item(item: &Testimonial, ctx: &RenderContext) -> VNode {
    let quote = resolve_text(item.quote.as_ref(), ctx.language);
    if quote.is_empty() {
        return VNode::Empty;
    }

    let mut figure = VNode::element("figure").with_class("testimonial");

    if let Some(avatar) = item.avatar.as_deref().filter(|a| !a.is_empty()) {
        figure = figure.with_child(
            VNode::element("img")
                .with_attr("src", avatar)
                .with_attr("alt", item.name.as_str()),
        );
    }

    figure = figure.with_child(VNode::element("blockquote").with_child(VNode::text(quote)));

    if let Some(rating) = item.rating {
        let stars = "★".repeat(rating.min(5) as usize);
        figure = figure.with_child(
            VNode::element("div")
                .with_class("rating")
                .with_attr("aria-label", format!("{} / 5", rating.min(5)))
                .with_child(VNode::text(stars)),
        );
    }

    let role = resolve_text(item.role.as_ref(), ctx.language);
    let mut caption = VNode::element("figcaption").with_child(VNode::text(item.name.as_str()));
    if !role.is_empty() {
        caption = caption.with_child(VNode::element("span").with_child(VNode::text(role)));
    }

    figure.with_child(caption)
}
