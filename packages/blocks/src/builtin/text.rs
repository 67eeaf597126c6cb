use super::{section, text_node};
use crate::context::RenderContext;
use crate::registry::typed_props;
use crate::schema::{BlockSchema, InputKind};
use crate::vdom::VNode;
use serde::Deserialize;
use serde_json::json;
use storefront_document::{BlockInstance, BlockType, TextValue};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextColumn {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub title: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub body: Option<TextValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextBlockProps {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub title: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub body: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::list")]
    pub columns: Vec<TextColumn>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub alignment: Option<String>,
}

pub(super) fn schema(ty: BlockType) -> BlockSchema {
    let schema = BlockSchema::new(ty.label())
        .field("title", "Title", InputKind::RichText)
        .field("alignment", "Alignment", InputKind::select(&["left", "center", "right"]));

    match ty {
        BlockType::TextColumns => schema.field("columns", "Columns", InputKind::List).defaults(json!({
            "title": { "ru": "Почему мы", "en": "Why us", "uz": "Nega biz" },
            "columns": [
                {
                    "title": { "ru": "Доставка", "en": "Delivery", "uz": "Yetkazib berish" },
                    "body": { "ru": "По всей стране", "en": "Nationwide", "uz": "Butun mamlakat bo'ylab" }
                },
                {
                    "title": { "ru": "Гарантия", "en": "Warranty", "uz": "Kafolat" },
                    "body": { "ru": "14 дней на возврат", "en": "14-day returns", "uz": "14 kun ichida qaytarish" }
                }
            ],
            "alignment": "left"
        })),
        _ => schema.field("body", "Text", InputKind::RichText).defaults(json!({
            "title": { "ru": "О нас", "en": "About us", "uz": "Biz haqimizda" },
            "body": { "ru": "", "en": "", "uz": "" },
            "alignment": "left"
        })),
    }
}

pub(super) fn render(ty: BlockType, block: &BlockInstance, ctx: &RenderContext) -> VNode {
    let Some(props) = typed_props::<TextBlockProps>(block) else {
        return VNode::Empty;
    };

    let alignment = props.alignment.as_deref().unwrap_or("left");
    let node = section(ty)
        .with_class(format!("block block-{} text-{}", ty.tag(), alignment))
        .with_child(text_node("h2", props.title.as_ref(), "title", ctx));

    match ty {
        BlockType::TextColumns => {
            let count = props.columns.len().clamp(1, 4);
            node.with_child(
                VNode::element("div")
                    .with_class(format!("text-columns cols-{count}"))
                    .with_children(props.columns.iter().map(|column| {
                        VNode::element("div")
                            .with_class("text-column")
                            .with_child(text_node("h3", column.title.as_ref(), "columns", ctx))
                            .with_child(text_node("p", column.body.as_ref(), "columns", ctx))
                    })),
            )
        }
        _ => node.with_child(text_node("p", props.body.as_ref(), "body", ctx)),
    }
}
