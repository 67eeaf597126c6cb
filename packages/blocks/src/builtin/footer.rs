use super::{text_node, NavLink};
use crate::context::RenderContext;
use crate::registry::typed_props;
use crate::schema::{BlockSchema, InputKind};
use crate::vdom::VNode;
use serde::Deserialize;
use serde_json::json;
use storefront_document::{BlockInstance, BlockType, TextValue};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterColumn {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub title: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::list")]
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    #[serde(deserialize_with = "storefront_document::lenient::id")]
    pub network: String,
    #[serde(deserialize_with = "storefront_document::lenient::id")]
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterProps {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub company_name: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub description: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::list")]
    pub columns: Vec<FooterColumn>,
    #[serde(default, deserialize_with = "storefront_document::lenient::list")]
    pub socials: Vec<SocialLink>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub copyright: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub address: Option<TextValue>,
}

pub(super) fn schema(ty: BlockType) -> BlockSchema {
    let schema = BlockSchema::new(ty.label())
        .field("companyName", "Company name", InputKind::RichText)
        .field("copyright", "Copyright", InputKind::RichText)
        .field("socials", "Social links", InputKind::List);

    match ty {
        BlockType::FooterMinimal => schema.defaults(json!({
            "companyName": { "text": "Store" },
            "copyright": {
                "ru": "Все права защищены",
                "en": "All rights reserved",
                "uz": "Barcha huquqlar himoyalangan"
            }
        })),
        _ => schema
            .field("description", "Description", InputKind::RichText)
            .field("columns", "Link columns", InputKind::List)
            .field("phone", "Phone", InputKind::Text)
            .field("email", "Email", InputKind::Text)
            .field("address", "Address", InputKind::RichText)
            .defaults(json!({
                "companyName": { "text": "Store" },
                "description": {
                    "ru": "Интернет-магазин",
                    "en": "Online store",
                    "uz": "Internet-do'kon"
                },
                "columns": [
                    {
                        "title": { "ru": "Покупателям", "en": "Customers", "uz": "Xaridorlar uchun" },
                        "links": [
                            { "label": { "ru": "Доставка", "en": "Delivery", "uz": "Yetkazib berish" }, "href": "/delivery" },
                            { "label": { "ru": "Возврат", "en": "Returns", "uz": "Qaytarish" }, "href": "/returns" }
                        ]
                    }
                ],
                "copyright": {
                    "ru": "Все права защищены",
                    "en": "All rights reserved",
                    "uz": "Barcha huquqlar himoyalangan"
                }
            })),
    }
}

pub(super) fn render(ty: BlockType, block: &BlockInstance, ctx: &RenderContext) -> VNode {
    let Some(props) = typed_props::<FooterProps>(block) else {
        return VNode::Empty;
    };

    let socials = VNode::element("ul").with_class("socials").with_children(
        props.socials.iter().filter(|s| !s.href.is_empty()).map(|social| {
            VNode::element("li").with_child(
                VNode::element("a")
                    .with_attr("href", social.href.as_str())
                    .with_attr("data-network", social.network.as_str())
                    .with_child(VNode::text(social.network.as_str())),
            )
        }),
    );

    let bottom = VNode::element("div")
        .with_class("footer-bottom")
        .with_child(text_node("span", props.company_name.as_ref(), "companyName", ctx))
        .with_child(text_node("small", props.copyright.as_ref(), "copyright", ctx))
        .with_child(socials);

    let node = VNode::element("footer").with_class(format!("block block-{}", ty.tag()));
    if ty == BlockType::FooterMinimal {
        return node.with_child(bottom);
    }

    let about = VNode::element("div")
        .with_class("footer-about")
        .with_child(text_node("p", props.description.as_ref(), "description", ctx))
        .with_child(contacts(&props, ctx));

    let columns = props.columns.iter().map(|column| {
        VNode::element("div")
            .with_class("footer-column")
            .with_child(text_node("h4", column.title.as_ref(), "columns", ctx))
            .with_child(VNode::element("ul").with_children(
                column
                    .links
                    .iter()
                    .map(|link| link.render(ctx))
                    .filter(|node| !node.is_empty())
                    .map(|node| VNode::element("li").with_child(node)),
            ))
    });

    node.with_child(
        VNode::element("div")
            .with_class("footer-top")
            .with_child(about)
            .with_children(columns),
    )
    .with_child(bottom)
}

fn contacts(props: &FooterProps, ctx: &RenderContext) -> VNode {
    let mut list = VNode::element("address");
    if let Some(phone) = props.phone.as_deref().filter(|p| !p.is_empty()) {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
        list = list.with_child(
            VNode::element("a")
                .with_attr("href", format!("tel:{digits}"))
                .with_child(VNode::text(phone)),
        );
    }
    if let Some(email) = props.email.as_deref().filter(|e| !e.is_empty()) {
        list = list.with_child(
            VNode::element("a")
                .with_attr("href", format!("mailto:{email}"))
                .with_child(VNode::text(email)),
        );
    }
    list = list.with_child(text_node("span", props.address.as_ref(), "address", ctx));

    if list.children().is_empty() {
        VNode::Empty
    } else {
        list
    }
}
