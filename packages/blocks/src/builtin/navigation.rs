use super::{default_true, image_node, text_node};
use crate::context::RenderContext;
use crate::registry::typed_props;
use crate::schema::{BlockSchema, InputKind};
use crate::vdom::VNode;
use serde::Deserialize;
use serde_json::json;
use storefront_document::{resolve_text, BlockInstance, BlockType, Language, TextValue};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavLink {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub label: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::id")]
    pub href: String,
}

impl NavLink {
    pub(crate) fn render(&self, ctx: &RenderContext) -> VNode {
        let label = resolve_text(self.label.as_ref(), ctx.language);
        if label.is_empty() {
            return VNode::Empty;
        }
        VNode::element("a")
            .with_attr("href", self.href.as_str())
            .with_child(VNode::text(label))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationProps {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub logo: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub logo_image: Option<String>,
    #[serde(default, deserialize_with = "storefront_document::lenient::list")]
    pub links: Vec<NavLink>,
    #[serde(default = "default_true")]
    pub show_cart: bool,
    #[serde(default = "default_true")]
    pub show_language_switcher: bool,
    #[serde(default)]
    pub sticky: bool,
}

pub(super) fn schema() -> BlockSchema {
    BlockSchema::new(BlockType::Navigation.label())
        .field("logo", "Logo text", InputKind::RichText)
        .field("logoImage", "Logo image", InputKind::Image)
        .field("links", "Links", InputKind::List)
        .field("showCart", "Show cart", InputKind::Toggle)
        .field("showLanguageSwitcher", "Show language switcher", InputKind::Toggle)
        .field("sticky", "Sticky header", InputKind::Toggle)
        .defaults(json!({
            "logo": { "text": "Store" },
            "links": [
                { "label": { "ru": "Главная", "en": "Home", "uz": "Bosh sahifa" }, "href": "/" },
                { "label": { "ru": "Каталог", "en": "Catalog", "uz": "Katalog" }, "href": "/catalog" },
                { "label": { "ru": "Контакты", "en": "Contacts", "uz": "Aloqa" }, "href": "/contacts" }
            ],
            "showCart": true,
            "showLanguageSwitcher": true,
            "sticky": false
        }))
}

pub(super) fn render(block: &BlockInstance, ctx: &RenderContext) -> VNode {
    let Some(props) = typed_props::<NavigationProps>(block) else {
        return VNode::Empty;
    };

    let logo_text = resolve_text(props.logo.as_ref(), ctx.language);
    let logo = match image_node(props.logo_image.as_deref(), &logo_text, "logoImage", ctx) {
        VNode::Empty => text_node("span", props.logo.as_ref(), "logo", ctx),
        image => image,
    };

    let links = VNode::element("ul").with_children(
        props
            .links
            .iter()
            .map(|link| link.render(ctx))
            .filter(|node| !node.is_empty())
            .map(|node| VNode::element("li").with_child(node)),
    );

    let mut header = VNode::element("header")
        .with_class(if props.sticky {
            "block block-navigation sticky"
        } else {
            "block block-navigation"
        })
        .with_child(
            VNode::element("a")
                .with_class("logo")
                .with_attr("href", "/")
                .with_child(logo),
        )
        .with_child(ctx.mark_field(VNode::element("nav").with_child(links), "links"));

    if props.show_language_switcher {
        header = header.with_child(language_switcher(ctx.language));
    }

    if props.show_cart {
        header = header.with_child(
            VNode::element("a")
                .with_class("cart-link")
                .with_attr("href", "/cart")
                .with_child(VNode::text(cart_label(ctx.language))),
        );
    }

    header
}

fn language_switcher(active: Language) -> VNode {
    VNode::element("div").with_class("language-switcher").with_children(
        Language::ALL.iter().map(|lang| {
            let class = if *lang == active { "lang active" } else { "lang" };
            VNode::element("button")
                .with_attr("type", "button")
                .with_attr("data-language", lang.code())
                .with_class(class)
                .with_child(VNode::text(lang.code().to_uppercase()))
        }),
    )
}

fn cart_label(language: Language) -> &'static str {
    match language {
        Language::Ru => "Корзина",
        Language::En => "Cart",
        Language::Uz => "Savat",
    }
}
