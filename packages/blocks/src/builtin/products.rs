use super::{default_true, optional_button, section, text_node};
use crate::context::{ProductCard, RenderContext};
use crate::registry::typed_props;
use crate::schema::{BlockSchema, InputKind};
use crate::vdom::VNode;
use serde::Deserialize;
use serde_json::json;
use storefront_document::{resolve_text, BlockInstance, BlockType, ButtonValue, TextValue};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsListProps {
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub title: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub subtitle: Option<TextValue>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_columns")]
    pub columns: u8,
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub show_prices: bool,
}

fn default_limit() -> usize {
    8
}

fn default_columns() -> u8 {
    4
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailProps {
    #[serde(default, deserialize_with = "storefront_document::lenient::button")]
    pub add_to_cart: Option<ButtonValue>,
    #[serde(default = "default_true")]
    pub show_description: bool,
    #[serde(default = "default_true")]
    pub show_price: bool,
}

pub(super) fn list_schema() -> BlockSchema {
    BlockSchema::new(BlockType::ProductsList.label())
        .field("title", "Title", InputKind::RichText)
        .field("subtitle", "Subtitle", InputKind::RichText)
        .field("limit", "Products shown", InputKind::Number)
        .field("columns", "Columns", InputKind::Number)
        .field("category", "Category", InputKind::Text)
        .field("showPrices", "Show prices", InputKind::Toggle)
        .defaults(json!({
            "title": {
                "ru": "Популярные товары",
                "en": "Popular products",
                "uz": "Mashhur mahsulotlar"
            },
            "limit": 8,
            "columns": 4,
            "showPrices": true
        }))
}

pub(super) fn detail_schema(ty: BlockType) -> BlockSchema {
    BlockSchema::new(ty.label())
        .field("addToCart", "Add to cart button", InputKind::Button)
        .field("showDescription", "Show description", InputKind::Toggle)
        .field("showPrice", "Show price", InputKind::Toggle)
        .defaults(json!({
            "addToCart": {
                "ru": "В корзину",
                "en": "Add to cart",
                "uz": "Savatga",
                "style": { "variant": "default", "size": "lg" }
            },
            "showDescription": true,
            "showPrice": true
        }))
}

pub(super) fn render_list(block: &BlockInstance, ctx: &RenderContext) -> VNode {
    let Some(props) = typed_props::<ProductsListProps>(block) else {
        return VNode::Empty;
    };

    let cards = ctx
        .products
        .iter()
        .filter(|product| match &props.category {
            Some(category) if !category.is_empty() => product.category.as_deref() == Some(category.as_str()),
            _ => true,
        })
        .take(props.limit)
        .map(|product| product_card(product, props.show_prices, ctx));

    let grid = VNode::element("div")
        .with_class(format!("product-grid cols-{}", props.columns.clamp(1, 6)))
        .with_children(cards);

    section(BlockType::ProductsList)
        .with_child(text_node("h2", props.title.as_ref(), "title", ctx))
        .with_child(text_node("p", props.subtitle.as_ref(), "subtitle", ctx))
        .with_child(grid)
}

fn product_card(product: &ProductCard, show_price: bool, ctx: &RenderContext) -> VNode {
    let name = resolve_text(product.name.as_ref(), ctx.language);
    let mut link = VNode::element("a").with_attr("href", product.href());

    if let Some(image) = product.images.first() {
        link = link.with_child(
            VNode::element("img")
                .with_attr("src", image.as_str())
                .with_attr("alt", name.as_str()),
        );
    }

    link = link.with_child(VNode::element("h3").with_child(VNode::text(name)));

    if show_price {
        if let Some(price) = &product.price {
            link = link.with_child(
                VNode::element("span")
                    .with_class("price")
                    .with_child(VNode::text(price.as_str())),
            );
        }
    }

    VNode::element("article")
        .with_class("product-card")
        .with_attr("data-product-id", product.id.as_str())
        .with_child(link)
}

pub(super) fn render_detail(ty: BlockType, block: &BlockInstance, ctx: &RenderContext) -> VNode {
    let Some(props) = typed_props::<ProductDetailProps>(block) else {
        return VNode::Empty;
    };

    let Some(product) = &ctx.product else {
        // Builder previews keep the block selectable without product data
        if ctx.is_builder() {
            return section(ty).with_child(
                VNode::element("div")
                    .with_class("placeholder")
                    .with_child(VNode::text("Product")),
            );
        }
        return VNode::Empty;
    };

    let name = resolve_text(product.name.as_ref(), ctx.language);
    let images = match ty {
        BlockType::ProductDetailGallery => product.images.iter().collect::<Vec<_>>(),
        _ => product.images.iter().take(1).collect(),
    };

    let gallery = VNode::element("div")
        .with_class("product-images")
        .with_children(images.into_iter().map(|src| {
            VNode::element("img")
                .with_attr("src", src.as_str())
                .with_attr("alt", name.as_str())
        }));

    let mut info = VNode::element("div")
        .with_class("product-info")
        .with_child(VNode::element("h1").with_child(VNode::text(name.as_str())));

    if props.show_price {
        if let Some(price) = &product.price {
            info = info.with_child(
                VNode::element("span")
                    .with_class("price")
                    .with_child(VNode::text(price.as_str())),
            );
        }
    }

    if props.show_description {
        let description = resolve_text(product.description.as_ref(), ctx.language);
        if !description.is_empty() {
            info = info.with_child(VNode::element("p").with_child(VNode::text(description)));
        }
    }

    info = info.with_child(optional_button(props.add_to_cart.as_ref(), "addToCart", ctx));

    section(ty)
        .with_attr("data-product-id", product.id.as_str())
        .with_child(gallery)
        .with_child(info)
}
