//! Built-in storefront blocks.
//!
//! Each block type owns a typed props struct, a schema (editable fields and
//! defaults) and a render function. Variants of the same family share props
//! and differ only in layout.

mod footer;
mod hero;
mod navigation;
mod products;
mod testimonials;
mod text;

pub use footer::{FooterColumn, FooterProps, SocialLink};
pub use hero::HeroProps;
pub use navigation::{NavLink, NavigationProps};
pub use products::{ProductDetailProps, ProductsListProps};
pub use testimonials::{Testimonial, TestimonialsProps};
pub use text::{TextBlockProps, TextColumn};

use crate::context::RenderContext;
use crate::registry::BlockRegistry;
use crate::vdom::VNode;
use storefront_document::{resolve_style, resolve_text, BlockType, ButtonValue, TextStyle, TextValue};

pub(crate) fn register_all(registry: &mut BlockRegistry) {
    for ty in BlockType::ALL {
        let schema = match ty {
            BlockType::HeroSection | BlockType::HeroSplit | BlockType::HeroMinimal => hero::schema(*ty),
            BlockType::Navigation => navigation::schema(),
            BlockType::Testimonials | BlockType::TestimonialsGrid => testimonials::schema(*ty),
            BlockType::ProductsList => products::list_schema(),
            BlockType::ProductDetail | BlockType::ProductDetailGallery => products::detail_schema(*ty),
            BlockType::Footer | BlockType::FooterMinimal => footer::schema(*ty),
            BlockType::TextBlock | BlockType::TextColumns => text::schema(*ty),
        };

        let ty = *ty;
        registry.register(ty.tag(), schema, move |block, ctx| match ty {
            BlockType::HeroSection | BlockType::HeroSplit | BlockType::HeroMinimal => hero::render(ty, block, ctx),
            BlockType::Navigation => navigation::render(block, ctx),
            BlockType::Testimonials | BlockType::TestimonialsGrid => testimonials::render(ty, block, ctx),
            BlockType::ProductsList => products::render_list(block, ctx),
            BlockType::ProductDetail | BlockType::ProductDetailGallery => products::render_detail(ty, block, ctx),
            BlockType::Footer | BlockType::FooterMinimal => footer::render(ty, block, ctx),
            BlockType::TextBlock | BlockType::TextColumns => text::render(ty, block, ctx),
        });
    }
}

/// Outer element for a block, classed by its type tag
pub(crate) fn section(ty: BlockType) -> VNode {
    VNode::element("section").with_class(format!("block block-{}", ty.tag()))
}

/// Element showing a text field.
///
/// Empty text renders nothing for visitors but stays as an editable
/// placeholder in the builder.
pub(crate) fn text_node(tag: &str, value: Option<&TextValue>, field: &str, ctx: &RenderContext) -> VNode {
    let content = resolve_text(value, ctx.language);
    if content.is_empty() && !ctx.is_builder() {
        return VNode::Empty;
    }

    let mut node = VNode::element(tag).with_child(VNode::text(content));
    if let Some(style) = resolve_style(value) {
        node = apply_text_style(node, style);
    }
    ctx.mark_field(node, field)
}

fn apply_text_style(mut node: VNode, style: &TextStyle) -> VNode {
    let pairs = [
        ("font-size", &style.font_size),
        ("font-weight", &style.font_weight),
        ("font-family", &style.font_family),
        ("color", &style.color),
    ];
    for (key, value) in pairs {
        if let Some(value) = value {
            node = node.with_style(key, value.as_str());
        }
    }
    node
}

pub fn button_node(button: &ButtonValue, ctx: &RenderContext) -> VNode {
    let label = button.label(ctx.language);
    if label.is_empty() && !ctx.is_builder() {
        return VNode::Empty;
    }

    let class = format!("btn btn-{} btn-{}", button.variant().as_str(), button.size().as_str());
    let node = match &button.href {
        Some(href) => VNode::element("a").with_attr("href", href.as_str()),
        None => VNode::element("button").with_attr("type", "button"),
    };
    node.with_class(class).with_child(VNode::text(label))
}

pub(crate) fn optional_button(button: Option<&ButtonValue>, field: &str, ctx: &RenderContext) -> VNode {
    match button {
        Some(button) => ctx.mark_field(button_node(button, ctx), field),
        None => VNode::Empty,
    }
}

pub(crate) fn image_node(src: Option<&str>, alt: &str, field: &str, ctx: &RenderContext) -> VNode {
    match src.filter(|s| !s.is_empty()) {
        Some(src) => ctx.mark_field(
            VNode::element("img").with_attr("src", src).with_attr("alt", alt),
            field,
        ),
        None => VNode::Empty,
    }
}

pub(crate) fn default_true() -> bool {
    true
}
