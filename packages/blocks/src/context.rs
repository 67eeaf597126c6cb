use crate::vdom::VNode;
use serde::{Deserialize, Serialize};
use storefront_document::{Language, TextValue};

/// Whether a page is shown to visitors or opened in the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Render,
    Builder,
}

impl ViewMode {
    pub fn is_builder(self) -> bool {
        self == ViewMode::Builder
    }
}

/// Product data supplied by the catalog API for product blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(deserialize_with = "storefront_document::lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub name: Option<TextValue>,
    #[serde(default, deserialize_with = "storefront_document::lenient::text")]
    pub description: Option<TextValue>,
    /// Preformatted by the catalog, e.g. "129 000 UZS"
    #[serde(default, deserialize_with = "storefront_document::lenient::string")]
    pub price: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl ProductCard {
    pub fn href(&self) -> String {
        format!("/product/{}", self.slug.as_deref().unwrap_or(&self.id))
    }
}

/// Inputs shared by every block renderer
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub language: Language,
    pub mode: ViewMode,
    pub products: Vec<ProductCard>,
    /// Product shown by product detail blocks
    pub product: Option<ProductCard>,
}

impl RenderContext {
    pub fn new(language: Language, mode: ViewMode) -> Self {
        Self {
            language,
            mode,
            ..Default::default()
        }
    }

    pub fn with_products(mut self, products: Vec<ProductCard>) -> Self {
        self.products = products;
        self
    }

    pub fn with_product(mut self, product: ProductCard) -> Self {
        self.product = Some(product);
        self
    }

    pub fn is_builder(&self) -> bool {
        self.mode.is_builder()
    }

    /// Tag `node` with the prop key it displays so the builder can edit it in place
    pub fn mark_field(&self, node: VNode, field: &str) -> VNode {
        if self.is_builder() && !node.is_empty() {
            node.with_attr("data-field", field)
        } else {
            node
        }
    }
}
