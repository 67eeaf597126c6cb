//! # Site Document Model
//!
//! A page is an ordered list of blocks. Each block carries an open prop bag
//! whose shape is owned by the block's schema, plus an optional tree of
//! primitive components for fine-grained editing inside the block.
//!
//! Type tags are stored as strings so that documents written by newer
//! builders (unknown block or component types, extra keys) survive a
//! load/save cycle untouched. [`BlockType`] and [`ComponentKind`] are the
//! closed sets this crate understands.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub type PropBag = Map<String, Value>;

/// Primitive element types that can live inside a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Text,
    Button,
    Image,
    Row,
}

impl ComponentKind {
    pub fn tag(self) -> &'static str {
        match self {
            ComponentKind::Text => "text",
            ComponentKind::Button => "button",
            ComponentKind::Image => "image",
            ComponentKind::Row => "row",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(ComponentKind::Text),
            "button" => Some(ComponentKind::Button),
            "image" => Some(ComponentKind::Image),
            "row" => Some(ComponentKind::Row),
            _ => None,
        }
    }
}

/// Nested editable element owned by a block or another component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    #[serde(default, deserialize_with = "crate::lenient::id")]
    pub id: String,

    #[serde(rename = "type", default, deserialize_with = "crate::lenient::id")]
    pub kind: String,

    #[serde(default, deserialize_with = "crate::lenient::props")]
    pub props: PropBag,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::bag")]
    pub style: Option<PropBag>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::optional_list"
    )]
    pub children: Option<Vec<ComponentInstance>>,

    /// Keys this crate does not model, kept for forward compatibility
    #[serde(flatten)]
    pub extra: PropBag,
}

impl ComponentInstance {
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind: kind.tag().to_string(),
            props: PropBag::new(),
            style: None,
            children: None,
            extra: PropBag::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: ComponentInstance) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn component_kind(&self) -> Option<ComponentKind> {
        ComponentKind::from_tag(&self.kind)
    }

    pub fn children(&self) -> &[ComponentInstance] {
        self.children.as_deref().unwrap_or(&[])
    }
}

macro_rules! block_types {
    ($($variant:ident => $tag:literal, $label:literal;)*) => {
        /// Block types known to the builder
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BlockType {
            $($variant,)*
        }

        impl BlockType {
            pub const ALL: &'static [BlockType] = &[$(BlockType::$variant,)*];

            pub fn tag(self) -> &'static str {
                match self {
                    $(BlockType::$variant => $tag,)*
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(BlockType::$variant => $label,)*
                }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(BlockType::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

block_types! {
    HeroSection => "heroSection", "Hero";
    HeroSplit => "heroSplit", "Hero (split)";
    HeroMinimal => "heroMinimal", "Hero (minimal)";
    Navigation => "navigation", "Navigation";
    Testimonials => "testimonials", "Testimonials";
    TestimonialsGrid => "testimonialsGrid", "Testimonials (grid)";
    ProductsList => "productsList", "Products";
    ProductDetail => "productDetail", "Product detail";
    ProductDetailGallery => "productDetailGallery", "Product detail (gallery)";
    Footer => "footer", "Footer";
    FooterMinimal => "footerMinimal", "Footer (minimal)";
    TextBlock => "textBlock", "Text";
    TextColumns => "textColumns", "Text (columns)";
}

impl BlockType {
    pub fn is_footer(self) -> bool {
        matches!(self, BlockType::Footer | BlockType::FooterMinimal)
    }

    pub fn is_navigation(self) -> bool {
        self == BlockType::Navigation
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Top-level content unit on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInstance {
    #[serde(default, deserialize_with = "crate::lenient::id")]
    pub id: String,

    #[serde(rename = "type", default, deserialize_with = "crate::lenient::id")]
    pub block_type: String,

    #[serde(default, deserialize_with = "crate::lenient::props")]
    pub props: PropBag,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::optional_list"
    )]
    pub children: Option<Vec<ComponentInstance>>,

    #[serde(flatten)]
    pub extra: PropBag,
}

impl BlockInstance {
    pub fn new(id: impl Into<String>, block_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            props: PropBag::new(),
            children: None,
            extra: PropBag::new(),
        }
    }

    pub fn with_props(mut self, props: PropBag) -> Self {
        self.props = props;
        self
    }

    pub fn with_child(mut self, child: ComponentInstance) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Known type, or `None` for tags this build does not understand
    pub fn kind(&self) -> Option<BlockType> {
        BlockType::from_tag(&self.block_type)
    }

    pub fn is_footer(&self) -> bool {
        self.kind().is_some_and(BlockType::is_footer)
    }

    pub fn is_navigation(&self) -> bool {
        self.kind().is_some_and(BlockType::is_navigation)
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn children(&self) -> &[ComponentInstance] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

impl FromStr for ColorMode {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(DocumentError::UnknownColorMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub sans: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub serif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub mono: Option<String>,
}

impl FontConfig {
    pub fn is_empty(&self) -> bool {
        self.sans.is_none() && self.serif.is_none() && self.mono.is_none()
    }
}

/// Per-site theme selection and overrides.
///
/// Color maps are keyed by semantic role (`primary`, `cardForeground`,
/// `chart1`, ...). Unknown roles are kept but ignored during resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub preset: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "crate::lenient::string_map")]
    pub light: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "crate::lenient::string_map")]
    pub dark: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "FontConfig::is_empty", deserialize_with = "crate::lenient::or_default")]
    pub fonts: FontConfig,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub radius: Option<String>,

    /// Whether visitors may switch to dark mode
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::flag")]
    pub dark_mode_enabled: Option<bool>,

    /// Mode forced when dark mode switching is disabled
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::color_mode")]
    pub default_mode: Option<ColorMode>,

    #[serde(flatten)]
    pub extra: PropBag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub og_image: Option<String>,
}

/// One page of the storefront
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default, deserialize_with = "crate::lenient::id")]
    pub id: String,

    #[serde(default, deserialize_with = "crate::lenient::id")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::string")]
    pub route: Option<String>,

    #[serde(default, deserialize_with = "crate::lenient::list")]
    pub blocks: Vec<BlockInstance>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::object")]
    pub theme: Option<ThemeConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "crate::lenient::object")]
    pub seo: Option<SeoMeta>,

    #[serde(flatten)]
    pub extra: PropBag,
}

impl SiteConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_block(mut self, block: BlockInstance) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn find_block(&self, block_id: &str) -> Option<&BlockInstance> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn block_index(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    /// The page's navigation block (first one if several exist)
    pub fn navigation(&self) -> Option<&BlockInstance> {
        self.blocks.iter().find(|b| b.is_navigation())
    }

    /// The footer that gets rendered.
    ///
    /// When more than one footer-family block exists the last one in array
    /// order wins.
    pub fn active_footer(&self) -> Option<&BlockInstance> {
        self.blocks.iter().rev().find(|b| b.is_footer())
    }

    /// Blocks rendered between navigation and footer, in array order
    pub fn body_blocks(&self) -> impl Iterator<Item = &BlockInstance> {
        self.blocks
            .iter()
            .filter(|b| !b.is_navigation() && !b.is_footer())
    }
}
