//! # Storefront Document
//!
//! Serializable page model for the storefront builder.
//!
//! ```text
//! SiteConfig
//!  ├─ blocks: [BlockInstance]        ordered, render order
//!  │    ├─ type tag + open prop bag  shape owned by the block schema
//!  │    └─ children: [ComponentInstance]   text / button / image / row
//!  ├─ theme: ThemeConfig             preset + overrides
//!  └─ seo: SeoMeta
//! ```
//!
//! Text inside prop bags is a [`TextValue`]: a plain string, a legacy
//! `{ text }` object, or a per-language object. [`resolve_text`] turns any of
//! them into a display string for the active [`Language`].

pub mod error;
pub mod id_generator;
pub mod language;
pub mod lenient;
pub mod model;
pub mod rich_text;
pub mod serializer;
pub mod tree;
pub mod visitor;

pub use error::{DocumentError, DocumentResult};
pub use id_generator::IdGenerator;
pub use language::Language;
pub use model::{
    BlockInstance, BlockType, ColorMode, ComponentInstance, ComponentKind, FontConfig, PropBag,
    SeoMeta, SiteConfig, ThemeConfig,
};
pub use rich_text::{
    resolve_json_text, resolve_style, resolve_text, ButtonSize, ButtonStyle, ButtonValue,
    ButtonVariant, LocalizedText, RichText, TextStyle, TextValue,
};
pub use serializer::{parse_site_config, parse_site_value, serialize_site_config, site_config_to_value};
pub use tree::{children_at_path_mut, component_at_path_mut, find_block_for_component, find_node, NodeMatch, NodeRef};
pub use visitor::{IdCollector, NodeCounter, Visitor};
