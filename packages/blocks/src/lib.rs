//! Block schemas, renderers and page rendering for storefront sites.
//!
//! A [`BlockRegistry`] maps block type tags to a [`BlockSchema`] (editable
//! fields and default props) and a render function producing a [`VNode`]
//! tree. The built-in storefront blocks are registered by
//! [`BlockRegistry::with_builtin_blocks`]; hosts may register more.

pub mod builtin;
pub mod components;
pub mod context;
pub mod defaults;
pub mod registry;
pub mod schema;
pub mod validator;
pub mod vdom;

pub use context::{ProductCard, RenderContext, ViewMode};
pub use defaults::{default_home_page, HOME_PAGE_BLOCKS};
pub use registry::{typed_props, BlockRegistry, RegistryEntry, RenderFn};
pub use schema::{BlockSchema, FieldDescriptor, InputKind};
pub use validator::{SchemaValidator, ValidationLevel, ValidationWarning};
pub use vdom::{escape_html, VNode};
