pub mod edit;
pub mod init;
pub mod render;
pub mod theme;
pub mod validate;

pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
pub use theme::{theme, ThemeArgs};
pub use validate::{validate, ValidateArgs};
