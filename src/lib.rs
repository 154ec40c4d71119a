//! # dochtml
//!
//! Renders the documentation model of a package (overview, constants,
//! variables, functions, types, methods, runnable examples and notes) into a
//! single HTML document with stable anchors and a bounded size.
//!
//! ```no_run
//! use dochtml::{load_package, render, source_link_from_base, RenderOptions};
//!
//! # fn main() -> anyhow::Result<()> {
//! let package = load_package("ring.json")?;
//! let options = RenderOptions {
//!     source_link: Some(source_link_from_base("https://src.example.com/ring")),
//!     limit: 0,
//! };
//! let html = render(&package, &options)?;
//! # let _ = html;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod examples;
pub mod limit;
pub mod links;
pub mod model;
pub mod render;
pub mod renderer;

pub use error::RenderError;
pub use examples::{example_id, ExampleIndex, IndexedExample};
pub use limit::LimitBuffer;
pub use links::source_link_from_base;
pub use model::*;
pub use render::{render, render_with, RenderOptions, SourceLinkFn, DEFAULT_LIMIT};
pub use renderer::{DeclHtml, HtmlRenderer, Renderer};
