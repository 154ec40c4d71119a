use anyhow::Result;

use crate::model::{Comment, Decl};

/// Markup for a declaration, split into its code and prose parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclHtml {
    pub decl: String,
    pub doc: String,
}

/// Low-level rendering of single declarations, prose and example code.
///
/// Everything returned is trusted markup and written to the document as is.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    /// One-line signature of a declaration, used in the index.
    fn synopsis(&self, decl: &Decl) -> Result<String>;

    /// Doc comment text as block markup.
    fn doc_html(&self, doc: &str) -> Result<String>;

    fn decl_html(&self, doc: &str, decl: &Decl) -> Result<DeclHtml>;

    /// Example body with its attached comments merged in.
    fn code_html(&self, code: &str, comments: &[Comment]) -> Result<String>;
}
