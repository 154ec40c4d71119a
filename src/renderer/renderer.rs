use anyhow::Result;

use crate::model::{Comment, Decl};
use crate::renderer::components::*;
use crate::renderer::traits::*;

/// Default [`Renderer`] producing plain HTML blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn synopsis(&self, decl: &Decl) -> Result<String> {
        Ok(escape(&SynopsisRenderer.one_line(&decl.text)))
    }

    fn doc_html(&self, doc: &str) -> Result<String> {
        Ok(DocRenderer.render_html(doc))
    }

    fn decl_html(&self, doc: &str, decl: &Decl) -> Result<DeclHtml> {
        Ok(DeclHtml {
            decl: format!("<pre>\n{}\n</pre>\n", escape(decl.text.trim_end())),
            doc: DocRenderer.render_html(doc),
        })
    }

    fn code_html(&self, code: &str, comments: &[Comment]) -> Result<String> {
        let merged = merge_comments(code, comments)?;
        Ok(format!(
            "<pre class=\"Documentation-exampleCode\">\n{}</pre>\n",
            escape(&merged)
        ))
    }
}
