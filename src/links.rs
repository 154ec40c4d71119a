use std::sync::Arc;

use crate::model::Decl;
use crate::render::SourceLinkFn;

/// Source links of the form `<base>/<file>#L<line>`.
///
/// Declarations without a position get no link.
pub fn source_link_from_base(base: &str) -> SourceLinkFn {
    let base = base.trim_end_matches('/').to_string();
    Arc::new(move |decl: &Decl| match &decl.pos {
        Some(pos) if !pos.file.is_empty() => format!(
            "{}/{}#L{}",
            base,
            pos.file.trim_start_matches('/'),
            pos.line
        ),
        _ => String::new(),
    })
}
