use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::error::RenderError;
use crate::examples::ExampleIndex;
use crate::limit::LimitBuffer;
use crate::model::{Decl, Package, PackageRole};
use crate::renderer::{escape, Hooks, HtmlRenderer, Renderer, TemplateData, PACKAGE_TEMPLATE};

const MEGABYTE: u64 = 1000 * 1000;

/// Size limit used when [`RenderOptions::limit`] is zero.
pub const DEFAULT_LIMIT: u64 = 10 * MEGABYTE;

/// Resolves a declaration to a source URL; an empty string means no link.
pub type SourceLinkFn = Arc<dyn Fn(&Decl) -> String + Send + Sync>;

/// Options for [`render`].
#[derive(Clone, Default)]
pub struct RenderOptions {
    pub source_link: Option<SourceLinkFn>,
    /// Maximum document size in bytes; zero selects [`DEFAULT_LIMIT`].
    pub limit: u64,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_source_link<F>(mut self, source_link: F) -> Self
    where
        F: Fn(&Decl) -> String + Send + Sync + 'static,
    {
        self.source_link = Some(Arc::new(source_link));
        self
    }

    pub fn effective_limit(&self) -> u64 {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("source_link", &self.source_link.as_ref().map(|_| "<fn>"))
            .field("limit", &self.limit)
            .finish()
    }
}

/// Render package documentation HTML with the default [`HtmlRenderer`].
///
/// Fails with [`RenderError::TooLarge`] when the document exceeds the
/// configured limit, even if rendering also failed for another reason.
pub fn render(package: &Package, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    render_with(package, &HtmlRenderer, options)
}

/// Render package documentation HTML using `renderer` for declarations,
/// prose and example code.
#[instrument(skip_all, fields(package = %package.name, limit = options.effective_limit()))]
pub fn render_with(
    package: &Package,
    renderer: &dyn Renderer,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    let limit = options.effective_limit();

    // Commands show their overview and notes but no declarations.
    let package: Cow<'_, Package> = match package.role() {
        PackageRole::Command => {
            debug!("suppressing declarations of command package");
            Cow::Owned(package.without_declarations())
        }
        PackageRole::Library => Cow::Borrowed(package),
    };

    let examples = ExampleIndex::build(&package);
    debug!(examples = examples.len(), "collected examples");

    let source_link = |name: &str, decl: &Decl| -> String {
        let link = options
            .source_link
            .as_ref()
            .map(|resolve| resolve(decl))
            .unwrap_or_default();
        if link.is_empty() {
            escape(name)
        } else {
            format!(
                "<a class=\"Documentation-source\" href=\"{}\">{}</a>",
                escape(&link),
                escape(name)
            )
        }
    };

    let mut buf = LimitBuffer::new(limit);
    let result = PACKAGE_TEMPLATE
        .bind(Hooks {
            renderer,
            source_link: &source_link,
        })
        .execute(
            &TemplateData {
                package: &package,
                examples: &examples,
            },
            &mut buf,
        );

    if buf.exceeded() {
        warn!(
            overflow = buf.remaining().unsigned_abs(),
            "rendered documentation exceeds size limit"
        );
        return Err(RenderError::TooLarge { limit });
    }
    result.map_err(RenderError::Failed)?;

    Ok(buf.into_bytes())
}
