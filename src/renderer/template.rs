//! Layout of the package documentation page.
//!
//! The layout is compiled once into [`PACKAGE_TEMPLATE`] and never changes
//! afterwards. Each render binds its own [`Hooks`] to it, so concurrent
//! renders never see each other's renderer or source-link resolver.

use std::io::Write;
use std::sync::LazyLock;

use anyhow::Result;
use tracing::trace;

use crate::examples::{ExampleIndex, IndexedExample};
use crate::model::{Decl, Func, Package, Value};
use crate::renderer::components::escape;
use crate::renderer::traits::Renderer;

/// The compiled package layout shared by all renders.
pub static PACKAGE_TEMPLATE: LazyLock<Template> = LazyLock::new(Template::compile);

/// Top-level parts of the page, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Nav,
    Overview,
    Index,
    Examples,
    Declarations,
    Notes,
}

impl Section {
    const ORDER: [Section; 6] = [
        Section::Nav,
        Section::Overview,
        Section::Index,
        Section::Examples,
        Section::Declarations,
        Section::Notes,
    ];

    /// Anchor and title of sections linked from the navigation list.
    pub fn anchor(self) -> Option<(&'static str, &'static str)> {
        match self {
            Section::Overview => Some(("pkg-overview", "Overview")),
            Section::Index => Some(("pkg-index", "Index")),
            Section::Examples => Some(("pkg-examples", "Examples")),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Template {
    sections: Vec<Section>,
    nav: Vec<Section>,
}

impl Template {
    pub fn compile() -> Self {
        let sections = Section::ORDER.to_vec();
        let nav = sections
            .iter()
            .copied()
            .filter(|section| section.anchor().is_some())
            .collect();
        Self { sections, nav }
    }

    /// Attach call-specific hooks to the shared layout.
    pub fn bind<'t>(&'t self, hooks: Hooks<'t>) -> BoundTemplate<'t> {
        BoundTemplate {
            template: self,
            hooks,
        }
    }
}

/// Rendering hooks bound for a single render.
#[derive(Clone, Copy)]
pub struct Hooks<'h> {
    pub renderer: &'h dyn Renderer,
    /// Markup for a declaration name, linked to its source when possible
    pub source_link: &'h dyn Fn(&str, &Decl) -> String,
}

/// Per-render input of the template.
pub struct TemplateData<'a> {
    pub package: &'a Package,
    pub examples: &'a ExampleIndex<'a>,
}

impl TemplateData<'_> {
    fn has_overview(&self) -> bool {
        !self.package.doc.is_empty() || !self.examples.for_parent("").is_empty()
    }

    /// Whether `section` produces any output for this package.
    pub fn present(&self, section: Section) -> bool {
        let package = self.package;
        match section {
            Section::Nav => {
                !package.doc.is_empty() || package.has_declarations() || !self.examples.is_empty()
            }
            Section::Overview => self.has_overview(),
            Section::Index | Section::Declarations => package.has_declarations(),
            Section::Examples => !self.examples.is_empty(),
            Section::Notes => !package.notes.is_empty(),
        }
    }
}

/// A template bound to the hooks of one render.
pub struct BoundTemplate<'t> {
    template: &'t Template,
    hooks: Hooks<'t>,
}

impl BoundTemplate<'_> {
    /// Write the whole page. Only hook failures and writer errors are
    /// reported; the caller judges the output size.
    pub fn execute<W: Write>(&self, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        for &section in &self.template.sections {
            if !data.present(section) {
                continue;
            }
            trace!(?section, "writing section");
            match section {
                Section::Nav => self.write_nav(data, w)?,
                Section::Overview => self.write_overview(data, w)?,
                Section::Index => self.write_index(data, w)?,
                Section::Examples => self.write_example_list(data, w)?,
                Section::Declarations => self.write_declarations(data, w)?,
                Section::Notes => self.write_notes(data, w)?,
            }
        }
        Ok(())
    }

    fn write_nav<W: Write>(&self, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        w.write_all(b"<ul>\n")?;
        for &section in &self.template.nav {
            if !data.present(section) {
                continue;
            }
            if let Some((id, title)) = section.anchor() {
                writeln!(w, "<li><a href=\"#{}\">{}</a></li>", id, title)?;
            }
        }
        w.write_all(b"</ul>\n")?;
        Ok(())
    }

    fn write_overview<W: Write>(&self, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        write_anchored_heading(w, "h2", "pkg-overview", "Overview")?;
        w.write_all(b"\n")?;
        writeln!(w, "{}", self.hooks.renderer.doc_html(&data.package.doc)?)?;
        self.write_examples(data.examples.for_parent(""), w)
    }

    fn write_index<W: Write>(&self, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        let package = data.package;

        write_anchored_heading(w, "h2", "pkg-index", "Index")?;
        w.write_all(b"\n")?;
        w.write_all(b"<ul>\n")?;
        if !package.consts.is_empty() {
            w.write_all(b"<li><a href=\"#pkg-constants\">Constants</a></li>\n")?;
        }
        if !package.vars.is_empty() {
            w.write_all(b"<li><a href=\"#pkg-variables\">Variables</a></li>\n")?;
        }
        for func in &package.funcs {
            self.write_index_entry(&func.name, &func.decl, w)?;
        }
        for ty in &package.types {
            let name = escape(&ty.name);
            writeln!(w, "<li><a href=\"#{}\">type {}</a></li>", name, name)?;
            if !ty.funcs.is_empty() {
                w.write_all(b"<ul>\n")?;
                for func in &ty.funcs {
                    self.write_index_entry(&func.name, &func.decl, w)?;
                }
                w.write_all(b"</ul>\n")?;
            }
            if !ty.methods.is_empty() {
                w.write_all(b"<ul>\n")?;
                for method in &ty.methods {
                    let id = format!("{}.{}", ty.name, method.name);
                    self.write_index_entry(&id, &method.decl, w)?;
                }
                w.write_all(b"</ul>\n")?;
            }
        }
        for marker in package.notes.keys() {
            let marker = escape(marker);
            writeln!(w, "<li><a href=\"#pkg-note-{}\">{}s</a></li>", marker, marker)?;
        }
        w.write_all(b"</ul>\n")?;
        Ok(())
    }

    fn write_index_entry<W: Write>(&self, id: &str, decl: &Decl, w: &mut W) -> Result<()> {
        writeln!(
            w,
            "<li><a href=\"#{}\">{}</a></li>",
            escape(id),
            self.hooks.renderer.synopsis(decl)?
        )?;
        Ok(())
    }

    fn write_example_list<W: Write>(&self, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        write_anchored_heading(w, "h3", "pkg-examples", "Examples")?;
        w.write_all(b"<ul>\n")?;
        for example in data.examples.list() {
            let label = if example.parent_id.is_empty() {
                "Package"
            } else {
                example.parent_id.as_str()
            };
            write!(w, "<li><a href=\"#{}\">{}", escape(&example.id), escape(label))?;
            if !example.suffix.is_empty() {
                write!(w, " ({})", escape(example.suffix))?;
            }
            w.write_all(b"</a></li>\n")?;
        }
        w.write_all(b"</ul>\n")?;
        Ok(())
    }

    fn write_declarations<W: Write>(&self, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        let package = data.package;

        if !package.consts.is_empty() {
            write_anchored_heading(w, "h3", "pkg-constants", "Constants")?;
        }
        self.write_values(&package.consts, w)?;

        if !package.vars.is_empty() {
            write_anchored_heading(w, "h3", "pkg-variables", "Variables")?;
        }
        self.write_values(&package.vars, w)?;

        for func in &package.funcs {
            self.write_func(func, data, w)?;
        }

        for ty in &package.types {
            let link = (self.hooks.source_link)(&ty.name, &ty.decl);
            self.write_heading(&ty.name, &format!("type {}", link), w)?;
            self.write_decl(&ty.doc, &ty.decl, w)?;
            self.write_examples(data.examples.for_parent(&ty.name), w)?;

            self.write_values(&ty.consts, w)?;
            self.write_values(&ty.vars, w)?;
            for func in &ty.funcs {
                self.write_func(func, data, w)?;
            }
            for method in &ty.methods {
                let id = format!("{}.{}", ty.name, method.name);
                let link = (self.hooks.source_link)(&method.name, &method.decl);
                self.write_heading(&id, &format!("func ({}) {}", escape(&method.recv), link), w)?;
                self.write_decl(&method.doc, &method.decl, w)?;
                self.write_examples(data.examples.for_parent(&id), w)?;
            }
        }
        Ok(())
    }

    fn write_func<W: Write>(&self, func: &Func, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        let link = (self.hooks.source_link)(&func.name, &func.decl);
        self.write_heading(&func.name, &format!("func {}", link), w)?;
        self.write_decl(&func.doc, &func.decl, w)?;
        self.write_examples(data.examples.for_parent(&func.name), w)
    }

    fn write_values<W: Write>(&self, values: &[Value], w: &mut W) -> Result<()> {
        for value in values {
            self.write_decl(&value.doc, &value.decl, w)?;
        }
        Ok(())
    }

    /// `title` is trusted markup.
    fn write_heading<W: Write>(&self, id: &str, title: &str, w: &mut W) -> Result<()> {
        let id = escape(id);
        writeln!(w, "<h3 id=\"{}\">{} <a href=\"#{}\">¶</a></h3>", id, title, id)?;
        Ok(())
    }

    fn write_decl<W: Write>(&self, doc: &str, decl: &Decl, w: &mut W) -> Result<()> {
        let out = self.hooks.renderer.decl_html(doc, decl)?;
        w.write_all(out.decl.as_bytes())?;
        w.write_all(out.doc.as_bytes())?;
        w.write_all(b"\n")?;
        Ok(())
    }

    fn write_examples<W: Write>(&self, examples: &[IndexedExample<'_>], w: &mut W) -> Result<()> {
        let renderer = self.hooks.renderer;
        for example in examples {
            let id = escape(&example.id);
            writeln!(w, "<details id=\"{}\" class=\"example\">", id)?;
            w.write_all(b"<summary class=\"example-header\">Example")?;
            if !example.suffix.is_empty() {
                write!(w, " ({})", escape(example.suffix))?;
            }
            writeln!(w, " <a href=\"#{}\">¶</a></summary>", id)?;
            w.write_all(b"<div class=\"example-body\">\n")?;
            if !example.example.doc.is_empty() {
                writeln!(w, "{}", renderer.doc_html(&example.example.doc)?)?;
            }
            w.write_all(b"<p>Code:</p>\n")?;
            writeln!(w, "{}", renderer.code_html(example.code(), example.comments())?)?;
            if !example.example.output.is_empty() || example.example.empty_output {
                let label = if example.example.unordered {
                    "Unordered output:"
                } else {
                    "Output:"
                };
                writeln!(w, "<p>{}</p>", label)?;
                writeln!(w, "<pre>\n{}</pre>", escape(&example.example.output))?;
            }
            w.write_all(b"</div>\n</details>\n\n")?;
        }
        Ok(())
    }

    fn write_notes<W: Write>(&self, data: &TemplateData<'_>, w: &mut W) -> Result<()> {
        for (marker, notes) in &data.package.notes {
            let marker = escape(marker);
            let id = format!("pkg-note-{}", marker);
            write_anchored_heading(w, "h2", &id, &format!("{}s", marker))?;
            w.write_all(b"<ul class=\"Documentation-notes\">\n")?;
            for note in notes {
                writeln!(w, "<li>{}</li>", self.hooks.renderer.doc_html(&note.body)?)?;
            }
            w.write_all(b"</ul>\n")?;
        }
        Ok(())
    }
}

/// `<tag id="id">title ¶</tag>` with the pilcrow linking to the heading.
fn write_anchored_heading<W: Write>(w: &mut W, tag: &str, id: &str, title: &str) -> Result<()> {
    writeln!(w, "<{tag} id=\"{id}\">{title} <a href=\"#{id}\">¶</a></{tag}>")?;
    Ok(())
}
