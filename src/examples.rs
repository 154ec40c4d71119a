//! Discovery and ordering of the examples attached to a package.

use std::collections::HashMap;

use crate::model::{Comment, Example, Package};

/// Anchor of an example, derived from the declaration it belongs to and
/// its optional suffix. An empty `parent_id` means the package itself.
pub fn example_id(parent_id: &str, suffix: &str) -> String {
    match (parent_id.is_empty(), suffix.is_empty()) {
        (true, true) => "example-package".to_string(),
        (true, false) => format!("example-package-{}", suffix),
        (false, true) => format!("example-{}", parent_id),
        (false, false) => format!("example-{}-{}", parent_id, suffix),
    }
}

/// An example together with the anchors used to place it in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedExample<'a> {
    pub example: &'a Example,
    pub id: String,
    /// `""` for package examples, `Name` for functions and types,
    /// `Type.Method` for methods
    pub parent_id: String,
    pub suffix: &'a str,
}

impl<'a> IndexedExample<'a> {
    fn new(example: &'a Example, parent_id: &str) -> Self {
        Self {
            example,
            id: example_id(parent_id, &example.suffix),
            parent_id: parent_id.to_string(),
            suffix: &example.suffix,
        }
    }

    pub fn code(&self) -> &'a str {
        &self.example.code
    }

    pub fn comments(&self) -> &'a [Comment] {
        &self.example.comments
    }
}

/// Every example of a package, both as one ordered list and grouped by the
/// declaration they are attached to.
#[derive(Debug, Default)]
pub struct ExampleIndex<'a> {
    list: Vec<IndexedExample<'a>>,
    by_parent: HashMap<String, Vec<IndexedExample<'a>>>,
}

impl<'a> ExampleIndex<'a> {
    /// Collect the examples of `package`.
    ///
    /// `list` is sorted by parent id. The sort is stable, so examples that
    /// share a parent keep the order in which they were discovered; they are
    /// not re-ordered by suffix.
    pub fn build(package: &'a Package) -> Self {
        let mut index = ExampleIndex::default();

        index.extend("", &package.examples);
        for func in &package.funcs {
            index.extend(&func.name, &func.examples);
        }
        for ty in &package.types {
            index.extend(&ty.name, &ty.examples);
            for func in &ty.funcs {
                index.extend(&func.name, &func.examples);
            }
            for method in &ty.methods {
                let parent_id = format!("{}.{}", ty.name, method.name);
                index.extend(&parent_id, &method.examples);
            }
        }

        index.list.sort_by(|a, b| a.parent_id.cmp(&b.parent_id));
        index
    }

    fn extend(&mut self, parent_id: &str, examples: &'a [Example]) {
        for example in examples {
            let indexed = IndexedExample::new(example, parent_id);
            self.by_parent
                .entry(parent_id.to_string())
                .or_default()
                .push(indexed.clone());
            self.list.push(indexed);
        }
    }

    pub fn list(&self) -> &[IndexedExample<'a>] {
        &self.list
    }

    /// Examples attached to `parent_id`, in discovery order.
    pub fn for_parent(&self, parent_id: &str) -> &[IndexedExample<'a>] {
        self.by_parent
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }
}
