use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name a package must carry to be treated as an executable program.
pub const COMMAND_PACKAGE_NAME: &str = "main";

/// Whether a package is imported by others or built into a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageRole {
    Library,
    Command,
}

/// Source position of a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub file: String,
    pub line: u32,
}

/// A declaration node as produced by the upstream parser.
///
/// `text` is the source text of the declaration without its doc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decl {
    pub text: String,
    pub pos: Option<Position>,
}

impl Decl {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: None,
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.pos = Some(Position {
            file: file.into(),
            line,
        });
        self
    }
}

/// A constant or variable group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    pub doc: String,
    pub names: Vec<String>,
    pub decl: Decl,
}

/// A function or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Func {
    pub doc: String,
    pub name: String,
    /// Receiver text such as `r *Ring`; empty for plain functions
    pub recv: String,
    pub decl: Decl,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Type {
    pub doc: String,
    pub name: String,
    pub decl: Decl,
    pub consts: Vec<Value>,
    pub vars: Vec<Value>,
    /// Functions returning the type, such as constructors
    pub funcs: Vec<Func>,
    pub methods: Vec<Func>,
    pub examples: Vec<Example>,
}

/// A comment attached to an example body, placed before body line `line`
/// (zero-based).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub line: usize,
    pub text: String,
}

/// A runnable example attached to the package or to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    pub name: String,
    pub suffix: String,
    pub doc: String,
    pub code: String,
    pub comments: Vec<Comment>,
    pub output: String,
    /// Output was declared but is empty
    pub empty_output: bool,
    /// Output lines may appear in any order
    pub unordered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub uid: String,
    pub body: String,
}

/// Documentation model of a single package.
///
/// Notes are keyed by marker (`BUG`, `TODO`, ...) and iterate in marker
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub name: String,
    pub import_path: String,
    pub doc: String,
    pub consts: Vec<Value>,
    pub vars: Vec<Value>,
    pub funcs: Vec<Func>,
    pub types: Vec<Type>,
    pub examples: Vec<Example>,
    pub notes: BTreeMap<String, Vec<Note>>,
}

impl Package {
    pub fn role(&self) -> PackageRole {
        if self.name == COMMAND_PACKAGE_NAME {
            PackageRole::Command
        } else {
            PackageRole::Library
        }
    }

    /// Whether the package has any constant, variable, function or type.
    pub fn has_declarations(&self) -> bool {
        !(self.consts.is_empty()
            && self.vars.is_empty()
            && self.funcs.is_empty()
            && self.types.is_empty())
    }

    /// Copy holding only what a command's documentation shows: its
    /// overview and notes.
    pub fn without_declarations(&self) -> Package {
        Package {
            name: self.name.clone(),
            import_path: self.import_path.clone(),
            doc: self.doc.clone(),
            notes: self.notes.clone(),
            ..Package::default()
        }
    }
}
