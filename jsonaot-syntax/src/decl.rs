//! Declaration model.
//!
//! A parsed file is a forest of namespaces holding type declarations, in the
//! order they appear in the source. Only types declared directly in a
//! namespace are members; types nested inside other types are not modelled.

use std::fmt;

use jsonaot_core::simple_name;

/// A namespace scope. The root of every file is the unnamed global namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Name as written (`App.Models` for `namespace App.Models`), empty for the global namespace.
    pub name: String,
    /// Child namespaces and type declarations in document order.
    pub members: Vec<Member>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn with_members(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// The unnamed global namespace holding `members`.
    pub fn global(members: Vec<Member>) -> Self {
        Self::with_members(String::new(), members)
    }

    /// Whether this is the global namespace, or a namespace whose name was
    /// lost to error recovery.
    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }

    /// Child namespaces, in document order.
    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.members.iter().filter_map(|m| match m {
            Member::Namespace(ns) => Some(ns),
            Member::Type(_) => None,
        })
    }

    /// Types declared directly in this namespace, in document order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Type(ty) => Some(ty),
            Member::Namespace(_) => None,
        })
    }
}

// Dropping nested namespaces one level at a time would recurse once per
// level; flatten the children into a work list instead.
impl Drop for Namespace {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.members);
        while let Some(member) = pending.pop() {
            if let Member::Namespace(mut ns) = member {
                pending.append(&mut ns.members);
            }
        }
    }
}

/// A member of a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Namespace(Namespace),
    Type(TypeDecl),
}

/// A type declaration and the attributes attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    pub annotations: Vec<Annotation>,
    /// 1-based line of the declaration (including its attributes).
    pub line: usize,
}

/// Kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Record,
    Interface,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Map a tree-sitter C# node kind to a type kind.
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::Class),
            "struct_declaration" => Some(Self::Struct),
            "record_declaration" | "record_struct_declaration" => Some(Self::Record),
            "interface_declaration" => Some(Self::Interface),
            "enum_declaration" => Some(Self::Enum),
            "delegate_declaration" => Some(Self::Delegate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute attached to a declaration (`[JsonAot]`, `[Obsolete("...")]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name as written, possibly qualified (`System.Text.JsonAot`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last identifier of the name, without namespace or type arguments.
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}
