//! Source parser.
//!
//! Parses C# with tree-sitter and lowers the concrete syntax tree into the
//! [`Namespace`] forest. tree-sitter always produces a tree for text input, so
//! syntax errors do not stop lowering: declarations that survive inside
//! error-recovery nodes are still collected and the unit is flagged as
//! recovered.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use tree_sitter::{Language, Node, Parser};

use crate::{
    Error, Result,
    decl::{Annotation, Member, Namespace, TypeDecl, TypeKind},
    source::SourceFile,
    walker::{Marker, Walk, walk},
};

/// One parsed file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    /// The global namespace of the file.
    pub root: Namespace,
    /// Whether the parser had to recover from syntax errors.
    pub recovered: bool,
    /// Whether bytes that are not UTF-8 were replaced with U+FFFD.
    pub lossy: bool,
}

impl SourceUnit {
    /// Marker-annotated types of this unit, in document order.
    pub fn walk<'a>(&'a self, marker: &'a Marker) -> Walk<'a> {
        walk(&self.root, marker)
    }
}

/// Parser for C# source files.
pub struct SourceParser {
    parser: Parser,
}

impl SourceParser {
    /// Create a parser loaded with the C# grammar.
    ///
    /// # Errors
    ///
    /// Fails if the bundled grammar was built for an incompatible tree-sitter ABI.
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_c_sharp::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        Ok(Self { parser })
    }

    /// Decode and parse a discovered file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// a stray legacy-encoded character in a comment does not hide the
    /// declarations around it.
    pub fn parse_file(&mut self, file: &SourceFile) -> Result<SourceUnit> {
        let text = String::from_utf8_lossy(&file.bytes);
        let lossy = matches!(text, Cow::Owned(_));
        if lossy {
            tracing::debug!(path = %file.path.display(), "replaced invalid UTF-8");
        }

        let mut unit = self.parse(&file.path, &text)?;
        unit.lossy = lossy;
        Ok(unit)
    }

    /// Parse `text` as the contents of `path`.
    pub fn parse(&mut self, path: &Path, text: &str) -> Result<SourceUnit> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let tree = self.parser.parse(text, None).ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
        })?;
        let root = tree.root_node();

        let members = Lowering { src: text }.lower(root);

        let unit = SourceUnit {
            path: path.to_path_buf(),
            root: Namespace::global(members),
            recovered: root.has_error(),
            lossy: false,
        };
        tracing::debug!(
            path = %path.display(),
            recovered = unit.recovered,
            "parsed source file"
        );
        Ok(unit)
    }
}

/// Lowers tree-sitter nodes of one file into the declaration model.
struct Lowering<'src> {
    src: &'src str,
}

/// How the members gathered under a node are attached to the enclosing one.
enum Scope {
    /// The file root, a body, a conditional-compilation block or an
    /// error-recovery node: members belong to the enclosing scope.
    Inline,
    /// `namespace A { ... }`
    Block(String),
    /// `namespace A;`, which owns every declaration that follows it.
    FileScoped(String),
}

/// A node whose children are still being lowered.
struct Frame<'tree> {
    scope: Scope,
    children: std::vec::IntoIter<Node<'tree>>,
    members: Vec<Member>,
    /// Open file-scoped namespace collecting the following siblings.
    scoped: Option<Namespace>,
}

impl<'tree> Frame<'tree> {
    fn new(scope: Scope, node: Node<'tree>) -> Self {
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        Self {
            scope,
            children: children.into_iter(),
            members: Vec::new(),
            scoped: None,
        }
    }

    fn sink(&mut self) -> &mut Vec<Member> {
        match self.scoped.as_mut() {
            Some(ns) => &mut ns.members,
            None => &mut self.members,
        }
    }

    fn finish(mut self) -> (Scope, Vec<Member>) {
        if let Some(ns) = self.scoped.take() {
            self.members.push(Member::Namespace(ns));
        }
        (self.scope, self.members)
    }

    /// Attach the members of a finished child frame.
    fn close(&mut self, scope: Scope, members: Vec<Member>) {
        match scope {
            Scope::Inline => self.sink().extend(members),
            Scope::Block(name) => self
                .sink()
                .push(Member::Namespace(Namespace::with_members(name, members))),
            Scope::FileScoped(name) => {
                let ns = Namespace::with_members(name, members);
                if let Some(previous) = self.scoped.replace(ns) {
                    self.members.push(Member::Namespace(previous));
                }
            }
        }
    }
}

impl<'src> Lowering<'src> {
    fn text(&self, node: Node<'_>) -> &'src str {
        self.src.get(node.byte_range()).unwrap_or("")
    }

    /// Node text with whitespace removed (`App . Models` -> `App.Models`).
    fn compact(&self, node: Node<'_>) -> String {
        self.text(node).split_whitespace().collect()
    }

    fn name_of(&self, node: Node<'_>) -> String {
        node.child_by_field_name("name")
            .map(|name| self.compact(name))
            .unwrap_or_default()
    }

    /// Lower the whole file. Nesting is tracked on an explicit stack, so
    /// depth is bounded only by memory.
    fn lower(&self, root: Node<'_>) -> Vec<Member> {
        let mut stack = vec![Frame::new(Scope::Inline, root)];

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.children.next() {
                if let Some(nested) = self.visit(child, frame.sink()) {
                    stack.push(nested);
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let (scope, members) = done.finish();
            match stack.last_mut() {
                Some(parent) => parent.close(scope, members),
                None => return members,
            }
        }

        Vec::new()
    }

    /// Lower a type declaration into `sink`, or open a frame for a node
    /// that contains declarations.
    fn visit<'tree>(&self, node: Node<'tree>, sink: &mut Vec<Member>) -> Option<Frame<'tree>> {
        let scope = match node.kind() {
            "namespace_declaration" => Scope::Block(self.name_of(node)),
            "file_scoped_namespace_declaration" => Scope::FileScoped(self.name_of(node)),
            "declaration_list" | "ERROR" => Scope::Inline,
            kind if kind.starts_with("preproc_") => Scope::Inline,
            kind => {
                if let Some(decl) = TypeKind::from_node_kind(kind)
                    .and_then(|type_kind| self.type_decl(node, type_kind))
                {
                    sink.push(Member::Type(decl));
                }
                return None;
            }
        };
        Some(Frame::new(scope, node))
    }

    fn type_decl(&self, node: Node<'_>, kind: TypeKind) -> Option<TypeDecl> {
        let name = node
            .child_by_field_name("name")
            .map(|name| self.compact(name))
            .filter(|name| !name.is_empty())?;

        let mut annotations = Vec::new();
        let mut cursor = node.walk();
        for list in node.named_children(&mut cursor) {
            if list.kind() != "attribute_list" {
                continue;
            }
            let mut inner = list.walk();
            for attribute in list.named_children(&mut inner) {
                if attribute.kind() != "attribute" {
                    continue;
                }
                if let Some(attr_name) = attribute.child_by_field_name("name") {
                    annotations.push(Annotation::new(self.compact(attr_name)));
                }
            }
        }

        Some(TypeDecl {
            name,
            kind,
            annotations,
            line: node.start_position().row + 1,
        })
    }
}
