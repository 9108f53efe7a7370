//! Declaration walker.
//!
//! Depth-first, document-order traversal of a [`Namespace`] forest that yields
//! the types carrying a marker annotation. The traversal keeps its own stack,
//! so nesting depth is bounded only by memory.

use std::slice;

use jsonaot_core::{contains_ignore_case, fold_case};

use crate::decl::{Annotation, Member, Namespace, TypeDecl};

/// The token an annotation name must contain for its type to qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    token: String,
    folded: String,
}

impl Marker {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let folded = fold_case(&token);
        Self { token, folded }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Check whether the simple name of `annotation` contains the token,
    /// ignoring case.
    pub fn matches(&self, annotation: &Annotation) -> bool {
        let name = annotation.simple_name();
        name.contains(&self.token) || contains_ignore_case(name, &self.folded)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::new("JsonA")
    }
}

/// A type that carries the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub decl: &'a TypeDecl,
    /// The first annotation of `decl` that matched.
    pub annotation: &'a Annotation,
    /// Dotted path of the enclosing namespaces, empty for the global namespace.
    pub namespace: String,
}

struct Frame<'a> {
    /// Length of the shared path before this frame's namespace was appended.
    restore: usize,
    members: slice::Iter<'a, Member>,
}

/// Lazy iterator over the marker-annotated types of a namespace forest.
pub struct Walk<'a> {
    marker: &'a Marker,
    /// Dotted path of the innermost open frame.
    path: String,
    stack: Vec<Frame<'a>>,
}

/// Walk `root` depth-first in document order, yielding each type whose
/// annotations match `marker`.
pub fn walk<'a>(root: &'a Namespace, marker: &'a Marker) -> Walk<'a> {
    Walk {
        marker,
        path: root.name.clone(),
        stack: vec![Frame {
            restore: 0,
            members: root.members.iter(),
        }],
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(member) = frame.members.next() else {
                let restore = frame.restore;
                self.stack.pop();
                self.path.truncate(restore);
                continue;
            };

            match member {
                Member::Namespace(ns) => {
                    let restore = self.path.len();
                    if !ns.is_global() {
                        if !self.path.is_empty() {
                            self.path.push('.');
                        }
                        self.path.push_str(&ns.name);
                    }
                    tracing::debug!(namespace = %self.path, "entering namespace");
                    self.stack.push(Frame {
                        restore,
                        members: ns.members.iter(),
                    });
                }
                Member::Type(decl) => {
                    let Some(annotation) = decl.annotations.iter().find(|a| self.marker.matches(a))
                    else {
                        continue;
                    };
                    tracing::debug!(
                        name = %decl.name,
                        annotation = annotation.name(),
                        "found annotated type"
                    );
                    return Some(Match {
                        decl,
                        annotation,
                        namespace: self.path.clone(),
                    });
                }
            }
        }
    }
}
