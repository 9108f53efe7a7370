//! Template synthesis.
//!
//! Every qualifying type name becomes two pieces of C#: a serializer context
//! declaration and a row of the handler's lookup table. The name is
//! substituted as is; nothing checks that it is a valid identifier.

use crate::builder::{CodeBuilder, Indent};

/// Which part of the handler a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// `[JsonSerializable]` context class, placed in the contextualization region.
    Context,
    /// `{ typeof(X), ... }` row of the lookup table.
    Entry,
}

/// Generated text bound to one type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    name: String,
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    /// The serializer context declaration for `name`.
    pub fn context(name: &str) -> Self {
        let mut b = CodeBuilder::new(Indent::CSHARP);
        b.push_blank()
            .push_indent()
            .push_line(&format!("[JsonSerializable(typeof({}))]", name))
            .push_line(&format!(
                "public partial class {}Context : JsonSerializerContext {{ }}",
                name
            ));

        Self {
            name: name.to_string(),
            kind: FragmentKind::Context,
            text: b.build(),
        }
    }

    /// The lookup table row for `name`, without a line terminator.
    pub fn entry(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FragmentKind::Entry,
            text: format!(
                "        {{ typeof({0}), new {0}Context().GetTypeInfo(typeof({0})) }},",
                name
            ),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// The fragments synthesized for a list of names, in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub contexts: Vec<Fragment>,
    pub entries: Vec<Fragment>,
}

impl Fragments {
    pub fn synthesize<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            contexts: names.iter().map(|n| Fragment::context(n.as_ref())).collect(),
            entries: names.iter().map(|n| Fragment::entry(n.as_ref())).collect(),
        }
    }

    /// Number of names the fragments were synthesized for.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in synthesis order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Fragment::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_fragment_text() {
        let fragment = Fragment::context("Order");

        assert_eq!(fragment.kind(), FragmentKind::Context);
        assert_eq!(
            fragment.as_str(),
            "\n    [JsonSerializable(typeof(Order))]\n    public partial class OrderContext : JsonSerializerContext { }\n"
        );
    }

    #[test]
    fn test_entry_fragment_text() {
        let fragment = Fragment::entry("Order");

        assert_eq!(fragment.kind(), FragmentKind::Entry);
        assert_eq!(
            fragment.as_str(),
            "        { typeof(Order), new OrderContext().GetTypeInfo(typeof(Order)) },"
        );
    }

    #[test]
    fn test_synthesize_keeps_name_order() {
        let fragments = Fragments::synthesize(&["B", "A"]);

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments.names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(fragments.contexts[1].name(), "A");
    }

    #[test]
    fn test_name_is_not_validated() {
        let fragment = Fragment::entry("List<int>");
        assert!(fragment.as_str().contains("typeof(List<int>)"));
    }
}
