//! Overwrite mode: the whole artifact from the fixed templates.

use super::template::{FOOTER, HEADER, MIDDLE};
use crate::{
    Fragments,
    builder::{CodeBuilder, Indent},
};

/// Render a complete artifact holding `fragments`.
///
/// Identical fragments always produce identical output.
pub fn render_fresh(fragments: &Fragments) -> String {
    let mut b = CodeBuilder::new(Indent::Tab);

    b.push_raw(HEADER).push_indent();
    for entry in &fragments.entries {
        b.push_line(entry.as_str());
    }
    b.push_dedent().push_raw(MIDDLE);
    for context in &fragments.contexts {
        b.push_line(context.as_str());
    }
    b.push_raw(FOOTER);

    b.build()
}
