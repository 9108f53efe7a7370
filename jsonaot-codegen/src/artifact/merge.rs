//! Append mode: splice fragments into an existing artifact.
//!
//! The existing text is split once into regions around the two anchors, and
//! fragments are emitted into the slots between them. Neither insertion can
//! shift the other, whichever anchor comes first in the file.

use super::Anchor;
use crate::Fragments;

enum Region<'a> {
    Text(&'a [&'a str]),
    Slot(Anchor),
}

/// Split `lines` into text regions with a slot after each anchor line.
fn regions<'a>(lines: &'a [&'a str]) -> Result<Vec<Region<'a>>, Anchor> {
    let mut slots = Vec::with_capacity(Anchor::ALL.len());
    for anchor in Anchor::ALL {
        let index = anchor.find(lines).ok_or(anchor)?;
        slots.push((index, anchor));
    }
    // Stable: two anchors on one line keep the declaration order above.
    slots.sort_by_key(|(index, _)| *index);

    let mut regions = Vec::with_capacity(slots.len() * 2 + 1);
    let mut start = 0;
    for (index, anchor) in slots {
        regions.push(Region::Text(&lines[start..=index]));
        regions.push(Region::Slot(anchor));
        start = index + 1;
    }
    regions.push(Region::Text(&lines[start..]));

    Ok(regions)
}

/// Insert `fragments` after the anchors of `existing`.
///
/// Context fragments follow the region anchor and entry fragments (tab
/// prefixed) follow the lookup table anchor, both in synthesis order. Lines
/// are rewritten with `\n` endings. Names already present are not detected,
/// so merging the same fragments twice yields two copies.
///
/// # Errors
///
/// Returns the first anchor that does not occur in `existing`.
pub fn splice(existing: &str, fragments: &Fragments) -> Result<String, Anchor> {
    let lines: Vec<&str> = existing.lines().collect();
    let regions = regions(&lines)?;

    let mut out = String::with_capacity(existing.len() + fragments.len() * 160);
    for region in regions {
        match region {
            Region::Text(lines) => {
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
            }
            Region::Slot(Anchor::Context) => {
                for context in &fragments.contexts {
                    out.push_str(context.as_str());
                    out.push('\n');
                }
            }
            Region::Slot(Anchor::Table) => {
                for entry in &fragments.entries {
                    out.push('\t');
                    out.push_str(entry.as_str());
                    out.push('\n');
                }
            }
        }
    }

    Ok(out)
}
