//! Multi-line grouping.
//!
//! DA 2062 forms frequently wrap serial numbers or notes onto a second
//! printed line without a new item number. Grouping recovers the logical
//! record boundary using only the "does this line look like a new entry"
//! signal.

use super::classifier::starts_new_item;

/// An ordered group of lines describing one candidate item: a primary line
/// plus zero or more continuation lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGroup {
    pub lines: Vec<String>,
}

impl LineGroup {
    /// All lines joined with a single space.
    pub fn full_text(&self) -> String {
        self.lines.join(" ")
    }
}

/// Partition filtered, ordered lines into item groups.
///
/// A line that starts a new item closes any open group; a line that does
/// not is a continuation of the open group, or pre-item noise when no group
/// is open yet. The final group is flushed at end of input. Output order is
/// the top-to-bottom order of the page.
pub fn group_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LineGroup> {
    let mut groups = Vec::new();
    let mut current: Option<LineGroup> = None;

    for line in lines {
        let line = line.as_ref();

        if starts_new_item(line) {
            if let Some(group) = current.take() {
                groups.push(group);
            }
            current = Some(LineGroup {
                lines: vec![line.to_string()],
            });
        } else if let Some(group) = current.as_mut() {
            group.lines.push(line.to_string());
        }
        // No open group and not an item start: pre-item noise, dropped.
    }

    if let Some(group) = current {
        groups.push(group);
    }

    groups
}
